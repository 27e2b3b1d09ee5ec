use soroban_sdk::{contracttype, Address, Symbol, Val, Vec};

/// Strategy used to derive the required power from the current total power.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Quorum {
    /// Constant threshold regardless of total power
    Fixed(u64),
    /// Share of total power in basis points, rounded up
    Percentage(u32),
    /// Strictly more than half of total power
    Majority,
}

/// A proposed administrative call against a governed contract
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    /// Sequential id, starting at 0
    pub id: u64,
    /// Governor that proposed the call
    pub creator: Address,
    /// Contract the call is made against
    pub destination: Address,
    /// Native token amount sent to `destination` before the call
    pub value: i128,
    /// Function invoked on `destination`
    pub func: Symbol,
    /// Arguments passed to `func`
    pub args: Vec<Val>,
    /// Ledger timestamp at creation
    pub created_at: u64,
    /// Set once the call has been performed; never cleared
    pub executed: bool,
    /// Current power of the governors with an active confirmation; frozen
    /// once executed
    pub votes: u64,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Quorum,
    NativeToken,
    TransactionCount,
    Transaction(u64),
    // (transaction id, governor) -> active confirmation marker
    Confirmation(u64, Address),
    // transaction id -> governors with an active confirmation
    Confirmers(u64),
    Nonce,
}
