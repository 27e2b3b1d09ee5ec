use authorization::{require_self, verify_governor};
use shared::constants::{
    INTERFACE_ID_DISCOVERY, INTERFACE_ID_GOVERNANCE, INTERFACE_ID_OFFCHAIN, INTERFACE_ID_ONCHAIN,
};
use shared::validation::{
    safe_add, validate_initialized, validate_non_negative_amount, validate_not_initialized,
    validate_power,
};
use shared::GovernanceError;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Symbol, Val, Vec};

use crate::{
    executor, offchain, storage,
    threshold::{validate_quorum, ThresholdPolicy},
    types::{Quorum, Transaction},
};

#[contract]
pub struct GovernanceContract;

#[contractimpl]
impl GovernanceContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Bootstrap the governor set, threshold strategy and native token.
    /// Can only be called once, authorized by the deployer, and should be
    /// submitted in the same transaction as the deployment. Later changes go
    /// through self-governance.
    pub fn initialize(
        env: Env,
        deployer: Address,
        governors: Vec<Address>,
        powers: Vec<u64>,
        quorum: Quorum,
        native_token: Address,
    ) -> Result<(), GovernanceError> {
        deployer.require_auth();
        validate_not_initialized(storage::is_initialized(&env))?;
        if governors.is_empty() || governors.len() != powers.len() {
            return Err(GovernanceError::InvalidInput);
        }
        validate_quorum(&quorum)?;

        for (governor, power) in governors.iter().zip(powers.iter()) {
            validate_power(power)?;
            if authorization::is_governor(&env, &governor) {
                return Err(GovernanceError::DuplicateGovernor);
            }
            executor::apply_set_governor(&env, &governor, power)?;
        }

        storage::set_native_token(&env, &native_token);
        executor::apply_set_quorum(&env, &quorum)?;
        storage::bump_instance(&env);

        Ok(())
    }

    // ── Governance State ─────────────────────────────────────────────────────

    pub fn power_of(env: Env, governor: Address) -> u64 {
        authorization::power_of(&env, &governor)
    }

    pub fn total_power(env: Env) -> u64 {
        authorization::total_power(&env)
    }

    /// Power needed to execute, recomputed from the current total power.
    pub fn required(env: Env) -> Result<u64, GovernanceError> {
        Self::required_power(&env)
    }

    pub fn governors(env: Env) -> Vec<Address> {
        authorization::governors(&env)
    }

    pub fn quorum(env: Env) -> Result<Quorum, GovernanceError> {
        storage::get_quorum(&env)
    }

    pub fn native_token(env: Env) -> Result<Address, GovernanceError> {
        storage::get_native_token(&env)
    }

    /// Set, update or remove (power 0) a governor.
    ///
    /// Only the contract itself may authorize this, i.e. through an approved
    /// transaction whose destination is this contract.
    pub fn set_governor(env: Env, governor: Address, power: u64) -> Result<(), GovernanceError> {
        require_self(&env);
        validate_initialized(storage::is_initialized(&env))?;
        executor::apply_set_governor(&env, &governor, power)?;
        storage::bump_instance(&env);
        Ok(())
    }

    /// Replace the threshold strategy. Same access rule as `set_governor`.
    pub fn set_quorum(env: Env, quorum: Quorum) -> Result<(), GovernanceError> {
        require_self(&env);
        validate_initialized(storage::is_initialized(&env))?;
        executor::apply_set_quorum(&env, &quorum)?;
        storage::bump_instance(&env);
        Ok(())
    }

    // ── Transaction Lifecycle ────────────────────────────────────────────────

    /// Propose a call; the creator's confirmation is registered immediately.
    ///
    /// # Arguments
    /// * `creator`     – Governor proposing the call
    /// * `destination` – Contract the call is made against
    /// * `value`       – Native token amount sent along with the call
    /// * `func`        – Function invoked on `destination`
    /// * `args`        – Arguments for `func`
    pub fn create_transaction(
        env: Env,
        creator: Address,
        destination: Address,
        value: i128,
        func: Symbol,
        args: Vec<Val>,
    ) -> Result<u64, GovernanceError> {
        verify_governor(&env, &creator)?;
        validate_non_negative_amount(value)?;
        if destination == env.current_contract_address() && value != 0 {
            return Err(GovernanceError::InvalidInput);
        }

        let id = storage::next_transaction_id(&env);
        let transaction = Transaction {
            id,
            creator: creator.clone(),
            destination: destination.clone(),
            value,
            func: func.clone(),
            args,
            created_at: env.ledger().timestamp(),
            executed: false,
            votes: 0,
        };
        storage::save_transaction(&env, &transaction);

        env.events().publish(
            (Symbol::new(&env, "tx_created"), id),
            (creator.clone(), destination, value, func),
        );

        Self::confirm(&env, transaction, &creator)?;
        storage::bump_instance(&env);

        Ok(id)
    }

    /// Add the governor's power to a pending transaction, executing it once
    /// the threshold is reached. Execution failures are returned to the
    /// caller and the confirmation is rolled back with them.
    pub fn confirm_transaction(
        env: Env,
        governor: Address,
        transaction_id: u64,
    ) -> Result<(), GovernanceError> {
        verify_governor(&env, &governor)?;
        let transaction = Self::pending_transaction(&env, transaction_id)?;
        Self::confirm(&env, transaction, &governor)?;
        storage::bump_instance(&env);
        Ok(())
    }

    /// Withdraw an active confirmation from a pending transaction.
    pub fn revoke_confirmation(
        env: Env,
        governor: Address,
        transaction_id: u64,
    ) -> Result<(), GovernanceError> {
        governor.require_auth();
        let mut transaction = Self::pending_transaction(&env, transaction_id)?;

        if !storage::remove_confirmation(&env, transaction_id, &governor) {
            return Err(GovernanceError::NotConfirmed);
        }
        transaction.votes = Self::tally(&env, transaction_id)?;
        storage::save_transaction(&env, &transaction);

        env.events().publish(
            (Symbol::new(&env, "tx_revoked"), transaction_id),
            (governor, transaction.votes),
        );

        Ok(())
    }

    /// Execute a pending transaction whose votes meet the current threshold.
    /// Anyone may call this; a failed call leaves the transaction pending.
    pub fn execute_transaction(env: Env, transaction_id: u64) -> Result<(), GovernanceError> {
        let transaction = Self::pending_transaction(&env, transaction_id)?;
        Self::execute(&env, transaction)?;
        storage::bump_instance(&env);
        Ok(())
    }

    // ── Off-chain Execution ──────────────────────────────────────────────────

    /// Execute a call authorized by signatures collected off-chain.
    ///
    /// `signers` must be sorted by ascending address and their combined
    /// power must meet `required()`. Consumes `nonce` on success.
    pub fn execute_signed(
        env: Env,
        nonce: u64,
        destination: Address,
        func: Symbol,
        args: Vec<Val>,
        signers: Vec<Address>,
    ) -> Result<(), GovernanceError> {
        let required = Self::required_power(&env)?;
        if nonce != storage::get_nonce(&env) {
            return Err(GovernanceError::InvalidNonce);
        }

        let digest = offchain::digest(&env, nonce, &destination, &func, &args);
        let power = offchain::signed_power(&env, &digest, &signers)?;
        if power < required {
            return Err(GovernanceError::ThresholdNotMet);
        }

        storage::set_nonce(&env, safe_add(nonce, 1)?);
        executor::perform(&env, &destination, 0, &func, &args)?;

        env.events().publish(
            (Symbol::new(&env, "signed_executed"), nonce),
            (destination, func, power),
        );
        storage::bump_instance(&env);

        Ok(())
    }

    /// Digest each signer must authorize for `execute_signed`.
    pub fn message_digest(
        env: Env,
        nonce: u64,
        destination: Address,
        func: Symbol,
        args: Vec<Val>,
    ) -> BytesN<32> {
        offchain::digest(&env, nonce, &destination, &func, &args)
    }

    /// Next nonce accepted by `execute_signed`.
    pub fn nonce(env: Env) -> u64 {
        storage::get_nonce(&env)
    }

    // ── Query Functions ──────────────────────────────────────────────────────

    /// Transaction record. Votes of a pending transaction reflect the
    /// confirmers' current power.
    pub fn get_transaction(env: Env, transaction_id: u64) -> Result<Transaction, GovernanceError> {
        let mut transaction = storage::get_transaction(&env, transaction_id)?;
        if !transaction.executed {
            transaction.votes = Self::tally(&env, transaction_id)?;
        }
        Ok(transaction)
    }

    pub fn transaction_count(env: Env) -> u64 {
        storage::get_transaction_count(&env)
    }

    pub fn is_confirmed(env: Env, transaction_id: u64, governor: Address) -> bool {
        storage::is_confirmed(&env, transaction_id, &governor)
    }

    pub fn get_confirmations(env: Env, transaction_id: u64) -> Vec<Address> {
        storage::get_confirmers(&env, transaction_id)
    }

    /// Capability discovery over 4-byte interface identifiers.
    pub fn supports_interface(_env: Env, interface_id: BytesN<4>) -> bool {
        let id = interface_id.to_array();
        id == INTERFACE_ID_DISCOVERY
            || id == INTERFACE_ID_GOVERNANCE
            || id == INTERFACE_ID_ONCHAIN
            || id == INTERFACE_ID_OFFCHAIN
    }

    // ── Internal ─────────────────────────────────────────────────────────────

    fn required_power(env: &Env) -> Result<u64, GovernanceError> {
        let quorum = storage::get_quorum(env)?;
        Ok(quorum.required(authorization::total_power(env)))
    }

    /// Sum of the current power of every governor confirming the transaction.
    fn tally(env: &Env, transaction_id: u64) -> Result<u64, GovernanceError> {
        let mut votes = 0u64;
        for confirmer in storage::get_confirmers(env, transaction_id).iter() {
            votes = safe_add(votes, authorization::power_of(env, &confirmer))?;
        }
        Ok(votes)
    }

    fn pending_transaction(env: &Env, transaction_id: u64) -> Result<Transaction, GovernanceError> {
        let transaction = storage::get_transaction(env, transaction_id)?;
        if transaction.executed {
            return Err(GovernanceError::AlreadyExecuted);
        }
        Ok(transaction)
    }

    fn confirm(
        env: &Env,
        mut transaction: Transaction,
        governor: &Address,
    ) -> Result<(), GovernanceError> {
        if storage::is_confirmed(env, transaction.id, governor) {
            return Err(GovernanceError::AlreadyConfirmed);
        }

        storage::add_confirmation(env, transaction.id, governor);
        transaction.votes = Self::tally(env, transaction.id)?;
        storage::save_transaction(env, &transaction);
        authorization::bump_governor_ttl(env, governor);

        env.events().publish(
            (Symbol::new(env, "tx_confirmed"), transaction.id),
            (governor.clone(), transaction.votes),
        );

        if transaction.votes >= Self::required_power(env)? {
            Self::execute(env, transaction)?;
        }
        Ok(())
    }

    fn execute(env: &Env, mut transaction: Transaction) -> Result<(), GovernanceError> {
        transaction.votes = Self::tally(env, transaction.id)?;
        if transaction.votes < Self::required_power(env)? {
            return Err(GovernanceError::ThresholdNotMet);
        }

        transaction.executed = true;
        storage::save_transaction(env, &transaction);

        executor::perform(
            env,
            &transaction.destination,
            transaction.value,
            &transaction.func,
            &transaction.args,
        )?;

        env.events().publish(
            (Symbol::new(env, "tx_executed"), transaction.id),
            (transaction.destination, transaction.votes),
        );

        Ok(())
    }
}
