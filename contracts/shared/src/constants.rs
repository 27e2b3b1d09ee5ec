//! Common constants used across governance contracts
//!
//! Storage retention, threshold arithmetic and capability identifiers live
//! here so the registry and the ledger agree on them.

// ===== Storage TTL Constants =====

/// Persistent entries (governors, transactions, confirmations) are kept for
/// roughly ten years of ledgers at ~5s per ledger.
pub const PERSISTENT_TTL_LEDGERS: u32 = 63_072_000;

/// Extend persistent entries once their remaining TTL drops below this.
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_LEDGERS - 17_280;

/// Instance storage (configuration, counters) TTL, about 30 days.
pub const INSTANCE_TTL_LEDGERS: u32 = 518_400;

/// Extend instance storage once the remaining TTL drops below this.
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_LEDGERS - 17_280;

// ===== Threshold Constants =====

/// Maximum basis points (10000 = 100%)
pub const MAX_BASIS_POINTS: u32 = 10_000;

/// Smallest threshold any strategy may yield; zero would let an unconfirmed
/// transaction execute.
pub const MIN_REQUIRED_POWER: u64 = 1;

/// Upper bound on the governor set so registry scans stay within budget.
pub const MAX_GOVERNORS: u32 = 100;

// ===== Signed Message Layout =====

/// Leading marker byte of an off-chain signed message.
pub const SIGNED_MESSAGE_PREFIX: u8 = 0x19;

/// Layout version byte following the marker.
pub const SIGNED_MESSAGE_VERSION: u8 = 0x00;

// ===== Capability Identifiers =====

/// Interface discovery itself (`supportsInterface(bytes4)`).
pub const INTERFACE_ID_DISCOVERY: [u8; 4] = [0x01, 0xff, 0xc9, 0xa7];

/// Base governance read interface (`powerOf`, `totalPower`, `required`, `setGovernor`).
pub const INTERFACE_ID_GOVERNANCE: [u8; 4] = [0x85, 0x2f, 0x03, 0x7b];

/// On-chain confirmation workflow.
pub const INTERFACE_ID_ONCHAIN: [u8; 4] = [0x23, 0x36, 0x0a, 0x4c];

/// Off-chain signed execution.
pub const INTERFACE_ID_OFFCHAIN: [u8; 4] = [0x1c, 0x60, 0x35, 0xbc];
