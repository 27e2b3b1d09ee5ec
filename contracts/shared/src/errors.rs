//! Common error types for governance contracts
//!
//! This module defines a unified set of error codes used by the governor
//! registry and the transaction ledger so that callers observe consistent
//! error reporting regardless of which crate raised the failure.

use soroban_sdk::contracterror;

/// Comprehensive error type for governance contracts
///
/// All errors are assigned unique codes for easy identification and debugging.
/// Error ranges are organized by category:
/// - 1-19: Authorization/setup errors
/// - 20-39: Transaction state errors
/// - 40-59: Threshold errors
/// - 60-79: External call errors
/// - 80-99: Off-chain execution errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GovernanceError {
    // ===== Authorization/Setup Errors (1-19) =====
    /// Contract not initialized
    NotInitialized = 1,

    /// Contract already initialized
    AlreadyInitialized = 2,

    /// Caller holds no voting power
    NotGovernor = 3,

    /// Invalid input provided
    InvalidInput = 5,

    /// Same governor listed twice
    DuplicateGovernor = 6,

    /// Arithmetic overflow occurred
    Overflow = 7,

    /// Operation would cause underflow
    Underflow = 8,

    // ===== Transaction State Errors (20-39) =====
    /// Transaction id was never allocated
    TransactionNotFound = 20,

    /// Transaction has already been executed
    AlreadyExecuted = 21,

    /// Governor already confirmed this transaction
    AlreadyConfirmed = 22,

    /// Governor has no active confirmation to revoke
    NotConfirmed = 23,

    // ===== Threshold Errors (40-59) =====
    /// Accumulated power is below the required threshold
    ThresholdNotMet = 40,

    /// Threshold strategy parameters are out of range
    InvalidQuorum = 41,

    // ===== External Call Errors (60-79) =====
    /// Value transfer or call against the destination failed
    ExecutionFailed = 60,

    /// Self-transaction names a function the contract cannot dispatch
    UnsupportedSelfCall = 61,

    // ===== Off-chain Execution Errors (80-99) =====
    /// Nonce does not match the next expected nonce
    InvalidNonce = 80,

    /// Signers are not in strictly ascending address order
    SignaturesNotSorted = 81,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_follow_categories() {
        assert_eq!(GovernanceError::NotGovernor as u32, 3);
        assert_eq!(GovernanceError::TransactionNotFound as u32, 20);
        assert_eq!(GovernanceError::ThresholdNotMet as u32, 40);
        assert_eq!(GovernanceError::ExecutionFailed as u32, 60);
        assert_eq!(GovernanceError::SignaturesNotSorted as u32, 81);
    }
}
