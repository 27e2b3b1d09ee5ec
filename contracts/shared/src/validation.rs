//! Validation helper utilities for governance contracts
//!
//! Reusable checks and checked arithmetic shared by the governor registry and
//! the transaction ledger.

use crate::constants::MAX_BASIS_POINTS;
use crate::errors::GovernanceError;
use soroban_sdk::{Address, Vec};

// ===== Amount Validation =====

/// Validate that an amount is non-negative
pub fn validate_non_negative_amount(amount: i128) -> Result<(), GovernanceError> {
    if amount < 0 {
        return Err(GovernanceError::InvalidInput);
    }
    Ok(())
}

/// Validate that a power value is usable for a newly registered governor
pub fn validate_power(power: u64) -> Result<(), GovernanceError> {
    if power == 0 {
        return Err(GovernanceError::InvalidInput);
    }
    Ok(())
}

/// Validate basis points (0 < bps <= 10000)
pub fn validate_basis_points(bps: u32) -> Result<(), GovernanceError> {
    if bps == 0 || bps > MAX_BASIS_POINTS {
        return Err(GovernanceError::InvalidQuorum);
    }
    Ok(())
}

// ===== State Validation =====

/// Validate that contract is initialized
pub fn validate_initialized(is_initialized: bool) -> Result<(), GovernanceError> {
    if !is_initialized {
        return Err(GovernanceError::NotInitialized);
    }
    Ok(())
}

/// Validate that contract is not already initialized
pub fn validate_not_initialized(is_initialized: bool) -> Result<(), GovernanceError> {
    if is_initialized {
        return Err(GovernanceError::AlreadyInitialized);
    }
    Ok(())
}

// ===== Ordering Validation =====

/// Validate that addresses are strictly ascending.
///
/// Strict ordering rejects duplicates in the same linear pass, so callers do
/// not need a set to detect a signer listed twice.
pub fn validate_strictly_ascending(addresses: &Vec<Address>) -> Result<(), GovernanceError> {
    let mut previous: Option<Address> = None;
    for address in addresses.iter() {
        if let Some(prev) = &previous {
            if *prev >= address {
                return Err(GovernanceError::SignaturesNotSorted);
            }
        }
        previous = Some(address);
    }
    Ok(())
}

// ===== Arithmetic Validation =====

/// Safely add two power values, returning error on overflow
pub fn safe_add(a: u64, b: u64) -> Result<u64, GovernanceError> {
    a.checked_add(b).ok_or(GovernanceError::Overflow)
}

/// Safely subtract two power values, returning error on underflow
pub fn safe_sub(a: u64, b: u64) -> Result<u64, GovernanceError> {
    a.checked_sub(b).ok_or(GovernanceError::Underflow)
}

/// Basis points of an amount, rounded up.
///
/// Rounding up keeps a percentage threshold from being met by a fraction
/// less than the configured share.
pub fn calculate_basis_points_ceil(amount: u64, bps: u32) -> Result<u64, GovernanceError> {
    validate_basis_points(bps)?;

    let scaled = (amount as u128)
        .checked_mul(bps as u128)
        .ok_or(GovernanceError::Overflow)?;
    let denominator = MAX_BASIS_POINTS as u128;
    let rounded = (scaled + denominator - 1) / denominator;

    u64::try_from(rounded).map_err(|_| GovernanceError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Env};

    #[test]
    fn test_safe_arithmetic() {
        assert_eq!(safe_add(2, 3), Ok(5));
        assert_eq!(safe_add(u64::MAX, 1), Err(GovernanceError::Overflow));
        assert_eq!(safe_sub(3, 2), Ok(1));
        assert_eq!(safe_sub(2, 3), Err(GovernanceError::Underflow));
    }

    #[test]
    fn test_basis_points_round_up() {
        // 66.67% of 3 lands just above 2
        assert_eq!(calculate_basis_points_ceil(3, 6_667), Ok(3));
        assert_eq!(calculate_basis_points_ceil(3, 5_000), Ok(2));
        assert_eq!(calculate_basis_points_ceil(4, 5_000), Ok(2));
        assert_eq!(calculate_basis_points_ceil(0, 5_000), Ok(0));
        assert_eq!(calculate_basis_points_ceil(10, 10_000), Ok(10));
        assert_eq!(
            calculate_basis_points_ceil(10, 0),
            Err(GovernanceError::InvalidQuorum)
        );
        assert_eq!(
            calculate_basis_points_ceil(10, 10_001),
            Err(GovernanceError::InvalidQuorum)
        );
    }

    #[test]
    fn test_strictly_ascending_rejects_unsorted_and_duplicates() {
        let env = Env::default();
        let mut addresses = [
            Address::generate(&env),
            Address::generate(&env),
            Address::generate(&env),
        ];
        addresses.sort_unstable();
        let [a, b, c] = addresses;

        let sorted = Vec::from_array(&env, [a.clone(), b.clone(), c.clone()]);
        assert_eq!(validate_strictly_ascending(&sorted), Ok(()));

        let unsorted = Vec::from_array(&env, [b.clone(), a.clone(), c.clone()]);
        assert_eq!(
            validate_strictly_ascending(&unsorted),
            Err(GovernanceError::SignaturesNotSorted)
        );

        let duplicated = Vec::from_array(&env, [a.clone(), a, c]);
        assert_eq!(
            validate_strictly_ascending(&duplicated),
            Err(GovernanceError::SignaturesNotSorted)
        );

        assert_eq!(validate_strictly_ascending(&Vec::new(&env)), Ok(()));
    }

    #[test]
    fn test_state_validation() {
        assert_eq!(validate_initialized(true), Ok(()));
        assert_eq!(
            validate_initialized(false),
            Err(GovernanceError::NotInitialized)
        );
        assert_eq!(
            validate_not_initialized(true),
            Err(GovernanceError::AlreadyInitialized)
        );
        assert_eq!(validate_power(0), Err(GovernanceError::InvalidInput));
        assert_eq!(
            validate_non_negative_amount(-1),
            Err(GovernanceError::InvalidInput)
        );
    }
}
