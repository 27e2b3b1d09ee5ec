use shared::constants::MIN_REQUIRED_POWER;
use shared::validation::{calculate_basis_points_ceil, validate_basis_points};
use shared::GovernanceError;

use crate::types::Quorum;

/// Derives the power needed to execute a transaction from the total power.
///
/// Implementations are evaluated on every call; total power can change
/// between two reads through self-governance.
pub trait ThresholdPolicy {
    fn required(&self, total_power: u64) -> u64;
}

impl ThresholdPolicy for Quorum {
    fn required(&self, total_power: u64) -> u64 {
        let required = match self {
            Quorum::Fixed(power) => *power,
            Quorum::Percentage(bps) => {
                calculate_basis_points_ceil(total_power, *bps).unwrap_or(u64::MAX)
            }
            Quorum::Majority => total_power / 2 + 1,
        };
        required.max(MIN_REQUIRED_POWER)
    }
}

pub fn validate_quorum(quorum: &Quorum) -> Result<(), GovernanceError> {
    match quorum {
        Quorum::Fixed(0) => Err(GovernanceError::InvalidQuorum),
        Quorum::Fixed(_) | Quorum::Majority => Ok(()),
        Quorum::Percentage(bps) => validate_basis_points(*bps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_ignores_total_power() {
        let quorum = Quorum::Fixed(2);
        assert_eq!(quorum.required(3), 2);
        assert_eq!(quorum.required(100), 2);
        assert_eq!(quorum.required(0), 2);
    }

    #[test]
    fn test_percentage_rounds_up() {
        let two_thirds = Quorum::Percentage(6_667);
        assert_eq!(two_thirds.required(3), 3);
        assert_eq!(two_thirds.required(300), 201);

        let half = Quorum::Percentage(5_000);
        assert_eq!(half.required(3), 2);
        assert_eq!(half.required(4), 2);
    }

    #[test]
    fn test_majority_is_strict() {
        assert_eq!(Quorum::Majority.required(3), 2);
        assert_eq!(Quorum::Majority.required(4), 3);
        assert_eq!(Quorum::Majority.required(1), 1);
    }

    #[test]
    fn test_required_never_zero() {
        assert_eq!(Quorum::Majority.required(0), 1);
        assert_eq!(Quorum::Percentage(5_000).required(0), 1);
    }

    #[test]
    fn test_validate_quorum() {
        assert_eq!(validate_quorum(&Quorum::Majority), Ok(()));
        assert_eq!(validate_quorum(&Quorum::Fixed(1)), Ok(()));
        assert_eq!(validate_quorum(&Quorum::Percentage(10_000)), Ok(()));
        assert_eq!(
            validate_quorum(&Quorum::Fixed(0)),
            Err(GovernanceError::InvalidQuorum)
        );
        assert_eq!(
            validate_quorum(&Quorum::Percentage(0)),
            Err(GovernanceError::InvalidQuorum)
        );
        assert_eq!(
            validate_quorum(&Quorum::Percentage(10_001)),
            Err(GovernanceError::InvalidQuorum)
        );
    }
}
