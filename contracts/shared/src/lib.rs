#![no_std]
//! # Shared Governance Contracts Library
//!
//! Reusable errors, constants, and validation helpers for the governance
//! contracts in this workspace.
//!
//! ## Modules
//!
//! - `errors` - The `GovernanceError` taxonomy used by every contract
//! - `constants` - Storage TTLs, threshold limits and capability identifiers
//! - `validation` - Reusable validation and checked arithmetic helpers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::errors::GovernanceError;
//! use shared::validation::{safe_add, validate_strictly_ascending};
//! use shared::constants::PERSISTENT_TTL_LEDGERS;
//! ```

pub mod constants;
pub mod errors;
pub mod validation;

// Re-export commonly used types
pub use errors::GovernanceError;
pub use validation::{
    calculate_basis_points_ceil, safe_add, safe_sub, validate_basis_points,
    validate_initialized, validate_non_negative_amount, validate_not_initialized,
    validate_power, validate_strictly_ascending,
};
