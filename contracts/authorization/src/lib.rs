//! Governor registry for weighted governance contracts
//!
//! This module keeps the set of governors and their voting power for the
//! contract that links it. Power lives in persistent storage keyed by
//! address; an auxiliary running total and governor list live in instance
//! storage so `total_power` never walks the whole registry.
//!
//! ## Features
//! - Weighted governors (power 0 means "not a governor")
//! - Running total maintained on every power change
//! - Self-governance guard for privileged registry updates
//! - Power change events for off-chain indexers

#![no_std]

use shared::constants::{MAX_GOVERNORS, PERSISTENT_TTL_LEDGERS, PERSISTENT_TTL_THRESHOLD};
use shared::validation::{safe_add, safe_sub};
use shared::GovernanceError;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Vec};

/// Storage keys for the governor registry
#[contracttype]
#[derive(Clone)]
pub enum RegistryKey {
    /// Maps Address -> power
    Power(Address),
    /// Sum of all governor power
    TotalPower,
    /// Addresses with non-zero power, in registration order
    Governors,
}

/// Voting power of an address; zero for non-governors.
pub fn power_of(env: &Env, governor: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&RegistryKey::Power(governor.clone()))
        .unwrap_or(0)
}

/// Sum of the power of all registered governors.
pub fn total_power(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&RegistryKey::TotalPower)
        .unwrap_or(0)
}

/// All addresses currently holding power.
pub fn governors(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&RegistryKey::Governors)
        .unwrap_or(Vec::new(env))
}

/// Check if an address holds any voting power
pub fn is_governor(env: &Env, address: &Address) -> bool {
    power_of(env, address) > 0
}

/// Require that the address is a governor, returning its power.
pub fn require_governor(env: &Env, address: &Address) -> Result<u64, GovernanceError> {
    match power_of(env, address) {
        0 => Err(GovernanceError::NotGovernor),
        power => Ok(power),
    }
}

/// Verify the caller's identity, then require it to be a governor.
pub fn verify_governor(env: &Env, caller: &Address) -> Result<u64, GovernanceError> {
    caller.require_auth();
    require_governor(env, caller)
}

/// Require that the current invocation is authorized by the contract itself.
///
/// Only reachable from a sub-invocation the contract makes on its own
/// behalf, so external callers cannot satisfy it directly.
pub fn require_self(env: &Env) {
    env.current_contract_address().require_auth();
}

/// Set, update or remove (power 0) a governor, returning its previous power.
///
/// Keeps the running total and governor list in step with the change.
pub fn set_power(env: &Env, governor: &Address, power: u64) -> Result<u64, GovernanceError> {
    let previous = power_of(env, governor);
    if previous == power {
        return Ok(previous);
    }

    let total = safe_add(safe_sub(total_power(env), previous)?, power)?;

    let mut list = governors(env);
    if previous == 0 {
        if list.len() >= MAX_GOVERNORS {
            return Err(GovernanceError::InvalidInput);
        }
        list.push_back(governor.clone());
    } else if power == 0 {
        if let Some(index) = list.first_index_of(governor) {
            list.remove(index);
        }
    }

    let key = RegistryKey::Power(governor.clone());
    if power == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &power);
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_LEDGERS);
    }
    env.storage().instance().set(&RegistryKey::TotalPower, &total);
    env.storage().instance().set(&RegistryKey::Governors, &list);

    env.events().publish(
        (symbol_short!("gov_power"), governor.clone()),
        (previous, power, total),
    );

    Ok(previous)
}

/// Extend the TTL of a governor entry that is read but not written.
pub fn bump_governor_ttl(env: &Env, governor: &Address) {
    let key = RegistryKey::Power(governor.clone());
    if env.storage().persistent().has(&key) {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_LEDGERS);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use soroban_sdk::{contract, contractimpl, testutils::Address as _};

    #[contract]
    pub struct RegistryHost;

    #[contractimpl]
    impl RegistryHost {
        pub fn power(env: Env, governor: Address) -> u64 {
            power_of(&env, &governor)
        }
    }

    fn setup_env() -> (Env, Address) {
        let env = Env::default();
        let host = env.register(RegistryHost, ());
        (env, host)
    }

    #[test]
    fn test_set_power_tracks_running_total() {
        let (env, host) = setup_env();
        let a = Address::generate(&env);
        let b = Address::generate(&env);

        env.as_contract(&host, || {
            assert_eq!(set_power(&env, &a, 3), Ok(0));
            assert_eq!(set_power(&env, &b, 2), Ok(0));
            assert_eq!(total_power(&env), 5);
            assert_eq!(governors(&env).len(), 2);

            // Update replaces rather than adds
            assert_eq!(set_power(&env, &a, 1), Ok(3));
            assert_eq!(total_power(&env), 3);
            assert_eq!(governors(&env).len(), 2);
        });
    }

    #[test]
    fn test_zero_power_removes_governor() {
        let (env, host) = setup_env();
        let a = Address::generate(&env);
        let b = Address::generate(&env);

        env.as_contract(&host, || {
            set_power(&env, &a, 4).unwrap();
            set_power(&env, &b, 1).unwrap();
            assert_eq!(set_power(&env, &a, 0), Ok(4));

            assert!(!is_governor(&env, &a));
            assert!(is_governor(&env, &b));
            assert_eq!(total_power(&env), 1);
            assert_eq!(governors(&env), Vec::from_array(&env, [b.clone()]));
            assert_eq!(require_governor(&env, &a), Err(GovernanceError::NotGovernor));
            assert_eq!(require_governor(&env, &b), Ok(1));
        });
    }

    #[test]
    fn test_removing_unknown_governor_is_noop() {
        let (env, host) = setup_env();
        let stranger = Address::generate(&env);

        env.as_contract(&host, || {
            assert_eq!(set_power(&env, &stranger, 0), Ok(0));
            assert_eq!(total_power(&env), 0);
            assert_eq!(governors(&env).len(), 0);
        });
    }

    #[test]
    fn test_power_visible_through_host_contract() {
        let (env, host) = setup_env();
        let client = RegistryHostClient::new(&env, &host);
        let a = Address::generate(&env);

        env.as_contract(&host, || {
            set_power(&env, &a, 7).unwrap();
        });

        assert_eq!(client.power(&a), 7);
    }
}
