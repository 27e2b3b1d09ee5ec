use shared::constants::{
    INSTANCE_TTL_LEDGERS, INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_LEDGERS,
    PERSISTENT_TTL_THRESHOLD,
};
use shared::GovernanceError;
use soroban_sdk::{Address, Env, Vec};

use crate::types::{DataKey, Quorum, Transaction};

// ── Instance ─────────────────────────────────────────────────────────────────

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_LEDGERS);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Quorum)
}

pub fn get_quorum(env: &Env) -> Result<Quorum, GovernanceError> {
    env.storage()
        .instance()
        .get(&DataKey::Quorum)
        .ok_or(GovernanceError::NotInitialized)
}

pub fn set_quorum(env: &Env, quorum: &Quorum) {
    env.storage().instance().set(&DataKey::Quorum, quorum);
}

pub fn get_native_token(env: &Env) -> Result<Address, GovernanceError> {
    env.storage()
        .instance()
        .get(&DataKey::NativeToken)
        .ok_or(GovernanceError::NotInitialized)
}

pub fn set_native_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::NativeToken, token);
}

// ── Nonce ────────────────────────────────────────────────────────────────────

pub fn get_nonce(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::Nonce)
        .unwrap_or(0u64)
}

pub fn set_nonce(env: &Env, nonce: u64) {
    env.storage().instance().set(&DataKey::Nonce, &nonce);
}

// ── Transactions ─────────────────────────────────────────────────────────────

pub fn get_transaction_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TransactionCount)
        .unwrap_or(0u64)
}

/// Reserve the next transaction id.
pub fn next_transaction_id(env: &Env) -> u64 {
    let id = get_transaction_count(env);
    env.storage()
        .instance()
        .set(&DataKey::TransactionCount, &(id + 1));
    id
}

pub fn get_transaction(env: &Env, id: u64) -> Result<Transaction, GovernanceError> {
    env.storage()
        .persistent()
        .get(&DataKey::Transaction(id))
        .ok_or(GovernanceError::TransactionNotFound)
}

pub fn save_transaction(env: &Env, transaction: &Transaction) {
    let key = DataKey::Transaction(transaction.id);
    env.storage().persistent().set(&key, transaction);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_LEDGERS);
}

// ── Confirmations ────────────────────────────────────────────────────────────

pub fn is_confirmed(env: &Env, id: u64, governor: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Confirmation(id, governor.clone()))
}

pub fn get_confirmers(env: &Env, id: u64) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Confirmers(id))
        .unwrap_or(Vec::new(env))
}

pub fn add_confirmation(env: &Env, id: u64, governor: &Address) {
    let key = DataKey::Confirmation(id, governor.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_LEDGERS);

    let mut confirmers = get_confirmers(env, id);
    confirmers.push_back(governor.clone());
    save_confirmers(env, id, &confirmers);
}

/// Drop the governor's confirmation. Returns false if it had none.
pub fn remove_confirmation(env: &Env, id: u64, governor: &Address) -> bool {
    if !is_confirmed(env, id, governor) {
        return false;
    }
    env.storage()
        .persistent()
        .remove(&DataKey::Confirmation(id, governor.clone()));

    let mut confirmers = get_confirmers(env, id);
    if let Some(index) = confirmers.first_index_of(governor) {
        confirmers.remove(index);
    }
    save_confirmers(env, id, &confirmers);

    true
}

fn save_confirmers(env: &Env, id: u64, confirmers: &Vec<Address>) {
    let key = DataKey::Confirmers(id);
    env.storage().persistent().set(&key, confirmers);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_LEDGERS);
}
