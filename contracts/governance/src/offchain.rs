//! Off-chain signed execution.
//!
//! Governors sign one message per call outside the chain and a relayer
//! submits the call together with the ordered signer list. The message is
//! laid out as:
//!
//! | bytes | field |
//! |---|---|
//! | 1 | marker `0x19` |
//! | 1 | version `0x00` |
//! | var | governance contract address (XDR) |
//! | 32 | nonce, big-endian |
//! | var | destination address (XDR) |
//! | var | call data, `(func, args)` as XDR |
//!
//! Each signer authorizes the keccak256 digest of that message through the
//! host's authorization framework, which verifies the signatures carried in
//! the submitted authorization entries.

use authorization::power_of;
use shared::constants::{SIGNED_MESSAGE_PREFIX, SIGNED_MESSAGE_VERSION};
use shared::validation::{safe_add, validate_strictly_ascending};
use shared::GovernanceError;
use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, IntoVal, Symbol, Val, Vec};

pub fn message(
    env: &Env,
    nonce: u64,
    destination: &Address,
    func: &Symbol,
    args: &Vec<Val>,
) -> Bytes {
    let mut message = Bytes::new(env);
    message.push_back(SIGNED_MESSAGE_PREFIX);
    message.push_back(SIGNED_MESSAGE_VERSION);
    message.append(&env.current_contract_address().to_xdr(env));

    let mut nonce_word = [0u8; 32];
    nonce_word[24..].copy_from_slice(&nonce.to_be_bytes());
    message.extend_from_array(&nonce_word);

    message.append(&destination.clone().to_xdr(env));
    message.append(&(func.clone(), args.clone()).to_xdr(env));
    message
}

pub fn digest(
    env: &Env,
    nonce: u64,
    destination: &Address,
    func: &Symbol,
    args: &Vec<Val>,
) -> BytesN<32> {
    env.crypto()
        .keccak256(&message(env, nonce, destination, func, args))
        .to_bytes()
}

/// Verify every signer authorized `digest` and return their combined power.
///
/// Signers must be strictly ascending so a repeated signer is caught by the
/// ordering check instead of being counted twice. Addresses without power
/// are accepted but contribute nothing.
pub fn signed_power(
    env: &Env,
    digest: &BytesN<32>,
    signers: &Vec<Address>,
) -> Result<u64, GovernanceError> {
    if signers.is_empty() {
        return Err(GovernanceError::InvalidInput);
    }
    validate_strictly_ascending(signers)?;

    let mut total = 0u64;
    for signer in signers.iter() {
        signer.require_auth_for_args((digest.clone(),).into_val(env));
        total = safe_add(total, power_of(env, &signer))?;
    }
    Ok(total)
}
