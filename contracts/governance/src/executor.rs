use shared::GovernanceError;
use soroban_sdk::{log, token, Address, Env, Symbol, TryFromVal, Val, Vec};

use crate::storage;
use crate::threshold::validate_quorum;
use crate::types::Quorum;

/// Perform the call described by a transaction.
///
/// Sends `value` of the native token to `destination` first, then invokes
/// `func(args)` on it. Calls addressed to this contract are dispatched
/// in-process because the host rejects contract re-entry.
pub fn perform(
    env: &Env,
    destination: &Address,
    value: i128,
    func: &Symbol,
    args: &Vec<Val>,
) -> Result<(), GovernanceError> {
    let this = env.current_contract_address();
    if *destination == this {
        return dispatch_self(env, func, args);
    }

    if value > 0 {
        let native = storage::get_native_token(env)?;
        let client = token::Client::new(env, &native);
        if !matches!(client.try_transfer(&this, destination, &value), Ok(Ok(()))) {
            log!(env, "value transfer failed", destination.clone(), value);
            return Err(GovernanceError::ExecutionFailed);
        }
    }

    match env.try_invoke_contract::<Val, GovernanceError>(destination, func, args.clone()) {
        Ok(Ok(_)) => Ok(()),
        _ => {
            log!(env, "call failed", destination.clone(), func.clone());
            Err(GovernanceError::ExecutionFailed)
        }
    }
}

fn dispatch_self(env: &Env, func: &Symbol, args: &Vec<Val>) -> Result<(), GovernanceError> {
    if *func == Symbol::new(env, "set_governor") {
        let governor: Address = arg(env, args, 0)?;
        let power: u64 = arg(env, args, 1)?;
        apply_set_governor(env, &governor, power)
    } else if *func == Symbol::new(env, "set_quorum") {
        let quorum: Quorum = arg(env, args, 0)?;
        apply_set_quorum(env, &quorum)
    } else {
        log!(env, "unsupported self call", func.clone());
        Err(GovernanceError::UnsupportedSelfCall)
    }
}

fn arg<T>(env: &Env, args: &Vec<Val>, index: u32) -> Result<T, GovernanceError>
where
    T: TryFromVal<Env, Val>,
{
    let val = args.get(index).ok_or(GovernanceError::InvalidInput)?;
    T::try_from_val(env, &val).map_err(|_| GovernanceError::InvalidInput)
}

pub fn apply_set_governor(env: &Env, governor: &Address, power: u64) -> Result<(), GovernanceError> {
    authorization::set_power(env, governor, power)?;
    Ok(())
}

pub fn apply_set_quorum(env: &Env, quorum: &Quorum) -> Result<(), GovernanceError> {
    validate_quorum(quorum)?;
    storage::set_quorum(env, quorum);
    env.events()
        .publish((Symbol::new(env, "quorum_updated"),), quorum.clone());
    Ok(())
}
