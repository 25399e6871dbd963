use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::storage;

/// Authenticate `caller` and check it against the stored admin address.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let admin = storage::get_admin(env).ok_or(Error::NotInitialized)?;
    if *caller != admin {
        return Err(Error::Unauthorized);
    }
    Ok(())
}
