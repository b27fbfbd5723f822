use cosmwasm_std::Addr;

use crate::error::ContractError;
use crate::state::Config;

/// Fails with `Unauthorized` unless `sender` is the configured admin.
pub fn require_admin(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if *sender != config.admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}
