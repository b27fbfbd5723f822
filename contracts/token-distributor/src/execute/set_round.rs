use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::access::require_admin;
use crate::error::ContractError;
use crate::state::CONFIG;

/// Admin-only: set a new rate and grow the total cap by `cap_increase`.
/// Raising the cap reopens a sale that had reached it.
pub fn execute_set_round(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    rate: u64,
    cap_increase: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    require_admin(&config, &info.sender)?;

    if rate == 0 {
        return Err(ContractError::InvalidRate);
    }

    config.rate = rate;
    config.total_cap = config.total_cap.checked_add(cap_increase)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_round")
        .add_attribute("admin", info.sender.to_string())
        .add_attribute("rate", config.rate.to_string())
        .add_attribute("cap_increase", cap_increase.to_string())
        .add_attribute("total_cap", config.total_cap.to_string()))
}
