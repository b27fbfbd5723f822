use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use crate::access::require_admin;
use crate::error::ContractError;
use crate::state::CONFIG;

pub fn execute_set_activity(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    active: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    require_admin(&config, &info.sender)?;

    config.active = active;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_activity")
        .add_attribute("admin", info.sender.to_string())
        .add_attribute("active", active.to_string()))
}
