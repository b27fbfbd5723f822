use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::access::require_admin;
use crate::error::ContractError;
use crate::state::CONFIG;

/// Admin-only: replace the per-transaction cap. Setting it to the remaining
/// cap lets a single purchase close out the round.
pub fn execute_set_transaction_cap(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    cap: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    require_admin(&config, &info.sender)?;

    if cap.is_zero() {
        return Err(ContractError::InvalidTransactionCap);
    }

    config.transaction_cap = cap;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_transaction_cap")
        .add_attribute("admin", info.sender.to_string())
        .add_attribute("transaction_cap", cap.to_string()))
}
