use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::{ensure_from_older_version, set_contract_version};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{Config, SaleState, CONFIG, SALE_STATE};

const CONTRACT_NAME: &str = "crates.io:token-distributor";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.rate == 0 {
        return Err(ContractError::InvalidRate);
    }
    if msg.transaction_cap.is_zero() {
        return Err(ContractError::InvalidTransactionCap);
    }

    // Sales start paused; the admin opens them with SetActivity
    let config = Config {
        admin: deps.api.addr_validate(&msg.admin)?,
        token_cw20: deps.api.addr_validate(&msg.token_cw20)?,
        treasury: deps.api.addr_validate(&msg.treasury)?,
        payment_denom: msg.payment_denom,
        rate: msg.rate,
        transaction_cap: msg.transaction_cap,
        total_cap: msg.total_cap,
        active: false,
    };

    CONFIG.save(deps.storage, &config)?;
    SALE_STATE.save(deps.storage, &SaleState::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin.to_string())
        .add_attribute("token_cw20", config.token_cw20.to_string())
        .add_attribute("treasury", config.treasury.to_string())
        .add_attribute("rate", config.rate.to_string())
        .add_attribute("total_cap", config.total_cap.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Buy { beneficiary } => {
            crate::execute::buy::execute_buy(deps, env, info, beneficiary)
        }
        ExecuteMsg::SetRound { rate, cap_increase } => {
            crate::execute::set_round::execute_set_round(deps, env, info, rate, cap_increase)
        }
        ExecuteMsg::SetActivity { active } => {
            crate::execute::set_activity::execute_set_activity(deps, env, info, active)
        }
        ExecuteMsg::SetTransactionCap { cap } => {
            crate::execute::set_transaction_cap::execute_set_transaction_cap(deps, env, info, cap)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Rate {} => to_json_binary(&crate::query::query_rate(deps)?),
        QueryMsg::Cap {} => to_json_binary(&crate::query::query_cap(deps)?),
        QueryMsg::CapLeft {} => to_json_binary(&crate::query::query_cap_left(deps)?),
        QueryMsg::CapReached {} => to_json_binary(&crate::query::query_cap_reached(deps)?),
        QueryMsg::Config {} => to_json_binary(&crate::query::query_config(deps)?),
        QueryMsg::SaleState {} => to_json_binary(&crate::query::query_sale_state(deps)?),
        QueryMsg::Status {} => to_json_binary(&crate::query::query_status(deps)?),
        QueryMsg::RemainingTokens {} => {
            to_json_binary(&crate::query::query_remaining_tokens(deps, env)?)
        }
        QueryMsg::Contribution { address } => {
            to_json_binary(&crate::query::query_contribution(deps, address)?)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let original = ensure_from_older_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("from_version", original.to_string())
        .add_attribute("to_version", CONTRACT_VERSION))
}
