use cosmwasm_std::{Deps, Env, StdResult};

use crate::msg::{
    CapLeftResponse, CapReachedResponse, CapResponse, ConfigResponse, ContributionResponse,
    RateResponse, RemainingTokensResponse, SaleStateResponse, StatusResponse,
};
use crate::state::{CONFIG, CONTRIBUTIONS, SALE_STATE};
use crate::token::query_treasury_funds;

pub fn query_rate(deps: Deps) -> StdResult<RateResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(RateResponse { rate: config.rate })
}

pub fn query_cap(deps: Deps) -> StdResult<CapResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(CapResponse {
        cap: config.total_cap,
    })
}

pub fn query_cap_left(deps: Deps) -> StdResult<CapLeftResponse> {
    let config = CONFIG.load(deps.storage)?;
    let sale = SALE_STATE.load(deps.storage)?;
    Ok(CapLeftResponse {
        cap_left: sale.cap_left(&config),
    })
}

pub fn query_cap_reached(deps: Deps) -> StdResult<CapReachedResponse> {
    let config = CONFIG.load(deps.storage)?;
    let sale = SALE_STATE.load(deps.storage)?;
    Ok(CapReachedResponse {
        cap_reached: sale.cap_reached(&config),
    })
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        token_cw20: config.token_cw20,
        treasury: config.treasury,
        payment_denom: config.payment_denom,
        rate: config.rate,
        transaction_cap: config.transaction_cap,
        total_cap: config.total_cap,
        active: config.active,
    })
}

pub fn query_sale_state(deps: Deps) -> StdResult<SaleStateResponse> {
    let sale = SALE_STATE.load(deps.storage)?;
    Ok(SaleStateResponse {
        total_raised: sale.total_raised,
        tokens_sold: sale.tokens_sold,
        purchase_count: sale.purchase_count,
    })
}

pub fn query_status(deps: Deps) -> StdResult<StatusResponse> {
    let config = CONFIG.load(deps.storage)?;
    let sale = SALE_STATE.load(deps.storage)?;
    Ok(StatusResponse {
        phase: sale.phase(&config),
        rate: config.rate,
        cap: config.total_cap,
        cap_left: sale.cap_left(&config),
        transaction_cap: config.transaction_cap,
    })
}

pub fn query_remaining_tokens(deps: Deps, env: Env) -> StdResult<RemainingTokensResponse> {
    let config = CONFIG.load(deps.storage)?;
    let funds = query_treasury_funds(deps, &env, &config)?;
    Ok(RemainingTokensResponse {
        remaining: funds.pullable(),
        allowance: funds.allowance,
        treasury_balance: funds.balance,
    })
}

pub fn query_contribution(deps: Deps, address: String) -> StdResult<ContributionResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let amount = CONTRIBUTIONS
        .may_load(deps.storage, &addr)?
        .unwrap_or_default();
    Ok(ContributionResponse {
        address: addr,
        amount,
    })
}
