use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, Deps, Env, StdResult, Uint128, WasmMsg};
use cw20::{AllowanceResponse, BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::state::Config;

/// What the distributor can currently pull out of the treasury.
pub struct TreasuryFunds {
    pub allowance: Uint128,
    pub balance: Uint128,
}

impl TreasuryFunds {
    pub fn pullable(&self) -> Uint128 {
        self.allowance.min(self.balance)
    }

    pub fn covers(&self, amount: Uint128) -> bool {
        self.pullable() >= amount
    }
}

/// Query the treasury's CW20 balance and its allowance to this contract.
/// An expired allowance counts as zero.
pub fn query_treasury_funds(deps: Deps, env: &Env, config: &Config) -> StdResult<TreasuryFunds> {
    let allowance: AllowanceResponse = deps.querier.query_wasm_smart(
        config.token_cw20.to_string(),
        &Cw20QueryMsg::Allowance {
            owner: config.treasury.to_string(),
            spender: env.contract.address.to_string(),
        },
    )?;

    let balance: BalanceResponse = deps.querier.query_wasm_smart(
        config.token_cw20.to_string(),
        &Cw20QueryMsg::Balance {
            address: config.treasury.to_string(),
        },
    )?;

    let allowance = if allowance.expires.is_expired(&env.block) {
        Uint128::zero()
    } else {
        allowance.allowance
    };

    Ok(TreasuryFunds {
        allowance,
        balance: balance.balance,
    })
}

/// CW20 `TransferFrom` treasury -> recipient, spending our allowance.
pub fn transfer_from_treasury_msg(
    config: &Config,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.token_cw20.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: config.treasury.to_string(),
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}
