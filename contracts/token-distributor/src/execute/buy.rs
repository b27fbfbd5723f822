use cosmwasm_std::{BankMsg, Coin, CosmosMsg, DepsMut, Env, Event, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{CONFIG, CONTRIBUTIONS, SALE_STATE};
use crate::token::{query_treasury_funds, transfer_from_treasury_msg};

/// Anyone: pay native coin, receive `payment * rate` tokens pulled from the
/// treasury allowance. Every check runs before the first storage write.
pub fn execute_buy(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    beneficiary: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut sale = SALE_STATE.load(deps.storage)?;

    if !config.active {
        return Err(ContractError::SalePaused);
    }

    let payment = payment_amount(&info, &config.payment_denom)?;

    if payment > config.transaction_cap {
        return Err(ContractError::TransactionCapExceeded {
            cap: config.transaction_cap.to_string(),
        });
    }

    let total_raised = sale.total_raised.checked_add(payment)?;
    if total_raised > config.total_cap {
        return Err(ContractError::TotalCapExceeded {
            cap_left: sale.cap_left(&config).to_string(),
        });
    }

    let tokens_owed = payment.checked_mul(Uint128::from(config.rate))?;
    let tokens_sold = sale.tokens_sold.checked_add(tokens_owed)?;

    let beneficiary = match beneficiary {
        Some(addr) => deps.api.addr_validate(&addr)?,
        None => info.sender.clone(),
    };
    let contribution = CONTRIBUTIONS
        .may_load(deps.storage, &beneficiary)?
        .unwrap_or_default()
        .checked_add(payment)?;

    // Settlement must be possible before we commit anything
    let funds = query_treasury_funds(deps.as_ref(), &env, &config)?;
    if !funds.covers(tokens_owed) {
        return Err(ContractError::SettlementFailure {
            required: tokens_owed.to_string(),
            allowance: funds.allowance.to_string(),
            balance: funds.balance.to_string(),
        });
    }

    let transfer_msg = transfer_from_treasury_msg(&config, &beneficiary, tokens_owed)?;
    let forward_msg = CosmosMsg::Bank(BankMsg::Send {
        to_address: config.treasury.to_string(),
        amount: vec![Coin {
            denom: config.payment_denom.clone(),
            amount: payment,
        }],
    });

    sale.total_raised = total_raised;
    sale.tokens_sold = tokens_sold;
    sale.purchase_count += 1;
    SALE_STATE.save(deps.storage, &sale)?;
    CONTRIBUTIONS.save(deps.storage, &beneficiary, &contribution)?;

    let event = Event::new("tokens_purchased")
        .add_attribute("purchaser", info.sender.to_string())
        .add_attribute("beneficiary", beneficiary.to_string())
        .add_attribute("value", payment.to_string())
        .add_attribute("amount", tokens_owed.to_string());

    Ok(Response::new()
        .add_message(transfer_msg)
        .add_message(forward_msg)
        .add_event(event)
        .add_attribute("action", "buy")
        .add_attribute("buyer", info.sender.to_string())
        .add_attribute("beneficiary", beneficiary.to_string())
        .add_attribute("paid", payment.to_string())
        .add_attribute("tokens", tokens_owed.to_string())
        .add_attribute("total_raised", sale.total_raised.to_string()))
}

/// Exactly one non-zero coin of the payment denom.
fn payment_amount(info: &MessageInfo, denom: &str) -> Result<Uint128, ContractError> {
    match info.funds.as_slice() {
        [] => Err(ContractError::InvalidAmount),
        [coin] if coin.denom != denom => Err(ContractError::InvalidDenom {
            expected: denom.to_string(),
            got: coin.denom.clone(),
        }),
        [coin] if coin.amount.is_zero() => Err(ContractError::InvalidAmount),
        [coin] => Ok(coin.amount),
        _ => Err(ContractError::MultipleDenoms),
    }
}
