use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::state::SalePhase;

#[cw_serde]
pub struct InstantiateMsg {
    /// Initial tokens per unit of payment (must be > 0)
    pub rate: u64,
    /// Holds the token supply and receives payments
    pub treasury: String,
    /// CW20 token contract address
    pub token_cw20: String,
    /// Max payment per purchase (must be > 0)
    pub transaction_cap: Uint128,
    /// Max cumulative payment
    pub total_cap: Uint128,
    /// Address allowed to configure the sale
    pub admin: String,
    /// Native denom accepted as payment
    pub payment_denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Buy tokens by attaching native payment funds.
    /// Tokens go to `beneficiary`, or to the sender when omitted.
    Buy { beneficiary: Option<String> },

    /// Admin: start a new pricing round. The cap increase is added to the total cap.
    SetRound { rate: u64, cap_increase: Uint128 },

    /// Admin: pause or resume purchases
    SetActivity { active: bool },

    /// Admin: replace the per-transaction cap
    SetTransactionCap { cap: Uint128 },
}

/// Message for contract migration
#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(RateResponse)]
    Rate {},

    /// Current total cap
    #[returns(CapResponse)]
    Cap {},

    #[returns(CapLeftResponse)]
    CapLeft {},

    #[returns(CapReachedResponse)]
    CapReached {},

    #[returns(ConfigResponse)]
    Config {},

    #[returns(SaleStateResponse)]
    SaleState {},

    /// Phase plus the headline numbers
    #[returns(StatusResponse)]
    Status {},

    /// Tokens the distributor can still pull from the treasury
    #[returns(RemainingTokensResponse)]
    RemainingTokens {},

    /// Total payment credited to `address`
    #[returns(ContributionResponse)]
    Contribution { address: String },
}

// ---- Response types ----

#[cw_serde]
pub struct RateResponse {
    pub rate: u64,
}

#[cw_serde]
pub struct CapResponse {
    pub cap: Uint128,
}

#[cw_serde]
pub struct CapLeftResponse {
    pub cap_left: Uint128,
}

#[cw_serde]
pub struct CapReachedResponse {
    pub cap_reached: bool,
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub token_cw20: Addr,
    pub treasury: Addr,
    pub payment_denom: String,
    pub rate: u64,
    pub transaction_cap: Uint128,
    pub total_cap: Uint128,
    pub active: bool,
}

#[cw_serde]
pub struct SaleStateResponse {
    pub total_raised: Uint128,
    pub tokens_sold: Uint128,
    pub purchase_count: u64,
}

#[cw_serde]
pub struct StatusResponse {
    pub phase: SalePhase,
    pub rate: u64,
    pub cap: Uint128,
    pub cap_left: Uint128,
    pub transaction_cap: Uint128,
}

#[cw_serde]
pub struct RemainingTokensResponse {
    pub remaining: Uint128,
    pub allowance: Uint128,
    pub treasury_balance: Uint128,
}

#[cw_serde]
pub struct ContributionResponse {
    pub address: Addr,
    pub amount: Uint128,
}
