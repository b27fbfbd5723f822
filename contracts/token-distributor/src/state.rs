use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// Sale configuration. Identity fields (admin, token, treasury, denom) are
/// fixed at instantiation; the economic fields change only through admin calls.
#[cw_serde]
pub struct Config {
    pub admin: Addr,
    /// CW20 token being distributed
    pub token_cw20: Addr,
    /// Holds the token supply (and the allowance we pull from) and receives payments
    pub treasury: Addr,
    /// Native denom accepted as payment
    pub payment_denom: String,
    /// Tokens granted per unit of payment
    pub rate: u64,
    /// Max payment accepted in a single purchase
    pub transaction_cap: Uint128,
    /// Max cumulative payment ever accepted; only grows
    pub total_cap: Uint128,
    pub active: bool,
}

/// Cumulative sale progress, written only by successful purchases.
#[cw_serde]
#[derive(Default)]
pub struct SaleState {
    pub total_raised: Uint128,
    pub tokens_sold: Uint128,
    pub purchase_count: u64,
}

impl SaleState {
    pub fn cap_left(&self, config: &Config) -> Uint128 {
        config.total_cap.saturating_sub(self.total_raised)
    }

    pub fn cap_reached(&self, config: &Config) -> bool {
        self.total_raised >= config.total_cap
    }

    pub fn phase(&self, config: &Config) -> SalePhase {
        if self.cap_reached(config) {
            SalePhase::CapReached
        } else if config.active {
            SalePhase::Active
        } else {
            SalePhase::Paused
        }
    }
}

#[cw_serde]
pub enum SalePhase {
    Paused,
    Active,
    CapReached,
}

// ---- Storage keys ----

pub const CONFIG: Item<Config> = Item::new("config");
pub const SALE_STATE: Item<SaleState> = Item::new("sale_state");

/// Total payment credited per beneficiary
pub const CONTRIBUTIONS: Map<&Addr, Uint128> = Map::new("contributions");
