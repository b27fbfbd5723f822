use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized: caller does not have the admin role")]
    Unauthorized,

    #[error("Invalid rate: must be > 0")]
    InvalidRate,

    #[error("Invalid transaction cap: must be > 0")]
    InvalidTransactionCap,

    #[error("Sale is paused")]
    SalePaused,

    #[error("Exceeds transaction cap of {cap}")]
    TransactionCapExceeded { cap: String },

    #[error("Exceeds total cap: {cap_left} left")]
    TotalCapExceeded { cap_left: String },

    #[error("Settlement failed: need {required} tokens, treasury allowance {allowance}, balance {balance}")]
    SettlementFailure {
        required: String,
        allowance: String,
        balance: String,
    },

    #[error("Payment amount must be greater than zero")]
    InvalidAmount,

    #[error("Send exactly one coin denomination")]
    MultipleDenoms,

    #[error("Invalid denom: expected {expected}, got {got}")]
    InvalidDenom { expected: String, got: String },
}
