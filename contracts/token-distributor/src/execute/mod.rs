pub mod buy;
pub mod set_activity;
pub mod set_round;
pub mod set_transaction_cap;
