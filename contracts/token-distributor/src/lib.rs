pub mod access;
pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod query;
pub mod state;
pub mod token;

#[cfg(test)]
mod multitest;
