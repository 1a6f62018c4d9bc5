#[allow(clippy::module_inception)]
pub mod account;
pub mod balance;
mod deposit;
mod record;
mod withdrawal;

pub use account::{Account, AccountError};
