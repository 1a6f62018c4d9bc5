//! A console ATM over an in-memory roster of users.
//!
//! ledger: accounts, their balance, and the history of what moved it.
//! roster: the users allowed to log in, and transfers between them.
//! session: the login loop and the main menu.

pub mod config;
pub mod ledger;
pub mod logging;
pub mod prompt;
pub mod roster;
pub mod run;
pub mod session;
