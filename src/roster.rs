//! The users known to the ATM.
//!
//! A roster is built once, before the first prompt, and handed to the ATM.
//! Nobody registers or leaves while the ATM runs; only the accounts change.

mod transfer;
mod user;

pub use transfer::TransferError;
pub use user::User;

use crate::ledger::{Amount, DECIMAL_PRECISION};

use rust_decimal_macros::dec;
use serde::Deserialize;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RosterError {
    /// The roster file is malformed.
    #[error("malformed roster: {0}")]
    Csv(String),

    /// Ids must be unique, otherwise logging in would be ambiguous.
    #[error("user {0:?} is listed more than once")]
    DuplicateUser(String),

    /// Opening balances can't be negative.
    #[error("user {0:?} has an invalid opening balance")]
    InvalidBalance(String),
}

impl From<csv::Error> for RosterError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

#[derive(Debug, Default)]
pub struct Roster {
    // Kept in insertion order: lookups are linear scans, first match wins.
    users: Vec<User>,
}

impl Roster {
    /// The two demo users, both starting with an empty account.
    pub fn demo() -> Self {
        Self {
            users: vec![User::new("user1", "1234"), User::new("user2", "5678")],
        }
    }

    /// Read a roster from CSV, with an `id,pin,balance` header.
    ///
    /// `balance` may be left empty. A positive opening balance is booked as a
    /// deposit, so that the account's history still adds up to its balance.
    pub fn from_csv(input: impl std::io::Read) -> Result<Self, RosterError> {
        let buffered = std::io::BufReader::new(input);
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(buffered);

        let mut roster = Self::default();
        for record in reader.deserialize::<UserRecord>() {
            let user = User::try_from(record?)?;
            roster.add(user)?;
        }

        tracing::debug!(users = roster.len(), "roster loaded");
        Ok(roster)
    }

    pub fn add(&mut self, user: User) -> Result<(), RosterError> {
        if self.find(user.id()).is_some() {
            return Err(RosterError::DuplicateUser(user.id().to_string()));
        }

        self.users.push(user);
        Ok(())
    }

    /// The user whose id and PIN both match exactly, if any.
    pub fn authenticate(&self, id: &str, pin: &str) -> Option<&User> {
        self.users.iter().find(|user| user.matches(id, pin))
    }

    pub fn find(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.id() == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.users.iter().position(|user| user.id() == id)
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

// Same approach as for any CSV input: deserialise into a plain record first,
// then convert into the domain type, so that User doesn't need to know about
// the file format.
#[derive(Debug, Deserialize)]
pub struct UserRecord {
    id: String,
    pin: String,
    balance: Option<Amount>,
}

impl TryFrom<UserRecord> for User {
    type Error = RosterError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        let mut user = User::new(record.id, record.pin);

        let opening = record
            .balance
            .unwrap_or_default()
            .round_dp(DECIMAL_PRECISION);
        if opening < dec!(0) {
            return Err(RosterError::InvalidBalance(user.id().to_string()));
        }
        if opening > dec!(0) {
            user.account_mut()
                .deposit(opening)
                .map_err(|_| RosterError::InvalidBalance(user.id().to_string()))?;
        }

        Ok(user)
    }
}
