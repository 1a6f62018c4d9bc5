use crate::ledger::{
    transaction::{Kind, Transaction},
    Amount,
};

use super::account::Account;

impl Account {
    /// Append a ledger entry without moving the balance.
    pub fn record_transaction(&mut self, kind: Kind, amount: Amount) {
        self.history.push(Transaction::new(kind, amount));
    }
}
