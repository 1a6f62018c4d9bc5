use crate::ledger::{
    transaction::{Kind, Transaction},
    Amount,
};

use super::account::{validate, Account, AccountError};

impl Account {
    pub fn deposit(&mut self, amount: Amount) -> Result<(), AccountError> {
        validate(amount)?;

        self.balance.add(amount)?;
        self.history.push(Transaction::new(Kind::Deposit, amount));

        tracing::debug!(%amount, balance = %self.balance(), "deposit applied");
        Ok(())
    }
}
