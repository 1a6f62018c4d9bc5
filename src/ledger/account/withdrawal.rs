use crate::ledger::{
    transaction::{Kind, Transaction},
    Amount,
};

use super::account::{validate, Account, AccountError};

impl Account {
    pub fn withdraw(&mut self, amount: Amount) -> Result<(), AccountError> {
        validate(amount)?;

        if amount > self.balance() {
            return Err(AccountError::InsufficientFunds);
        }

        self.balance.subtract(amount)?;
        self.history.push(Transaction::new(Kind::Withdraw, amount));

        tracing::debug!(%amount, balance = %self.balance(), "withdrawal applied");
        Ok(())
    }
}
