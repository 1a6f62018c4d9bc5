use crate::ledger::Amount;

use super::account::AccountError;

/// A balance is a sum of credits (deposits, money coming in)
/// and debits (withdrawals, money going out).
///
/// Keeping both sides separately, rather than a single running total, means
/// each side only ever grows, so overflow is the only arithmetic failure.
#[derive(Debug, Clone)]
pub struct Balance {
    credit: Amount,
    debit: Amount,
}

impl Balance {
    pub const fn new(credit: Amount, debit: Amount) -> Self {
        Self { credit, debit }
    }

    pub fn amount(&self) -> Amount {
        self.credit - self.debit
    }

    pub fn check_add(&self, amount: Amount) -> Result<(), AccountError> {
        self.credit
            .checked_add(amount)
            .map(|_| ())
            .ok_or(AccountError::Overflow)
    }

    pub fn add(&mut self, amount: Amount) -> Result<(), AccountError> {
        self.credit = self
            .credit
            .checked_add(amount)
            .ok_or(AccountError::Overflow)?;

        Ok(())
    }

    pub fn subtract(&mut self, amount: Amount) -> Result<(), AccountError> {
        self.debit = self
            .debit
            .checked_add(amount)
            .ok_or(AccountError::Overflow)?;

        Ok(())
    }
}
