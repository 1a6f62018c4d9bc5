use crate::ledger::{transaction::Transaction, Amount};

use super::balance::Balance;
use rust_decimal_macros::dec;

/// Note: I chose to keep errors simple here: the console only ever needs a
/// one-line message, and the caller already knows which account and amount
/// it was dealing with.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum AccountError {
    /// Funds in the account are insufficient for a withdrawal.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// Deposits and withdrawals must move a strictly positive amount.
    #[error("amount must be greater than zero")]
    InvalidAmount,

    /// Adding more money to the balance would overflow.
    #[error("balance overflow")]
    Overflow,
}

/// Account holds a balance and the ledger of everything that moved it.
///
/// The balance always equals the signed sum of the deposits and withdrawals
/// in `history`: both are only ever updated together, through `deposit`
/// and `withdraw`. Entries added with `record_transaction` are labels and
/// leave the balance untouched.
#[derive(Debug)]
pub struct Account {
    pub(super) balance: Balance,

    // Insertion order is chronological order.
    pub(super) history: Vec<Transaction>,
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}

impl Account {
    pub fn new() -> Self {
        Self {
            balance: Balance::new(dec!(0), dec!(0)),
            history: Vec::new(),
        }
    }

    /// Calculate the current balance.
    pub fn balance(&self) -> Amount {
        self.balance.amount()
    }

    /// Every transaction recorded on this account, oldest first.
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Fails without touching the account if `amount` could not be deposited.
    /// Used to check the recipient of a transfer before money leaves the sender.
    pub fn check_deposit(&self, amount: Amount) -> Result<(), AccountError> {
        validate(amount)?;
        self.balance.check_add(amount)
    }
}

pub(super) fn validate(amount: Amount) -> Result<(), AccountError> {
    if amount <= dec!(0) {
        return Err(AccountError::InvalidAmount);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::ledger::account::account::{Account, AccountError, Balance};
    use crate::ledger::transaction::{Kind, Transaction};

    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_new_account_is_empty() {
        let acc = Account::new();
        assert_eq!(dec!(0), acc.balance());
        assert!(acc.history().is_empty());
    }

    #[test]
    fn test_balance_follows_history() {
        let mut acc = Account::new();

        acc.deposit(dec!(100)).expect("should deposit");
        assert_eq!(dec!(100), acc.balance());

        acc.withdraw(dec!(30.5)).expect("should withdraw");
        assert_eq!(dec!(69.5), acc.balance());

        // A failed withdrawal neither moves the balance nor shows up in the history.
        assert_eq!(Err(AccountError::InsufficientFunds), acc.withdraw(dec!(70)));
        assert_eq!(dec!(69.5), acc.balance());

        acc.deposit(dec!(0.5)).expect("should deposit");
        assert_eq!(dec!(70), acc.balance());

        assert_eq!(
            vec![
                Transaction::new(Kind::Deposit, dec!(100)),
                Transaction::new(Kind::Withdraw, dec!(30.5)),
                Transaction::new(Kind::Deposit, dec!(0.5)),
            ],
            acc.history()
        );
    }

    #[test]
    fn test_check_deposit() {
        let acc = Account::new();
        assert_eq!(Ok(()), acc.check_deposit(dec!(10)));
        assert_eq!(Err(AccountError::InvalidAmount), acc.check_deposit(dec!(0)));

        let very_big_number = Decimal::from_str("70000000000000000000000000000").unwrap();
        let acc = Account {
            balance: Balance::new(very_big_number, dec!(0)),
            history: Vec::new(),
        };
        assert_eq!(
            Err(AccountError::Overflow),
            acc.check_deposit(very_big_number)
        );
    }
}
