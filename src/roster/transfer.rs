use crate::ledger::{
    account::AccountError,
    transaction::Kind,
    Amount, UserId,
};

use super::Roster;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum TransferError {
    /// Nobody in the roster has the recipient's id.
    #[error("recipient {0:?} not found")]
    RecipientNotFound(UserId),

    /// The session names a user the roster doesn't know.
    #[error("sender {0:?} not found")]
    SenderNotFound(UserId),

    /// The sender can't give, or the recipient can't take, that amount.
    #[error(transparent)]
    Account(#[from] AccountError),
}

impl Roster {
    /// Move `amount` from `sender` to `recipient`.
    ///
    /// Every check happens before any money moves, so a failed transfer leaves
    /// both accounts untouched. On success, each side gets two entries: the
    /// plain withdrawal (or deposit), followed by a label naming the other party.
    pub fn transfer(
        &mut self,
        sender: &str,
        recipient: &str,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let to = self
            .position(recipient)
            .ok_or_else(|| TransferError::RecipientNotFound(recipient.to_string()))?;
        let from = self
            .position(sender)
            .ok_or_else(|| TransferError::SenderNotFound(sender.to_string()))?;

        self.users[to].account().check_deposit(amount)?;
        self.users[from].account_mut().withdraw(amount)?;
        self.users[to].account_mut().deposit(amount)?;

        self.users[from]
            .account_mut()
            .record_transaction(Kind::TransferTo(recipient.to_string()), amount);
        self.users[to]
            .account_mut()
            .record_transaction(Kind::TransferFrom(sender.to_string()), amount);

        tracing::info!(sender, recipient, %amount, "transfer completed");
        Ok(())
    }
}

#[cfg(test)]
mod transfer_tests {
    use crate::ledger::account::AccountError;
    use crate::ledger::transaction::{Kind, Transaction};
    use crate::roster::Roster;

    use super::TransferError;
    use rust_decimal_macros::dec;

    fn balances(roster: &Roster) -> (rust_decimal::Decimal, rust_decimal::Decimal) {
        (
            roster.find("user1").unwrap().account().balance(),
            roster.find("user2").unwrap().account().balance(),
        )
    }

    fn funded_roster() -> Roster {
        let mut roster = Roster::demo();
        roster
            .find_mut("user1")
            .unwrap()
            .account_mut()
            .deposit(dec!(100))
            .unwrap();
        roster
    }

    #[test]
    fn test_transfer_ok() {
        let mut roster = funded_roster();

        let got = roster.transfer("user1", "user2", dec!(50));
        assert_eq!(Ok(()), got);
        assert_eq!((dec!(50), dec!(50)), balances(&roster));

        assert_eq!(
            vec![
                Transaction::new(Kind::Deposit, dec!(100)),
                Transaction::new(Kind::Withdraw, dec!(50)),
                Transaction::new(Kind::TransferTo("user2".to_string()), dec!(50)),
            ],
            roster.find("user1").unwrap().account().history()
        );
        assert_eq!(
            vec![
                Transaction::new(Kind::Deposit, dec!(50)),
                Transaction::new(Kind::TransferFrom("user1".to_string()), dec!(50)),
            ],
            roster.find("user2").unwrap().account().history()
        );
    }

    #[test]
    fn test_transfer_whole_balance() {
        let mut roster = funded_roster();

        assert_eq!(Ok(()), roster.transfer("user1", "user2", dec!(100)));
        assert_eq!((dec!(0), dec!(100)), balances(&roster));
    }

    #[test]
    fn test_transfer_recipient_not_found() {
        let mut roster = funded_roster();

        let got = roster.transfer("user1", "user9", dec!(50));
        assert_eq!(
            Err(TransferError::RecipientNotFound("user9".to_string())),
            got
        );
        assert_eq!((dec!(100), dec!(0)), balances(&roster));
        assert_eq!(1, roster.find("user1").unwrap().account().history().len());
    }

    #[test]
    fn test_transfer_insufficient_funds() {
        let mut roster = funded_roster();

        let got = roster.transfer("user1", "user2", dec!(100.01));
        assert_eq!(
            Err(TransferError::Account(AccountError::InsufficientFunds)),
            got
        );
        assert_eq!((dec!(100), dec!(0)), balances(&roster));
        assert!(roster.find("user2").unwrap().account().history().is_empty());
    }

    #[test]
    fn test_transfer_invalid_amount() {
        for amount in vec![dec!(0), dec!(-10)] {
            let mut roster = funded_roster();

            let got = roster.transfer("user1", "user2", amount);
            assert_eq!(Err(TransferError::Account(AccountError::InvalidAmount)), got);
            assert_eq!((dec!(100), dec!(0)), balances(&roster));
        }
    }

    #[test]
    fn test_transfer_unknown_sender() {
        let mut roster = funded_roster();

        let got = roster.transfer("nobody", "user2", dec!(10));
        assert_eq!(Err(TransferError::SenderNotFound("nobody".to_string())), got);
        assert_eq!((dec!(100), dec!(0)), balances(&roster));
        assert!(roster.find("user2").unwrap().account().history().is_empty());
    }

    #[test]
    fn test_transfer_recipient_overflow() {
        let mut roster = funded_roster();
        roster
            .find_mut("user2")
            .unwrap()
            .account_mut()
            .deposit(rust_decimal::Decimal::MAX)
            .unwrap();

        let got = roster.transfer("user1", "user2", dec!(1));
        assert_eq!(Err(TransferError::Account(AccountError::Overflow)), got);
        assert_eq!(
            (dec!(100), rust_decimal::Decimal::MAX),
            balances(&roster)
        );
        assert_eq!(1, roster.find("user1").unwrap().account().history().len());
        assert_eq!(1, roster.find("user2").unwrap().account().history().len());
    }

    #[test]
    fn test_transfer_to_oneself() {
        let mut roster = funded_roster();

        assert_eq!(Ok(()), roster.transfer("user1", "user1", dec!(40)));
        assert_eq!((dec!(100), dec!(0)), balances(&roster));
        assert_eq!(5, roster.find("user1").unwrap().account().history().len());
    }
}
