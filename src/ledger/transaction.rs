use super::{Amount, Dollars, UserId};

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    Deposit,              // Cash put into the account.
    Withdraw,             // Cash taken out of the account.
    TransferTo(UserId),   // Label on the sender's side of a transfer.
    TransferFrom(UserId), // Label on the recipient's side of a transfer.
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Deposit => write!(f, "Deposit"),
            Kind::Withdraw => write!(f, "Withdraw"),
            Kind::TransferTo(recipient) => write!(f, "Transfer to {}", recipient),
            Kind::TransferFrom(sender) => write!(f, "Transfer from {}", sender),
        }
    }
}

/// One entry of an account's ledger. Once recorded, it is never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    kind: Kind,
    amount: Amount,
}

impl Transaction {
    pub fn new(kind: Kind, amount: Amount) -> Self {
        Self { kind, amount }
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, Dollars(self.amount))
    }
}

#[test]
fn test_transaction_display() {
    use rust_decimal_macros::dec;

    for (tx, want) in vec![
        (Transaction::new(Kind::Deposit, dec!(100)), "Deposit: $100.0"),
        (Transaction::new(Kind::Withdraw, dec!(1.25)), "Withdraw: $1.25"),
        (
            Transaction::new(Kind::TransferTo("user2".to_string()), dec!(50)),
            "Transfer to user2: $50.0",
        ),
        (
            Transaction::new(Kind::TransferFrom("user1".to_string()), dec!(50)),
            "Transfer from user1: $50.0",
        ),
    ] {
        assert_eq!(want, tx.to_string());
    }
}
