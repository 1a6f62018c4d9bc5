use crate::ledger::{account::Account, UserId};

/// A registered user: an id, a PIN, and the one account they own.
#[derive(Debug)]
pub struct User {
    id: UserId,
    pin: String,
    account: Account,
}

impl User {
    pub fn new(id: impl Into<UserId>, pin: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pin: pin.into(),
            account: Account::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    /// Exact comparison of both fields: case-sensitive, no trimming.
    pub fn matches(&self, id: &str, pin: &str) -> bool {
        self.id == id && self.pin == pin
    }
}

#[test]
fn test_user_matches() {
    let user = User::new("user1", "1234");

    assert!(user.matches("user1", "1234"));
    for (id, pin) in vec![
        ("user1", "9999"),
        ("user2", "1234"),
        ("USER1", "1234"),
        ("user1 ", "1234"),
        ("user1", " 1234"),
        ("", ""),
    ] {
        assert!(!user.matches(id, pin), "{:?}/{:?} should not match", id, pin);
    }
}
