pub mod account;
pub mod transaction;

use std::fmt;

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability: `HashMap<UserId, Account>` says more than `HashMap<String, Account>`.
pub type UserId = String;

// A decimal library instead of f64, so that 0.1 + 0.2 is 0.3 on the screen
// and in the balance.
pub type Amount = rust_decimal::Decimal;
pub const DECIMAL_PRECISION: u32 = 4;

/// Displays an amount the way the ATM prints it: a dollar sign and at least
/// one fractional digit, e.g. `$100.0` or `$12.75`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dollars(pub Amount);

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut amount = self.0.normalize();
        if amount.scale() == 0 {
            amount.rescale(1);
        }

        write!(f, "${}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::Dollars;
    use rust_decimal_macros::dec;

    #[test]
    fn test_dollars_display() {
        for (amount, want) in vec![
            (dec!(100), "$100.0"),
            (dec!(100.00), "$100.0"),
            (dec!(0), "$0.0"),
            (dec!(12.5), "$12.5"),
            (dec!(12.750), "$12.75"),
            (dec!(0.0001), "$0.0001"),
        ] {
            assert_eq!(want, Dollars(amount).to_string());
        }
    }
}
