//! The ATM itself: log a user in, then serve the main menu until they leave.

use crate::ledger::{account::AccountError, Amount, Dollars, UserId};
use crate::prompt::{self, Prompt};
use crate::roster::{Roster, TransferError};

use std::io::{BufRead, Write};
use std::str::FromStr;

const BANNER: &str = "=== Welcome to the Secure ATM System ===";
const MENU: &str = "
=== ATM Main Menu ===
1. View Transaction History
2. Withdraw Cash
3. Deposit Cash
4. Transfer Funds
5. Exit";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Prompt(#[from] prompt::Error),

    /// The session belongs to a user this ATM's roster doesn't know.
    #[error("unknown user {0:?}")]
    UnknownUser(UserId),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuChoice {
    History,
    Withdraw,
    Deposit,
    Transfer,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = prompt::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::History),
            "2" => Ok(Self::Withdraw),
            "3" => Ok(Self::Deposit),
            "4" => Ok(Self::Transfer),
            "5" => Ok(Self::Exit),
            other => Err(prompt::Error::InvalidMenuChoice(other.to_string())),
        }
    }
}

/// Proof that a user logged in. Only `Atm::authenticate` hands these out.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    user_id: UserId,
}

impl Session {
    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

pub struct Atm<R, W> {
    roster: Roster,
    prompt: Prompt<R, W>,
}

impl<R: BufRead, W: Write> Atm<R, W> {
    pub fn new(roster: Roster, input: R, output: W) -> Self {
        Self {
            roster,
            prompt: Prompt::new(input, output),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn into_roster(self) -> Roster {
        self.roster
    }

    /// Greet, log a user in, and serve them until they choose to exit.
    pub fn start(&mut self) -> Result<(), Error> {
        self.prompt.say(BANNER)?;
        let session = self.authenticate()?;
        self.menu(&session)
    }

    /// Ask for credentials until they match a user of the roster.
    ///
    /// There is no retry limit. The failure message is the same whichever
    /// field was wrong.
    pub fn authenticate(&mut self) -> Result<Session, Error> {
        loop {
            let id = self.prompt.ask("Please enter your User ID: ")?;
            let pin = self.prompt.ask("Please enter your PIN: ")?;

            if let Some(user) = self.roster.authenticate(&id, &pin) {
                let session = Session {
                    user_id: user.id().to_string(),
                };
                tracing::info!(user = session.user_id(), "login succeeded");
                self.prompt.say(format_args!(
                    "Login successful. Welcome, {}!",
                    session.user_id()
                ))?;
                return Ok(session);
            }

            tracing::warn!(user = %id, "login failed");
            self.prompt
                .say("Login failed. Invalid User ID or PIN. Please try again.")?;
        }
    }

    /// Serve the main menu until the user picks "Exit".
    pub fn menu(&mut self, session: &Session) -> Result<(), Error> {
        loop {
            self.prompt.say(MENU)?;
            let answer = self.prompt.ask("Select an option: ")?;

            let choice = match answer.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(err) => {
                    tracing::debug!(%err, "rejected menu choice");
                    self.prompt
                        .say("Invalid selection. Please choose a valid option.")?;
                    continue;
                }
            };
            tracing::debug!(user = session.user_id(), ?choice, "menu choice");

            match choice {
                MenuChoice::History => self.show_history(session)?,
                MenuChoice::Withdraw => self.withdraw(session)?,
                MenuChoice::Deposit => self.deposit(session)?,
                MenuChoice::Transfer => self.transfer(session)?,
                MenuChoice::Exit => {
                    tracing::info!(user = session.user_id(), "session ended");
                    self.prompt
                        .say("Thank you for using the ATM System. Goodbye!")?;
                    return Ok(());
                }
            }
        }
    }

    fn show_history(&mut self, session: &Session) -> Result<(), Error> {
        let user = self
            .roster
            .find(session.user_id())
            .ok_or_else(|| Error::UnknownUser(session.user_id.clone()))?;

        self.prompt.say("Transaction History:")?;
        for transaction in user.account().history() {
            self.prompt.say(transaction)?;
        }

        Ok(())
    }

    fn withdraw(&mut self, session: &Session) -> Result<(), Error> {
        let amount = self.prompt.ask_amount("Enter the amount to withdraw: ")?;

        let account = self
            .roster
            .find_mut(session.user_id())
            .ok_or_else(|| Error::UnknownUser(session.user_id.clone()))?
            .account_mut();

        match account.withdraw(amount) {
            Ok(()) => {
                tracing::info!(user = session.user_id(), %amount, "withdrawal");
                self.prompt
                    .say(format_args!("Withdrawal successful: {}", Dollars(amount)))?;
            }
            Err(AccountError::InsufficientFunds) => {
                self.prompt.say("Error: Insufficient balance!")?;
            }
            Err(err) => self.report(err)?,
        }

        Ok(())
    }

    fn deposit(&mut self, session: &Session) -> Result<(), Error> {
        let amount = self.prompt.ask_amount("Enter the amount to deposit: ")?;

        let account = self
            .roster
            .find_mut(session.user_id())
            .ok_or_else(|| Error::UnknownUser(session.user_id.clone()))?
            .account_mut();

        match account.deposit(amount) {
            Ok(()) => {
                tracing::info!(user = session.user_id(), %amount, "deposit");
                self.prompt
                    .say(format_args!("Deposit successful: {}", Dollars(amount)))?;
            }
            Err(err) => self.report(err)?,
        }

        Ok(())
    }

    fn transfer(&mut self, session: &Session) -> Result<(), Error> {
        let recipient = self
            .prompt
            .ask("Enter the recipient's User ID for the transfer: ")?;
        let amount: Amount = self.prompt.ask_amount("Enter the amount to transfer: ")?;

        match self.roster.transfer(session.user_id(), &recipient, amount) {
            Ok(()) => {
                self.prompt.say(format_args!(
                    "Transfer successful: {} to user {}",
                    Dollars(amount),
                    recipient
                ))?;
            }
            Err(TransferError::RecipientNotFound(_)) => {
                self.prompt.say("Error: Recipient User ID not found.")?;
            }
            Err(TransferError::SenderNotFound(id)) => return Err(Error::UnknownUser(id)),
            Err(TransferError::Account(AccountError::InsufficientFunds)) => {
                self.prompt
                    .say("Error: Insufficient balance for the transfer.")?;
            }
            Err(TransferError::Account(err)) => self.report(err)?,
        }

        Ok(())
    }

    // Amount problems that read the same whatever the operation.
    fn report(&mut self, err: AccountError) -> Result<(), Error> {
        tracing::debug!(%err, "operation refused");
        match err {
            AccountError::InvalidAmount => {
                self.prompt.say("Error: Amount must be greater than zero.")?
            }
            AccountError::Overflow => self.prompt.say("Error: Amount is too large.")?,
            AccountError::InsufficientFunds => self.prompt.say("Error: Insufficient balance!")?,
        }

        Ok(())
    }
}
