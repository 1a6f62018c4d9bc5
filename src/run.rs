use crate::roster::Roster;
use crate::session::{Atm, Error};

use std::io::{BufRead, Write};

/// Run one complete ATM visit: banner, login, menu, goodbye.
///
/// The roster is handed back once the user exits, with every balance and
/// history as the visit left them.
pub fn run(roster: Roster, input: impl BufRead, output: impl Write) -> Result<Roster, Error> {
    let mut atm = Atm::new(roster, input, output);
    atm.start()?;

    Ok(atm.into_roster())
}
