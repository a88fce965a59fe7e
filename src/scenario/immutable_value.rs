use std::collections::HashMap;
use std::io::{self, Write};

use anyhow::{Context, Result};

use super::{Scenario, report};
use crate::model::{Address, Language, User};

/// Shows a defensively-copied key holding up: the caller mutates every
/// object it used to build the key, plus a copy leaked by an accessor, and
/// the map entry stays reachable with the original payload.
pub struct ImmutableValue {
    io_write: Box<dyn Write>,
}

impl ImmutableValue {
    pub fn new() -> Self {
        Self {
            io_write: Box::new(io::stdout()),
        }
    }
}

impl Scenario for ImmutableValue {
    fn run(&mut self) -> Result<()> {
        let mut favourite_subjects: HashMap<User, Vec<String>> = HashMap::new();

        let mut address = Address::new("Shevchenka", 26);
        let mut languages = vec![Language::new("English"), Language::new("Ukrainian")];

        let bob = User::new("Bob", "Alison", 23, &address, &languages)
            .context("Failed to construct user")?;
        favourite_subjects.insert(
            bob.clone(),
            vec!["Math".to_string(), "Chemistry".to_string()],
        );

        report(&mut self.io_write, favourite_subjects.get(&bob))?;

        // None of these reach the stored key: construction copied the
        // address and the language list, and the accessor returned a fresh
        // vector rather than the owned one.
        languages.push(Language::new("Italian"));
        address.set_street_name("Khreshchatyk");
        let mut leaked = bob.languages();
        leaked[0].set_value("Dutch");

        report(&mut self.io_write, favourite_subjects.get(&bob))?;

        Ok(())
    }
}
