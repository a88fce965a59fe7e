use std::collections::HashMap;
use std::io::{self, Write};

use anyhow::Result;

use super::{Scenario, report};
use crate::model::{Address, MutableUser};

/// Shows a mutable value breaking as a `HashMap` key: the map files the
/// entry under the hash the key had at insertion time, so rewriting a hashed
/// field afterwards strands the entry in a bucket no lookup will reach.
pub struct MutableKey {
    io_write: Box<dyn Write>,
}

impl MutableKey {
    pub fn new() -> Self {
        Self {
            io_write: Box::new(io::stdout()),
        }
    }
}

impl Scenario for MutableKey {
    // The unstable key type is what this scenario exists to show.
    #[allow(clippy::mutable_key_type)]
    fn run(&mut self) -> Result<()> {
        let mut favourite_subjects: HashMap<MutableUser, Vec<String>> = HashMap::new();

        let bob = MutableUser::new("Bob", "Alison", 23);
        favourite_subjects.insert(
            bob.alias(),
            vec!["Math".to_string(), "Chemistry".to_string()],
        );

        report(&mut self.io_write, favourite_subjects.get(&bob))?;

        // Rewrites the address inside the map-owned key as well; both
        // handles share the cell.
        bob.set_address(Address::new("Shevchenka", 26));

        report(&mut self.io_write, favourite_subjects.get(&bob))?;

        Ok(())
    }
}
