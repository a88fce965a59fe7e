use std::io::Write;

use anyhow::{Context, Result};

/// A self-contained demonstration that writes its observations to an output
/// stream and finishes.
pub trait Scenario {
    /// Run the demonstration to completion.
    fn run(&mut self) -> Result<()>;
}

mod immutable_value;
mod mutable_key;
#[cfg(test)]
mod shared_buffer;
#[cfg(test)]
pub use self::shared_buffer::SharedBuffer;

pub use self::immutable_value::ImmutableValue;
pub use self::mutable_key::MutableKey;

/// One line per lookup: the payload when found, "absent" when the map came
/// up empty.
fn report(out: &mut dyn Write, payload: Option<&Vec<String>>) -> Result<()> {
    match payload {
        Some(subjects) => writeln!(out, "{subjects:?}"),
        None => writeln!(out, "absent"),
    }
    .context("Failed to write scenario output")
}
