#[macro_use]
extern crate serde_derive;
extern crate docopt;

use std::process::exit;

use docopt::Docopt;

use keysafe::scenario::{ImmutableValue, MutableKey, Scenario};

const USAGE: &str = "
Keysafe

Demonstrations of hash-map key stability.

Usage:
  keysafe mutable-key
  keysafe immutable-value
  keysafe (-h | --help)

Options:
  -h --help        Show this screen.

Scenarios:
  mutable-key      Mutate a key after insertion and lose its map entry.
  immutable-value  A defensively-copied key shrugs off external mutation.
";

#[derive(Debug, Deserialize)]
struct Args {
    cmd_mutable_key: bool,
    cmd_immutable_value: bool,
}

fn main() {
    let args: Args = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let mut scenario: Box<dyn Scenario> = if args.cmd_mutable_key {
        Box::new(MutableKey::new())
    } else if args.cmd_immutable_value {
        Box::new(ImmutableValue::new())
    } else {
        // Docopt only accepts invocations matching the usage patterns, and
        // every pattern that reaches this point names a scenario.
        unreachable!("no scenario selected");
    };

    if let Err(error) = scenario.run() {
        eprintln!("Error occurred while running scenario: {error:#}");
        exit(1);
    }
}
