use thiserror::Error;

mod address;
mod immutable;
mod language;
mod mutable;

pub use self::address::Address;
pub use self::immutable::User;
pub use self::language::Language;
pub use self::mutable::MutableUser;

/// The single error kind raised by constructors when a required argument is
/// missing or malformed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid argument: {0}")]
pub struct InvalidArgument(pub &'static str);
