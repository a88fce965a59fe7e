//! Demonstrations of hash-map key stability.
//!
//! [`model`] holds the value types: two deliberately contrasting `User`
//! variants (a mutable key that breaks `HashMap` lookup, an immutable key
//! that cannot) and their `Address`/`Language` parts. [`scenario`] holds one
//! runner per demonstration.

pub mod model;
pub mod scenario;
