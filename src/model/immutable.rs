use super::{Address, InvalidArgument, Language};

/// An immutable user: every field is fixed at construction, so `Hash` and
/// `Eq` output is stable for the value's entire lifetime and the type is safe
/// to use as a `HashMap` key.
///
/// Immutability is enforced at two boundaries. On ingress the constructor
/// deep-copies the caller's address and language sequence instead of
/// retaining references to them; on egress [`languages`] returns a freshly
/// allocated vector. Skipping either copy reintroduces the aliasing defect
/// that [`MutableUser`](super::MutableUser) demonstrates.
///
/// [`languages`]: User::languages
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    name: String,
    last_name: String,
    age: u32,
    address: Address,
    languages: Vec<Language>,
}

impl User {
    /// Build a user from caller-owned parts. The caller keeps its originals;
    /// the new value owns independent copies.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] when `name` or `last_name` is blank or
    /// when `languages` is empty.
    pub fn new(
        name: &str,
        last_name: &str,
        age: u32,
        address: &Address,
        languages: &[Language],
    ) -> Result<Self, InvalidArgument> {
        if name.trim().is_empty() {
            return Err(InvalidArgument("name must not be blank"));
        }
        if last_name.trim().is_empty() {
            return Err(InvalidArgument("last name must not be blank"));
        }
        if languages.is_empty() {
            return Err(InvalidArgument("languages must not be empty"));
        }

        Ok(Self {
            name: name.to_string(),
            last_name: last_name.to_string(),
            age,
            address: address.clone(),
            // to_vec clones every element; each Language owns its string.
            languages: languages.to_vec(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// The owned address, by reference. Asymmetric with [`languages`] on
    /// purpose: a `&Address` cannot be used to mutate the owned value, so
    /// handing it out is safe here where it would not be in a language with
    /// unrestricted aliasing.
    ///
    /// [`languages`]: User::languages
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// A fresh copy of the language sequence, in construction order.
    /// Appending to or rewriting the returned vector never touches the owned
    /// one.
    pub fn languages(&self) -> Vec<Language> {
        self.languages.clone()
    }
}
