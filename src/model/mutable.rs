use std::cell::RefCell;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use super::Address;

/// A user whose address can be reassigned after construction, even while the
/// value sits inside a `HashMap` as a key.
///
/// The address lives behind `Rc<RefCell<_>>` so an [`alias`] handle and a
/// map-owned key share one cell, the same aliasing a garbage-collected
/// runtime hands out for free. `Hash` and `Eq` read the cell's current
/// contents, so reassigning the address changes the hash of every handle at
/// once while the map keeps the entry filed under the hash computed at
/// insertion. That mismatch is the defect this type exists to demonstrate.
///
/// [`alias`]: MutableUser::alias
#[derive(Debug)]
pub struct MutableUser {
    name: String,
    last_name: String,
    age: u32,
    address: Rc<RefCell<Option<Address>>>,
}

impl MutableUser {
    pub fn new(name: &str, last_name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            last_name: last_name.to_string(),
            age,
            address: Rc::new(RefCell::new(None)),
        }
    }

    /// Second handle to the same user. Both handles share the address cell,
    /// so a [`set_address`] through either is visible through both.
    ///
    /// [`set_address`]: MutableUser::set_address
    pub fn alias(&self) -> Self {
        Self {
            name: self.name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
            address: Rc::clone(&self.address),
        }
    }

    /// Fresh user with the same field values but its own address cell:
    /// equal by value without sharing any state.
    pub fn detached(&self) -> Self {
        Self {
            name: self.name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
            address: Rc::new(RefCell::new(self.address.borrow().clone())),
        }
    }

    /// Reassign the address. Takes `&self`: the cell makes this possible on
    /// a shared handle, which is exactly how the key gets mutated behind the
    /// map's back.
    pub fn set_address(&self, address: Address) {
        *self.address.borrow_mut() = Some(address);
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
}

impl PartialEq for MutableUser {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.last_name == other.last_name
            && self.age == other.age
            && *self.address.borrow() == *other.address.borrow()
    }
}

impl Eq for MutableUser {}

impl Hash for MutableUser {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.last_name.hash(state);
        self.age.hash(state);
        self.address.borrow().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::hash::DefaultHasher;

    fn hash_of(user: &MutableUser) -> u64 {
        let mut hasher = DefaultHasher::new();
        user.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn reassigning_address_changes_hash() {
        let bob = MutableUser::new("Bob", "Alison", 23);
        let before = hash_of(&bob);

        bob.set_address(Address::new("Shevchenka", 26));

        assert_ne!(hash_of(&bob), before);
    }

    #[test]
    fn alias_shares_the_address_cell() {
        let bob = MutableUser::new("Bob", "Alison", 23);
        let handle = bob.alias();

        handle.set_address(Address::new("Shevchenka", 26));

        assert_eq!(hash_of(&bob), hash_of(&handle));
        assert_eq!(bob, handle);
    }

    #[test]
    fn detached_copy_is_equal_without_sharing() {
        let bob = MutableUser::new("Bob", "Alison", 23);
        let copy = bob.detached();
        assert_eq!(bob, copy);

        bob.set_address(Address::new("Shevchenka", 26));
        assert_ne!(bob, copy);
    }

    #[test]
    #[allow(clippy::mutable_key_type)]
    fn mutated_key_strands_its_map_entry() {
        let mut favourite_subjects: HashMap<MutableUser, Vec<String>> = HashMap::new();

        let bob = MutableUser::new("Bob", "Alison", 23);
        favourite_subjects.insert(
            bob.alias(),
            vec!["Math".to_string(), "Chemistry".to_string()],
        );

        let found = favourite_subjects.get(&bob);
        assert_eq!(found.map(Vec::as_slice), Some(&["Math".to_string(), "Chemistry".to_string()][..]));
        // Repeated lookups without mutation agree.
        assert_eq!(favourite_subjects.get(&bob), found);

        let pre_mutation = bob.detached();
        bob.set_address(Address::new("Shevchenka", 26));

        // The same handle no longer reaches the entry: it hashes to a new
        // bucket while the entry stayed in the old one.
        assert_eq!(favourite_subjects.get(&bob), None);
        // A key equal to the pre-mutation value hashes to the old bucket,
        // but the stored key no longer compares equal to it.
        assert_eq!(favourite_subjects.get(&pre_mutation), None);
        // The entry itself never moved.
        assert_eq!(favourite_subjects.len(), 1);
    }
}
