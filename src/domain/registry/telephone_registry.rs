use slotmap::{SlotMap, new_key_type};
use std::collections::HashMap;

use crate::domain::user::User;
use crate::domain::utils::id::PhoneNumber;

new_key_type! {
    pub struct UserKey;
}

/// Registry of all users of a zone, keyed by phone number.
///
/// Users live in a `SlotMap`; the phone index maps the public key onto the internal slot.
#[derive(Debug, Default)]
pub struct TelephoneRegistry {
    /// User storage.
    slots: SlotMap<UserKey, User>,

    /// Index lookup internal key (UserKey) using the phone number.
    phone_index: HashMap<PhoneNumber, UserKey>,
}

impl TelephoneRegistry {
    pub fn new() -> Self {
        Self { slots: SlotMap::with_key(), phone_index: HashMap::new() }
    }

    /// Inserts a user under `phone`.
    ///
    /// # Returns
    /// Returns the previously stored user if the phone number was already present (update semantics).
    pub fn insert(&mut self, phone: PhoneNumber, user: User) -> Option<User> {
        if let Some(key) = self.phone_index.get(&phone) {
            if let Some(slot) = self.slots.get_mut(*key) {
                return Some(std::mem::replace(slot, user));
            }
        }

        let key = self.slots.insert(user);
        self.phone_index.insert(phone, key);
        None
    }

    pub fn get(&self, phone: &PhoneNumber) -> Option<&User> {
        self.phone_index.get(phone).and_then(|key| self.slots.get(*key))
    }

    pub fn get_mut(&mut self, phone: &PhoneNumber) -> Option<&mut User> {
        let key = *self.phone_index.get(phone)?;
        self.slots.get_mut(key)
    }

    pub fn contains(&self, phone: &PhoneNumber) -> bool {
        self.phone_index.contains_key(phone)
    }

    /// Removes the user registered under `phone` and returns it.
    pub fn remove(&mut self, phone: &PhoneNumber) -> Option<User> {
        let key = self.phone_index.remove(phone)?;
        self.slots.remove(key)
    }

    pub fn count(&self) -> usize {
        self.phone_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phone_index.is_empty()
    }

    /// All registered users. Iteration order is unspecified.
    pub fn all_users(&self) -> impl Iterator<Item = &User> {
        self.slots.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::Position;

    fn user(name: &str, phone: &str) -> User {
        User::new(name, phone, Position::new(0.0, 0.0)).unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let mut registry = TelephoneRegistry::new();
        let phone = PhoneNumber::new("5551234");

        assert!(registry.insert(phone.clone(), user("Alice", "5551234")).is_none());

        assert_eq!(registry.count(), 1);
        assert_eq!(registry.get(&phone).map(|u| u.get_name()), Some("Alice"));
        assert!(registry.get(&PhoneNumber::new("5550000")).is_none());
    }

    #[test]
    fn test_insert_same_key_overwrites_without_growing() {
        let mut registry = TelephoneRegistry::new();
        let phone = PhoneNumber::new("5551234");

        registry.insert(phone.clone(), user("Alice", "5551234"));
        let previous = registry.insert(phone.clone(), user("Alicia", "5551234"));

        assert_eq!(previous.map(|u| u.get_name().to_string()), Some("Alice".to_string()));
        assert_eq!(registry.count(), 1, "Overwrite must not change the count");
        assert_eq!(registry.get(&phone).unwrap().get_name(), "Alicia");
    }

    #[test]
    fn test_remove_returns_value_and_decrements() {
        let mut registry = TelephoneRegistry::new();
        let phone = PhoneNumber::new("5551234");
        registry.insert(phone.clone(), user("Alice", "5551234"));
        registry.insert(PhoneNumber::new("5555678"), user("Bob", "5555678"));

        let removed = registry.remove(&phone);

        assert_eq!(removed.map(|u| u.get_name().to_string()), Some("Alice".to_string()));
        assert_eq!(registry.count(), 1);
        assert!(!registry.contains(&phone));
        assert!(registry.remove(&phone).is_none(), "Second remove must report absence");
    }

    #[test]
    fn test_all_users_enumerates_every_entry() {
        let mut registry = TelephoneRegistry::new();
        for (name, phone) in [("A", "1111111"), ("B", "2222222"), ("C", "3333333")] {
            registry.insert(PhoneNumber::new(phone), user(name, phone));
        }

        let mut names: Vec<&str> = registry.all_users().map(|u| u.get_name()).collect();
        names.sort();

        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
