//! Флаг «приветствие уже показано» для каждой роли.
//!
//! Значение читается из хранилища один раз за сессию; после `dismiss`
//! флаг остаётся установленным, даже если хранилище запись потеряло.

use crate::enums::Role;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;

pub const VISITED_SUFFIX: &str = "_visited";
const DISMISSED_VALUE: &str = "true";

/// Browser-style string key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store, used in tests and when localStorage is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

/// Storage key, e.g. `distributor_visited`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OnboardingKey(String);

impl OnboardingKey {
    pub fn for_role(role: Role) -> Self {
        Self::with_suffix(role, VISITED_SUFFIX)
    }

    pub fn with_suffix(role: Role, suffix: &str) -> Self {
        Self(format!("{}{}", role.code(), suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OnboardingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingFlag {
    pub role: Role,
    pub dismissed: bool,
}

pub struct Onboarding<S: KeyValueStore> {
    store: S,
    suffix: String,
    loaded: RefCell<HashMap<Role, OnboardingFlag>>,
    dismissed: RefCell<HashSet<Role>>,
}

impl<S: KeyValueStore> Onboarding<S> {
    pub fn new(store: S) -> Self {
        Self::with_suffix(store, VISITED_SUFFIX)
    }

    pub fn with_suffix(store: S, suffix: &str) -> Self {
        Self {
            store,
            suffix: suffix.to_string(),
            loaded: RefCell::new(HashMap::new()),
            dismissed: RefCell::new(HashSet::new()),
        }
    }

    fn key(&self, role: Role) -> OnboardingKey {
        OnboardingKey::with_suffix(role, &self.suffix)
    }

    pub fn flag(&self, role: Role) -> OnboardingFlag {
        if self.dismissed.borrow().contains(&role) {
            return OnboardingFlag {
                role,
                dismissed: true,
            };
        }

        *self.loaded.borrow_mut().entry(role).or_insert_with(|| {
            let key = self.key(role);
            let dismissed = self.store.get(key.as_str()).as_deref() == Some(DISMISSED_VALUE);
            log::debug!("onboarding flag {} = {}", key, dismissed);
            OnboardingFlag { role, dismissed }
        })
    }

    pub fn should_show_welcome(&self, role: Role) -> bool {
        !self.flag(role).dismissed
    }

    /// Idempotent; the store is written only on the first call.
    pub fn dismiss(&self, role: Role) {
        if !self.dismissed.borrow_mut().insert(role) {
            return;
        }
        let key = self.key(role);
        self.store.set(key.as_str(), DISMISSED_VALUE);
        log::debug!("onboarding dismissed: {}", key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingStore {
        inner: MemoryStore,
        writes: Cell<u32>,
        reads: Cell<u32>,
    }

    impl KeyValueStore for CountingStore {
        fn get(&self, key: &str) -> Option<String> {
            self.reads.set(self.reads.get() + 1);
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) {
            self.writes.set(self.writes.get() + 1);
            self.inner.set(key, value)
        }
    }

    fn counting() -> CountingStore {
        CountingStore {
            inner: MemoryStore::new(),
            writes: Cell::new(0),
            reads: Cell::new(0),
        }
    }

    #[test]
    fn test_keys() {
        assert_eq!(OnboardingKey::for_role(Role::Retailer).as_str(), "retailer_visited");
        assert_eq!(
            OnboardingKey::with_suffix(Role::Wholesaler, "_seen").to_string(),
            "wholesaler_seen"
        );
    }

    #[test]
    fn test_fresh_store_shows_welcome() {
        let onboarding = Onboarding::new(MemoryStore::new());
        assert!(onboarding.should_show_welcome(Role::Manufacturer));
    }

    #[test]
    fn test_dismiss_persists_into_next_session() {
        let store = MemoryStore::new();
        {
            let session = Onboarding::new(&store);
            session.dismiss(Role::Distributor);
            assert!(!session.should_show_welcome(Role::Distributor));
        }
        assert_eq!(store.get("distributor_visited").as_deref(), Some("true"));

        let next = Onboarding::new(&store);
        assert!(!next.should_show_welcome(Role::Distributor));
        assert!(next.should_show_welcome(Role::Retailer));
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let store = counting();
        let onboarding = Onboarding::new(&store);
        onboarding.dismiss(Role::Wholesaler);
        onboarding.dismiss(Role::Wholesaler);
        assert_eq!(store.writes.get(), 1);
    }

    #[test]
    fn test_store_read_once_per_session() {
        let store = counting();
        let onboarding = Onboarding::new(&store);
        for _ in 0..3 {
            onboarding.should_show_welcome(Role::Retailer);
        }
        assert_eq!(store.reads.get(), 1);
    }

    #[test]
    fn test_dismissed_never_reverts() {
        let store = MemoryStore::new();
        let onboarding = Onboarding::new(&store);
        onboarding.dismiss(Role::Retailer);
        store.set("retailer_visited", "false");
        assert!(!onboarding.should_show_welcome(Role::Retailer));
    }
}
