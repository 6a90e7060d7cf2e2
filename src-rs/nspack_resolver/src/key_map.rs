//! Key maps produced by the collectors and the builder that fills them.
//!
//! A `KeyMap` is a key-unique map from fully-qualified key to resolved
//! string. Iteration follows insertion order, which is declaration order of
//! the model. That order is a convenience for reading the output and says
//! nothing about the order commands must be submitted in. Use
//! [`KeyMap::sorted`] for a stable, content-derived order.
//!
//! `KeyMapBuilder` refuses to replace an existing key. A repeated key is
//! recorded as a [`DuplicateKeyError`] and the first value is kept, so the
//! partial map stays usable for diagnostics.

use indexmap::IndexMap;

use crate::error::{DuplicateKeyError, DuplicateKeyErrors};

/// A resolved map from fully-qualified key to value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyMap(IndexMap<String, String>);

impl KeyMap {
    /// Returns the value for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns whether the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the entries sorted by key.
    ///
    /// Collectors insert in declaration order, so two models that declare the
    /// same objects in a different order iterate differently. The sorted view
    /// is the same for both.
    ///
    /// # Returns
    ///
    /// Every `(key, value)` pair, ordered by key.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nspack_ir::{Element, Expressions, Field, Section};
    ///
    /// let section = Section::new(
    ///     "servers",
    ///     vec![Element::new(
    ///         "WEB",
    ///         vec![Field::new("name", "WEB"), Field::new("ip", "10.0.0.1")],
    ///         Expressions::default(),
    ///     )],
    /// );
    ///
    /// let fields = nspack_resolver::collect_fields(&section, "pkg").expect("no duplicate keys");
    ///
    /// assert_eq!(
    ///     fields.sorted(),
    ///     vec![("pkg.servers.WEB/ip", "10.0.0.1"), ("pkg.servers.WEB/name", "WEB")],
    /// );
    /// ```
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }
}

/// Builds a [`KeyMap`] while collecting duplicate keys.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyMapBuilder {
    entries: IndexMap<String, String>,
    duplicates: DuplicateKeyErrors,
}

impl KeyMapBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `key` unless the key is already taken.
    ///
    /// A taken key is recorded as a duplicate and the existing value is left
    /// in place, so the first declaration of a key wins.
    ///
    /// # Arguments
    ///
    /// * `key` - The fully-qualified field or element key
    /// * `value` - The resolved field value or command
    pub fn insert(&mut self, key: String, value: String) {
        if self.entries.contains_key(&key) {
            tracing::warn!(%key, "rejected duplicate key");
            self.duplicates.push(DuplicateKeyError::new(key));
            return;
        }

        self.entries.insert(key, value);
    }

    /// Returns the number of accepted entries so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of duplicates recorded so far.
    #[must_use]
    pub const fn duplicate_count(&self) -> usize {
        self.duplicates.len()
    }
}

impl TryFrom<KeyMapBuilder> for KeyMap {
    type Error = (Self, DuplicateKeyErrors);

    /// Converts the builder into a key map.
    ///
    /// # Returns
    ///
    /// The map if no duplicates were recorded. Otherwise the partial map
    /// together with every duplicate, in detection order.
    fn try_from(builder: KeyMapBuilder) -> Result<Self, Self::Error> {
        let key_map = Self(builder.entries);
        if builder.duplicates.is_empty() {
            Ok(key_map)
        } else {
            Err((key_map, builder.duplicates))
        }
    }
}
