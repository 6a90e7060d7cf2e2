//! Error types for the nspack resolver.

/// A fully-qualified key was generated more than once.
///
/// This happens when two fields of one element share an id, two elements of
/// one section share a name, or two sections (or modules) share a name and
/// therefore produce the same keys when their results are merged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate key `{key}`")]
pub struct DuplicateKeyError {
    key: String,
}

impl DuplicateKeyError {
    /// Creates a new duplicate key error for `key`.
    #[must_use]
    pub const fn new(key: String) -> Self {
        Self { key }
    }

    /// Returns the key that was generated more than once.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Every duplicate key detected during one collection pass, in the order
/// they were found.
#[derive(Debug, Clone, PartialEq, Eq, Default, thiserror::Error)]
#[error("{}", describe_duplicates(.0))]
pub struct DuplicateKeyErrors(Vec<DuplicateKeyError>);

impl DuplicateKeyErrors {
    /// Creates an empty error list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Records another duplicate key.
    pub fn push(&mut self, error: DuplicateKeyError) {
        self.0.push(error);
    }

    /// Returns the first duplicate key that was detected.
    #[must_use]
    pub fn first(&self) -> Option<&DuplicateKeyError> {
        self.0.first()
    }

    /// Returns the duplicate keys in detection order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(DuplicateKeyError::key)
    }

    /// Returns whether `key` was reported as a duplicate.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys().any(|duplicate| duplicate == key)
    }

    /// Returns the number of duplicates.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no duplicates were detected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<DuplicateKeyError>> for DuplicateKeyErrors {
    fn from(errors: Vec<DuplicateKeyError>) -> Self {
        Self(errors)
    }
}

fn describe_duplicates(errors: &[DuplicateKeyError]) -> String {
    let keys = errors
        .iter()
        .map(|error| format!("`{}`", error.key))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} duplicate key(s): {keys}", errors.len())
}
