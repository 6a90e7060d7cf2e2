//! Dotted name composition.
//!
//! Every entity in a package is addressed by a dotted path built from the
//! names of its owners. The composition rule is the same at every level, so
//! it lives here rather than on each entity.

/// Separator between namespace segments (`package.module.section.element`).
pub const NAMESPACE_SEPARATOR: char = '.';

/// Separator between an element path and a field id (`...element/field`).
pub const FIELD_SEPARATOR: char = '/';

/// Joins `name` onto `prefix` with a [`NAMESPACE_SEPARATOR`].
///
/// An empty prefix yields `name` unchanged, so a root entity never gets a
/// leading separator.
///
/// # Example
///
/// ```rust
/// use nspack_ir::full_name;
///
/// assert_eq!(full_name("TRUSTED_FULL", "prefix"), "prefix.TRUSTED_FULL");
/// assert_eq!(full_name("TRUSTED_FULL", ""), "TRUSTED_FULL");
/// ```
#[must_use]
pub fn full_name(name: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return name.to_string();
    }

    let mut full_name = String::with_capacity(prefix.len() + 1 + name.len());
    full_name.push_str(prefix);
    full_name.push(NAMESPACE_SEPARATOR);
    full_name.push_str(name);
    full_name
}
