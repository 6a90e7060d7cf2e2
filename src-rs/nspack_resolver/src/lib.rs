//! nspack resolver
//!
//! This crate resolves an [`nspack_ir`] model graph into the key maps that
//! an install or uninstall run is built from:
//!
//! - **Fields**: `<prefix>.<section>.<element>/<field>` to the field value,
//!   with `{{prefix}}` rewritten to `{{<section>}}`
//! - **Install expressions**: `<prefix>.<section>.<element>` to the install
//!   command, with each `{{<field>}}` promoted to `{{<field key>}}`
//! - **Uninstall expressions**: the same for the uninstall command
//!
//! Collection works at three levels. A section is resolved under an
//! explicit prefix. A module is resolved under its own full name below a
//! package prefix. A package resolves each of its modules under the package
//! name.
//!
//! # Errors
//!
//! The only failure is a key that would be generated twice. Collection does
//! not stop at the first duplicate: every collector returns either the
//! complete map, or the best-effort partial map together with every
//! duplicate it found. The first value for a key is never replaced.
//!
//! # Ordering
//!
//! Returned maps iterate in declaration order. That order is not a
//! submission order for the device; dependency ordering between objects is
//! left to the caller. [`KeyMap::sorted`] gives a stable view for output
//! that needs to be diffed or snapshotted.
//!
//! # Example
//!
//! ```rust
//! use nspack_ir::{Element, Expressions, Field, Module, Section};
//!
//! let module = Module::new(
//!     "moduleName",
//!     vec![Section::new(
//!         "trafficmanagement.contentswitching.policies",
//!         vec![Element::new(
//!             "TRUSTED_FULL",
//!             vec![Field::new("name", "{{prefix}}TRUSTED_FULL")],
//!             Expressions::new("add cs policy {{name}}", "rm cs policy {{name}}"),
//!         )],
//!     )],
//! );
//!
//! let uninstall = nspack_resolver::collect_module_uninstall_expressions(&module, "packageName")
//!     .expect("no duplicate keys");
//!
//! assert_eq!(
//!     uninstall.get("packageName.moduleName.trafficmanagement.contentswitching.policies.TRUSTED_FULL"),
//!     Some("rm cs policy {{packageName.moduleName.trafficmanagement.contentswitching.policies.TRUSTED_FULL/name}}"),
//! );
//! ```

use nspack_ir::{ExpressionKind, Module, Package, Section};

mod collector;
pub mod error;
mod key;
mod key_map;
mod placeholder;

#[cfg(test)]
mod test;

use crate::{collector::CollectionKind, key_map::KeyMapBuilder};

pub use crate::error::{DuplicateKeyError, DuplicateKeyErrors};
pub use crate::key::{element_key, field_key};
pub use crate::key_map::KeyMap;
pub use crate::placeholder::{
    PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN, PREFIX_PLACEHOLDER, expand_section_prefix,
    promote_field_placeholders,
};

/// The partial map and every duplicate key of a failed collection.
pub type CollectErr = Box<(KeyMap, DuplicateKeyErrors)>;

/// The outcome of a collection pass.
pub type CollectResult = Result<KeyMap, CollectErr>;

fn finish(builder: KeyMapBuilder) -> CollectResult {
    KeyMap::try_from(builder).map_err(Box::new)
}

fn collect_from_section(section: &Section, prefix: &str, kind: CollectionKind) -> CollectResult {
    let mut builder = KeyMapBuilder::new();
    kind.collect_section(section, prefix, &mut builder);
    finish(builder)
}

fn collect_from_module(module: &Module, package_prefix: &str, kind: CollectionKind) -> CollectResult {
    let mut builder = KeyMapBuilder::new();
    collector::collect_module(module, package_prefix, kind, &mut builder);
    finish(builder)
}

fn collect_from_package(package: &Package, kind: CollectionKind) -> CollectResult {
    let mut builder = KeyMapBuilder::new();
    collector::collect_package(package, kind, &mut builder);
    finish(builder)
}

/// Collects the fields of `section` resolved under `prefix`.
///
/// Each field is stored under `<prefix>.<section>.<element>/<field id>` with
/// `{{prefix}}` in its data rewritten to the bare section name.
///
/// # Arguments
///
/// * `section` - The section whose elements' fields are collected
/// * `prefix` - The resolution prefix, usually `<package>.<module>`; may be empty
///
/// # Returns
///
/// One entry per field, in declaration order.
///
/// # Errors
///
/// Returns the partial map and the duplicate keys if two fields of one
/// element share an id or two elements share a name.
///
/// # Example
///
/// ```rust
/// use nspack_ir::{Element, Expressions, Field, Section};
///
/// let section = Section::new(
///     "trafficmanagement.loadbalancing.servers",
///     vec![Element::new(
///         "WEB",
///         vec![Field::new("name", "{{prefix}}WEB")],
///         Expressions::default(),
///     )],
/// );
///
/// let fields = nspack_resolver::collect_fields(&section, "pkg.mod").expect("no duplicate keys");
///
/// assert_eq!(
///     fields.get("pkg.mod.trafficmanagement.loadbalancing.servers.WEB/name"),
///     Some("{{trafficmanagement.loadbalancing.servers}}WEB"),
/// );
/// ```
pub fn collect_fields(section: &Section, prefix: &str) -> CollectResult {
    collect_from_section(section, prefix, CollectionKind::Fields)
}

/// Collects the `kind` command of every element of `section` resolved under
/// `prefix`.
///
/// Placeholders naming one of the element's own fields are promoted to the
/// field's fully-qualified key, so the commands refer to entries of the map
/// returned by [`collect_fields`] for the same section and prefix. Every
/// other placeholder is left as written.
///
/// # Arguments
///
/// * `section` - The section whose elements' commands are collected
/// * `prefix` - The resolution prefix, usually `<package>.<module>`
/// * `kind` - Whether to collect install or uninstall commands
///
/// # Returns
///
/// One command per element, keyed by `<prefix>.<section>.<element>`.
///
/// # Errors
///
/// Returns the partial map and the duplicate keys if two elements share a
/// name.
pub fn collect_expressions(section: &Section, prefix: &str, kind: ExpressionKind) -> CollectResult {
    collect_from_section(section, prefix, CollectionKind::Expressions(kind))
}

/// Collects the install command of every element of `section`.
///
/// # Errors
///
/// See [`collect_expressions`].
pub fn collect_install_expressions(section: &Section, prefix: &str) -> CollectResult {
    collect_expressions(section, prefix, ExpressionKind::Install)
}

/// Collects the uninstall command of every element of `section`.
///
/// # Errors
///
/// See [`collect_expressions`].
pub fn collect_uninstall_expressions(section: &Section, prefix: &str) -> CollectResult {
    collect_expressions(section, prefix, ExpressionKind::Uninstall)
}

/// Collects the fields of every section of `module`, resolved under
/// `<package_prefix>.<module>`.
///
/// All sections share one key space, so two sections with the same name
/// collide even when each is clean on its own.
///
/// # Arguments
///
/// * `module` - The module to collect
/// * `package_prefix` - The name of the hosting package; may be empty
///
/// # Errors
///
/// Returns the partial map and the duplicate keys, including collisions
/// that only appear once sections sharing a name are merged.
pub fn collect_module_fields(module: &Module, package_prefix: &str) -> CollectResult {
    collect_from_module(module, package_prefix, CollectionKind::Fields)
}

/// Collects the `kind` commands of every section of `module`.
///
/// # Errors
///
/// See [`collect_module_fields`].
pub fn collect_module_expressions(
    module: &Module,
    package_prefix: &str,
    kind: ExpressionKind,
) -> CollectResult {
    collect_from_module(module, package_prefix, CollectionKind::Expressions(kind))
}

/// Collects the install commands of every section of `module`.
///
/// # Errors
///
/// See [`collect_module_fields`].
pub fn collect_module_install_expressions(module: &Module, package_prefix: &str) -> CollectResult {
    collect_module_expressions(module, package_prefix, ExpressionKind::Install)
}

/// Collects the uninstall commands of every section of `module`.
///
/// # Errors
///
/// See [`collect_module_fields`].
pub fn collect_module_uninstall_expressions(
    module: &Module,
    package_prefix: &str,
) -> CollectResult {
    collect_module_expressions(module, package_prefix, ExpressionKind::Uninstall)
}

/// Collects the fields of every module of `package`.
///
/// # Errors
///
/// Returns the partial map and the duplicate keys, including collisions
/// between modules sharing a name.
pub fn collect_package_fields(package: &Package) -> CollectResult {
    collect_from_package(package, CollectionKind::Fields)
}

/// Collects the `kind` commands of every module of `package`.
///
/// # Errors
///
/// See [`collect_package_fields`].
pub fn collect_package_expressions(package: &Package, kind: ExpressionKind) -> CollectResult {
    collect_from_package(package, CollectionKind::Expressions(kind))
}

/// Collects the install commands of every module of `package`.
///
/// # Errors
///
/// See [`collect_package_fields`].
pub fn collect_package_install_expressions(package: &Package) -> CollectResult {
    collect_package_expressions(package, ExpressionKind::Install)
}

/// Collects the uninstall commands of every module of `package`.
///
/// # Errors
///
/// See [`collect_package_fields`].
pub fn collect_package_uninstall_expressions(package: &Package) -> CollectResult {
    collect_package_expressions(package, ExpressionKind::Uninstall)
}
