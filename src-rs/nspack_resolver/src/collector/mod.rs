//! Collectors over sections, modules and packages.
//!
//! Section collectors write into a shared [`KeyMapBuilder`]. Module and
//! package collection thread one builder through every child, so a key that
//! only collides once two sections (or modules) are merged is caught the
//! same way as a collision inside a single section.

mod collect_expressions;
mod collect_fields;

use nspack_ir::{ExpressionKind, Module, Package, Section};

use crate::key_map::KeyMapBuilder;

pub use collect_expressions::collect_section_expressions;
pub use collect_fields::collect_section_fields;

/// Which key map a collection pass produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    /// Field key to expanded field value.
    Fields,
    /// Element key to resolved install or uninstall command.
    Expressions(ExpressionKind),
}

impl CollectionKind {
    /// Adds `section`, resolved under `prefix`, to `builder`.
    pub fn collect_section(self, section: &Section, prefix: &str, builder: &mut KeyMapBuilder) {
        match self {
            Self::Fields => collect_section_fields(section, prefix, builder),
            Self::Expressions(kind) => collect_section_expressions(section, prefix, kind, builder),
        }
    }
}

/// Adds every section of `module` to `builder`, resolved under the module's
/// full name below `package_prefix`.
pub fn collect_module(
    module: &Module,
    package_prefix: &str,
    kind: CollectionKind,
    builder: &mut KeyMapBuilder,
) {
    let prefix = module.full_name(package_prefix);
    let duplicates_before = builder.duplicate_count();

    for section in module.sections() {
        kind.collect_section(section, &prefix, builder);
    }

    tracing::debug!(
        module = %module.name(),
        %prefix,
        ?kind,
        sections = module.sections().len(),
        duplicates = builder.duplicate_count() - duplicates_before,
        "collected module"
    );
}

/// Adds every module of `package` to `builder`, each resolved under the
/// package name.
pub fn collect_package(package: &Package, kind: CollectionKind, builder: &mut KeyMapBuilder) {
    for module in package.modules() {
        collect_module(module, package.name(), kind, builder);
    }

    tracing::debug!(
        package = %package.name(),
        ?kind,
        modules = package.modules().len(),
        entries = builder.len(),
        "collected package"
    );
}
