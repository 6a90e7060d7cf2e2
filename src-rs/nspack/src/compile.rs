//! Whole-module and whole-package compilation.
//!
//! Compilation runs the field collector and both expression collectors over
//! the same model. The three passes are independent; a duplicate found by
//! any of them fails the compilation, and the partial output of all three is
//! kept for diagnostics.

use nspack_ir::{Module, Package};
use nspack_resolver::{
    CollectResult, DuplicateKeyError, DuplicateKeyErrors, KeyMap, collect_module_fields,
    collect_module_install_expressions, collect_module_uninstall_expressions,
    collect_package_fields, collect_package_install_expressions,
    collect_package_uninstall_expressions,
};

/// The resolved output of a module or package.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandSet {
    fields: KeyMap,
    install: KeyMap,
    uninstall: KeyMap,
}

impl CommandSet {
    /// Returns the field key to value map.
    #[must_use]
    pub const fn fields(&self) -> &KeyMap {
        &self.fields
    }

    /// Returns the element key to install command map.
    #[must_use]
    pub const fn install(&self) -> &KeyMap {
        &self.install
    }

    /// Returns the element key to uninstall command map.
    #[must_use]
    pub const fn uninstall(&self) -> &KeyMap {
        &self.uninstall
    }

    /// Consumes the set and returns the field, install and uninstall maps.
    #[must_use]
    pub fn into_parts(self) -> (KeyMap, KeyMap, KeyMap) {
        (self.fields, self.install, self.uninstall)
    }
}

/// Compilation found duplicate keys.
///
/// Holds the partial command set and the duplicates of each pass
/// separately, since a field collision and an element collision point at
/// different authoring mistakes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "{}",
    describe_compile_error(.field_duplicates, .install_duplicates, .uninstall_duplicates)
)]
pub struct CompileError {
    partial: CommandSet,
    field_duplicates: DuplicateKeyErrors,
    install_duplicates: DuplicateKeyErrors,
    uninstall_duplicates: DuplicateKeyErrors,
}

impl CompileError {
    /// Returns the best-effort output of the failed compilation.
    #[must_use]
    pub const fn partial(&self) -> &CommandSet {
        &self.partial
    }

    /// Returns the duplicate field keys.
    #[must_use]
    pub const fn field_duplicates(&self) -> &DuplicateKeyErrors {
        &self.field_duplicates
    }

    /// Returns the duplicate element keys of the install pass.
    #[must_use]
    pub const fn install_duplicates(&self) -> &DuplicateKeyErrors {
        &self.install_duplicates
    }

    /// Returns the duplicate element keys of the uninstall pass.
    #[must_use]
    pub const fn uninstall_duplicates(&self) -> &DuplicateKeyErrors {
        &self.uninstall_duplicates
    }

    /// Returns the first duplicate found, looking at fields, then install,
    /// then uninstall.
    #[must_use]
    pub fn first(&self) -> Option<&DuplicateKeyError> {
        self.field_duplicates
            .first()
            .or_else(|| self.install_duplicates.first())
            .or_else(|| self.uninstall_duplicates.first())
    }

    /// Consumes the error and returns the partial command set.
    #[must_use]
    pub fn into_partial(self) -> CommandSet {
        self.partial
    }
}

fn describe_compile_error(
    field_duplicates: &DuplicateKeyErrors,
    install_duplicates: &DuplicateKeyErrors,
    uninstall_duplicates: &DuplicateKeyErrors,
) -> String {
    let passes = [
        ("field", field_duplicates),
        ("install", install_duplicates),
        ("uninstall", uninstall_duplicates),
    ];

    let details = passes
        .iter()
        .filter(|(_, duplicates)| !duplicates.is_empty())
        .map(|(pass, duplicates)| format!("{pass} pass: {duplicates}"))
        .collect::<Vec<_>>()
        .join("; ");

    format!("compilation failed with duplicate keys - {details}")
}

fn split(result: CollectResult) -> (KeyMap, DuplicateKeyErrors) {
    match result {
        Ok(key_map) => (key_map, DuplicateKeyErrors::new()),
        Err(error) => *error,
    }
}

fn assemble(
    name: &str,
    fields: CollectResult,
    install: CollectResult,
    uninstall: CollectResult,
) -> Result<CommandSet, Box<CompileError>> {
    let (fields, field_duplicates) = split(fields);
    let (install, install_duplicates) = split(install);
    let (uninstall, uninstall_duplicates) = split(uninstall);

    let command_set = CommandSet {
        fields,
        install,
        uninstall,
    };

    if field_duplicates.is_empty() && install_duplicates.is_empty() && uninstall_duplicates.is_empty()
    {
        tracing::info!(
            unit = %name,
            fields = command_set.fields.len(),
            install = command_set.install.len(),
            uninstall = command_set.uninstall.len(),
            "compiled"
        );
        return Ok(command_set);
    }

    tracing::warn!(
        unit = %name,
        field_duplicates = field_duplicates.len(),
        install_duplicates = install_duplicates.len(),
        uninstall_duplicates = uninstall_duplicates.len(),
        "compilation failed with duplicate keys"
    );

    Err(Box::new(CompileError {
        partial: command_set,
        field_duplicates,
        install_duplicates,
        uninstall_duplicates,
    }))
}

/// Compiles `module` under `package_prefix`.
///
/// # Errors
///
/// Returns a [`CompileError`] holding the partial output if any pass
/// generated a key twice.
pub fn compile_module(
    module: &Module,
    package_prefix: &str,
) -> Result<CommandSet, Box<CompileError>> {
    let name = module.full_name(package_prefix);

    assemble(
        &name,
        collect_module_fields(module, package_prefix),
        collect_module_install_expressions(module, package_prefix),
        collect_module_uninstall_expressions(module, package_prefix),
    )
}

/// Compiles every module of `package` under the package name.
///
/// # Errors
///
/// Returns a [`CompileError`] holding the partial output if any pass
/// generated a key twice, including keys shared by two modules.
pub fn compile_package(package: &Package) -> Result<CommandSet, Box<CompileError>> {
    assemble(
        package.name(),
        collect_package_fields(package),
        collect_package_install_expressions(package),
        collect_package_uninstall_expressions(package),
    )
}

#[cfg(test)]
mod tests {
    use nspack_ir::{Element, Expressions, Field, Section};

    use super::*;

    fn server(name: &str) -> Element {
        Element::new(
            name,
            vec![
                Field::new("name", format!("{{{{prefix}}}}{name}")),
                Field::new("ip", "10.0.0.1"),
            ],
            Expressions::new("add server {{name}} {{ip}}", "rm server {{name}}"),
        )
    }

    #[test]
    fn compile_module_produces_all_three_maps() {
        let module = Module::new(
            "lb",
            vec![Section::new(
                "trafficmanagement.loadbalancing.servers",
                vec![server("WEB1"), server("WEB2")],
            )],
        );

        let command_set = compile_module(&module, "pkg").expect("no duplicate keys");

        assert_eq!(command_set.fields().len(), 4);
        assert_eq!(
            command_set.install().get("pkg.lb.trafficmanagement.loadbalancing.servers.WEB1"),
            Some(
                "add server {{pkg.lb.trafficmanagement.loadbalancing.servers.WEB1/name}} \
                 {{pkg.lb.trafficmanagement.loadbalancing.servers.WEB1/ip}}"
            )
        );
        assert_eq!(command_set.uninstall().len(), 2);
    }

    #[test]
    fn duplicates_are_reported_per_pass() {
        let module = Module::new(
            "lb",
            vec![Section::new("a.servers", vec![server("WEB1"), server("WEB1")])],
        );

        let error = compile_module(&module, "pkg").expect_err("repeated element");

        assert_eq!(error.field_duplicates().len(), 2);
        assert_eq!(error.install_duplicates().len(), 1);
        assert_eq!(error.uninstall_duplicates().len(), 1);
        assert_eq!(
            error.first().map(DuplicateKeyError::key),
            Some("pkg.lb.a.servers.WEB1/name")
        );
        assert_eq!(error.partial().install().len(), 1);
        assert!(
            error
                .to_string()
                .contains("install pass: 1 duplicate key(s): `pkg.lb.a.servers.WEB1`")
        );
    }
}
