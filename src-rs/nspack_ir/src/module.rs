//! Modules and the packages that host them.

use serde::{Deserialize, Serialize};

use crate::{
    name::full_name,
    reference::{ModuleName, PackageName},
    section::Section,
};

/// A named collection of sections, resolved under a package prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    name: ModuleName,
    #[serde(default)]
    sections: Vec<Section>,
}

impl Module {
    /// Creates a new module.
    #[must_use]
    pub fn new(name: impl Into<ModuleName>, sections: Vec<Section>) -> Self {
        Self {
            name: name.into(),
            sections,
        }
    }

    /// Returns the name of the module.
    #[must_use]
    pub const fn name(&self) -> &ModuleName {
        &self.name
    }

    /// Returns the sections of the module in declaration order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the fully-qualified name of the module under
    /// `package_prefix`. This is the prefix every key of the module is
    /// generated under.
    ///
    /// ```rust
    /// use nspack_ir::Module;
    ///
    /// let module = Module::new("moduleName", vec![]);
    /// assert_eq!(module.full_name("packageName"), "packageName.moduleName");
    /// ```
    #[must_use]
    pub fn full_name(&self, package_prefix: &str) -> String {
        full_name(&self.name, package_prefix)
    }
}

/// The top-level unit of a configuration build.
///
/// A package supplies the root namespace: each of its modules is resolved
/// under the package name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    name: PackageName,
    #[serde(default)]
    modules: Vec<Module>,
}

impl Package {
    /// Creates a new package.
    #[must_use]
    pub fn new(name: impl Into<PackageName>, modules: Vec<Module>) -> Self {
        Self {
            name: name.into(),
            modules,
        }
    }

    /// Returns the name of the package.
    #[must_use]
    pub const fn name(&self) -> &PackageName {
        &self.name
    }

    /// Returns the modules of the package in declaration order.
    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }
}
