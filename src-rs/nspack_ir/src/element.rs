//! Elements and their install/uninstall command templates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{field::Field, name::full_name, reference::ElementName};

/// Selects one of the two command templates of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
    /// The command that creates the object on the device.
    Install,
    /// The command that removes the object from the device.
    Uninstall,
}

impl fmt::Display for ExpressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Install => write!(f, "install"),
            Self::Uninstall => write!(f, "uninstall"),
        }
    }
}

/// The install and uninstall command templates of an element.
///
/// Both templates may contain `{{<fieldId>}}` placeholders naming fields
/// declared on the same element.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Expressions {
    #[serde(default)]
    install: String,
    #[serde(default)]
    uninstall: String,
}

impl Expressions {
    /// Creates a new template pair.
    #[must_use]
    pub fn new(install: impl Into<String>, uninstall: impl Into<String>) -> Self {
        Self {
            install: install.into(),
            uninstall: uninstall.into(),
        }
    }

    /// Returns the install template.
    #[must_use]
    pub fn install(&self) -> &str {
        &self.install
    }

    /// Returns the uninstall template.
    #[must_use]
    pub fn uninstall(&self) -> &str {
        &self.uninstall
    }

    /// Returns the template selected by `kind`.
    #[must_use]
    pub fn get(&self, kind: ExpressionKind) -> &str {
        match kind {
            ExpressionKind::Install => self.install(),
            ExpressionKind::Uninstall => self.uninstall(),
        }
    }
}

/// A single configuration object definition.
///
/// An element owns an ordered list of fields and a pair of command
/// templates. Field ids are expected to be unique within the element; a
/// repeated id is reported when the owning section is collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    name: ElementName,
    #[serde(default)]
    fields: Vec<Field>,
    #[serde(default)]
    expressions: Expressions,
}

impl Element {
    /// Creates a new element.
    #[must_use]
    pub fn new(name: impl Into<ElementName>, fields: Vec<Field>, expressions: Expressions) -> Self {
        Self {
            name: name.into(),
            fields,
            expressions,
        }
    }

    /// Returns the name of the element.
    #[must_use]
    pub const fn name(&self) -> &ElementName {
        &self.name
    }

    /// Returns the fields of the element in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the command templates of the element.
    #[must_use]
    pub const fn expressions(&self) -> &Expressions {
        &self.expressions
    }

    /// Returns the fully-qualified name of the element under `prefix`.
    ///
    /// ```rust
    /// use nspack_ir::{Element, Expressions};
    ///
    /// let element = Element::new("TRUSTED_FULL", vec![], Expressions::default());
    /// assert_eq!(element.full_name("prefix"), "prefix.TRUSTED_FULL");
    /// ```
    #[must_use]
    pub fn full_name(&self, prefix: &str) -> String {
        full_name(&self.name, prefix)
    }
}
