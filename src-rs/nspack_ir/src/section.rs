use serde::{Deserialize, Serialize};

use crate::{element::Element, name::full_name, reference::SectionName};

/// A named collection of elements.
///
/// The name of a section is itself a namespace path
/// (`trafficmanagement.contentswitching.policies`), so every element in it is
/// addressed as `<section name>.<element name>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    name: SectionName,
    #[serde(default)]
    elements: Vec<Element>,
}

impl Section {
    /// Creates a new section.
    #[must_use]
    pub fn new(name: impl Into<SectionName>, elements: Vec<Element>) -> Self {
        Self {
            name: name.into(),
            elements,
        }
    }

    /// Returns the bare name of the section.
    #[must_use]
    pub const fn name(&self) -> &SectionName {
        &self.name
    }

    /// Returns the elements of the section in declaration order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Returns the fully-qualified name of the section under `prefix`.
    #[must_use]
    pub fn full_name(&self, prefix: &str) -> String {
        full_name(&self.name, prefix)
    }
}
