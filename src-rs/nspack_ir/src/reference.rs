//! Name types for the entities of a package.
//!
//! Each level of the model is named by its own newtype so that a section
//! name cannot be passed where an element name is expected. All of them are
//! plain strings underneath and may contain `.` themselves; a section name
//! in particular is usually a dotted namespace path.

use std::{fmt, ops::Deref};

use serde::{Deserialize, Serialize};

macro_rules! name_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new name from a string or string-like value.
            #[must_use]
            pub fn new(name: impl AsRef<str>) -> Self {
                Self(name.as_ref().to_string())
            }

            /// Returns the name as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self::new(name)
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }
    };
}

name_type!(
    /// The id of a field, unique within its owning element.
    ///
    /// An install or uninstall template refers to a field of its own element
    /// with a `{{<id>}}` placeholder.
    FieldId
);

name_type!(
    /// The name of an element, unique within its owning section.
    ElementName
);

name_type!(
    /// The name of a section.
    ///
    /// Section names are namespace paths such as
    /// `trafficmanagement.contentswitching.policies`, not leaf labels.
    SectionName
);

name_type!(
    /// The name of a module, unique within its owning package.
    ModuleName
);

name_type!(
    /// The name of a package. This is the root prefix of every key the
    /// package produces.
    PackageName
);
