use serde::{Deserialize, Serialize};

use crate::reference::FieldId;

/// One named template value owned by an element.
///
/// `data` is a raw template. It may contain the literal token `{{prefix}}`,
/// which stands for the namespace of the section that hosts the element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    id: FieldId,
    data: String,
}

impl Field {
    /// Creates a new field.
    #[must_use]
    pub fn new(id: impl Into<FieldId>, data: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: data.into(),
        }
    }

    /// Returns the id of the field.
    #[must_use]
    pub const fn id(&self) -> &FieldId {
        &self.id
    }

    /// Returns the raw template data of the field.
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }
}
