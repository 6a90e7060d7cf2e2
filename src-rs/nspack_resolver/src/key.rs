//! Fully-qualified key composition.
//!
//! Keys are always qualified by the full resolution prefix, so two modules
//! hosting the same section produce distinct keys while two sections with
//! the same name inside one module collide.

use nspack_ir::{Element, FIELD_SEPARATOR, FieldId, Section};

/// Returns the key of `element` inside `section` under `prefix`:
/// `<prefix>.<section>.<element>`.
#[must_use]
pub fn element_key(prefix: &str, section: &Section, element: &Element) -> String {
    element.full_name(&section.full_name(prefix))
}

/// Returns the key of a field of the element addressed by `element_key`:
/// `<element key>/<field id>`.
#[must_use]
pub fn field_key(element_key: &str, field_id: &FieldId) -> String {
    let mut key = String::with_capacity(element_key.len() + 1 + field_id.len());
    key.push_str(element_key);
    key.push(FIELD_SEPARATOR);
    key.push_str(field_id);
    key
}
