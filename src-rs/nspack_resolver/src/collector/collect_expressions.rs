//! Install and uninstall expression collection.
//!
//! Each element yields one command under `<prefix>.<section>.<element>`.
//! Placeholders naming the element's own fields are promoted to the
//! fully-qualified field keys produced by field collection, so the command
//! and the field map agree on every reference.

use nspack_ir::{ExpressionKind, Field, Section};

use crate::{
    key::{element_key, field_key},
    key_map::KeyMapBuilder,
    placeholder::promote_field_placeholders,
};

/// Adds the `kind` command of every element of `section`, resolved under
/// `prefix`, to `builder`.
pub fn collect_section_expressions(
    section: &Section,
    prefix: &str,
    kind: ExpressionKind,
    builder: &mut KeyMapBuilder,
) {
    for element in section.elements() {
        let key = element_key(prefix, section, element);
        let template = element.expressions().get(kind);

        let command = promote_field_placeholders(
            template,
            element.fields().iter().map(Field::id),
            |field_id| field_key(&key, field_id),
        );

        builder.insert(key, command);
    }

    tracing::debug!(
        section = %section.name(),
        %prefix,
        %kind,
        elements = section.elements().len(),
        "collected section expressions"
    );
}
