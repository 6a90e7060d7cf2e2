//! Placeholder rewriting.
//!
//! A placeholder is the literal sequence `{{`, some content, `}}`. Only two
//! kinds of content are meaningful here:
//!
//! - `prefix` inside a field value, which becomes the bare name of the
//!   section hosting the field;
//! - the id of a field declared on the same element, inside an install or
//!   uninstall template, which becomes the fully-qualified key of that field.
//!
//! Every other placeholder passes through untouched for a later template
//! expansion stage to resolve.

use nspack_ir::{FieldId, SectionName};

/// Opening delimiter of a placeholder.
pub const PLACEHOLDER_OPEN: &str = "{{";

/// Closing delimiter of a placeholder.
pub const PLACEHOLDER_CLOSE: &str = "}}";

/// The self-referential token that names the hosting section.
pub const PREFIX_PLACEHOLDER: &str = "{{prefix}}";

fn placeholder(content: &str) -> String {
    let mut placeholder =
        String::with_capacity(PLACEHOLDER_OPEN.len() + content.len() + PLACEHOLDER_CLOSE.len());
    placeholder.push_str(PLACEHOLDER_OPEN);
    placeholder.push_str(content);
    placeholder.push_str(PLACEHOLDER_CLOSE);
    placeholder
}

/// Rewrites every `{{prefix}}` in `template` to `{{<section_name>}}`.
///
/// The replacement is the bare section name, never the resolution prefix of
/// the enclosing module or package. Values stay section-qualified so they
/// read the same wherever the module is hosted.
///
/// ```rust
/// use nspack_ir::SectionName;
/// use nspack_resolver::expand_section_prefix;
///
/// let section = SectionName::new("trafficmanagement.loadbalancing.servers");
/// assert_eq!(
///     expand_section_prefix("{{prefix}}expression", &section),
///     "{{trafficmanagement.loadbalancing.servers}}expression",
/// );
/// ```
#[must_use]
pub fn expand_section_prefix(template: &str, section_name: &SectionName) -> String {
    template.replace(PREFIX_PLACEHOLDER, &placeholder(section_name))
}

/// Rewrites each `{{<id>}}` whose id is in `field_ids` to `{{<key>}}`, where
/// the key is produced by `field_key`.
///
/// The template is scanned once from left to right. A placeholder is
/// recognised at any offset, so `{{{name}}}` promotes its inner `{{name}}`.
/// Substituted text is never scanned again. When several ids match at one
/// offset the longest wins.
pub fn promote_field_placeholders<'a>(
    template: &str,
    field_ids: impl IntoIterator<Item = &'a FieldId>,
    field_key: impl Fn(&FieldId) -> String,
) -> String {
    let field_ids: Vec<&FieldId> = field_ids.into_iter().collect();
    if field_ids.is_empty() {
        return template.to_string();
    }

    let mut resolved = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(PLACEHOLDER_OPEN) {
        let (before, candidate) = rest.split_at(start);
        resolved.push_str(before);

        if let Some(field_id) = match_field_placeholder(candidate, &field_ids) {
            let key = field_key(field_id);
            tracing::trace!(field_id = %field_id, %key, "promoted field placeholder");
            resolved.push_str(&placeholder(&key));
            rest = &candidate[placeholder_len(field_id)..];
        } else {
            // only step past one brace so `{{{id}}}` is still found
            resolved.push('{');
            rest = &candidate[1..];
        }
    }

    resolved.push_str(rest);
    resolved
}

/// Returns the longest field id whose placeholder starts `candidate`.
fn match_field_placeholder<'a>(candidate: &str, field_ids: &[&'a FieldId]) -> Option<&'a FieldId> {
    let content = candidate.strip_prefix(PLACEHOLDER_OPEN)?;

    field_ids
        .iter()
        .copied()
        .filter(|field_id| {
            content
                .strip_prefix(field_id.as_str())
                .is_some_and(|after| after.starts_with(PLACEHOLDER_CLOSE))
        })
        .max_by_key(|field_id| field_id.len())
}

fn placeholder_len(field_id: &FieldId) -> usize {
    PLACEHOLDER_OPEN.len() + field_id.len() + PLACEHOLDER_CLOSE.len()
}
