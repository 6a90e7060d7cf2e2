//! Field collection.
//!
//! Every field of every element of a section is stored under
//! `<prefix>.<section>.<element>/<field id>`, with `{{prefix}}` in its data
//! rewritten to the bare section name.

use nspack_ir::Section;

use crate::{
    key::{element_key, field_key},
    key_map::KeyMapBuilder,
    placeholder::expand_section_prefix,
};

/// Adds the fields of `section`, resolved under `prefix`, to `builder`.
pub fn collect_section_fields(section: &Section, prefix: &str, builder: &mut KeyMapBuilder) {
    let mut field_count = 0usize;

    for element in section.elements() {
        let element_key = element_key(prefix, section, element);

        for field in element.fields() {
            let key = field_key(&element_key, field.id());
            let value = expand_section_prefix(field.data(), section.name());
            builder.insert(key, value);
            field_count += 1;
        }
    }

    tracing::debug!(
        section = %section.name(),
        %prefix,
        fields = field_count,
        "collected section fields"
    );
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use nspack_ir::{Element, Expressions, Field, Module, Section};
    use proptest::prelude::*;

    use crate::{
        collect_fields, collect_module_fields,
        test::construct::{
            POLICIES, policies, policy_trusted_full, policy_trusted_full_repeated_field,
            policy_untrusted_full,
        },
    };

    const PREFIX: &str = "packageName.moduleName";

    #[test]
    fn distinct_fields_yield_one_entry_each() {
        let section = policies(vec![policy_trusted_full(), policy_untrusted_full()]);

        let fields = collect_fields(&section, PREFIX).expect("no duplicate keys");

        assert_eq!(fields.len(), 6);
        assert_eq!(
            fields.get(
                "packageName.moduleName.trafficmanagement.contentswitching.policies.TRUSTED_FULL/name"
            ),
            Some("{{trafficmanagement.contentswitching.policies}}TRUSTED_FULL")
        );
        assert_eq!(
            fields.get(
                "packageName.moduleName.trafficmanagement.contentswitching.policies.UNTRUSTED_FULL/action"
            ),
            Some("{{core.placeholders.csa_untrusted_full}}")
        );
    }

    #[test]
    fn field_values_keep_foreign_placeholders() {
        let section = policies(vec![policy_trusted_full()]);

        let fields = collect_fields(&section, PREFIX).expect("no duplicate keys");

        assert_eq!(
            fields.get(
                "packageName.moduleName.trafficmanagement.contentswitching.policies.TRUSTED_FULL/expression"
            ),
            Some("q{{{core.appexpert.expressions.contentswitching.policies.trusted_full/name}}}")
        );
    }

    #[test]
    fn repeated_field_id_is_a_duplicate_key() {
        let section = policies(vec![
            policy_trusted_full_repeated_field(),
            policy_untrusted_full(),
        ]);

        let error = collect_fields(&section, PREFIX).expect_err("repeated field id");
        let (partial, duplicates) = *error;

        let key = "packageName.moduleName.trafficmanagement.contentswitching.policies.TRUSTED_FULL/name";
        assert_eq!(duplicates.keys().collect::<Vec<_>>(), vec![key]);
        assert_eq!(
            partial.get(key),
            Some("{{trafficmanagement.contentswitching.policies}}TRUSTED_FULL")
        );
        // collection carries on past the duplicate
        assert_eq!(partial.len(), 6);
    }

    #[test]
    fn repeated_element_name_is_a_duplicate_key() {
        let section = policies(vec![
            policy_trusted_full(),
            policy_untrusted_full(),
            policy_untrusted_full(),
        ]);

        let error = collect_fields(&section, PREFIX).expect_err("repeated element name");
        let (partial, duplicates) = *error;

        assert_eq!(partial.len(), 6);
        assert_eq!(duplicates.len(), 3);
        assert!(duplicates.keys().all(|key| key.contains(".UNTRUSTED_FULL/")));
    }

    #[test]
    fn empty_section_yields_empty_map() {
        let section = Section::new(POLICIES, vec![]);

        let fields = collect_fields(&section, PREFIX).expect("no duplicate keys");

        assert!(fields.is_empty());
    }

    #[test]
    fn element_without_fields_contributes_nothing() {
        let section = Section::new(
            "a.b",
            vec![Element::new("E", vec![], Expressions::new("show", "clear"))],
        );

        let fields = collect_fields(&section, "p").expect("no duplicate keys");

        assert!(fields.is_empty());
    }

    #[test]
    fn prefix_token_uses_bare_section_name() {
        let section = Section::new(
            "trafficmanagement.loadbalancing.servers",
            vec![Element::new(
                "WEB",
                vec![Field::new("name", "{{prefix}}WEB")],
                Expressions::default(),
            )],
        );

        let fields = collect_fields(&section, "pkg.mod").expect("no duplicate keys");

        assert_eq!(
            fields.iter().collect::<Vec<_>>(),
            vec![(
                "pkg.mod.trafficmanagement.loadbalancing.servers.WEB/name",
                "{{trafficmanagement.loadbalancing.servers}}WEB"
            )]
        );
    }

    /// Section name to element name to field ids.
    type Layout = Vec<(String, Vec<(String, Vec<String>)>)>;

    /// Lowercase dotted section names and uppercase element names cannot
    /// produce the same `<section>.<element>` from two different pairs.
    fn distinct_layout() -> impl Strategy<Value = Layout> {
        let fields = prop::collection::btree_set("[a-z]{1,6}", 1..4);
        let elements = prop::collection::btree_map("[A-Z_]{1,8}", fields, 1..4);
        prop::collection::btree_map("[a-z]{1,6}(\\.[a-z]{1,6}){0,2}", elements, 1..4)
            .prop_map(|sections: BTreeMap<String, BTreeMap<String, BTreeSet<String>>>| {
                sections
                    .into_iter()
                    .map(|(section, elements)| {
                        let elements = elements
                            .into_iter()
                            .map(|(element, ids)| (element, ids.into_iter().collect()))
                            .collect();
                        (section, elements)
                    })
                    .collect()
            })
    }

    fn module_from(layout: &Layout) -> Module {
        let sections = layout
            .iter()
            .map(|(section, elements)| {
                let elements = elements
                    .iter()
                    .map(|(element, ids)| {
                        let fields = ids
                            .iter()
                            .map(|id| Field::new(id.as_str(), format!("{{{{prefix}}}}{element}")))
                            .collect();
                        Element::new(element.as_str(), fields, Expressions::default())
                    })
                    .collect();
                Section::new(section.as_str(), elements)
            })
            .collect();

        Module::new("mod", sections)
    }

    fn field_count(layout: &Layout) -> usize {
        layout
            .iter()
            .flat_map(|(_, elements)| elements)
            .map(|(_, ids)| ids.len())
            .sum()
    }

    proptest! {
        #[test]
        fn distinct_names_yield_one_entry_per_field(layout in distinct_layout()) {
            let module = module_from(&layout);

            let fields = collect_module_fields(&module, "pkg");

            prop_assert!(fields.is_ok());
            prop_assert_eq!(
                fields.map(|fields| fields.len()).unwrap_or_default(),
                field_count(&layout)
            );
        }

        #[test]
        fn any_repeated_name_is_reported(layout in distinct_layout(), repeated in 0..3usize) {
            let mut layout = layout;
            let (section, elements) = layout[0].clone();
            let (element, ids) = elements[0].clone();
            let key = format!("pkg.mod.{section}.{element}/{}", ids[0]);

            match repeated {
                0 => layout[0].1[0].1.push(ids[0].clone()),
                1 => layout[0].1.push((element, ids)),
                _ => layout.push((section, elements)),
            }

            let error = collect_module_fields(&module_from(&layout), "pkg");

            prop_assert!(error.is_err());
            let duplicates = error
                .err()
                .map(|error| {
                    let (_, duplicates) = *error;
                    duplicates
                })
                .unwrap_or_default();
            prop_assert!(duplicates.contains_key(&key), "`{}` not reported", key);
        }
    }
}
