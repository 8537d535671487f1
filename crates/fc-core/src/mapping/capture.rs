use super::model::{BindingMap, Direction, DomainMappings, FieldBinding};
use crate::catalog::FieldCatalog;
use crate::form::{DiscoveredInput, MatchPolicy};

/// Matches discovered inputs against every catalog code.
///
/// An input may bind several codes when their values coincide; for a given
/// code the last matching input in document order wins.
pub fn match_inputs(
    inputs: &[DiscoveredInput],
    catalog: &FieldCatalog,
    policy: &dyn MatchPolicy,
) -> BindingMap {
    let codes = catalog.flatten();
    let mut matched = BindingMap::new();

    for input in inputs {
        for entry in &codes {
            if policy.matches(&input.value, &entry.code) {
                matched.insert(
                    entry.code.clone(),
                    FieldBinding {
                        selector: input.selector.clone(),
                        kind: input.kind.clone(),
                        name: input.name.clone(),
                    },
                );
            }
        }
    }

    matched
}

impl DomainMappings {
    /// Captures bindings for one direction of a domain.
    ///
    /// Returns the codes matched in this run; previously captured codes that
    /// did not match again are kept.
    pub fn capture_mapping(
        &mut self,
        domain: &str,
        direction: Direction,
        inputs: &[DiscoveredInput],
        catalog: &FieldCatalog,
        policy: &dyn MatchPolicy,
    ) -> Vec<String> {
        let matched = match_inputs(inputs, catalog, policy);
        let codes = matched.keys().cloned().collect();
        self.merge(domain, direction, matched);
        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FieldCategory;
    use crate::form::{FieldValue, LooseMatchPolicy, StrictMatchPolicy};
    use crate::ports::ElementRef;

    fn input(id: usize, selector: &str, kind: &str, value: FieldValue) -> DiscoveredInput {
        DiscoveredInput {
            element: ElementRef(id),
            selector: selector.into(),
            kind: kind.into(),
            name: None,
            value,
        }
    }

    fn catalog() -> FieldCatalog {
        let mut catalog = FieldCatalog::default();
        catalog.add_field(FieldCategory::Number, "dni", "1").unwrap();
        catalog.add_field(FieldCategory::Text, "nombre", "nom").unwrap();
        catalog
            .add_field(FieldCategory::Boolean, "terminos", "true")
            .unwrap();
        catalog
    }

    #[test]
    fn last_matching_input_wins_per_code() {
        let inputs = vec![
            input(0, "#first", "text", FieldValue::text("1")),
            input(1, "#second", "text", FieldValue::text("1")),
        ];
        let matched = match_inputs(&inputs, &catalog(), &LooseMatchPolicy);
        assert_eq!(matched["1"].selector, "#second");
    }

    #[test]
    fn one_checkbox_can_bind_several_codes() {
        let inputs = vec![input(0, "#acepto", "checkbox", FieldValue::Bool(true))];
        let matched = match_inputs(&inputs, &catalog(), &LooseMatchPolicy);
        assert!(matched.contains_key("true"));
        assert!(matched.contains_key("1"));

        let strict = match_inputs(&inputs, &catalog(), &StrictMatchPolicy);
        assert_eq!(strict.keys().collect::<Vec<_>>(), vec!["true"]);
    }

    #[test]
    fn capture_is_idempotent_and_additive() {
        let mut mappings = DomainMappings::new();
        let first = vec![input(0, "#dni", "text", FieldValue::text("1"))];
        let second = vec![input(0, "#nombre", "text", FieldValue::text("nom"))];

        mappings.capture_mapping("a.example", Direction::Copy, &first, &catalog(), &LooseMatchPolicy);
        let snapshot = mappings.clone();
        mappings.capture_mapping("a.example", Direction::Copy, &first, &catalog(), &LooseMatchPolicy);
        assert_eq!(mappings, snapshot);

        let codes = mappings.capture_mapping(
            "a.example",
            Direction::Copy,
            &second,
            &catalog(),
            &LooseMatchPolicy,
        );
        assert_eq!(codes, vec!["nom".to_string()]);
        assert_eq!(mappings.bindings("a.example", Direction::Copy).len(), 2);
    }
}
