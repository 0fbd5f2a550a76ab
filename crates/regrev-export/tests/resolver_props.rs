//! Property tests for citation-label resolution precedence.

use proptest::prelude::*;

use regrev_export::resolve_citation;

proptest! {
    #[test]
    fn override_always_wins(
        name in ".{0,40}",
        short in ".{0,20}",
        id in "[A-Z]{3}_[0-9]{3}",
        label in ".{1,20}",
    ) {
        let resolved = resolve_citation(Some(&name), Some(&short), &id, Some(&label));
        prop_assert_eq!(resolved, label);
    }

    #[test]
    fn short_name_wins_without_override(
        name in ".{0,40}",
        short in ".{1,20}",
        id in "[A-Z]{3}_[0-9]{3}",
    ) {
        let resolved = resolve_citation(Some(&name), Some(&short), &id, None);
        prop_assert_eq!(resolved, short);
    }

    #[test]
    fn resolution_is_deterministic(
        name in ".{0,40}",
        id in "[A-Z]{3}_[0-9]{3}",
    ) {
        let first = resolve_citation(Some(&name), None, &id, None);
        let second = resolve_citation(Some(&name), None, &id, None);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn blank_official_name_falls_back_to_identifier(
        id in "[A-Z]{3}_[0-9]{3}",
    ) {
        let resolved = resolve_citation(Some(""), None, &id, None);
        prop_assert_eq!(resolved, id);
    }
}
