//! Property tests for the LMWF parser

use liftmark::domain::SequentialIdGenerator;
use liftmark::parser::{parse_with, DiagnosticCode, ParseResult, ParserOptions};
use liftmark::GroupType;
use proptest::prelude::*;

fn parse(doc: &str) -> ParseResult {
    let ids = SequentialIdGenerator::default();
    parse_with(doc, &ids, &ParserOptions::default())
}

proptest! {
    #[test]
    fn every_list_item_becomes_an_ordered_set(
        sets in prop::collection::vec((1u32..500, 1u32..=100), 1..20)
    ) {
        let mut doc = String::from("# Workout\n## Exercise\n");
        for (weight, reps) in &sets {
            doc.push_str(&format!("- {} x {}\n", weight, reps));
        }

        let parsed = parse(&doc).unwrap();
        let exercise = &parsed.template.exercises[0];

        prop_assert_eq!(exercise.sets.len(), sets.len());
        for (i, (set, (weight, reps))) in exercise.sets.iter().zip(&sets).enumerate() {
            prop_assert_eq!(set.order_index, i);
            prop_assert_eq!(set.target_weight, Some(f64::from(*weight)));
            prop_assert_eq!(set.target_reps, Some(*reps));
        }
    }

    #[test]
    fn superset_children_point_at_the_container(
        names in prop::collection::vec("[A-Z][a-z]{2,10}", 1..6)
    ) {
        let mut doc = String::from("# Workout\n## Superset\n");
        for name in &names {
            doc.push_str(&format!("### {}\n- 20 x 10\n", name));
        }

        let parsed = parse(&doc).unwrap();
        let exercises = &parsed.template.exercises;
        let group = &exercises[0];

        prop_assert_eq!(group.group_type, Some(GroupType::Superset));
        prop_assert!(group.sets.is_empty());
        prop_assert_eq!(exercises.len(), names.len() + 1);
        for child in &exercises[1..] {
            prop_assert_eq!(child.parent_exercise_id.as_ref(), Some(&group.id));
        }
    }

    #[test]
    fn documents_without_headers_fail(
        lines in prop::collection::vec("[a-z0-9 ,.:@-]{0,30}", 0..12)
    ) {
        let doc = lines.join("\n");
        let failure = parse(&doc).unwrap_err();

        prop_assert!(!failure.errors.is_empty());
        prop_assert!(failure.has_code(DiagnosticCode::NoWorkoutHeader));
    }

    #[test]
    fn unknown_units_are_rejected(
        unit in "[a-z]{1,6}".prop_filter("valid unit", |u| !matches!(u.as_str(), "lb" | "lbs" | "kg" | "kgs"))
    ) {
        let doc = format!("# W\n@units: {}\n## Ex\n- 10 x 5\n", unit);
        let failure = parse(&doc).unwrap_err();

        prop_assert!(failure.has_code(DiagnosticCode::InvalidUnits));
        prop_assert_eq!(failure.errors[0].line, 2);
    }

    #[test]
    fn units_are_case_insensitive(
        unit in prop::sample::select(vec!["lb", "LBS", "Lb", "kg", "KGS", "Kg"])
    ) {
        let doc = format!("# W\n@units: {}\n## Ex\n- 10 x 5\n", unit);
        let parsed = parse(&doc).unwrap();

        prop_assert!(parsed.template.default_weight_unit.is_some());
    }

    #[test]
    fn rpe_above_range_is_rejected_on_its_line(hundredths in 1001u32..10000, padding in 0usize..5) {
        let rpe = format!("{}.{:02}", hundredths / 100, hundredths % 100);
        let mut doc = String::from("# W\n## Ex\n");
        for _ in 0..padding {
            doc.push_str("- 10 x 5\n");
        }
        doc.push_str(&format!("- 10 x 5 @rpe: {}\n", rpe));

        let failure = parse(&doc).unwrap_err();
        prop_assert_eq!(failure.errors.len(), 1);
        prop_assert_eq!(failure.errors[0].code, DiagnosticCode::InvalidRpe);
        prop_assert_eq!(failure.errors[0].line, 3 + padding);
    }

    #[test]
    fn rpe_below_range_is_rejected(hundredths in 0u32..100) {
        let doc = format!("# W\n## Ex\n- 10 x 5 @rpe: 0.{:02}\n", hundredths);
        let failure = parse(&doc).unwrap_err();

        prop_assert!(failure.has_code(DiagnosticCode::InvalidRpe));
    }

    #[test]
    fn rpe_within_range_is_accepted(tenths in 10u32..=100) {
        let doc = format!("# W\n## Ex\n- 10 x 5 @rpe: {}.{}\n", tenths / 10, tenths % 10);
        let parsed = parse(&doc).unwrap();
        let rpe = parsed.template.exercises[0].sets[0].target_rpe.unwrap();

        prop_assert!((1.0..=10.0).contains(&rpe));
    }
}
