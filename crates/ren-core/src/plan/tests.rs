//! Tests for plan construction and consistency checking.

use super::*;
use crate::token::BracketTag;

fn item_list(raw: &[(&str, &str)]) -> ItemList {
    let pairs: Vec<(String, String)> = raw
        .iter()
        .map(|(o, n)| ((*o).to_string(), (*n).to_string()))
        .collect();
    ItemList::from_pairs(&pairs, &BracketTag).expect("valid pairs")
}

#[test]
fn plan_orders_all_first_phases_before_second_phases() {
    let plan = Plan::new(&item_list(&[("foo", "bar"), ("baz", "qux")]), false, &BracketTag);
    let steps = plan.steps();
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[0].old(), "foo");
    assert_eq!(steps[1].old(), "baz");
    // Second half resolves placeholders in the same order.
    assert_eq!(steps[2].new_value(), "bar");
    assert_eq!(steps[3].new_value(), "qux");
}

#[test]
fn symmetric_plan_interleaves_reverse_direction() {
    let plan = Plan::new(&item_list(&[("cat", "dog")]), true, &BracketTag);
    let steps = plan.steps();
    assert_eq!(steps.len(), 4);
    // Forward and reverse first phases, then forward and reverse second phases.
    assert_eq!(steps[0].old(), "cat");
    assert_eq!(steps[1].old(), "dog");
    assert_eq!(steps[2].new_value(), "dog");
    assert_eq!(steps[3].new_value(), "cat");
}

#[test]
fn non_conflicting_pairs_are_consistent() {
    let plan = Plan::new(&item_list(&[("foo", "bar"), ("baz", "qux")]), false, &BracketTag);
    assert!(plan.is_consistent());
    assert!(plan.conflicts().is_empty());
}

#[test]
fn apply_replaces_every_listed_occurrence() {
    let plan = Plan::new(&item_list(&[("foo", "bar"), ("baz", "qux")]), false, &BracketTag);
    assert_eq!(plan.apply("foo and baz").expect("consistent"), "bar and qux");
}

#[test]
fn apply_leaves_unrelated_text_untouched() {
    let plan = Plan::new(&item_list(&[("foo", "bar")]), false, &BracketTag);
    let text = "nothing matches in this line\n";
    assert_eq!(plan.apply(text).expect("consistent"), text);
}

#[test]
fn symmetric_swap_exchanges_both_values() {
    let plan = Plan::new(&item_list(&[("cat", "dog")]), true, &BracketTag);
    assert!(plan.is_consistent());
    let out = plan.apply("cat chased dog, dog chased cat").expect("consistent");
    assert_eq!(out, "dog chased cat, cat chased dog");
}

#[test]
fn symmetric_swap_with_nested_values_is_flagged() {
    let plan = Plan::new(&item_list(&[("alpha", "alphabet")]), true, &BracketTag);
    // "alphabet" contains "alpha", so the pending patterns overlap.
    assert!(!plan.is_consistent());
}

#[test]
fn overlapping_swap_is_flagged_inconsistent() {
    let plan = Plan::new(&item_list(&[("cat", "at")]), true, &BracketTag);
    assert!(!plan.is_consistent());
    assert!(!plan.conflicts().is_empty());
    let conflict = &plan.conflicts()[0];
    assert_eq!(conflict.value, "at");
    assert_eq!(conflict.pattern, "cat");
}

#[test]
fn replacement_inside_another_source_is_flagged() {
    let plan = Plan::new(&item_list(&[("x", "at"), ("cat", "y")]), false, &BracketTag);
    assert!(!plan.is_consistent());
    let conflict = &plan.conflicts()[0];
    assert_eq!(conflict.kind, ConflictKind::ReplacementInSource);
    assert_eq!(conflict.value, "at");
    assert_eq!(conflict.pattern, "cat");
}

#[test]
fn all_conflicting_pairs_are_reported() {
    // Both "at" values intrude on "cat", and "at" is contained in "cat"
    // as a pending pattern as well.
    let plan = Plan::new(
        &item_list(&[("x", "at"), ("y", "at"), ("cat", "z")]),
        false,
        &BracketTag,
    );
    assert!(!plan.is_consistent());
    assert!(plan.conflicts().len() >= 2);
}

#[test]
fn conflict_indices_stay_in_first_half() {
    let plan = Plan::new(&item_list(&[("cat", "at")]), true, &BracketTag);
    let half = plan.steps().len() / 2;
    for conflict in plan.conflicts() {
        assert!(conflict.value_step < half);
        assert!(conflict.pattern_step < half);
    }
}

#[test]
fn inconsistent_plan_refuses_to_apply() {
    let plan = Plan::new(&item_list(&[("cat", "at")]), true, &BracketTag);
    let err = plan.apply("cat").expect_err("must refuse");
    assert!(matches!(err, ReplacerError::InconsistentPlan { .. }));
}

#[test]
fn construction_is_deterministic() {
    let list = item_list(&[("foo", "bar"), ("cat", "dog")]);
    let a = Plan::new(&list, true, &BracketTag);
    let b = Plan::new(&list, true, &BracketTag);
    assert_eq!(a.steps(), b.steps());
    assert_eq!(a.conflicts(), b.conflicts());
    assert_eq!(a.is_consistent(), b.is_consistent());
}

#[test]
fn chained_values_do_not_cascade() {
    // "cat" -> "dog" and "dog" -> "bird" in one pass must not turn the
    // original cats into birds.
    let plan = Plan::new(&item_list(&[("cat", "dog"), ("dog", "bird")]), false, &BracketTag);
    assert!(plan.is_consistent());
    let out = plan.apply("cat dog").expect("consistent");
    assert_eq!(out, "dog bird");
}

#[test]
fn multiline_content_is_transformed_line_by_line() {
    let plan = Plan::new(&item_list(&[("foo", "bar")]), false, &BracketTag);
    let out = plan.apply("foo\nplain\nfoo\n").expect("consistent");
    assert_eq!(out, "bar\nplain\nbar\n");
}
