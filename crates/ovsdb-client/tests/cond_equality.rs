mod support;

use ovsdb_client::cond::EqualityConditional;
use ovsdb_client::Conditional;
use ovsdb_core::wire::{Condition, Value};
use support::*;

fn model(id: &str, name: &str, comp1: &str, comp2: &str) -> IndexedRow {
    IndexedRow {
        id: id.to_string(),
        my_name: name.to_string(),
        comp1: comp1.to_string(),
        comp2: comp2.to_string(),
        ..IndexedRow::default()
    }
}

// ---------------------------------------------------------------------------
// Emission modes
// ---------------------------------------------------------------------------

#[test]
fn disaggregated_yields_one_entry_per_condition() {
    let schema = index_schema();
    let cond = EqualityConditional::new(
        &schema,
        "TestTable",
        false,
        model("", "", "foo", "bar"),
        &[],
    );
    let generated = cond.generate().unwrap();
    assert_eq!(
        generated,
        vec![
            vec![Condition::equal("composed_1", Value::from("foo"))],
            vec![Condition::equal("composed_2", Value::from("bar"))],
        ]
    );
}

#[test]
fn aggregated_yields_one_conjunction() {
    let schema = index_schema();
    let cond = EqualityConditional::new(
        &schema,
        "TestTable",
        true,
        model("", "", "foo", "bar"),
        &[],
    );
    let generated = cond.generate().unwrap();
    assert_eq!(
        generated,
        vec![vec![
            Condition::equal("composed_1", Value::from("foo")),
            Condition::equal("composed_2", Value::from("bar")),
        ]]
    );
}

#[test]
fn uuid_model_yields_a_single_entry_either_way() {
    let schema = index_schema();
    for all in [false, true] {
        let cond =
            EqualityConditional::new(&schema, "TestTable", all, model(UUID0, "foo", "", ""), &[]);
        let generated = cond.generate().unwrap();
        assert_eq!(
            generated,
            vec![vec![Condition::equal("_uuid", Value::uuid(UUID0))]]
        );
    }
}

#[test]
fn field_selectors_govern_generation() {
    let schema = index_schema();
    let cond = EqualityConditional::new(
        &schema,
        "TestTable",
        false,
        model(UUID0, "foo", "", ""),
        &["name"],
    );
    let generated = cond.generate().unwrap();
    assert_eq!(
        generated,
        vec![vec![Condition::equal("name", Value::from("foo"))]]
    );
}

#[test]
fn unusable_model_surfaces_no_index() {
    let schema = index_schema();
    let cond = EqualityConditional::new(&schema, "TestTable", false, IndexedRow::default(), &[]);
    let err = cond.generate().unwrap_err();
    assert!(err.is_no_index());
}

// ---------------------------------------------------------------------------
// Local matching
// ---------------------------------------------------------------------------

#[test]
fn matches_compares_by_index() {
    let schema = index_schema();
    let cond = EqualityConditional::new(
        &schema,
        "TestTable",
        false,
        model("", "foo", "", ""),
        &[],
    );
    assert!(cond.matches(&model("", "foo", "x", "y")).unwrap());
    assert!(!cond.matches(&model("", "bar", "", "")).unwrap());
}

#[test]
fn matches_honors_field_selectors() {
    let schema = index_schema();
    let stored = IndexedRow {
        int1: 42,
        ..model("", "foo", "", "")
    };
    let cond = EqualityConditional::new(&schema, "TestTable", false, stored, &["int1"]);
    // Same int1, different name: the selector decides.
    let candidate = IndexedRow {
        int1: 42,
        ..model("", "bar", "", "")
    };
    assert!(cond.matches(&candidate).unwrap());
}

#[test]
fn table_is_reported() {
    let schema = index_schema();
    let cond =
        EqualityConditional::new(&schema, "TestTable", false, IndexedRow::default(), &[]);
    assert_eq!(Conditional::<IndexedRow>::table(&cond), "TestTable");
}
