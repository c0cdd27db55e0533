mod support;

use ovsdb_client::cond::ErrorConditional;
use ovsdb_client::Conditional;
use ovsdb_core::Error;
use support::IndexedRow;

// ---------------------------------------------------------------------------
// Deferred errors surface from every operation, prefixed
// ---------------------------------------------------------------------------

#[test]
fn generate_surfaces_the_wrapped_error() {
    let cond = ErrorConditional::new(Error::unknown_table("NoSuchTable"));
    let err = Conditional::<IndexedRow>::generate(&cond).unwrap_err();
    assert!(err.is_condition_error());
    assert_eq!(
        err.to_string(),
        "condition error: unknown table: NoSuchTable"
    );
}

#[test]
fn matches_surfaces_the_same_error() {
    let cond = ErrorConditional::new(Error::unknown_table("NoSuchTable"));
    let err = cond.matches(&IndexedRow::default()).unwrap_err();
    assert!(err.is_condition_error());
    assert_eq!(
        err.to_string(),
        "condition error: unknown table: NoSuchTable"
    );
}

#[test]
fn table_is_empty() {
    let cond = ErrorConditional::new(Error::no_index("T"));
    assert_eq!(Conditional::<IndexedRow>::table(&cond), "");
}

#[test]
fn wrapped_kind_stays_inspectable_through_display() {
    let cond = ErrorConditional::new(Error::no_index("TestTable"));
    let err = Conditional::<IndexedRow>::generate(&cond).unwrap_err();
    assert!(err
        .to_string()
        .contains("no usable identifier or index for table TestTable"));
}
