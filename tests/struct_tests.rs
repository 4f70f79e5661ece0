//! Integration tests for typed records.

use rstest::rstest;
use typekind::data::struct_::{HNil, Label, get, insert};
use typekind::{label, omit, pick, record};

label!(A = "a"; B = "b"; C = "c");

#[rstest]
fn pick_returns_only_requested_fields() {
    let source = record! { A: "a", B: 1, C: true };
    assert_eq!(pick!(source, A, B), record! { A: "a", B: 1 });
}

#[rstest]
fn omit_removes_requested_fields() {
    let source = record! { A: "a", B: 1, C: true };
    assert_eq!(omit!(source, C), record! { A: "a", B: 1 });
}

#[rstest]
fn pick_and_omit_partition_a_record() {
    let source = record! { A: 1, B: 2, C: 3 };
    assert_eq!(pick!(source, B), record! { B: 2 });
    assert_eq!(omit!(source, B), record! { A: 1, C: 3 });
}

#[rstest]
fn empty_record_prints_as_record() {
    assert_eq!(format!("{HNil:?}"), "Record");
    assert_eq!(record! {}, HNil);
}

#[rstest]
fn insert_then_get() {
    let source = insert(record! { A: 'x' }, B, "why");
    assert_eq!(*get(&source, A), 'x');
    assert_eq!(*get(&source, B), "why");
}

#[rstest]
fn labels_expose_their_names() {
    assert_eq!(A::NAME, "a");
    assert_eq!(C::NAME, "c");
}
