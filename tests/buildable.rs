//! The marker attribute must leave decorated structs exactly as written.

#[formwork::buildable]
#[derive(Clone, Debug, PartialEq, Eq)]
struct Candidate {
    id: u32,
    label: String,
}

#[formwork::buildable]
struct Pair<T> {
    left: T,
    right: T,
}

#[formwork::buildable]
struct Opaque(u64);

#[test]
fn marked_structs_are_left_untouched() {
    let candidate = Candidate {
        id: 1,
        label: "a".to_string(),
    };

    let copy = candidate.clone();
    assert_eq!(candidate, copy);
    assert_eq!(copy.id, 1);
    assert_eq!(copy.label, "a");
}

#[test]
fn generic_structs_keep_their_parameters() {
    let pair = Pair {
        left: 1_u8,
        right: 2,
    };
    assert_eq!(pair.left + pair.right, 3);
}

#[test]
fn tuple_structs_are_accepted() {
    let opaque = Opaque(99);
    assert_eq!(opaque.0, 99);
}

#[test]
fn non_struct_items_are_rejected() {
    let cases = trybuild::TestCases::new();
    cases.compile_fail("tests/ui/*.rs");
}
