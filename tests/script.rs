//! End-to-end tests of the batch protocol: record text in, the exact
//! bytes of the in-order key dump out.

use bstree::script;

fn run_batch(input: &str) -> String {
    let mut output = Vec::new();
    script::run(input.as_bytes(), &mut output).expect("a batch over byte buffers cannot fail");
    String::from_utf8(output).expect("keys render as ASCII")
}

#[test]
fn mixed_batch_prints_surviving_keys_in_order() {
    assert_eq!(run_batch("i 5 i 3 i 8 i 1 r 3"), "1 5 8 ");
}

#[test]
fn insert_then_remove_prints_nothing() {
    assert_eq!(run_batch("i 10 r 10"), "");
}

#[test]
fn empty_input_prints_nothing() {
    assert_eq!(run_batch(""), "");
}

#[test]
fn removing_a_node_with_two_children_promotes_the_successor() {
    assert_eq!(run_batch("i 5 i 2 i 8 i 7 i 9 r 5"), "2 7 8 9 ");
}

#[test]
fn duplicate_inserts_are_both_kept() {
    assert_eq!(run_batch("i 5 i 5"), "5 5 ");
}

#[test]
fn removing_a_duplicated_key_drops_one_instance() {
    assert_eq!(run_batch("i 5 i 5 r 5"), "5 ");
}

#[test]
fn unknown_operation_codes_are_ignored() {
    assert_eq!(run_batch("x 4 i 2 q 9 r 2 i 6"), "6 ");
}

#[test]
fn malformed_key_truncates_the_batch() {
    assert_eq!(run_batch("i 5 i oops i 7"), "5 ");
}

#[test]
fn removing_from_an_empty_tree_is_safe() {
    assert_eq!(run_batch("r 3 i 1"), "1 ");
}

#[test]
fn negative_keys_parse() {
    assert_eq!(run_batch("i -2 i 0 i -5"), "-5 -2 0 ");
}

#[test]
fn any_whitespace_separates_records() {
    assert_eq!(run_batch("i 2\n i 1\t\tr 2\n"), "1 ");
}
