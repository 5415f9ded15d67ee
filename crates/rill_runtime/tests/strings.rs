use rill_runtime::{Cell, RuntimeConfig, RuntimeError};

mod common;
use common::{runtime, runtime_with, str_of};

#[test]
fn concat_joins_bytes_in_order() {
    let (mut rt, _console) = runtime();
    let a = rt.new_string("foo").unwrap().to_cell();
    let b = rt.new_string("bar").unwrap().to_cell();
    let joined = rt.concat(a, b).unwrap();
    assert_eq!(str_of(&rt, joined), "foobar");
}

#[test]
fn concat_treats_null_as_empty() {
    let (mut rt, _console) = runtime();
    let x = rt.new_string("x").unwrap().to_cell();

    let left_null = rt.concat(Cell::NULL, x).unwrap();
    assert_eq!(str_of(&rt, left_null), "x");

    let right_null = rt.concat(x, Cell::NULL).unwrap();
    assert_eq!(str_of(&rt, right_null), "x");

    let both_null = rt.concat(Cell::NULL, Cell::NULL).unwrap();
    assert_eq!(str_of(&rt, both_null), "");
}

#[test]
fn concat_always_allocates_a_fresh_buffer() {
    let (mut rt, _console) = runtime();
    let a = rt.new_string("same").unwrap().to_cell();
    let first = rt.concat(a, Cell::NULL).unwrap();
    let second = rt.concat(a, Cell::NULL).unwrap();
    assert_ne!(first.handle(), second.handle());
    assert_eq!(str_of(&rt, first), str_of(&rt, second));
}

#[test]
fn int_to_string_round_trips_the_edges() {
    let (mut rt, _console) = runtime();
    for v in [0i64, i64::MIN, i64::MAX, -1] {
        let s = rt.int_to_string(v).unwrap();
        let parsed: i64 = str_of(&rt, s).parse().unwrap();
        assert_eq!(parsed, v);
    }
}

#[test]
fn int_to_string_includes_the_sign() {
    let (mut rt, _console) = runtime();
    let s = rt.int_to_string(-42).unwrap();
    assert_eq!(str_of(&rt, s), "-42");
}

#[test]
fn concat_surfaces_allocation_failure() {
    let config = RuntimeConfig {
        arena_byte_cap: 16,
        ..RuntimeConfig::default()
    };
    let (mut rt, _console) = runtime_with(&[], config);
    let a = rt.new_string("0123456789").unwrap().to_cell();
    let err = rt.concat(a, a).unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::AllocFailed { context: "string_concat", .. }
    ));
    assert!(err.is_fatal());
}
