use proptest::prelude::*;
use rill_runtime::{Cell, MemConsole, Runtime, RuntimeConfig, SMALL_INT_MAX, SMALL_INT_MIN};

fn mem_runtime() -> (Runtime, MemConsole) {
    let console = MemConsole::new();
    let rt = Runtime::with_console(Box::new(console.clone()), RuntimeConfig::default());
    (rt, console)
}

proptest! {
    #[test]
    fn store_load_round_trips_any_cell(value in any::<i64>(), index in 0i64..16) {
        let (mut rt, _console) = mem_runtime();
        let arr = rt.array_new(16).unwrap().to_cell();
        rt.array_store(arr, index, Cell(value)).unwrap();
        prop_assert_eq!(rt.array_load(arr, index).unwrap(), Cell(value));
    }
}

proptest! {
    #[test]
    fn int_to_string_round_trips(value in any::<i64>()) {
        let (mut rt, _console) = mem_runtime();
        let s = rt.int_to_string(value).unwrap();
        let handle = s.handle().unwrap();
        let text = rill_runtime::core::text::str_bytes(rt.arena().get(handle));
        let parsed: i64 = std::str::from_utf8(text).unwrap().parse().unwrap();
        prop_assert_eq!(parsed, value);
    }
}

proptest! {
    #[test]
    fn small_ints_print_as_std_decimal(n in SMALL_INT_MIN..=SMALL_INT_MAX) {
        let (mut rt, console) = mem_runtime();
        rt.print_cell(Cell(n));
        prop_assert_eq!(console.out(), format!("{n}\n"));
    }
}

proptest! {
    #[test]
    fn tagged_and_heuristic_array_printing_agree(cells in proptest::collection::vec(any::<i64>(), 0..12)) {
        let (mut rt, console) = mem_runtime();
        let arr = rt.array_new(cells.len() as i64).unwrap();
        for (i, v) in cells.iter().enumerate() {
            rt.array_store(arr.to_cell(), i as i64, Cell(*v)).unwrap();
        }
        rt.print(arr);
        let tagged = console.out();
        console.clear_out();
        rt.print_cell(arr.to_cell());
        prop_assert_eq!(console.out(), tagged);
    }
}

proptest! {
    #[test]
    fn concat_matches_rust_string_concat(a in "[ -~]{0,40}", b in "[ -~]{0,40}") {
        let (mut rt, _console) = mem_runtime();
        let ca = rt.new_string(&a).unwrap().to_cell();
        let cb = rt.new_string(&b).unwrap().to_cell();
        let joined = rt.concat(ca, cb).unwrap();
        let handle = joined.handle().unwrap();
        let text = rill_runtime::core::text::str_bytes(rt.arena().get(handle));
        let expected = format!("{a}{b}");
        prop_assert_eq!(text, expected.as_bytes());
    }
}
