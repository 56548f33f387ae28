//! Property-based tests for the calculator core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use shopcalc::core::{Calculator, ComputeOutcome, HistoryLedger, Operator, MAX_OPERAND_LEN};
use shopcalc::display;
use shopcalc::keypad::{Key, Session};

prop_compose! {
    fn arbitrary_operator()(variant in 0..4u8) -> Operator {
        match variant {
            0 => Operator::Add,
            1 => Operator::Sub,
            2 => Operator::Mul,
            _ => Operator::Div,
        }
    }
}

prop_compose! {
    /// Operand text a user could actually key in: at most 8 characters,
    /// at most one decimal point.
    fn valid_entry()(int in "[0-9]{1,7}", frac in proptest::option::of("[0-9]{0,6}")) -> String {
        let mut entry = match frac {
            Some(f) => format!("{int}.{f}"),
            None => int,
        };
        entry.truncate(MAX_OPERAND_LEN);
        entry
    }
}

fn key_in(calc: &mut Calculator, entry: &str) {
    for c in entry.chars() {
        calc.push_digit(c);
    }
}

proptest! {
    #[test]
    fn valid_entries_compose_faithfully(entry in valid_entry()) {
        let mut calc = Calculator::new();
        for c in entry.chars() {
            prop_assert!(calc.push_digit(c));
        }
        prop_assert_eq!(calc.current_text(), entry.as_str());
    }

    #[test]
    fn full_buffer_rejects_any_further_digit(entry in "[0-9]{8}", extra in "[0-9.]") {
        let mut calc = Calculator::new();
        key_in(&mut calc, &entry);

        let c = extra.chars().next().unwrap();
        prop_assert!(!calc.push_digit(c));
        prop_assert_eq!(calc.current_text(), entry.as_str());
    }

    #[test]
    fn ledger_orders_are_mirror_images(
        results in prop::collection::vec(0i32..1000, 0..10)
    ) {
        let mut ledger = HistoryLedger::new();
        for r in &results {
            ledger.append(&r.to_string(), Operator::Add, "0", f64::from(*r));
        }

        let mut forwards: Vec<_> = ledger.oldest_first().collect();
        let backwards: Vec<_> = ledger.newest_first().collect();
        forwards.reverse();
        prop_assert_eq!(forwards, backwards);
    }

    #[test]
    fn compute_never_appends_twice(
        left in valid_entry(),
        right in valid_entry(),
        op in arbitrary_operator(),
    ) {
        let mut calc = Calculator::new();
        let mut ledger = HistoryLedger::new();
        key_in(&mut calc, &left);
        let _ = calc.choose_operation(op, &mut ledger);
        key_in(&mut calc, &right);

        let first = calc.compute(&mut ledger);
        let after_first = ledger.len();

        let second = calc.compute(&mut ledger);
        prop_assert_eq!(ledger.len(), after_first);

        match first {
            Ok(ComputeOutcome::Evaluated(_)) => {
                prop_assert_eq!(after_first, 1);
                prop_assert_eq!(second, Ok(ComputeOutcome::NotReady));
            }
            _ => prop_assert_eq!(after_first, 0),
        }
    }

    #[test]
    fn division_by_zero_commits_nothing(left in "[1-9][0-9]{0,6}") {
        let mut calc = Calculator::new();
        let mut ledger = HistoryLedger::new();
        key_in(&mut calc, &left);
        calc.choose_operation(Operator::Div, &mut ledger).unwrap();
        calc.push_digit('0');

        let before = calc.clone();
        prop_assert!(calc.compute(&mut ledger).is_err());
        prop_assert_eq!(calc, before);
        prop_assert!(ledger.is_empty());
    }

    #[test]
    fn clear_all_resets_from_any_key_sequence(
        keys in prop::collection::vec(
            prop::sample::select("0123456789.+-×÷=".chars().collect::<Vec<_>>()),
            0..30,
        )
    ) {
        let mut session = Session::new();
        for c in keys {
            let key = Key::from_char(c).unwrap();
            let _ = session.press(key);
        }

        session.press(Key::ClearAll).unwrap();
        prop_assert_eq!(session.calculator(), &Calculator::new());
    }

    #[test]
    fn grouping_preserves_the_digits(value in 0u32..100_000_000) {
        let text = value.to_string();
        let formatted = display::operand(&text);
        prop_assert_eq!(formatted.replace(',', ""), text);
    }

    #[test]
    fn calculator_roundtrip_serialization(
        entry in valid_entry(),
        op in arbitrary_operator(),
    ) {
        let mut calc = Calculator::new();
        let mut ledger = HistoryLedger::new();
        key_in(&mut calc, &entry);
        calc.choose_operation(op, &mut ledger).unwrap();

        let json = serde_json::to_string(&calc).unwrap();
        let deserialized: Calculator = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(calc, deserialized);
    }

    #[test]
    fn ledger_roundtrip_serialization(
        results in prop::collection::vec(0i32..1000, 0..5)
    ) {
        let mut ledger = HistoryLedger::new();
        for r in &results {
            ledger.append(&r.to_string(), Operator::Mul, "2", f64::from(*r) * 2.0);
        }

        let json = serde_json::to_string(&ledger).unwrap();
        let deserialized: HistoryLedger = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(ledger, deserialized);
    }
}
