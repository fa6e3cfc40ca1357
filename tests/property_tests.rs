//! Property-based tests for logfacade using proptest

use logfacade::prelude::*;
use proptest::prelude::*;

fn arb_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
    ]
}

fn arb_scalar() -> impl Strategy<Value = LogValue> {
    prop_oneof![
        Just(LogValue::Null),
        any::<bool>().prop_map(LogValue::from),
        any::<i64>().prop_map(LogValue::from),
        any::<f64>().prop_map(LogValue::from),
        "[a-zA-Z0-9 ]{0,16}".prop_map(LogValue::from),
    ]
}

proptest! {
    /// LogLevel string conversions round-trip
    #[test]
    fn test_log_level_str_roundtrip(level in arb_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        assert_eq!(level, parsed);
    }

    /// LogLevel ordering is consistent with the discriminant
    #[test]
    fn test_log_level_ordering(level1 in arb_level(), level2 in arb_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;
        assert_eq!(level1 <= level2, val1 <= val2);
        assert_eq!(level1 < level2, val1 < val2);
    }

    /// Patterns without placeholder tokens or escapes pass through verbatim,
    /// whatever arguments are supplied
    #[test]
    fn test_tokenless_pattern_passes_through(
        pattern in "[^{\\\\]{0,64}",
        args in prop::collection::vec(arb_scalar(), 0..4),
    ) {
        let count = args.len();
        let result = format_message(Some(&pattern), Some(args));
        assert_eq!(result.message.as_deref(), Some(pattern.as_str()));
        assert_eq!(result.args.len(), count);
        assert!(result.cause.is_none());
    }

    /// Formatting the same pattern and arguments twice yields identical text
    #[test]
    fn test_formatting_is_idempotent(
        head in "[a-z ]{0,16}",
        tail in "[a-z ]{0,16}",
        args in prop::collection::vec(arb_scalar(), 0..4),
    ) {
        let pattern = format!("{head}{{}} mid {{}}{tail}");
        let first = format_message(Some(&pattern), Some(args.clone()));
        let second = format_message(Some(&pattern), Some(args));
        assert_eq!(first.message, second.message);
    }

    /// One argument per plain placeholder, left to right
    #[test]
    fn test_substitution_consumes_in_order(values in prop::collection::vec(any::<i64>(), 1..5)) {
        let pattern = vec!["{}"; values.len()].join(" ");
        let args: Vec<LogValue> = values.iter().copied().map(LogValue::from).collect();
        let expected = values
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        let result = format_message(Some(&pattern), Some(args));
        assert_eq!(result.message.as_deref(), Some(expected.as_str()));
    }

    /// Rendering always terminates and produces text for arbitrary nesting
    #[test]
    fn test_render_terminates_on_nested_sequences(
        depth in 1usize..6,
        scalar in arb_scalar(),
    ) {
        let mut value = scalar;
        for _ in 0..depth {
            value = LogValue::seq(vec![value]);
        }
        let text = render_value(&value);
        assert!(text.starts_with('['));
        assert!(text.ends_with(']'));
    }
}
