//! Value rendering with cycle-safe recursion
//!
//! Converts one [`LogValue`] to its textual form. Generic sequences are
//! rendered recursively; the seen-set tracks the `Arc` identities of the
//! sequences on the current descent path so that cyclic structures render as
//! `[...]` at the point of self-reference instead of recursing forever.

use super::value::LogValue;
use std::fmt::Write;

/// Sentinel substituted when a user scalar's text conversion fails
pub const FAILED_CONVERSION: &str = "[FAILED to_text()]";

/// Render a single value to text.
///
/// Always terminates and always produces text, for any input shape,
/// including empty and self-referential sequences.
pub fn render_value(value: &LogValue) -> String {
    let mut out = String::new();
    let mut seen = Vec::new();
    append_value(&mut out, value, &mut seen);
    out
}

/// Append one value to `out`.
///
/// `seen` holds the identities of the generic sequences currently being
/// rendered on this path; entries are pushed on descent and popped on return,
/// so the set is empty again when the top-level call finishes.
pub(crate) fn append_value(out: &mut String, value: &LogValue, seen: &mut Vec<usize>) {
    match value {
        LogValue::Null => out.push_str("null"),
        LogValue::Bool(v) => {
            let _ = write!(out, "{v}");
        }
        LogValue::Int(v) => {
            let _ = write!(out, "{v}");
        }
        LogValue::Uint(v) => {
            let _ = write!(out, "{v}");
        }
        LogValue::Float(v) => {
            let _ = write!(out, "{v}");
        }
        LogValue::Char(v) => out.push(*v),
        LogValue::Str(v) => out.push_str(v),
        LogValue::Error(e) => {
            let _ = write!(out, "{e}");
        }
        LogValue::Scalar(s) => match s.to_text() {
            Ok(text) => out.push_str(&text),
            Err(err) => {
                report_conversion_failure(s.type_name(), &err);
                out.push_str(FAILED_CONVERSION);
            }
        },
        LogValue::BoolSeq(v) => append_slice(out, v),
        LogValue::ByteSeq(v) => append_slice(out, v),
        LogValue::IntSeq(v) => append_slice(out, v),
        LogValue::FloatSeq(v) => append_slice(out, v),
        LogValue::CharSeq(v) => append_slice(out, v),
        LogValue::Seq(seq) => {
            let id = std::sync::Arc::as_ptr(seq) as *const () as usize;
            out.push('[');
            if seen.contains(&id) {
                // Ancestor on the current path: cut the cycle here
                out.push_str("...");
            } else {
                seen.push(id);
                let elements = seq.read();
                let len = elements.len();
                for (i, element) in elements.iter().enumerate() {
                    append_value(out, element, seen);
                    if i != len - 1 {
                        out.push_str(", ");
                    }
                }
                drop(elements);
                seen.pop();
            }
            out.push(']');
        }
    }
}

/// Homogeneous scalar sequences cannot self-reference; no cycle tracking
fn append_slice<T: std::fmt::Display>(out: &mut String, slice: &[T]) {
    out.push('[');
    let len = slice.len();
    for (i, element) in slice.iter().enumerate() {
        let _ = write!(out, "{element}");
        if i != len - 1 {
            out.push_str(", ");
        }
    }
    out.push(']');
}

/// Best-effort diagnostic side channel; never blocks the logging call
fn report_conversion_failure(type_name: &str, err: &crate::core::error::LogError) {
    eprintln!("[LOGFACADE ERROR] failed to_text() invocation on a value of type [{type_name}]: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{LogError, Result};
    use crate::core::value::{SharedSeq, ToText};
    use parking_lot::RwLock;
    use std::sync::Arc;

    struct Flaky;

    impl ToText for Flaky {
        fn to_text(&self) -> Result<String> {
            Err(LogError::conversion("Flaky", "always fails"))
        }

        fn type_name(&self) -> &'static str {
            "Flaky"
        }
    }

    #[test]
    fn test_null_renders_as_literal() {
        assert_eq!(render_value(&LogValue::Null), "null");
    }

    #[test]
    fn test_scalars() {
        assert_eq!(render_value(&LogValue::Int(-3)), "-3");
        assert_eq!(render_value(&LogValue::Bool(true)), "true");
        assert_eq!(render_value(&LogValue::Char('x')), "x");
        assert_eq!(render_value(&LogValue::Str("hi".into())), "hi");
    }

    #[test]
    fn test_homogeneous_sequences() {
        assert_eq!(render_value(&LogValue::IntSeq(vec![1, 2, 3])), "[1, 2, 3]");
        assert_eq!(render_value(&LogValue::BoolSeq(vec![true, false])), "[true, false]");
        assert_eq!(render_value(&LogValue::CharSeq(vec![])), "[]");
    }

    #[test]
    fn test_nested_sequences() {
        let inner = LogValue::seq(vec![LogValue::Int(1), LogValue::Str("a".into())]);
        let outer = LogValue::seq(vec![inner, LogValue::Null]);
        assert_eq!(render_value(&outer), "[[1, a], null]");
    }

    #[test]
    fn test_self_referential_sequence_terminates() {
        let seq: SharedSeq = Arc::new(RwLock::new(Vec::new()));
        seq.write().push(LogValue::Seq(Arc::clone(&seq)));
        seq.write().push(LogValue::Int(7));

        let text = render_value(&LogValue::Seq(seq));
        assert_eq!(text, "[[...], 7]");
    }

    #[test]
    fn test_mutual_cycle_terminates() {
        let a: SharedSeq = Arc::new(RwLock::new(Vec::new()));
        let b: SharedSeq = Arc::new(RwLock::new(vec![LogValue::Seq(Arc::clone(&a))]));
        a.write().push(LogValue::Seq(Arc::clone(&b)));

        assert_eq!(render_value(&LogValue::Seq(a)), "[[[...]]]");
    }

    #[test]
    fn test_shared_sibling_is_not_a_cycle() {
        // The same sequence appearing twice as a sibling must render fully
        // both times: cycle detection is path-relative, not global.
        let shared: SharedSeq = Arc::new(RwLock::new(vec![LogValue::Int(9)]));
        let outer = LogValue::seq(vec![
            LogValue::Seq(Arc::clone(&shared)),
            LogValue::Seq(shared),
        ]);
        assert_eq!(render_value(&outer), "[[9], [9]]");
    }

    #[test]
    fn test_failed_conversion_substitutes_sentinel() {
        let text = render_value(&LogValue::scalar(Flaky));
        assert_eq!(text, FAILED_CONVERSION);
    }

    #[test]
    fn test_failed_conversion_inside_sequence() {
        let seq = LogValue::seq(vec![LogValue::scalar(Flaky), LogValue::Int(1)]);
        assert_eq!(render_value(&seq), format!("[{FAILED_CONVERSION}, 1]"));
    }

    #[test]
    fn test_seen_set_is_empty_after_render() {
        let seq: SharedSeq = Arc::new(RwLock::new(Vec::new()));
        seq.write().push(LogValue::Seq(Arc::clone(&seq)));
        let value = LogValue::Seq(seq);

        let mut out = String::new();
        let mut seen = Vec::new();
        append_value(&mut out, &value, &mut seen);
        assert!(seen.is_empty());
    }
}
