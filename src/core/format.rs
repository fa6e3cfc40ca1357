//! Message templating: pattern scanning and placeholder substitution
//!
//! Expands a pattern such as `"bound to {} on port {}"` against positional
//! [`LogValue`] arguments. The placeholder token is the two-character
//! sequence `{}`; a single `\` immediately before it suppresses substitution
//! and emits a literal `{`, while `\\` collapses to an escaped escape and the
//! placeholder substitutes normally. A trailing error-kind argument that no
//! placeholder consumed is carried out of the formatter as the cause.

use super::render::append_value;
use super::value::{ErrorValue, LogValue};

pub const DELIM_START: char = '{';
pub const DELIM_STR: &str = "{}";
const ESCAPE_CHAR: u8 = b'\\';

/// Result of one formatting call: the rendered text, the original argument
/// list unchanged, and the cause extracted from it (if any).
pub struct FormattedMessage {
    /// Rendered text; absent only when the pattern was absent
    pub message: Option<String>,
    /// The argument list, passed through verbatim
    pub args: Vec<LogValue>,
    /// Trailing error-kind argument not consumed by any placeholder
    pub cause: Option<ErrorValue>,
}

/// Classification of one placeholder occurrence, by byte offset of its `{`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delimiter {
    /// No escape marker before the token; substitute
    Plain(usize),
    /// Exactly one `\` before the token; emit a literal `{`, do not consume
    Escaped(usize),
    /// `\\` before the token; the pair cancels itself and substitution occurs
    DoubleEscaped(usize),
}

/// Find and classify the next `{}` at or after `from`.
///
/// The escaped-literal check runs before the double-escape check: a double
/// escape is syntactically a superset of a single escape.
pub(crate) fn next_delimiter(pattern: &str, from: usize) -> Option<Delimiter> {
    let at = pattern.get(from..)?.find(DELIM_STR)? + from;
    let bytes = pattern.as_bytes();
    if at != 0 && bytes[at - 1] == ESCAPE_CHAR {
        if at >= 2 && bytes[at - 2] == ESCAPE_CHAR {
            Some(Delimiter::DoubleEscaped(at))
        } else {
            Some(Delimiter::Escaped(at))
        }
    } else {
        Some(Delimiter::Plain(at))
    }
}

/// Last argument if it carries the error capability
fn cause_candidate(args: &[LogValue]) -> Option<ErrorValue> {
    match args.last() {
        Some(LogValue::Error(e)) => Some(e.clone()),
        _ => None,
    }
}

/// Convenience form for a single argument
pub fn format_one(pattern: &str, arg: LogValue) -> FormattedMessage {
    format_message(Some(pattern), Some(vec![arg]))
}

/// Convenience form for two arguments
pub fn format_two(pattern: &str, arg_a: LogValue, arg_b: LogValue) -> FormattedMessage {
    format_message(Some(pattern), Some(vec![arg_a, arg_b]))
}

/// Expand `pattern` against `args`, walking the pattern once left to right.
///
/// Each resolved placeholder (plain or double-escaped) consumes one argument;
/// escaped literals consume none. Consumption stops when the pattern or the
/// argument list is exhausted, and any literal tail is appended. A cause is
/// extracted only when exactly one argument was left unconsumed and it is an
/// error-kind value, or when the pattern passed straight through with no
/// placeholder and the last argument is an error-kind value.
///
/// Malformed patterns never fail; unmatched text passes through unmodified.
pub fn format_message(pattern: Option<&str>, args: Option<Vec<LogValue>>) -> FormattedMessage {
    let Some(args) = args else {
        return FormattedMessage {
            message: pattern.map(str::to_string),
            args: Vec::new(),
            cause: None,
        };
    };
    let candidate = cause_candidate(&args);
    let Some(pattern) = pattern else {
        return FormattedMessage {
            message: None,
            args,
            cause: candidate,
        };
    };

    let mut out = String::with_capacity(pattern.len() + 50);
    let mut seen = Vec::new();
    // `at` is the cursor into the pattern, `next` the argument to try
    let mut at = 0;
    let mut next = 0;
    while next < args.len() {
        match next_delimiter(pattern, at) {
            None => {
                if at == 0 {
                    // No placeholder anywhere: pattern passes straight through
                    return FormattedMessage {
                        message: Some(pattern.to_string()),
                        args,
                        cause: candidate,
                    };
                }
                out.push_str(&pattern[at..]);
                return finish(out, args, next, candidate);
            }
            Some(Delimiter::Escaped(delim)) => {
                // Drop the escape, emit the literal brace, keep the argument
                out.push_str(&pattern[at..delim - 1]);
                out.push(DELIM_START);
                at = delim + 1;
            }
            Some(Delimiter::DoubleEscaped(delim)) => {
                out.push_str(&pattern[at..delim - 1]);
                append_value(&mut out, &args[next], &mut seen);
                at = delim + 2;
                next += 1;
            }
            Some(Delimiter::Plain(delim)) => {
                out.push_str(&pattern[at..delim]);
                append_value(&mut out, &args[next], &mut seen);
                at = delim + 2;
                next += 1;
            }
        }
    }
    out.push_str(&pattern[at..]);
    finish(out, args, next, candidate)
}

fn finish(
    out: String,
    args: Vec<LogValue>,
    consumed: usize,
    candidate: Option<ErrorValue>,
) -> FormattedMessage {
    // One argument supplied but never substituted, and it is error-kind
    let cause = if consumed + 1 == args.len() {
        candidate
    } else {
        None
    };
    FormattedMessage {
        message: Some(out),
        args,
        cause,
    }
}
