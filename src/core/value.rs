//! Argument values accepted by the message-templating engine
//!
//! A [`LogValue`] is one positional argument at a logging call site. The
//! renderer dispatches on the variant: scalars print their natural text,
//! homogeneous sequences print as `[a, b, c]`, and generic sequences are
//! rendered recursively with cycle detection keyed on `Arc` identity.

use super::error::Result;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// An error-kind value; the last argument of a call may carry one as a cause.
pub type ErrorValue = Arc<dyn std::error::Error + Send + Sync>;

/// A generic sequence with shared ownership and interior mutability.
///
/// Shared ownership is what makes self-referential sequences constructible,
/// and the `Arc` pointer doubles as the identity key for cycle detection.
pub type SharedSeq = Arc<RwLock<Vec<LogValue>>>;

/// A scalar whose text conversion can fail.
///
/// Conversion failures are recovered by the renderer: the error is reported
/// to the diagnostic side channel and a sentinel string is substituted.
pub trait ToText: Send + Sync {
    fn to_text(&self) -> Result<String>;

    /// Name reported on conversion failure
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

#[derive(Clone)]
pub enum LogValue {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(char),
    Str(String),
    /// Error-kind value, eligible for cause extraction
    Error(ErrorValue),
    /// User scalar with a fallible text conversion
    Scalar(Arc<dyn ToText>),
    BoolSeq(Vec<bool>),
    ByteSeq(Vec<u8>),
    IntSeq(Vec<i64>),
    FloatSeq(Vec<f64>),
    CharSeq(Vec<char>),
    /// Generic sequence, rendered recursively with cycle detection
    Seq(SharedSeq),
}

impl LogValue {
    /// Wrap an error as an argument value
    pub fn error<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        LogValue::Error(Arc::new(err))
    }

    /// Wrap a fallible user scalar
    pub fn scalar<T>(value: T) -> Self
    where
        T: ToText + 'static,
    {
        LogValue::Scalar(Arc::new(value))
    }

    /// Build a generic sequence from elements
    pub fn seq(elements: Vec<LogValue>) -> Self {
        LogValue::Seq(Arc::new(RwLock::new(elements)))
    }

    /// True if this value carries the error capability
    pub fn is_error(&self) -> bool {
        matches!(self, LogValue::Error(_))
    }
}

impl fmt::Debug for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Null => write!(f, "Null"),
            LogValue::Bool(v) => write!(f, "Bool({v})"),
            LogValue::Int(v) => write!(f, "Int({v})"),
            LogValue::Uint(v) => write!(f, "Uint({v})"),
            LogValue::Float(v) => write!(f, "Float({v})"),
            LogValue::Char(v) => write!(f, "Char({v:?})"),
            LogValue::Str(v) => write!(f, "Str({v:?})"),
            LogValue::Error(e) => write!(f, "Error({e})"),
            LogValue::Scalar(s) => write!(f, "Scalar({})", s.type_name()),
            LogValue::BoolSeq(v) => write!(f, "BoolSeq({v:?})"),
            LogValue::ByteSeq(v) => write!(f, "ByteSeq({v:?})"),
            LogValue::IntSeq(v) => write!(f, "IntSeq({v:?})"),
            LogValue::FloatSeq(v) => write!(f, "FloatSeq({v:?})"),
            LogValue::CharSeq(v) => write!(f, "CharSeq({v:?})"),
            LogValue::Seq(v) => write!(f, "Seq(len={})", v.read().len()),
        }
    }
}

impl From<bool> for LogValue {
    fn from(v: bool) -> Self {
        LogValue::Bool(v)
    }
}

impl From<i32> for LogValue {
    fn from(v: i32) -> Self {
        LogValue::Int(v.into())
    }
}

impl From<i64> for LogValue {
    fn from(v: i64) -> Self {
        LogValue::Int(v)
    }
}

impl From<u32> for LogValue {
    fn from(v: u32) -> Self {
        LogValue::Uint(v.into())
    }
}

impl From<u64> for LogValue {
    fn from(v: u64) -> Self {
        LogValue::Uint(v)
    }
}

impl From<usize> for LogValue {
    fn from(v: usize) -> Self {
        LogValue::Uint(v as u64)
    }
}

impl From<f32> for LogValue {
    fn from(v: f32) -> Self {
        LogValue::Float(v.into())
    }
}

impl From<f64> for LogValue {
    fn from(v: f64) -> Self {
        LogValue::Float(v)
    }
}

impl From<char> for LogValue {
    fn from(v: char) -> Self {
        LogValue::Char(v)
    }
}

impl From<&str> for LogValue {
    fn from(v: &str) -> Self {
        LogValue::Str(v.to_string())
    }
}

impl From<String> for LogValue {
    fn from(v: String) -> Self {
        LogValue::Str(v)
    }
}

impl From<Vec<bool>> for LogValue {
    fn from(v: Vec<bool>) -> Self {
        LogValue::BoolSeq(v)
    }
}

impl From<Vec<u8>> for LogValue {
    fn from(v: Vec<u8>) -> Self {
        LogValue::ByteSeq(v)
    }
}

impl From<Vec<i64>> for LogValue {
    fn from(v: Vec<i64>) -> Self {
        LogValue::IntSeq(v)
    }
}

impl From<Vec<f64>> for LogValue {
    fn from(v: Vec<f64>) -> Self {
        LogValue::FloatSeq(v)
    }
}

impl From<Vec<char>> for LogValue {
    fn from(v: Vec<char>) -> Self {
        LogValue::CharSeq(v)
    }
}

impl From<Vec<LogValue>> for LogValue {
    fn from(v: Vec<LogValue>) -> Self {
        LogValue::seq(v)
    }
}

impl From<SharedSeq> for LogValue {
    fn from(v: SharedSeq) -> Self {
        LogValue::Seq(v)
    }
}

impl From<ErrorValue> for LogValue {
    fn from(v: ErrorValue) -> Self {
        LogValue::Error(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions() {
        assert!(matches!(LogValue::from(5i32), LogValue::Int(5)));
        assert!(matches!(LogValue::from(5u64), LogValue::Uint(5)));
        assert!(matches!(LogValue::from("hi"), LogValue::Str(_)));
        assert!(matches!(LogValue::from(vec![1i64, 2]), LogValue::IntSeq(_)));
    }

    #[test]
    fn test_is_error() {
        let err = LogValue::error(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk on fire",
        ));
        assert!(err.is_error());
        assert!(!LogValue::Null.is_error());
    }

    #[test]
    fn test_seq_identity_is_shared() {
        let inner: SharedSeq = Arc::new(RwLock::new(vec![LogValue::Int(1)]));
        let a = LogValue::Seq(Arc::clone(&inner));
        let b = a.clone();
        match (&a, &b) {
            (LogValue::Seq(x), LogValue::Seq(y)) => {
                assert!(Arc::ptr_eq(x, y));
            }
            _ => unreachable!(),
        }
    }
}
