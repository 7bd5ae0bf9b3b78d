//! Loosely typed log call arguments

use crate::{Error, Metadata};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Completion callback handed to the root logger.
///
/// The root invokes it once it has handled the call; nothing in between
/// calls or wraps it.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn(Result<(), &Error>) + Send + Sync>);

impl Callback {
    /// Wrap a closure
    pub fn new(f: impl Fn(Result<(), &Error>) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invoke the callback
    pub fn call(&self, outcome: Result<(), &Error>) {
        (self.0)(outcome);
    }

    /// Whether two handles point at the same closure
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").finish_non_exhaustive()
    }
}

/// A single argument to a log call
#[derive(Debug, Clone)]
pub enum Arg {
    /// Positional message argument (string, number, bool, null)
    Plain(Value),
    /// Metadata-like value, merged rather than passed positionally
    Meta(Metadata),
    /// Completion callback; only honoured in last position
    Callback(Callback),
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        if Metadata::is_keyed(&value) {
            Self::Meta(Metadata::from_value(value))
        } else {
            Self::Plain(value)
        }
    }
}

impl From<Metadata> for Arg {
    fn from(metadata: Metadata) -> Self {
        Self::Meta(metadata)
    }
}

impl From<Callback> for Arg {
    fn from(callback: Callback) -> Self {
        Self::Callback(callback)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Plain(Value::String(value.to_owned()))
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Plain(Value::String(value))
    }
}

macro_rules! impl_plain_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Self::Plain(Value::from(value))
                }
            }
        )*
    };
}

impl_plain_from!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Build a `Vec<Arg>` from heterogeneous values.
///
/// ```
/// use proven_logger::{Arg, Metadata, args};
///
/// let args: Vec<Arg> = args!["foo", 1, Metadata::from([("request", 7)])];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($arg)),+]
    };
}
