//! Splitting variadic log arguments into positional values, metadata and a callback

use proven_logger::{Arg, Callback, Metadata};
use serde_json::Value;

/// Arguments of one log call, sorted by role
#[derive(Debug, Default)]
pub(crate) struct Classified {
    /// Plain values, in call order
    pub(crate) positional: Vec<Value>,
    /// Metadata objects merged left to right, first key wins
    pub(crate) metadata: Metadata,
    /// Trailing callback
    pub(crate) callback: Option<Callback>,
}

impl Classified {
    pub(crate) fn from_args(args: impl IntoIterator<Item = Arg>) -> Self {
        let mut args: Vec<Arg> = args.into_iter().collect();

        // Only a callback in last position is a completion callback
        let callback = match args.pop() {
            Some(Arg::Callback(callback)) => Some(callback),
            Some(other) => {
                args.push(other);
                None
            }
            None => None,
        };

        let mut classified = Self {
            callback,
            ..Self::default()
        };

        for arg in args {
            match arg {
                Arg::Plain(value) if Metadata::is_keyed(&value) => {
                    classified.metadata.merge(&Metadata::from_value(value));
                }
                Arg::Plain(value) => classified.positional.push(value),
                Arg::Meta(metadata) => {
                    classified.metadata.merge(&metadata);
                }
                // Metadata-like, but carries no keys
                Arg::Callback(_) => {}
            }
        }

        classified
    }
}
