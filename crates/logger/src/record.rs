//! Normalized log call delivered to a root logger

use crate::{Arg, Callback, Metadata};
use serde_json::Value;

/// A normalized log call.
///
/// Positionally this is `(level, name, ...args, metadata[, callback])`.
#[derive(Debug, Clone)]
pub struct Record {
    /// Level name
    pub level: String,
    /// The (possibly prefixed) message name
    pub name: String,
    /// Positional message arguments, in call order
    pub args: Vec<Value>,
    /// Merged metadata
    pub metadata: Metadata,
    /// Completion callback, present only when the caller supplied one
    pub callback: Option<Callback>,
}

impl Record {
    /// Create a new record without arguments or metadata
    pub fn new(level: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            name: name.into(),
            args: Vec::new(),
            metadata: Metadata::new(),
            callback: None,
        }
    }

    /// Builder-style method for setting positional arguments
    #[must_use]
    pub fn with_args(mut self, args: Vec<Value>) -> Self {
        self.args = args;
        self
    }

    /// Builder-style method for setting metadata
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Builder-style method for setting the callback
    #[must_use]
    pub fn with_callback(mut self, callback: Callback) -> Self {
        self.callback = Some(callback);
        self
    }

    /// Break the record back into call arguments: positional values, the
    /// metadata object, then the callback if any.
    pub fn into_args(self) -> (String, String, Vec<Arg>) {
        let mut args: Vec<Arg> = self.args.into_iter().map(Arg::Plain).collect();
        args.push(Arg::Meta(self.metadata));
        if let Some(callback) = self.callback {
            args.push(Arg::Callback(callback));
        }
        (self.level, self.name, args)
    }

    /// Notify the callback, if any, of the outcome
    pub fn complete(&self, outcome: Result<(), &crate::Error>) {
        if let Some(callback) = &self.callback {
            callback.call(outcome);
        }
    }
}
