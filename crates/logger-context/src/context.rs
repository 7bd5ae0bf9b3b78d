//! Scoped logging contexts

use crate::classify::Classified;
use crate::prefix::normalize;
use proven_logger::{
    Arg, Error, LevelSet, Metadata, Record, Result, RootLogger, SharedLogger, resolve_root,
};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// A logger scoped by a dotted name prefix and accumulated metadata.
///
/// Every context writes straight through to the one root logger it was
/// created from, however deeply it was derived.
#[derive(Clone)]
pub struct LogContext {
    root: SharedLogger,
    prefix: String,
    metadata: Metadata,
    levels: Option<Arc<LevelSet>>,
}

impl LogContext {
    /// Create a context over `logger`.
    ///
    /// If `logger` is itself a wrapper (for example another context), its
    /// parent chain is followed to the true root. Only the given prefix and
    /// metadata apply; nothing is inherited from a wrapped context.
    pub fn new(logger: SharedLogger, prefix: Option<&str>, metadata: Option<Metadata>) -> Self {
        let root = resolve_root(logger);
        let levels = root.levels();
        let context = Self {
            root,
            prefix: normalize(prefix.unwrap_or_default()),
            metadata: metadata.unwrap_or_default(),
            levels,
        };

        trace!(prefix = %context.prefix, levels = ?context.level_names(), "created log context");

        context
    }

    /// Create a context with no prefix and no metadata
    pub fn wrap(logger: SharedLogger) -> Self {
        Self::new(logger, None, None)
    }

    /// Replace the level names offered as convenience methods
    #[must_use]
    pub fn with_levels(mut self, levels: LevelSet) -> Self {
        self.levels = Some(Arc::new(levels));
        self
    }

    /// Derive a child context.
    ///
    /// The child's prefix is this prefix followed by `prefix`. For metadata,
    /// keys in the given `metadata` take precedence and this context's
    /// metadata fills the remaining keys.
    pub fn derive_context(&self, prefix: &str, metadata: Option<Metadata>) -> Self {
        let child = Self {
            root: self.root.clone(),
            prefix: normalize(&format!("{}{prefix}", self.prefix)),
            metadata: metadata.unwrap_or_default().merged([&self.metadata]),
            levels: self.levels.clone(),
        };

        trace!(prefix = %child.prefix, "derived log context");

        child
    }

    /// Log `name` at `level`.
    ///
    /// A trailing [`Arg::Callback`] is forwarded as the completion callback;
    /// metadata arguments are merged (earlier wins, then this context's
    /// metadata fills gaps); everything else is passed positionally. Errors
    /// from the root logger are returned unchanged.
    pub fn log(&self, level: &str, name: &str, args: impl IntoIterator<Item = Arg>) -> Result<()> {
        let Classified {
            positional,
            metadata,
            callback,
        } = Classified::from_args(args);

        let record = Record {
            level: level.to_owned(),
            name: format!("{}{name}", self.prefix),
            args: positional,
            metadata: metadata.merged([&self.metadata]),
            callback,
        };

        self.root.log(record)
    }

    /// Forward `close` to the root logger
    pub fn close(&self, id: Option<&str>) -> Result<()> {
        self.root.close(id)
    }

    /// Handle for logging at a declared level
    pub fn at<'a>(&'a self, level: &'a str) -> Result<LevelLogger<'a>> {
        if self.has_level(level) {
            Ok(LevelLogger {
                context: self,
                level,
            })
        } else {
            Err(Error::UndeclaredLevel(level.to_owned()))
        }
    }

    /// Whether `level` is available as a convenience method
    pub fn has_level(&self, level: &str) -> bool {
        self.levels.as_ref().is_some_and(|levels| levels.contains(level))
    }

    /// Level names available as convenience methods
    pub fn level_names(&self) -> Vec<&str> {
        self.levels
            .as_ref()
            .map(|levels| levels.names().collect())
            .unwrap_or_default()
    }

    /// The root logger every call is forwarded to
    pub const fn root(&self) -> &SharedLogger {
        &self.root
    }

    /// Accumulated prefix, including its trailing separator
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Accumulated metadata
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// This context as a shareable logger, e.g. to hand to code expecting a root
    pub fn shared(&self) -> SharedLogger {
        Arc::new(self.clone())
    }
}

macro_rules! level_methods {
    ($($level:ident),* $(,)?) => {
        impl LogContext {
            $(
                #[doc = concat!("Log at the `", stringify!($level), "` level, if the root declares it")]
                pub fn $level(&self, name: &str, args: impl IntoIterator<Item = Arg>) -> Result<()> {
                    self.at(stringify!($level))?.log(name, args)
                }
            )*
        }
    };
}

level_methods!(error, warn, info, http, verbose, debug, silly);

impl fmt::Debug for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogContext")
            .field("prefix", &self.prefix)
            .field("metadata", &self.metadata)
            .field("levels", &self.level_names())
            .finish_non_exhaustive()
    }
}

impl RootLogger for LogContext {
    fn log(&self, record: Record) -> Result<()> {
        let (level, name, args) = record.into_args();
        Self::log(self, &level, &name, args)
    }

    fn levels(&self) -> Option<Arc<LevelSet>> {
        self.levels.clone()
    }

    fn parent(&self) -> Option<SharedLogger> {
        Some(self.root.clone())
    }

    fn close(&self, id: Option<&str>) -> Result<()> {
        Self::close(self, id)
    }
}

/// Logs at one level of a [`LogContext`]
#[derive(Debug, Clone, Copy)]
pub struct LevelLogger<'a> {
    context: &'a LogContext,
    level: &'a str,
}

impl LevelLogger<'_> {
    /// Log `name` at this level
    pub fn log(&self, name: &str, args: impl IntoIterator<Item = Arg>) -> Result<()> {
        self.context.log(self.level, name, args)
    }

    /// The level name
    pub const fn level(&self) -> &str {
        self.level
    }
}

/// Create contexts directly from a root logger
pub trait GetContext {
    /// Create a context over this logger
    fn get_context(&self, prefix: Option<&str>, metadata: Option<Metadata>) -> LogContext;
}

impl GetContext for SharedLogger {
    fn get_context(&self, prefix: Option<&str>, metadata: Option<Metadata>) -> LogContext {
        LogContext::new(self.clone(), prefix, metadata)
    }
}
