//! Root logger contract and call types for scoped logging contexts
//!
//! A root logger receives normalized [`Record`]s: a level name, a message
//! name, positional arguments and merged [`Metadata`], plus an optional
//! completion [`Callback`]. Scoped contexts (see `proven-logger-context`)
//! prepare these records and forward them to one shared [`RootLogger`].

#![warn(missing_docs, unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

mod arg;
mod error;
mod interpolate;
mod level;
mod logger;
mod metadata;
mod record;

pub mod compat;

#[cfg(feature = "test-support")]
pub mod test_support;

pub use arg::{Arg, Callback};
pub use error::{Error, Result};
pub use interpolate::interpolate;
pub use level::{LevelDef, LevelSet, Severity};
pub use logger::{NoOpLogger, RootLogger, SharedLogger, resolve_root};
pub use metadata::Metadata;
pub use record::Record;

#[cfg(feature = "tracing-compat")]
pub use compat::{TracingLogger, TracingLoggerConfig};
