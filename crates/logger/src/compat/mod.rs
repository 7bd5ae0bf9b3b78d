//! Root loggers backed by other logging crates

#[cfg(feature = "tracing-compat")]
pub mod tracing_logger;

#[cfg(feature = "tracing-compat")]
pub use tracing_logger::{TracingLogger, TracingLoggerConfig, TracingLoggerConfigBuilder};
