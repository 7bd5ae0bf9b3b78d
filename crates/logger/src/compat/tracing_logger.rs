//! Root logger that emits through `tracing`

use crate::interpolate::{display, interpolate};
use crate::{Error, LevelSet, Record, Result, RootLogger, Severity};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Configuration for [`TracingLogger`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracingLoggerConfig {
    /// Declared level names and the tracing severity each maps to
    pub levels: LevelSet,
    /// Render `%s`-style placeholders in the message from positional args
    pub interpolate: bool,
}

impl Default for TracingLoggerConfig {
    fn default() -> Self {
        Self {
            levels: LevelSet::npm(),
            interpolate: true,
        }
    }
}

impl TracingLoggerConfig {
    /// Create a config builder
    pub fn builder() -> TracingLoggerConfigBuilder {
        TracingLoggerConfigBuilder::default()
    }
}

/// Builder for [`TracingLoggerConfig`]
#[derive(Debug, Default)]
pub struct TracingLoggerConfigBuilder {
    config: TracingLoggerConfig,
}

impl TracingLoggerConfigBuilder {
    /// Set the declared levels
    #[must_use]
    pub fn levels(mut self, levels: LevelSet) -> Self {
        self.config.levels = levels;
        self
    }

    /// Enable or disable placeholder interpolation
    #[must_use]
    pub fn interpolate(mut self, interpolate: bool) -> Self {
        self.config.interpolate = interpolate;
        self
    }

    /// Build the config
    pub fn build(self) -> TracingLoggerConfig {
        self.config
    }
}

/// A root logger that forwards every record as a `tracing` event
#[derive(Debug, Clone)]
pub struct TracingLogger {
    levels: Arc<LevelSet>,
    interpolate: bool,
}

impl TracingLogger {
    /// Create a new tracing logger
    pub fn new(config: TracingLoggerConfig) -> Self {
        Self {
            levels: Arc::new(config.levels),
            interpolate: config.interpolate,
        }
    }

    fn message(&self, record: &Record) -> String {
        if self.interpolate {
            return interpolate(&record.name, &record.args);
        }
        let mut message = record.name.clone();
        for arg in &record.args {
            message.push(' ');
            message.push_str(&display(arg));
        }
        message
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new(TracingLoggerConfig::default())
    }
}

macro_rules! emit {
    ($severity:expr, $($field:tt)*) => {
        match $severity {
            Severity::Error => tracing::error!($($field)*),
            Severity::Warn => tracing::warn!($($field)*),
            Severity::Info => tracing::info!($($field)*),
            Severity::Debug => tracing::debug!($($field)*),
            Severity::Trace => tracing::trace!($($field)*),
        }
    };
}

impl RootLogger for TracingLogger {
    fn log(&self, record: Record) -> Result<()> {
        let Some(severity) = self.levels.severity(&record.level) else {
            let err = Error::UndeclaredLevel(record.level.clone());
            record.complete(Err(&err));
            return Err(err);
        };

        let message = self.message(&record);
        let metadata = record.metadata.clone().into_value();
        emit!(severity, level = %record.level, metadata = %metadata, "{message}");

        record.complete(Ok(()));
        Ok(())
    }

    fn levels(&self) -> Option<Arc<LevelSet>> {
        Some(self.levels.clone())
    }

    fn close(&self, _id: Option<&str>) -> Result<()> {
        Ok(())
    }
}
