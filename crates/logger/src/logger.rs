//! Root logger contract

use crate::{Error, LevelSet, Record, Result};
use std::sync::Arc;

/// Shared handle to a root logger
pub type SharedLogger = Arc<dyn RootLogger>;

/// The logger that scoped contexts ultimately write through.
///
/// Every operation is optional: a logger that implements nothing still
/// constructs contexts fine and only fails when it is actually used.
pub trait RootLogger: Send + Sync + 'static {
    /// Handle a normalized log call
    fn log(&self, record: Record) -> Result<()> {
        drop(record);
        Err(Error::MissingCapability("log"))
    }

    /// Level names this logger declares, used to offer convenience methods
    fn levels(&self) -> Option<Arc<LevelSet>> {
        None
    }

    /// The logger this one proxies for, if it is itself a wrapper
    fn parent(&self) -> Option<SharedLogger> {
        None
    }

    /// Close the logger (or the part identified by `id`)
    fn close(&self, id: Option<&str>) -> Result<()> {
        let _ = id;
        Err(Error::MissingCapability("close"))
    }
}

/// Logger that accepts and discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl RootLogger for NoOpLogger {
    fn log(&self, record: Record) -> Result<()> {
        record.complete(Ok(()));
        Ok(())
    }

    fn close(&self, _id: Option<&str>) -> Result<()> {
        Ok(())
    }
}

/// Follow `parent` links until reaching a logger that is not a wrapper.
pub fn resolve_root(logger: SharedLogger) -> SharedLogger {
    let mut root = logger;
    while let Some(parent) = root.parent() {
        root = parent;
    }
    root
}
