//! Scoped logging contexts over a shared root logger
//!
//! A [`LogContext`] prepends a dotted name prefix and attaches accumulated
//! metadata to every call before forwarding it to a [`RootLogger`]. Child
//! contexts derived with [`LogContext::derive_context`] extend both, and all
//! of them write through the same root, however deeply nested.
//!
//! # Example
//! ```
//! use proven_logger::{Metadata, NoOpLogger, SharedLogger, args};
//! use proven_logger_context::LogContext;
//! use std::sync::Arc;
//!
//! let root: SharedLogger = Arc::new(NoOpLogger);
//! let http = LogContext::new(root, Some("http"), Some(Metadata::from([("service", "api")])));
//! let request = http.derive_context("request", Some(Metadata::from([("id", 42)])));
//!
//! // forwarded to the root as "http.request.started" with {service, id, status}
//! request
//!     .log("info", "started", args![Metadata::from([("status", 200)])])
//!     .unwrap();
//! ```
//!
//! [`RootLogger`]: proven_logger::RootLogger

#![warn(missing_docs, unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

mod classify;
mod context;
mod prefix;

pub use context::{GetContext, LevelLogger, LogContext};
pub use prefix::SEPARATOR;
