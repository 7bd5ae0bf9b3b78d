//! Behaviour of log contexts against a capturing root logger

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use proven_logger::test_support::CaptureLogger;
use proven_logger::{
    Arg, Callback, Error, Metadata, Record, Result, RootLogger, SharedLogger, args,
};
use proven_logger_context::{GetContext, LogContext};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn capture() -> (CaptureLogger, SharedLogger) {
    let capture = CaptureLogger::new();
    let logger: SharedLogger = Arc::new(capture.clone());
    (capture, logger)
}

fn meta<const N: usize>(entries: [(&str, i64); N]) -> Option<Metadata> {
    Some(Metadata::from(entries))
}

#[test]
fn test_root_logger_unaffected_by_context() {
    let (capture, logger) = capture();
    let _ctx = LogContext::new(logger.clone(), Some("prefix"), meta([("ctx", 1)]));

    logger
        .log(Record::new("info", "test").with_metadata(Metadata::from([("meta", true)])))
        .unwrap();

    let record = capture.last().unwrap();
    assert_eq!(capture.count(), 1);
    assert_eq!(record.name, "test");
    assert_eq!(record.metadata, Metadata::from([("meta", true)]));
}

#[test]
fn test_context_adds_prefix_and_metadata() {
    let (capture, logger) = capture();
    let ctx = LogContext::new(logger, Some("prefix"), meta([("ctx", 1)]));

    ctx.info("test", args![Metadata::from([("meta", true)])]).unwrap();

    let record = capture.last().unwrap();
    assert_eq!(capture.count(), 1);
    assert_eq!(record.level, "info");
    assert_eq!(record.name, "prefix.test");
    assert_eq!(
        record.metadata,
        Metadata::from([("ctx", json!(1)), ("meta", json!(true))])
    );
}

#[test]
fn test_sibling_contexts_are_independent() {
    let (capture, logger) = capture();
    let ctx1 = LogContext::new(logger.clone(), Some("1"), meta([("ctx", 1)]));
    let ctx2 = LogContext::new(logger, Some("2"), meta([("ctx", 2)]));

    ctx1.error("ONE", args![Metadata::from([("logger", 1)])]).unwrap();
    ctx2.error("TWO", args![Metadata::from([("logger", 2)])]).unwrap();

    let records = capture.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "1.ONE");
    assert_eq!(records[0].metadata, Metadata::from([("ctx", 1), ("logger", 1)]));
    assert_eq!(records[1].name, "2.TWO");
    assert_eq!(records[1].metadata, Metadata::from([("ctx", 2), ("logger", 2)]));
}

#[test]
fn test_derived_siblings_are_independent() {
    let (capture, logger) = capture();
    let parent = LogContext::new(logger, Some("parent"), meta([("p", 1)]));
    let left = parent.derive_context("left", meta([("side", 0)]));
    let right = parent.derive_context("right", meta([("side", 1)]));

    right.info("r", args![]).unwrap();
    left.info("l", args![]).unwrap();
    parent.info("p", args![]).unwrap();

    let records = capture.records();
    assert_eq!(records[0].name, "parent.right.r");
    assert_eq!(records[0].metadata, Metadata::from([("p", 1), ("side", 1)]));
    assert_eq!(records[1].name, "parent.left.l");
    assert_eq!(records[1].metadata, Metadata::from([("p", 1), ("side", 0)]));
    assert_eq!(records[2].name, "parent.p");
    assert_eq!(records[2].metadata, Metadata::from([("p", 1)]));
}

#[test]
fn test_grandchild_contexts() {
    let (capture, logger) = capture();
    let child = LogContext::new(logger.clone(), Some("child"), meta([("child", 1)]));
    let grandchild = child.derive_context("grandchild", meta([("grandchild", 1)]));

    child.info("1", args![Metadata::from([("meta", 1)])]).unwrap();
    grandchild.info("2", args![Metadata::from([("meta", 2)])]).unwrap();

    let records = capture.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "child.1");
    assert_eq!(records[0].metadata, Metadata::from([("child", 1), ("meta", 1)]));
    assert_eq!(records[1].name, "child.grandchild.2");
    assert_eq!(
        records[1].metadata,
        Metadata::from([("child", 1), ("grandchild", 1), ("meta", 2)])
    );

    // Both forward to the very same root
    assert!(Arc::ptr_eq(child.root(), &logger));
    assert!(Arc::ptr_eq(grandchild.root(), &logger));
}

#[test]
fn test_root_resolution_for_any_depth() {
    let (capture, logger) = capture();
    let mut ctx = LogContext::wrap(logger.clone());

    for depth in 0..16 {
        assert!(Arc::ptr_eq(ctx.root(), &logger));
        ctx = if depth % 2 == 0 {
            ctx.derive_context("d", None)
        } else {
            // wrap the context itself; resolution must skip it
            LogContext::new(ctx.shared(), Some("w"), None)
        };
    }

    ctx.info("leaf", args![]).unwrap();
    assert_eq!(capture.count(), 1);
}

#[test]
fn test_prefix_concatenation() {
    let (capture, logger) = capture();
    let ctx = LogContext::new(logger, Some("a"), None).derive_context("b", None);

    ctx.log("info", "msg", args![]).unwrap();

    assert_eq!(ctx.prefix(), "a.b.");
    assert_eq!(capture.last().unwrap().name, "a.b.msg");
}

#[test]
fn test_get_context_from_root() {
    let (capture, logger) = capture();

    let ctx = logger.get_context(Some("a"), meta([("meta", 1)]));
    ctx.warn("x", args![]).unwrap();

    let record = capture.last().unwrap();
    assert_eq!(record.name, "a.x");
    assert_eq!(record.metadata, Metadata::from([("meta", 1)]));
}

#[test]
fn test_only_metadata_keeps_name() {
    let (capture, logger) = capture();
    let ctx = LogContext::new(logger, Some(""), meta([("meta", 1)]));

    ctx.info("test", args![]).unwrap();

    let record = capture.last().unwrap();
    assert_eq!(record.name, "test");
    assert_eq!(record.metadata, Metadata::from([("meta", 1)]));
}

#[test]
fn test_only_prefix_keeps_metadata() {
    let (capture, logger) = capture();
    let ctx = LogContext::new(logger, Some("name"), None);

    ctx.info("test", args![]).unwrap();

    let record = capture.last().unwrap();
    assert_eq!(record.name, "name.test");
    assert!(record.metadata.is_empty());
}

#[test]
fn test_empty_context_passes_through() {
    let (capture, logger) = capture();
    let ctx = LogContext::wrap(logger);

    ctx.info("test", args![Metadata::from([("meta", 1)])]).unwrap();

    let record = capture.last().unwrap();
    assert_eq!(record.name, "test");
    assert_eq!(record.metadata, Metadata::from([("meta", 1)]));
}

#[test]
fn test_call_metadata_wins_over_context() {
    let (capture, logger) = capture();
    let ctx = LogContext::new(logger, None, meta([("meta", 1)]));

    ctx.info("test", args![Metadata::from([("meta", 2)])]).unwrap();

    assert_eq!(capture.last().unwrap().metadata, Metadata::from([("meta", 2)]));
}

#[test]
fn test_multiple_metadata_arguments() {
    let (capture, logger) = capture();
    let ctx = LogContext::new(logger, None, meta([("a", 1), ("b", 2), ("c", 4)]));

    ctx.info(
        "test",
        args![Metadata::from([("c", 3)]), Metadata::from([("d", 4)])],
    )
    .unwrap();

    assert_eq!(
        capture.last().unwrap().metadata,
        Metadata::from([("a", 1), ("b", 2), ("c", 3), ("d", 4)])
    );
}

#[test]
fn test_derived_fragment_wins_over_accumulated() {
    let (capture, logger) = capture();
    let ctx = LogContext::new(logger, None, meta([("shared", 1), ("parent", 1)]))
        .derive_context("", meta([("shared", 2)]));

    ctx.info("test", args![]).unwrap();

    assert_eq!(ctx.prefix(), "");
    assert_eq!(
        capture.last().unwrap().metadata,
        Metadata::from([("parent", 1), ("shared", 2)])
    );
}

#[test]
fn test_argument_classification() {
    let (capture, logger) = capture();
    let ctx = LogContext::new(logger, None, meta([("a", 1)]));

    ctx.info("test %s %s %s", args![json!({ "context": 1 }), "foo", 1]).unwrap();

    let record = capture.last().unwrap();
    assert_eq!(record.name, "test %s %s %s");
    assert_eq!(record.args, vec![json!("foo"), json!(1)]);
    assert_eq!(record.metadata, Metadata::from([("a", 1), ("context", 1)]));
    assert_eq!(capture.messages(), vec!["test foo 1 %s".to_string()]);
}

#[test]
fn test_surplus_arguments_are_positional() {
    let (capture, logger) = capture();
    let ctx = LogContext::wrap(logger);

    ctx.info("%s", args![json!({ "context": 1 }), "a", "b"]).unwrap();

    let record = capture.last().unwrap();
    assert_eq!(record.metadata, Metadata::from([("context", 1)]));
    assert_eq!(capture.messages(), vec!["a b".to_string()]);
}

#[test]
fn test_arrays_are_metadata_keyed_by_index() {
    let (capture, logger) = capture();
    let ctx = LogContext::new(logger, None, meta([("k", 1)]));

    ctx.info("m", args![json!([7, 8]), "x"]).unwrap();

    let record = capture.last().unwrap();
    assert_eq!(record.args, vec![json!("x")]);
    assert_eq!(
        record.metadata,
        Metadata::from([("0", json!(7)), ("1", json!(8)), ("k", json!(1))])
    );
}

#[test]
fn test_callback_passthrough() {
    let (capture, logger) = capture();
    let ctx = LogContext::new(logger, Some("cb"), None);
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let callback = Callback::new(move |outcome| {
        assert!(outcome.is_ok());
        counter.fetch_add(1, Ordering::SeqCst);
    });

    ctx.info("done", args!["x", callback.clone()]).unwrap();
    ctx.info("plain", args!["x"]).unwrap();

    let records = capture.records();
    assert!(records[0].callback.as_ref().unwrap().ptr_eq(&callback));
    assert_eq!(records[0].args, vec![json!("x")]);
    assert!(records[0].metadata.is_empty());
    assert!(records[1].callback.is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_permissive_construction() {
    struct LogOnly(Arc<AtomicUsize>);

    impl RootLogger for LogOnly {
        fn log(&self, _record: Record) -> Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    let calls = Arc::new(AtomicUsize::new(0));
    let ctx = LogContext::new(Arc::new(LogOnly(calls.clone())), None, Some(Metadata::new()));

    assert!(ctx.level_names().is_empty());
    ctx.log("info", "hello", args![]).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // No levels were declared, so no convenience methods exist
    assert_matches!(ctx.info("hello", args![]), Err(Error::UndeclaredLevel(level)) if level == "info");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_missing_log_fails_only_when_logging() {
    struct Nothing;
    impl RootLogger for Nothing {}

    let ctx = LogContext::new(Arc::new(Nothing), Some("x"), None);

    assert_matches!(
        ctx.log("info", "hello", args![]),
        Err(Error::MissingCapability("log"))
    );
    assert_matches!(ctx.close(None), Err(Error::MissingCapability("close")));
}

#[test]
fn test_root_errors_propagate_unchanged() {
    struct Failing;

    impl RootLogger for Failing {
        fn log(&self, _record: Record) -> Result<()> {
            Err(Error::Root("transport down".into()))
        }
    }

    let ctx = LogContext::wrap(Arc::new(Failing));

    assert_matches!(
        ctx.log("info", "x", args![]),
        Err(Error::Root(err)) if err.to_string() == "transport down"
    );
}

#[test]
fn test_close_passthrough() {
    let (capture, logger) = capture();
    let ctx = LogContext::new(logger, Some("a"), None).derive_context("b", None);

    ctx.close(Some("file")).unwrap();

    assert_eq!(capture.closed(), vec![Some("file".to_string())]);
}

#[test]
fn test_discovered_levels() {
    let (_, logger) = capture();
    let ctx = LogContext::wrap(logger);

    assert_eq!(
        ctx.level_names(),
        vec!["error", "warn", "info", "http", "verbose", "debug", "silly"]
    );
    for level in ctx.level_names() {
        assert!(ctx.at(level).is_ok());
    }
    assert_matches!(ctx.at("emerg"), Err(Error::UndeclaredLevel(_)));

    let set = RootLogger::levels(&ctx).unwrap();
    assert_eq!(set.names().collect::<Vec<_>>(), ctx.level_names());
}

#[test]
fn test_level_methods_forward_to_log() {
    let (capture, logger) = capture();
    let ctx = LogContext::wrap(logger);

    ctx.error("e", args![]).unwrap();
    ctx.warn("w", args![]).unwrap();
    ctx.http("h", args![]).unwrap();
    ctx.verbose("v", args![]).unwrap();
    ctx.debug("d", args![]).unwrap();
    ctx.silly("s", args![]).unwrap();

    let levels: Vec<_> = capture.records().into_iter().map(|r| r.level).collect();
    assert_eq!(levels, ["error", "warn", "http", "verbose", "debug", "silly"]);
}

#[test]
fn test_context_as_root_logger() {
    let (capture, logger) = capture();
    let ctx = LogContext::new(logger, Some("svc"), meta([("svc", 1)]));
    let as_root: SharedLogger = ctx.shared();

    as_root
        .log(
            Record::new("info", "boot")
                .with_args(vec![json!("now")])
                .with_metadata(Metadata::from([("svc", 2)])),
        )
        .unwrap();

    let record = capture.last().unwrap();
    assert_eq!(record.name, "svc.boot");
    assert_eq!(record.args, vec![json!("now")]);
    assert_eq!(record.metadata, Metadata::from([("svc", 2)]));
    assert!(as_root.levels().unwrap().contains("info"));
}

#[test]
fn test_args_from_iterator() {
    let (capture, logger) = capture();
    let ctx = LogContext::wrap(logger);
    let args: Vec<Arg> = (1_i64..=3).map(Arg::from).collect();

    ctx.debug("%d-%d-%d", args).unwrap();

    assert_eq!(capture.messages(), vec!["1-2-3".to_string()]);
}
