//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Ottlx.
//! The Ottlx project belongs to the Dunimd project team.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use ottlx::dispatch::OtDispatcher;
use ottlx::errors::{OtError, Result};
use ottlx::executor::{OtExecutor, OtExecutorMetadata};
use ottlx::observe::{OtLogEntry, OtLogLevel, OtObservedLogs};
use ottlx::registry::OtExecutorRegistry;
use ottlx::signal::OtSignalKind;

/// Records which method ran, logs one entry per call and fails when the
/// payload is `"fail"`.
#[derive(Debug, Default)]
struct ScriptedExecutor {
    id: String,
    calls: AtomicUsize,
    logs: OtObservedLogs,
}

impl ScriptedExecutor {
    fn new(id: &str) -> Self {
        ScriptedExecutor {
            id: id.to_string(),
            ..Default::default()
        }
    }

    fn run(&self, kind: &str, payload: &str) -> Result<Vec<u8>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.logs.record(
            OtLogEntry::new(OtLogLevel::Info, format!("{kind} call"))
                .with_field("call", call),
        );
        if payload == "fail" {
            self.logs.error("statement failed");
            return Err(OtError::executor(self.id.clone(), "invalid statement"));
        }
        Ok(format!("{kind}:{payload}").into_bytes())
    }
}

impl OtExecutor for ScriptedExecutor {
    fn metadata(&self) -> OtExecutorMetadata {
        OtExecutorMetadata::new(self.id.clone(), "Scripted", "0.0.1")
    }

    fn execute_log_statements(&self, _config: &str, payload: &str) -> Result<Vec<u8>> {
        self.run("logs", payload)
    }

    fn execute_trace_statements(&self, _config: &str, payload: &str) -> Result<Vec<u8>> {
        self.run("traces", payload)
    }

    fn execute_metric_statements(&self, _config: &str, payload: &str) -> Result<Vec<u8>> {
        self.run("metrics", payload)
    }

    fn observed_logs(&self) -> &OtObservedLogs {
        &self.logs
    }
}

#[derive(Debug, Default)]
struct PanickingExecutor {
    logs: OtObservedLogs,
}

impl OtExecutor for PanickingExecutor {
    fn metadata(&self) -> OtExecutorMetadata {
        OtExecutorMetadata::new("panics", "Panics", "0.0.1")
    }

    fn execute_log_statements(&self, _config: &str, _payload: &str) -> Result<Vec<u8>> {
        self.logs.warn("about to panic");
        panic!("evaluator crashed");
    }

    fn execute_trace_statements(&self, _config: &str, _payload: &str) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    fn execute_metric_statements(&self, _config: &str, _payload: &str) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    fn observed_logs(&self) -> &OtObservedLogs {
        &self.logs
    }
}

fn dispatcher_with(executor: Arc<ScriptedExecutor>) -> OtDispatcher {
    let registry = OtExecutorRegistry::with_executors([executor as Arc<dyn OtExecutor>]).unwrap();
    OtDispatcher::new(registry)
}

#[test]
fn test_execute_success_returns_output_and_logs_without_error() {
    let executor = Arc::new(ScriptedExecutor::new("ottlvm"));
    let dispatcher = dispatcher_with(executor.clone());

    let result = dispatcher.execute("ottlvm", "logs", "", "{}");
    assert!(result.is_ok());
    assert_eq!(result.error, None);
    assert_eq!(result.value, "logs:{}");
    assert_eq!(result.logs.lines().count(), 1);
    assert!(result.logs.contains("\tinfo\tlogs call\t{\"call\":0}"));
    assert!(!result.to_json().as_object().unwrap().contains_key("error"));
}

#[test]
fn test_execute_routes_each_signal_kind() {
    let executor = Arc::new(ScriptedExecutor::new("ottlvm"));
    let dispatcher = dispatcher_with(executor);

    assert_eq!(dispatcher.execute("ottlvm", "traces", "", "x").value, "traces:x");
    assert_eq!(dispatcher.execute("ottlvm", "metrics", "", "x").value, "metrics:x");
    assert_eq!(
        dispatcher
            .execute_kind("ottlvm", OtSignalKind::Logs, "", "x")
            .value,
        "logs:x"
    );
}

#[test]
fn test_execute_unknown_executor_reports_unsupported_evaluator() {
    let executor = Arc::new(ScriptedExecutor::new("ottlvm"));
    executor.observed_logs().info("left over");
    let dispatcher = dispatcher_with(executor.clone());

    for kind in ["logs", "traces", "metrics", "spans"] {
        let result = dispatcher.execute("missing", kind, "", "{}");
        assert_eq!(result.error.as_deref(), Some("unsupported evaluator missing"));
        assert_eq!(result.logs, "");
        assert_eq!(result.value, "");
    }
    assert_eq!(executor.calls.load(Ordering::SeqCst), 0);
    assert_eq!(executor.observed_logs().len(), 1);
}

#[test]
fn test_execute_unknown_signal_kind_leaves_executor_untouched() {
    let executor = Arc::new(ScriptedExecutor::new("ottlvm"));
    executor.observed_logs().info("buffered before");
    let dispatcher = dispatcher_with(executor.clone());

    let result = dispatcher.execute("ottlvm", "spans", "", "{}");
    assert_eq!(result.error.as_deref(), Some("unsupported OTLP data type spans"));
    assert_eq!(result.logs, "");
    assert_eq!(executor.calls.load(Ordering::SeqCst), 0);
    assert_eq!(executor.observed_logs().len(), 1);
}

#[test]
fn test_execute_failure_wraps_error_and_drains_logs() {
    let executor = Arc::new(ScriptedExecutor::new("ottlvm"));
    let dispatcher = dispatcher_with(executor.clone());

    let result = dispatcher.execute("ottlvm", "traces", "", "fail");
    let error = result.error.clone().unwrap();
    assert_eq!(
        error,
        "unable to run traces statements. Error: executor 'ottlvm' failed: invalid statement"
    );
    assert_eq!(result.value, "");
    let lines: Vec<&str> = result.logs.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("traces call"));
    assert!(lines[1].contains("\terror\tstatement failed"));
    assert!(executor.observed_logs().is_empty());
}

#[test]
fn test_execute_drains_destructively_between_calls() {
    let executor = Arc::new(ScriptedExecutor::new("ottlvm"));
    let dispatcher = dispatcher_with(executor);

    let first = dispatcher.execute("ottlvm", "logs", "", "a");
    let second = dispatcher.execute("ottlvm", "logs", "", "b");
    assert!(first.logs.contains("{\"call\":0}"));
    assert!(!first.logs.contains("{\"call\":1}"));
    assert!(second.logs.contains("{\"call\":1}"));
    assert!(!second.logs.contains("{\"call\":0}"));
}

#[test]
fn test_execute_includes_entries_buffered_before_call() {
    let executor = Arc::new(ScriptedExecutor::new("ottlvm"));
    executor.observed_logs().warn("from setup");
    let dispatcher = dispatcher_with(executor);

    let result = dispatcher.execute("ottlvm", "logs", "", "{}");
    let lines: Vec<&str> = result.logs.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("\twarn\tfrom setup"));
}

#[test]
fn test_execute_turns_panic_into_error_result() {
    let mut registry = OtExecutorRegistry::new();
    registry.register(PanickingExecutor::default()).unwrap();
    let dispatcher = OtDispatcher::new(registry);

    let result = dispatcher.execute("panics", "logs", "", "{}");
    let error = result.error.unwrap();
    assert!(error.starts_with("unable to run logs statements. Error: "));
    assert!(error.contains("evaluator crashed"));
    assert!(result.logs.contains("about to panic"));

    let after = dispatcher.execute("panics", "traces", "", "{}");
    assert!(after.is_ok());
}

#[test]
fn test_concurrent_calls_never_share_log_entries() {
    let executor = Arc::new(ScriptedExecutor::new("ottlvm"));
    let dispatcher = dispatcher_with(executor);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let dispatcher = dispatcher.clone();
            thread::spawn(move || {
                (0..25)
                    .map(|_| dispatcher.execute("ottlvm", "logs", "", "{}").logs)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = std::collections::HashSet::new();
    for handle in handles {
        for logs in handle.join().unwrap() {
            assert_eq!(logs.lines().count(), 1);
            let call = logs.split("{\"call\":").nth(1).unwrap().to_string();
            assert!(seen.insert(call));
        }
    }
    assert_eq!(seen.len(), 200);
}

#[test]
fn test_list_executors_in_registration_order() {
    let mut registry = OtExecutorRegistry::new();
    registry.register(ScriptedExecutor::new("b")).unwrap();
    registry.register(ScriptedExecutor::new("a")).unwrap();
    let dispatcher = OtDispatcher::new(registry);

    let ids: Vec<String> = dispatcher.list_executors().into_iter().map(|d| d.id).collect();
    assert_eq!(ids, vec!["b".to_string(), "a".to_string()]);
    dispatcher.execute("a", "logs", "", "{}");
    assert_eq!(dispatcher.list_executors().len(), 2);
}
