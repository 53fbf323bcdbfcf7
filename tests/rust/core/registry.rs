//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Ottlx.
//! The Ottlx project belongs to the Dunimd project team.

use std::sync::Arc;

use proptest::prelude::*;
use ottlx::errors::{OtError, Result};
use ottlx::executor::{OtExecutor, OtExecutorMetadata};
use ottlx::observe::OtObservedLogs;
use ottlx::registry::OtExecutorRegistry;

#[derive(Debug, Default)]
struct NamedExecutor {
    id: String,
    logs: OtObservedLogs,
}

impl NamedExecutor {
    fn new(id: &str) -> Self {
        NamedExecutor {
            id: id.to_string(),
            logs: OtObservedLogs::new(),
        }
    }
}

impl OtExecutor for NamedExecutor {
    fn metadata(&self) -> OtExecutorMetadata {
        OtExecutorMetadata::new(self.id.clone(), format!("{} executor", self.id), "1.0.0")
            .with_path(format!("/{}", self.id))
            .with_docs_url(format!("https://example.com/{}", self.id))
    }

    fn execute_log_statements(&self, _config: &str, _payload: &str) -> Result<Vec<u8>> {
        Ok(self.id.as_bytes().to_vec())
    }

    fn execute_trace_statements(&self, _config: &str, _payload: &str) -> Result<Vec<u8>> {
        Ok(self.id.as_bytes().to_vec())
    }

    fn execute_metric_statements(&self, _config: &str, _payload: &str) -> Result<Vec<u8>> {
        Ok(self.id.as_bytes().to_vec())
    }

    fn observed_logs(&self) -> &OtObservedLogs {
        &self.logs
    }
}

#[test]
fn test_registry_lookup_returns_matching_executor() {
    let mut registry = OtExecutorRegistry::new();
    registry.register(NamedExecutor::new("ottlvm")).unwrap();
    registry.register(NamedExecutor::new("transform_processor")).unwrap();

    let found = registry.get("transform_processor").unwrap();
    assert_eq!(found.metadata().id, "transform_processor");
    assert!(registry.get("filter_processor").is_none());
    assert!(registry.contains("ottlvm"));
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_registry_rejects_duplicate_id_and_keeps_first() {
    let mut registry = OtExecutorRegistry::new();
    registry.register(NamedExecutor::new("ottlvm")).unwrap();

    let err = registry.register(NamedExecutor::new("ottlvm")).unwrap_err();
    assert_eq!(err, OtError::DuplicateExecutor("ottlvm".into()));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.descriptors().len(), 1);
}

#[test]
fn test_registry_rejects_empty_id() {
    let mut registry = OtExecutorRegistry::new();
    let err = registry.register(NamedExecutor::new("")).unwrap_err();
    assert!(matches!(err, OtError::Validation { .. }));
    assert!(registry.is_empty());
}

#[test]
fn test_registry_with_executors_stops_at_duplicate() {
    let executors: Vec<Arc<dyn OtExecutor>> = vec![
        Arc::new(NamedExecutor::new("a")),
        Arc::new(NamedExecutor::new("a")),
    ];
    assert!(OtExecutorRegistry::with_executors(executors).is_err());
}

#[test]
fn test_registry_descriptors_carry_metadata() {
    let mut registry = OtExecutorRegistry::new();
    registry.register(NamedExecutor::new("ottlvm")).unwrap();

    let descriptors = registry.descriptors();
    assert_eq!(descriptors[0].name, "ottlvm executor");
    assert_eq!(descriptors[0].path, "/ottlvm");
    assert_eq!(descriptors[0].docs_url, "https://example.com/ottlvm");
    assert_eq!(descriptors[0].version, "1.0.0");
}

#[test]
fn test_registry_with_builtin_lists_passthrough_first() {
    let registry = OtExecutorRegistry::with_builtin().unwrap();
    let ids: Vec<String> = registry.descriptors().into_iter().map(|d| d.id).collect();
    assert_eq!(ids.first().map(String::as_str), Some("passthrough"));
}

proptest! {
    #[test]
    fn prop_registry_enumerates_in_registration_order(
        ids in prop::collection::hash_set("[a-z_]{1,12}", 0..24)
    ) {
        let ids: Vec<String> = ids.into_iter().collect();
        let mut registry = OtExecutorRegistry::new();
        for id in &ids {
            registry.register(NamedExecutor::new(id)).unwrap();
        }

        prop_assert_eq!(registry.len(), ids.len());
        let listed: Vec<String> = registry.list().map(|e| e.metadata().id).collect();
        prop_assert_eq!(&listed, &ids);
        for id in &ids {
            prop_assert_eq!(&registry.get(id).unwrap().metadata().id, id);
        }
    }
}
