//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Ottlx.
//! The Ottlx project belongs to the Dunimd project team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! Passthrough executor.
//!
//! Runs no statements of its own. It checks that the payload is an OTLP/JSON
//! document for the requested signal kind, reports what it saw through its
//! observed logs, and returns the document unchanged (compact, or indented
//! when `pretty: true`).

use serde::Deserialize;
use serde_json::Value;

use crate::errors::{OtError, Result};
use crate::executor::{OtExecutor, OtExecutorMetadata};
use crate::observe::{OtLogEntry, OtLogLevel, OtObserveConfig, OtObservedLogs};
use crate::signal::OtSignalKind;

pub const PASSTHROUGH_ID: &str = "passthrough";

/// YAML configuration accepted by the passthrough executor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OtPassthroughConfig {
    pub pretty: bool,
    /// Emit a debug entry per resource.
    pub verbose: bool,
}

impl OtPassthroughConfig {
    /// Parses a YAML document. Blank or comment-only text yields the default.
    pub fn parse(text: &str) -> Result<Self> {
        let blank = text
            .lines()
            .map(str::trim)
            .all(|line| line.is_empty() || line.starts_with('#'));
        if blank {
            return Ok(Self::default());
        }
        let value: serde_yaml::Value = serde_yaml::from_str(text)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_value(value)?)
    }
}

#[derive(Debug, Default)]
pub struct OtPassthroughExecutor {
    logs: OtObservedLogs,
}

impl OtPassthroughExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observe_config(config: OtObserveConfig) -> Self {
        OtPassthroughExecutor {
            logs: OtObservedLogs::with_config(config),
        }
    }

    fn run(&self, kind: OtSignalKind, config: &str, payload: &str) -> Result<Vec<u8>> {
        self.logs.record(
            OtLogEntry::new(OtLogLevel::Info, "received payload")
                .with_field("signal", kind.as_str())
                .with_field("bytes", payload.len()),
        );

        let config = OtPassthroughConfig::parse(config).map_err(|err| {
            self.logs.error("could not parse configuration");
            err
        })?;

        let document: Value = serde_json::from_str(payload).map_err(|err| {
            self.logs.error("payload is not valid JSON");
            OtError::payload(err.to_string())
        })?;

        let key = kind.resource_key();
        let resources = document
            .get(key)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                self.logs.error(format!("payload has no {key} array"));
                OtError::payload(format!("expected a {key} array for {kind}"))
            })?;

        if config.verbose {
            for (index, resource) in resources.iter().enumerate() {
                let mut entry = OtLogEntry::new(OtLogLevel::Debug, "resource")
                    .with_field("index", index);
                if let Some(service) = service_name(resource) {
                    entry = entry.with_field("service.name", service);
                }
                self.logs.record(entry);
            }
        }

        self.logs.record(
            OtLogEntry::new(OtLogLevel::Info, "payload passed through")
                .with_field("signal", kind.as_str())
                .with_field("resources", resources.len()),
        );

        let output = if config.pretty {
            serde_json::to_vec_pretty(&document)?
        } else {
            serde_json::to_vec(&document)?
        };
        Ok(output)
    }
}

// `service.name` from an OTLP/JSON resource attribute list.
fn service_name(resource: &Value) -> Option<&str> {
    resource
        .get("resource")?
        .get("attributes")?
        .as_array()?
        .iter()
        .find(|attr| attr.get("key").and_then(Value::as_str) == Some("service.name"))?
        .get("value")?
        .get("stringValue")?
        .as_str()
}

impl OtExecutor for OtPassthroughExecutor {
    fn metadata(&self) -> OtExecutorMetadata {
        OtExecutorMetadata::new(PASSTHROUGH_ID, "Passthrough", env!("CARGO_PKG_VERSION"))
            .with_path(PASSTHROUGH_ID)
    }

    fn execute_log_statements(&self, config: &str, payload: &str) -> Result<Vec<u8>> {
        self.run(OtSignalKind::Logs, config, payload)
    }

    fn execute_trace_statements(&self, config: &str, payload: &str) -> Result<Vec<u8>> {
        self.run(OtSignalKind::Traces, config, payload)
    }

    fn execute_metric_statements(&self, config: &str, payload: &str) -> Result<Vec<u8>> {
        self.run(OtSignalKind::Metrics, config, payload)
    }

    fn observed_logs(&self) -> &OtObservedLogs {
        &self.logs
    }
}
