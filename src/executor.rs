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

//! # Ottlx Executor Module
//!
//! This module defines the capability set every statement executor offers to
//! the dispatcher. An executor is a named, versioned unit that runs a set of
//! statements over one telemetry signal kind, given a configuration string and
//! an OTLP/JSON payload, and that buffers diagnostic entries while it runs.
//!
//! ## Implementing Custom Executors
//!
//! ```rust
//! use ottlx::errors::Result;
//! use ottlx::executor::{OtExecutor, OtExecutorMetadata};
//! use ottlx::observe::OtObservedLogs;
//!
//! #[derive(Debug, Default)]
//! struct EchoExecutor {
//!     logs: OtObservedLogs,
//! }
//!
//! impl OtExecutor for EchoExecutor {
//!     fn metadata(&self) -> OtExecutorMetadata {
//!         OtExecutorMetadata::new("echo", "Echo", "0.1.0")
//!     }
//!
//!     fn execute_log_statements(&self, _config: &str, payload: &str) -> Result<Vec<u8>> {
//!         self.logs.info("echoing logs");
//!         Ok(payload.as_bytes().to_vec())
//!     }
//!
//!     fn execute_trace_statements(&self, _config: &str, payload: &str) -> Result<Vec<u8>> {
//!         Ok(payload.as_bytes().to_vec())
//!     }
//!
//!     fn execute_metric_statements(&self, _config: &str, payload: &str) -> Result<Vec<u8>> {
//!         Ok(payload.as_bytes().to_vec())
//!     }
//!
//!     fn observed_logs(&self) -> &OtObservedLogs {
//!         &self.logs
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::observe::{OtLogEntry, OtObservedLogs};
use crate::signal::OtSignalKind;

/// Descriptor identifying an executor for discovery and UI population.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OtExecutorMetadata {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(rename = "docsURL", default)]
    pub docs_url: String,
    pub version: String,
}

impl OtExecutorMetadata {
    pub fn new(id: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        OtExecutorMetadata {
            id: id.into(),
            name: name.into(),
            path: String::new(),
            docs_url: String::new(),
            version: version.into(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_docs_url(mut self, docs_url: impl Into<String>) -> Self {
        self.docs_url = docs_url.into();
        self
    }
}

/// Contract every statement executor fulfills.
///
/// The three `execute_*` methods share one shape: `(config, payload)` in,
/// output payload bytes or an error out. Diagnostics produced along the way go
/// into the buffer returned by [`observed_logs`](OtExecutor::observed_logs).
pub trait OtExecutor: Send + Sync + std::fmt::Debug {
    fn metadata(&self) -> OtExecutorMetadata;

    fn execute_log_statements(&self, config: &str, payload: &str) -> Result<Vec<u8>>;

    fn execute_trace_statements(&self, config: &str, payload: &str) -> Result<Vec<u8>>;

    fn execute_metric_statements(&self, config: &str, payload: &str) -> Result<Vec<u8>>;

    fn observed_logs(&self) -> &OtObservedLogs;

    /// Destructively reads every buffered diagnostic entry.
    fn drain_observed_logs(&self) -> Vec<OtLogEntry> {
        self.observed_logs().take_all()
    }
}

/// Routes to the execute method matching `kind`.
pub fn execute_statements(
    executor: &dyn OtExecutor,
    kind: OtSignalKind,
    config: &str,
    payload: &str,
) -> Result<Vec<u8>> {
    match kind {
        OtSignalKind::Logs => executor.execute_log_statements(config, payload),
        OtSignalKind::Traces => executor.execute_trace_statements(config, payload),
        OtSignalKind::Metrics => executor.execute_metric_statements(config, payload),
    }
}
