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

//! # Dispatch Module
//!
//! The dispatcher resolves an executor by identifier, routes the call to the
//! execute method for the requested signal kind and folds the outcome, along
//! with whatever the executor logged, into an [`OtExecutionResult`].
//!
//! ## Outcomes
//!
//! - Unknown executor: `unsupported evaluator <id>`, empty logs
//! - Unknown signal kind: `unsupported OTLP data type <kind>`, empty logs, the
//!   executor is neither invoked nor drained
//! - Execution failure: `unable to run <kind> statements. Error: <err>` with
//!   the drained logs
//! - Success: the output payload as text with the drained logs

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use log::{debug, warn};

use crate::errors::{OtError, Result};
use crate::executor::{execute_statements, OtExecutorMetadata};
use crate::registry::{OtExecutorRegistry, OtRegisteredExecutor};
use crate::result::{render_logs, OtExecutionResult};
use crate::signal::OtSignalKind;

#[derive(Clone, Debug)]
pub struct OtDispatcher {
    registry: Arc<OtExecutorRegistry>,
}

impl OtDispatcher {
    pub fn new(registry: OtExecutorRegistry) -> Self {
        Self::from_shared(Arc::new(registry))
    }

    pub fn from_shared(registry: Arc<OtExecutorRegistry>) -> Self {
        OtDispatcher { registry }
    }

    pub fn registry(&self) -> &OtExecutorRegistry {
        &self.registry
    }

    /// Descriptors of every registered executor, in registration order.
    pub fn list_executors(&self) -> Vec<OtExecutorMetadata> {
        self.registry.descriptors()
    }

    /// Runs `payload` through the statements in `config` using the executor
    /// registered as `executor_id`, for the signal kind named by `signal_kind`.
    pub fn execute(
        &self,
        executor_id: &str,
        signal_kind: &str,
        config: &str,
        payload: &str,
    ) -> OtExecutionResult {
        let Some(entry) = self.resolve(executor_id) else {
            return OtExecutionResult::error(
                OtError::UnsupportedExecutor(executor_id.to_string()).to_string(),
                "",
            );
        };

        match signal_kind.parse::<OtSignalKind>() {
            Ok(kind) => Self::run(entry, kind, config, payload),
            Err(err) => {
                warn!("rejected signal kind {signal_kind:?} for executor {executor_id}");
                OtExecutionResult::error(err.to_string(), "")
            }
        }
    }

    /// Same as [`execute`](Self::execute) for callers holding a typed kind.
    pub fn execute_kind(
        &self,
        executor_id: &str,
        kind: OtSignalKind,
        config: &str,
        payload: &str,
    ) -> OtExecutionResult {
        match self.resolve(executor_id) {
            Some(entry) => Self::run(entry, kind, config, payload),
            None => OtExecutionResult::error(
                OtError::UnsupportedExecutor(executor_id.to_string()).to_string(),
                "",
            ),
        }
    }

    fn resolve(&self, executor_id: &str) -> Option<&OtRegisteredExecutor> {
        let entry = self.registry.entry(executor_id);
        if entry.is_none() {
            warn!("no executor registered as {executor_id:?}");
        }
        entry
    }

    fn run(
        entry: &OtRegisteredExecutor,
        kind: OtSignalKind,
        config: &str,
        payload: &str,
    ) -> OtExecutionResult {
        let _guard = entry.lock_dispatch();
        let executor = entry.executor();
        debug!("running {kind} statements with {}", entry.metadata().id);

        let outcome = guarded(|| execute_statements(&**executor, kind, config, payload));
        let logs = render_logs(&executor.drain_observed_logs());

        match outcome {
            Ok(output) => OtExecutionResult::success(String::from_utf8_lossy(&output), logs),
            Err(err) => {
                debug!("{} failed on {kind}: {err}", entry.metadata().id);
                OtExecutionResult::error(
                    format!("unable to run {kind} statements. Error: {err}"),
                    logs,
                )
            }
        }
    }
}

// An executor panic becomes an ordinary failure so the host still gets a result.
fn guarded<F>(call: F) -> Result<Vec<u8>>
where
    F: FnOnce() -> Result<Vec<u8>>,
{
    panic::catch_unwind(AssertUnwindSafe(call)).unwrap_or_else(|payload| {
        Err(OtError::internal(format!(
            "executor panicked: {}",
            panic_message(payload.as_ref())
        )))
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}
