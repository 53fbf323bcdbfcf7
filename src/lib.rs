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

//! # Ottlx Core Library
//!
//! Ottlx lets a host environment (a UI or an embedding process) run
//! transformation statements against one of several interchangeable
//! telemetry executors and receive one uniform, serializable result.
//!
//! ## Module Overview
//!
//! - **executor**: The executor capability trait and its descriptor
//! - **registry**: Write-once registry of executors, ordered and indexed by id
//! - **dispatch**: Resolves an executor and routes a call by signal kind
//! - **result**: The value/error/logs envelope returned to hosts
//! - **signal**: The closed set of signal kinds (logs, traces, metrics)
//! - **observe**: Diagnostic log capture drained after every call
//! - **host**: JSON string entry points for embedding environments
//! - **executors**: Built-in executors
//!
//! ## Feature Flags
//!
//! - `builtin`: Built-in executors and `OtExecutorRegistry::with_builtin`
//! - `full`: Enables all features
//!
//! ## Quick Start
//!
//! ```rust
//! use ottlx::{OtDispatcher, OtExecutorRegistry};
//!
//! let registry = OtExecutorRegistry::with_builtin().unwrap();
//! let dispatcher = OtDispatcher::new(registry);
//!
//! let result = dispatcher.execute("passthrough", "logs", "", r#"{"resourceLogs":[]}"#);
//! assert!(result.is_ok());
//!
//! let missing = dispatcher.execute("missing", "logs", "", "{}");
//! assert_eq!(missing.error.as_deref(), Some("unsupported evaluator missing"));
//! ```
//!
//! ## Error Handling
//!
//! Registry construction returns `Result<T, OtError>`. Dispatch never fails:
//! every failure is reported inside the returned `OtExecutionResult`.

pub mod errors;
pub mod dispatch;
pub mod executor;
#[cfg(feature = "builtin")]
pub mod executors;
pub mod host;
pub mod observe;
pub mod registry;
pub mod result;
pub mod signal;

pub use errors::{OtError, Result};
pub use dispatch::OtDispatcher;
pub use executor::{execute_statements, OtExecutor, OtExecutorMetadata};
#[cfg(feature = "builtin")]
pub use executors::{builtin_executors, OtPassthroughConfig, OtPassthroughExecutor};
pub use host::{execute_json, handle_request_json, list_executors_json, OtHostRequest};
pub use observe::{
    OtFacadeHandler, OtLogEntry, OtLogHandler, OtLogLevel, OtObserveConfig,
    OtObserveConfigBuilder, OtObservedLogs,
};
pub use registry::{OtExecutorRegistry, OtRegisteredExecutor};
pub use result::{render_logs, OtExecutionResult};
pub use signal::OtSignalKind;
