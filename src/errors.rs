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

//! # Ottlx Error Module
//!
//! This module defines the error types used throughout Ottlx for consistent
//! error handling and reporting.
//!
//! ## Error Categories
//!
//! - **Validation**: Invalid arguments supplied by a caller
//! - **Config**: Executor configuration that cannot be parsed or is rejected
//! - **Payload**: Telemetry payloads that are malformed for the signal kind
//! - **Executor**: Failures raised by an executor implementation
//! - **DuplicateExecutor**: Registration with an identifier already in use
//! - **UnsupportedExecutor**: Lookup of an identifier that was never registered
//! - **UnsupportedSignal**: A signal kind outside logs, traces and metrics
//! - **Serde**: Serialization/deserialization errors
//! - **Internal**: Unexpected internal failures
//!
//! Dispatch never surfaces these as `Err` to a host. The dispatcher folds
//! every failure into an [`OtExecutionResult`](crate::result::OtExecutionResult)
//! so the caller always receives a well-formed envelope.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Ottlx.
pub type Result<T> = std::result::Result<T, OtError>;

/// Canonical error enumeration for Ottlx.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum OtError {
    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Executor configuration could not be parsed or was rejected.
    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// Payload is not a valid document for the requested signal kind.
    #[error("invalid payload: {message}")]
    Payload { message: String },

    /// Any failure raised by an executor implementation.
    #[error("executor '{executor}' failed: {message}")]
    Executor { executor: String, message: String },

    /// An executor with the same identifier is already registered.
    #[error("executor '{0}' is already registered")]
    DuplicateExecutor(String),

    /// No executor is registered under the identifier.
    #[error("unsupported evaluator {0}")]
    UnsupportedExecutor(String),

    /// The signal kind is not one of logs, traces or metrics.
    #[error("unsupported OTLP data type {0}")]
    UnsupportedSignal(String),

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for OtError {
    fn from(err: serde_json::Error) -> Self {
        OtError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for OtError {
    fn from(err: serde_yaml::Error) -> Self {
        OtError::Config {
            message: err.to_string(),
        }
    }
}

impl OtError {
    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        OtError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct configuration errors.
    pub fn config<T: Into<String>>(message: T) -> Self {
        OtError::Config {
            message: message.into(),
        }
    }

    /// Helper to construct payload errors.
    pub fn payload<T: Into<String>>(message: T) -> Self {
        OtError::Payload {
            message: message.into(),
        }
    }

    /// Helper to construct executor errors.
    pub fn executor(name: impl Into<String>, message: impl Into<String>) -> Self {
        OtError::Executor {
            executor: name.into(),
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        OtError::Internal(message.into())
    }
}
