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

//! # Signal Kind Module
//!
//! The closed set of telemetry signal kinds a statement set can target. The
//! textual forms (`logs`, `traces`, `metrics`) are what hosts send across the
//! boundary; anything else is rejected before an executor is touched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::OtError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtSignalKind {
    Logs,
    Traces,
    Metrics,
}

impl OtSignalKind {
    pub const ALL: [OtSignalKind; 3] = [
        OtSignalKind::Logs,
        OtSignalKind::Traces,
        OtSignalKind::Metrics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OtSignalKind::Logs => "logs",
            OtSignalKind::Traces => "traces",
            OtSignalKind::Metrics => "metrics",
        }
    }

    /// Top-level OTLP/JSON key holding the resource array for this kind.
    pub fn resource_key(&self) -> &'static str {
        match self {
            OtSignalKind::Logs => "resourceLogs",
            OtSignalKind::Traces => "resourceSpans",
            OtSignalKind::Metrics => "resourceMetrics",
        }
    }
}

impl fmt::Display for OtSignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OtSignalKind {
    type Err = OtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "logs" => Ok(OtSignalKind::Logs),
            "traces" => Ok(OtSignalKind::Traces),
            "metrics" => Ok(OtSignalKind::Metrics),
            other => Err(OtError::UnsupportedSignal(other.to_string())),
        }
    }
}
