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

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::OtError;
use crate::observe::formatters::OtConsoleFormatter;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OtLogLevel {
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl OtLogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            OtLogLevel::Debug => "debug",
            OtLogLevel::Info => "info",
            OtLogLevel::Warn => "warn",
            OtLogLevel::Error => "error",
        }
    }

    /// Matching level of the `log` facade, used when entries are mirrored.
    pub fn to_facade(&self) -> log::Level {
        match self {
            OtLogLevel::Debug => log::Level::Debug,
            OtLogLevel::Info => log::Level::Info,
            OtLogLevel::Warn => log::Level::Warn,
            OtLogLevel::Error => log::Level::Error,
        }
    }
}

impl fmt::Display for OtLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OtLogLevel {
    type Err = OtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(OtLogLevel::Debug),
            "info" => Ok(OtLogLevel::Info),
            "warn" | "warning" => Ok(OtLogLevel::Warn),
            "error" => Ok(OtLogLevel::Error),
            other => Err(OtError::validation(format!("unknown log level '{other}'"))),
        }
    }
}

/// One diagnostic entry observed while an executor ran statements.
#[derive(Clone, Debug, PartialEq)]
pub struct OtLogEntry {
    pub level: OtLogLevel,
    pub message: String,
    pub fields: Map<String, Value>,
    pub timestamp: DateTime<Utc>,
}

impl OtLogEntry {
    pub fn new(level: OtLogLevel, message: impl Into<String>) -> Self {
        OtLogEntry {
            level,
            message: message.into(),
            fields: Map::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn with_fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (k, v) in fields {
            self.fields.insert(k.into(), v.into());
        }
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Single line console encoding, newline terminated.
    pub fn console_encoded(&self) -> String {
        OtConsoleFormatter::format(self)
    }
}
