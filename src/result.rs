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

//! # Result Normalizer Module
//!
//! The uniform envelope returned for every dispatch. Success and failure are
//! told apart by the presence of `error`, never by an empty `value`: a
//! successful run can legitimately produce empty output.

use serde::{Deserialize, Serialize};

use crate::observe::OtLogEntry;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtExecutionResult {
    pub value: String,
    pub logs: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OtExecutionResult {
    pub fn success(value: impl Into<String>, logs: impl Into<String>) -> Self {
        OtExecutionResult {
            value: value.into(),
            logs: logs.into(),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>, logs: impl Into<String>) -> Self {
        OtExecutionResult {
            value: String::new(),
            logs: logs.into(),
            error: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert("value".into(), self.value.clone().into());
        map.insert("logs".into(), self.logs.clone().into());
        if let Some(error) = &self.error {
            map.insert("error".into(), error.clone().into());
        }
        serde_json::Value::Object(map)
    }
}

/// Concatenates the console encoding of each entry in drain order.
pub fn render_logs(entries: &[OtLogEntry]) -> String {
    entries.iter().map(OtLogEntry::console_encoded).collect()
}
