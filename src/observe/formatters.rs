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

use chrono::SecondsFormat;

use crate::observe::core::OtLogEntry;

/// Tab separated `timestamp level message [fields]` line. Line breaks and
/// tabs in the message are escaped; fields are written as a JSON object and
/// omitted when empty.
pub struct OtConsoleFormatter;

impl OtConsoleFormatter {
    pub fn format(entry: &OtLogEntry) -> String {
        let mut line = format!(
            "{}\t{}\t{}",
            entry.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            entry.level.as_str(),
            escape_message(&entry.message)
        );
        if !entry.fields.is_empty() {
            line.push('\t');
            line.push_str(&serde_json::Value::Object(entry.fields.clone()).to_string());
        }
        line.push('\n');
        line
    }
}

fn escape_message(message: &str) -> String {
    let mut escaped = String::with_capacity(message.len());
    for ch in message.chars() {
        match ch {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}
