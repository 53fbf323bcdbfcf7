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

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Result;
use crate::observe::core::OtLogLevel;

/// Configuration for an [`OtObservedLogs`](crate::observe::OtObservedLogs)
/// buffer: the lowest level kept, an optional cap on buffered entries and
/// whether kept entries are also forwarded to the `log` facade.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtObserveConfig {
    pub min_level: OtLogLevel,
    /// Oldest entries are discarded once this many are buffered.
    pub max_entries: Option<usize>,
    pub mirror_to_log: bool,
}

impl Default for OtObserveConfig {
    fn default() -> Self {
        OtObserveConfig {
            min_level: OtLogLevel::Debug,
            max_entries: Some(10_000),
            mirror_to_log: false,
        }
    }
}

impl OtObserveConfig {
    pub fn should_keep(&self, level: OtLogLevel) -> bool {
        level >= self.min_level
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OtObserveConfigBuilder {
    pub min_level: Option<OtLogLevel>,
    pub max_entries: Option<usize>,
    pub mirror_to_log: Option<bool>,
}

impl OtObserveConfigBuilder {
    pub fn min_level(mut self, level: OtLogLevel) -> Self {
        self.min_level = Some(level);
        self
    }

    pub fn max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = Some(max_entries);
        self
    }

    pub fn mirror_to_log(mut self, mirror: bool) -> Self {
        self.mirror_to_log = Some(mirror);
        self
    }

    pub fn build(self) -> OtObserveConfig {
        let base = OtObserveConfig::default();
        OtObserveConfig {
            min_level: self.min_level.unwrap_or(base.min_level),
            max_entries: self.max_entries.or(base.max_entries),
            mirror_to_log: self.mirror_to_log.unwrap_or(base.mirror_to_log),
        }
    }

    pub fn from_json(value: &Value) -> Result<OtObserveConfig> {
        let builder: OtObserveConfigBuilder = serde_json::from_value(value.clone())?;
        Ok(builder.build())
    }
}
