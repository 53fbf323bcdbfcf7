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

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use crate::observe::config::OtObserveConfig;
use crate::observe::core::{OtLogEntry, OtLogLevel};

pub trait OtLogHandler {
    fn handle(&self, entry: &OtLogEntry);
}

/// Forwards entries to the `log` facade under the `ottlx::observed` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct OtFacadeHandler;

impl OtLogHandler for OtFacadeHandler {
    fn handle(&self, entry: &OtLogEntry) {
        log::log!(
            target: "ottlx::observed",
            entry.level.to_facade(),
            "{}",
            entry.message
        );
    }
}

#[derive(Debug, Default)]
struct ObservedInner {
    entries: VecDeque<OtLogEntry>,
    dropped: u64,
}

/// Buffering handler that keeps observed entries until they are taken.
#[derive(Debug, Default)]
pub struct OtObservedLogs {
    config: OtObserveConfig,
    mirror: Option<OtFacadeHandler>,
    inner: Mutex<ObservedInner>,
}

impl OtObservedLogs {
    pub fn new() -> Self {
        Self::with_config(OtObserveConfig::default())
    }

    pub fn with_config(config: OtObserveConfig) -> Self {
        OtObservedLogs {
            mirror: config.mirror_to_log.then_some(OtFacadeHandler),
            config,
            inner: Mutex::new(ObservedInner::default()),
        }
    }

    pub fn config(&self) -> &OtObserveConfig {
        &self.config
    }

    // A panic while holding the lock leaves the buffer intact, so keep using it.
    fn lock(&self) -> MutexGuard<'_, ObservedInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn record(&self, entry: OtLogEntry) {
        if !self.config.should_keep(entry.level) {
            return;
        }
        if let Some(mirror) = &self.mirror {
            mirror.handle(&entry);
        }

        let mut inner = self.lock();
        if let Some(max) = self.config.max_entries {
            if max == 0 {
                inner.dropped += 1;
                return;
            }
            while inner.entries.len() >= max {
                inner.entries.pop_front();
                inner.dropped += 1;
            }
        }
        inner.entries.push_back(entry);
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.record(OtLogEntry::new(OtLogLevel::Debug, message));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.record(OtLogEntry::new(OtLogLevel::Info, message));
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.record(OtLogEntry::new(OtLogLevel::Warn, message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.record(OtLogEntry::new(OtLogLevel::Error, message));
    }

    /// Removes and returns every buffered entry in the order recorded.
    pub fn take_all(&self) -> Vec<OtLogEntry> {
        let mut inner = self.lock();
        inner.entries.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries discarded by the capacity limit since creation.
    pub fn dropped(&self) -> u64 {
        self.lock().dropped
    }
}
