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

//! # Executor Registry Module
//!
//! This module provides the executor registry, managing the registration and
//! lookup of statement executors.
//!
//! ## Registry Operations
//!
//! - Register executors under the unique identifier their metadata reports
//! - Resolve an executor by identifier in constant time
//! - Enumerate executors in registration order
//!
//! The registry is write-once, read-many: it is filled while it is still
//! exclusively owned and then shared behind an `Arc` by every dispatch call.
//! There is no removal or replacement.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use log::debug;

use crate::errors::{OtError, Result};
use crate::executor::{OtExecutor, OtExecutorMetadata};

/// One registration: the executor, the descriptor captured when it was
/// registered, and the guard serializing dispatches to it.
#[derive(Debug)]
pub struct OtRegisteredExecutor {
    executor: Arc<dyn OtExecutor>,
    metadata: OtExecutorMetadata,
    dispatch_guard: Mutex<()>,
}

impl OtRegisteredExecutor {
    pub fn executor(&self) -> &Arc<dyn OtExecutor> {
        &self.executor
    }

    pub fn metadata(&self) -> &OtExecutorMetadata {
        &self.metadata
    }

    /// Held across execute-then-drain so two calls never share a log buffer.
    pub(crate) fn lock_dispatch(&self) -> MutexGuard<'_, ()> {
        self.dispatch_guard
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Registry holding executors in registration order, indexed by identifier.
#[derive(Debug, Default)]
pub struct OtExecutorRegistry {
    ordered: Vec<OtRegisteredExecutor>,
    lookup: HashMap<String, usize>,
}

impl OtExecutorRegistry {
    pub fn new() -> Self {
        OtExecutorRegistry {
            ordered: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    /// Builds a registry from `executors`, registering them in iteration order.
    pub fn with_executors<I>(executors: I) -> Result<Self>
    where
        I: IntoIterator<Item = Arc<dyn OtExecutor>>,
    {
        let mut registry = Self::new();
        for executor in executors {
            registry.register_shared(executor)?;
        }
        Ok(registry)
    }

    /// Registry populated with the built-in executors in their fixed order.
    #[cfg(feature = "builtin")]
    pub fn with_builtin() -> Result<Self> {
        Self::with_executors(crate::executors::builtin_executors())
    }

    pub fn register<E>(&mut self, executor: E) -> Result<()>
    where
        E: OtExecutor + 'static,
    {
        self.register_shared(Arc::new(executor))
    }

    /// Appends `executor` and indexes it by `metadata().id`. A duplicate or
    /// empty identifier is rejected and the registry is left unchanged.
    pub fn register_shared(&mut self, executor: Arc<dyn OtExecutor>) -> Result<()> {
        let metadata = executor.metadata();
        if metadata.id.is_empty() {
            return Err(OtError::validation("executor id must not be empty"));
        }
        if self.lookup.contains_key(&metadata.id) {
            return Err(OtError::DuplicateExecutor(metadata.id));
        }

        debug!(
            "registering executor {} ({}) version {}",
            metadata.id, metadata.name, metadata.version
        );
        self.lookup.insert(metadata.id.clone(), self.ordered.len());
        self.ordered.push(OtRegisteredExecutor {
            executor,
            metadata,
            dispatch_guard: Mutex::new(()),
        });
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Arc<dyn OtExecutor>> {
        self.entry(id).map(|entry| &entry.executor)
    }

    pub fn entry(&self, id: &str) -> Option<&OtRegisteredExecutor> {
        self.lookup.get(id).map(|&index| &self.ordered[index])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lookup.contains_key(id)
    }

    /// Executors in registration order.
    pub fn list(&self) -> impl Iterator<Item = &Arc<dyn OtExecutor>> + '_ {
        self.ordered.iter().map(|entry| &entry.executor)
    }

    /// Descriptors in registration order.
    pub fn descriptors(&self) -> Vec<OtExecutorMetadata> {
        self.ordered
            .iter()
            .map(|entry| entry.metadata.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
