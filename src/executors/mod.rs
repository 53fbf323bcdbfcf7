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

//! # Executors Module
//!
//! Executors shipped with Ottlx. Third-party executors implement
//! [`OtExecutor`] and are registered next to these.
//!
//! - **passthrough**: Validates the OTLP/JSON envelope and re-emits it

pub mod passthrough;

use std::sync::Arc;

use crate::executor::OtExecutor;

pub use passthrough::{OtPassthroughConfig, OtPassthroughExecutor};

/// Built-in executors in their fixed registration order.
pub fn builtin_executors() -> Vec<Arc<dyn OtExecutor>> {
    vec![Arc::new(OtPassthroughExecutor::new())]
}
