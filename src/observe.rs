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

//! # Observe Module
//!
//! Diagnostic log capture for executors. Each executor owns an
//! [`OtObservedLogs`] buffer, writes entries into it while running statements,
//! and the dispatcher drains the buffer once the call completes. Draining is
//! destructive: an entry is reported to exactly one caller.
//!
//! ## Layout
//!
//! - **core**: Log levels and entries
//! - **formatters**: Single line console encoding of an entry
//! - **handlers**: The handler trait, the `log` facade mirror and the buffering handler
//! - **config**: Capture threshold, capacity and mirroring configuration

pub mod config;
pub mod core;
pub mod formatters;
pub mod handlers;

pub use self::config::{OtObserveConfig, OtObserveConfigBuilder};
pub use self::core::{OtLogEntry, OtLogLevel};
pub use self::formatters::OtConsoleFormatter;
pub use self::handlers::{OtFacadeHandler, OtLogHandler, OtObservedLogs};
