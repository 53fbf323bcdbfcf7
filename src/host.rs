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

//! # Host Boundary Module
//!
//! JSON entry points for embedding environments that exchange plain strings
//! with the library, such as a UI bridge. Every function returns a JSON
//! document; none of them panic or return `Err`, so a bridge can forward the
//! text unchanged.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::dispatch::OtDispatcher;
use crate::result::OtExecutionResult;

/// A complete execute call carried in one JSON document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtHostRequest {
    pub executor: String,
    pub data_type: String,
    #[serde(default)]
    pub config: String,
    pub payload: String,
}

/// JSON array of `{id, name, path, docsURL, version}` in registration order.
pub fn list_executors_json(dispatcher: &OtDispatcher) -> String {
    serde_json::to_string(&dispatcher.list_executors()).unwrap_or_else(|err| {
        warn!("could not encode executor descriptors: {err}");
        "[]".to_string()
    })
}

/// JSON object `{value, logs, error?}` for one dispatch.
pub fn execute_json(
    dispatcher: &OtDispatcher,
    executor_id: &str,
    signal_kind: &str,
    config: &str,
    payload: &str,
) -> String {
    dispatcher
        .execute(executor_id, signal_kind, config, payload)
        .to_json()
        .to_string()
}

/// Decodes an [`OtHostRequest`] and dispatches it. A request that does not
/// decode is answered with an error result.
pub fn handle_request_json(dispatcher: &OtDispatcher, request: &str) -> String {
    let result = match serde_json::from_str::<OtHostRequest>(request) {
        Ok(request) => dispatcher.execute(
            &request.executor,
            &request.data_type,
            &request.config,
            &request.payload,
        ),
        Err(err) => OtExecutionResult::error(format!("invalid request: {err}"), ""),
    };
    result.to_json().to_string()
}
