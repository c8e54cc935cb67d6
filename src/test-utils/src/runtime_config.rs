// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Result;

const PROJECT_VAR: &str = "GOOGLE_CLOUD_PROJECT";
const EMULATOR_VAR: &str = "PUBSUB_EMULATOR_HOST";

/// Returns the project id used for the integration tests.
pub fn project_id() -> Result<String> {
    std::env::var(PROJECT_VAR).map_err(anyhow::Error::from)
}

/// Returns the endpoint of the Pub/Sub emulator, if one is configured.
///
/// The emulator convention is a bare `host:port`, the result is a URL.
pub fn emulator_endpoint() -> Option<String> {
    std::env::var(EMULATOR_VAR)
        .ok()
        .filter(|v| !v.is_empty())
        .map(|host| format!("http://{host}"))
}
