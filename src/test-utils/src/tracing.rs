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

/// The most verbose level captured by [enable_tracing].
///
/// The provisioning events are `INFO`, they are only shown with the
/// `log-integration-tests` feature.
pub fn max_level() -> tracing::Level {
    if cfg!(feature = "log-integration-tests") {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    }
}

/// Enables tracing for the current thread, until the guard is dropped.
pub fn enable_tracing() -> ::tracing::subscriber::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_thread_ids(true)
        .with_target(true)
        .with_max_level(max_level())
        .finish();

    tracing::subscriber::set_default(subscriber)
}
