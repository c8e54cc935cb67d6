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

// [START pubsub_provision_emulator]
use google_cloud_auth::credentials::anonymous::Builder as Anonymous;
use google_cloud_pubsub_provision::{AdminHandle, PubsubAdmin, ensure_topic};

pub async fn sample(endpoint: Option<&str>, project_id: &str, topic_id: &str) -> anyhow::Result<()> {
    // Without an emulator there is nothing to provision.
    let client: AdminHandle = match endpoint {
        None => AdminHandle::Disabled,
        Some(endpoint) => PubsubAdmin::builder()
            .with_endpoint(endpoint)
            .with_credentials(Anonymous::new().build())
            .with_project(project_id)
            .build()
            .await?
            .into(),
    };

    ensure_topic(&client, topic_id).await?;
    Ok(())
}
// [END pubsub_provision_emulator]
