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

// [START pubsub_provision_retry_policy]
use google_cloud_gax::exponential_backoff::ExponentialBackoffBuilder;
use google_cloud_gax::retry_policy::{Aip194Strict, RetryPolicyExt};
use google_cloud_pubsub_provision::{AdminHandle, PubsubAdmin, ensure_topic};
use std::time::Duration;

pub async fn sample(project_id: &str, topic_id: &str) -> anyhow::Result<()> {
    let backoff = ExponentialBackoffBuilder::new()
        .with_initial_delay(Duration::from_millis(100))
        .with_maximum_delay(Duration::from_secs(5))
        .build()?;
    let client = PubsubAdmin::builder()
        .with_project(project_id)
        .with_retry_policy(
            Aip194Strict
                .with_attempt_limit(10)
                .with_time_limit(Duration::from_secs(30)),
        )
        .with_backoff_policy(backoff)
        .build()
        .await?;

    ensure_topic(&AdminHandle::Configured(client), topic_id).await?;
    println!("topic {topic_id} is ready");
    Ok(())
}
// [END pubsub_provision_retry_policy]
