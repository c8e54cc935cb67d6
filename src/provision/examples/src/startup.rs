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

// [START pubsub_provision_startup]
use google_cloud_pubsub_provision::{
    AdminHandle, PubsubAdmin, SubscriptionDescriptor, ensure_subscription, ensure_topic,
};

pub async fn sample(project_id: &str, topic_id: &str, subscription_id: &str) -> anyhow::Result<()> {
    let client = PubsubAdmin::builder()
        .with_project(project_id)
        .build()
        .await?;
    let client = AdminHandle::Configured(client);

    ensure_topic(&client, topic_id).await?;
    let descriptor =
        SubscriptionDescriptor::new(subscription_id, topic_id).set_ack_deadline_seconds(30);
    ensure_subscription(&client, &descriptor).await?;

    println!("topic {topic_id} and subscription {subscription_id} are ready");
    Ok(())
}
// [END pubsub_provision_startup]
