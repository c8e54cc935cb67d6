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

pub mod custom_events;
pub mod emulator;
pub mod retry_policy;
pub mod startup;

use google_cloud_pubsub::client::{SubscriptionAdmin, TopicAdmin};
use pubsub_provision_test_utils::resource_names::{random_subscription_id, random_topic_id};
use pubsub_provision_test_utils::runtime_config::emulator_endpoint;

/// Runs all the provisioning samples.
///
/// The names of any topics and subscriptions created by the samples are
/// appended to `topics` and `subscriptions`, even on failure. The caller is
/// responsible for deleting them.
pub async fn run_provision_samples(
    project_id: &str,
    topics: &mut Vec<String>,
    subscriptions: &mut Vec<String>,
) -> anyhow::Result<()> {
    let topic_id = random_topic_id();
    let subscription_id = random_subscription_id();
    topics.push(format!("projects/{project_id}/topics/{topic_id}"));
    subscriptions.push(format!(
        "projects/{project_id}/subscriptions/{subscription_id}"
    ));

    tracing::info!("running startup sample");
    startup::sample(project_id, &topic_id, &subscription_id).await?;
    // Running the same sample again must be a no-op.
    startup::sample(project_id, &topic_id, &subscription_id).await?;

    tracing::info!("running retry_policy sample");
    retry_policy::sample(project_id, &topic_id).await?;

    tracing::info!("running custom_events sample");
    let topic_id = random_topic_id();
    topics.push(format!("projects/{project_id}/topics/{topic_id}"));
    custom_events::sample(project_id, &topic_id).await?;

    tracing::info!("running emulator sample");
    emulator::sample(emulator_endpoint().as_deref(), project_id, &topic_id).await?;

    Ok(())
}

pub async fn cleanup_test_topic(client: &TopicAdmin, topic_name: &str) -> anyhow::Result<()> {
    tracing::info!("testing delete_topic()");
    client.delete_topic().set_topic(topic_name).send().await?;
    tracing::info!("success on delete_topic");
    Ok(())
}

pub async fn cleanup_test_subscription(
    client: &SubscriptionAdmin,
    subscription_name: &str,
) -> anyhow::Result<()> {
    tracing::info!("testing delete_subscription()");
    client
        .delete_subscription()
        .set_subscription(subscription_name)
        .send()
        .await?;
    tracing::info!("success on delete_subscription");
    Ok(())
}

/// Deletes the subscriptions and then the topics, reporting all failures.
pub async fn cleanup(topics: Vec<String>, subscriptions: Vec<String>) -> anyhow::Result<()> {
    let subscription_admin = SubscriptionAdmin::builder().build().await?;
    let pending = subscriptions.iter().map(|name| {
        let client = &subscription_admin;
        async move { (name, cleanup_test_subscription(client, name).await) }
    });
    for (name, result) in futures::future::join_all(pending).await {
        if let Err(e) = result {
            tracing::warn!("error cleaning up test subscription {name}: {e:?}");
        }
    }

    let topic_admin = TopicAdmin::builder().build().await?;
    let pending = topics.iter().map(|name| {
        let client = &topic_admin;
        async move { (name, cleanup_test_topic(client, name).await) }
    });
    for (name, result) in futures::future::join_all(pending).await {
        if let Err(e) = result {
            tracing::warn!("error cleaning up test topic {name}: {e:?}");
        }
    }
    Ok(())
}
