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

// [START pubsub_provision_custom_events]
use google_cloud_pubsub_provision::events::{EventSink, ProvisionEvent};
use google_cloud_pubsub_provision::{AdminHandle, PubsubAdmin, Provisioner};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts the resources created by this process.
#[derive(Debug, Default)]
struct CreatedCounter(AtomicUsize);

impl EventSink for CreatedCounter {
    fn record(&self, event: ProvisionEvent) {
        if matches!(
            event,
            ProvisionEvent::TopicCreated { .. } | ProvisionEvent::SubscriptionCreated { .. }
        ) {
            self.0.fetch_add(1, Ordering::Relaxed);
        }
        println!("{event:?}");
    }
}

pub async fn sample(project_id: &str, topic_id: &str) -> anyhow::Result<()> {
    let client = PubsubAdmin::builder()
        .with_project(project_id)
        .build()
        .await?;
    let client = AdminHandle::Configured(client);

    let counter = Arc::new(CreatedCounter::default());
    let provisioner = Provisioner::new().with_event_sink(counter.clone());
    provisioner.ensure_topic(&client, topic_id).await?;
    provisioner.ensure_topic(&client, topic_id).await?;

    println!(
        "created {} resources",
        counter.0.load(Ordering::Relaxed)
    );
    Ok(())
}
// [END pubsub_provision_custom_events]
