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

use crate::client_builder::ClientBuilder;
use crate::error::{ClientInitError, RemoteError};
use crate::model::SubscriptionDescriptor;
use crate::stub::Admin;
use gax::error::rpc::Code;
use gax::options::RequestOptionsBuilder;
use pubsub::client::{SubscriptionAdmin, TopicAdmin};

/// Implements [Admin] using the Pub/Sub admin clients.
///
/// Create requests are sent as idempotent: if a retried request was already
/// applied by the service, the retry fails with `ALREADY_EXISTS`, which the
/// [Provisioner][crate::Provisioner] treats as success.
///
/// # Example
/// ```no_run
/// # use google_cloud_pubsub_provision::*;
/// # async fn sample() -> anyhow::Result<()> {
/// let client = PubsubAdmin::builder().with_project("my-project").build().await?;
/// ensure_topic(&AdminHandle::Configured(client), "orders").await?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct PubsubAdmin {
    topics: TopicAdmin,
    subscriptions: SubscriptionAdmin,
    project: Option<String>,
}

impl PubsubAdmin {
    /// Returns a builder for [PubsubAdmin].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_pubsub_provision::PubsubAdmin;
    /// let client = PubsubAdmin::builder().build().await?;
    /// # Ok::<(), google_cloud_pubsub_provision::ClientInitError>(()) });
    /// ```
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Wraps existing Pub/Sub admin clients.
    ///
    /// Applications that already configured the clients, or tests using
    /// `from_stub()`, can use this function.
    pub fn from_clients(topics: TopicAdmin, subscriptions: SubscriptionAdmin) -> Self {
        Self {
            topics,
            subscriptions,
            project: None,
        }
    }

    /// Sets the project used to qualify bare topic and subscription ids.
    pub fn with_project<V: Into<String>>(mut self, v: V) -> Self {
        self.project = Some(v.into());
        self
    }

    pub(crate) async fn new(builder: ClientBuilder) -> Result<Self, ClientInitError> {
        let cred = builder.credentials()?;
        let retry_policy = builder
            .retry_policy
            .clone()
            .unwrap_or_else(ClientBuilder::default_retry_policy);

        let mut topics = TopicAdmin::builder()
            .with_credentials(cred.clone())
            .with_retry_policy(retry_policy.clone());
        let mut subscriptions = SubscriptionAdmin::builder()
            .with_credentials(cred)
            .with_retry_policy(retry_policy);
        if let Some(endpoint) = &builder.endpoint {
            topics = topics.with_endpoint(endpoint.clone());
            subscriptions = subscriptions.with_endpoint(endpoint.clone());
        }
        if builder.tracing {
            topics = topics.with_tracing();
            subscriptions = subscriptions.with_tracing();
        }
        if let Some(backoff) = &builder.backoff_policy {
            topics = topics.with_backoff_policy(backoff.clone());
            subscriptions = subscriptions.with_backoff_policy(backoff.clone());
        }
        if let Some(throttler) = &builder.retry_throttler {
            topics = topics.with_retry_throttler(throttler.clone());
            subscriptions = subscriptions.with_retry_throttler(throttler.clone());
        }

        Ok(Self {
            topics: topics.build().await?,
            subscriptions: subscriptions.build().await?,
            project: builder.project,
        })
    }

    /// Returns the full resource name for a topic id.
    pub fn topic_name(&self, topic_id: &str) -> String {
        self.qualify("topics", topic_id)
    }

    /// Returns the full resource name for a subscription id.
    pub fn subscription_name(&self, subscription_id: &str) -> String {
        self.qualify("subscriptions", subscription_id)
    }

    fn qualify(&self, collection: &str, id: &str) -> String {
        match &self.project {
            Some(project) if !id.starts_with("projects/") => {
                format!("projects/{project}/{collection}/{id}")
            }
            _ => id.to_string(),
        }
    }
}

/// Classifies an error returned by the Pub/Sub admin clients.
///
/// Only an `ALREADY_EXISTS` status is ignorable, errors without a status are
/// not.
pub(crate) fn classify(error: gax::error::Error) -> RemoteError {
    match error.status() {
        Some(status) if status.code == Code::AlreadyExists => RemoteError::already_exists(error),
        _ => RemoteError::other(error),
    }
}

#[async_trait::async_trait]
impl Admin for PubsubAdmin {
    async fn create_topic(&self, topic_id: String) -> Result<String, RemoteError> {
        let topic = self
            .topics
            .create_topic()
            .set_name(self.topic_name(&topic_id))
            .with_idempotency(true)
            .send()
            .await
            .map_err(classify)?;
        Ok(topic.name)
    }

    async fn create_subscription(
        &self,
        descriptor: SubscriptionDescriptor,
    ) -> Result<String, RemoteError> {
        let mut request = self
            .subscriptions
            .create_subscription()
            .set_name(self.subscription_name(&descriptor.subscription_id))
            .set_topic(self.topic_name(&descriptor.topic_id))
            .with_idempotency(true);
        if let Some(deadline) = descriptor.ack_deadline_seconds {
            request = request.set_ack_deadline_seconds(deadline);
        }
        let subscription = request.send().await.map_err(classify)?;
        Ok(subscription.name)
    }
}
