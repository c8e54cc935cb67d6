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

//! Google Cloud Client Libraries for Rust - Pub/Sub Resource Provisioning
//!
//! This crate creates [Pub/Sub] topics and subscriptions if they do not exist.
//! It is meant to run on application startup: calling the functions many
//! times, possibly from many processes at once, has the same effect as calling
//! them once.
//!
//! # Example
//! ```no_run
//! # use google_cloud_pubsub_provision::*;
//! # async fn sample() -> anyhow::Result<()> {
//! let client = AdminHandle::Configured(create_client().await?);
//! ensure_topic(&client, "projects/my-project/topics/orders").await?;
//! ensure_subscription(
//!     &client,
//!     &model::SubscriptionDescriptor::new(
//!         "projects/my-project/subscriptions/orders-sub",
//!         "projects/my-project/topics/orders",
//!     )
//!     .set_ack_deadline_seconds(30),
//! )
//! .await?;
//! # Ok(()) }
//! ```
//!
//! [pub/sub]: https://cloud.google.com/pubsub

pub mod client;
pub mod client_builder;
pub mod error;
pub mod events;
mod handle;
pub mod model;
mod provisioner;
pub mod stub;

pub use client::PubsubAdmin;
pub use error::{ClientInitError, ProvisionError};
pub use handle::AdminHandle;
pub use model::SubscriptionDescriptor;
pub use provisioner::Provisioner;

/// Creates an admin client with the default configuration.
///
/// The client uses the [Application Default Credentials], scoped to the
/// Pub/Sub API, and retries transient errors. Use [PubsubAdmin::builder] to
/// change the configuration.
///
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication/application-default-credentials
pub async fn create_client() -> Result<PubsubAdmin, ClientInitError> {
    PubsubAdmin::builder().build().await
}

/// Creates the topic, unless it already exists.
///
/// Logs the outcome with [tracing]. See [Provisioner::ensure_topic].
///
/// [tracing]: https://docs.rs/tracing/latest/tracing/
pub async fn ensure_topic<A: stub::Admin>(
    client: &AdminHandle<A>,
    topic_id: &str,
) -> Result<(), ProvisionError> {
    Provisioner::new().ensure_topic(client, topic_id).await
}

/// Creates the subscription, unless it already exists.
///
/// Logs the outcome with [tracing]. See [Provisioner::ensure_subscription].
///
/// [tracing]: https://docs.rs/tracing/latest/tracing/
pub async fn ensure_subscription<A: stub::Admin>(
    client: &AdminHandle<A>,
    descriptor: &SubscriptionDescriptor,
) -> Result<(), ProvisionError> {
    Provisioner::new()
        .ensure_subscription(client, descriptor)
        .await
}
