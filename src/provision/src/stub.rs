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

//! Traits to mock the Pub/Sub admin API.
//!
//! The [Provisioner][crate::Provisioner] only talks to the service through
//! the [Admin] trait. [PubsubAdmin][crate::client::PubsubAdmin] is the
//! production implementation. Applications may provide their own
//! implementation in tests, or to route the requests through a different
//! client.

use crate::error::RemoteError;
use crate::model::SubscriptionDescriptor;

/// The admin operations needed to provision Pub/Sub resources.
///
/// Implementations must classify failures: a create request rejected because
/// the resource exists returns [RemoteError::already_exists], every other
/// failure returns [RemoteError::other].
#[async_trait::async_trait]
pub trait Admin: std::fmt::Debug + Send + Sync {
    /// Creates a topic, returns the name assigned by the service.
    async fn create_topic(&self, topic_id: String) -> Result<String, RemoteError>;

    /// Creates a subscription, returns the name assigned by the service.
    async fn create_subscription(
        &self,
        descriptor: SubscriptionDescriptor,
    ) -> Result<String, RemoteError>;
}

#[async_trait::async_trait]
impl<T: Admin + ?Sized> Admin for std::sync::Arc<T> {
    async fn create_topic(&self, topic_id: String) -> Result<String, RemoteError> {
        T::create_topic(self, topic_id).await
    }

    async fn create_subscription(
        &self,
        descriptor: SubscriptionDescriptor,
    ) -> Result<String, RemoteError> {
        T::create_subscription(self, descriptor).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    mockall::mock! {
        #[derive(Debug)]
        pub(crate) Admin {}
        #[async_trait::async_trait]
        impl Admin for Admin {
            async fn create_topic(&self, topic_id: String) -> Result<String, RemoteError>;
            async fn create_subscription(
                &self,
                descriptor: SubscriptionDescriptor,
            ) -> Result<String, RemoteError>;
        }
    }

    #[tokio::test]
    async fn shared() -> anyhow::Result<()> {
        let mut mock = MockAdmin::new();
        mock.expect_create_topic()
            .withf(|t| t == "orders")
            .return_once(|t| Ok(format!("projects/p/topics/{t}")));
        mock.expect_create_subscription()
            .return_once(|_| Err(RemoteError::already_exists("duplicate")));

        let shared = std::sync::Arc::new(mock);
        let got = shared.create_topic("orders".to_string()).await?;
        assert_eq!(got, "projects/p/topics/orders");
        let got = shared
            .create_subscription(SubscriptionDescriptor::new("s", "orders"))
            .await;
        assert!(
            got.as_ref().is_err_and(RemoteError::is_already_exists),
            "{got:?}"
        );
        Ok(())
    }
}
