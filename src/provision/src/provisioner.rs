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

use crate::error::{ProvisionError, RemoteErrorKind};
use crate::events::{EventSink, ProvisionEvent, TracingSink};
use crate::handle::AdminHandle;
use crate::model::{SubscriptionDescriptor, validate_topic_id};
use crate::stub::Admin;
use std::sync::Arc;

/// Creates topics and subscriptions if they do not exist.
///
/// Provisioning typically runs on every process start, possibly from many
/// processes at once. Instead of checking whether the resource exists, the
/// provisioner always issues the create request and treats an "already
/// exists" response as success. The service resolves any races.
///
/// # Example
/// ```no_run
/// # use google_cloud_pubsub_provision::*;
/// # async fn sample() -> anyhow::Result<()> {
/// let client = AdminHandle::Configured(
///     PubsubAdmin::builder().with_project("my-project").build().await?,
/// );
/// let provisioner = Provisioner::new();
/// provisioner.ensure_topic(&client, "orders").await?;
/// provisioner
///     .ensure_subscription(
///         &client,
///         &SubscriptionDescriptor::new("orders-sub", "orders").set_ack_deadline_seconds(30),
///     )
///     .await?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct Provisioner {
    events: Arc<dyn EventSink>,
}

impl Default for Provisioner {
    fn default() -> Self {
        Self::new()
    }
}

impl Provisioner {
    /// Creates a provisioner reporting to a [TracingSink].
    pub fn new() -> Self {
        Self {
            events: Arc::new(TracingSink),
        }
    }

    /// Reports the provisioning outcomes to `sink`.
    pub fn with_event_sink<S: EventSink + 'static>(mut self, sink: S) -> Self {
        self.events = Arc::new(sink);
        self
    }

    /// Creates the topic, unless it already exists.
    ///
    /// Returns an error if `topic_id` is empty, or if the service rejects the
    /// request for any reason other than the topic already existing.
    pub async fn ensure_topic<A>(
        &self,
        client: &AdminHandle<A>,
        topic_id: &str,
    ) -> Result<(), ProvisionError>
    where
        A: Admin,
    {
        validate_topic_id(topic_id)?;
        let admin = match client {
            AdminHandle::Configured(a) => a,
            AdminHandle::Disabled => {
                self.events.record(ProvisionEvent::TopicSkipped {
                    topic: topic_id.to_string(),
                });
                return Ok(());
            }
        };
        match admin.create_topic(topic_id.to_string()).await {
            Ok(name) => {
                self.events.record(ProvisionEvent::TopicCreated { name });
                Ok(())
            }
            Err(e) => match e.kind() {
                RemoteErrorKind::AlreadyExists => {
                    self.events.record(ProvisionEvent::TopicAlreadyExists {
                        topic: topic_id.to_string(),
                    });
                    Ok(())
                }
                RemoteErrorKind::Other => Err(ProvisionError::Topic {
                    topic: topic_id.to_string(),
                    source: e,
                }),
            },
        }
    }

    /// Creates the subscription, unless it already exists.
    ///
    /// The acknowledgement deadline is only sent if `descriptor` sets one.
    /// Returns an error if the descriptor is invalid, or if the service
    /// rejects the request for any reason other than the subscription already
    /// existing.
    pub async fn ensure_subscription<A>(
        &self,
        client: &AdminHandle<A>,
        descriptor: &SubscriptionDescriptor,
    ) -> Result<(), ProvisionError>
    where
        A: Admin,
    {
        descriptor.validate()?;
        let admin = match client {
            AdminHandle::Configured(a) => a,
            AdminHandle::Disabled => {
                self.events.record(ProvisionEvent::SubscriptionSkipped {
                    subscription: descriptor.subscription_id.clone(),
                    topic: descriptor.topic_id.clone(),
                });
                return Ok(());
            }
        };
        match admin.create_subscription(descriptor.clone()).await {
            Ok(name) => {
                self.events
                    .record(ProvisionEvent::SubscriptionCreated { name });
                Ok(())
            }
            Err(e) => match e.kind() {
                RemoteErrorKind::AlreadyExists => {
                    self.events
                        .record(ProvisionEvent::SubscriptionAlreadyExists {
                            subscription: descriptor.subscription_id.clone(),
                        });
                    Ok(())
                }
                RemoteErrorKind::Other => Err(ProvisionError::Subscription {
                    subscription: descriptor.subscription_id.clone(),
                    topic: descriptor.topic_id.clone(),
                    source: e,
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RemoteError;
    use crate::events::tests::RecordingSink;
    use crate::stub::tests::MockAdmin;
    use test_case::test_case;

    fn provisioner() -> (Provisioner, RecordingSink) {
        let sink = RecordingSink::default();
        (Provisioner::new().with_event_sink(sink.clone()), sink)
    }

    #[tokio::test]
    async fn topic_created() -> anyhow::Result<()> {
        let mut mock = MockAdmin::new();
        mock.expect_create_topic()
            .withf(|t| t == "orders")
            .times(1)
            .returning(|t| Ok(format!("projects/p/topics/{t}")));

        let (provisioner, sink) = provisioner();
        provisioner
            .ensure_topic(&AdminHandle::Configured(mock), "orders")
            .await?;
        assert_eq!(
            sink.events(),
            vec![ProvisionEvent::TopicCreated {
                name: "projects/p/topics/orders".to_string()
            }]
        );
        Ok(())
    }

    #[tokio::test]
    async fn topic_already_exists() -> anyhow::Result<()> {
        let mut mock = MockAdmin::new();
        mock.expect_create_topic()
            .times(1)
            .returning(|_| Err(RemoteError::already_exists("topic exists")));

        let (provisioner, sink) = provisioner();
        provisioner
            .ensure_topic(&AdminHandle::Configured(mock), "orders")
            .await?;
        assert_eq!(
            sink.events(),
            vec![ProvisionEvent::TopicAlreadyExists {
                topic: "orders".to_string()
            }]
        );
        Ok(())
    }

    #[tokio::test]
    async fn topic_twice() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockAdmin::new();
        mock.expect_create_topic()
            .once()
            .in_sequence(&mut seq)
            .returning(|t| Ok(t));
        mock.expect_create_topic()
            .once()
            .in_sequence(&mut seq)
            .returning(|_| Err(RemoteError::already_exists("topic exists")));

        let (provisioner, sink) = provisioner();
        let client = AdminHandle::Configured(mock);
        provisioner.ensure_topic(&client, "orders").await?;
        provisioner.ensure_topic(&client, "orders").await?;
        assert_eq!(
            sink.events(),
            vec![
                ProvisionEvent::TopicCreated {
                    name: "orders".to_string()
                },
                ProvisionEvent::TopicAlreadyExists {
                    topic: "orders".to_string()
                },
            ]
        );
        Ok(())
    }

    #[test_case("permission denied")]
    #[test_case("status-less transport error")]
    #[tokio::test]
    async fn topic_error(msg: &'static str) {
        let mut mock = MockAdmin::new();
        mock.expect_create_topic()
            .times(1)
            .returning(move |_| Err(RemoteError::other(msg)));

        let (provisioner, sink) = provisioner();
        let err = provisioner
            .ensure_topic(&AdminHandle::Configured(mock), "orders")
            .await
            .expect_err("non-ignorable errors are propagated");
        assert!(
            matches!(&err, ProvisionError::Topic { topic, source } if topic == "orders" && !source.is_already_exists()),
            "{err:?}"
        );
        assert!(err.to_string().contains(msg), "{err}");
        assert!(sink.events().is_empty(), "{:?}", sink.events());
    }

    #[tokio::test]
    async fn topic_disabled() -> anyhow::Result<()> {
        let (provisioner, sink) = provisioner();
        provisioner
            .ensure_topic(&AdminHandle::<MockAdmin>::Disabled, "orders")
            .await?;
        assert_eq!(
            sink.events(),
            vec![ProvisionEvent::TopicSkipped {
                topic: "orders".to_string()
            }]
        );
        Ok(())
    }

    #[tokio::test]
    async fn topic_empty_id() {
        let mut mock = MockAdmin::new();
        mock.expect_create_topic().never();

        let (provisioner, sink) = provisioner();
        let err = provisioner
            .ensure_topic(&AdminHandle::Configured(mock), "")
            .await
            .expect_err("empty ids are rejected");
        assert!(err.is_invalid_argument(), "{err:?}");
        assert!(sink.events().is_empty(), "{:?}", sink.events());
    }

    #[tokio::test]
    async fn subscription_created() -> anyhow::Result<()> {
        let mut mock = MockAdmin::new();
        mock.expect_create_subscription()
            .withf(|d| {
                d.subscription_id == "orders-sub"
                    && d.topic_id == "orders"
                    && d.ack_deadline_seconds == Some(10)
            })
            .times(1)
            .returning(|d| Ok(format!("projects/p/subscriptions/{}", d.subscription_id)));

        let (provisioner, sink) = provisioner();
        let descriptor = SubscriptionDescriptor::new("orders-sub", "orders").set_ack_deadline_seconds(10);
        provisioner
            .ensure_subscription(&AdminHandle::Configured(mock), &descriptor)
            .await?;
        assert_eq!(
            sink.events(),
            vec![ProvisionEvent::SubscriptionCreated {
                name: "projects/p/subscriptions/orders-sub".to_string()
            }]
        );
        Ok(())
    }

    #[tokio::test]
    async fn subscription_default_deadline() -> anyhow::Result<()> {
        let mut mock = MockAdmin::new();
        mock.expect_create_subscription()
            .withf(|d| d.ack_deadline_seconds.is_none())
            .times(1)
            .returning(|d| Ok(d.subscription_id));

        let (provisioner, _) = provisioner();
        provisioner
            .ensure_subscription(
                &AdminHandle::Configured(mock),
                &SubscriptionDescriptor::new("orders-sub", "orders"),
            )
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn subscription_already_exists() -> anyhow::Result<()> {
        let mut mock = MockAdmin::new();
        mock.expect_create_subscription()
            .times(1)
            .returning(|_| Err(RemoteError::already_exists("subscription exists")));

        let (provisioner, sink) = provisioner();
        provisioner
            .ensure_subscription(
                &AdminHandle::Configured(mock),
                &SubscriptionDescriptor::new("orders-sub", "orders"),
            )
            .await?;
        assert_eq!(
            sink.events(),
            vec![ProvisionEvent::SubscriptionAlreadyExists {
                subscription: "orders-sub".to_string()
            }]
        );
        Ok(())
    }

    #[tokio::test]
    async fn subscription_error() {
        let mut mock = MockAdmin::new();
        mock.expect_create_subscription()
            .times(1)
            .returning(|_| Err(RemoteError::other("topic not found")));

        let (provisioner, sink) = provisioner();
        let err = provisioner
            .ensure_subscription(
                &AdminHandle::Configured(mock),
                &SubscriptionDescriptor::new("orders-sub", "orders"),
            )
            .await
            .expect_err("non-ignorable errors are propagated");
        assert!(
            matches!(&err, ProvisionError::Subscription { subscription, topic, .. } if subscription == "orders-sub" && topic == "orders"),
            "{err:?}"
        );
        assert!(sink.events().is_empty(), "{:?}", sink.events());
    }

    #[tokio::test]
    async fn subscription_disabled() -> anyhow::Result<()> {
        let (provisioner, sink) = provisioner();
        provisioner
            .ensure_subscription(
                &AdminHandle::<MockAdmin>::Disabled,
                &SubscriptionDescriptor::new("orders-sub", "orders"),
            )
            .await?;
        assert_eq!(
            sink.events(),
            vec![ProvisionEvent::SubscriptionSkipped {
                subscription: "orders-sub".to_string(),
                topic: "orders".to_string(),
            }]
        );
        Ok(())
    }

    #[test_case(SubscriptionDescriptor::new("", "orders"))]
    #[test_case(SubscriptionDescriptor::new("orders-sub", ""))]
    #[test_case(SubscriptionDescriptor::new("orders-sub", "orders").set_ack_deadline_seconds(0))]
    #[tokio::test]
    async fn subscription_invalid(descriptor: SubscriptionDescriptor) {
        let mut mock = MockAdmin::new();
        mock.expect_create_subscription().never();

        let (provisioner, _) = provisioner();
        let err = provisioner
            .ensure_subscription(&AdminHandle::Configured(mock), &descriptor)
            .await
            .expect_err("invalid descriptors are rejected");
        assert!(err.is_invalid_argument(), "{err:?}");
    }

    #[test]
    fn default_sink() {
        let provisioner = Provisioner::default();
        let fmt = format!("{provisioner:?}");
        assert!(fmt.contains("TracingSink"), "{fmt}");
    }
}
