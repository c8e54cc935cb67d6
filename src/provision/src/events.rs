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

//! Observability for the provisioning operations.
//!
//! The [Provisioner][crate::Provisioner] reports each outcome to an
//! [EventSink]. The default sink, [TracingSink], emits [tracing] events at the
//! `INFO` level. Applications that need to inspect the outcomes, for example
//! in tests, can install their own sink.
//!
//! [tracing]: https://docs.rs/tracing/latest/tracing/

/// The outcome of a provisioning operation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProvisionEvent {
    /// The topic was created, `name` is the name returned by the service.
    TopicCreated { name: String },
    /// The topic already existed.
    TopicAlreadyExists { topic: String },
    /// The client is disabled, no request was made.
    TopicSkipped { topic: String },
    /// The subscription was created, `name` is the name returned by the service.
    SubscriptionCreated { name: String },
    /// The subscription already existed.
    SubscriptionAlreadyExists { subscription: String },
    /// The client is disabled, no request was made.
    SubscriptionSkipped { subscription: String, topic: String },
}

/// Receives the outcome of each provisioning operation.
pub trait EventSink: std::fmt::Debug + Send + Sync {
    fn record(&self, event: ProvisionEvent);
}

/// Sinks are often shared with the code that inspects the events.
impl<T: EventSink + ?Sized> EventSink for std::sync::Arc<T> {
    fn record(&self, event: ProvisionEvent) {
        T::record(self, event)
    }
}

/// An [EventSink] that forwards events to [tracing].
///
/// This sink never installs a subscriber, applications configure one as
/// usual:
///
/// ```no_run
/// tracing_subscriber::fmt::init();
/// ```
///
/// [tracing]: https://docs.rs/tracing/latest/tracing/
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: ProvisionEvent) {
        match event {
            ProvisionEvent::TopicCreated { name } => {
                tracing::info!(topic = %name, "created topic");
            }
            ProvisionEvent::TopicAlreadyExists { topic } => {
                tracing::info!(%topic, "topic already exists");
            }
            ProvisionEvent::TopicSkipped { topic } => {
                tracing::info!(
                    %topic,
                    "not creating topic since pubsub has not been configured"
                );
            }
            ProvisionEvent::SubscriptionCreated { name } => {
                tracing::info!(subscription = %name, "created subscription");
            }
            ProvisionEvent::SubscriptionAlreadyExists { subscription } => {
                tracing::info!(%subscription, "subscription already exists");
            }
            ProvisionEvent::SubscriptionSkipped {
                subscription,
                topic,
            } => {
                tracing::info!(
                    %subscription,
                    %topic,
                    "not creating subscription since pubsub has not been configured"
                );
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use test_case::test_case;

    /// Captures the events in memory.
    #[derive(Clone, Debug, Default)]
    pub(crate) struct RecordingSink(Arc<Mutex<Vec<ProvisionEvent>>>);

    impl RecordingSink {
        pub(crate) fn events(&self) -> Vec<ProvisionEvent> {
            self.0.lock().expect("never poisoned").clone()
        }
    }

    impl EventSink for RecordingSink {
        fn record(&self, event: ProvisionEvent) {
            self.0.lock().expect("never poisoned").push(event);
        }
    }

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("never poisoned").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().expect("never poisoned")).to_string()
        }
    }

    #[test_case(ProvisionEvent::TopicCreated { name: "projects/p/topics/orders".into() }, &["created topic", "projects/p/topics/orders"])]
    #[test_case(ProvisionEvent::TopicAlreadyExists { topic: "orders".into() }, &["already exists", "orders"])]
    #[test_case(ProvisionEvent::TopicSkipped { topic: "orders".into() }, &["not creating topic", "orders"])]
    #[test_case(ProvisionEvent::SubscriptionCreated { name: "projects/p/subscriptions/orders-sub".into() }, &["created subscription", "orders-sub"])]
    #[test_case(ProvisionEvent::SubscriptionAlreadyExists { subscription: "orders-sub".into() }, &["already exists", "orders-sub"])]
    #[test_case(ProvisionEvent::SubscriptionSkipped { subscription: "orders-sub".into(), topic: "orders".into() }, &["not creating subscription", "orders-sub", "orders"])]
    fn tracing_sink(event: ProvisionEvent, want: &[&str]) {
        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || TracingSink.record(event));

        let got = buffer.contents();
        assert!(got.contains("INFO"), "{got}");
        for w in want {
            assert!(got.contains(w), "missing {w} in {got}");
        }
    }

    #[test]
    fn recording_sink() {
        let sink = RecordingSink::default();
        sink.record(ProvisionEvent::TopicSkipped {
            topic: "orders".into(),
        });
        assert_eq!(
            sink.events(),
            vec![ProvisionEvent::TopicSkipped {
                topic: "orders".into()
            }]
        );
    }

    #[test]
    fn shared_sink() {
        let sink = Arc::new(RecordingSink::default());
        let shared: Arc<dyn EventSink> = Arc::new(sink.clone());
        shared.record(ProvisionEvent::TopicAlreadyExists {
            topic: "orders".into(),
        });
        assert_eq!(sink.events().len(), 1, "{sink:?}");
    }
}
