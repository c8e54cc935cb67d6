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

use crate::error::ProvisionError;

/// Describes a subscription to provision.
///
/// # Example
/// ```
/// # use google_cloud_pubsub_provision::model::SubscriptionDescriptor;
/// let descriptor = SubscriptionDescriptor::new("orders-sub", "orders")
///     .set_ack_deadline_seconds(30);
/// assert_eq!(descriptor.ack_deadline_seconds, Some(30));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct SubscriptionDescriptor {
    /// The subscription id, or its full resource name.
    pub subscription_id: String,

    /// The topic id, or its full resource name, the subscription is bound to.
    pub topic_id: String,

    /// The acknowledgement deadline, in seconds.
    ///
    /// If `None` the service default applies.
    pub ack_deadline_seconds: Option<i32>,
}

impl SubscriptionDescriptor {
    pub fn new<S, T>(subscription_id: S, topic_id: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            subscription_id: subscription_id.into(),
            topic_id: topic_id.into(),
            ack_deadline_seconds: None,
        }
    }

    /// Sets the value of [ack_deadline_seconds][Self::ack_deadline_seconds].
    pub fn set_ack_deadline_seconds<T: Into<i32>>(mut self, v: T) -> Self {
        self.ack_deadline_seconds = Some(v.into());
        self
    }

    /// Sets or clears the value of [ack_deadline_seconds][Self::ack_deadline_seconds].
    pub fn set_or_clear_ack_deadline_seconds<T: Into<i32>>(mut self, v: Option<T>) -> Self {
        self.ack_deadline_seconds = v.map(Into::into);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ProvisionError> {
        if self.subscription_id.is_empty() {
            return Err(ProvisionError::invalid("the subscription id must not be empty"));
        }
        if self.topic_id.is_empty() {
            return Err(ProvisionError::invalid(format!(
                "the topic id for subscription {} must not be empty",
                self.subscription_id
            )));
        }
        match self.ack_deadline_seconds {
            Some(d) if d <= 0 => Err(ProvisionError::invalid(format!(
                "the acknowledgement deadline must be positive, got {d}"
            ))),
            _ => Ok(()),
        }
    }
}

pub(crate) fn validate_topic_id(topic_id: &str) -> Result<(), ProvisionError> {
    if topic_id.is_empty() {
        return Err(ProvisionError::invalid("the topic id must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn setters() {
        let d = SubscriptionDescriptor::new("orders-sub", "orders");
        assert_eq!(d.subscription_id, "orders-sub");
        assert_eq!(d.topic_id, "orders");
        assert_eq!(d.ack_deadline_seconds, None);

        let d = d.set_ack_deadline_seconds(10);
        assert_eq!(d.ack_deadline_seconds, Some(10));

        let d = d.set_or_clear_ack_deadline_seconds(None::<i32>);
        assert_eq!(d.ack_deadline_seconds, None);
        let d = d.set_or_clear_ack_deadline_seconds(Some(42));
        assert_eq!(d.ack_deadline_seconds, Some(42));
    }

    #[test_case(SubscriptionDescriptor::new("s", "t"))]
    #[test_case(SubscriptionDescriptor::new("s", "t").set_ack_deadline_seconds(1))]
    #[test_case(SubscriptionDescriptor::new("projects/p/subscriptions/s", "projects/p/topics/t").set_ack_deadline_seconds(600))]
    fn valid(d: SubscriptionDescriptor) {
        let got = d.validate();
        assert!(got.is_ok(), "{got:?}");
    }

    #[test_case(SubscriptionDescriptor::new("", "t"))]
    #[test_case(SubscriptionDescriptor::new("s", ""))]
    #[test_case(SubscriptionDescriptor::new("s", "t").set_ack_deadline_seconds(0))]
    #[test_case(SubscriptionDescriptor::new("s", "t").set_ack_deadline_seconds(-5))]
    fn invalid(d: SubscriptionDescriptor) {
        let got = d.validate();
        assert!(
            got.as_ref().is_err_and(ProvisionError::is_invalid_argument),
            "{got:?}"
        );
    }

    #[test]
    fn topic_id() {
        assert!(validate_topic_id("orders").is_ok());
        let got = validate_topic_id("");
        assert!(
            got.as_ref().is_err_and(ProvisionError::is_invalid_argument),
            "{got:?}"
        );
    }
}
