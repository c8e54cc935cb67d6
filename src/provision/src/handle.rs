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

use crate::client::PubsubAdmin;

/// A handle to the admin client, or a marker that Pub/Sub is disabled.
///
/// Applications that run without Pub/Sub (local development, some tests)
/// pass [AdminHandle::Disabled], the provisioning functions then succeed
/// without making any requests.
///
/// # Example
/// ```
/// # use google_cloud_pubsub_provision::*;
/// # async fn sample(enabled: bool) -> anyhow::Result<()> {
/// let client: AdminHandle = if enabled {
///     AdminHandle::Configured(create_client().await?)
/// } else {
///     AdminHandle::Disabled
/// };
/// ensure_topic(&client, "projects/my-project/topics/orders").await?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub enum AdminHandle<A = PubsubAdmin> {
    Configured(A),
    Disabled,
}

impl<A> AdminHandle<A> {
    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured(_))
    }

    /// Returns the admin client, if configured.
    pub fn as_admin(&self) -> Option<&A> {
        match self {
            Self::Configured(a) => Some(a),
            Self::Disabled => None,
        }
    }
}

impl<A> Default for AdminHandle<A> {
    fn default() -> Self {
        Self::Disabled
    }
}

impl<A> From<Option<A>> for AdminHandle<A> {
    fn from(value: Option<A>) -> Self {
        value.map_or(Self::Disabled, Self::Configured)
    }
}

impl From<PubsubAdmin> for AdminHandle<PubsubAdmin> {
    fn from(value: PubsubAdmin) -> Self {
        Self::Configured(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_option() {
        let handle = AdminHandle::<i32>::from(Some(42));
        assert!(handle.is_configured(), "{handle:?}");
        assert_eq!(handle.as_admin(), Some(&42));

        let handle = AdminHandle::<i32>::from(None);
        assert!(!handle.is_configured(), "{handle:?}");
        assert_eq!(handle.as_admin(), None);
    }

    #[test]
    fn default() {
        let handle = AdminHandle::<i32>::default();
        assert!(matches!(handle, AdminHandle::Disabled), "{handle:?}");
    }
}
