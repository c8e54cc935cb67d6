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
use crate::error::ClientInitError;
use google_cloud_auth::credentials::Credentials;
use gax::backoff_policy::BackoffPolicyArg;
use gax::retry_policy::{Aip194Strict, RetryPolicyArg, RetryPolicyExt};
use gax::retry_throttler::RetryThrottlerArg;
use std::time::Duration;

/// The OAuth2 scope for the Pub/Sub API.
pub const PUBSUB_SCOPE: &str = "https://www.googleapis.com/auth/pubsub";

/// The default maximum number of attempts for each create request.
pub const DEFAULT_ATTEMPT_LIMIT: u32 = 5;

/// The default maximum time spent retrying each create request.
pub const DEFAULT_RETRY_TIME_LIMIT: Duration = Duration::from_secs(60);

/// A builder for [PubsubAdmin].
///
/// # Example
/// ```
/// # use google_cloud_pubsub_provision::PubsubAdmin;
/// # async fn sample() -> anyhow::Result<()> {
/// let client = PubsubAdmin::builder()
///     .with_project("my-project")
///     .with_endpoint("https://pubsub.googleapis.com")
///     .build()
///     .await?;
/// # Ok(()) }
/// ```
#[derive(Clone)]
pub struct ClientBuilder {
    pub(crate) project: Option<String>,
    pub(crate) endpoint: Option<String>,
    pub(crate) cred: Option<Credentials>,
    pub(crate) scopes: Vec<String>,
    pub(crate) tracing: bool,
    pub(crate) retry_policy: Option<RetryPolicyArg>,
    pub(crate) backoff_policy: Option<BackoffPolicyArg>,
    pub(crate) retry_throttler: Option<RetryThrottlerArg>,
}

impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("project", &self.project)
            .field("endpoint", &self.endpoint)
            .field("cred", &self.cred.is_some())
            .field("scopes", &self.scopes)
            .field("tracing", &self.tracing)
            .field("retry_policy", &self.retry_policy.is_some())
            .field("backoff_policy", &self.backoff_policy.is_some())
            .field("retry_throttler", &self.retry_throttler.is_some())
            .finish()
    }
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        Self {
            project: None,
            endpoint: None,
            cred: None,
            scopes: vec![PUBSUB_SCOPE.to_string()],
            tracing: false,
            retry_policy: None,
            backoff_policy: None,
            retry_throttler: None,
        }
    }

    /// Creates a new client.
    ///
    /// Unless [with_credentials][Self::with_credentials] was called, this
    /// loads the [Application Default Credentials], scoped to the Pub/Sub API.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_pubsub_provision::PubsubAdmin;
    /// # async fn sample() -> anyhow::Result<()> {
    /// let client = PubsubAdmin::builder().build().await?;
    /// # Ok(()) }
    /// ```
    ///
    /// [Application Default Credentials]: https://cloud.google.com/docs/authentication/application-default-credentials
    pub async fn build(self) -> Result<PubsubAdmin, ClientInitError> {
        PubsubAdmin::new(self).await
    }

    /// Sets the project used to qualify bare topic and subscription ids.
    ///
    /// Ids that already start with `projects/` are used as-is.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_pubsub_provision::PubsubAdmin;
    /// # async fn sample() -> anyhow::Result<()> {
    /// let client = PubsubAdmin::builder()
    ///     .with_project("my-project")
    ///     .build()
    ///     .await?;
    /// assert_eq!(client.topic_name("orders"), "projects/my-project/topics/orders");
    /// # Ok(()) }
    /// ```
    pub fn with_project<V: Into<String>>(mut self, v: V) -> Self {
        self.project = Some(v.into());
        self
    }

    /// Sets the endpoint.
    ///
    /// Use this to connect to a private endpoint, or to the [emulator].
    ///
    /// # Example
    /// ```
    /// # use google_cloud_pubsub_provision::PubsubAdmin;
    /// # async fn sample() -> anyhow::Result<()> {
    /// use google_cloud_auth::credentials::anonymous::Builder as Anonymous;
    /// let client = PubsubAdmin::builder()
    ///     .with_endpoint("http://localhost:8085")
    ///     .with_credentials(Anonymous::new().build())
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    ///
    /// [emulator]: https://cloud.google.com/pubsub/docs/emulator
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    /// Enables tracing in the underlying Pub/Sub clients.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.tracing = true;
        self
    }

    /// Configures the authentication credentials.
    ///
    /// When set, the default credentials are not loaded and
    /// [with_scopes][Self::with_scopes] has no effect.
    pub fn with_credentials<V: Into<Credentials>>(mut self, v: V) -> Self {
        self.cred = Some(v.into());
        self
    }

    /// Overrides the scopes requested for the default credentials.
    pub fn with_scopes<I, S>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = v.into_iter().map(Into::into).collect();
        self
    }

    /// Configures the retry policy.
    ///
    /// The default policy retries transient errors, up to
    /// [DEFAULT_ATTEMPT_LIMIT] attempts and [DEFAULT_RETRY_TIME_LIMIT].
    ///
    /// # Example
    /// ```
    /// # use google_cloud_pubsub_provision::PubsubAdmin;
    /// # async fn sample() -> anyhow::Result<()> {
    /// use gax::retry_policy::{AlwaysRetry, RetryPolicyExt};
    /// let client = PubsubAdmin::builder()
    ///     .with_retry_policy(AlwaysRetry.with_attempt_limit(3))
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.retry_policy = Some(v.into());
        self
    }

    /// Configures the retry backoff policy.
    pub fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.backoff_policy = Some(v.into());
        self
    }

    /// Configures the retry throttler.
    pub fn with_retry_throttler<V: Into<RetryThrottlerArg>>(mut self, v: V) -> Self {
        self.retry_throttler = Some(v.into());
        self
    }

    pub(crate) fn default_retry_policy() -> RetryPolicyArg {
        Aip194Strict
            .with_attempt_limit(DEFAULT_ATTEMPT_LIMIT)
            .with_time_limit(DEFAULT_RETRY_TIME_LIMIT)
            .into()
    }

    pub(crate) fn credentials(&self) -> Result<Credentials, ClientInitError> {
        if let Some(c) = self.cred.clone() {
            return Ok(c);
        }
        google_cloud_auth::credentials::Builder::default()
            .with_scopes(self.scopes.clone())
            .build()
            .map_err(ClientInitError::credentials)
    }
}
