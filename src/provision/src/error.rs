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

//! Errors returned by the provisioning functions.
//!
//! Failures are reported per call. A topic or subscription that already
//! exists is **not** an error, the provisioner reports it as success.

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Indicates a problem while constructing the admin client.
///
/// # Example
/// ```no_run
/// # use google_cloud_pubsub_provision::*;
/// # async fn sample() -> anyhow::Result<()> {
/// let client = match create_client().await {
///     Ok(c) => c,
///     Err(e) if e.is_credentials() => {
///         println!("cannot find default credentials: {e}");
///         println!("troubleshoot using https://cloud.google.com/docs/authentication/client-libraries");
///         return Err(e.into());
///     }
///     Err(e) => return Err(e.into()),
/// };
/// # Ok(()) }
/// ```
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ClientInitError {
    /// The Application Default Credentials could not be loaded.
    #[error("cannot create the default credentials: {0}")]
    Credentials(#[source] BoxError),

    /// The underlying Pub/Sub clients could not be created.
    #[error("cannot create the Pub/Sub admin clients: {0}")]
    Transport(#[source] gax::client_builder::Error),
}

impl ClientInitError {
    pub(crate) fn credentials<T: Into<BoxError>>(source: T) -> Self {
        Self::Credentials(source.into())
    }

    /// The error was caused by a failure to load the credentials.
    pub fn is_credentials(&self) -> bool {
        matches!(self, Self::Credentials(_))
    }

    /// The error was caused by a failure to create the transport.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<gax::client_builder::Error> for ClientInitError {
    fn from(value: gax::client_builder::Error) -> Self {
        Self::Transport(value)
    }
}

/// Represents an error that can occur while provisioning a resource.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ProvisionError {
    /// The request was rejected before any RPC was made.
    #[error("invalid provisioning request: {0}")]
    InvalidArgument(String),

    /// The service failed to create the topic.
    #[error("cannot create topic {topic}: {source}")]
    Topic {
        topic: String,
        #[source]
        source: RemoteError,
    },

    /// The service failed to create the subscription.
    #[error("cannot create subscription {subscription} for topic {topic}: {source}")]
    Subscription {
        subscription: String,
        topic: String,
        #[source]
        source: RemoteError,
    },
}

impl ProvisionError {
    pub(crate) fn invalid<T: Into<String>>(msg: T) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// The request had invalid arguments and was never sent.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// The remote error that caused this failure, if any.
    pub fn remote(&self) -> Option<&RemoteError> {
        match self {
            Self::InvalidArgument(_) => None,
            Self::Topic { source, .. } | Self::Subscription { source, .. } => Some(source),
        }
    }
}

/// The classification of a failed create request.
///
/// The admin adapter computes this from the service response. Only the
/// service saying that the resource exists is [AlreadyExists][Self::AlreadyExists],
/// any other failure, including errors without a status, is
/// [Other][Self::Other].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoteErrorKind {
    AlreadyExists,
    Other,
}

impl std::fmt::Display for RemoteErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyExists => f.write_str("ALREADY_EXISTS"),
            Self::Other => f.write_str("OTHER"),
        }
    }
}

/// A failed request to the Pub/Sub admin API.
#[derive(thiserror::Error, Debug)]
#[error("the service request failed ({kind}): {source}")]
pub struct RemoteError {
    kind: RemoteErrorKind,
    #[source]
    source: BoxError,
}

impl RemoteError {
    /// Creates an error for a resource that already exists.
    pub fn already_exists<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: RemoteErrorKind::AlreadyExists,
            source: source.into(),
        }
    }

    /// Creates an error for any other failure.
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: RemoteErrorKind::Other,
            source: source.into(),
        }
    }

    pub fn kind(&self) -> RemoteErrorKind {
        self.kind
    }

    pub fn is_already_exists(&self) -> bool {
        self.kind == RemoteErrorKind::AlreadyExists
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn remote_error() {
        let e = RemoteError::already_exists("duplicate");
        assert!(e.is_already_exists(), "{e:?}");
        assert_eq!(e.kind(), RemoteErrorKind::AlreadyExists);
        assert!(e.to_string().contains("ALREADY_EXISTS"), "{e}");
        assert!(e.source().is_some(), "{e:?}");

        let e = RemoteError::other("permission denied");
        assert!(!e.is_already_exists(), "{e:?}");
        assert_eq!(e.kind(), RemoteErrorKind::Other);
        assert!(e.to_string().contains("permission denied"), "{e}");
    }

    #[test]
    fn provision_error() {
        let e = ProvisionError::invalid("empty topic id");
        assert!(e.is_invalid_argument(), "{e:?}");
        assert!(e.remote().is_none(), "{e:?}");
        assert!(e.source().is_none(), "{e:?}");

        let e = ProvisionError::Topic {
            topic: "orders".to_string(),
            source: RemoteError::other("permission denied"),
        };
        assert!(!e.is_invalid_argument(), "{e:?}");
        assert!(e.to_string().contains("orders"), "{e}");
        assert_eq!(e.remote().map(RemoteError::kind), Some(RemoteErrorKind::Other));
        let source = e.source().and_then(|s| s.downcast_ref::<RemoteError>());
        assert!(source.is_some(), "{e:?}");

        let e = ProvisionError::Subscription {
            subscription: "orders-sub".to_string(),
            topic: "orders".to_string(),
            source: RemoteError::other("not found"),
        };
        let fmt = e.to_string();
        assert!(fmt.contains("orders-sub") && fmt.contains("orders"), "{fmt}");
        assert!(e.remote().is_some(), "{e:?}");
    }

    #[test]
    fn client_init_error() {
        let e = ClientInitError::credentials("no ADC file");
        assert!(e.is_credentials(), "{e:?}");
        assert!(!e.is_transport(), "{e:?}");
        assert!(e.to_string().contains("no ADC file"), "{e}");

        let e = ClientInitError::from(gax::client_builder::Error::transport("bad endpoint"));
        assert!(e.is_transport(), "{e:?}");
        assert!(!e.is_credentials(), "{e:?}");
        assert!(e.source().is_some(), "{e:?}");
    }
}
