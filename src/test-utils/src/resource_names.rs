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

//! Helper functions and types to generate random Pub/Sub resource ids.

use rand::{
    Rng,
    distr::{Distribution, Uniform},
};

/// A common prefix for resource ids.
///
/// Pub/Sub ids must start with a letter, this prefix takes care of that.
pub const PREFIX: &str = "rust-provision-";

/// Shorter than the 255 characters Pub/Sub allows, the names appear in logs.
const RANDOM_SUFFIX_LENGTH: usize = 32;

/// Generate a random topic id.
pub fn random_topic_id() -> String {
    let id = LowercaseAlphanumeric.random_string(RANDOM_SUFFIX_LENGTH);
    format!("{PREFIX}topic-{id}")
}

/// Generate a random subscription id.
pub fn random_subscription_id() -> String {
    let id = LowercaseAlphanumeric.random_string(RANDOM_SUFFIX_LENGTH);
    format!("{PREFIX}sub-{id}")
}

const LOWERCASE_ALPHANUMERIC_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Sample a `u8`, uniformly distributed over ASCII lowercase letters and numbers: a-z and 0-9.
///
/// # Example
/// ```
/// use pubsub_provision_test_utils::resource_names::LowercaseAlphanumeric;
/// let got: String = LowercaseAlphanumeric.random_string(32);
/// assert_eq!(got.len(), 32);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseAlphanumeric;

impl LowercaseAlphanumeric {
    /// Create a string with `n` characters from the character set.
    pub fn random_string(&self, n: usize) -> String {
        rand::rng()
            .sample_iter(self)
            .take(n)
            .map(char::from)
            .collect()
    }
}

impl Distribution<u8> for LowercaseAlphanumeric {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        let u = Uniform::new(0, LOWERCASE_ALPHANUMERIC_CHARSET.len())
            .expect("hard-coded uniform distribution is initialized successfully")
            .sample(rng);
        LOWERCASE_ALPHANUMERIC_CHARSET[u]
    }
}
