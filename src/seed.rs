//! Seed text that avatars are derived from

use std::fmt;

use rand::distr::Alphanumeric;
use rand::Rng;

/// Length of randomly generated seeds
pub const RANDOM_SEED_LEN: usize = 10;

/// Non-empty text used to derive an avatar
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Seed(String);

impl Seed {
    /// Create a seed, returning `None` for empty text
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.is_empty() {
            None
        } else {
            Some(Self(text))
        }
    }

    /// Seed from a literal known to be non-empty
    pub(crate) fn from_static(text: &'static str) -> Self {
        debug_assert!(!text.is_empty());
        Self(text.to_string())
    }

    /// Random ASCII letters and digits from the thread-local generator
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// Random ASCII letters and digits from the given generator
    pub fn random_with<R: Rng>(rng: &mut R) -> Self {
        let text: String = rng
            .sample_iter(Alphanumeric)
            .take(RANDOM_SEED_LEN)
            .map(char::from)
            .collect();
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Seed {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
