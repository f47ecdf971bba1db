//! Avatar sources: seed text in, vector document out
//!
//! The drawing algorithm is a capability behind [`AvatarSource`]. The session
//! only relies on the contract that the same seed always yields the same
//! bytes. [`IdenticonSource`] is the generator shipped with the crate.

pub mod config;
pub mod identicon;
pub mod svg;

pub use config::AvatarConfig;
pub use identicon::IdenticonSource;

use crate::document::VectorDocument;
use crate::error::GenerationError;
use crate::seed::Seed;

/// Seed used to check that a source works before it is handed to a session
pub const VERIFICATION_SEED: &str = "test_verification";

/// Deterministic generator of vector documents
pub trait AvatarSource {
    /// Produce the document for `seed`. Must be a pure function of the seed.
    fn generate(&self, seed: &Seed) -> Result<VectorDocument, GenerationError>;
}

impl<F> AvatarSource for F
where
    F: Fn(&Seed) -> Result<VectorDocument, GenerationError>,
{
    fn generate(&self, seed: &Seed) -> Result<VectorDocument, GenerationError> {
        self(seed)
    }
}

/// Generate a probe avatar to confirm the source is usable
pub fn verify_source<S: AvatarSource>(source: &S) -> Result<VectorDocument, GenerationError> {
    source.generate(&Seed::from_static(VERIFICATION_SEED))
}
