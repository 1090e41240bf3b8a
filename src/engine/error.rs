//! Error types for the reaction network engine facade.

use crate::model::species::SpeciesId;
use thiserror::Error;

/// Errors raised by [`BngEngine`](super::BngEngine) operations.
///
/// All variants signal a broken precondition or corrupted upstream data and
/// abort the operation. Rules that merely cannot be expressed in BNGL are not
/// errors; they are reported through the diagnostic text returned by export.
#[derive(Debug, Error)]
pub enum Error {
    /// An operation that needs registered rules ran before
    /// [`initialize`](super::BngEngine::initialize).
    #[error("reaction rules have not been registered: call initialize() first")]
    NotInitialized,

    /// [`initialize`](super::BngEngine::initialize) was called a second time.
    #[error("reaction rules were already registered; initialize() must run exactly once")]
    AlreadyInitialized,

    /// A species id does not refer to any entry of the species registry.
    #[error("unknown species id {0}")]
    UnknownSpecies(SpeciesId),

    /// Writing the BNGL output failed.
    #[error("BNGL export failed: {0}")]
    Export(#[from] crate::io::Error),
}
