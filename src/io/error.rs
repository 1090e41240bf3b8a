use crate::model::compartment::CompartmentId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse model description: {details} (at line ~{line})")]
    Parse { line: usize, details: String },

    #[error("invalid model description: {0}")]
    Model(String),

    #[error("compartment {0} is referenced but does not exist")]
    UnknownCompartment(CompartmentId),

    #[error(
        "compartment {child} is listed as a child of {parent} but names {actual:?} as its parent"
    )]
    InconsistentCompartmentLink {
        parent: CompartmentId,
        child: CompartmentId,
        actual: Option<CompartmentId>,
    },

    #[error(
        "malformed compartment hierarchy: reached {visited} of {total} compartments from the roots (cycle, orphan or duplicate id)"
    )]
    MalformedCompartmentTree { visited: usize, total: usize },
}

impl Error {
    pub fn model(details: impl Into<String>) -> Self {
        Self::Model(details.into())
    }
}
