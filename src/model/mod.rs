//! Core data structures of a spatial rule-based reaction network model.
//!
//! This module provides the types that flow through `bngl-bridge`:
//!
//! - [`molecule`] – Elementary molecule types with their diffusion constants.
//! - [`compartment`] – Nested 3D (volume) and 2D (surface) spatial regions.
//! - [`rule`] – Reaction rules and their geometric classification.
//! - [`species`] – Species templates and the complexes instantiated from them.
//! - [`data`] – The read-only model store tying everything together.
//!
//! The model store ([`BngData`]) is built once and never mutated by the
//! [`crate::BngEngine`]; exports and statistics only read it.
//!
//! [`BngData`]: data::BngData

pub mod compartment;
pub mod data;
pub mod molecule;
pub mod rule;
pub mod species;
