//! Export of spatial, rule-based reaction network models to the BioNetGen
//! language (BNGL), with physically consistent conversion of rate constants.
//!
//! A model built for a particle-based spatial simulator (molecule types,
//! nested compartments and reaction rules) is written as BNGL so it can be
//! run by non-spatial kinetic solvers such as BioNetGen or NFSim.
//!
//! # Features
//!
//! - **Rule registry**: Rules are registered once and classified by arity and
//!   geometry (volume, surface, reactive surface)
//! - **Rate conversion**: Bimolecular rates are rescaled from MCell units to
//!   either plain BNGL units or NFSim per-molecule units
//! - **Compartment ordering**: Nested compartments are written parents first
//! - **Graceful degradation**: Rules without a BNGL equivalent are reported in
//!   a diagnostic string while the rest of the model is still exported
//! - **Usage statistics**: Active versus total species and reactant classes
//!
//! # Quick Start
//!
//! ```
//! use bngl_bridge::{BngData, BngEngine, ElemMolType, ExportConfig, MolKind, RxnRule};
//!
//! let mut data = BngData::new();
//! data.add_mol_type(ElemMolType::new("A", MolKind::Volume, 1e-6));
//! data.add_mol_type(ElemMolType::new("B", MolKind::Volume, 1e-6));
//! let ec = data.add_compartment("EC", true, 8.0, None);
//! data.add_compartment("PM", false, 6.0, Some(ec));
//! data.add_rxn_rule(RxnRule::new("A() + B() -> A() + A()", 1e8, ["A", "B"]));
//!
//! let mut engine = BngEngine::new(data);
//! engine.initialize()?;
//!
//! let (mut params, mut mol_types, mut compartments, mut rules) =
//!     (Vec::new(), Vec::new(), Vec::new(), Vec::new());
//! let diagnostics = engine.export_to_bngl(
//!     &mut params,
//!     &mut mol_types,
//!     &mut compartments,
//!     &mut rules,
//!     &ExportConfig::default(),
//! )?;
//! assert!(diagnostics.is_empty());
//!
//! let params = String::from_utf8(params).unwrap();
//! assert!(params.contains("k0 1e8 / MCELL2BNG_VOL_CONV * VOL_RXN"));
//!
//! let compartments = String::from_utf8(compartments).unwrap();
//! assert!(compartments.contains("PM 2 area_PM * THICKNESS EC"));
//! # Ok::<(), bngl_bridge::EngineError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] – BNGL writer, rate conversion, compartment ordering and the TOML
//!   model description reader
//! - [`BngEngine`] – Rule registration, statistics and complex instantiation
//!
//! # Data Types
//!
//! - [`BngData`] – The model store
//! - [`ElemMolType`] – Molecule type with diffusion constant and components
//! - [`Compartment`] – 3D or 2D compartment with parent and children
//! - [`RxnRule`] / [`RxnClass`] – Reaction rule and its classification
//! - [`Species`] / [`Cplx`] – Species template and complex instances

mod engine;
mod model;

pub mod io;

pub use model::compartment::{Compartment, CompartmentId, DEFAULT_COMPARTMENT_NAME};
pub use model::data::BngData;
pub use model::molecule::{
    ALL_MOLECULES, ALL_SURFACE_MOLECULES, ALL_VOLUME_MOLECULES, ComponentType, ElemMolType,
    MolKind, is_species_superclass,
};
pub use model::rule::{RxnClass, RxnRule};
pub use model::species::{Cplx, Orientation, ReactantClassId, Species, SpeciesId};

pub use engine::{
    BngEngine, RegisteredRule, RuleRegistry, RxnContainer, SpeciesContainer, SpeciesRegistry,
    StatsReport,
};

pub use engine::Error as EngineError;
pub use io::{ExportConfig, RateConvention};
