mod error;
mod registry;
mod species;
mod stats;

pub use error::Error;
pub use registry::{RegisteredRule, RuleRegistry, RxnContainer};
pub use species::{SpeciesContainer, SpeciesRegistry};
pub use stats::StatsReport;

use crate::io::{self, ExportConfig};
use crate::model::compartment::CompartmentId;
use crate::model::data::BngData;
use crate::model::species::{Cplx, Orientation, SpeciesId};
use std::collections::BTreeSet;
use std::io::Write;

/// Facade over a finalized model and its rule and species registries.
///
/// [`initialize`](BngEngine::initialize) must run exactly once before any
/// statistics or export call. The model store is never mutated afterwards.
#[derive(Debug, Clone)]
pub struct BngEngine<R = RxnContainer, S = SpeciesContainer> {
    data: BngData,
    all_rxns: R,
    all_species: S,
    initialized: bool,
}

impl BngEngine {
    pub fn new(data: BngData) -> Self {
        Self::with_registries(data, RxnContainer::new(), SpeciesContainer::new())
    }
}

impl<R: RuleRegistry, S: SpeciesRegistry> BngEngine<R, S> {
    pub fn with_registries(data: BngData, all_rxns: R, all_species: S) -> Self {
        Self {
            data,
            all_rxns,
            all_species,
            initialized: false,
        }
    }

    /// Registers every reaction rule of the model with the rule registry.
    pub fn initialize(&mut self) -> Result<(), Error> {
        if self.initialized {
            return Err(Error::AlreadyInitialized);
        }

        for rule in &self.data.rxn_rules {
            self.all_rxns.add_and_finalize(rule, &self.data);
        }
        self.initialized = true;

        tracing::debug!(
            rules = self.data.rxn_rules.len(),
            rxn_classes = self.all_rxns.num_rxn_classes(),
            "rule registry initialized"
        );
        Ok(())
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[inline]
    pub fn data(&self) -> &BngData {
        &self.data
    }

    #[inline]
    pub fn all_rxns(&self) -> &R {
        &self.all_rxns
    }

    #[inline]
    pub fn all_species(&self) -> &S {
        &self.all_species
    }

    #[inline]
    pub fn all_species_mut(&mut self) -> &mut S {
        &mut self.all_species
    }

    /// Counts species produced during the run and the reactant classes they use.
    pub fn stats_report(&self) -> Result<StatsReport, Error> {
        self.ensure_initialized()?;

        let species = self.all_species.species();
        let mut active_reactant_classes = BTreeSet::new();
        let mut active_species = 0;
        for s in species.iter().filter(|s| s.was_instantiated()) {
            active_species += 1;
            if let Some(class) = s.reactant_class() {
                active_reactant_classes.insert(class);
            }
        }

        Ok(StatsReport {
            active_species,
            total_species: species.len(),
            rxn_classes: self.all_rxns.num_rxn_classes(),
            active_reactant_classes: active_reactant_classes.len(),
            total_reactant_classes: self.all_rxns.num_existing_reactant_classes(),
        })
    }

    /// Copies the complex of species `id` and places the copy with the given
    /// orientation and compartment. The registry entry is left untouched.
    pub fn create_cplx_from_species(
        &self,
        id: SpeciesId,
        orientation: Orientation,
        compartment: Option<CompartmentId>,
    ) -> Result<Cplx, Error> {
        let species = self.all_species.get(id).ok_or(Error::UnknownSpecies(id))?;

        let mut copy = species.cplx.clone();
        copy.set_orientation(orientation);
        copy.set_compartment(compartment);
        Ok(copy)
    }

    /// Writes the model as BNGL into four coordinated streams and returns the
    /// diagnostics of rules that could not be expressed (empty when all could).
    ///
    /// The sections are produced in a fixed order: molecule types, reaction
    /// rules, compartments. All of them append to `out_parameters`.
    pub fn export_to_bngl<P, M, C, X>(
        &self,
        out_parameters: &mut P,
        out_molecule_types: &mut M,
        out_compartments: &mut C,
        out_reaction_rules: &mut X,
        config: &ExportConfig,
    ) -> Result<String, Error>
    where
        P: Write + ?Sized,
        M: Write + ?Sized,
        C: Write + ?Sized,
        X: Write + ?Sized,
    {
        self.ensure_initialized()?;

        let diagnostics = io::bngl::export_to_bngl(
            &self.data,
            self.all_rxns.rxn_rules(),
            out_parameters,
            out_molecule_types,
            out_compartments,
            out_reaction_rules,
            config,
        )?;
        Ok(diagnostics)
    }

    fn ensure_initialized(&self) -> Result<(), Error> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }
}

impl<R: RuleRegistry> BngEngine<R, SpeciesContainer> {
    /// Adds a species template for `cplx`, assigning its reactant class from
    /// the registered rules.
    pub fn register_species(&mut self, cplx: Cplx) -> Result<SpeciesId, Error> {
        self.ensure_initialized()?;

        let reactant_class = self.all_rxns.reactant_class_for(&cplx);
        Ok(self.all_species.add(cplx, reactant_class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::molecule::{ElemMolType, MolKind};
    use crate::model::rule::RxnRule;

    fn sample_data() -> BngData {
        let mut data = BngData::new();
        data.add_mol_type(ElemMolType::new("A", MolKind::Volume, 1e-6));
        data.add_mol_type(ElemMolType::new("B", MolKind::Volume, 1e-6));
        data.add_mol_type(ElemMolType::new("C", MolKind::Volume, 1e-6));
        data.add_rxn_rule(RxnRule::new("A() + B() -> C()", 1e6, ["A", "B"]));
        data.add_rxn_rule(RxnRule::new("C() -> A() + B()", 0.1, ["C"]));
        data
    }

    fn initialized_engine() -> BngEngine {
        let mut engine = BngEngine::new(sample_data());
        engine.initialize().expect("initialize");
        engine
    }

    #[test]
    fn initialize_registers_every_rule_once() {
        let engine = initialized_engine();
        assert!(engine.is_initialized());
        assert_eq!(engine.all_rxns().rxn_rules().len(), 2);
        assert_eq!(engine.all_rxns().num_rxn_classes(), 2);
    }

    #[test]
    fn initialize_twice_is_rejected() {
        let mut engine = initialized_engine();
        let err = engine.initialize().expect_err("second initialize");
        assert!(matches!(err, Error::AlreadyInitialized));
        assert_eq!(engine.all_rxns().rxn_rules().len(), 2);
    }

    #[test]
    fn stats_and_export_require_initialization() {
        let engine = BngEngine::new(sample_data());
        assert!(matches!(engine.stats_report(), Err(Error::NotInitialized)));

        let (mut p, mut m, mut c, mut r) = (Vec::new(), Vec::new(), Vec::new(), Vec::new());
        let err = engine
            .export_to_bngl(&mut p, &mut m, &mut c, &mut r, &ExportConfig::default())
            .expect_err("export before initialize");
        assert!(matches!(err, Error::NotInitialized));
        assert!(p.is_empty());
    }

    #[test]
    fn stats_with_nothing_instantiated_are_zero() {
        let mut engine = initialized_engine();
        engine.register_species(Cplx::new("A()", ["A"])).unwrap();
        engine.register_species(Cplx::new("C()", ["C"])).unwrap();

        let report = engine.stats_report().unwrap();
        assert_eq!(report.active_species, 0);
        assert_eq!(report.total_species, 2);
        assert_eq!(report.active_reactant_classes, 0);
        assert_eq!(report.total_reactant_classes, 2);
    }

    #[test]
    fn stats_count_instantiated_species_and_their_classes() {
        let mut engine = initialized_engine();
        let a = engine.register_species(Cplx::new("A()", ["A"])).unwrap();
        let b = engine.register_species(Cplx::new("B()", ["B"])).unwrap();
        engine.register_species(Cplx::new("C()", ["C"])).unwrap();
        let d = engine.register_species(Cplx::new("D()", ["D"])).unwrap();

        for id in [a, b, d] {
            engine.all_species_mut().get_mut(id).unwrap().set_was_instantiated();
        }

        let report = engine.stats_report().unwrap();
        assert_eq!(report.active_species, 3);
        assert_eq!(report.total_species, 4);
        assert_eq!(report.active_reactant_classes, 1);
        assert_eq!(report.total_reactant_classes, 2);
        assert!(report.active_species <= report.total_species);
        assert!(report.active_reactant_classes <= report.total_reactant_classes);
    }

    #[test]
    fn created_complex_is_an_independent_copy() {
        let mut engine = initialized_engine();
        let id = engine.register_species(Cplx::new("A()", ["A"])).unwrap();

        let cplx = engine
            .create_cplx_from_species(id, Orientation::Up, Some(CompartmentId(3)))
            .unwrap();
        assert_eq!(cplx.pattern, "A()");
        assert_eq!(cplx.orientation, Orientation::Up);
        assert_eq!(cplx.compartment, Some(CompartmentId(3)));

        let template = &engine.all_species().get(id).unwrap().cplx;
        assert_eq!(template.orientation, Orientation::None);
        assert_eq!(template.compartment, None);
    }

    #[test]
    fn unknown_species_id_is_an_error() {
        let engine = initialized_engine();
        let err = engine
            .create_cplx_from_species(SpeciesId(42), Orientation::None, None)
            .expect_err("unknown id");
        assert!(matches!(err, Error::UnknownSpecies(SpeciesId(42))));
    }
}
