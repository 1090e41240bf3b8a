use crate::model::data::BngData;
use crate::model::rule::{RxnClass, RxnRule};
use crate::model::species::{Cplx, ReactantClassId};
use std::collections::{BTreeMap, BTreeSet};

/// A rule after registration, with its classification computed once.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredRule {
    pub rule: RxnRule,
    pub class: RxnClass,
}

/// Registry of finalized reaction rules.
///
/// The engine registers every rule of the model exactly once through
/// [`add_and_finalize`](RuleRegistry::add_and_finalize) and afterwards only
/// reads from it.
pub trait RuleRegistry {
    fn add_and_finalize(&mut self, rule: &RxnRule, data: &BngData);

    /// Registered rules in registration order.
    fn rxn_rules(&self) -> &[RegisteredRule];

    fn num_rxn_classes(&self) -> usize;

    fn num_existing_reactant_classes(&self) -> usize;

    /// Returns the reactant class a complex falls into, creating it on first
    /// use. `None` means the complex is not a reactant of any rule.
    fn reactant_class_for(&mut self, cplx: &Cplx) -> Option<ReactantClassId>;
}

/// Default [`RuleRegistry`].
///
/// Rules sharing the same multiset of reactant types form one reaction class.
/// Complexes that can act as a reactant for the same set of rules share one
/// reactant class.
#[derive(Debug, Clone, Default)]
pub struct RxnContainer {
    rules: Vec<RegisteredRule>,
    rxn_classes: BTreeSet<Vec<String>>,
    reactant_classes: BTreeMap<Vec<usize>, ReactantClassId>,
}

impl RxnContainer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RuleRegistry for RxnContainer {
    fn add_and_finalize(&mut self, rule: &RxnRule, data: &BngData) {
        let class = RxnClass::classify(rule, data);

        let mut key = rule.reactants.clone();
        key.sort_unstable();
        self.rxn_classes.insert(key);

        tracing::debug!(rule = %rule.pattern, ?class, "registered reaction rule");
        self.rules.push(RegisteredRule {
            rule: rule.clone(),
            class,
        });
    }

    fn rxn_rules(&self) -> &[RegisteredRule] {
        &self.rules
    }

    fn num_rxn_classes(&self) -> usize {
        self.rxn_classes.len()
    }

    fn num_existing_reactant_classes(&self) -> usize {
        self.reactant_classes.len()
    }

    fn reactant_class_for(&mut self, cplx: &Cplx) -> Option<ReactantClassId> {
        let applicable: Vec<usize> = self
            .rules
            .iter()
            .enumerate()
            .filter(|(_, r)| r.rule.reactants.iter().any(|name| cplx.mol_types.contains(name)))
            .map(|(i, _)| i)
            .collect();

        if applicable.is_empty() {
            return None;
        }

        let next = ReactantClassId(self.reactant_classes.len());
        Some(*self.reactant_classes.entry(applicable).or_insert(next))
    }
}
