use super::compartment::{Compartment, CompartmentId};
use super::molecule::ElemMolType;
use super::rule::RxnRule;

/// The model store: molecule types, compartments and reaction rules in
/// declaration order.
///
/// Built once before the engine is created and treated as read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct BngData {
    pub elem_mol_types: Vec<ElemMolType>,
    pub compartments: Vec<Compartment>,
    pub rxn_rules: Vec<RxnRule>,
}

impl BngData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_mol_type(&mut self, mol_type: ElemMolType) -> usize {
        self.elem_mol_types.push(mol_type);
        self.elem_mol_types.len() - 1
    }

    /// Appends a compartment and links it under `parent`.
    ///
    /// Ids are dense indices into [`BngData::compartments`]. A `parent` that does
    /// not exist yet is recorded on the child only; such one-sided links are
    /// reported when the compartment hierarchy is resolved.
    pub fn add_compartment(
        &mut self,
        name: impl Into<String>,
        is_3d: bool,
        volume_or_area: f64,
        parent: Option<CompartmentId>,
    ) -> CompartmentId {
        let id = CompartmentId(self.compartments.len());
        let mut compartment = Compartment::new(id, name, is_3d, volume_or_area);
        compartment.parent = parent;
        self.compartments.push(compartment);

        if let Some(parent) = parent.and_then(|p| self.compartments.get_mut(p.0)) {
            parent.add_child(id);
        }
        id
    }

    /// Attaches `child` under `parent`, updating both sides of the link.
    ///
    /// Returns `false` and changes nothing if either id is unknown, the two
    /// ids are equal, or `child` already has a parent.
    pub fn set_compartment_parent(&mut self, child: CompartmentId, parent: CompartmentId) -> bool {
        let valid = child != parent
            && self.compartment(parent).is_some()
            && self.compartment(child).is_some_and(|c| c.parent.is_none());
        if !valid {
            return false;
        }

        self.compartments[child.0].parent = Some(parent);
        self.compartments[parent.0].add_child(child);
        true
    }

    pub fn add_rxn_rule(&mut self, rule: RxnRule) -> usize {
        self.rxn_rules.push(rule);
        self.rxn_rules.len() - 1
    }

    pub fn find_mol_type(&self, name: &str) -> Option<&ElemMolType> {
        self.elem_mol_types.iter().find(|mt| mt.name == name)
    }

    #[inline]
    pub fn compartment(&self, id: CompartmentId) -> Option<&Compartment> {
        self.compartments.get(id.0).filter(|c| c.id == id)
    }

    pub fn compartment_by_name(&self, name: &str) -> Option<&Compartment> {
        self.compartments.iter().find(|c| c.name == name)
    }

    #[inline]
    pub fn compartment_count(&self) -> usize {
        self.compartments.len()
    }
}
