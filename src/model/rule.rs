use super::data::BngData;
use super::molecule::MolKind;

/// A reaction rule as parsed into the model.
///
/// The rule pattern itself is matched and expanded elsewhere; here it is kept
/// as its rendered BNGL text together with the molecule types of its reactants,
/// which is all that export needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RxnRule {
    /// Rendered rule, e.g. `A(a) + B(b) -> A(a!1).B(b!1)`.
    pub pattern: String,
    /// Base rate constant in MCell units: s⁻¹ for unimolecular rules,
    /// M⁻¹s⁻¹ for volume bimolecular and µm²·N⁻¹·s⁻¹ for surface bimolecular.
    pub base_rate_constant: f64,
    /// Molecule type names of the reactants, one entry per reactant.
    pub reactants: Vec<String>,
}

impl RxnRule {
    pub fn new<I, S>(pattern: impl Into<String>, base_rate_constant: f64, reactants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pattern: pattern.into(),
            base_rate_constant,
            reactants: reactants.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    pub fn num_reactants(&self) -> usize {
        self.reactants.len()
    }

    #[inline]
    pub fn is_unimol(&self) -> bool {
        self.reactants.len() == 1
    }

    #[inline]
    pub fn is_bimol(&self) -> bool {
        self.reactants.len() == 2
    }

    #[inline]
    pub fn to_bngl(&self) -> &str {
        &self.pattern
    }
}

/// Geometric classification of a rule, deciding how its rate is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RxnClass {
    Unimol,
    /// Volume–volume or volume–surface bimolecular rule.
    VolumeBimol,
    /// Surface–surface bimolecular rule.
    SurfaceBimol,
    /// Involves a reactive surface class; not expressible in BNGL.
    ReactiveSurface,
    /// Arity or reactant types are inconsistent with any of the above.
    Other,
}

impl RxnClass {
    pub fn classify(rule: &RxnRule, data: &BngData) -> Self {
        let mut kinds = Vec::with_capacity(rule.reactants.len());
        for name in &rule.reactants {
            match data.find_mol_type(name) {
                Some(mt) => kinds.push(mt.kind),
                None => return RxnClass::Other,
            }
        }

        if kinds.contains(&MolKind::ReactiveSurface) {
            return RxnClass::ReactiveSurface;
        }

        match kinds.as_slice() {
            [_] => RxnClass::Unimol,
            [MolKind::Surface, MolKind::Surface] => RxnClass::SurfaceBimol,
            [_, _] => RxnClass::VolumeBimol,
            _ => RxnClass::Other,
        }
    }

    /// Returns `true` if the rate of a rule of this class can be written to BNGL.
    #[inline]
    pub fn is_exportable(self) -> bool {
        matches!(
            self,
            RxnClass::Unimol | RxnClass::VolumeBimol | RxnClass::SurfaceBimol
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::molecule::ElemMolType;

    fn data() -> BngData {
        let mut data = BngData::new();
        data.add_mol_type(ElemMolType::new("V", MolKind::Volume, 1e-6));
        data.add_mol_type(ElemMolType::new("W", MolKind::Volume, 1e-6));
        data.add_mol_type(ElemMolType::new("S", MolKind::Surface, 1e-7));
        data.add_mol_type(ElemMolType::new("T", MolKind::Surface, 1e-7));
        data.add_mol_type(ElemMolType::new("wall", MolKind::ReactiveSurface, 0.0));
        data
    }

    fn class_of(reactants: &[&str]) -> RxnClass {
        let data = data();
        RxnClass::classify(&RxnRule::new("r", 1.0, reactants.iter().copied()), &data)
    }

    #[test]
    fn classifies_by_arity_and_geometry() {
        assert_eq!(class_of(&["V"]), RxnClass::Unimol);
        assert_eq!(class_of(&["S"]), RxnClass::Unimol);
        assert_eq!(class_of(&["V", "W"]), RxnClass::VolumeBimol);
        assert_eq!(class_of(&["V", "S"]), RxnClass::VolumeBimol);
        assert_eq!(class_of(&["S", "V"]), RxnClass::VolumeBimol);
        assert_eq!(class_of(&["S", "T"]), RxnClass::SurfaceBimol);
    }

    #[test]
    fn reactive_surface_wins_over_arity() {
        assert_eq!(class_of(&["V", "wall"]), RxnClass::ReactiveSurface);
        assert_eq!(class_of(&["wall"]), RxnClass::ReactiveSurface);
        assert!(!RxnClass::ReactiveSurface.is_exportable());
    }

    #[test]
    fn inconsistent_rules_fall_back_to_other() {
        assert_eq!(class_of(&[]), RxnClass::Other);
        assert_eq!(class_of(&["V", "W", "S"]), RxnClass::Other);
        assert_eq!(class_of(&["Unknown"]), RxnClass::Other);
        assert!(!RxnClass::Other.is_exportable());
    }
}
