use crate::model::species::{Cplx, ReactantClassId, Species, SpeciesId};

/// Registry of species templates, densely indexed by [`SpeciesId`].
pub trait SpeciesRegistry {
    fn species(&self) -> &[Species];

    fn get(&self, id: SpeciesId) -> Option<&Species>;
}

/// Default [`SpeciesRegistry`]. Species are never removed, so ids stay valid
/// indices for the whole run.
#[derive(Debug, Clone, Default)]
pub struct SpeciesContainer {
    species: Vec<Species>,
}

impl SpeciesContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a species for `cplx` unless one with the same pattern exists, and
    /// returns its id.
    pub fn add(&mut self, cplx: Cplx, reactant_class: Option<ReactantClassId>) -> SpeciesId {
        if let Some(existing) = self.find_by_pattern(&cplx.pattern) {
            return existing;
        }

        let id = SpeciesId(self.species.len());
        let mut species = Species::new(id, cplx);
        species.set_reactant_class(reactant_class);
        self.species.push(species);
        id
    }

    pub fn find_by_pattern(&self, pattern: &str) -> Option<SpeciesId> {
        self.species
            .iter()
            .find(|s| s.cplx.pattern == pattern)
            .map(|s| s.id)
    }

    pub fn get_mut(&mut self, id: SpeciesId) -> Option<&mut Species> {
        self.species.get_mut(id.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.species.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

impl SpeciesRegistry for SpeciesContainer {
    fn species(&self) -> &[Species] {
        &self.species
    }

    fn get(&self, id: SpeciesId) -> Option<&Species> {
        self.species.get(id.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense_and_patterns_unique() {
        let mut all = SpeciesContainer::new();
        let a = all.add(Cplx::new("A()", ["A"]), None);
        let b = all.add(Cplx::new("B()", ["B"]), Some(ReactantClassId(3)));
        let a_again = all.add(Cplx::new("A()", ["A"]), None);

        assert_eq!(a, SpeciesId(0));
        assert_eq!(b, SpeciesId(1));
        assert_eq!(a_again, a);
        assert_eq!(all.len(), 2);
        assert_eq!(all.get(b).unwrap().reactant_class(), Some(ReactantClassId(3)));
        assert!(all.get(SpeciesId(2)).is_none());
    }
}
