use super::compartment::CompartmentId;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpeciesId(pub usize);

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReactantClassId(pub usize);

/// Orientation of a complex relative to the surface it sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    Down,
    #[default]
    None,
    Up,
    /// Not yet decided; used by templates before placement.
    NotSet,
}

impl Orientation {
    pub fn as_i8(self) -> i8 {
        match self {
            Orientation::Down => -1,
            Orientation::None => 0,
            Orientation::Up => 1,
            Orientation::NotSet => 2,
        }
    }
}

/// A complex: one or more bound molecules, plus the spatial attributes a
/// runtime instance carries.
#[derive(Debug, Clone, PartialEq)]
pub struct Cplx {
    /// Rendered BNGL pattern of the complex, e.g. `A(a!1).B(b!1)`.
    pub pattern: String,
    /// Names of the elementary molecule types the complex is made of.
    pub mol_types: Vec<String>,
    pub orientation: Orientation,
    pub compartment: Option<CompartmentId>,
}

impl Cplx {
    pub fn new<I, S>(pattern: impl Into<String>, mol_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pattern: pattern.into(),
            mol_types: mol_types.into_iter().map(Into::into).collect(),
            orientation: Orientation::default(),
            compartment: None,
        }
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn set_compartment(&mut self, compartment: Option<CompartmentId>) {
        self.compartment = compartment;
    }
}

/// Canonical species template held by the species registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    pub id: SpeciesId,
    pub cplx: Cplx,
    instantiated: bool,
    reactant_class: Option<ReactantClassId>,
}

impl Species {
    pub fn new(id: SpeciesId, cplx: Cplx) -> Self {
        Self {
            id,
            cplx,
            instantiated: false,
            reactant_class: None,
        }
    }

    #[inline]
    pub fn was_instantiated(&self) -> bool {
        self.instantiated
    }

    /// Marks the species as produced at least once. The flag is never cleared.
    pub fn set_was_instantiated(&mut self) {
        self.instantiated = true;
    }

    #[inline]
    pub fn reactant_class(&self) -> Option<ReactantClassId> {
        self.reactant_class
    }

    #[inline]
    pub fn has_valid_reactant_class(&self) -> bool {
        self.reactant_class.is_some()
    }

    pub fn set_reactant_class(&mut self, id: Option<ReactantClassId>) {
        self.reactant_class = id;
    }
}
