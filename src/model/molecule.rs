use std::fmt;

/// Wildcard names denoting "any molecule" placeholders rather than concrete types.
pub const ALL_MOLECULES: &str = "ALL_MOLECULES";
pub const ALL_VOLUME_MOLECULES: &str = "ALL_VOLUME_MOLECULES";
pub const ALL_SURFACE_MOLECULES: &str = "ALL_SURFACE_MOLECULES";

const SPECIES_SUPERCLASSES: [&str; 3] = [ALL_MOLECULES, ALL_VOLUME_MOLECULES, ALL_SURFACE_MOLECULES];

/// Returns `true` if `name` is one of the reserved species-superclass wildcards.
pub fn is_species_superclass(name: &str) -> bool {
    SPECIES_SUPERCLASSES.contains(&name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MolKind {
    #[default]
    Volume,
    Surface,
    /// Pseudo-type standing for a reactive surface class (absorptive,
    /// transparent or reflective walls). Has no BNGL counterpart.
    ReactiveSurface,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentType {
    pub name: String,
    pub states: Vec<String>,
}

impl ComponentType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            states: Vec::new(),
        }
    }

    pub fn with_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states = states.into_iter().map(Into::into).collect();
        self
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for state in &self.states {
            write!(f, "~{}", state)?;
        }
        Ok(())
    }
}

/// An elementary molecule type template.
#[derive(Debug, Clone, PartialEq)]
pub struct ElemMolType {
    pub name: String,
    /// Diffusion constant in cm²/s.
    pub diffusion_constant: f64,
    pub kind: MolKind,
    pub components: Vec<ComponentType>,
}

impl ElemMolType {
    pub fn new(name: impl Into<String>, kind: MolKind, diffusion_constant: f64) -> Self {
        Self {
            name: name.into(),
            diffusion_constant,
            kind,
            components: Vec::new(),
        }
    }

    pub fn with_component(mut self, component: ComponentType) -> Self {
        self.components.push(component);
        self
    }

    #[inline]
    pub fn is_vol(&self) -> bool {
        self.kind == MolKind::Volume
    }

    #[inline]
    pub fn is_surf(&self) -> bool {
        self.kind == MolKind::Surface
    }

    #[inline]
    pub fn is_reactive_surface(&self) -> bool {
        self.kind == MolKind::ReactiveSurface
    }

    /// Structural declaration as written in a molecule types block, e.g. `A(a~0~1,b)`.
    pub fn to_bngl(&self) -> String {
        let components: Vec<String> = self.components.iter().map(|c| c.to_string()).collect();
        format!("{}({})", self.name, components.join(","))
    }
}
