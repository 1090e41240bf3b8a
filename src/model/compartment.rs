use std::fmt;

/// Name of the implicit compartment used when a model declares none.
///
/// It always conceptually exists in a model but is never written to BNGL.
pub const DEFAULT_COMPARTMENT_NAME: &str = "default_compartment";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompartmentId(pub usize);

impl fmt::Display for CompartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Compartment {
    pub id: CompartmentId,
    pub name: String,
    pub is_3d: bool,
    /// Volume in µm³ for 3D compartments, area in µm² for 2D ones.
    pub volume_or_area: f64,
    pub parent: Option<CompartmentId>,
    /// Child ids in insertion order, without duplicates.
    pub children: Vec<CompartmentId>,
}

impl Compartment {
    pub fn new(id: CompartmentId, name: impl Into<String>, is_3d: bool, volume_or_area: f64) -> Self {
        Self {
            id,
            name: name.into(),
            is_3d,
            volume_or_area,
            parent: None,
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_COMPARTMENT_NAME
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[inline]
    pub fn dimensions(&self) -> u8 {
        if self.is_3d { 3 } else { 2 }
    }

    pub(crate) fn add_child(&mut self, child: CompartmentId) {
        if !self.children.contains(&child) {
            self.children.push(child);
        }
    }
}
