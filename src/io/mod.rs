//! Reading model descriptions and writing BNGL.
//!
//! - [`bngl`] – section emitters, rate conversion and compartment ordering.
//! - [`read_model`] – loads a TOML model description into a [`BngData`](crate::BngData).
//! - [`write_bngl`] – assembles the four BNGL streams into one document.

pub mod bngl;
pub mod error;
pub mod util;

mod model_file;

pub use error::Error;
pub use model_file::{ModelDescription, SeedSpecies, read_model};

use crate::engine::{BngEngine, RuleRegistry, SpeciesRegistry};
use std::io::Write;

/// Convention the exported rate constants are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RateConvention {
    /// Rates keep MCell's geometry: volume reactions are converted from µm³
    /// to litres, surface reactions use the membrane thickness as depth.
    #[default]
    Mcell,
    /// Rates per molecule count for NFSim, relative to a reference
    /// compartment of the given volume (µm³) and surface area (µm²).
    Nfsim { volume_um3: f64, area_um2: f64 },
}

/// Settings for a BNGL export.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExportConfig {
    pub rates: RateConvention,
}

impl ExportConfig {
    pub fn nfsim(volume_um3: f64, area_um2: f64) -> Self {
        Self {
            rates: RateConvention::Nfsim {
                volume_um3,
                area_um2,
            },
        }
    }
}

/// Writes a complete BNGL model and returns the export diagnostics.
///
/// The parameter stream is wrapped in its own block and placed first, followed
/// by the molecule types, compartments and reaction rules blocks.
pub fn write_bngl<W, R, S>(
    mut writer: W,
    engine: &BngEngine<R, S>,
    config: &ExportConfig,
) -> Result<String, crate::engine::Error>
where
    W: Write,
    R: RuleRegistry,
    S: SpeciesRegistry,
{
    let mut parameters = Vec::new();
    let mut molecule_types = Vec::new();
    let mut compartments = Vec::new();
    let mut reaction_rules = Vec::new();

    let diagnostics = engine.export_to_bngl(
        &mut parameters,
        &mut molecule_types,
        &mut compartments,
        &mut reaction_rules,
        config,
    )?;

    let mut emit = || -> std::io::Result<()> {
        writeln!(writer, "{}", bngl::names::BEGIN_MODEL)?;
        writeln!(writer)?;
        writeln!(writer, "{}", bngl::names::BEGIN_PARAMETERS)?;
        writer.write_all(&parameters)?;
        writeln!(writer, "{}", bngl::names::END_PARAMETERS)?;
        for section in [&molecule_types, &compartments, &reaction_rules] {
            writeln!(writer)?;
            writer.write_all(section)?;
        }
        writeln!(writer)?;
        writeln!(writer, "{}", bngl::names::END_MODEL)?;
        writer.flush()
    };
    emit().map_err(Error::from)?;

    Ok(diagnostics)
}
