//! BioNetGen language (BNGL) export.
//!
//! A model is written as four coordinated text streams: parameters,
//! molecule types, compartments and reaction rules. The three section
//! emitters all append to the shared parameters stream, which is why
//! [`export_to_bngl`] runs them in a fixed order.

pub mod hierarchy;
pub mod names;
pub mod rates;

use self::names::*;
use super::ExportConfig;
use super::error::Error;
use super::util::f_to_str;
use crate::engine::RegisteredRule;
use crate::model::data::BngData;
use crate::model::molecule::{MolKind, is_species_superclass};
use std::io::{self, Write};

/// Writes all sections and returns the concatenated diagnostics.
///
/// Molecule types come first so that diffusion constants precede the rate
/// parameters, then reaction rules (which also define the conversion
/// parameters and `THICKNESS`), then compartments.
pub fn export_to_bngl<P, M, C, R>(
    data: &BngData,
    rules: &[RegisteredRule],
    out_parameters: &mut P,
    out_molecule_types: &mut M,
    out_compartments: &mut C,
    out_reaction_rules: &mut R,
    config: &ExportConfig,
) -> Result<String, Error>
where
    P: Write + ?Sized,
    M: Write + ?Sized,
    C: Write + ?Sized,
    R: Write + ?Sized,
{
    export_molecule_types(data, out_parameters, out_molecule_types)?;

    let mut diagnostics =
        export_reaction_rules(rules, out_parameters, out_reaction_rules, config)?;

    diagnostics += &export_compartments(data, out_parameters, out_compartments)?;

    Ok(diagnostics)
}

/// Writes the molecule types block and a diffusion constant parameter per type.
///
/// Reactive surface pseudo-types and species-superclass wildcards are skipped.
pub fn export_molecule_types<P, M>(
    data: &BngData,
    out_parameters: &mut P,
    out_molecule_types: &mut M,
) -> io::Result<()>
where
    P: Write + ?Sized,
    M: Write + ?Sized,
{
    writeln!(out_molecule_types, "{BEGIN_MOLECULE_TYPES}")?;

    writeln!(out_parameters)?;
    writeln!(out_parameters, "{IND}# diffusion constants")?;

    let mut written = 0usize;
    for mt in &data.elem_mol_types {
        let prefix = match mt.kind {
            MolKind::Volume => MCELL_DIFFUSION_CONSTANT_3D_PREFIX,
            MolKind::Surface => MCELL_DIFFUSION_CONSTANT_2D_PREFIX,
            MolKind::ReactiveSurface => continue,
        };
        if is_species_superclass(&mt.name) {
            continue;
        }

        writeln!(out_molecule_types, "{IND}{}", mt.to_bngl())?;
        writeln!(
            out_parameters,
            "{IND}{prefix}{} {} # cm^2/s",
            mt.name,
            f_to_str(mt.diffusion_constant)
        )?;
        written += 1;
    }

    writeln!(out_molecule_types, "{END_MOLECULE_TYPES}")?;
    tracing::debug!(written, total = data.elem_mol_types.len(), "exported molecule types");
    Ok(())
}

/// Writes the global rate conversion parameters, then a rate parameter and a
/// rule line for each registered rule. Returns the diagnostics of rules that
/// cannot be expressed in BNGL.
pub fn export_reaction_rules<P, R>(
    rules: &[RegisteredRule],
    out_parameters: &mut P,
    out_reaction_rules: &mut R,
    config: &ExportConfig,
) -> io::Result<String>
where
    P: Write + ?Sized,
    R: Write + ?Sized,
{
    writeln!(out_reaction_rules, "{BEGIN_REACTION_RULES}")?;

    rates::write_global_parameters(out_parameters, &config.rates)?;
    let diagnostics = rates::write_rates_and_rules(out_parameters, out_reaction_rules, rules)?;

    writeln!(out_reaction_rules, "{END_REACTION_RULES}")?;
    tracing::debug!(rules = rules.len(), "exported reaction rules");
    Ok(diagnostics)
}

/// Writes the compartments block, parents before children, with a size
/// parameter per compartment. The default compartment is never written.
///
/// Always returns empty diagnostics for a well-formed hierarchy; a malformed
/// one is an error.
pub fn export_compartments<P, C>(
    data: &BngData,
    out_parameters: &mut P,
    out_compartments: &mut C,
) -> Result<String, Error>
where
    P: Write + ?Sized,
    C: Write + ?Sized,
{
    let order = hierarchy::compartment_order(data)?;

    writeln!(out_compartments, "{BEGIN_COMPARTMENTS}")?;

    writeln!(out_parameters)?;
    writeln!(out_parameters, "{IND}# compartment sizes")?;

    for id in order {
        let comp = data.compartment(id).ok_or(Error::UnknownCompartment(id))?;
        if comp.is_default() {
            continue;
        }

        let vol_name = format!("{PREFIX_VOLUME}{}", comp.name);
        if comp.is_3d {
            writeln!(
                out_parameters,
                "{IND}{vol_name} {} # um^3",
                f_to_str(comp.volume_or_area)
            )?;
            write!(
                out_compartments,
                "{IND}{} {} {vol_name}",
                comp.name,
                comp.dimensions()
            )?;
        } else {
            let area_name = format!("{PREFIX_AREA}{}", comp.name);
            writeln!(
                out_parameters,
                "{IND}{area_name} {} # um^2",
                f_to_str(comp.volume_or_area)
            )?;
            writeln!(
                out_parameters,
                "{IND}{vol_name} {area_name} * {PARAM_THICKNESS} # um^3, area times membrane thickness"
            )?;
            write!(
                out_compartments,
                "{IND}{} {} {area_name} * {PARAM_THICKNESS}",
                comp.name,
                comp.dimensions()
            )?;
        }

        match hierarchy::declared_parent(data, comp) {
            Some(parent) => writeln!(out_compartments, " {}", parent.name)?,
            None => writeln!(out_compartments)?,
        }
    }

    writeln!(out_compartments, "{END_COMPARTMENTS}")?;
    Ok(String::new())
}
