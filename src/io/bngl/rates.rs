//! Conversion of MCell rate constants into BNGL rate expressions.
//!
//! MCell expresses bimolecular rates per molar concentration (volume
//! reactions) or per surface density (surface reactions), while BioNetGen and
//! NFSim work with rates per molecule count in a compartment. The conversion
//! factors are written once as parameters, so that every rule's rate becomes
//! a symbolic expression that downstream tools may rescale by redefining the
//! `VOL_RXN` and `SURF_RXN` knobs.

use super::names::*;
use crate::engine::RegisteredRule;
use crate::io::RateConvention;
use crate::io::util::f_to_str;
use crate::model::rule::RxnClass;
use std::io::{self, Write};

/// Writes the membrane thickness, the unit conversion factors and the
/// scaling knobs used by all rate expressions.
pub fn write_global_parameters<W: Write + ?Sized>(
    out: &mut W,
    rates: &RateConvention,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{IND}# parameters to control rates in MCell and BioNetGen")?;
    writeln!(
        out,
        "{IND}{PARAM_THICKNESS} {} # um, assumed membrane thickness",
        f_to_str(THICKNESS_UM)
    )?;

    match rates {
        RateConvention::Nfsim {
            volume_um3,
            area_um2,
        } => {
            writeln!(
                out,
                "{IND}{PARAM_RATE_CONV_VOLUME} {} * {} # compartment volume in litres",
                f_to_str(*volume_um3),
                f_to_str(UM3_TO_LITRES)
            )?;
            writeln!(
                out,
                "{IND}{PARAM_RATE_CONV_SURFACE} {} * {PARAM_THICKNESS} * {} # compartment area times thickness in litres",
                f_to_str(*area_um2),
                f_to_str(UM3_TO_LITRES)
            )?;
        }
        RateConvention::Mcell => {
            writeln!(
                out,
                "{IND}{PARAM_RATE_CONV_VOLUME} {} # um^3 to litres",
                f_to_str(UM3_TO_LITRES)
            )?;
            writeln!(
                out,
                "{IND}{PARAM_RATE_CONV_SURFACE} {PARAM_THICKNESS} # surface density to volume concentration"
            )?;
        }
    }

    writeln!(
        out,
        "{IND}{PARAM_MCELL2BNG_VOL_CONV} {NA_VALUE_STR} * {PARAM_RATE_CONV_VOLUME}"
    )?;
    writeln!(
        out,
        "{IND}{PARAM_MCELL2BNG_SURF_CONV} {NA_VALUE_STR} * {PARAM_RATE_CONV_SURFACE}"
    )?;
    writeln!(out, "{IND}{PARAM_VOL_RXN} 1")?;
    writeln!(out, "{IND}{PARAM_SURF_RXN} 1")?;
    writeln!(
        out,
        "{IND}{MCELL_REDEFINE_PREFIX}{PARAM_VOL_RXN} {PARAM_MCELL2BNG_VOL_CONV}"
    )?;
    writeln!(
        out,
        "{IND}{MCELL_REDEFINE_PREFIX}{PARAM_SURF_RXN} {PARAM_MCELL2BNG_SURF_CONV}"
    )?;
    Ok(())
}

/// Returns the BNGL rate expression for a rule of the given class, or `None`
/// if rules of that class have no BNGL equivalent.
pub fn rate_expression(class: RxnClass, base_rate_constant: f64) -> Option<String> {
    let rate = f_to_str(base_rate_constant);
    match class {
        // s^-1 in both conventions
        RxnClass::Unimol => Some(rate),
        RxnClass::VolumeBimol => Some(format!(
            "{rate} / {PARAM_MCELL2BNG_VOL_CONV} * {PARAM_VOL_RXN}"
        )),
        RxnClass::SurfaceBimol => Some(format!(
            "{rate} / {PARAM_MCELL2BNG_SURF_CONV} * {PARAM_SURF_RXN}"
        )),
        RxnClass::ReactiveSurface | RxnClass::Other => None,
    }
}

fn unsupported_message(class: RxnClass, rule_as_bngl: &str) -> String {
    match class {
        RxnClass::ReactiveSurface => format!(
            "Export of reactive surface reactions to BNGL is not supported, error for {rule_as_bngl}.\n"
        ),
        _ => format!(
            "Reaction has an inconsistent reactant classification and cannot be exported to BNGL, error for {rule_as_bngl}.\n"
        ),
    }
}

/// Writes one rate parameter and one rule line per registered rule, in
/// registry order, and returns the accumulated diagnostics.
///
/// A rule that cannot be expressed keeps its unconverted rate as parameter
/// value and is written commented out, so the output stays loadable.
pub fn write_rates_and_rules<P, R>(
    out_parameters: &mut P,
    out_reaction_rules: &mut R,
    rules: &[RegisteredRule],
) -> io::Result<String>
where
    P: Write + ?Sized,
    R: Write + ?Sized,
{
    writeln!(out_parameters)?;
    writeln!(out_parameters, "{IND}# reaction rates")?;

    let mut diagnostics = String::new();
    for (i, registered) in rules.iter().enumerate() {
        let rule_as_bngl = registered.rule.to_bngl();
        let rate_param = rate_param_name(i);

        match rate_expression(registered.class, registered.rule.base_rate_constant) {
            Some(expr) => {
                writeln!(out_parameters, "{IND}{rate_param} {expr}")?;
                writeln!(out_reaction_rules, "{IND}{rule_as_bngl} {rate_param}")?;
            }
            None => {
                tracing::warn!(rule = %rule_as_bngl, class = ?registered.class, "rule cannot be exported to BNGL");
                diagnostics.push_str(&unsupported_message(registered.class, rule_as_bngl));

                writeln!(
                    out_parameters,
                    "{IND}{rate_param} {} # not converted",
                    f_to_str(registered.rule.base_rate_constant)
                )?;
                writeln!(out_reaction_rules, "{IND}# {rule_as_bngl} {rate_param}")?;
            }
        }
    }
    Ok(diagnostics)
}
