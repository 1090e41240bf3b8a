//! BNGL keywords and the parameter symbols shared between sections.

pub const IND: &str = "  ";

pub const BEGIN_MODEL: &str = "BEGIN MODEL";
pub const END_MODEL: &str = "END MODEL";
pub const BEGIN_PARAMETERS: &str = "BEGIN PARAMETERS";
pub const END_PARAMETERS: &str = "END PARAMETERS";
pub const BEGIN_MOLECULE_TYPES: &str = "BEGIN MOLECULE_TYPES";
pub const END_MOLECULE_TYPES: &str = "END MOLECULE_TYPES";
pub const BEGIN_REACTION_RULES: &str = "BEGIN REACTION_RULES";
pub const END_REACTION_RULES: &str = "END REACTION_RULES";
pub const BEGIN_COMPARTMENTS: &str = "BEGIN COMPARTMENTS";
pub const END_COMPARTMENTS: &str = "END COMPARTMENTS";

pub const MCELL_DIFFUSION_CONSTANT_3D_PREFIX: &str = "MCELL_DIFFUSION_CONSTANT_3D_";
pub const MCELL_DIFFUSION_CONSTANT_2D_PREFIX: &str = "MCELL_DIFFUSION_CONSTANT_2D_";
pub const MCELL_REDEFINE_PREFIX: &str = "MCELL_REDEFINE_";

pub const PARAM_THICKNESS: &str = "THICKNESS";
pub const PARAM_RATE_CONV_VOLUME: &str = "RATE_CONV_VOLUME";
pub const PARAM_RATE_CONV_SURFACE: &str = "RATE_CONV_SURFACE";
pub const PARAM_MCELL2BNG_VOL_CONV: &str = "MCELL2BNG_VOL_CONV";
pub const PARAM_MCELL2BNG_SURF_CONV: &str = "MCELL2BNG_SURF_CONV";
pub const PARAM_VOL_RXN: &str = "VOL_RXN";
pub const PARAM_SURF_RXN: &str = "SURF_RXN";

pub const PREFIX_VOLUME: &str = "vol_";
pub const PREFIX_AREA: &str = "area_";
pub const PREFIX_RATE: &str = "k";

/// Avogadro constant, exact since the 2019 SI redefinition.
pub const NA_VALUE_STR: &str = "6.02214076e23";

/// Assumed membrane thickness in µm used to give surfaces a volume.
pub const THICKNESS_UM: f64 = 0.01;

/// µm³ to litres.
pub const UM3_TO_LITRES: f64 = 1e-15;

pub fn rate_param_name(rule_index: usize) -> String {
    format!("{PREFIX_RATE}{rule_index}")
}
