use anyhow::{Result, bail};
use bngl_bridge::ExportConfig;

use crate::cli::RateOptions;

pub fn build_export_config(opts: &RateOptions) -> Result<ExportConfig> {
    if !opts.nfsim {
        return Ok(ExportConfig::default());
    }

    match (opts.volume, opts.area) {
        (Some(volume), Some(area)) if volume > 0.0 && area > 0.0 => {
            Ok(ExportConfig::nfsim(volume, area))
        }
        (Some(_), Some(_)) => bail!("--volume and --area must be positive"),
        _ => bail!("--nfsim requires both --volume and --area"),
    }
}
