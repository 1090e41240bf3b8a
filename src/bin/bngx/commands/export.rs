use std::io::Write;

use anyhow::{Context, Result, bail};
use bngl_bridge::io::write_bngl;
use bngl_bridge::{ExportConfig, RateConvention};

use super::{build_engine, read_model_description};
use crate::cli::ExportArgs;
use crate::config::build_export_config;
use crate::display::{Context as DisplayContext, Progress, print_diagnostics, print_model_summary};
use crate::io::create_output;

const TOTAL_STEPS: u8 = 3;

pub fn run_export(args: ExportArgs, ctx: DisplayContext) -> Result<()> {
    let config = build_export_config(&args.rates)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading model");
    let model = read_model_description(args.io.input.as_deref())?;
    let read_substeps = [
        format!("{} molecule types", model.data.elem_mol_types.len()),
        format!("{} compartments", model.data.compartment_count()),
        format!("{} reaction rules", model.data.rxn_rules.len()),
    ];
    progress.complete_step("Reading model", &as_refs(&read_substeps));

    if ctx.interactive {
        print_model_summary(&model.data);
    }

    progress.step("Registering reaction rules");
    let engine = build_engine(model)?;
    progress.complete_step("Registering reaction rules", &[]);

    progress.step("Writing BNGL");
    let mut document = Vec::new();
    let diagnostics = write_bngl(&mut document, &engine, &config).context("Failed to write BNGL")?;

    if args.strict && !diagnostics.is_empty() {
        progress.abandon();
        bail!(
            "Some reaction rules cannot be expressed in BNGL:\n{}",
            diagnostics.trim_end()
        );
    }

    let mut writer = create_output(args.output.as_deref())?;
    writer
        .write_all(&document)
        .and_then(|()| writer.flush())
        .context("Failed to write BNGL")?;

    let write_substeps = build_write_substeps(&args, &config);
    progress.complete_step("Writing BNGL", &as_refs(&write_substeps));

    progress.finish();

    if !diagnostics.is_empty() && ctx.interactive {
        print_diagnostics(&diagnostics);
    }

    Ok(())
}

fn build_write_substeps(args: &ExportArgs, config: &ExportConfig) -> Vec<String> {
    let target = args
        .output
        .as_ref()
        .map(|p| {
            p.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned()
        })
        .unwrap_or_else(|| "stdout".to_string());

    let rates = match config.rates {
        RateConvention::Mcell => "Convert rates to BNGL units".to_string(),
        RateConvention::Nfsim {
            volume_um3,
            area_um2,
        } => format!(
            "Convert rates for NFSim (V = {} µm³, A = {} µm²)",
            volume_um3, area_um2
        ),
    };

    vec![rates, format!("Write BNGL → {}", target)]
}

fn as_refs(items: &[String]) -> Vec<&str> {
    items.iter().map(|s| s.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{IoOptions, RateOptions};
    use std::fs;
    use std::path::Path;

    const MODEL: &str = r#"
[[molecule_type]]
name = "A"
diffusion_constant = 1e-6

[[molecule_type]]
name = "W"
kind = "reactive_surface"

[[rule]]
pattern = "A() -> 0"
rate = 1.0
reactants = ["A"]

[[rule]]
pattern = "A() + W -> 0"
rate = 2.0
reactants = ["A", "W"]
"#;

    fn args(input: &Path, output: &Path, strict: bool) -> ExportArgs {
        ExportArgs {
            io: IoOptions {
                input: Some(input.to_path_buf()),
                quiet: true,
            },
            output: Some(output.to_path_buf()),
            strict,
            rates: RateOptions {
                nfsim: false,
                volume: None,
                area: None,
            },
        }
    }

    fn quiet() -> DisplayContext {
        DisplayContext { interactive: false }
    }

    #[test]
    fn strict_failure_leaves_no_output_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("model.toml");
        let output = dir.path().join("model.bngl");
        fs::write(&input, MODEL).expect("write model");

        let err = run_export(args(&input, &output, true), quiet()).expect_err("strict");
        assert!(err.to_string().contains("A() + W -> 0"));
        assert!(!output.exists());
    }

    #[test]
    fn lenient_export_writes_commented_rule() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("model.toml");
        let output = dir.path().join("model.bngl");
        fs::write(&input, MODEL).expect("write model");

        run_export(args(&input, &output, false), quiet()).expect("export");
        let bngl = fs::read_to_string(&output).expect("read output");
        assert!(bngl.contains("  A() -> 0 k0\n"));
        assert!(bngl.contains("  # A() + W -> 0 k1\n"));
        assert!(bngl.ends_with("END MODEL\n"));
    }
}
