mod export;
mod stats;

use export::run_export;
use stats::run_stats;

use std::path::Path;

use anyhow::{Context, Result, bail};
use bngl_bridge::io::{ModelDescription, read_model};
use bngl_bridge::BngEngine;

use crate::cli::Command;
use crate::display::Context as DisplayContext;
use crate::io::{read_input, stdin_is_tty};

pub fn dispatch(command: Command, ctx: DisplayContext) -> Result<()> {
    match command {
        Command::Export(args) => run_export(args, ctx),
        Command::Stats(args) => run_stats(args, ctx),
    }
}

fn read_model_description(path: Option<&Path>) -> Result<ModelDescription> {
    if path.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: bngx <COMMAND> -i <MODEL.toml> or pipe the model via stdin."
        );
    }

    let text = read_input(path)?;
    read_model(text.as_bytes()).context("Failed to read model description")
}

/// Registers the rules of `model` and seeds the species registry with the
/// species it lists.
fn build_engine(model: ModelDescription) -> Result<BngEngine> {
    let mut engine = BngEngine::new(model.data);
    engine
        .initialize()
        .context("Failed to register reaction rules")?;

    for seed in model.species {
        let id = engine.register_species(seed.cplx)?;
        if seed.instantiated {
            if let Some(species) = engine.all_species_mut().get_mut(id) {
                species.set_was_instantiated();
            }
        }
    }
    Ok(engine)
}
