use anyhow::{Context, Result};

use super::{build_engine, read_model_description};
use crate::cli::StatsArgs;
use crate::display::{Context as DisplayContext, print_stats};

pub fn run_stats(args: StatsArgs, ctx: DisplayContext) -> Result<()> {
    let model = read_model_description(args.io.input.as_deref())?;
    let engine = build_engine(model)?;
    let report = engine
        .stats_report()
        .context("Failed to compute statistics")?;

    if ctx.interactive {
        print_stats(&report);
    }
    println!("{report}");

    Ok(())
}
