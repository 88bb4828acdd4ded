use anyhow::{Context, Result};
use clap::Parser;
use dyngill_demo::{logging, pipeline, DemoArgs};

fn main() -> Result<()> {
    let args = DemoArgs::parse();
    logging::init_tracing(args.verbose);

    let outcome = pipeline::run(&args)?;

    if let Some(path) = &args.output {
        outcome
            .write_table(path)
            .with_context(|| format!("writing summary table to {}", path.display()))?;
    }

    if !args.no_plot {
        outcome
            .plot()
            .run("SIS on a random temporal network")
            .map_err(|e| anyhow::anyhow!("plot window failed: {e}"))?;
    }
    Ok(())
}
