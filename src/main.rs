//! # nilaway-e
//!
//! Builds NilAway, runs it on a test project and prints what it reported,
//! one diagnostic per `file:line`.
//!
//! ```sh
//! nilaway-e testdata/integration
//! nilaway-e --replay captured.json --json .
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use nilaway_e::e_reports::{render_json, render_text};
use nilaway_e::{Cli, Driver, DriverConfig, ReplayInvoker, StandaloneDriver};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => DriverConfig::load(path)?,
        None => DriverConfig::default(),
    };
    let config = cli.apply_overrides(base);
    config.validate()?;

    let result = match &cli.replay {
        Some(path) => StandaloneDriver::with_invoker(ReplayInvoker::new(path), &config.analyzer)
            .run(&cli.dir),
        None => StandaloneDriver::from_config(config).run(&cli.dir),
    };
    let diagnostics = result
        .inspect_err(|err| error!("driver failed: {}", err))
        .with_context(|| format!("collect diagnostics for {}", cli.dir.display()))?;

    if cli.json {
        println!("{}", render_json(&diagnostics)?);
    } else {
        print!("{}", render_text(&diagnostics));
    }
    Ok(())
}
