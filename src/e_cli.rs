use clap::Parser;
use std::path::PathBuf;

use crate::e_config::DriverConfig;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Run NilAway as a standalone binary on a test project and print one diagnostic per line.",
    long_about = None
)]
pub struct Cli {
    /// The project directory NilAway is run in.
    pub dir: PathBuf,

    #[arg(long, short = 'c', help = "Read driver settings from a TOML file.")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Path to the NilAway binary (relative paths are taken from DIR).")]
    pub tool: Option<PathBuf>,

    #[arg(long, help = "Analyzer key to read from each package entry.")]
    pub analyzer: Option<String>,

    #[arg(long, help = "Directory the build command runs in.")]
    pub build_dir: Option<PathBuf>,

    /// Repeat once per word, e.g. `--build-command make --build-command build`.
    #[arg(
        long = "build-command",
        allow_hyphen_values = true,
        help = "Program and arguments used to rebuild NilAway."
    )]
    pub build_command: Vec<String>,

    #[arg(
        long,
        help = "Normalize a previously captured JSON payload instead of building and running NilAway."
    )]
    pub replay: Option<PathBuf>,

    #[arg(long, help = "Print the collected diagnostics as JSON.")]
    pub json: bool,
}

impl Cli {
    /// Applies command-line overrides on top of `base`.
    pub fn apply_overrides(&self, mut base: DriverConfig) -> DriverConfig {
        if let Some(tool) = &self.tool {
            base.tool = tool.clone();
        }
        if let Some(analyzer) = &self.analyzer {
            base.analyzer = analyzer.clone();
        }
        if let Some(build_dir) = &self.build_dir {
            base.build_dir = Some(build_dir.clone());
        }
        if !self.build_command.is_empty() {
            base.build_command = self.build_command.clone();
        }
        base
    }
}
