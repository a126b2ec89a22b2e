#![doc = include_str!("../README.md")]

// Re-export std common modules
pub mod prelude {
    pub use std::fs;
    pub use std::io;
    pub use std::path::{Path, PathBuf};
    pub use std::process::Command;
    pub use std::process::Stdio;
    pub use log::{debug, info, trace};
}

pub mod e_cli;
pub use e_cli::Cli;
pub mod e_command_builder;
pub use e_command_builder::{resolve_program, ToolCommandBuilder};
pub mod e_config;
pub use e_config::{ConfigError, DriverConfig};
pub mod e_driver;
pub use e_driver::{Driver, StandaloneDriver};
pub mod e_error;
pub use e_error::{DriverError, ExecError};
pub mod e_normalizer;
pub use e_normalizer::{decode, fold, normalize, RawDiagnostic, ToolOutput};
pub mod e_position;
pub use e_position::{Diagnostics, Position, PositionError};
pub mod e_reports;
pub mod e_runner;
pub use e_runner::{capture_combined, Invoker, ReplayInvoker, SubprocessInvoker};
