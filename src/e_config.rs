use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("build_command must name a program")]
    EmptyBuildCommand,
}

/// Settings for a [`crate::SubprocessInvoker`] / [`crate::StandaloneDriver`].
///
/// Every key is optional in the TOML form:
///
/// ```toml
/// build_command = ["make", "build"]
/// build_dir = "/src/nilaway"
/// tool = "../../bin/nilaway"
/// analyzer = "nilaway"
/// extra_args = []
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriverConfig {
    /// Program and arguments that rebuild the analyzer before each run.
    pub build_command: Vec<String>,
    /// Where the build runs. `None` means the current working directory.
    pub build_dir: Option<PathBuf>,
    /// The analyzer binary. Relative paths are resolved against the target directory.
    pub tool: PathBuf,
    /// Key under each package entry that holds the analyzer's diagnostics.
    pub analyzer: String,
    /// Additional flags passed to the analyzer ahead of the package pattern.
    pub extra_args: Vec<String>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            build_command: vec!["make".to_string(), "build".to_string()],
            build_dir: None,
            tool: PathBuf::from("../../bin/nilaway"),
            analyzer: "nilaway".to_string(),
            extra_args: Vec::new(),
        }
    }
}

impl DriverConfig {
    /// Loads a config file. Keys that are absent keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: DriverConfig =
            toml::from_str(contents).map_err(|source| ConfigError::Parse {
                path: PathBuf::new(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.build_command.first() {
            Some(program) if !program.trim().is_empty() => Ok(()),
            _ => Err(ConfigError::EmptyBuildCommand),
        }
    }
}
