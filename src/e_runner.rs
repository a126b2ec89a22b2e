use crate::e_command_builder::{resolve_program, ToolCommandBuilder};
use crate::e_config::DriverConfig;
use crate::e_error::{DriverError, ExecError};
use crate::prelude::*;

/// Produces the analyzer's raw structured output for a target directory.
///
/// This is the seam between "how the analyzer gets run" and what is done with
/// its output; [`crate::normalize`] never sees anything but the bytes.
pub trait Invoker {
    fn invoke(&self, dir: &Path) -> Result<Vec<u8>, DriverError>;
}

/// Rebuilds the analyzer, then runs it as a child process against the target.
#[derive(Debug, Clone, Default)]
pub struct SubprocessInvoker {
    config: DriverConfig,
}

impl SubprocessInvoker {
    pub fn new(config: DriverConfig) -> Self {
        SubprocessInvoker { config }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Runs the configured build command. A stale binary is never used: if the
    /// build fails the run stops here.
    pub fn build(&self) -> Result<(), DriverError> {
        let (program, args) = self
            .config
            .build_command
            .split_first()
            .ok_or_else(|| DriverError::Build {
                source: ExecError::Spawn {
                    program: String::new(),
                    source: io::Error::new(io::ErrorKind::InvalidInput, "empty build command"),
                },
                output: String::new(),
            })?;

        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = &self.config.build_dir {
            cmd.current_dir(dir);
        }
        debug!("building analyzer: {}", describe(&cmd));

        capture_combined(&mut cmd).map_err(|(source, output)| DriverError::Build {
            source,
            output: String::from_utf8_lossy(&output).into_owned(),
        })?;
        Ok(())
    }

    /// Runs the analyzer once against `dir` and returns its combined output.
    pub fn run_tool(&self, dir: &Path) -> Result<Vec<u8>, DriverError> {
        let program = resolve_program(&self.config.tool, dir);
        let mut cmd = ToolCommandBuilder::standalone()
            .with_extra_args(&self.config.extra_args)
            .build_command(&program, dir);
        debug!("running analyzer in {}: {}", dir.display(), describe(&cmd));

        capture_combined(&mut cmd).map_err(|(source, output)| DriverError::Invocation {
            source,
            output: String::from_utf8_lossy(&output).into_owned(),
        })
    }
}

impl Invoker for SubprocessInvoker {
    fn invoke(&self, dir: &Path) -> Result<Vec<u8>, DriverError> {
        self.build()?;
        self.run_tool(dir)
    }
}

/// Serves a previously captured analyzer payload from a file instead of running
/// anything. The target directory is ignored.
#[derive(Debug, Clone)]
pub struct ReplayInvoker {
    path: PathBuf,
}

impl ReplayInvoker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ReplayInvoker { path: path.into() }
    }
}

impl Invoker for ReplayInvoker {
    fn invoke(&self, _dir: &Path) -> Result<Vec<u8>, DriverError> {
        debug!("replaying captured output from {}", self.path.display());
        fs::read(&self.path).map_err(|source| DriverError::Replay {
            path: self.path.clone(),
            source,
        })
    }
}

/// Runs `cmd` to completion and returns stdout followed by stderr.
///
/// On a spawn failure or a non-zero exit the error comes back together with
/// whatever output was captured, so callers can surface both.
pub fn capture_combined(cmd: &mut Command) -> Result<Vec<u8>, (ExecError, Vec<u8>)> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    let output = match cmd.stdin(Stdio::null()).output() {
        Ok(output) => output,
        Err(source) => return Err((ExecError::Spawn { program, source }, Vec::new())),
    };

    let mut combined = output.stdout;
    combined.extend_from_slice(&output.stderr);

    if !output.status.success() {
        return Err((
            ExecError::Status {
                program,
                status: output.status,
            },
            combined,
        ));
    }
    Ok(combined)
}

fn describe(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|arg| arg.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}
