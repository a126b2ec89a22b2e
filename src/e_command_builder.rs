use std::path::{Path, PathBuf};
use std::process::Command;

/// Package pattern that selects every package under the working directory.
pub const ALL_PACKAGES: &str = "./...";

/// A builder that constructs the analyzer command line.
pub struct ToolCommandBuilder {
    flags: Vec<String>,
    extra: Vec<String>,
    pattern: Option<String>,
}

impl Default for ToolCommandBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolCommandBuilder {
    /// Creates a new, empty builder.
    pub fn new() -> Self {
        ToolCommandBuilder {
            flags: Vec::new(),
            extra: Vec::new(),
            pattern: None,
        }
    }

    /// The flag set used by the standalone driver: machine readable output,
    /// one line, every diagnostic reported on its own, all packages.
    pub fn standalone() -> Self {
        Self::new()
            .json(true)
            .pretty_print(false)
            // Grouped messages would merge findings and break the one-per-line comparison.
            .group_error_messages(false)
            .with_pattern(ALL_PACKAGES)
    }

    pub fn json(mut self, enabled: bool) -> Self {
        if enabled {
            self.flags.push("-json".into());
        }
        self
    }

    pub fn pretty_print(mut self, enabled: bool) -> Self {
        self.flags.push(format!("-pretty-print={}", enabled));
        self
    }

    pub fn group_error_messages(mut self, enabled: bool) -> Self {
        self.flags.push(format!("-group-error-messages={}", enabled));
        self
    }

    /// Sets the package pattern passed as the final argument.
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = Some(pattern.to_string());
        self
    }

    /// Appends extra flags. They are placed after the builder's own flags and
    /// before the package pattern.
    pub fn with_extra_args(mut self, extra: &[String]) -> Self {
        self.extra.extend(extra.iter().cloned());
        self
    }

    /// Builds the final vector of command-line arguments.
    pub fn build(self) -> Vec<String> {
        let mut args = self.flags;
        args.extend(self.extra);
        args.extend(self.pattern);
        args
    }

    /// Builds a `Command` for `program` that runs inside `dir`.
    pub fn build_command(self, program: &Path, dir: &Path) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(self.build()).current_dir(dir);
        cmd
    }
}

/// Works out which executable to run for `tool`.
///
/// Absolute paths are used as they are. A relative path with more than one
/// component is taken relative to `dir`, the directory the tool runs in, and made
/// absolute, since the child changes into `dir` before the program is looked up.
/// A bare name is looked up on `PATH`, falling back to the name itself so the
/// spawn error names what was missing.
pub fn resolve_program(tool: &Path, dir: &Path) -> PathBuf {
    if tool.is_absolute() {
        return tool.to_path_buf();
    }
    if tool.components().count() > 1 {
        let joined = dir.join(tool);
        return std::path::absolute(&joined).unwrap_or(joined);
    }
    which::which(tool).unwrap_or_else(|_| tool.to_path_buf())
}
