#![allow(dead_code)]
use std::fs;
use std::io::Result as IoResult;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

use nilaway_e::DriverConfig;

/// A scratch Go module plus a fake analyzer binary living next to it.
pub struct TestProject {
    /// The temporary directory. When this is dropped, the directory and its contents are removed.
    pub temp_dir: TempDir,
    /// The project the analyzer is run in.
    pub root: PathBuf,
    /// Where fake binaries and their side-effect files are written.
    pub bin: PathBuf,
}

impl TestProject {
    pub fn new(project_name: &str) -> IoResult<Self> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path().join(project_name);
        let bin = temp_dir.path().join("bin");
        fs::create_dir_all(&root)?;
        fs::create_dir_all(&bin)?;
        fs::write(
            root.join("go.mod"),
            format!("module example.com/{}\n\ngo 1.21\n", project_name),
        )?;
        Ok(TestProject {
            temp_dir,
            root,
            bin,
        })
    }

    /// Returns a reference to the project root.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Writes an executable shell script under `bin/` and returns its path.
    #[cfg(unix)]
    pub fn write_script(&self, name: &str, body: &str) -> IoResult<PathBuf> {
        use std::os::unix::fs::PermissionsExt;
        let path = self.bin.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body))?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        Ok(path)
    }

    /// A fake analyzer that records its arguments and working directory, then
    /// prints `payload` to stdout.
    #[cfg(unix)]
    pub fn fake_nilaway(&self, payload: &str) -> IoResult<PathBuf> {
        let payload_file = self.bin.join("payload.json");
        fs::write(&payload_file, payload)?;
        self.write_script(
            "nilaway",
            &format!(
                "echo \"$@\" > '{args}'\npwd > '{cwd}'\ncat '{payload}'",
                args = self.args_file().display(),
                cwd = self.cwd_file().display(),
                payload = payload_file.display(),
            ),
        )
    }

    /// A fake analyzer that prints `stderr` and exits with status 1.
    #[cfg(unix)]
    pub fn failing_nilaway(&self, stderr: &str) -> IoResult<PathBuf> {
        self.write_script("nilaway", &format!("echo '{}' >&2\nexit 1", stderr))
    }

    pub fn args_file(&self) -> PathBuf {
        self.bin.join("args.txt")
    }

    pub fn cwd_file(&self) -> PathBuf {
        self.bin.join("cwd.txt")
    }

    /// A driver config whose build always succeeds and whose tool is `tool`.
    pub fn config(&self, tool: &Path) -> DriverConfig {
        DriverConfig {
            build_command: vec!["true".to_string()],
            tool: tool.to_path_buf(),
            ..DriverConfig::default()
        }
    }
}
