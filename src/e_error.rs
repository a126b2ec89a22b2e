use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

use crate::e_normalizer::RawDiagnostic;
use crate::e_position::{Position, PositionError};

/// The underlying process failure behind a build or tool invocation error.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("`{program}` exited with {status}")]
    Status { program: String, status: ExitStatus },
}

/// Every way a single driver run can fail. None of these are recovered from;
/// the first one encountered is returned to the caller.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("build NilAway: {source}: {output:?}")]
    Build {
        #[source]
        source: ExecError,
        output: String,
    },

    #[error("run nilaway: {source}\n{output}")]
    Invocation {
        #[source]
        source: ExecError,
        output: String,
    },

    #[error("decode nilaway output: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        raw: String,
    },

    #[error("expect {analyzer:?} key in result for package {package:?}, got {entry}")]
    Schema {
        analyzer: String,
        package: String,
        entry: String,
    },

    #[error("malformed position in diagnostic {diagnostic:?}: {source}")]
    MalformedPosition {
        diagnostic: RawDiagnostic,
        #[source]
        source: PositionError,
    },

    #[error(
        "multiple diagnostics on the same line not supported at {position}, current: {existing:?}, got: {incoming:?}"
    )]
    DuplicatePosition {
        position: Position,
        existing: String,
        incoming: String,
    },

    #[error("read captured output {}: {source}", path.display())]
    Replay {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
