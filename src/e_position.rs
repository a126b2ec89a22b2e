use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

/// The normalized result of one driver run: at most one message per source line.
pub type Diagnostics = BTreeMap<Position, String>;

/// A source location reported by the analyzer, reduced to file and line.
///
/// The filename is kept exactly as the tool reported it; it is not resolved
/// against the project root.
///
/// # Example
/// ```
/// use nilaway_e::Position;
///
/// let pos = Position::from_posn("x.go:10:5").unwrap();
/// assert_eq!(pos, Position::new("x.go", 10));
/// assert_eq!(pos.to_string(), "x.go:10");
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub filename: String,
    pub line: u32,
}

/// Why a `file:line:col` string could not be turned into a [`Position`].
#[derive(Debug, Error)]
pub enum PositionError {
    #[error("expected 3 colon-separated parts, got {0}")]
    SegmentCount(usize),
    #[error("convert line number {value:?}: {source}")]
    Line {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl Position {
    pub fn new(filename: impl Into<String>, line: u32) -> Self {
        Position {
            filename: filename.into(),
            line,
        }
    }

    /// Parses the analyzer's `file:line:col` form. The column is dropped.
    pub fn from_posn(posn: &str) -> Result<Self, PositionError> {
        let parts: Vec<&str> = posn.split(':').collect();
        let [filename, line, _column] = parts.as_slice() else {
            return Err(PositionError::SegmentCount(parts.len()));
        };
        let line = line.parse::<u32>().map_err(|source| PositionError::Line {
            value: (*line).to_string(),
            source,
        })?;
        Ok(Position::new(*filename, line))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.filename, self.line)
    }
}
