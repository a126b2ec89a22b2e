use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::e_error::DriverError;
use crate::e_position::{Diagnostics, Position};
use crate::prelude::*;

/// One finding as the analyzer writes it in `-json` mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDiagnostic {
    /// `file:line:col`
    pub posn: String,
    pub message: String,
}

/// package id -> analyzer name -> diagnostics.
///
/// A `null` list is accepted and means the analyzer found nothing in that
/// package; only a missing analyzer key is an error.
pub type ToolOutput = BTreeMap<String, BTreeMap<String, Option<Vec<RawDiagnostic>>>>;

/// Decodes the analyzer's raw output.
pub fn decode(raw: &[u8]) -> Result<ToolOutput, DriverError> {
    serde_json::from_slice(raw).map_err(|source| DriverError::Decode {
        source,
        raw: String::from_utf8_lossy(raw).into_owned(),
    })
}

/// Decodes and folds the analyzer's raw output into one message per line.
///
/// # Example
/// ```
/// use nilaway_e::{normalize, Position};
///
/// let raw = br#"{"pkg/a": {"nilaway": [{"posn":"x.go:10:5","message":"m1"}]}}"#;
/// let diagnostics = normalize(raw, "nilaway").unwrap();
/// assert_eq!(diagnostics[&Position::new("x.go", 10)], "m1");
/// ```
pub fn normalize(raw: &[u8], analyzer: &str) -> Result<Diagnostics, DriverError> {
    fold(decode(raw)?, analyzer)
}

/// Folds decoded output into the result mapping.
///
/// Uniqueness is checked across all packages together, not per package. Nothing
/// is returned on failure; the partially built mapping is dropped.
pub fn fold(output: ToolOutput, analyzer: &str) -> Result<Diagnostics, DriverError> {
    debug!("normalizing {} package entries", output.len());
    let mut collected = Diagnostics::new();

    for (package, mut entry) in output {
        let Some(diagnostics) = entry.remove(analyzer) else {
            return Err(DriverError::Schema {
                analyzer: analyzer.to_string(),
                package,
                entry: format!("{:?}", entry),
            });
        };
        let diagnostics = diagnostics.unwrap_or_default();
        trace!("{}: {} diagnostics", package, diagnostics.len());

        for diagnostic in diagnostics {
            let position = match Position::from_posn(&diagnostic.posn) {
                Ok(position) => position,
                Err(source) => {
                    return Err(DriverError::MalformedPosition { diagnostic, source });
                }
            };
            match collected.entry(position) {
                Entry::Occupied(existing) => {
                    return Err(DriverError::DuplicatePosition {
                        position: existing.key().clone(),
                        existing: existing.get().clone(),
                        incoming: diagnostic.message,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(diagnostic.message);
                }
            }
        }
    }

    debug!("collected {} diagnostics", collected.len());
    Ok(collected)
}
