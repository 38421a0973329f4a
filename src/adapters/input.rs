use crate::utils::error::{PnrError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads the input file as raw lines, in order. Lines are not trimmed here.
pub fn read_codes(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PnrError::MissingInputFile {
            path: path.display().to_string(),
        },
        _ => PnrError::Io(e),
    })?;

    Ok(content.lines().map(str::to_string).collect())
}
