use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

use crate::error::ConvertError;

/// Read `path` and parse it as a JSON array of idiom records.
///
/// A missing file maps to [`ConvertError::NotFound`]; invalid JSON or a
/// top-level value that is not an array maps to [`ConvertError::Parse`].
/// Elements are returned unvalidated; the indexer decides which of them
/// form usable records.
pub fn load_idioms(path: &Path) -> Result<Vec<Value>, ConvertError> {
    let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConvertError::NotFound(path.to_path_buf()),
        _ => ConvertError::Io(e),
    })?;
    serde_json::from_str(&raw).map_err(|e| ConvertError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
