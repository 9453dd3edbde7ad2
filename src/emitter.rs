use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::ConvertError;
use crate::index::CharIndex;

/// Name of the emitted JavaScript constant.
pub const DICTIONARY_CONST: &str = "IDIOM_DICTIONARY";

/// Render the index as a single JavaScript statement.
///
/// The mapping is pretty-printed JSON with two-space indentation. Han
/// characters are written literally, never `\u` escaped.
pub fn render_dictionary(index: &CharIndex) -> Result<String, ConvertError> {
    let json = serde_json::to_string_pretty(index).map_err(ConvertError::Serialization)?;
    Ok(format!("const {DICTIONARY_CONST} = {json};"))
}

/// Write the rendered dictionary to `path`.
///
/// The content is staged in a temp file next to the destination and then
/// persisted over it, so a failed run never leaves a partial output file.
pub fn write_dictionary(index: &CharIndex, path: &Path) -> Result<(), ConvertError> {
    let content = render_dictionary(index)?;
    let write_err = |e: std::io::Error| ConvertError::Write {
        path: path.to_path_buf(),
        source: e,
    };

    // A bare file name has an empty parent; stage in the working directory.
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(parent).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
