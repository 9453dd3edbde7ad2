use std::fmt;
use std::io;
use std::path::Path;

use crate::error::ConvertError;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        WriteZero => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn convert_cli_error(context: &str, err: ConvertError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for a conversion error variant.
pub fn cli_hint(err: &ConvertError) -> String {
    use ConvertError::*;
    match err {
        NotFound(path) => format!(
            "input file '{}' not found. Place the idiom list there or pass its path.",
            path.display()
        ),
        Parse { path, source } => format!(
            "'{}' is not a JSON array of {{\"word\": ...}} records ({source}).",
            path.display()
        ),
        Write { path, source } => format_io_error("writing output file", path, source),
        Serialization(e) => format!("{e}. This is a bug."),
        Io(io) => format!("{io}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn not_found_hint_names_the_path() {
        let err = ConvertError::NotFound(PathBuf::from("idiom.json"));
        let hint = cli_hint(&err);
        assert!(hint.contains("idiom.json"));
        assert!(hint.contains("not found"));
    }

    #[test]
    fn parse_hint_describes_the_expected_shape() {
        let source = serde_json::from_str::<Vec<serde_json::Value>>("{ bad").unwrap_err();
        let err = ConvertError::Parse {
            path: PathBuf::from("idiom.json"),
            source,
        };
        assert!(cli_hint(&err).contains("JSON array"));
    }
}
