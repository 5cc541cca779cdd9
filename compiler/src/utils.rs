use crate::error::ProtoError;
use std::path::Path;

/// The extension every schema file must carry.
pub const SCHEMA_EXTENSION: &str = "proto";

/// JSON-quotes `text` for use in error messages.
pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
}

/// Confirms `path` names an existing regular file ending in `.proto`.
///
/// Runs before the builder opens anything, so a bad path is reported as
/// [ProtoError::InvalidPath] rather than as an unreadable source.
pub fn check_schema_path(path: &Path) -> Result<(), ProtoError> {
    let invalid = |reason: &str| ProtoError::InvalidPath {
        path:   path.to_path_buf(),
        reason: reason.to_string(),
    };

    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext == SCHEMA_EXTENSION => {}
        _ => return Err(invalid("expected a .proto file")),
    }
    if !path.exists() {
        return Err(invalid("file not found"));
    }
    if !path.is_file() {
        return Err(invalid("not a regular file"));
    }
    Ok(())
}
