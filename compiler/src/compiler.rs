use crate::{
    builder::SchemaBuilder,
    error::{ErrorKind, ProtoError, SchemaValidationError},
    options::ParseOptions,
    utils::check_schema_path,
};
use protoline_schema::SchemaFile;
use std::{fs::File, io::BufReader, path::Path};
use tracing::info;

/// Parse schema text held in memory.
pub fn compile_schema(text: &str, options: ParseOptions) -> Result<Vec<SchemaFile>, SchemaValidationError> {
    SchemaBuilder::new(options).build(text.as_bytes())
}

/// Check `path`, then read it line by line into validated messages.
///
/// Returns either every message of the file or an error; never a partial
/// list.
pub fn load_schema(path: &Path, options: ParseOptions) -> Result<Vec<SchemaFile>, ProtoError> {
    check_schema_path(path)?;
    info!("Reading schema {}", path.display());

    let file = File::open(path).map_err(|e| ErrorKind::from(e).at(1))?;
    let messages = SchemaBuilder::new(options).build(BufReader::new(file))?;

    info!("Read {} message(s) from {}", messages.len(), path.display());
    Ok(messages)
}

/// Serialize validated messages for a code generator.
pub fn to_json(messages: &[SchemaFile]) -> Result<String, ProtoError> {
    Ok(serde_json::to_string_pretty(messages)?)
}
