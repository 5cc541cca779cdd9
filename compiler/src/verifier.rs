use crate::error::ErrorKind;
use protoline_schema::{Field, SchemaFile};
use std::collections::HashSet;

/// Checks that no message reuses a field id. Messages are independent of
/// each other; enum values are not field ids and are not checked.
///
/// Fails on the first repeat, naming the later of the two fields.
pub fn verify_field_ids(messages: &[SchemaFile]) -> Result<(), ErrorKind> {
    for message in messages {
        verify_message_field_ids(message)?;
    }
    Ok(())
}

pub fn verify_message_field_ids(message: &SchemaFile) -> Result<(), ErrorKind> {
    let mut seen = HashSet::new();
    for field in &message.fields {
        if !seen.insert(field.id) {
            return Err(duplicate(message, field));
        }
    }
    Ok(())
}

/// Checks only the field at `index` against the fields declared before it.
pub fn verify_appended_field(message: &SchemaFile, index: usize) -> Result<(), ErrorKind> {
    let Some(field) = message.fields.get(index) else {
        return Ok(());
    };
    if message.fields[..index].iter().any(|f| f.id == field.id) {
        return Err(duplicate(message, field));
    }
    Ok(())
}

fn duplicate(message: &SchemaFile, field: &Field) -> ErrorKind {
    ErrorKind::DuplicateFieldId {
        message: message.name.clone(),
        field:   field.name.clone(),
        id:      field.id,
    }
}
