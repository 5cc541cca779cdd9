use crate::kinds::{FieldType, Scope};
use serde::Serialize;
use std::fmt;

/// One `message` block of a schema file.
///
/// Created empty when the `message` line is seen, filled in by the lines of
/// its body and finalized by the closing brace.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SchemaFile {
    pub name:    String,
    pub package: Option<String>,
    pub line:    usize,
    pub fields:  Vec<Field>,
    pub enums:   Vec<EnumDef>,
}

impl SchemaFile {
    /// An empty message seeded with the package shared by the whole file.
    pub fn new(package: Option<String>) -> SchemaFile {
        SchemaFile {
            package,
            ..SchemaFile::default()
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_by_id(&self, id: u32) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn enum_def(&self, name: &str) -> Option<&EnumDef> {
        self.enums.iter().find(|e| e.name == name)
    }
}

/// A single `<scope> <type> <name> = <id>;` member of a message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub id:      u32,
    pub name:    String,
    #[serde(rename = "type")]
    pub type_:   FieldType,
    pub scope:   Scope,
    /// The literal of a `[default = ...]` option, verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// 1-based line of the declaration, 0 when built by hand.
    pub line:    usize,
}

impl Field {
    pub fn new(id: u32, name: &str, type_: FieldType, scope: Scope) -> Field {
        Field {
            id,
            name: name.to_string(),
            type_,
            scope,
            default: None,
            line: 0,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.scope, self.type_, self.name, self.id)?;
        if let Some(ref default) = self.default {
            write!(f, " [default = {}]", default)?;
        }
        f.write_str(";")
    }
}

/// An `enum` nested in a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnumDef {
    pub name:   String,
    pub values: Vec<EnumValue>,
}

impl EnumDef {
    pub fn new(name: &str) -> EnumDef {
        EnumDef {
            name:   name.to_string(),
            values: Vec::new(),
        }
    }

    pub fn value_of(&self, label: &str) -> Option<i32> {
        self.values.iter().find(|v| v.label == label).map(|v| v.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumValue {
    pub label: String,
    pub value: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_carries_package() {
        let message = SchemaFile::new(Some("demo".into()));
        assert_eq!(message.package.as_deref(), Some("demo"));
        assert!(message.name.is_empty());
        assert!(message.fields.is_empty());
        assert!(message.enums.is_empty());
    }

    #[test]
    fn test_field_display_with_default() {
        let mut field = Field::new(4, "label", FieldType::String, Scope::Optional);
        field.default = Some("\"none\"".into());
        assert_eq!(field.to_string(), "optional string label = 4 [default = \"none\"];");
    }

    #[test]
    fn test_lookups() {
        let mut message = SchemaFile::new(None);
        message.fields.push(Field::new(1, "a", FieldType::Int32, Scope::Required));
        message.fields.push(Field::new(2, "b", FieldType::Reference("Kind".into()), Scope::Repeated));
        let mut kind = EnumDef::new("Kind");
        kind.values.push(EnumValue { label: "SMALL".into(), value: 0 });
        message.enums.push(kind);

        assert_eq!(message.field_by_id(2).map(|f| f.name.as_str()), Some("b"));
        assert!(message.field("c").is_none());
        assert_eq!(message.enum_def("Kind").and_then(|e| e.value_of("SMALL")), Some(0));
    }

    #[test]
    fn test_serialize_field_uses_type_key() {
        let field = Field::new(1, "a", FieldType::Int32, Scope::Required);
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "int32");
        assert_eq!(json["scope"], "required");
        assert!(json.get("default").is_none());
    }
}
