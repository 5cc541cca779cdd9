use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The qualifier in front of every field declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Required,
    Optional,
    Repeated,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Required => "required",
            Scope::Optional => "optional",
            Scope::Repeated => "repeated",
        }
    }
}

impl FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "required" => Ok(Scope::Required),
            "optional" => Ok(Scope::Optional),
            "repeated" => Ok(Scope::Repeated),
            other      => Err(format!("unknown field scope \"{}\"", other)),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The declared type of a field.
///
/// Anything that is not one of the scalar keywords is kept as a
/// [Reference](#variant.Reference) to a message or enum by name. References
/// are not resolved; a generator that cares must look them up itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Double,
    Float,
    Int32,
    Int64,
    UInt32,
    UInt64,
    SInt32,
    SInt64,
    Fixed32,
    Fixed64,
    SFixed32,
    SFixed64,
    Bool,
    String,
    Bytes,
    Reference(String),
}

impl FieldType {
    /// Maps a type token to a `FieldType`. Never fails: unknown tokens are
    /// references.
    pub fn from_token(token: &str) -> FieldType {
        match token {
            "double"   => FieldType::Double,
            "float"    => FieldType::Float,
            "int32"    => FieldType::Int32,
            "int64"    => FieldType::Int64,
            "uint32"   => FieldType::UInt32,
            "uint64"   => FieldType::UInt64,
            "sint32"   => FieldType::SInt32,
            "sint64"   => FieldType::SInt64,
            "fixed32"  => FieldType::Fixed32,
            "fixed64"  => FieldType::Fixed64,
            "sfixed32" => FieldType::SFixed32,
            "sfixed64" => FieldType::SFixed64,
            "bool"     => FieldType::Bool,
            "string"   => FieldType::String,
            "bytes"    => FieldType::Bytes,
            other      => FieldType::Reference(other.to_string()),
        }
    }

    /// The token this type is written as in a schema file.
    pub fn token(&self) -> &str {
        match self {
            FieldType::Double       => "double",
            FieldType::Float        => "float",
            FieldType::Int32        => "int32",
            FieldType::Int64        => "int64",
            FieldType::UInt32       => "uint32",
            FieldType::UInt64       => "uint64",
            FieldType::SInt32       => "sint32",
            FieldType::SInt64       => "sint64",
            FieldType::Fixed32      => "fixed32",
            FieldType::Fixed64      => "fixed64",
            FieldType::SFixed32     => "sfixed32",
            FieldType::SFixed64     => "sfixed64",
            FieldType::Bool         => "bool",
            FieldType::String       => "string",
            FieldType::Bytes        => "bytes",
            FieldType::Reference(n) => n,
        }
    }

    pub fn is_scalar(&self) -> bool {
        !matches!(self, FieldType::Reference(_))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SCALAR_TYPES;

    #[test]
    fn test_scalar_tokens_map_back_to_themselves() {
        for token in SCALAR_TYPES {
            let ty = FieldType::from_token(token);
            assert!(ty.is_scalar(), "{} should be scalar", token);
            assert_eq!(ty.token(), token);
        }
    }

    #[test]
    fn test_unknown_type_is_reference() {
        let ty = FieldType::from_token("Outer.Color");
        assert_eq!(ty, FieldType::Reference("Outer.Color".into()));
        assert!(!ty.is_scalar());
        assert_eq!(ty.to_string(), "Outer.Color");
    }

    #[test]
    fn test_scope_parse() {
        assert_eq!("repeated".parse::<Scope>(), Ok(Scope::Repeated));
        assert!("required ".parse::<Scope>().is_err());
        assert!("Optional".parse::<Scope>().is_err());
    }

    #[test]
    fn test_serialized_names() {
        let json = serde_json::to_string(&(Scope::Optional, FieldType::UInt64)).unwrap();
        assert_eq!(json, r#"["optional","uint64"]"#);
    }
}
