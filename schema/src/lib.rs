//! The message model produced by the protoline compiler.
//!
//! A parsed `.proto` file yields an ordered list of [SchemaFile]s, one per
//! `message` block, all sharing the package declared by the file. Code
//! generators consume this list; it is never mutated after the compiler
//! hands it out.
//!
//! ```
//! use protoline_schema::*;
//!
//! let mut message = SchemaFile::new(Some("demo".to_owned()));
//! message.name = "Point".to_owned();
//! message.fields.push(Field::new(1, "x", FieldType::Int32, Scope::Required));
//!
//! assert_eq!(message.field("x").map(|f| f.id), Some(1));
//! assert_eq!(format!("{}", message.fields[0]), "required int32 x = 1;");
//! ```

pub mod kinds;
pub mod message;

pub use kinds::*;
pub use message::*;

/// Scalar type keywords in the order they are listed by the proto2 grammar.
pub const SCALAR_TYPES: [&str; 15] = [
    "double", "float", "int32", "int64", "uint32", "uint64", "sint32", "sint64",
    "fixed32", "fixed64", "sfixed32", "sfixed64", "bool", "string", "bytes",
];

/// Field scope keywords.
pub const SCOPES: [&str; 3] = ["required", "optional", "repeated"];
