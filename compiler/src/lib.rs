//! protoline-compiler
//!
//! This crate implements:
//!  1) A quote-aware line normalizer (`//` comments, trailing whitespace),
//!  2) The `LineDispatcher` contract and the `ProtoGrammar` rules behind it,
//!  3) `SchemaBuilder`, which accumulates messages, shares the package and
//!     checks that the last message was closed,
//!  4) A field-id verifier (unique ids per message),
//!  5) Error types (`SchemaValidationError`, `ProtoError`) and `ParseOptions`.

pub mod error;
pub mod options;
pub mod utils;
pub mod normalize;
pub mod traits;
pub mod parser;
pub mod verifier;
pub mod builder;
pub mod compiler;

pub use builder::SchemaBuilder;
pub use compiler::{compile_schema, load_schema, to_json};
pub use error::{ErrorKind, ProtoError, SchemaValidationError};
pub use options::{EmptyInput, FieldIdCheck, ParseOptions};
pub use protoline_schema as schema;
