use crate::error::ErrorKind;
use protoline_schema::SchemaFile;

/// What one dispatched line did to the message structure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundarySignal {
    /// The line closed the open message; the builder should finalize it.
    pub closed: bool,
    /// The line was a package declaration naming this package.
    pub package_captured: Option<String>,
}

impl BoundarySignal {
    pub fn closed() -> Self {
        BoundarySignal { closed: true, package_captured: None }
    }

    pub fn package(name: &str) -> Self {
        BoundarySignal { closed: false, package_captured: Some(name.to_string()) }
    }
}

/// Classifies a normalized, non-empty line and applies it to the message
/// under construction.
///
/// Implementations own whatever nesting state they need between lines. They
/// must not touch `current.package`; the package travels back through the
/// returned [BoundarySignal] and the builder decides whether to keep it.
pub trait LineDispatcher {
    fn dispatch(
        &mut self,
        line:        &str,
        line_number: usize,
        current:     &mut SchemaFile,
    ) -> Result<BoundarySignal, ErrorKind>;

    /// True when no message or nested block is left open. Queried once,
    /// after the last line.
    fn is_closed(&self) -> bool;
}
