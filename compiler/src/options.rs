/// When duplicate field ids are detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldIdCheck {
    /// As each field is attached; the error names the declaring line.
    #[default]
    Incremental,
    /// In one pass after the whole file is read; the error names the last
    /// line of the file.
    Deferred,
}

/// What a file without any `message` block produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyInput {
    /// An empty list of messages.
    #[default]
    Accept,
    /// [ErrorKind::NoMessages](crate::error::ErrorKind::NoMessages).
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub field_ids:   FieldIdCheck,
    pub empty_input: EmptyInput,
}

impl ParseOptions {
    pub fn field_ids(mut self, check: FieldIdCheck) -> Self {
        self.field_ids = check;
        self
    }

    pub fn empty_input(mut self, policy: EmptyInput) -> Self {
        self.empty_input = policy;
        self
    }
}
