use crate::{
    error::{ErrorKind, SchemaValidationError},
    normalize::normalize_line,
    options::{EmptyInput, FieldIdCheck, ParseOptions},
    parser::ProtoGrammar,
    traits::LineDispatcher,
    verifier::{verify_appended_field, verify_field_ids},
};
use protoline_schema::SchemaFile;
use std::io::BufRead;
use tracing::{debug, warn};

/// Accumulates messages from a schema, one line at a time.
///
/// A builder holds the state of a single parse: the line counter, the
/// message under construction and the package shared by every message.
/// [finish](#method.finish) consumes it, so it cannot be reused.
pub struct SchemaBuilder<D: LineDispatcher = ProtoGrammar> {
    dispatcher:  D,
    options:     ParseOptions,
    line_number: usize,
    current:     SchemaFile,
    package:     Option<String>,
    finished:    Vec<SchemaFile>,
}

impl SchemaBuilder<ProtoGrammar> {
    pub fn new(options: ParseOptions) -> Self {
        Self::with_dispatcher(ProtoGrammar::new(), options)
    }
}

impl<D: LineDispatcher> SchemaBuilder<D> {
    pub fn with_dispatcher(dispatcher: D, options: ParseOptions) -> Self {
        SchemaBuilder {
            dispatcher,
            options,
            line_number: 0,
            current:     SchemaFile::new(None),
            package:     None,
            finished:    Vec::new(),
        }
    }

    /// Reads every line of `reader` and returns the finalized messages in
    /// source order. The reader is dropped on every exit path.
    pub fn build<R: BufRead>(mut self, reader: R) -> Result<Vec<SchemaFile>, SchemaValidationError> {
        for raw in reader.lines() {
            match raw {
                Ok(raw) => self.read_line(&raw)?,
                Err(e) => return Err(ErrorKind::from(e).at(self.line_number + 1)),
            }
        }
        self.finish()
    }

    /// Counts one raw line, normalizes it and applies it.
    pub fn read_line(&mut self, raw: &str) -> Result<(), SchemaValidationError> {
        self.line_number += 1;
        self.apply_line(normalize_line(raw))
    }

    /// Applies an already-normalized line at the current line number.
    /// Empty lines change nothing.
    pub fn apply_line(&mut self, line: &str) -> Result<(), SchemaValidationError> {
        if line.is_empty() {
            return Ok(());
        }

        let line_number = self.line_number;
        let before = self.current.fields.len();
        let signal = self
            .dispatcher
            .dispatch(line, line_number, &mut self.current)
            .map_err(|kind| kind.at(line_number))?;

        if self.options.field_ids == FieldIdCheck::Incremental {
            for index in before..self.current.fields.len() {
                verify_appended_field(&self.current, index).map_err(|kind| kind.at(line_number))?;
            }
        }

        if let Some(name) = signal.package_captured {
            self.capture_package(name);
        }

        if signal.closed {
            let next = SchemaFile::new(self.package.clone());
            let message = std::mem::replace(&mut self.current, next);
            debug!(line = line_number, "finalized message {}", message.name);
            self.finished.push(message);
        }
        Ok(())
    }

    fn capture_package(&mut self, name: String) {
        match self.package {
            None => {
                self.current.package = Some(name.clone());
                self.package = Some(name);
            }
            Some(ref first) if *first != name => {
                warn!(line = self.line_number, "ignoring package {}, already using {}", name, first);
            }
            Some(_) => {}
        }
    }

    /// The line most recently read, or 1 before anything was read.
    pub fn line_number(&self) -> usize {
        self.line_number.max(1)
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    /// Ends the input: checks that no message is left open, applies the
    /// empty-input policy and validates field ids of every message.
    pub fn finish(self) -> Result<Vec<SchemaFile>, SchemaValidationError> {
        let last_line = self.line_number();

        if !self.dispatcher.is_closed() {
            return Err(ErrorKind::UnclosedMessage.at(last_line));
        }
        if self.finished.is_empty() && self.options.empty_input == EmptyInput::Reject {
            return Err(ErrorKind::NoMessages.at(last_line));
        }
        verify_field_ids(&self.finished).map_err(|kind| kind.at(last_line))?;

        debug!(
            "read {} line{}, {} message{}",
            self.line_number,
            if self.line_number == 1 { "" } else { "s" },
            self.finished.len(),
            if self.finished.len() == 1 { "" } else { "s" },
        );
        Ok(self.finished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::BoundarySignal;

    /// Closes a message on `end`, captures a package on `pkg <name>`, and
    /// accepts anything else.
    #[derive(Default)]
    struct Scripted {
        seen: Vec<String>,
        open: bool,
    }

    impl LineDispatcher for Scripted {
        fn dispatch(&mut self, line: &str, _: usize, current: &mut SchemaFile) -> Result<BoundarySignal, ErrorKind> {
            self.seen.push(line.to_string());
            if let Some(name) = line.strip_prefix("pkg ") {
                return Ok(BoundarySignal::package(name));
            }
            if line == "end" {
                self.open = false;
                return Ok(BoundarySignal::closed());
            }
            self.open = true;
            current.name = line.to_string();
            Ok(BoundarySignal::default())
        }

        fn is_closed(&self) -> bool {
            !self.open
        }
    }

    #[test]
    fn test_empty_line_is_not_dispatched() {
        let mut builder = SchemaBuilder::with_dispatcher(Scripted::default(), ParseOptions::default());
        builder.read_line("   // comment").unwrap();
        builder.read_line("").unwrap();
        builder.apply_line("").unwrap();
        assert!(builder.dispatcher.seen.is_empty());
        assert_eq!(builder.current, SchemaFile::new(None));
        assert_eq!(builder.line_number(), 2);
    }

    #[test]
    fn test_package_first_wins_and_propagates() {
        let mut builder = SchemaBuilder::with_dispatcher(Scripted::default(), ParseOptions::default());
        for line in ["pkg first", "A", "end", "pkg second", "B", "end", "C", "end"] {
            builder.read_line(line).unwrap();
        }
        assert_eq!(builder.package(), Some("first"));
        let messages = builder.finish().unwrap();
        let names: Vec<_> = messages.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert!(messages.iter().all(|m| m.package.as_deref() == Some("first")));
    }

    #[test]
    fn test_package_declared_after_first_message() {
        let mut builder = SchemaBuilder::with_dispatcher(Scripted::default(), ParseOptions::default());
        for line in ["A", "end", "pkg late", "B", "end"] {
            builder.read_line(line).unwrap();
        }
        let messages = builder.finish().unwrap();
        assert_eq!(messages[0].package, None);
        assert_eq!(messages[1].package.as_deref(), Some("late"));
    }

    #[test]
    fn test_dispatcher_error_gets_line_number() {
        struct Failing;
        impl LineDispatcher for Failing {
            fn dispatch(&mut self, line: &str, _: usize, _: &mut SchemaFile) -> Result<BoundarySignal, ErrorKind> {
                Err(ErrorKind::UnrecognizedLine { text: line.into(), reason: "no".into() })
            }
            fn is_closed(&self) -> bool {
                true
            }
        }

        let err = SchemaBuilder::with_dispatcher(Failing, ParseOptions::default())
            .build("\n// c\n\nboom\n".as_bytes())
            .unwrap_err();
        assert_eq!(err.line, 4);
        assert!(matches!(err.kind, ErrorKind::UnrecognizedLine { .. }));
    }

    #[test]
    fn test_unclosed_checked_only_at_end() {
        let err = SchemaBuilder::with_dispatcher(Scripted::default(), ParseOptions::default())
            .build("A\nend\nB\n\n".as_bytes())
            .unwrap_err();
        assert_eq!(err.line, 4);
        assert!(matches!(err.kind, ErrorKind::UnclosedMessage));
    }

    #[test]
    fn test_empty_input_policy() {
        let accept = SchemaBuilder::with_dispatcher(Scripted::default(), ParseOptions::default())
            .build("\n// nothing\n".as_bytes())
            .unwrap();
        assert!(accept.is_empty());

        let options = ParseOptions::default().empty_input(EmptyInput::Reject);
        let err = SchemaBuilder::with_dispatcher(Scripted::default(), options)
            .build("\n// nothing\n".as_bytes())
            .unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(err.kind, ErrorKind::NoMessages));

        let err = SchemaBuilder::with_dispatcher(Scripted::default(), options)
            .build("".as_bytes())
            .unwrap_err();
        assert_eq!(err.line, 1);
    }
}
