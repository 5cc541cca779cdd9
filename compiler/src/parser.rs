use crate::{
    error::ErrorKind,
    traits::{BoundarySignal, LineDispatcher},
    utils::quote,
};
use lazy_static::lazy_static;
use protoline_schema::{EnumDef, EnumValue, Field, FieldType, SchemaFile, Scope};
use regex::Regex;
use tracing::debug;

lazy_static! {
    static ref PACKAGE:       Regex = Regex::new(r"^\s*package\s+([A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*)\s*;$").unwrap();
    static ref MESSAGE_START: Regex = Regex::new(r"^\s*message\s+([A-Za-z_][A-Za-z0-9_]*)\s*\{$").unwrap();
    static ref ENUM_START:    Regex = Regex::new(r"^\s*enum\s+([A-Za-z_][A-Za-z0-9_]*)\s*\{$").unwrap();
    static ref ENUM_VALUE:    Regex = Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(-?\d+)\s*;$").unwrap();
    static ref FIELD:         Regex = Regex::new(r"^\s*(required|optional|repeated)\s+(\.?[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*)\s+([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(\d+)\s*(?:\[\s*default\s*=\s*(.+?)\s*\]\s*)?;$").unwrap();
    static ref SCOPE_PREFIX:  Regex = Regex::new(r"^\s*(required|optional|repeated)\b").unwrap();
    static ref OPTION:        Regex = Regex::new(r"^\s*option\s+([A-Za-z_(][A-Za-z0-9_.()]*)\s*=\s*(.+?)\s*;$").unwrap();
    static ref BLOCK_END:     Regex = Regex::new(r"^\s*\}$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Open {
    Nothing,
    Message,
    Enum,
}

/// The line grammar of a proto2-style schema: a package line, `message`
/// blocks holding field declarations and nested `enum` blocks, and `option`
/// lines, one statement per line.
#[derive(Debug)]
pub struct ProtoGrammar {
    open: Open,
}

impl Default for ProtoGrammar {
    fn default() -> Self {
        ProtoGrammar { open: Open::Nothing }
    }
}

impl ProtoGrammar {
    pub fn new() -> Self {
        Self::default()
    }

    fn open_message(&mut self, name: &str, line_number: usize, current: &mut SchemaFile) -> Result<BoundarySignal, ErrorKind> {
        if self.open != Open::Nothing {
            return Err(unrecognized(name, "nested messages are not supported"));
        }
        debug!(line = line_number, "message {}", name);
        current.name = name.to_string();
        current.line = line_number;
        self.open = Open::Message;
        Ok(BoundarySignal::default())
    }

    fn open_enum(&mut self, name: &str, current: &mut SchemaFile) -> Result<BoundarySignal, ErrorKind> {
        match self.open {
            Open::Message => {
                debug!("enum {} in message {}", name, current.name);
                current.enums.push(EnumDef::new(name));
                self.open = Open::Enum;
                Ok(BoundarySignal::default())
            }
            Open::Enum    => Err(unrecognized(name, "nested enums are not supported")),
            Open::Nothing => Err(unrecognized(name, "enum declared outside of a message")),
        }
    }

    fn close_block(&mut self, current: &SchemaFile) -> Result<BoundarySignal, ErrorKind> {
        match self.open {
            Open::Enum => {
                self.open = Open::Message;
                Ok(BoundarySignal::default())
            }
            Open::Message => {
                debug!("end of message {} ({} fields)", current.name, current.fields.len());
                self.open = Open::Nothing;
                Ok(BoundarySignal::closed())
            }
            Open::Nothing => Err(unrecognized("}", "closing brace without an open message")),
        }
    }
}

impl LineDispatcher for ProtoGrammar {
    fn dispatch(
        &mut self,
        line:        &str,
        line_number: usize,
        current:     &mut SchemaFile,
    ) -> Result<BoundarySignal, ErrorKind> {
        if BLOCK_END.is_match(line) {
            return self.close_block(current);
        }

        if let Some(caps) = PACKAGE.captures(line) {
            if self.open == Open::Enum {
                return Err(unrecognized(line, "package declared inside an enum"));
            }
            debug!(line = line_number, "package {}", &caps[1]);
            return Ok(BoundarySignal::package(&caps[1]));
        }

        if let Some(caps) = MESSAGE_START.captures(line) {
            return self.open_message(&caps[1], line_number, current);
        }

        if let Some(caps) = ENUM_START.captures(line) {
            return self.open_enum(&caps[1], current);
        }

        if let Some(caps) = FIELD.captures(line) {
            if self.open != Open::Message {
                return Err(unrecognized(line, "field declared outside of a message body"));
            }
            let scope: Scope = caps[1].parse().map_err(|e: String| unrecognized(line, &e))?;
            let id = parse_field_id(line, &caps[4])?;
            let mut field = Field::new(id, &caps[3], FieldType::from_token(&caps[2]), scope);
            field.default = caps.get(5).map(|m| m.as_str().to_string());
            field.line = line_number;
            current.fields.push(field);
            return Ok(BoundarySignal::default());
        }

        if SCOPE_PREFIX.is_match(line) {
            return Err(unrecognized(line, "expected <scope> <type> <name> = <id>;"));
        }

        if let Some(caps) = ENUM_VALUE.captures(line) {
            if self.open != Open::Enum {
                return Err(unrecognized(line, "enum value outside of an enum"));
            }
            let value = caps[2]
                .parse::<i32>()
                .map_err(|_| unrecognized(line, "enum value out of range"))?;
            let enum_def = current
                .enums
                .last_mut()
                .ok_or_else(|| unrecognized(line, "enum value outside of an enum"))?;
            enum_def.values.push(EnumValue {
                label: caps[1].to_string(),
                value,
            });
            return Ok(BoundarySignal::default());
        }

        if let Some(caps) = OPTION.captures(line) {
            if self.open == Open::Enum {
                return Err(unrecognized(line, "options are not supported inside an enum"));
            }
            debug!(line = line_number, "ignoring option {} = {}", &caps[1], &caps[2]);
            return Ok(BoundarySignal::default());
        }

        Err(unrecognized(line, "not a recognized statement"))
    }

    fn is_closed(&self) -> bool {
        self.open == Open::Nothing
    }
}

fn parse_field_id(line: &str, digits: &str) -> Result<u32, ErrorKind> {
    match digits.parse::<u32>() {
        Ok(0)   => Err(unrecognized(line, "field id must be a positive integer")),
        Ok(id)  => Ok(id),
        Err(_)  => Err(unrecognized(line, "field id out of range")),
    }
}

fn unrecognized(text: &str, reason: &str) -> ErrorKind {
    ErrorKind::UnrecognizedLine {
        text:   quote(text.trim()),
        reason: reason.to_string(),
    }
}
