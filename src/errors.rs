use crate::filter::FieldError;
use crate::record::RowError;
use crate::segment::NotFound;
use std::fmt::{Debug, Display};

/// An error that aborts an extraction. Every variant names the file it
/// happened in so the message can be shown to the user as is.
pub enum ExtractError {
    /// The input path does not exist or is not a file.
    FileNotFound { file: String },
    /// Reading the input or writing the output failed.
    Io { file: String, source: std::io::Error },
    /// A structural marker the extraction needs is missing.
    MarkerNotFound { file: String, reason: NotFound },
    /// A data line does not have the shape the extraction expects.
    /// `line` is 1-based.
    MalformedRow {
        file: String,
        line: usize,
        reason: String,
    },
    /// An atomic number is not in the element table.
    UnknownElementCode {
        file: String,
        line: usize,
        code: String,
    },
}

impl ExtractError {
    /// Attaches the file name and line position to a row error.
    pub fn from_row(file: &str, position: usize, error: RowError) -> Self {
        match error {
            RowError::UnknownElement(code) => {
                Self::UnknownElementCode { file: file.to_string(),
                                           line: position + 1,
                                           code }
            }
            e => Self::MalformedRow { file: file.to_string(),
                                      line: position + 1,
                                      reason: e.to_string() },
        }
    }

    /// Attaches the file name to a failed numeric field lookup.
    pub fn from_field(file: &str, error: FieldError) -> Self {
        match error {
            FieldError::Missing { block_start, marker } => {
                Self::MarkerNotFound { file: file.to_string(),
                                       reason: NotFound::InBlock { block_start,
                                                                   marker } }
            }
            FieldError::Unparsable { position,
                                     field_index,
                                     text, } => Self::MalformedRow {
                file: file.to_string(),
                line: position + 1,
                reason: format!("field {} (\"{}\") is not a number",
                                field_index + 1,
                                text),
            },
        }
    }

    /// Attaches the file name to a failed selection.
    pub fn from_selection(file: &str, reason: NotFound) -> Self {
        match reason {
            NotFound::StepCount { position, text } => {
                Self::MalformedRow { file: file.to_string(),
                                     line: position + 1,
                                     reason: format!("step count \"{}\" is not an integer",
                                                     text) }
            }
            reason => Self::MarkerNotFound { file: file.to_string(),
                                             reason },
        }
    }
}

impl Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileNotFound { file } => {
                write!(f, "Input file {} was not found.", file)
            }
            Self::Io { file, .. } => write!(f, "Could not access {}", file),
            Self::MarkerNotFound { file, reason } => {
                write!(f, "{} in {}.", reason, file)
            }
            Self::MalformedRow { file, line, reason } => {
                write!(f, "Line {} of {} is malformed: {}.", line, file, reason)
            }
            Self::UnknownElementCode { file, line, code } => write!(
                f,
                "Line {} of {} has atomic number \"{}\" which has no element symbol.",
                line, file, code
            ),
        }
    }
}

impl Debug for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Error for reading of Arguments.
pub enum ArgumentError {
    /// Passed a value that isn't parsable.
    /// Unparsable(flag, value, type)
    Unparsable(String, String, String),
}

impl Display for ArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unparsable(flag, value, typ) => write!(
                f,
                "The supplied value \"{}\" for the option \"{}\" is unparsable as {}.",
                value, flag, typ
            ),
        }
    }
}

impl Debug for ArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::error::Error for ArgumentError {}
