//! Line-addressed errors and warnings produced while parsing

use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Stable machine-readable diagnostic codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    // Errors
    NoWorkoutHeader,
    NoExercises,
    NoSets,
    InvalidUnits,
    NegativeWeight,
    InvalidReps,
    InvalidTime,
    InvalidSetFormat,
    InvalidRpe,
    InvalidRest,
    InvalidTempo,
    InternalError,

    // Warnings
    HighReps,
    ShortRest,
    LongRest,
    UnknownModifier,
    MalformedModifier,
}

impl DiagnosticCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::NoWorkoutHeader => "NO_WORKOUT_HEADER",
            DiagnosticCode::NoExercises => "NO_EXERCISES",
            DiagnosticCode::NoSets => "NO_SETS",
            DiagnosticCode::InvalidUnits => "INVALID_UNITS",
            DiagnosticCode::NegativeWeight => "NEGATIVE_WEIGHT",
            DiagnosticCode::InvalidReps => "INVALID_REPS",
            DiagnosticCode::InvalidTime => "INVALID_TIME",
            DiagnosticCode::InvalidSetFormat => "INVALID_SET_FORMAT",
            DiagnosticCode::InvalidRpe => "INVALID_RPE",
            DiagnosticCode::InvalidRest => "INVALID_REST",
            DiagnosticCode::InvalidTempo => "INVALID_TEMPO",
            DiagnosticCode::InternalError => "INTERNAL_ERROR",
            DiagnosticCode::HighReps => "HIGH_REPS",
            DiagnosticCode::ShortRest => "SHORT_REST",
            DiagnosticCode::LongRest => "LONG_REST",
            DiagnosticCode::UnknownModifier => "UNKNOWN_MODIFIER",
            DiagnosticCode::MalformedModifier => "MALFORMED_MODIFIER",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DiagnosticCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// A hard error; any one of these fails the whole parse
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseError {
    /// 1-based line number
    pub line: usize,
    pub message: String,
    pub code: DiagnosticCode,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

/// A non-blocking observation about the document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseWarning {
    /// 1-based line number
    pub line: usize,
    pub message: String,
    pub code: DiagnosticCode,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

/// A failed parse: every error found plus the warnings gathered so far
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{}", summarize(.errors))]
pub struct ParseFailure {
    pub errors: Vec<ParseError>,
    pub warnings: Vec<ParseWarning>,
}

impl ParseFailure {
    /// True if any error carries the given code
    pub fn has_code(&self, code: DiagnosticCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }
}

fn summarize(errors: &[ParseError]) -> String {
    match errors {
        [] => "Failed to parse workout".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{} (and {} more)", first, rest.len()),
    }
}

/// Accumulates diagnostics in document order
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    pub errors: Vec<ParseError>,
    pub warnings: Vec<ParseWarning>,
}

impl Diagnostics {
    pub fn error(&mut self, line: usize, code: DiagnosticCode, message: impl Into<String>) {
        self.errors.push(ParseError {
            line,
            message: message.into(),
            code,
        });
    }

    pub fn warning(&mut self, line: usize, code: DiagnosticCode, message: impl Into<String>) {
        self.warnings.push(ParseWarning {
            line,
            message: message.into(),
            code,
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
