//! # LMWF Parser
//!
//! Turns a LiftMark Workout Format document into a [`WorkoutTemplate`].
//!
//! ## Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Classify | `lines` | one tagged [`Line`] per physical line |
//! | Locate | `structure` | workout header and exercise header level |
//! | Assemble | `assembler` | flat, ordered exercises with parent links |
//! | Sets | `sets` | targets and modifiers per list item |
//! | Build | here | template + warnings, or errors + warnings |
//!
//! ## Example document
//!
//! ```text
//! # Push Day
//! @tags: strength, upper
//! @units: lbs
//!
//! ## Bench Press
//! @type: barbell
//! - 135 x 5 @rest: 90s
//! - 185 x 5 @rpe: 8
//!
//! ## Superset
//! ### Dips
//! - bw x 10
//! ### Plank
//! - 60s
//! ```
//!
//! Any hard error fails the whole parse; there is no partial template.

use std::panic::{self, AssertUnwindSafe};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{HashIdGenerator, IdGenerator, TemplateId, WorkoutTemplate};

/// Compiles a regex once and hands out a `&'static Regex` afterwards.
macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}

mod assembler;
mod diagnostics;
mod lines;
mod sets;
mod structure;

pub use diagnostics::{DiagnosticCode, ParseError, ParseFailure, ParseWarning};
pub use lines::{classify, Line, LineKind};

use assembler::ParserState;
use diagnostics::Diagnostics;

/// Thresholds for non-blocking warnings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Rep counts above this produce a warning
    pub rep_warning_threshold: u32,

    /// Rest periods below this (seconds) produce a warning
    pub min_rest_seconds: u32,

    /// Rest periods above this (seconds) produce a warning
    pub max_rest_seconds: u32,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            rep_warning_threshold: 100,
            min_rest_seconds: 10,
            max_rest_seconds: 600,
        }
    }
}

/// A successful parse
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedWorkout {
    pub template: WorkoutTemplate,
    pub warnings: Vec<ParseWarning>,
}

pub type ParseResult = Result<ParsedWorkout, ParseFailure>;

/// Parses a document with fresh hash-based ids and default options
pub fn parse(markdown: &str) -> ParseResult {
    parse_with(markdown, &HashIdGenerator::new(), &ParserOptions::default())
}

/// Parses a document with the given id source and options
///
/// A panic anywhere in the pipeline, including inside `ids`, is reported as
/// a single `INTERNAL_ERROR` instead of unwinding into the caller.
pub fn parse_with(markdown: &str, ids: &dyn IdGenerator, options: &ParserOptions) -> ParseResult {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| run(markdown, ids, options)));

    match outcome {
        Ok(result) => result,
        Err(payload) => {
            let reason = if let Some(s) = payload.downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown error".to_string()
            };
            debug!(%reason, "parser panicked");

            Err(ParseFailure {
                errors: vec![ParseError {
                    line: 1,
                    message: format!("Failed to parse workout: {}", reason),
                    code: DiagnosticCode::InternalError,
                }],
                warnings: Vec::new(),
            })
        }
    }
}

fn run(markdown: &str, ids: &dyn IdGenerator, options: &ParserOptions) -> ParseResult {
    let lines = lines::classify(markdown);
    let mut diagnostics = Diagnostics::default();

    let Some(layout) = structure::find_workout(&lines) else {
        diagnostics.error(
            1,
            DiagnosticCode::NoWorkoutHeader,
            "No workout found: expected a header followed by exercise headers with sets",
        );
        return Err(ParseFailure {
            errors: diagnostics.errors,
            warnings: diagnostics.warnings,
        });
    };

    let workout_line = &lines[layout.header_index];
    let name = workout_line.header_text().unwrap_or_default().to_string();
    let workout_line_number = workout_line.number;
    debug!(
        line = workout_line_number,
        %name,
        exercise_level = layout.exercise_level,
        "found workout header"
    );

    let template_id = TemplateId::generate(ids);
    let mut state = ParserState::new(lines, layout, template_id.clone(), ids, options, diagnostics);
    let (header, cursor) = state.parse_workout_section();
    state.parse_exercises(cursor);
    let (exercises, mut diagnostics) = state.into_exercises();

    if exercises.is_empty() {
        diagnostics.error(
            workout_line_number,
            DiagnosticCode::NoExercises,
            format!("Workout '{}' has no exercises", name),
        );
    }

    if diagnostics.has_errors() {
        debug!(errors = diagnostics.errors.len(), "parse failed");
        return Err(ParseFailure {
            errors: diagnostics.errors,
            warnings: diagnostics.warnings,
        });
    }

    let now = Utc::now();
    let template = WorkoutTemplate {
        id: template_id,
        name,
        description: header.description,
        tags: header.tags,
        default_weight_unit: header.default_unit,
        source_markdown: markdown.to_string(),
        created_at: now,
        updated_at: now,
        exercises,
    };

    debug!(
        exercises = template.exercises.len(),
        sets = template.total_sets(),
        warnings = diagnostics.warnings.len(),
        "parse succeeded"
    );

    Ok(ParsedWorkout {
        template,
        warnings: diagnostics.warnings,
    })
}
