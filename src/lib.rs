//! LiftMark - parser for the LiftMark Workout Format (LMWF)
//!
//! LMWF is a loose, markdown-like plain-text format for workouts. This crate
//! turns such a document into a strongly-typed [`WorkoutTemplate`]: a named
//! sequence of exercises (optionally grouped into supersets and sections),
//! each with an ordered list of prescribed sets.
//!
//! ```
//! let parsed = liftmark::parse("# Arms\n## Curls\n- 20 x 10\n").unwrap();
//! assert_eq!(parsed.template.exercises[0].sets[0].target_reps, Some(10));
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod parser;
pub mod render;

pub use domain::{Exercise, ExerciseSet, GroupType, WeightUnit, WorkoutTemplate};
pub use parser::{parse, parse_with, ParseFailure, ParseResult, ParsedWorkout, ParserOptions};
