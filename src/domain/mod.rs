//! Domain models for LiftMark
//!
//! Contains the workout template types and identifier generation, without
//! any parsing or I/O concerns.

mod id;
mod workout;

pub use id::{
    ExerciseId, HashIdGenerator, IdError, IdGenerator, SequentialIdGenerator, SetId, TemplateId,
};
pub use workout::{Exercise, ExerciseSet, GroupType, WeightUnit, WorkoutTemplate};
