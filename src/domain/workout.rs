//! Workout template domain model
//!
//! A template is a named, ordered list of exercises. Exercises form a
//! shallow tree through `parent_exercise_id`, but are stored flat in
//! document order so that a parent always precedes its children.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{ExerciseId, SetId, TemplateId};

/// Unit for prescribed weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    Lbs,
    Kg,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Lbs => "lbs",
            WeightUnit::Kg => "kg",
        }
    }
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lb" | "lbs" => Ok(WeightUnit::Lbs),
            "kg" | "kgs" => Ok(WeightUnit::Kg),
            _ => Err(format!("Unknown weight unit: {}", s)),
        }
    }
}

/// Kind of container an exercise group represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupType {
    /// Exercises performed back-to-back with minimal rest
    Superset,
    /// Named grouping such as "Warmup" or "Cooldown"
    Section,
}

impl GroupType {
    /// Classifies a group header: anything mentioning "superset" is a
    /// superset, everything else is a section
    pub fn from_header(text: &str) -> Self {
        if text.to_lowercase().contains("superset") {
            GroupType::Superset
        } else {
            GroupType::Section
        }
    }
}

impl std::fmt::Display for GroupType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupType::Superset => write!(f, "superset"),
            GroupType::Section => write!(f, "section"),
        }
    }
}

/// One prescribed set of an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSet {
    pub id: SetId,

    /// Owning exercise
    pub template_exercise_id: ExerciseId,

    /// Zero-based position within the exercise
    pub order_index: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight_unit: Option<WeightUnit>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_reps: Option<u32>,

    /// Target duration in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_time: Option<u32>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_amrap: bool,

    /// Rate of perceived exertion, 1-10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_rpe: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,

    /// Tempo in `d-d-d-d` notation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_dropset: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_per_side: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ExerciseSet {
    /// Creates an empty set; the grammar fills in the targets
    pub fn new(id: SetId, exercise_id: ExerciseId, order_index: usize) -> Self {
        Self {
            id,
            template_exercise_id: exercise_id,
            order_index,
            target_weight: None,
            target_weight_unit: None,
            target_reps: None,
            target_time: None,
            is_amrap: false,
            target_rpe: None,
            rest_seconds: None,
            tempo: None,
            is_dropset: false,
            is_per_side: false,
            notes: None,
        }
    }

    /// Renders the set as an LMWF set clause (without the leading `- `)
    pub fn describe(&self) -> String {
        let quantity = if self.is_amrap {
            Some("AMRAP".to_string())
        } else if let Some(reps) = self.target_reps {
            // Notes could otherwise be read back as the quantity's unit
            match self.notes {
                Some(_) => Some(format!("{} reps", reps)),
                None => Some(reps.to_string()),
            }
        } else {
            self.target_time.map(|secs| format!("{}s", secs))
        };

        let mut out = match (self.target_weight, quantity) {
            (Some(weight), Some(quantity)) => match self.target_weight_unit {
                Some(unit) => format!("{} {} x {}", weight, unit, quantity),
                None => format!("{} x {}", weight, quantity),
            },
            (Some(weight), None) => match self.target_weight_unit {
                Some(unit) => format!("{} {}", weight, unit),
                None => weight.to_string(),
            },
            (None, Some(quantity)) => {
                if self.target_reps.is_some() {
                    format!("bw x {}", quantity)
                } else {
                    quantity
                }
            }
            (None, None) => String::new(),
        };

        if let Some(notes) = &self.notes {
            out.push(' ');
            out.push_str(notes);
        }
        if let Some(rpe) = self.target_rpe {
            out.push_str(&format!(" @rpe: {}", rpe));
        }
        if let Some(rest) = self.rest_seconds {
            out.push_str(&format!(" @rest: {}s", rest));
        }
        if let Some(tempo) = &self.tempo {
            out.push_str(&format!(" @tempo: {}", tempo));
        }
        if self.is_dropset {
            out.push_str(" @dropset");
        }
        if self.is_per_side {
            out.push_str(" @perside");
        }

        out
    }
}

/// An exercise, or a group container (superset/section) when `group_type`
/// is set and `sets` is empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseId,

    /// Owning template
    pub workout_template_id: TemplateId,

    pub exercise_name: String,

    /// Position in the flattened exercise list of the template
    pub order_index: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Free-form equipment name from `@type:`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_type: Option<GroupType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_exercise_id: Option<ExerciseId>,

    #[serde(default)]
    pub sets: Vec<ExerciseSet>,
}

impl Exercise {
    /// True for superset/section containers
    pub fn is_group(&self) -> bool {
        self.group_type.is_some() && self.sets.is_empty()
    }
}

/// The structured result of parsing an LMWF document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    pub id: TemplateId,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_weight_unit: Option<WeightUnit>,

    /// The document this template was parsed from, kept verbatim
    pub source_markdown: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    pub exercises: Vec<Exercise>,
}

impl WorkoutTemplate {
    /// Exercises without a parent, in order
    pub fn top_level(&self) -> impl Iterator<Item = &Exercise> {
        self.exercises
            .iter()
            .filter(|e| e.parent_exercise_id.is_none())
    }

    /// Direct children of the given exercise, in order
    pub fn children_of<'a>(&'a self, id: &'a ExerciseId) -> impl Iterator<Item = &'a Exercise> {
        self.exercises
            .iter()
            .filter(move |e| e.parent_exercise_id.as_ref() == Some(id))
    }

    /// Total number of sets across all exercises
    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }
}
