//! Workout and exercise assembly
//!
//! Recursive descent over the classified lines, starting just below the
//! workout header. Every routine takes the cursor as an index and returns
//! the index of the first line it did not consume; nothing here ever moves
//! backwards.

use tracing::debug;

use super::diagnostics::{DiagnosticCode, Diagnostics};
use super::lines::{Line, LineKind};
use super::sets::parse_set;
use super::structure::{child_level, has_nested_headers, WorkoutLayout};
use super::ParserOptions;
use crate::domain::{
    Exercise, ExerciseId, GroupType, IdGenerator, SetId, TemplateId, WeightUnit,
};

/// Template-level fields read from the lines under the workout header
#[derive(Debug, Default)]
pub struct WorkoutHeader {
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub default_unit: Option<WeightUnit>,
}

/// State owned by a single parse invocation
pub struct ParserState<'a> {
    lines: Vec<Line>,
    layout: WorkoutLayout,
    template_id: TemplateId,
    ids: &'a dyn IdGenerator,
    options: &'a ParserOptions,
    default_unit: Option<WeightUnit>,
    exercises: Vec<Exercise>,
    diagnostics: Diagnostics,
}

impl<'a> ParserState<'a> {
    pub fn new(
        lines: Vec<Line>,
        layout: WorkoutLayout,
        template_id: TemplateId,
        ids: &'a dyn IdGenerator,
        options: &'a ParserOptions,
        diagnostics: Diagnostics,
    ) -> Self {
        Self {
            lines,
            layout,
            template_id,
            ids,
            options,
            default_unit: None,
            exercises: Vec::new(),
            diagnostics,
        }
    }

    /// Reads description and metadata up to the first exercise-level
    /// header. Deeper headers before it are kept as description text.
    /// Returns the header fields and the next cursor.
    pub fn parse_workout_section(&mut self) -> (WorkoutHeader, usize) {
        let mut header = WorkoutHeader::default();
        let mut description: Vec<String> = Vec::new();
        let mut cursor = self.layout.header_index + 1;

        while let Some(line) = self.lines.get(cursor) {
            if line.closes(self.layout.workout_level)
                || line.header_level() == Some(self.layout.exercise_level)
            {
                break;
            }
            match &line.kind {
                LineKind::Metadata { key, value } => match key.as_str() {
                    "tags" => {
                        header.tags = value
                            .split(',')
                            .map(str::trim)
                            .filter(|t| !t.is_empty())
                            .map(String::from)
                            .collect();
                    }
                    "units" => match value.parse::<WeightUnit>() {
                        Ok(unit) => header.default_unit = Some(unit),
                        Err(_) => self.diagnostics.error(
                            line.number,
                            DiagnosticCode::InvalidUnits,
                            format!("Invalid units '{}', expected 'lbs' or 'kg'", value),
                        ),
                    },
                    other => debug!(line = line.number, key = other, "ignoring workout metadata"),
                },
                _ if line.is_blank() => {}
                _ => description.push(line.trimmed.clone()),
            }
            cursor += 1;
        }

        if !description.is_empty() {
            header.description = Some(description.join("\n"));
        }
        self.default_unit = header.default_unit;
        (header, cursor)
    }

    /// Walks exercise-level headers until the end of the workout
    pub fn parse_exercises(&mut self, mut cursor: usize) -> usize {
        let workout_level = self.layout.workout_level;
        let exercise_level = self.layout.exercise_level;

        while let Some(line) = self.lines.get(cursor) {
            if line.closes(workout_level) {
                debug!(line = line.number, "workout ends");
                break;
            }
            if line.header_level() == Some(exercise_level) {
                cursor = self.parse_block(cursor, None);
            } else {
                if line.header_level().is_some() {
                    debug!(line = line.number, "skipping header outside any exercise");
                }
                cursor += 1;
            }
        }

        cursor
    }

    /// Consumes the header at `cursor` as either a leaf exercise or a group
    fn parse_block(&mut self, cursor: usize, parent: Option<ExerciseId>) -> usize {
        if has_nested_headers(&self.lines, cursor) {
            self.parse_group(cursor, parent)
        } else {
            self.parse_leaf(cursor, parent)
        }
    }

    fn emit(&mut self, name: String, parent: Option<ExerciseId>) -> usize {
        let exercise = Exercise {
            id: ExerciseId::generate(self.ids),
            workout_template_id: self.template_id.clone(),
            exercise_name: name,
            order_index: self.exercises.len(),
            notes: None,
            equipment_type: None,
            group_type: None,
            group_name: None,
            parent_exercise_id: parent,
            sets: Vec::new(),
        };
        self.exercises.push(exercise);
        self.exercises.len() - 1
    }

    /// Reads metadata and free text under a header until the first list
    /// item or header. Returns the next cursor.
    fn parse_preamble(&mut self, mut cursor: usize, slot: usize) -> usize {
        let mut notes: Vec<String> = Vec::new();

        while let Some(line) = self.lines.get(cursor) {
            match &line.kind {
                LineKind::Header { .. } | LineKind::ListItem(_) => break,
                LineKind::Metadata { key, value } => {
                    if key == "type" && !value.is_empty() {
                        self.exercises[slot].equipment_type = Some(value.clone());
                    } else {
                        debug!(line = line.number, key = key.as_str(), "ignoring exercise metadata");
                    }
                }
                _ if line.is_blank() => {}
                _ => notes.push(line.trimmed.clone()),
            }
            cursor += 1;
        }

        if !notes.is_empty() {
            self.exercises[slot].notes = Some(notes.join("\n"));
        }
        cursor
    }

    fn parse_leaf(&mut self, cursor: usize, parent: Option<ExerciseId>) -> usize {
        let header = &self.lines[cursor];
        let level = header.header_level().unwrap_or(self.layout.exercise_level);
        let header_line = header.number;
        let name = header.header_text().unwrap_or_default().to_string();

        let slot = self.emit(name, parent);
        let mut cursor = self.parse_preamble(cursor + 1, slot);
        let exercise_id = self.exercises[slot].id.clone();
        let mut saw_items = false;

        while let Some(line) = self.lines.get(cursor) {
            if line.closes(level) {
                break;
            }
            if let Some(content) = line.list_item() {
                saw_items = true;
                let parsed = parse_set(
                    content,
                    line.number,
                    self.default_unit,
                    self.options,
                    &mut self.diagnostics,
                );
                if let Some(targets) = parsed {
                    let sets = &mut self.exercises[slot].sets;
                    let order_index = sets.len();
                    sets.push(targets.into_set(
                        SetId::generate(self.ids),
                        exercise_id.clone(),
                        order_index,
                    ));
                }
            }
            cursor += 1;
        }

        let exercise = &self.exercises[slot];
        if exercise.sets.is_empty() && !saw_items {
            self.diagnostics.error(
                header_line,
                DiagnosticCode::NoSets,
                format!("Exercise '{}' has no sets", exercise.exercise_name),
            );
        }
        debug!(
            line = header_line,
            name = exercise.exercise_name.as_str(),
            sets = exercise.sets.len(),
            "parsed exercise"
        );

        cursor
    }

    fn parse_group(&mut self, cursor: usize, parent: Option<ExerciseId>) -> usize {
        let header = &self.lines[cursor];
        let level = header.header_level().unwrap_or(self.layout.exercise_level);
        let header_line = header.number;
        let name = header.header_text().unwrap_or_default().to_string();
        let group_type = GroupType::from_header(&name);
        let children_at = child_level(&self.lines, cursor);

        let slot = self.emit(name.clone(), parent);
        self.exercises[slot].group_type = Some(group_type);
        self.exercises[slot].group_name = Some(name);
        let group_id = self.exercises[slot].id.clone();

        debug!(line = header_line, %group_type, ?children_at, "parsing group");

        let mut cursor = self.parse_preamble(cursor + 1, slot);
        while let Some(line) = self.lines.get(cursor) {
            if line.closes(level) {
                break;
            }
            match line.header_level() {
                Some(l) if Some(l) == children_at => {
                    cursor = self.parse_block(cursor, Some(group_id.clone()));
                }
                Some(_) => {
                    debug!(line = line.number, "skipping header outside group child level");
                    cursor += 1;
                }
                None => {
                    if line.is_list_item() {
                        debug!(line = line.number, "skipping list item directly under group");
                    }
                    cursor += 1;
                }
            }
        }

        cursor
    }

    pub fn into_exercises(self) -> (Vec<Exercise>, Diagnostics) {
        (self.exercises, self.diagnostics)
    }
}
