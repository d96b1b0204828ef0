//! Rendering templates back to text
//!
//! [`summary`] produces the indented tree shown by the CLI, [`to_lmwf`]
//! produces canonical LMWF that parses back into an equivalent template.

use crate::domain::{Exercise, WorkoutTemplate};

const MAX_HEADER_LEVEL: usize = 6;

/// Human-readable tree of the template
pub fn summary(template: &WorkoutTemplate) -> String {
    let mut out = String::new();
    out.push_str(&template.name);
    out.push('\n');

    if !template.tags.is_empty() {
        out.push_str(&format!("  Tags: {}\n", template.tags.join(", ")));
    }
    if let Some(unit) = template.default_weight_unit {
        out.push_str(&format!("  Units: {}\n", unit));
    }
    if let Some(description) = &template.description {
        for line in description.lines() {
            out.push_str(&format!("  {}\n", line));
        }
    }

    for exercise in template.top_level() {
        out.push('\n');
        summarize_exercise(template, exercise, 0, &mut out);
    }

    out
}

fn summarize_exercise(template: &WorkoutTemplate, exercise: &Exercise, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);

    let mut title = format!("{}{}", indent, exercise.exercise_name);
    if let Some(group) = exercise.group_type {
        title.push_str(&format!(" ({})", group));
    }
    if let Some(equipment) = &exercise.equipment_type {
        title.push_str(&format!(" [{}]", equipment));
    }
    out.push_str(&title);
    out.push('\n');

    if let Some(notes) = &exercise.notes {
        for line in notes.lines() {
            out.push_str(&format!("{}  > {}\n", indent, line));
        }
    }

    for set in &exercise.sets {
        out.push_str(&format!("{}  {}. {}\n", indent, set.order_index + 1, set.describe()));
    }

    for child in template.children_of(&exercise.id) {
        summarize_exercise(template, child, depth + 1, out);
    }
}

/// Canonical LMWF text for the template
pub fn to_lmwf(template: &WorkoutTemplate) -> String {
    let mut out = format!("# {}\n", template.name);

    if !template.tags.is_empty() {
        out.push_str(&format!("@tags: {}\n", template.tags.join(", ")));
    }
    if let Some(unit) = template.default_weight_unit {
        out.push_str(&format!("@units: {}\n", unit));
    }
    if let Some(description) = &template.description {
        out.push_str(description);
        out.push('\n');
    }

    for exercise in template.top_level() {
        out.push('\n');
        write_exercise(template, exercise, 2, &mut out);
    }

    out
}

fn write_exercise(template: &WorkoutTemplate, exercise: &Exercise, level: usize, out: &mut String) {
    let hashes = "#".repeat(level.min(MAX_HEADER_LEVEL));
    out.push_str(&format!("{} {}\n", hashes, exercise.exercise_name));

    if let Some(equipment) = &exercise.equipment_type {
        out.push_str(&format!("@type: {}\n", equipment));
    }
    if let Some(notes) = &exercise.notes {
        out.push_str(notes);
        out.push('\n');
    }

    for set in &exercise.sets {
        out.push_str(&format!("- {}\n", set.describe()));
    }

    for child in template.children_of(&exercise.id) {
        write_exercise(template, child, level + 1, out);
    }
}
