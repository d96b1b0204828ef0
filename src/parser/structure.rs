//! Structure analysis
//!
//! Read-only lookahead over classified lines. Nothing here consumes input;
//! the assembler decides what to do with the answers.

use super::lines::Line;

/// Where the workout lives in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutLayout {
    /// Index of the workout header in the line array
    pub header_index: usize,
    pub workout_level: usize,
    pub exercise_level: usize,
}

/// Index one past the last line belonging to the header at `index`
pub fn subtree_end(lines: &[Line], index: usize) -> usize {
    let Some(level) = lines[index].header_level() else {
        return index + 1;
    };

    lines[index + 1..]
        .iter()
        .position(|line| line.closes(level))
        .map_or(lines.len(), |offset| index + 1 + offset)
}

/// True if a list item appears beneath the header at `index`, either
/// directly or under any deeper nested header
pub fn subtree_has_sets(lines: &[Line], index: usize) -> bool {
    let end = subtree_end(lines, index);
    lines[index + 1..end].iter().any(Line::is_list_item)
}

/// True if some header nested beneath `index` is deeper than it
pub fn has_nested_headers(lines: &[Line], index: usize) -> bool {
    let end = subtree_end(lines, index);
    lines[index + 1..end]
        .iter()
        .any(|line| line.header_level().is_some())
}

/// Finds the first header having a child header (one level deeper) with
/// sets beneath it
pub fn find_workout(lines: &[Line]) -> Option<WorkoutLayout> {
    lines.iter().enumerate().find_map(|(index, line)| {
        let level = line.header_level()?;
        let end = subtree_end(lines, index);

        let qualifies = (index + 1..end).any(|child| {
            lines[child].header_level() == Some(level + 1) && subtree_has_sets(lines, child)
        });

        qualifies.then_some(WorkoutLayout {
            header_index: index,
            workout_level: level,
            exercise_level: level + 1,
        })
    })
}

/// Level of the first header inside a group that actually has sets under
/// it, falling back to the first nested header when none do
pub fn child_level(lines: &[Line], group_index: usize) -> Option<usize> {
    let end = subtree_end(lines, group_index);
    let nested = (group_index + 1..end).filter(|&i| lines[i].header_level().is_some());

    nested
        .clone()
        .find(|&i| subtree_has_sets(lines, i))
        .or_else(|| nested.clone().next())
        .and_then(|i| lines[i].header_level())
}
