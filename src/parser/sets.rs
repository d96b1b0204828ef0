//! Set grammar
//!
//! A set line is `<main clause> [@modifier]...`. The main clause is matched
//! against a fixed list of patterns in order and the first match wins:
//!
//! 1. `<weight>[ unit] (x|for) <qty|AMRAP>[ qty-unit]` e.g. `135 lbs x 5`
//! 2. `[bw ]x <qty|AMRAP>[ qty-unit]` e.g. `bw x 10`
//! 3. `<qty>[ qty-unit]` e.g. `60s`, `12`
//! 4. `AMRAP`
//!
//! A quantity whose unit starts with `s` or `m` is a duration, anything
//! else is a rep count. Modifiers are `@rpe: 8`, `@rest: 90s`,
//! `@tempo: 3-1-1-0`, `@dropset` and `@perside`. Text the grammar does not
//! consume ends up in the set's notes.

use tracing::trace;

use super::diagnostics::{DiagnosticCode, Diagnostics};
use super::ParserOptions;
use crate::domain::{ExerciseId, ExerciseSet, SetId, WeightUnit};

const QTY_UNIT: &str = r"seconds?|secs?|s|minutes?|mins?|m|reps?";

/// Targets parsed from one set line, before ids are attached
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetTargets {
    pub weight: Option<f64>,
    pub weight_unit: Option<WeightUnit>,
    pub reps: Option<u32>,
    pub time: Option<u32>,
    pub amrap: bool,
    pub rpe: Option<f64>,
    pub rest: Option<u32>,
    pub tempo: Option<String>,
    pub dropset: bool,
    pub per_side: bool,
    pub notes: Option<String>,
}

impl SetTargets {
    pub fn into_set(self, id: SetId, exercise_id: ExerciseId, order_index: usize) -> ExerciseSet {
        let mut set = ExerciseSet::new(id, exercise_id, order_index);
        set.target_weight = self.weight;
        set.target_weight_unit = self.weight_unit;
        set.target_reps = self.reps;
        set.target_time = self.time;
        set.is_amrap = self.amrap;
        set.target_rpe = self.rpe;
        set.rest_seconds = self.rest;
        set.tempo = self.tempo;
        set.is_dropset = self.dropset;
        set.is_per_side = self.per_side;
        set.notes = self.notes;
        set
    }
}

/// Main-clause pieces before validation
struct MainClause<'a> {
    weight: Option<&'a str>,
    weight_unit: Option<&'a str>,
    quantity: Option<&'a str>,
    quantity_unit: Option<&'a str>,
    trailing: &'a str,
}

enum Quantity {
    Reps(f64),
    Seconds(f64),
    Amrap,
}

/// Parses one list item. Returns `None` only when the main clause matches
/// no pattern; every other problem is recorded and parsing carries on.
pub fn parse_set(
    content: &str,
    line: usize,
    default_unit: Option<WeightUnit>,
    options: &ParserOptions,
    diagnostics: &mut Diagnostics,
) -> Option<SetTargets> {
    let mut clauses = content.split('@');
    let main = clauses.next().unwrap_or_default().trim();

    let Some(clause) = match_main_clause(main) else {
        diagnostics.error(
            line,
            DiagnosticCode::InvalidSetFormat,
            format!("Invalid set format: '{}'", content),
        );
        return None;
    };

    let mut targets = SetTargets::default();
    let mut trailing: Vec<String> = Vec::new();

    apply_weight(&clause, line, default_unit, &mut targets, diagnostics);
    if let Some(quantity) = clause.quantity {
        apply_quantity(
            read_quantity(quantity, clause.quantity_unit),
            line,
            options,
            &mut targets,
            diagnostics,
        );
    } else {
        targets.amrap = true;
    }
    trailing.push(clause.trailing.to_string());

    for modifier in clauses {
        parse_modifier(modifier.trim(), line, options, &mut targets, &mut trailing, diagnostics);
    }

    let notes = trailing
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if !notes.is_empty() {
        targets.notes = Some(notes);
    }

    trace!(line, ?targets, "parsed set");
    Some(targets)
}

fn match_main_clause(main: &str) -> Option<MainClause<'_>> {
    let weighted = regex!(&format!(
        r"(?i)^(-?\d+(?:\.\d+)?)\s*(lbs?|kgs?|bw)?\s*(?:x|for)\s*(-?\d+(?:\.\d+)?|amrap)(?:\s*({})\b)?\s*(.*)$",
        QTY_UNIT
    ));
    if let Some(caps) = weighted.captures(main) {
        return Some(MainClause {
            weight: caps.get(1).map(|m| m.as_str()),
            weight_unit: caps.get(2).map(|m| m.as_str()),
            quantity: caps.get(3).map(|m| m.as_str()),
            quantity_unit: caps.get(4).map(|m| m.as_str()),
            trailing: caps.get(5).map_or("", |m| m.as_str()),
        });
    }

    let bodyweight = regex!(&format!(
        r"(?i)^(?:bw\s*)?x\s*(-?\d+(?:\.\d+)?|amrap)(?:\s*({})\b)?\s*(.*)$",
        QTY_UNIT
    ));
    if let Some(caps) = bodyweight.captures(main) {
        return Some(MainClause {
            weight: None,
            weight_unit: None,
            quantity: caps.get(1).map(|m| m.as_str()),
            quantity_unit: caps.get(2).map(|m| m.as_str()),
            trailing: caps.get(3).map_or("", |m| m.as_str()),
        });
    }

    let bare = regex!(&format!(
        r"(?i)^(-?\d+(?:\.\d+)?)(?:\s*({})\b)?\s*(.*)$",
        QTY_UNIT
    ));
    if let Some(caps) = bare.captures(main) {
        return Some(MainClause {
            weight: None,
            weight_unit: None,
            quantity: caps.get(1).map(|m| m.as_str()),
            quantity_unit: caps.get(2).map(|m| m.as_str()),
            trailing: caps.get(3).map_or("", |m| m.as_str()),
        });
    }

    let amrap = regex!(r"(?i)^amrap\b\s*(.*)$");
    if let Some(caps) = amrap.captures(main) {
        return Some(MainClause {
            weight: None,
            weight_unit: None,
            quantity: None,
            quantity_unit: None,
            trailing: caps.get(1).map_or("", |m| m.as_str()),
        });
    }

    None
}

fn apply_weight(
    clause: &MainClause<'_>,
    line: usize,
    default_unit: Option<WeightUnit>,
    targets: &mut SetTargets,
    diagnostics: &mut Diagnostics,
) {
    let Some(raw) = clause.weight else {
        return;
    };

    let unit = clause.weight_unit.map(str::to_lowercase);
    if unit.as_deref() == Some("bw") {
        return;
    }

    let Ok(weight) = raw.parse::<f64>() else {
        diagnostics.error(
            line,
            DiagnosticCode::InvalidSetFormat,
            format!("Invalid weight: '{}'", raw),
        );
        return;
    };

    if weight < 0.0 {
        diagnostics.error(
            line,
            DiagnosticCode::NegativeWeight,
            format!("Weight cannot be negative: {}", raw),
        );
    }

    targets.weight = Some(weight);
    targets.weight_unit = match unit {
        Some(u) => u.parse().ok(),
        None => default_unit,
    };
}

fn read_quantity(value: &str, unit: Option<&str>) -> Quantity {
    if value.eq_ignore_ascii_case("amrap") {
        return Quantity::Amrap;
    }

    // Pattern guarantees a well-formed number
    let n: f64 = value.parse().unwrap_or(0.0);
    match unit.map(|u| u.to_ascii_lowercase()) {
        Some(u) if u.starts_with('s') => Quantity::Seconds(n),
        Some(u) if u.starts_with('m') => Quantity::Seconds(n * 60.0),
        _ => Quantity::Reps(n),
    }
}

fn apply_quantity(
    quantity: Quantity,
    line: usize,
    options: &ParserOptions,
    targets: &mut SetTargets,
    diagnostics: &mut Diagnostics,
) {
    match quantity {
        Quantity::Amrap => targets.amrap = true,
        Quantity::Reps(n) => {
            if n <= 0.0 {
                diagnostics.error(
                    line,
                    DiagnosticCode::InvalidReps,
                    format!("Reps must be greater than zero, got {}", n),
                );
            } else if n.fract() != 0.0 {
                diagnostics.error(
                    line,
                    DiagnosticCode::InvalidReps,
                    format!("Reps must be a whole number, got {}", n),
                );
            } else if n > f64::from(u32::MAX) {
                diagnostics.error(
                    line,
                    DiagnosticCode::InvalidReps,
                    format!("Rep count {} is too large", n),
                );
            } else {
                let reps = n as u32;
                if reps > options.rep_warning_threshold {
                    diagnostics.warning(
                        line,
                        DiagnosticCode::HighReps,
                        format!("Unusually high rep count: {}", reps),
                    );
                }
                targets.reps = Some(reps);
            }
        }
        Quantity::Seconds(secs) => {
            let rounded = secs.round();
            if rounded <= 0.0 || rounded > f64::from(u32::MAX) {
                diagnostics.error(
                    line,
                    DiagnosticCode::InvalidTime,
                    format!("Time must be greater than zero, got {}s", secs),
                );
            } else {
                targets.time = Some(rounded as u32);
            }
        }
    }
}

/// Matches `keyword` as a whole word at the start of a clause,
/// case-insensitively, and returns whatever follows it
fn strip_keyword<'a>(clause: &'a str, keyword: &str) -> Option<&'a str> {
    let head = clause.get(..keyword.len())?;
    let rest = &clause[keyword.len()..];
    let whole_word = rest.is_empty() || rest.starts_with(char::is_whitespace);
    (head.eq_ignore_ascii_case(keyword) && whole_word).then_some(rest)
}

fn parse_modifier(
    clause: &str,
    line: usize,
    options: &ParserOptions,
    targets: &mut SetTargets,
    trailing: &mut Vec<String>,
    diagnostics: &mut Diagnostics,
) {
    if clause.is_empty() {
        return;
    }

    if let Some(rest) = strip_keyword(clause, "dropset") {
        targets.dropset = true;
        trailing.push(rest.to_string());
        return;
    }
    if let Some(rest) = strip_keyword(clause, "perside") {
        targets.per_side = true;
        trailing.push(rest.to_string());
        return;
    }

    let Some(caps) = regex!(r"^(\w+)\s*:\s*(.*)$").captures(clause) else {
        diagnostics.warning(
            line,
            DiagnosticCode::MalformedModifier,
            format!("Could not parse modifier '@{}', keeping it as a note", clause),
        );
        trailing.push(clause.to_string());
        return;
    };

    let key = caps[1].to_lowercase();
    let value = caps[2].trim();

    match key.as_str() {
        "rpe" => parse_rpe(value, line, targets, trailing, diagnostics),
        "rest" => parse_rest(value, line, options, targets, trailing, diagnostics),
        "tempo" => parse_tempo(value, line, targets, trailing, diagnostics),
        _ => {
            diagnostics.warning(
                line,
                DiagnosticCode::UnknownModifier,
                format!("Unknown modifier '@{}', keeping it as a note", key),
            );
            trailing.push(clause.to_string());
        }
    }
}

fn parse_rpe(
    value: &str,
    line: usize,
    targets: &mut SetTargets,
    trailing: &mut Vec<String>,
    diagnostics: &mut Diagnostics,
) {
    let parsed = regex!(r"^(-?\d+(?:\.\d+)?)(?:\s+(.*))?$")
        .captures(value)
        .and_then(|caps| {
            let rpe = caps[1].parse::<f64>().ok()?;
            Some((rpe, caps.get(2).map_or("", |m| m.as_str())))
        });

    match parsed {
        Some((rpe, rest)) if (1.0..=10.0).contains(&rpe) => {
            targets.rpe = Some(rpe);
            trailing.push(rest.to_string());
        }
        Some((rpe, _)) => diagnostics.error(
            line,
            DiagnosticCode::InvalidRpe,
            format!("RPE must be between 1 and 10, got {}", rpe),
        ),
        None => diagnostics.error(
            line,
            DiagnosticCode::InvalidRpe,
            format!("Invalid RPE value: '{}'", value),
        ),
    }
}

fn parse_rest(
    value: &str,
    line: usize,
    options: &ParserOptions,
    targets: &mut SetTargets,
    trailing: &mut Vec<String>,
    diagnostics: &mut Diagnostics,
) {
    let pattern = regex!(
        r"(?i)^(\d+(?:\.\d+)?)\s*(seconds?|secs?|s|minutes?|mins?|m)?(?:\s+(.*))?$"
    );
    let Some(caps) = pattern.captures(value) else {
        diagnostics.error(
            line,
            DiagnosticCode::InvalidRest,
            format!("Invalid rest value: '{}'", value),
        );
        return;
    };

    let amount: f64 = caps[1].parse().unwrap_or(0.0);
    let minutes = caps
        .get(2)
        .is_some_and(|m| m.as_str().to_ascii_lowercase().starts_with('m'));
    let seconds = if minutes { amount * 60.0 } else { amount }.round();

    if seconds > f64::from(u32::MAX) {
        diagnostics.error(
            line,
            DiagnosticCode::InvalidRest,
            format!("Invalid rest value: '{}'", value),
        );
        return;
    }

    let seconds = seconds as u32;
    if seconds < options.min_rest_seconds {
        diagnostics.warning(
            line,
            DiagnosticCode::ShortRest,
            format!("Rest of {}s is unusually short", seconds),
        );
    } else if seconds > options.max_rest_seconds {
        diagnostics.warning(
            line,
            DiagnosticCode::LongRest,
            format!("Rest of {}s is unusually long", seconds),
        );
    }

    targets.rest = Some(seconds);
    trailing.push(caps.get(3).map_or("", |m| m.as_str()).to_string());
}

fn parse_tempo(
    value: &str,
    line: usize,
    targets: &mut SetTargets,
    trailing: &mut Vec<String>,
    diagnostics: &mut Diagnostics,
) {
    let Some(caps) = regex!(r"^(\d-\d-\d-\d)(?:\s+(.*))?$").captures(value) else {
        diagnostics.error(
            line,
            DiagnosticCode::InvalidTempo,
            format!("Invalid tempo '{}', expected format like 3-1-1-0", value),
        );
        return;
    };

    targets.tempo = Some(caps[1].to_string());
    trailing.push(caps.get(2).map_or("", |m| m.as_str()).to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> (Option<SetTargets>, Diagnostics) {
        parse_with_unit(content, None)
    }

    fn parse_with_unit(content: &str, unit: Option<WeightUnit>) -> (Option<SetTargets>, Diagnostics) {
        let mut diagnostics = Diagnostics::default();
        let targets = parse_set(content, 7, unit, &ParserOptions::default(), &mut diagnostics);
        (targets, diagnostics)
    }

    fn ok(content: &str) -> SetTargets {
        let (targets, diagnostics) = parse(content);
        assert!(
            diagnostics.errors.is_empty(),
            "unexpected errors for {:?}: {:?}",
            content,
            diagnostics.errors
        );
        targets.unwrap()
    }

    fn error_codes(content: &str) -> Vec<DiagnosticCode> {
        parse(content).1.errors.iter().map(|e| e.code).collect()
    }

    fn warning_codes(content: &str) -> Vec<DiagnosticCode> {
        parse(content).1.warnings.iter().map(|w| w.code).collect()
    }

    #[test]
    fn weight_by_reps() {
        let set = ok("135 x 5");
        assert_eq!(set.weight, Some(135.0));
        assert_eq!(set.reps, Some(5));
        assert_eq!(set.weight_unit, None);
        assert_eq!(set.notes, None);
    }

    #[test]
    fn explicit_units_override_default() {
        let (set, _) = parse_with_unit("60 kg x 8", Some(WeightUnit::Lbs));
        assert_eq!(set.unwrap().weight_unit, Some(WeightUnit::Kg));

        let (set, _) = parse_with_unit("225lb for 3", Some(WeightUnit::Kg));
        let set = set.unwrap();
        assert_eq!(set.weight, Some(225.0));
        assert_eq!(set.weight_unit, Some(WeightUnit::Lbs));
        assert_eq!(set.reps, Some(3));
    }

    #[test]
    fn default_unit_applies_without_suffix() {
        let (set, _) = parse_with_unit("20 x 10", Some(WeightUnit::Lbs));
        assert_eq!(set.unwrap().weight_unit, Some(WeightUnit::Lbs));
    }

    #[test]
    fn decimal_weight() {
        let set = ok("22.5 KGS x 12");
        assert_eq!(set.weight, Some(22.5));
        assert_eq!(set.weight_unit, Some(WeightUnit::Kg));
    }

    #[test]
    fn bodyweight_forms_omit_weight() {
        for content in ["bw x 10", "BW x 10", "x 10", "10", "0 bw x 10"] {
            let set = ok(content);
            assert_eq!(set.weight, None, "{}", content);
            assert_eq!(set.weight_unit, None, "{}", content);
            assert_eq!(set.reps, Some(10), "{}", content);
        }
    }

    #[test]
    fn time_units() {
        assert_eq!(ok("60s").time, Some(60));
        assert_eq!(ok("45 sec").time, Some(45));
        assert_eq!(ok("2 min").time, Some(120));
        assert_eq!(ok("1.5m").time, Some(90));
        assert_eq!(ok("60s").reps, None);

        let set = ok("45 lbs x 30s");
        assert_eq!(set.weight, Some(45.0));
        assert_eq!(set.time, Some(30));
        assert_eq!(set.reps, None);

        let set = ok("bw x 1 minute");
        assert_eq!(set.time, Some(60));
    }

    #[test]
    fn reps_suffix_stays_reps() {
        let set = ok("100 x 5 reps");
        assert_eq!(set.reps, Some(5));
        assert_eq!(set.notes, None);
    }

    #[test]
    fn amrap_forms() {
        let set = ok("135 x AMRAP");
        assert!(set.amrap);
        assert_eq!(set.weight, Some(135.0));
        assert_eq!(set.reps, None);

        let set = ok("bw x amrap");
        assert!(set.amrap);
        assert_eq!(set.weight, None);

        let set = ok("AMRAP");
        assert!(set.amrap);
        assert_eq!(set.reps, None);
        assert_eq!(set.time, None);
    }

    #[test]
    fn trailing_text_becomes_notes() {
        let set = ok("100 x 5 slow eccentric");
        assert_eq!(set.reps, Some(5));
        assert_eq!(set.notes.as_deref(), Some("slow eccentric"));

        let set = ok("AMRAP to failure");
        assert_eq!(set.notes.as_deref(), Some("to failure"));
    }

    #[test]
    fn word_starting_with_time_letter_is_not_a_unit() {
        let set = ok("100 x 5 slow");
        assert_eq!(set.reps, Some(5));
        assert_eq!(set.time, None);
        assert_eq!(set.notes.as_deref(), Some("slow"));
    }

    #[test]
    fn negative_weight_is_error() {
        assert_eq!(error_codes("-10 x 5"), vec![DiagnosticCode::NegativeWeight]);
    }

    #[test]
    fn non_positive_quantity_is_error() {
        assert_eq!(error_codes("100 x 0"), vec![DiagnosticCode::InvalidReps]);
        assert_eq!(error_codes("bw x -3"), vec![DiagnosticCode::InvalidReps]);
        assert_eq!(error_codes("0s"), vec![DiagnosticCode::InvalidTime]);
        assert_eq!(error_codes("2.5 x 7.5"), vec![DiagnosticCode::InvalidReps]);
    }

    #[test]
    fn oversized_rep_count_is_reported_separately() {
        let (set, diagnostics) = parse("bw x 5000000000");

        assert_eq!(set.and_then(|s| s.reps), None);
        assert_eq!(diagnostics.errors.len(), 1);
        assert_eq!(diagnostics.errors[0].code, DiagnosticCode::InvalidReps);
        assert!(diagnostics.errors[0].message.contains("too large"));

        let (_, diagnostics) = parse("bw x 7.5");
        assert!(diagnostics.errors[0].message.contains("whole number"));
    }

    #[test]
    fn high_reps_is_warning() {
        assert_eq!(warning_codes("bw x 150"), vec![DiagnosticCode::HighReps]);
        assert!(warning_codes("bw x 100").is_empty());
        assert!(error_codes("bw x 150").is_empty());
    }

    #[test]
    fn unparsable_main_clause() {
        let (set, diagnostics) = parse("heavy triple");
        assert!(set.is_none());
        assert_eq!(diagnostics.errors[0].code, DiagnosticCode::InvalidSetFormat);
        assert_eq!(diagnostics.errors[0].line, 7);

        assert_eq!(error_codes("@rpe: 8"), vec![DiagnosticCode::InvalidSetFormat]);
    }

    #[test]
    fn rest_modifier() {
        assert_eq!(ok("100 x 5 @rest: 60s").rest, Some(60));
        assert_eq!(ok("100 x 5 @rest: 90").rest, Some(90));
        assert_eq!(ok("100 x 5 @rest: 2min").rest, Some(120));
        assert_eq!(ok("100 x 5 @rest: 1.5 m").rest, Some(90));
        assert_eq!(error_codes("100 x 5 @rest: soon"), vec![DiagnosticCode::InvalidRest]);
    }

    #[test]
    fn rest_bounds_are_warnings() {
        assert_eq!(warning_codes("100 x 5 @rest: 5s"), vec![DiagnosticCode::ShortRest]);
        assert_eq!(warning_codes("100 x 5 @rest: 11m"), vec![DiagnosticCode::LongRest]);
        assert!(warning_codes("100 x 5 @rest: 10s").is_empty());
        assert!(warning_codes("100 x 5 @rest: 600s").is_empty());
    }

    #[test]
    fn rpe_modifier() {
        assert_eq!(ok("100 x 5 @rpe: 8").rpe, Some(8.0));
        assert_eq!(ok("100 x 5 @RPE: 7.5").rpe, Some(7.5));
        assert_eq!(ok("100 x 5 @rpe: 1").rpe, Some(1.0));
        assert_eq!(ok("100 x 5 @rpe: 10").rpe, Some(10.0));
    }

    #[test]
    fn rpe_out_of_range_is_error() {
        for content in ["100 x 5 @rpe: 11", "100 x 5 @rpe: 0", "100 x 5 @rpe: 0.5", "100 x 5 @rpe: hard"] {
            assert_eq!(error_codes(content), vec![DiagnosticCode::InvalidRpe], "{}", content);
        }
    }

    #[test]
    fn tempo_modifier() {
        assert_eq!(ok("100 x 5 @tempo: 3-1-1-0").tempo.as_deref(), Some("3-1-1-0"));
        assert_eq!(error_codes("100 x 5 @tempo: slow"), vec![DiagnosticCode::InvalidTempo]);
        assert_eq!(error_codes("100 x 5 @tempo: 3-1-1"), vec![DiagnosticCode::InvalidTempo]);
        assert_eq!(error_codes("100 x 5 @tempo: 30-1-1-0"), vec![DiagnosticCode::InvalidTempo]);
    }

    #[test]
    fn flag_modifiers() {
        let set = ok("50 x 10 @dropset @perside");
        assert!(set.dropset);
        assert!(set.per_side);
        assert_eq!(set.notes, None);

        let set = ok("50 x 10 @DropSet to failure");
        assert!(set.dropset);
        assert_eq!(set.notes.as_deref(), Some("to failure"));
    }

    #[test]
    fn unknown_modifier_is_kept_as_note() {
        let (set, diagnostics) = parse("100 x 5 pause @grip: wide");
        let set = set.unwrap();

        assert!(diagnostics.errors.is_empty());
        assert_eq!(diagnostics.warnings[0].code, DiagnosticCode::UnknownModifier);
        assert_eq!(set.notes.as_deref(), Some("pause grip: wide"));
    }

    #[test]
    fn flag_modifiers_must_be_whole_words() {
        let (set, diagnostics) = parse("100 x 5 @dropsetx");
        let set = set.unwrap();

        assert!(!set.dropset);
        assert_eq!(diagnostics.warnings[0].code, DiagnosticCode::MalformedModifier);
        assert_eq!(set.notes.as_deref(), Some("dropsetx"));
    }

    #[test]
    fn malformed_modifier_is_kept_as_note() {
        let (set, diagnostics) = parse("100 x 5 @ felt easy");
        let set = set.unwrap();

        assert_eq!(diagnostics.warnings[0].code, DiagnosticCode::MalformedModifier);
        assert_eq!(set.notes.as_deref(), Some("felt easy"));
    }

    #[test]
    fn all_modifiers_together() {
        let set = ok("185 lbs x 8 @rpe: 8.5 @rest: 120s @tempo: 2-0-1-0 @perside");
        assert_eq!(set.weight, Some(185.0));
        assert_eq!(set.reps, Some(8));
        assert_eq!(set.rpe, Some(8.5));
        assert_eq!(set.rest, Some(120));
        assert_eq!(set.tempo.as_deref(), Some("2-0-1-0"));
        assert!(set.per_side);
    }

    #[test]
    fn into_set_carries_targets() {
        let targets = ok("20 kg x 10 @rpe: 9 @dropset note");
        let set = targets.into_set(
            "s-1".parse().unwrap(),
            "e-1".parse().unwrap(),
            3,
        );

        assert_eq!(set.order_index, 3);
        assert_eq!(set.target_weight, Some(20.0));
        assert_eq!(set.target_weight_unit, Some(WeightUnit::Kg));
        assert_eq!(set.target_rpe, Some(9.0));
        assert!(set.is_dropset);
        assert_eq!(set.notes.as_deref(), Some("note"));
    }
}
