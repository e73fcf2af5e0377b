//! Progression resolution
//!
//! Validates that properties are declared consistently across every
//! occurrence of an exercise, then turns the `progress` directive into
//! initial state plus a finish-day script.
//!
//! Directives: `lp(increment[, attempts[, decrement[, decrementAttempts]]])`,
//! `sum(targetReps, increment)`, `dp(repRange, increment)`. Unknown
//! directives and unparseable arguments attach no progression at all.

use crate::compiler::aggregate::ExerciseOccurrences;
use crate::compiler::variation::DOUBLE_PROGRESSION;
use crate::error::CompileError;
use crate::planner::{PlannerProperty, PROGRESS_PROPERTY};
use crate::progression::{Deload, Increment, LinearProgression, ProgressionScripts};
use crate::types::{DayData, Unit};
use std::collections::HashMap;

pub const LINEAR_PROGRESSION: &str = "lp";
pub const SUM_REPS_PROGRESSION: &str = "sum";

/// Parsed `progress` directive
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Linear {
        progression: LinearProgression,
        deload: Option<Deload>,
    },
    SumReps {
        reps: u32,
        increment: Increment,
    },
    Double {
        range: u32,
        increment: Increment,
    },
}

/// Initial state entries and finish-day script of a progression
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProgression {
    pub state: Vec<(&'static str, i64)>,
    pub finish_day_expr: String,
}

/// Reject a property declared with different arguments at two occurrences
///
/// Occurrences are checked in traversal order; the first mismatch aborts
/// with both 1-based locations.
pub fn validate_properties(group: &ExerciseOccurrences<'_>) -> Result<(), CompileError> {
    let mut seen: HashMap<&str, (&PlannerProperty, DayData)> = HashMap::new();
    for occurrence in &group.occurrences {
        for property in &occurrence.exercise.properties {
            match seen.get(property.name.as_str()) {
                Some((first, first_day)) if !first.same_call(property) => {
                    return Err(CompileError::PropertyConflict {
                        property: property.name.clone(),
                        exercise: occurrence.exercise.name.clone(),
                        first: *first_day,
                        second: occurrence.day,
                    });
                }
                Some(_) => {}
                None => {
                    seen.insert(&property.name, (property, occurrence.day));
                }
            }
        }
    }
    Ok(())
}

/// The `progress` property of an exercise group, if any occurrence declares one
pub fn progress_property<'a>(group: &ExerciseOccurrences<'a>) -> Option<&'a PlannerProperty> {
    group
        .occurrences
        .iter()
        .find_map(|o| o.exercise.properties.iter().find(|p| p.name == PROGRESS_PROPERTY))
}

/// Parse a directive; `None` for unknown names or malformed arguments
pub fn parse_directive(property: &PlannerProperty, unit: Unit) -> Option<Directive> {
    let arg = |i: usize| {
        property
            .fn_args
            .get(i)
            .map(|a| a.trim())
            .filter(|a| !a.is_empty())
    };
    let default_increment = match unit {
        Unit::Kg => Increment::weight(2.5, Unit::Kg),
        Unit::Lb => Increment::weight(5.0, Unit::Lb),
    };
    let increment_at = |i: usize| match arg(i) {
        Some(raw) => parse_increment(raw),
        None => Some(default_increment),
    };
    let count_at = |i: usize| match arg(i) {
        Some(raw) => leading_integer(raw),
        None => Some(1),
    };

    match property.fn_name.as_str() {
        LINEAR_PROGRESSION => {
            let progression = LinearProgression {
                increment: increment_at(0)?,
                attempts: count_at(1)?,
            };
            let deload = match arg(2) {
                Some(raw) => Some(Deload {
                    decrement: parse_increment(raw)?,
                    attempts: count_at(3)?,
                }),
                None => None,
            };
            Some(Directive::Linear {
                progression,
                deload,
            })
        }
        SUM_REPS_PROGRESSION => Some(Directive::SumReps {
            reps: leading_integer(arg(0)?)?,
            increment: increment_at(1)?,
        }),
        DOUBLE_PROGRESSION => Some(Directive::Double {
            range: leading_integer(arg(0)?)?,
            increment: increment_at(1)?,
        }),
        _ => None,
    }
}

/// Initial state and finish-day script for a parsed directive
pub fn resolve(directive: &Directive, scripts: &dyn ProgressionScripts) -> ResolvedProgression {
    match directive {
        Directive::Linear {
            progression,
            deload,
        } => ResolvedProgression {
            state: vec![("successes", 0), ("failures", 0)],
            finish_day_expr: scripts.linear(progression, deload.as_ref()),
        },
        Directive::SumReps { reps, increment } => ResolvedProgression {
            state: vec![],
            finish_day_expr: scripts.sum_reps(*reps, increment),
        },
        Directive::Double { range, increment } => ResolvedProgression {
            state: vec![("addreps", 0)],
            finish_day_expr: scripts.double(*range, increment),
        },
    }
}

/// Parse `5lb`, `2.5kg` or `10%`
///
/// The leading number is the value. A `lb`/`kg` token anywhere selects that
/// unit; any other suffix (or none) means a percentage.
pub fn parse_increment(raw: &str) -> Option<Increment> {
    let value = leading_number(raw)?;
    let increment = if raw.contains("lb") {
        Increment::weight(value, Unit::Lb)
    } else if raw.contains("kg") {
        Increment::weight(value, Unit::Kg)
    } else {
        Increment::percent(value)
    };
    Some(increment)
}

/// Longest numeric prefix (`-2.5` in `-2.5kg`)
fn leading_number(raw: &str) -> Option<f64> {
    let raw = raw.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in raw.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    raw[..end].trim_end_matches('.').parse().ok()
}

/// Non-negative integer prefix (`3` in `3x`)
fn leading_integer(raw: &str) -> Option<u32> {
    let raw = raw.trim_start();
    let digits: String = raw.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
