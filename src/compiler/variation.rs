//! Variation building
//!
//! Each occurrence of an exercise expands its declared sets into program
//! sets; the ordered set list is encoded as a schema string, and occurrences
//! sharing a schema merge into one variation.

use crate::compiler::aggregate::Occurrence;
use crate::planner::{PlannerExercise, PlannerSet, RepRange};
use crate::program::ProgramSet;
use crate::types::DayData;
use std::collections::HashMap;

/// Function name of the double-progression directive
pub const DOUBLE_PROGRESSION: &str = "dp";

const ADD_REPS_SUFFIX: &str = " + state.addreps";

/// One distinct schema of an exercise and the days that use it
#[derive(Debug, Clone, PartialEq)]
pub struct Variation {
    pub schema: String,
    pub sets: Vec<ProgramSet>,
    pub days: Vec<DayData>,
}

/// Expand an occurrence's declared sets into individual program sets
///
/// Declarations without a rep range (timer-only lines) produce no sets.
pub fn program_sets(exercise: &PlannerExercise) -> Vec<ProgramSet> {
    let double_progression = exercise
        .progress()
        .is_some_and(|p| p.fn_name == DOUBLE_PROGRESSION);

    let mut sets = Vec::new();
    for set in &exercise.sets {
        let Some(range) = &set.rep_range else {
            continue;
        };
        for _ in 0..range.number_of_sets {
            sets.push(program_set(set, range, double_progression));
        }
    }
    sets
}

fn program_set(set: &PlannerSet, range: &RepRange, double_progression: bool) -> ProgramSet {
    let suffix = if double_progression { ADD_REPS_SUFFIX } else { "" };
    let min_reps_expr = (range.minrep != range.maxrep && range.minrep != 0)
        .then(|| format!("{}{}", range.minrep, suffix));

    ProgramSet {
        min_reps_expr,
        reps_expr: format!("{}{}", range.maxrep, suffix),
        weight_expr: weight_expr(set, range),
        is_amrap: range.is_amrap,
        rpe_expr: set.rpe.map(|rpe| rpe.to_string()),
    }
}

fn weight_expr(set: &PlannerSet, range: &RepRange) -> String {
    if let Some(weight) = &set.weight {
        return weight.to_string();
    }
    if let Some(percentage) = set.percentage {
        return if percentage == 100.0 {
            "state.weight".to_string()
        } else {
            format!("state.weight * {}", percentage / 100.0)
        };
    }
    let rpe = set.rpe.unwrap_or(10.0);
    if rpe < 10.0 {
        format!("state.weight * rpeMultiplier({}, {})", range.maxrep, rpe)
    } else {
        format!("state.weight * rpeMultiplier({})", range.maxrep)
    }
}

/// Canonical encoding of an ordered set list
///
/// `<minReps>-<maxReps>:<weight>` per set (`<reps>:<weight>` for a fixed rep
/// count), `+` appended for AMRAP, sets joined with `/`.
pub fn schema(sets: &[ProgramSet]) -> String {
    sets.iter()
        .map(|set| {
            let mut encoded = match &set.min_reps_expr {
                Some(min) => format!("{}-{}", min, set.reps_expr),
                None => set.reps_expr.clone(),
            };
            encoded.push(':');
            encoded.push_str(&set.weight_expr);
            if set.is_amrap {
                encoded.push('+');
            }
            encoded
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Merge occurrences by schema, in first-seen schema order
///
/// A variation keeps the program sets of its most recent occurrence; sets of
/// one schema only differ in fields the schema does not encode.
pub fn build_variations(occurrences: &[Occurrence<'_>]) -> Vec<Variation> {
    let mut variations: Vec<Variation> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for occurrence in occurrences {
        let sets = program_sets(occurrence.exercise);
        let schema = schema(&sets);
        match index.get(&schema) {
            Some(&slot) => {
                let variation = &mut variations[slot];
                variation.days.push(occurrence.day);
                variation.sets = sets;
            }
            None => {
                index.insert(schema.clone(), variations.len());
                variations.push(Variation {
                    schema,
                    sets,
                    days: vec![occurrence.day],
                });
            }
        }
    }

    variations
}
