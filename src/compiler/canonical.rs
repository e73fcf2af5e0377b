//! Day shape canonicalization
//!
//! Days whose ordered exercise sequence is identical collapse into one
//! canonical day shape, wherever they occur in the plan. This is how a week
//! pattern repeated over several weeks ends up as a single set of program days.

use crate::compiler::day_slots;
use crate::evaluator::EvaluatedWeeks;
use crate::types::{DayData, ExerciseIdentity};
use serde::Serialize;
use std::collections::HashMap;

/// Lightweight descriptor of one exercise in a day shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapeExercise {
    #[serde(skip)]
    pub identity: ExerciseIdentity,
    pub label: Option<String>,
    pub name: String,
    pub equipment: Option<String>,
}

/// A distinct ordered exercise sequence and every place it occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayShape {
    pub key: String,
    pub exercises: Vec<ShapeExercise>,
    pub occurrences: Vec<DayData>,
}

/// Group successfully evaluated days by exercise sequence
///
/// Shapes come back in order of first occurrence; each shape's occurrences
/// are in week-major, day-minor order. Failed days are skipped but still
/// advance the absolute day counter.
pub fn day_shapes(weeks: &EvaluatedWeeks) -> Vec<DayShape> {
    let mut shapes: Vec<DayShape> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (day_data, evaluation) in day_slots(weeks) {
        let Some(exercises) = evaluation.exercises() else {
            continue;
        };
        let descriptors: Vec<ShapeExercise> = exercises
            .iter()
            .map(|e| ShapeExercise {
                identity: ExerciseIdentity::new(
                    e.label.as_deref(),
                    &e.name,
                    e.equipment.as_deref(),
                ),
                label: e.label.clone(),
                name: e.name.clone(),
                equipment: e.equipment.clone(),
            })
            .collect();
        let key = descriptors
            .iter()
            .map(|d| d.identity.key())
            .collect::<Vec<_>>()
            .join("|");

        let slot = *index.entry(key.clone()).or_insert_with(|| {
            shapes.push(DayShape {
                key,
                exercises: descriptors,
                occurrences: Vec::new(),
            });
            shapes.len() - 1
        });
        shapes[slot].occurrences.push(day_data);
    }

    shapes
}
