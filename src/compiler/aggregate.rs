//! Exercise aggregation: every occurrence of each exercise identity.

use crate::compiler::day_slots;
use crate::evaluator::EvaluatedWeeks;
use crate::planner::PlannerExercise;
use crate::types::{DayData, ExerciseIdentity};
use std::collections::HashMap;

/// One appearance of an exercise in the evaluated plan
#[derive(Debug, Clone, Copy)]
pub struct Occurrence<'a> {
    pub day: DayData,
    pub exercise: &'a PlannerExercise,
}

/// All occurrences of one exercise identity, in week/day traversal order
#[derive(Debug, Clone)]
pub struct ExerciseOccurrences<'a> {
    pub identity: ExerciseIdentity,
    pub occurrences: Vec<Occurrence<'a>>,
}

impl<'a> ExerciseOccurrences<'a> {
    /// The first authored occurrence; every group has at least one
    pub fn first(&self) -> &'a PlannerExercise {
        self.occurrences[0].exercise
    }
}

/// Collect occurrences per identity
///
/// Groups are ordered by first appearance and occurrences keep traversal
/// order; "first occurrence wins" decisions downstream rely on both.
pub fn aggregate_exercises(weeks: &EvaluatedWeeks) -> Vec<ExerciseOccurrences<'_>> {
    let mut groups: Vec<ExerciseOccurrences<'_>> = Vec::new();
    let mut index: HashMap<ExerciseIdentity, usize> = HashMap::new();

    for (day, evaluation) in day_slots(weeks) {
        let Some(exercises) = evaluation.exercises() else {
            continue;
        };
        for exercise in exercises {
            let identity = ExerciseIdentity::new(
                exercise.label.as_deref(),
                &exercise.name,
                exercise.equipment.as_deref(),
            );
            let slot = match index.get(&identity) {
                Some(&slot) => slot,
                None => {
                    index.insert(identity.clone(), groups.len());
                    groups.push(ExerciseOccurrences {
                        identity,
                        occurrences: Vec::new(),
                    });
                    groups.len() - 1
                }
            };
            groups[slot].occurrences.push(Occurrence { day, exercise });
        }
    }

    groups
}
