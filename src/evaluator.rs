//! Plan Evaluation
//!
//! The planner evaluator turns an authored plan into a per-day list of
//! evaluated exercises. It is pluggable: the compiler only depends on the
//! [`PlanEvaluator`] trait. [`StructuralEvaluator`] is the built-in
//! implementation for plans that are already structured.

use crate::catalog::ExerciseCatalog;
use crate::planner::{PlannerDay, PlannerExercise, PlannerProgram};

/// Result of evaluating one day slot
#[derive(Debug, Clone, PartialEq)]
pub enum DayEvaluation {
    Success(Vec<PlannerExercise>),
    Failure(String),
}

impl DayEvaluation {
    pub fn exercises(&self) -> Option<&[PlannerExercise]> {
        match self {
            DayEvaluation::Success(exercises) => Some(exercises),
            DayEvaluation::Failure(_) => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DayEvaluation::Success(_))
    }
}

/// Week-major evaluation result; `[week][day_in_week]`, one slot per authored day
pub type EvaluatedWeeks = Vec<Vec<DayEvaluation>>;

/// Evaluates a plan against the exercise catalog
///
/// Implementations must preserve ordinal week/day order and produce a slot
/// for every authored day, failing days individually.
pub trait PlanEvaluator {
    fn evaluate(&self, plan: &PlannerProgram, catalog: &ExerciseCatalog) -> EvaluatedWeeks;
}

/// Pass-through evaluator with structural checks
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralEvaluator;

impl StructuralEvaluator {
    fn evaluate_day(day: &PlannerDay) -> DayEvaluation {
        for exercise in &day.exercises {
            if let Err(error) = check_exercise(exercise) {
                return DayEvaluation::Failure(error);
            }
        }
        DayEvaluation::Success(day.exercises.clone())
    }
}

impl PlanEvaluator for StructuralEvaluator {
    fn evaluate(&self, plan: &PlannerProgram, _catalog: &ExerciseCatalog) -> EvaluatedWeeks {
        plan.weeks
            .iter()
            .map(|week| week.days.iter().map(Self::evaluate_day).collect())
            .collect()
    }
}

fn check_exercise(exercise: &PlannerExercise) -> Result<(), String> {
    if exercise.name.trim().is_empty() {
        return Err("Exercise name is empty".to_string());
    }
    for (i, set) in exercise.sets.iter().enumerate() {
        let location = || format!("{}, set {}", exercise.name, i + 1);
        if let Some(range) = &set.rep_range {
            if range.number_of_sets == 0 {
                return Err(format!("{}: number of sets must be positive", location()));
            }
            if range.minrep > range.maxrep {
                return Err(format!(
                    "{}: min reps {} exceed max reps {}",
                    location(),
                    range.minrep,
                    range.maxrep
                ));
            }
        }
        if let Some(rpe) = set.rpe {
            if !(rpe > 0.0 && rpe <= 10.0) {
                return Err(format!("{}: RPE {} is outside (0, 10]", location(), rpe));
            }
        }
        if let Some(percentage) = set.percentage {
            if percentage <= 0.0 {
                return Err(format!(
                    "{}: percentage {} must be positive",
                    location(),
                    percentage
                ));
            }
        }
    }
    Ok(())
}
