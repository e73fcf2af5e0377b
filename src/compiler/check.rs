//! Dry-run diagnostics
//!
//! Runs evaluation, property validation, catalog resolution and directive
//! parsing without building a program, and collects everything compilation
//! would skip or reject.

use crate::compiler::{progression, PlannerCompiler};
use crate::error::CompileError;
use crate::evaluator::DayEvaluation;
use crate::planner::PlannerProperty;
use crate::types::DayData;
use serde::Serialize;

/// A day the evaluator rejected
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationFailure {
    pub day: DayData,
    pub error: String,
}

/// A progression directive that will attach nothing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IgnoredDirective {
    pub exercise: String,
    pub directive: String,
    pub args: Vec<String>,
}

impl From<(&str, &PlannerProperty)> for IgnoredDirective {
    fn from((exercise, property): (&str, &PlannerProperty)) -> Self {
        Self {
            exercise: exercise.to_string(),
            directive: property.fn_name.clone(),
            args: property.fn_args.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckReport {
    pub evaluation_failures: Vec<EvaluationFailure>,
    /// Authored names with no catalog entry, in first-seen order
    pub unresolved_exercises: Vec<String>,
    pub ignored_directives: Vec<IgnoredDirective>,
    /// Set when compilation would abort
    #[serde(skip)]
    pub conflict: Option<CompileError>,
}

impl CheckReport {
    /// Whether compilation would fail
    pub fn has_conflict(&self) -> bool {
        self.conflict.is_some()
    }

    /// Whether compilation would run without dropping anything
    pub fn is_clean(&self) -> bool {
        self.evaluation_failures.is_empty()
            && self.unresolved_exercises.is_empty()
            && self.ignored_directives.is_empty()
            && self.conflict.is_none()
    }
}

pub(crate) fn run(compiler: &PlannerCompiler<'_>) -> CheckReport {
    let mut report = CheckReport::default();
    let unit = compiler.settings().unit;

    for (day, evaluation) in super::day_slots(compiler.evaluated_weeks()) {
        if let DayEvaluation::Failure(error) = evaluation {
            report.evaluation_failures.push(EvaluationFailure {
                day,
                error: error.clone(),
            });
        }
    }

    for group in compiler.exercise_occurrences() {
        if report.conflict.is_none() {
            report.conflict = progression::validate_properties(&group).err();
        }

        let name = &group.first().name;
        if compiler.catalog().find_by_name(name).is_none() {
            if !report.unresolved_exercises.contains(name) {
                report.unresolved_exercises.push(name.clone());
            }
            continue;
        }

        if let Some(property) = progression::progress_property(&group) {
            if progression::parse_directive(property, unit).is_none() {
                report
                    .ignored_directives
                    .push(IgnoredDirective::from((name.as_str(), property)));
            }
        }
    }

    report
}
