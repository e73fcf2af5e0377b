//! Planner-to-Program Compiler
//!
//! Turns an evaluated plan into a flattened program: repeated day patterns
//! become canonical day shapes, per-exercise set schemas become variations
//! chosen by a selector expression, custom rest timers become a timer
//! selector, and progression directives become initial state plus a
//! finish-day script.
//!
//! A [`PlannerCompiler`] evaluates its plan at most once and reuses the result
//! for every stage. Instances are single-use: build a new one when the plan
//! or catalog change.

pub mod aggregate;
pub mod assemble;
pub mod canonical;
pub mod check;
pub mod progression;
pub mod selector;
pub mod timer;
pub mod variation;

use crate::catalog::ExerciseCatalog;
use crate::config::CompilerConfig;
use crate::error::CompileError;
use crate::evaluator::{DayEvaluation, EvaluatedWeeks, PlanEvaluator, StructuralEvaluator};
use crate::ids::{IdGenerator, RandomIds};
use crate::planner::PlannerProgram;
use crate::program::Program;
use crate::progression::{ProgressionScripts, ScriptTemplates};
use crate::types::DayData;
use assemble::Assembler;
use std::cell::OnceCell;
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

pub use aggregate::{ExerciseOccurrences, Occurrence};
pub use canonical::{DayShape, ShapeExercise};
pub use check::CheckReport;

/// Every day slot in week-major order with its coordinates
///
/// The absolute day counter advances once per slot, failed or not, so it
/// stays aligned with the authored plan.
pub(crate) fn day_slots(
    weeks: &EvaluatedWeeks,
) -> impl Iterator<Item = (DayData, &DayEvaluation)> + '_ {
    weeks
        .iter()
        .enumerate()
        .flat_map(|(week, days)| {
            days.iter()
                .enumerate()
                .map(move |(day_in_week, evaluation)| (week, day_in_week, evaluation))
        })
        .enumerate()
        .map(|(day, (week, day_in_week, evaluation))| {
            (DayData::new(week, day_in_week, day), evaluation)
        })
}

/// Compiles one plan against one catalog
pub struct PlannerCompiler<'a> {
    plan: &'a PlannerProgram,
    catalog: &'a ExerciseCatalog,
    settings: CompilerConfig,
    evaluator: Box<dyn PlanEvaluator + 'a>,
    scripts: Box<dyn ProgressionScripts + 'a>,
    ids: Box<dyn IdGenerator + 'a>,
    evaluated: OnceCell<EvaluatedWeeks>,
}

impl<'a> PlannerCompiler<'a> {
    /// Compiler with the structural evaluator, default scripts and random ids
    pub fn new(
        plan: &'a PlannerProgram,
        catalog: &'a ExerciseCatalog,
        settings: CompilerConfig,
    ) -> Self {
        Self {
            plan,
            catalog,
            settings,
            evaluator: Box::new(StructuralEvaluator),
            scripts: Box::new(ScriptTemplates),
            ids: Box::new(RandomIds::new()),
            evaluated: OnceCell::new(),
        }
    }

    pub fn with_evaluator(mut self, evaluator: impl PlanEvaluator + 'a) -> Self {
        self.evaluator = Box::new(evaluator);
        self.evaluated = OnceCell::new();
        self
    }

    pub fn with_scripts(mut self, scripts: impl ProgressionScripts + 'a) -> Self {
        self.scripts = Box::new(scripts);
        self
    }

    pub fn with_ids(mut self, ids: impl IdGenerator + 'a) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn settings(&self) -> &CompilerConfig {
        &self.settings
    }

    /// The evaluated plan, computed on first use
    pub fn evaluated_weeks(&self) -> &EvaluatedWeeks {
        self.evaluated.get_or_init(|| {
            let weeks = self.evaluator.evaluate(self.plan, self.catalog);
            for (day, evaluation) in day_slots(&weeks) {
                if let DayEvaluation::Failure(error) = evaluation {
                    debug!(%day, %error, "Day failed evaluation; excluded from compilation");
                }
            }
            weeks
        })
    }

    pub fn day_shapes(&self) -> Vec<DayShape> {
        canonical::day_shapes(self.evaluated_weeks())
    }

    pub fn exercise_occurrences(&self) -> Vec<ExerciseOccurrences<'_>> {
        aggregate::aggregate_exercises(self.evaluated_weeks())
    }

    /// Compile the plan into a program
    ///
    /// Fails only when a property is declared inconsistently for one exercise.
    #[instrument(skip(self), fields(plan = %self.plan.name, unit = %self.settings.unit))]
    pub fn compile(&self) -> Result<Program, CompileError> {
        let start = Instant::now();
        info!("Starting plan compilation");

        let evaluated = self.evaluated_weeks();
        let shapes = canonical::day_shapes(evaluated);
        let groups = aggregate::aggregate_exercises(evaluated);

        for group in &groups {
            progression::validate_properties(group)?;
        }

        let assembler = Assembler {
            plan: self.plan,
            settings: &self.settings,
            ids: self.ids.as_ref(),
            scripts: self.scripts.as_ref(),
        };

        let mut exercises = Vec::with_capacity(groups.len());
        let mut exercise_ids = HashMap::with_capacity(groups.len());
        for group in &groups {
            let name = &group.first().name;
            let Some(catalog_exercise) = self.catalog.find_by_name(name) else {
                warn!(exercise = %name, "Exercise not found in catalog; skipping");
                continue;
            };
            let exercise = assembler.exercise(group, catalog_exercise);
            exercise_ids.insert(group.identity.clone(), exercise.id.clone());
            exercises.push(exercise);
        }

        let days = assembler.days(&shapes, &exercise_ids);
        let weeks = assembler.weeks(evaluated, &shapes, &days);

        let program = Program {
            id: self.ids.generate(self.settings.id_length),
            name: self.plan.name.clone(),
            description: self.settings.description.clone(),
            url: String::new(),
            author: String::new(),
            next_day: 1,
            exercises,
            days,
            weeks,
            is_multiweek: true,
            tags: vec![],
        };

        info!(
            weeks = program.weeks.len(),
            day_shapes = program.days.len(),
            exercises = program.exercises.len(),
            duration_ms = start.elapsed().as_millis(),
            "Plan compilation completed"
        );
        Ok(program)
    }

    /// Run every check compilation would, without building the program
    pub fn check(&self) -> CheckReport {
        check::run(self)
    }

    pub(crate) fn catalog(&self) -> &ExerciseCatalog {
        self.catalog
    }
}
