//! Program assembly
//!
//! Merges variations, timers and progression into program exercises, and
//! canonical day shapes into program days and weeks.

use crate::catalog::CatalogExercise;
use crate::compiler::aggregate::ExerciseOccurrences;
use crate::compiler::canonical::DayShape;
use crate::compiler::{progression, selector, timer, variation};
use crate::config::CompilerConfig;
use crate::evaluator::EvaluatedWeeks;
use crate::ids::IdGenerator;
use crate::planner::PlannerProgram;
use crate::program::{
    DayRef, ExerciseRef, ExerciseType, ProgramDay, ProgramExercise, ProgramState,
    ProgramVariation, ProgramWeek, StateValue,
};
use crate::progression::ProgressionScripts;
use crate::types::{DayData, ExerciseIdentity};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Authored day names beyond this count collapse into one generated name
const MAX_DAY_NAMES: usize = 3;

pub(crate) struct Assembler<'a> {
    pub plan: &'a PlannerProgram,
    pub settings: &'a CompilerConfig,
    pub ids: &'a dyn IdGenerator,
    pub scripts: &'a dyn ProgressionScripts,
}

impl<'a> Assembler<'a> {
    /// Build one program exercise from all occurrences of an identity
    pub fn exercise(
        &self,
        group: &ExerciseOccurrences<'_>,
        catalog_exercise: &CatalogExercise,
    ) -> ProgramExercise {
        let first = group.first();
        let equipment = first
            .equipment
            .clone()
            .or_else(|| catalog_exercise.default_equipment.clone());

        let variations = variation::build_variations(&group.occurrences);
        let variation_expr = selector::variation_selector(&variations);
        let timer_expr = timer::timer_selector(&timer::collect_timers(&group.occurrences));

        let mut state = ProgramState::new();
        state.insert(
            "weight".to_string(),
            StateValue::Weight(catalog_exercise.starting_weight(self.settings.unit)),
        );
        let mut finish_day_expr = String::new();
        if let Some(property) = progression::progress_property(group) {
            match progression::parse_directive(property, self.settings.unit) {
                Some(directive) => {
                    let resolved = progression::resolve(&directive, self.scripts);
                    for (key, value) in resolved.state {
                        state.insert(key.to_string(), StateValue::Number(value));
                    }
                    finish_day_expr = resolved.finish_day_expr;
                }
                None => warn!(
                    exercise = %first.name,
                    directive = %property.fn_name,
                    args = ?property.fn_args,
                    "Ignoring unrecognized or malformed progression directive"
                ),
            }
        }

        let sets = || variations.iter().flat_map(|v| &v.sets);
        let enable_rpe = sets().any(|s| s.rpe_expr.is_some());
        let enable_rep_ranges = sets().any(|s| s.min_reps_expr.is_some());

        debug!(
            exercise = %group.identity,
            variations = variations.len(),
            has_timer = timer_expr.is_some(),
            has_progression = !finish_day_expr.is_empty(),
            "Built program exercise"
        );

        ProgramExercise {
            id: self.ids.generate(self.settings.id_length),
            name: catalog_exercise.name.clone(),
            exercise_type: ExerciseType {
                id: catalog_exercise.id.clone(),
                equipment,
            },
            variations: variations
                .into_iter()
                .map(|v| ProgramVariation { sets: v.sets })
                .collect(),
            variation_expr,
            timer_expr,
            finish_day_expr,
            state,
            descriptions: vec![],
            enable_rpe,
            enable_rep_ranges,
        }
    }

    /// One program day per shape, referencing program exercise ids
    ///
    /// Identities missing from `exercise_ids` (unresolved in the catalog)
    /// are left out of the day.
    pub fn days(
        &self,
        shapes: &[DayShape],
        exercise_ids: &HashMap<ExerciseIdentity, String>,
    ) -> Vec<ProgramDay> {
        let names = self.day_names(shapes);
        shapes
            .iter()
            .zip(names)
            .map(|(shape, name)| ProgramDay {
                id: self.ids.generate(self.settings.id_length),
                name,
                exercises: shape
                    .exercises
                    .iter()
                    .filter_map(|e| exercise_ids.get(&e.identity))
                    .map(|id| ExerciseRef { id: id.clone() })
                    .collect(),
            })
            .collect()
    }

    /// Name each shape from the authored day names at its occurrences
    ///
    /// A name already taken by a different shape gets the week name appended.
    /// More than three distinct names collapse into one generated name.
    pub fn day_names(&self, shapes: &[DayShape]) -> Vec<String> {
        let mut owners: HashMap<String, usize> = HashMap::new();
        let mut result = Vec::with_capacity(shapes.len());

        for (index, shape) in shapes.iter().enumerate() {
            let mut names: Vec<String> = Vec::new();
            for day in &shape.occurrences {
                let mut name = self.authored_day_name(day);
                if owners.get(&name).is_some_and(|&owner| owner != index) {
                    name = format!("{} ({})", name, self.week_name(day.week));
                }
                owners.entry(name.clone()).or_insert(index);
                if !names.contains(&name) {
                    names.push(name);
                }
            }
            if names.len() > MAX_DAY_NAMES {
                names = vec![format!(
                    "Day {}",
                    self.ids.generate(self.settings.day_name_id_length)
                )];
            }
            result.push(names.join("/"));
        }

        result
    }

    /// Weeks aligned with the evaluated plan; failed day slots stay empty
    pub fn weeks(
        &self,
        evaluated: &EvaluatedWeeks,
        shapes: &[DayShape],
        days: &[ProgramDay],
    ) -> Vec<ProgramWeek> {
        let mut weeks: Vec<ProgramWeek> = evaluated
            .iter()
            .enumerate()
            .map(|(week, slots)| ProgramWeek {
                id: self.ids.generate(self.settings.id_length),
                name: self.week_name(week),
                days: vec![None; slots.len()],
            })
            .collect();

        for (shape, day) in shapes.iter().zip(days) {
            for occurrence in &shape.occurrences {
                if let Some(slot) = weeks
                    .get_mut(occurrence.week)
                    .and_then(|w| w.days.get_mut(occurrence.day_in_week))
                {
                    *slot = Some(DayRef { id: day.id.clone() });
                }
            }
        }

        weeks
    }

    fn authored_day_name(&self, day: &DayData) -> String {
        self.plan
            .weeks
            .get(day.week)
            .and_then(|w| w.days.get(day.day_in_week))
            .and_then(|d| d.name.clone())
            .unwrap_or_else(|| format!("Day {}", day.day_in_week + 1))
    }

    fn week_name(&self, week: usize) -> String {
        self.plan
            .weeks
            .get(week)
            .and_then(|w| w.name.clone())
            .unwrap_or_else(|| format!("Week {}", week + 1))
    }
}
