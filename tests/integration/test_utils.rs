//! Shared test utilities for integration tests
//!
//! Plan and catalog builders, a deterministic compiler, and isolation of the
//! environment variables configuration loading reads.

use liftplan::catalog::{CatalogExercise, ExerciseCatalog};
use liftplan::compiler::PlannerCompiler;
use liftplan::config::CompilerConfig;
use liftplan::ids::SequentialIds;
use liftplan::planner::{
    PlannerDay, PlannerExercise, PlannerProgram, PlannerProperty, PlannerSet, PlannerWeek,
    RepRange,
};
use liftplan::types::{Unit, Weight};
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ISOLATED_VARS: &[&str] = &[
    "HOME",
    "XDG_CONFIG_HOME",
    "LIFTPLAN_ENV",
    "LIFTPLAN__COMPILER__UNIT",
    "LIFTPLAN__COMPILER__ID_LENGTH",
];

/// Run `f` with HOME and XDG_CONFIG_HOME pointing into `test_dir` and every
/// liftplan variable cleared; the previous environment is restored afterwards
pub fn with_isolated_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let saved: Vec<(&str, Option<String>)> = ISOLATED_VARS
        .iter()
        .map(|name| (*name, std::env::var(name).ok()))
        .collect();

    let config_home = test_dir.path().join("config");
    let home = test_dir.path().join("home");
    std::fs::create_dir_all(&config_home).unwrap();
    std::fs::create_dir_all(&home).unwrap();
    for name in ISOLATED_VARS {
        std::env::remove_var(name);
    }
    std::env::set_var("HOME", &home);
    std::env::set_var("XDG_CONFIG_HOME", &config_home);

    let result = f();

    for (name, value) in saved {
        match value {
            Some(value) => std::env::set_var(name, value),
            None => std::env::remove_var(name),
        }
    }
    result
}

pub fn catalog() -> ExerciseCatalog {
    let entry = |id: &str, name: &str, equipment: Option<&str>, lb: f64, kg: f64| CatalogExercise {
        id: id.to_string(),
        name: name.to_string(),
        default_equipment: equipment.map(str::to_string),
        starting_weight_lb: Weight::new(lb, Unit::Lb),
        starting_weight_kg: Weight::new(kg, Unit::Kg),
    };
    ExerciseCatalog::new(vec![
        entry("squat", "Squat", Some("barbell"), 45.0, 20.0),
        entry("benchpress", "Bench Press", Some("barbell"), 45.0, 20.0),
        entry("deadlift", "Deadlift", Some("barbell"), 95.0, 40.0),
        entry("bicepcurl", "Bicep Curl", Some("dumbbell"), 10.0, 5.0),
    ])
}

pub fn sets(number_of_sets: u32, minrep: u32, maxrep: u32) -> PlannerSet {
    PlannerSet {
        rep_range: Some(RepRange {
            number_of_sets,
            minrep,
            maxrep,
            is_amrap: false,
        }),
        ..Default::default()
    }
}

pub fn percent(mut set: PlannerSet, percentage: f64) -> PlannerSet {
    set.percentage = Some(percentage);
    set
}

pub fn timed(mut set: PlannerSet, seconds: u32) -> PlannerSet {
    set.timer = Some(seconds);
    set
}

pub fn exercise(name: &str, sets: Vec<PlannerSet>) -> PlannerExercise {
    PlannerExercise {
        name: name.to_string(),
        label: None,
        equipment: None,
        sets,
        properties: vec![],
    }
}

pub fn with_progress(mut exercise: PlannerExercise, fn_name: &str, args: &[&str]) -> PlannerExercise {
    exercise
        .properties
        .push(PlannerProperty::new("progress", fn_name, args));
    exercise
}

pub fn day(name: Option<&str>, exercises: Vec<PlannerExercise>) -> PlannerDay {
    PlannerDay {
        name: name.map(str::to_string),
        exercises,
    }
}

pub fn week(days: Vec<PlannerDay>) -> PlannerWeek {
    PlannerWeek { name: None, days }
}

pub fn plan(weeks: Vec<PlannerWeek>) -> PlannerProgram {
    PlannerProgram {
        name: "Test Plan".to_string(),
        weeks,
    }
}

/// Compiler with deterministic ids
pub fn compiler<'a>(plan: &'a PlannerProgram, catalog: &'a ExerciseCatalog) -> PlannerCompiler<'a> {
    PlannerCompiler::new(plan, catalog, CompilerConfig::default()).with_ids(SequentialIds::new())
}
