//! Property-based tests for determinism guarantees

use liftplan::catalog::{CatalogExercise, ExerciseCatalog};
use liftplan::compiler::PlannerCompiler;
use liftplan::config::CompilerConfig;
use liftplan::ids::SequentialIds;
use liftplan::planner::{
    PlannerDay, PlannerExercise, PlannerProgram, PlannerSet, PlannerWeek, RepRange,
};
use liftplan::types::{Unit, Weight};
use proptest::prelude::*;

const NAMES: &[&str] = &["Squat", "Bench Press", "Deadlift"];

fn catalog() -> ExerciseCatalog {
    ExerciseCatalog::new(
        NAMES
            .iter()
            .map(|name| CatalogExercise {
                id: name.to_lowercase().replace(' ', ""),
                name: name.to_string(),
                default_equipment: Some("barbell".to_string()),
                starting_weight_lb: Weight::new(45.0, Unit::Lb),
                starting_weight_kg: Weight::new(20.0, Unit::Kg),
            })
            .collect(),
    )
}

fn set_strategy() -> impl Strategy<Value = PlannerSet> {
    (
        1u32..4,
        1u32..6,
        0u32..4,
        proptest::option::of(prop_oneof![Just(70.0), Just(75.0), Just(100.0)]),
        proptest::option::of(prop_oneof![Just(60u32), Just(120u32)]),
    )
        .prop_map(|(number_of_sets, minrep, spread, percentage, timer)| PlannerSet {
            rep_range: Some(RepRange {
                number_of_sets,
                minrep,
                maxrep: minrep + spread,
                is_amrap: false,
            }),
            percentage,
            timer,
            ..Default::default()
        })
}

fn exercise_strategy() -> impl Strategy<Value = PlannerExercise> {
    (0..NAMES.len(), prop::collection::vec(set_strategy(), 1..3)).prop_map(|(name, sets)| {
        PlannerExercise {
            name: NAMES[name].to_string(),
            label: None,
            equipment: None,
            sets,
            properties: vec![],
        }
    })
}

fn plan_strategy() -> impl Strategy<Value = PlannerProgram> {
    let day = prop::collection::vec(exercise_strategy(), 1..3).prop_map(|exercises| PlannerDay {
        name: None,
        exercises,
    });
    let week = prop::collection::vec(day, 1..4).prop_map(|days| PlannerWeek { name: None, days });
    prop::collection::vec(week, 1..4).prop_map(|weeks| PlannerProgram {
        name: "Generated".to_string(),
        weeks,
    })
}

fn filler() -> PlannerExercise {
    PlannerExercise {
        name: "Deadlift".to_string(),
        label: None,
        equipment: None,
        sets: vec![PlannerSet {
            rep_range: Some(RepRange {
                number_of_sets: 1,
                minrep: 5,
                maxrep: 5,
                is_amrap: false,
            }),
            ..Default::default()
        }],
        properties: vec![],
    }
}

/// One squat declaration plus a week/day grid of (placed, filler first) flags
fn repeated_exercise_strategy() -> impl Strategy<Value = (PlannerExercise, Vec<Vec<(bool, bool)>>)> {
    let squat = prop::collection::vec(set_strategy(), 1..3).prop_map(|sets| PlannerExercise {
        name: "Squat".to_string(),
        label: None,
        equipment: None,
        sets,
        properties: vec![],
    });
    let slots = prop::collection::vec(
        prop::collection::vec((any::<bool>(), any::<bool>()), 1..4),
        1..5,
    )
    .prop_filter("squat must occur at least once", |weeks| {
        weeks.iter().flatten().any(|&(placed, _)| placed)
    });
    (squat, slots)
}

fn compile_json(plan: &PlannerProgram, catalog: &ExerciseCatalog) -> String {
    let program = PlannerCompiler::new(plan, catalog, CompilerConfig::default())
        .with_ids(SequentialIds::new())
        .compile()
        .unwrap();
    serde_json::to_string(&program).unwrap()
}

proptest! {
    /// Identical sets repeated across weeks and days collapse into one variation
    #[test]
    fn test_repeated_sets_share_one_variation(
        (squat, slots) in repeated_exercise_strategy()
    ) {
        let plan = PlannerProgram {
            name: "Repeated".to_string(),
            weeks: slots
                .iter()
                .map(|days| PlannerWeek {
                    name: None,
                    days: days
                        .iter()
                        .map(|&(placed, filler_first)| {
                            let mut exercises = vec![];
                            if !placed || filler_first {
                                exercises.push(filler());
                            }
                            if placed {
                                exercises.push(squat.clone());
                            }
                            PlannerDay { name: None, exercises }
                        })
                        .collect(),
                })
                .collect(),
        };
        let catalog = catalog();
        let program = PlannerCompiler::new(&plan, &catalog, CompilerConfig::default())
            .with_ids(SequentialIds::new())
            .compile()
            .unwrap();

        let compiled = program.exercise_by_name("Squat").unwrap();
        prop_assert_eq!(compiled.variations.len(), 1);
        prop_assert!(compiled.variation_expr.ends_with("? 1 :\n 1"));
        prop_assert!(!compiled.variation_expr.contains("? 2 :"));
        for (week, days) in slots.iter().enumerate() {
            if days.iter().any(|&(placed, _)| placed) {
                let clause = format!("week == {}", week + 1);
                prop_assert!(compiled.variation_expr.contains(&clause));
            }
        }
    }

    /// Compiling the same plan twice with sequential ids is byte-identical
    #[test]
    fn test_compile_idempotence(plan in plan_strategy()) {
        let catalog = catalog();
        prop_assert_eq!(compile_json(&plan, &catalog), compile_json(&plan, &catalog));
    }

    /// Every evaluated day lands in exactly one shape and one week slot
    #[test]
    fn test_every_day_has_one_shape(plan in plan_strategy()) {
        let catalog = catalog();
        let compiler = PlannerCompiler::new(&plan, &catalog, CompilerConfig::default())
            .with_ids(SequentialIds::new());
        let total_days: usize = plan.weeks.iter().map(|w| w.days.len()).sum();
        let shaped: usize = compiler.day_shapes().iter().map(|s| s.occurrences.len()).sum();
        prop_assert_eq!(shaped, total_days);

        let program = compiler.compile().unwrap();
        for (week, authored) in program.weeks.iter().zip(&plan.weeks) {
            prop_assert_eq!(week.days.len(), authored.days.len());
            prop_assert!(week.days.iter().all(|slot| slot.is_some()));
        }
    }

    /// Variation selectors always end in the fallback and name every variation
    #[test]
    fn test_variation_selector_covers_variations(plan in plan_strategy()) {
        let catalog = catalog();
        let program = PlannerCompiler::new(&plan, &catalog, CompilerConfig::default())
            .with_ids(SequentialIds::new())
            .compile()
            .unwrap();
        for exercise in &program.exercises {
            prop_assert!(exercise.variation_expr.ends_with(":\n 1"));
            for index in 1..=exercise.variations.len() {
                let branch = format!("? {} :", index);
                prop_assert!(exercise.variation_expr.contains(&branch));
            }
        }
    }
}
