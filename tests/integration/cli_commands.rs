//! CLI route table over plan and catalog files

use crate::integration::test_utils::*;
use clap::Parser;
use liftplan::cli::{Cli, Commands, RunContext, ShapesFormat};
use liftplan::config::LiftplanConfig;
use liftplan::error::ApiError;
use liftplan::program::Program;
use std::path::PathBuf;
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
    plan: PathBuf,
    catalog: PathBuf,
}

fn fixture(plan_value: &liftplan::planner::PlannerProgram) -> Fixture {
    let dir = TempDir::new().unwrap();
    let plan = dir.path().join("plan.json");
    let catalog = dir.path().join("catalog.json");
    std::fs::write(&plan, serde_json::to_vec(plan_value).unwrap()).unwrap();
    std::fs::write(&catalog, serde_json::to_vec(&crate::integration::test_utils::catalog()).unwrap())
        .unwrap();
    Fixture { dir, plan, catalog }
}

fn context(fixture: &Fixture) -> RunContext {
    RunContext::with_config(fixture.dir.path().to_path_buf(), LiftplanConfig::default())
}

fn two_week_plan() -> liftplan::planner::PlannerProgram {
    plan(vec![
        week(vec![
            day(Some("Legs"), vec![exercise("Squat", vec![sets(3, 5, 5)])]),
            day(Some("Push"), vec![exercise("Bench Press", vec![sets(3, 5, 5)])]),
        ]),
        week(vec![
            day(Some("Legs"), vec![exercise("Squat", vec![sets(3, 3, 3)])]),
            day(Some("Push"), vec![exercise("Bench Press", vec![sets(3, 5, 5)])]),
        ]),
    ])
}

#[test]
fn test_compile_writes_program_file() {
    let fixture = fixture(&two_week_plan());
    let output = fixture.dir.path().join("program.json");
    let result = context(&fixture)
        .execute(&Commands::Compile {
            plan: fixture.plan.clone(),
            catalog: fixture.catalog.clone(),
            unit: None,
            output: Some(output.clone()),
            compact: true,
        })
        .unwrap();

    assert_eq!(result.exit_code, 0);
    assert!(result.text.starts_with("Wrote program 'Test Plan'"));
    let program: Program = serde_json::from_slice(&std::fs::read(&output).unwrap()).unwrap();
    assert_eq!(program.exercises.len(), 2);
    assert_eq!(program.days.len(), 2);
    assert_eq!(program.days[0].name, "Legs");
}

#[test]
fn test_compile_to_stdout_is_json() {
    let fixture = fixture(&two_week_plan());
    let result = context(&fixture)
        .execute(&Commands::Compile {
            plan: fixture.plan.clone(),
            catalog: fixture.catalog.clone(),
            unit: None,
            output: None,
            compact: false,
        })
        .unwrap();

    let program: Program = serde_json::from_str(&result.text).unwrap();
    assert_eq!(program.weeks.len(), 2);
}

#[test]
fn test_shapes_json_lists_occurrences() {
    let fixture = fixture(&two_week_plan());
    let result = context(&fixture)
        .execute(&Commands::Shapes {
            plan: fixture.plan.clone(),
            catalog: fixture.catalog.clone(),
            format: ShapesFormat::Json,
        })
        .unwrap();

    let shapes: serde_json::Value = serde_json::from_str(&result.text).unwrap();
    assert_eq!(shapes.as_array().unwrap().len(), 2);
    assert_eq!(shapes[0]["occurrences"].as_array().unwrap().len(), 2);
    assert_eq!(shapes[0]["exercises"][0]["name"], "Squat");
}

#[test]
fn test_check_fails_only_on_conflict() {
    let clean = fixture(&two_week_plan());
    let result = context(&clean)
        .execute(&Commands::Check {
            plan: clean.plan.clone(),
            catalog: clean.catalog.clone(),
        })
        .unwrap();
    assert_eq!(result.exit_code, 0);

    let conflicting = fixture(&plan(vec![
        week(vec![day(
            None,
            vec![with_progress(exercise("Squat", vec![sets(3, 5, 5)]), "lp", &["5lb"])],
        )]),
        week(vec![day(
            None,
            vec![with_progress(exercise("Squat", vec![sets(3, 5, 5)]), "sum", &["30"])],
        )]),
    ]));
    let result = context(&conflicting)
        .execute(&Commands::Check {
            plan: conflicting.plan.clone(),
            catalog: conflicting.catalog.clone(),
        })
        .unwrap();
    assert_eq!(result.exit_code, 1);
    assert!(result.text.contains("Same property 'progress'"));
}

#[test]
fn test_malformed_plan_is_invalid_input() {
    let fixture = fixture(&two_week_plan());
    std::fs::write(&fixture.plan, "{ \"weeks\": 3 }").unwrap();
    let err = context(&fixture)
        .execute(&Commands::Compile {
            plan: fixture.plan.clone(),
            catalog: fixture.catalog.clone(),
            unit: None,
            output: None,
            compact: false,
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

#[test]
fn test_missing_catalog_is_io_error() {
    let fixture = fixture(&two_week_plan());
    let err = context(&fixture)
        .execute(&Commands::Check {
            plan: fixture.plan.clone(),
            catalog: fixture.dir.path().join("missing.json"),
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::IoError(_)));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_config_command_prints_toml() {
    let fixture = fixture(&two_week_plan());
    let result = context(&fixture).execute(&Commands::Config).unwrap();
    assert!(result.text.contains("unit = \"lb\""));
    assert!(result.text.contains("id_length = 8"));
}

#[test]
fn test_cli_parses_unit_flag() {
    let cli = Cli::try_parse_from([
        "liftplan", "compile", "--plan", "p.json", "--catalog", "c.json", "--unit", "kg",
    ])
    .unwrap();
    match cli.command {
        Commands::Compile { unit, compact, .. } => {
            assert_eq!(unit, Some(liftplan::types::Unit::Kg));
            assert!(!compact);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_run_context_keeps_workspace_root() {
    let fixture = fixture(&two_week_plan());
    let context = context(&fixture);
    assert_eq!(context.workspace_root(), fixture.dir.path());
    assert_eq!(context.config(), &LiftplanConfig::default());
}
