//! CLI route: single route table and run context. Dispatches to the compiler and presentation.

use crate::catalog::ExerciseCatalog;
use crate::cli::command_name;
use crate::cli::output::CommandOutput;
use crate::cli::parse::{Commands, ShapesFormat};
use crate::cli::presentation::{format_check_report_text, format_shapes_text};
use crate::compiler::PlannerCompiler;
use crate::config::{ConfigLoader, LiftplanConfig};
use crate::error::ApiError;
use crate::planner::PlannerProgram;
use crate::types::Unit;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, info_span};

/// Runtime context for CLI execution: workspace and effective configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: LiftplanConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self::with_config(workspace_root, config))
    }

    pub fn with_config(workspace_root: PathBuf, config: LiftplanConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    pub fn config(&self) -> &LiftplanConfig {
        &self.config
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, ApiError> {
        let name = command_name(command);
        let _span = info_span!(
            "command",
            command = name,
            workspace = %self.workspace_root().display()
        )
        .entered();
        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis(),
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<CommandOutput, ApiError> {
        match command {
            Commands::Compile {
                plan,
                catalog,
                unit,
                output,
                compact,
            } => self.handle_compile(plan, catalog, *unit, output.as_deref(), *compact),
            Commands::Shapes {
                plan,
                catalog,
                format,
            } => self.handle_shapes(plan, catalog, *format),
            Commands::Check { plan, catalog } => self.handle_check(plan, catalog),
            Commands::Config => Ok(CommandOutput::success(self.config.to_toml()?)),
        }
    }

    fn handle_compile(
        &self,
        plan_path: &Path,
        catalog_path: &Path,
        unit: Option<Unit>,
        output: Option<&Path>,
        compact: bool,
    ) -> Result<CommandOutput, ApiError> {
        let (plan, catalog) = load_inputs(plan_path, catalog_path)?;
        let mut settings = self.config.compiler.clone();
        if let Some(unit) = unit {
            settings.unit = unit;
        }

        let program = PlannerCompiler::new(&plan, &catalog, settings).compile()?;
        let json = if compact {
            serde_json::to_string(&program)
        } else {
            serde_json::to_string_pretty(&program)
        }
        .map_err(|e| ApiError::InvalidInput(format!("Failed to encode program: {}", e)))?;

        match output {
            Some(path) => {
                std::fs::write(path, json.as_bytes()).map_err(|e| with_path(e, path))?;
                Ok(CommandOutput::success(format!(
                    "Wrote program '{}' ({} exercises, {} days, {} weeks) to {}",
                    program.name,
                    program.exercises.len(),
                    program.days.len(),
                    program.weeks.len(),
                    path.display()
                )))
            }
            None => Ok(CommandOutput::success(json)),
        }
    }

    fn handle_shapes(
        &self,
        plan_path: &Path,
        catalog_path: &Path,
        format: ShapesFormat,
    ) -> Result<CommandOutput, ApiError> {
        let (plan, catalog) = load_inputs(plan_path, catalog_path)?;
        let compiler = PlannerCompiler::new(&plan, &catalog, self.config.compiler.clone());
        let shapes = compiler.day_shapes();
        let text = match format {
            ShapesFormat::Json => serde_json::to_string_pretty(&shapes)
                .map_err(|e| ApiError::InvalidInput(format!("Failed to encode shapes: {}", e)))?,
            ShapesFormat::Text => format_shapes_text(&shapes),
        };
        Ok(CommandOutput::success(text))
    }

    fn handle_check(&self, plan_path: &Path, catalog_path: &Path) -> Result<CommandOutput, ApiError> {
        let (plan, catalog) = load_inputs(plan_path, catalog_path)?;
        let compiler = PlannerCompiler::new(&plan, &catalog, self.config.compiler.clone());
        let report = compiler.check();
        let text = format_check_report_text(&report);
        if report.has_conflict() {
            Ok(CommandOutput::failure(text))
        } else {
            Ok(CommandOutput::success(text))
        }
    }
}

fn load_inputs(
    plan_path: &Path,
    catalog_path: &Path,
) -> Result<(PlannerProgram, ExerciseCatalog), ApiError> {
    let plan: PlannerProgram = read_json(plan_path)?;
    let catalog: ExerciseCatalog = read_json(catalog_path)?;
    info!(
        plan = %plan.name,
        weeks = plan.weeks.len(),
        catalog_entries = catalog.len(),
        "Loaded inputs"
    );
    Ok((plan, catalog))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ApiError> {
    let bytes = std::fs::read(path).map_err(|e| with_path(e, path))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ApiError::InvalidInput(format!("{}: {}", path.display(), e)))
}

fn with_path(err: std::io::Error, path: &Path) -> ApiError {
    ApiError::IoError(std::io::Error::new(
        err.kind(),
        format!("{}: {}", path.display(), err),
    ))
}
