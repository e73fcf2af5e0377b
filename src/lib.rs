//! Liftplan: Planner-to-Program Compiler
//!
//! Compiles an evaluated multi-week workout plan into a flattened program:
//! deduplicated day shapes, per-exercise set variations picked by selector
//! expressions, rest timer selectors and progression state with finish-day
//! scripts.
//!
//! ```no_run
//! use liftplan::catalog::ExerciseCatalog;
//! use liftplan::compiler::PlannerCompiler;
//! use liftplan::config::CompilerConfig;
//! use liftplan::planner::PlannerProgram;
//!
//! # fn run(plan: PlannerProgram, catalog: ExerciseCatalog) -> Result<(), liftplan::error::CompileError> {
//! let program = PlannerCompiler::new(&plan, &catalog, CompilerConfig::default()).compile()?;
//! println!("{} exercises", program.exercises.len());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod cli;
pub mod compiler;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod ids;
pub mod logging;
pub mod planner;
pub mod program;
pub mod progression;
pub mod types;
