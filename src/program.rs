//! Program Model
//!
//! The flattened, executable program produced by the compiler. Selector and
//! finish-day expressions are plain text for the workout-time script runtime.

use crate::types::Weight;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Compiled multi-week program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub author: String,
    pub next_day: u32,
    pub exercises: Vec<ProgramExercise>,
    pub days: Vec<ProgramDay>,
    pub weeks: Vec<ProgramWeek>,
    pub is_multiweek: bool,
    pub tags: Vec<String>,
}

impl Program {
    pub fn exercise(&self, id: &str) -> Option<&ProgramExercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn exercise_by_name(&self, name: &str) -> Option<&ProgramExercise> {
        self.exercises.iter().find(|e| e.name == name)
    }

    pub fn day(&self, id: &str) -> Option<&ProgramDay> {
        self.days.iter().find(|d| d.id == id)
    }
}

/// One generated set: expressions evaluated by the runtime
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramSet {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub min_reps_expr: Option<String>,
    pub reps_expr: String,
    pub weight_expr: String,
    pub is_amrap: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rpe_expr: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramVariation {
    pub sets: Vec<ProgramSet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseType {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub equipment: Option<String>,
}

/// Value held in an exercise's progression state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    Weight(Weight),
    Number(i64),
}

pub type ProgramState = BTreeMap<String, StateValue>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramExercise {
    pub id: String,
    pub name: String,
    pub exercise_type: ExerciseType,
    pub variations: Vec<ProgramVariation>,
    pub variation_expr: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timer_expr: Option<String>,
    pub finish_day_expr: String,
    pub state: ProgramState,
    pub descriptions: Vec<String>,
    pub enable_rpe: bool,
    pub enable_rep_ranges: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRef {
    pub id: String,
}

/// Canonical day shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramDay {
    pub id: String,
    pub name: String,
    pub exercises: Vec<ExerciseRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRef {
    pub id: String,
}

/// A week; `days[i]` is `None` for a day slot that failed evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramWeek {
    pub id: String,
    pub name: String,
    pub days: Vec<Option<DayRef>>,
}
