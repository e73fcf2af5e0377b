//! Planner Program Model
//!
//! The authored, human-facing plan: weeks of days of exercises. Plans arrive
//! already structured (the planner DSL is parsed elsewhere) and are read as
//! JSON with camelCase keys.

use crate::types::Weight;
use serde::{Deserialize, Serialize};

/// Authored multi-week plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerProgram {
    pub name: String,
    #[serde(default)]
    pub weeks: Vec<PlannerWeek>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerWeek {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub days: Vec<PlannerDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerDay {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub exercises: Vec<PlannerExercise>,
}

/// One exercise line of a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerExercise {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default)]
    pub sets: Vec<PlannerSet>,
    #[serde(default)]
    pub properties: Vec<PlannerProperty>,
}

impl PlannerExercise {
    /// The `progress` directive, if declared
    pub fn progress(&self) -> Option<&PlannerProperty> {
        self.properties.iter().find(|p| p.name == PROGRESS_PROPERTY)
    }
}

/// One set declaration. A set without a rep range only carries a day-level
/// fallback timer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlannerSet {
    #[serde(default)]
    pub rep_range: Option<RepRange>,
    #[serde(default)]
    pub weight: Option<Weight>,
    #[serde(default)]
    pub percentage: Option<f64>,
    #[serde(default)]
    pub rpe: Option<f64>,
    /// Rest timer in seconds
    #[serde(default)]
    pub timer: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepRange {
    pub number_of_sets: u32,
    pub minrep: u32,
    pub maxrep: u32,
    #[serde(default)]
    pub is_amrap: bool,
}

/// Name of the progressive-overload property
pub const PROGRESS_PROPERTY: &str = "progress";

/// A property directive such as `progress: lp(5lb, 3)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerProperty {
    pub name: String,
    pub fn_name: String,
    #[serde(default)]
    pub fn_args: Vec<String>,
}

impl PlannerProperty {
    pub fn new(name: &str, fn_name: &str, fn_args: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            fn_name: fn_name.to_string(),
            fn_args: fn_args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Same function and identical argument list
    pub fn same_call(&self, other: &PlannerProperty) -> bool {
        self.fn_name == other.fn_name && self.fn_args == other.fn_args
    }
}
