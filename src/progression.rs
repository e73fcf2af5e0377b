//! Finish-day script builders
//!
//! A finish-day script runs in the workout runtime after a workout and
//! updates the exercise's progression state. The compiler parses progression
//! directives into the parameter types below and hands them to a
//! [`ProgressionScripts`] implementation to render the script text.

use crate::types::Unit;
use std::fmt;

/// Unit of an increment: an absolute weight or a percentage of current weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncrementUnit {
    Weight(Unit),
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Increment {
    pub value: f64,
    pub unit: IncrementUnit,
}

impl Increment {
    pub fn weight(value: f64, unit: Unit) -> Self {
        Self {
            value,
            unit: IncrementUnit::Weight(unit),
        }
    }

    pub fn percent(value: f64) -> Self {
        Self {
            value,
            unit: IncrementUnit::Percent,
        }
    }

    /// Expression for the weight after adding this increment
    fn raised(&self) -> String {
        match self.unit {
            IncrementUnit::Weight(unit) => format!("state.weight + {}{}", self.value, unit),
            IncrementUnit::Percent => format!("state.weight + state.weight * {} / 100", self.value),
        }
    }

    /// Expression for the weight after subtracting this increment
    fn lowered(&self) -> String {
        match self.unit {
            IncrementUnit::Weight(unit) => format!("state.weight - {}{}", self.value, unit),
            IncrementUnit::Percent => format!("state.weight - state.weight * {} / 100", self.value),
        }
    }
}

impl fmt::Display for Increment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            IncrementUnit::Weight(unit) => write!(f, "{}{}", self.value, unit),
            IncrementUnit::Percent => write!(f, "{}%", self.value),
        }
    }
}

/// Raise weight after `attempts` consecutive successful workouts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearProgression {
    pub increment: Increment,
    pub attempts: u32,
}

/// Lower weight after `attempts` consecutive failed workouts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deload {
    pub decrement: Increment,
    pub attempts: u32,
}

/// Renders finish-day scripts for each progression kind
pub trait ProgressionScripts {
    fn linear(&self, progression: &LinearProgression, deload: Option<&Deload>) -> String;

    /// Raise weight once reps summed across all sets reach `reps`
    fn sum_reps(&self, reps: u32, increment: &Increment) -> String;

    /// Grow reps by one per success up to `range`, then raise weight and reset reps
    fn double(&self, range: u32, increment: &Increment) -> String;
}

/// Default script renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptTemplates;

impl ProgressionScripts for ScriptTemplates {
    fn linear(&self, progression: &LinearProgression, deload: Option<&Deload>) -> String {
        let mut lines = vec![
            "if (completedReps >= reps) {".to_string(),
            "  state.successes = state.successes + 1".to_string(),
        ];
        if deload.is_some() {
            lines.push("  state.failures = 0".to_string());
        }
        lines.extend([
            format!("  if (state.successes >= {}) {{", progression.attempts),
            format!("    state.weight = {}", progression.increment.raised()),
            "    state.successes = 0".to_string(),
            "  }".to_string(),
        ]);
        match deload {
            Some(deload) => lines.extend([
                "} else {".to_string(),
                "  state.successes = 0".to_string(),
                "  state.failures = state.failures + 1".to_string(),
                format!("  if (state.failures >= {}) {{", deload.attempts),
                format!("    state.weight = {}", deload.decrement.lowered()),
                "    state.failures = 0".to_string(),
                "  }".to_string(),
                "}".to_string(),
            ]),
            None => lines.push("}".to_string()),
        }
        lines.join("\n")
    }

    fn sum_reps(&self, reps: u32, increment: &Increment) -> String {
        [
            format!("if (sum(completedReps) >= {}) {{", reps),
            format!("  state.weight = {}", increment.raised()),
            "}".to_string(),
        ]
        .join("\n")
    }

    fn double(&self, range: u32, increment: &Increment) -> String {
        [
            "if (completedReps >= reps) {".to_string(),
            format!("  if (state.addreps < {}) {{", range),
            "    state.addreps = state.addreps + 1".to_string(),
            "  } else {".to_string(),
            format!("    state.weight = {}", increment.raised()),
            "    state.addreps = 0".to_string(),
            "  }".to_string(),
            "}".to_string(),
        ]
        .join("\n")
    }
}
