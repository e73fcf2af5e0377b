//! Shared value types: units, weights, plan coordinates and exercise identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Weight unit a plan is authored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Lb,
    Kg,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Lb => "lb",
            Unit::Kg => "kg",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lb" | "lbs" => Ok(Unit::Lb),
            "kg" | "kgs" => Ok(Unit::Kg),
            other => Err(format!("Unknown unit: {} (must be 'lb' or 'kg')", other)),
        }
    }
}

/// A weight with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub value: f64,
    pub unit: Unit,
}

impl Weight {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// Coordinates of one day slot in the plan (all 0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayData {
    pub week: usize,
    pub day_in_week: usize,
    /// Absolute day counter across the whole plan
    pub day: usize,
}

impl DayData {
    pub fn new(week: usize, day_in_week: usize, day: usize) -> Self {
        Self {
            week,
            day_in_week,
            day,
        }
    }
}

impl fmt::Display for DayData {
    /// Human-facing, 1-based location
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "week {}, day {}", self.week + 1, self.day_in_week + 1)
    }
}

/// Normalize an exercise or equipment name for lookups and joins
///
/// NFKC-normalizes, trims and lowercases so that `"Bench Press"` and
/// `" bench press"` refer to the same thing.
pub fn normalize_name(name: &str) -> String {
    name.nfkc().collect::<String>().trim().to_lowercase()
}

/// Join key for one exercise across the whole plan
///
/// Built from (label, name, equipment). Used only to group occurrences;
/// never persisted in the emitted program.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExerciseIdentity {
    label: Option<String>,
    name: String,
    equipment: Option<String>,
}

impl ExerciseIdentity {
    pub fn new(label: Option<&str>, name: &str, equipment: Option<&str>) -> Self {
        let clean = |s: &str| {
            let n = normalize_name(s);
            if n.is_empty() {
                None
            } else {
                Some(n)
            }
        };
        Self {
            label: label.and_then(clean),
            name: normalize_name(name),
            equipment: equipment.and_then(clean),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn equipment(&self) -> Option<&str> {
        self.equipment.as_deref()
    }

    /// `label_name_equipment` with absent parts omitted
    pub fn key(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(3);
        if let Some(label) = &self.label {
            parts.push(label);
        }
        parts.push(&self.name);
        if let Some(equipment) = &self.equipment {
            parts.push(equipment);
        }
        parts.join("_")
    }
}

impl fmt::Display for ExerciseIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}
