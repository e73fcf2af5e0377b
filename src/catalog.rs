//! Exercise catalog: the read-only set of exercises a plan may reference.

use crate::types::{normalize_name, Unit, Weight};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogExercise {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub default_equipment: Option<String>,
    pub starting_weight_lb: Weight,
    pub starting_weight_kg: Weight,
}

impl CatalogExercise {
    /// Starting weight expressed in the plan's unit
    pub fn starting_weight(&self, unit: Unit) -> Weight {
        match unit {
            Unit::Lb => self.starting_weight_lb,
            Unit::Kg => self.starting_weight_kg,
        }
    }
}

/// Exercise catalog with normalized-name lookup
#[derive(Debug, Clone, Default)]
pub struct ExerciseCatalog {
    exercises: Vec<CatalogExercise>,
    by_name: HashMap<String, usize>,
}

impl ExerciseCatalog {
    pub fn new(exercises: Vec<CatalogExercise>) -> Self {
        let mut by_name = HashMap::with_capacity(exercises.len());
        for (i, exercise) in exercises.iter().enumerate() {
            // First entry wins on duplicate names
            by_name.entry(normalize_name(&exercise.name)).or_insert(i);
        }
        Self { exercises, by_name }
    }

    /// Look up an exercise by name. Absence is a legal outcome.
    pub fn find_by_name(&self, name: &str) -> Option<&CatalogExercise> {
        self.by_name
            .get(&normalize_name(name))
            .map(|&i| &self.exercises[i])
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogExercise> {
        self.exercises.iter()
    }
}

impl Serialize for ExerciseCatalog {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.exercises.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ExerciseCatalog {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<CatalogExercise>::deserialize(deserializer).map(ExerciseCatalog::new)
    }
}
