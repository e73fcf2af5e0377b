//! Day shape listing.

use crate::compiler::{DayShape, ShapeExercise};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

fn describe(exercise: &ShapeExercise) -> String {
    let mut text = match &exercise.label {
        Some(label) => format!("{}: {}", label, exercise.name),
        None => exercise.name.clone(),
    };
    if let Some(equipment) = &exercise.equipment {
        text.push_str(&format!(" ({})", equipment));
    }
    text
}

pub fn format_shapes_text(shapes: &[DayShape]) -> String {
    if shapes.is_empty() {
        return "No day shapes: every day failed evaluation or the plan is empty.".to_string();
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Shape", "Exercises", "Occurrences"]);
    for (index, shape) in shapes.iter().enumerate() {
        let exercises = shape
            .exercises
            .iter()
            .map(describe)
            .collect::<Vec<_>>()
            .join("\n");
        let occurrences = shape
            .occurrences
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![(index + 1).to_string(), exercises, occurrences]);
    }
    format!("{} day shape(s)\n{}", shapes.len(), table)
}
