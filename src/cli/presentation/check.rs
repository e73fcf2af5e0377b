//! Check report.

use crate::compiler::CheckReport;
use owo_colors::OwoColorize;

pub fn format_check_report_text(report: &CheckReport) -> String {
    if report.is_clean() {
        return format!("{} plan compiles without dropping anything", "OK".green().bold());
    }

    let mut s = String::new();
    if let Some(conflict) = &report.conflict {
        s.push_str(&format!("{} {}\n", "error:".red().bold(), conflict));
    }
    if !report.evaluation_failures.is_empty() {
        s.push_str(&format!(
            "\n{} ({}):",
            "Days excluded by evaluation".yellow().bold(),
            report.evaluation_failures.len()
        ));
        for failure in &report.evaluation_failures {
            s.push_str(&format!("\n  - {}: {}", failure.day, failure.error));
        }
        s.push('\n');
    }
    if !report.unresolved_exercises.is_empty() {
        s.push_str(&format!(
            "\n{} ({}):",
            "Exercises not in catalog".yellow().bold(),
            report.unresolved_exercises.len()
        ));
        for name in &report.unresolved_exercises {
            s.push_str(&format!("\n  - {}", name));
        }
        s.push('\n');
    }
    if !report.ignored_directives.is_empty() {
        s.push_str(&format!(
            "\n{} ({}):",
            "Ignored progression directives".yellow().bold(),
            report.ignored_directives.len()
        ));
        for ignored in &report.ignored_directives {
            s.push_str(&format!(
                "\n  - {}: {}({})",
                ignored.exercise,
                ignored.directive,
                ignored.args.join(", ")
            ));
        }
        s.push('\n');
    }
    s.trim().to_string()
}
