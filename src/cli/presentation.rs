//! CLI presentation: text formatters per command.

mod check;
mod shapes;

pub use check::format_check_report_text;
pub use shapes::format_shapes_text;
