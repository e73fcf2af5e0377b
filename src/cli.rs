//! CLI domain: parse, route, help, output, and presentation only.
//! No compilation logic; the route table dispatches to the compiler.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::{map_error, CommandOutput};
pub use parse::{Cli, Commands, ShapesFormat};
pub use presentation::{format_check_report_text, format_shapes_text};
pub use route::RunContext;
