mod basic_reporter;
mod core;
mod inspect;
mod stack;

pub use basic_reporter::{BasicReporter, BasicReporterConfig, DisplayFields};
pub use self::core::LogReporter;
pub use inspect::inspect;
pub use stack::{format_stack, parse_stack, STACK_SUFFIX};
