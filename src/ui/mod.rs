//! User interface module - status output for the command line.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_report, display_success, display_warning, outcome_line, summary_line,
};
