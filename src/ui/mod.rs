//! User interface module - terminal output for the release run.
//!
//! The run is non-interactive (it is meant for CI), so everything here is
//! formatting; see [formatter].

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_decision, display_error, display_release_notes,
    display_status, display_success, format_decision,
};
