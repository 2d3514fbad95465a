//! Project layer tests
//!
//! Tests for the collaborators feeding the analysis:
//! - Package listing through an external command
//! - Load policy for packages with errors

pub mod tests_loading;
