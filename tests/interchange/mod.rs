//! Interchange tests
//!
//! Tests for loading program model documents from disk.

pub mod tests_json_front_end;
