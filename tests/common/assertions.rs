//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating gdir command output, error messages,
//! and the single-line stdout contract.

#![allow(dead_code)]

use predicates::prelude::*;
use std::path::Path;

/// Creates a predicate matching the exact single-line path payload of
/// go/back/fwd
pub fn path_line(path: &Path) -> impl Predicate<str> {
    predicates::str::diff(format!("{}\n", path.display()))
}

/// Creates a predicate that checks for a listing row `<ordinal>  <key>`
pub fn listing_row(ordinal: usize, key: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{ordinal}  {key}"))
}

/// Creates a predicate that checks for history boundary error messages
pub fn boundary_error() -> impl Predicate<str> {
    predicates::str::contains("History boundary")
        .or(predicates::str::contains("History is empty"))
}

/// Creates a predicate that checks for unknown selector error messages
pub fn unknown_selector() -> impl Predicate<str> {
    predicates::str::contains("No bookmark matches")
        .or(predicates::str::contains("out of range"))
}

/// Creates a predicate that checks for stale/vanished directory errors
pub fn stale_dir() -> impl Predicate<str> {
    predicates::str::contains("no longer exists")
        .or(predicates::str::contains("does not exist"))
}

/// Creates a predicate matching an `export NAME='value'` line
pub fn export_line(name: &str, value: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("export {name}='{value}'"))
}
