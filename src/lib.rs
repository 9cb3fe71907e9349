#[macro_use]
extern crate failure;

use failure::Error;
use std::fs;
use std::path::Path;

pub mod best_first;

pub type Point = (i64, i64, i64);

pub trait Manhattan {
    fn manhattan(self, other: Self) -> i64;
}

impl Manhattan for Point {
    fn manhattan(self, other: Point) -> i64 {
        (self.0 - other.0).abs() + (self.1 - other.1).abs() + (self.2 - other.2).abs()
    }
}

/// Read the puzzle input at `path`, mentioning the path if that fails.
pub fn read_input(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|e| format_err!("error reading {}: {}", path.display(), e))
}

/// Send `tracing` output to stderr, filtered by `RUST_LOG`. Answers go to
/// stdout, so they stay clean no matter how chatty the logs are.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

#[test]
fn test_manhattan() {
    assert_eq!((0, 0, 0).manhattan((0, 0, 0)), 0);
    assert_eq!((1, -2, 3).manhattan((0, 0, 0)), 6);
    assert_eq!((12, 12, 12).manhattan((0, 0, 0)), 36);
    assert_eq!((-5, 4, 0).manhattan((5, -4, 1)), 19);
}

#[test]
fn test_read_input_names_missing_file() {
    let err = read_input(Path::new("no/such/dir/day-23.input")).unwrap_err();
    assert!(err.to_string().contains("no/such/dir/day-23.input"));
}
