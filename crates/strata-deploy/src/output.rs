//! Operator-facing output helpers

use crate::error::Result;
use std::path::Path;

/// Print a delimited banner around a phase header.
pub fn banner(text: &str) {
    println!();
    println!("{}", "*".repeat(80));
    println!("{text}");
    println!("{}", "*".repeat(80));
    println!();
}

/// Echo a file's contents, indented, for the audit trail.
pub fn echo_file(path: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(path)?;
    for line in contents.lines() {
        println!("  {line}");
    }
    println!();
    Ok(())
}
