use anyhow::{bail, Context, Result};
use expander::Expander;
use std::fs;

use crate::args::ConfigArgs;
use crate::commands::resolve_config;

/// Compare `path` with freshly generated output, byte for byte.
pub fn check_file(path: &str, config: &ConfigArgs) -> Result<()> {
    let existing = fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    let expected = Expander::new(resolve_config(config)?).generate();

    if existing == expected {
        tracing::info!(path, "binder unit is up to date");
        return Ok(());
    }

    match first_difference(&existing, &expected) {
        Some(line) => bail!("{path} is stale: first difference at line {line}"),
        None => bail!("{path} is stale: line endings or trailing content differ"),
    }
}

/// 1-based line number of the first differing line, if any line differs.
fn first_difference(actual: &str, expected: &str) -> Option<usize> {
    let mut actual_lines = actual.lines();
    let mut expected_lines = expected.lines();
    let mut line = 1;
    loop {
        match (actual_lines.next(), expected_lines.next()) {
            (None, None) => return None,
            (a, b) if a != b => return Some(line),
            _ => line += 1,
        }
    }
}
