use anyhow::{Context, Result};
use expander::Expander;

use crate::args::ConfigArgs;
use crate::commands::resolve_config;

pub fn inspect_arity(arity: usize, config: &ConfigArgs, json: bool) -> Result<()> {
    println!("{}", format_table(arity, config, json)?);
    Ok(())
}

/// Substitution table for `arity`, as `KEY = value` lines or pretty JSON.
pub fn format_table(arity: usize, config: &ConfigArgs, json: bool) -> Result<String> {
    let expander = Expander::new(resolve_config(config)?);
    let table = expander
        .table(arity)
        .with_context(|| format!("Cannot inspect arity {arity}"))?;

    if json {
        return serde_json::to_string_pretty(&table).context("Failed to encode table");
    }

    let lines: Vec<String> = table
        .entries()
        .map(|(placeholder, text)| format!("{:<12} = {text:?}", placeholder.token()))
        .collect();
    Ok(lines.join("\n"))
}
