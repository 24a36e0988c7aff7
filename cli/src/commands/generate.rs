use anyhow::{Context, Result};
use expander::Expander;
use std::fs;
use std::io;

use crate::args::ConfigArgs;
use crate::commands::resolve_config;

pub fn generate_file(config: &ConfigArgs, output: Option<&str>) -> Result<()> {
    let expander = Expander::new(resolve_config(config)?);

    match output {
        Some(out_path) => {
            fs::write(out_path, expander.generate())
                .with_context(|| format!("Failed to write {out_path}"))?;
            tracing::info!(path = out_path, max_param = expander.max_param(), "wrote binder unit");
        }
        None => {
            let stdout = io::stdout();
            expander
                .write_to(&mut stdout.lock())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
