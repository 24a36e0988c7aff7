pub mod check;
pub mod generate;
pub mod inspect;

use std::path::Path;

use anyhow::{Context, Result};
use expander::GeneratorConfig;

use crate::args::ConfigArgs;

/// Defaults, then the optional config file, then command-line overrides.
pub fn resolve_config(args: &ConfigArgs) -> Result<GeneratorConfig> {
    let base = match &args.config {
        Some(path) => GeneratorConfig::load(Path::new(path))
            .with_context(|| format!("Failed to load config {path}"))?,
        None => GeneratorConfig::default(),
    };
    let config = base.merge_overrides(args.max_param);
    tracing::debug!(max_param = config.max_param, origin = %config.origin, "resolved config");
    Ok(config)
}
