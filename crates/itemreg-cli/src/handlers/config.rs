use crate::handlers::print_json;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use itemreg_runtime::{Config, resolve_api_url};
use std::path::Path;

pub fn show(
    config: &Config,
    data_dir: &Path,
    api_url: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let path = Config::path_in(data_dir);
    let effective_url = resolve_api_url(api_url, config);

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "path": path.display().to_string(),
            "effective_api_url": effective_url,
            "config": config,
        })),
        OutputFormat::Plain => {
            println!("# {}", path.display());
            println!("# effective api url: {}", effective_url);
            print!("{}", toml::to_string_pretty(config)?);
            Ok(())
        }
    }
}

pub fn set_url(mut config: Config, data_dir: &Path, url: &str, format: OutputFormat) -> Result<()> {
    config.set_api_url(url)?;

    let path = Config::path_in(data_dir);
    config
        .save_to(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "path": path.display().to_string(),
            "api_url": config.api.base_url,
        })),
        OutputFormat::Plain => {
            println!("API URL set to {}", config.api.base_url);
            Ok(())
        }
    }
}
