use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::logging;
use anyhow::{Context, Result};
use itemreg_report::ReportGenerator;
use itemreg_runtime::{Config, HttpItemRepository, Registry, resolve_api_url, resolve_workspace_path};
use std::path::PathBuf;
use std::time::Duration;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let config = Config::load(&data_dir)
        .with_context(|| format!("Failed to load {}", Config::path_in(&data_dir).display()))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let api_url = cli.api_url.as_deref();
    let format = cli.format;

    runtime.block_on(async {
        match cli.command {
            Commands::List { filter } => {
                let mut registry = open_registry(&config, api_url, None)?;
                handlers::list::handle(&mut registry, filter.to_spec(), format).await
            }

            Commands::Departments => {
                let mut registry = open_registry(&config, api_url, None)?;
                handlers::departments::handle(&mut registry, format).await
            }

            Commands::Show { id } => {
                let registry = open_registry(&config, api_url, None)?;
                handlers::show::handle(&registry, id, format).await
            }

            Commands::Create { fields } => {
                let mut registry = open_registry(&config, api_url, None)?;
                handlers::create::handle(&mut registry, fields, format).await
            }

            Commands::Update { id, fields } => {
                let mut registry = open_registry(&config, api_url, None)?;
                handlers::update::handle(&mut registry, id, fields, format).await
            }

            Commands::Delete { id, yes } => {
                let mut registry = open_registry(&config, api_url, None)?;
                handlers::delete::handle(&mut registry, id, yes, format).await
            }

            Commands::Export {
                filter,
                select,
                all_filtered: _,
                title,
                output_dir,
            } => {
                let mut registry = open_registry(&config, api_url, output_dir)?;
                handlers::export::handle(&mut registry, filter.to_spec(), select, title, format)
                    .await
            }

            Commands::Config { command } => match command {
                ConfigCommand::Show => handlers::config::show(&config, &data_dir, api_url, format),
                ConfigCommand::SetUrl { url } => {
                    handlers::config::set_url(config.clone(), &data_dir, &url, format)
                }
            },
        }
    })
}

fn open_registry(
    config: &Config,
    api_url: Option<&str>,
    output_dir: Option<PathBuf>,
) -> Result<Registry<HttpItemRepository>> {
    let base_url = resolve_api_url(api_url, config);
    let repository =
        HttpItemRepository::new(&base_url, Duration::from_secs(config.api.timeout_secs))?;
    tracing::debug!(url = %base_url, "using item api");

    let output_dir = output_dir.unwrap_or_else(|| config.report.output_dir_or_cwd());
    let reports = ReportGenerator::new(output_dir).with_branding(config.report.branding.clone());

    Ok(Registry::new(repository, reports))
}

