use super::args::{Cli, Commands};
use crate::presentation::format_outline;
use crate::types::{LogLevel, OutputFormat};
use anyhow::{Context, Result};
use groupmodel_engine::{EngineConfig, render_form, resolve_config_path};
use groupmodel_types::{Form, InMemoryConfigurationStore, RenderContext};
use is_terminal::IsTerminal;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::rc::Rc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level);

    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = EngineConfig::load_from(&config_path)
        .with_context(|| format!("Failed to load config: {}", config_path.display()))?;
    debug!(path = %config_path.display(), "engine config loaded");

    match cli.command {
        Commands::Render {
            form,
            context,
            store,
            format,
        } => {
            let form: Form = read_json(&form)?;
            let context: RenderContext = match context {
                Some(path) => read_json(&path)?,
                None => RenderContext::default(),
            };
            let store: InMemoryConfigurationStore = match store {
                Some(path) => read_json(&path)?,
                None => InMemoryConfigurationStore::default(),
            };

            let rendered = render_form(&form, &context, Rc::new(store), config)
                .with_context(|| format!("Failed to render form '{}'", form.name))?;

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rendered)?),
                OutputFormat::Text => {
                    print!("{}", format_outline(&rendered, std::io::stdout().is_terminal()))
                }
            }
            Ok(())
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn init_logging(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    // A subscriber may already be installed when run() is called more than once.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
