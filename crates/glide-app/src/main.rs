mod cli;
mod demo;
mod output;
mod repl;

use glide_common::Viewport;
use glide_config::GlideConfig;
use glide_platform::{JsonFileStore, NullStore, StateStore};
use glide_widget::Widget;
use tracing_subscriber::EnvFilter;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("\n--- Glide crashed ---");
        eprintln!("Please report this issue at: https://github.com/dylan/glide/issues");
        eprintln!("---------------------\n");
        default_hook(info);
    }));
}

#[tokio::main]
async fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Config comes before logging because it carries the default log
    // filter. An explicit --config that fails to load is fatal; a
    // missing default config falls back to defaults.
    let (mut config, config_warning) = match &args.config {
        Some(path) => match glide_config::load_config_from(path) {
            Ok(config) => (config, None),
            Err(e) => {
                eprintln!("error: could not load config from {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => match glide_config::load_config() {
            Ok(config) => (config, None),
            Err(e) => (GlideConfig::default(), Some(e.to_string())),
        },
    };

    if let Some(locale) = &args.locale {
        config.chat.locale = locale.clone();
    }
    if let Some(profile) = &args.profile {
        config.chat.profile = profile.clone();
    }

    // Initialize logging: CLI override beats the config filter.
    let log_directive = args.log_level.as_deref().unwrap_or(&config.logging.filter);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "glide=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Glide v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(warning) = config_warning {
        tracing::warn!("Config load failed, using defaults: {warning}");
    }

    if let Err(e) = glide_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let store = build_store(&config);
    let viewport = Viewport::new(1280.0, 800.0);
    let widget = match args.seed {
        Some(seed) => Widget::with_seed(&config, viewport, store, seed),
        None => Widget::new(&config, viewport, store),
    };

    match args.command.unwrap_or(cli::Command::Demo) {
        cli::Command::Demo => demo::run(widget).await,
        cli::Command::Chat => repl::run(widget).await,
    }
}

/// Build the state store the config asks for, degrading to no
/// persistence when the backing file is unavailable.
fn build_store(config: &GlideConfig) -> Box<dyn StateStore> {
    if !config.storage.enabled {
        tracing::info!("persistence disabled by config");
        return Box::new(NullStore);
    }
    let result = match &config.storage.path {
        Some(path) => Ok(JsonFileStore::open(path.clone())),
        None => JsonFileStore::at_default_path(),
    };
    match result {
        Ok(store) => {
            tracing::info!("state store at {}", store.path().display());
            Box::new(store)
        }
        Err(e) => {
            tracing::warn!("state store unavailable, running without persistence: {e}");
            Box::new(NullStore)
        }
    }
}
