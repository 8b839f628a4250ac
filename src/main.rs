use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use slidedeck::application::{BuildPresentationUseCase, MarkdownService};
use slidedeck::domain::Presentation;
use slidedeck::infrastructure::{AppConfig, CliArgs, LoadedDeck, StorageManager, load_deck};
use slidedeck::presentation::App;
use slidedeck::presentation::widgets::ImageManager;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let storage = StorageManager::new(args.config.as_deref())?;
    let mut config = storage.load()?;
    config.merge_with_args(args);
    Ok(config)
}

fn build_presentation(config: &mut AppConfig, args: &CliArgs) -> Result<(Presentation, PathBuf)> {
    let LoadedDeck { deck, base_dir } = load_deck(&args.deck)?;
    if let Some(theme) = &deck.theme {
        config.theme.deck = theme.clone();
    }

    let use_case =
        BuildPresentationUseCase::new(config.theme.deck.clone(), Arc::new(MarkdownService::new()));
    let mut presentation = use_case.execute(deck)?;

    if let Some(start) = args.start {
        presentation.go_to(start);
    }

    Ok((presentation, base_dir))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let mut config = load_config(&args)?;
    init_logging(&config)?;

    info!(version = slidedeck::VERSION, deck = %args.deck.display(), "Starting {}", slidedeck::NAME);

    let (presentation, base_dir) = build_presentation(&mut config, &args)?;

    if args.dump_json {
        let tree = presentation.render()?;
        println!("{}", serde_json::to_string_pretty(&tree)?);
        return Ok(());
    }

    let mut terminal = ratatui::init();

    let images = ImageManager::new(base_dir);
    let result = match App::new(presentation, &config, images) {
        Ok(app) => app.run(&mut terminal).await,
        Err(e) => Err(e.into()),
    };

    ratatui::restore();

    result
}
