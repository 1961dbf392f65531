use anyhow::Context;
use clap::Parser;

use emojishelf::cli::{Cli, Command};
use emojishelf::config::AppConfig;
use emojishelf::logging::{init_file_tracing, init_stderr_tracing};
use emojishelf::prefs::{PreferenceId, PreferenceStore, SettingsRepository};
use emojishelf::ui::controller::ViewStateController;
use emojishelf::ui::runtime;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let mut config = AppConfig::load_from(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    if let Some(prefs) = cli.prefs.clone() {
        config.storage.prefs_path = Some(prefs);
    }
    if let Some(log_file) = cli.log_file.clone() {
        config.logging.file = Some(log_file);
    }

    match &cli.command {
        None => {
            let log_path = config.log_path();
            init_file_tracing(&config.logging, &log_path)
                .with_context(|| format!("opening log file {}", log_path.display()))?;
        }
        Some(_) => init_stderr_tracing(&config.logging),
    }

    let store = PreferenceStore::open(config.prefs_path()).context("opening preference store")?;
    tracing::info!(path = %store.path().display(), "Using preference file");
    let repository = SettingsRepository::new(store);

    match cli.command {
        None => {
            let controller = ViewStateController::spawn(repository);
            runtime::run(&controller, &config.ui)
                .await
                .context("terminal UI failed")?;
        }
        Some(Command::Show) => print_preferences(&repository),
        Some(Command::Set { setting }) => {
            let (id, value) = setting.target();
            repository
                .update(id, value)
                .await
                .with_context(|| format!("saving {}", id.label()))?;
            print_preferences(&repository);
        }
        Some(Command::Reset) => {
            repository.reset().await.context("resetting preferences")?;
            print_preferences(&repository);
        }
    }

    Ok(())
}

fn print_preferences(repository: &SettingsRepository) {
    for id in PreferenceId::all() {
        let value = repository.current(*id);
        println!("{:<7} {:<7} ({} = {})", id.label(), id.describe(value), id.as_str(), value);
    }
}
