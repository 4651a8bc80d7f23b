use std::process::ExitCode;

use tenki_core::{AppError, SettingsStore};
use tenki_weather::WeatherReporter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tenki_core::init()?;

    match run().await {
        Ok(sentence) => {
            println!("{sentence}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::error!("Weather report failed: {}", e);
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Load settings and produce today's sentence for the active selection.
async fn run() -> Result<String, AppError> {
    let store = SettingsStore::open_default()?;
    let settings = store.weather();
    tracing::info!("Using {} ({})", settings.provider.label(), store.path().display());

    let reporter = WeatherReporter::new(&settings, &store.http())?;
    let sentence = reporter.report(&settings).await?;
    Ok(sentence)
}
