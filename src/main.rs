use chrono::Utc;
use p2p_dashboard::{dashboard::run, notifier::error_notification, Config, Error, WebhookNotifier};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("p2p_dashboard=info")),
        )
        .init();
    dotenvy::dotenv().ok();

    let config = match Config::from_env().map_err(Error::from) {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Configuration error: {}", e);
            return Err(e.into());
        }
    };
    info!("P2P API URL: {}", config.api_url);

    // Without a notifier there is nowhere to report to, so this only logs.
    let notifier = match WebhookNotifier::new(config.webhook_url.clone(), config.timeout) {
        Ok(notifier) => notifier,
        Err(e) => {
            error!("❌ Error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    match run(&config, &notifier).await {
        Ok(()) => {
            info!("✅ Sent P2P dashboard to Discord");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("❌ Error: {}", e);
            let _ = notifier.send(&error_notification(&e, Utc::now())).await;
            Ok(ExitCode::FAILURE)
        }
    }
}
