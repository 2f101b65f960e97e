pub mod config;
pub mod dashboard;
pub mod error;
pub mod fetcher;
pub mod market;
pub mod notifier;
pub mod summary;
pub mod types;

pub use config::Config;
pub use error::{ConfigError, Error, Result};
pub use fetcher::P2PClient;
pub use notifier::WebhookNotifier;
