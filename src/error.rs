use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} environment variable is required. Set it in your .env file or environment.")]
    MissingVar { name: &'static str },

    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("HTTP error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Binance API request failed with status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("failed to decode P2P response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("malformed price {price:?}: {source}")]
    Formatting {
        price: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("webhook returned status {status}: {body}")]
    Delivery { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, Error>;
