use crate::error::{Error, Result};
use crate::market::FEATURED_PRIVILEGE;
use crate::types::{AdSearchRequest, AdSearchResponse, Advertisement, TradeType};
use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Client for the Binance P2P advertisement search endpoint.
#[derive(Clone)]
pub struct P2PClient {
    client: Client,
    url: Url,
}

impl P2PClient {
    pub fn new(url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::Transport)?;
        Ok(Self { client, url })
    }

    /// Fetches one page of merchant ads for `trade_type`, featured ads removed.
    /// Single attempt; the client timeout bounds the wait.
    pub async fn fetch_ads(&self, trade_type: TradeType) -> Result<Vec<Advertisement>> {
        debug!("[P2P] Searching {} ads at {}", trade_type, self.url);

        let response = self
            .client
            .post(self.url.clone())
            .header("Content-Type", "application/json")
            .json(&AdSearchRequest::new(trade_type))
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(Error::Transport)?;
        if !status.is_success() {
            warn!("[P2P] {} search failed: {} - {}", trade_type, status, body);
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let ads = decode_ads(status.as_u16(), body)?;
        info!("[P2P] {} ads: {} kept after featured exclusion", trade_type, ads.len());
        Ok(ads)
    }
}

/// Turns a successful search body into ads. A body flagged unsuccessful or
/// carrying no `data` array is an upstream failure, not an empty market.
pub fn decode_ads(status: u16, body: String) -> Result<Vec<Advertisement>> {
    let parsed: AdSearchResponse = serde_json::from_str(&body)?;
    let raw = match parsed.data {
        Some(raw) if parsed.success != Some(false) => raw,
        _ => {
            warn!("[P2P] Search returned no data: {}", body);
            return Err(Error::Upstream { status, body });
        }
    };

    let total = raw.len();
    let kept = exclude_featured(raw);
    debug!("[P2P] {} featured ad(s) excluded", total - kept.len());

    kept.into_iter()
        .map(|ad| serde_json::from_value(ad).map_err(Error::from))
        .collect()
}

/// Drops featured ads, keeping the exchange's order for the rest. Runs on
/// the raw values so a featured ad never has to decode.
pub fn exclude_featured(ads: Vec<Value>) -> Vec<Value> {
    ads.into_iter()
        .filter(|ad| {
            ad.get("privilegeType").and_then(Value::as_i64) != Some(i64::from(FEATURED_PRIVILEGE))
        })
        .collect()
}
