use crate::config::Config;
use crate::error::Result;
use crate::fetcher::P2PClient;
use crate::notifier::WebhookNotifier;
use crate::summary::build_notification;
use crate::types::{TradeType, WebhookPayload};

/// Fetches both sides of the book and builds the dashboard embed.
pub async fn collect(client: &P2PClient) -> Result<WebhookPayload> {
    let buy_ads = client.fetch_ads(TradeType::Buy).await?;
    let sell_ads = client.fetch_ads(TradeType::Sell).await?;
    build_notification(&buy_ads, &sell_ads)
}

/// One fetch-and-notify pass. Any failure, including delivery, is returned to the caller.
pub async fn run_once(client: &P2PClient, notifier: &WebhookNotifier) -> Result<()> {
    let payload = collect(client).await?;
    notifier.send(&payload).await
}

/// Builds the listing client from `config` and runs one pass, so client
/// construction failures surface through the same result as the run itself.
pub async fn run(config: &Config, notifier: &WebhookNotifier) -> Result<()> {
    let client = P2PClient::new(config.api_url.clone(), config.timeout)?;
    run_once(&client, notifier).await
}
