use crate::error::{Error, Result};
use crate::market::{ERROR_COLOR, ERROR_TITLE, FOOTER_TEXT};
use crate::types::{Embed, EmbedFooter, WebhookPayload};
use chrono::{DateTime, Utc};
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{info, warn};

/// Posts embeds to a Discord webhook. The URL is fixed at construction.
#[derive(Clone)]
pub struct WebhookNotifier {
    client: Client,
    webhook_url: Url,
}

impl WebhookNotifier {
    pub fn new(webhook_url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::Transport)?;
        Ok(Self {
            client,
            webhook_url,
        })
    }

    pub async fn send(&self, payload: &WebhookPayload) -> Result<()> {
        let response = self
            .client
            .post(self.webhook_url.clone())
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("[Webhook] Delivery failed: {} - {}", status, body);
            return Err(Error::Delivery {
                status: status.as_u16(),
                body,
            });
        }

        info!("[Webhook] Delivered {} embed(s)", payload.embeds.len());
        Ok(())
    }
}

/// The embed sent in place of the dashboard when a run fails.
pub fn error_notification(err: &Error, at: DateTime<Utc>) -> WebhookPayload {
    WebhookPayload {
        embeds: vec![Embed {
            title: ERROR_TITLE.to_string(),
            description: format!("Failed to fetch Binance P2P rates\n\n**Error:** {}", err),
            color: ERROR_COLOR,
            thumbnail: None,
            fields: Vec::new(),
            footer: EmbedFooter {
                text: FOOTER_TEXT.to_string(),
                icon_url: None,
            },
            timestamp: at.to_rfc3339(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn error_embed_carries_the_error_text() {
        let err = Error::Upstream {
            status: 500,
            body: "internal".into(),
        };
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();

        let payload = error_notification(&err, at);
        let embed = &payload.embeds[0];
        assert_eq!(embed.title, ERROR_TITLE);
        assert_eq!(embed.color, ERROR_COLOR);
        assert_eq!(
            embed.description,
            "Failed to fetch Binance P2P rates\n\n**Error:** Binance API request failed with status 500: internal"
        );
        assert_eq!(embed.timestamp, "2026-01-02T03:04:05+00:00");
    }

    #[test]
    fn error_embed_omits_dashboard_only_members() {
        let err = Error::Delivery {
            status: 404,
            body: String::new(),
        };
        let json = serde_json::to_value(error_notification(&err, Utc::now())).unwrap();
        let embed = &json["embeds"][0];
        assert!(embed.get("thumbnail").is_none());
        assert!(embed.get("fields").is_none());
        assert!(embed["footer"].get("icon_url").is_none());
        assert_eq!(embed["footer"]["text"], FOOTER_TEXT);
    }
}
