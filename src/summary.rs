use crate::error::{Error, Result};
use crate::market::{
    AVERAGE_LIMIT, DASHBOARD_COLOR, DASHBOARD_TITLE, DISPLAY_LIMIT, FIAT, FOOTER_ICON_URL,
    FOOTER_TEXT, MARKET_INFO, THUMBNAIL_URL, VERIFIED_GRADE,
};
use crate::types::{
    Advertisement, Embed, EmbedField, EmbedFooter, EmbedImage, TradeType, WebhookPayload,
};
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

const VERIFIED_BADGE: &str = "✅";

/// Averages over the best few offers on each side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketSummary {
    pub avg_buy: f64,
    pub avg_sell: f64,
    pub spread: f64,
}

impl MarketSummary {
    pub fn from_ads(buy: &[Advertisement], sell: &[Advertisement]) -> Result<Self> {
        let avg_buy = average_price(buy)?;
        let avg_sell = average_price(sell)?;
        // Zero unless both sides have offers; never clamped.
        let spread = if avg_buy != 0.0 && avg_sell != 0.0 {
            avg_sell - avg_buy
        } else {
            0.0
        };
        Ok(Self { avg_buy, avg_sell, spread })
    }

    fn render(&self) -> String {
        format!(
            "```\n🟢 Avg Buy:  {:.2} {fiat}\n🔴 Avg Sell: {:.2} {fiat}\n📊 Spread:   {:.2} {fiat}\n```",
            self.avg_buy,
            self.avg_sell,
            self.spread,
            fiat = FIAT
        )
    }
}

/// Mean price of the first few ads, `0.0` when there are none.
pub fn average_price(ads: &[Advertisement]) -> Result<f64> {
    let prices = ads
        .iter()
        .take(AVERAGE_LIMIT)
        .map(|ad| parse_price(&ad.adv.price))
        .collect::<Result<Vec<f64>>>()?;

    if prices.is_empty() {
        return Ok(0.0);
    }
    Ok(prices.iter().sum::<f64>() / prices.len() as f64)
}

fn parse_price(raw: &str) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|source| Error::Formatting {
        price: raw.to_string(),
        source,
    })
}

/// Renders the top offers for one side, or a placeholder if it has none.
pub fn format_ads(ads: &[Advertisement], trade_type: TradeType) -> String {
    if ads.is_empty() {
        return format!("```\nNo {} offers available\n```", trade_type.label());
    }

    ads.iter()
        .take(DISPLAY_LIMIT)
        .map(|ad| {
            let badge = if ad.advertiser.user_grade == Some(VERIFIED_GRADE) {
                format!(" {VERIFIED_BADGE}")
            } else {
                String::new()
            };
            format!(
                "**{}**{}\n   💰 `{} {}`",
                ad.advertiser.nick_name, badge, ad.adv.price, FIAT
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn build_notification(buy: &[Advertisement], sell: &[Advertisement]) -> Result<WebhookPayload> {
    build_notification_at(buy, sell, &Local::now())
}

pub fn build_notification_at<Tz>(
    buy: &[Advertisement],
    sell: &[Advertisement],
    generated_at: &DateTime<Tz>,
) -> Result<WebhookPayload>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let summary = MarketSummary::from_ads(buy, sell)?;
    Ok(WebhookPayload {
        embeds: vec![dashboard_embed(&summary, buy, sell, generated_at)],
    })
}

/// Assembles the dashboard embed from an already computed summary.
pub fn dashboard_embed<Tz>(
    summary: &MarketSummary,
    buy: &[Advertisement],
    sell: &[Advertisement],
    generated_at: &DateTime<Tz>,
) -> Embed
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    Embed {
        title: DASHBOARD_TITLE.to_string(),
        description: format!(
            "📊 **USDT/PKR Market Rates** • Updated {}",
            generated_at.format("%d %b %Y • %I:%M %p")
        ),
        color: DASHBOARD_COLOR,
        thumbnail: Some(EmbedImage {
            url: THUMBNAIL_URL.to_string(),
        }),
        fields: vec![
            field("📈 **Market Summary**", summary.render(), false),
            field("🟢 **Top Buy Offers**", format_ads(buy, TradeType::Buy), true),
            field("🔴 **Top Sell Offers**", format_ads(sell, TradeType::Sell), true),
            field("ℹ️ **Market Info**", MARKET_INFO.to_string(), false),
        ],
        footer: EmbedFooter {
            text: FOOTER_TEXT.to_string(),
            icon_url: Some(FOOTER_ICON_URL.to_string()),
        },
        timestamp: generated_at.with_timezone(&Utc).to_rfc3339(),
    }
}

fn field(name: &str, value: String, inline: bool) -> EmbedField {
    EmbedField {
        name: name.to_string(),
        value,
        inline,
    }
}
