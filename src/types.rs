use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeType { Buy, Sell }

impl TradeType {
    pub fn label(&self) -> &'static str {
        match self { Self::Buy => "buy", Self::Sell => "sell" }
    }
}

impl std::fmt::Display for TradeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self { Self::Buy => "BUY", Self::Sell => "SELL" })
    }
}

/// Body of the P2P advertisement search request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdSearchRequest {
    pub fiat: &'static str,
    pub page: u32,
    pub rows: u32,
    pub trade_type: TradeType,
    pub asset: &'static str,
    pub pro_merchant_ads: bool,
    pub shield_merchant_ads: bool,
    pub filter_type: &'static str,
    pub publisher_type: &'static str,
    pub classifies: &'static [&'static str],
    pub traded_with: bool,
    pub followed: bool,
}

/// Raw listing envelope. Ads stay untyped until featured ones are dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct AdSearchResponse {
    #[serde(default)]
    pub data: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub success: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advertisement {
    #[serde(default)]
    pub adv: AdDetail,
    #[serde(default)]
    pub advertiser: Advertiser,
    #[serde(default)]
    pub privilege_type: Option<i32>,
}

/// `price` arrives as a decimal string or a bare number; kept as display text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdDetail {
    #[serde(default, deserialize_with = "price_text")]
    pub price: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advertiser {
    #[serde(default)]
    pub nick_name: String,
    #[serde(default)]
    pub user_grade: Option<i32>,
}

fn price_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice { Text(String), Number(serde_json::Number), Missing(()) }

    Ok(match RawPrice::deserialize(deserializer)? {
        RawPrice::Text(text) => text,
        RawPrice::Number(number) => number.to_string(),
        RawPrice::Missing(()) => String::new(),
    })
}

/// Discord webhook body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebhookPayload { pub embeds: Vec<Embed> }

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub thumbnail: Option<EmbedImage>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedImage { pub url: String }

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedField { pub name: String, pub value: String, pub inline: bool }

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedFooter {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub icon_url: Option<String>,
}
