//! Fixed market parameters for the USDT/PKR dashboard.

use crate::types::{AdSearchRequest, TradeType};

pub const SEARCH_URL: &str = "https://p2p.binance.com/bapi/c2c/v2/friendly/c2c/adv/search";

pub const ASSET: &str = "USDT";
pub const FIAT: &str = "PKR";
pub const PAGE_ROWS: u32 = 10;
pub const CLASSIFIES: &[&str] = &["mass", "profession", "fiat_trade"];

/// `privilegeType` value of featured (boosted) ads.
pub const FEATURED_PRIVILEGE: i32 = 4;
/// `userGrade` value shown with a verification badge.
pub const VERIFIED_GRADE: i32 = 1;

pub const DISPLAY_LIMIT: usize = 5;
pub const AVERAGE_LIMIT: usize = 3;

pub const DASHBOARD_COLOR: u32 = 0x1E1E1E;
pub const ERROR_COLOR: u32 = 0xFF6B6B;

pub const DASHBOARD_TITLE: &str = "**Binance P2P Fetcher for Crypto Awaz**";
pub const ERROR_TITLE: &str = "⚠️ **P2P Dashboard Error**";
pub const FOOTER_TEXT: &str = "🌐 cryptoawaz.com";
pub const THUMBNAIL_URL: &str = "https://cryptologos.cc/logos/tether-usdt-logo.png";
pub const FOOTER_ICON_URL: &str = "https://cryptologos.cc/logos/binance-coin-bnb-logo.png";
pub const MARKET_INFO: &str = "```\nAsset: USDT/Tether\nExchange: Binance P2P\nFiat: Pakistani Rupee\n```";

impl AdSearchRequest {
    pub fn new(trade_type: TradeType) -> Self {
        Self {
            fiat: FIAT,
            page: 1,
            rows: PAGE_ROWS,
            trade_type,
            asset: ASSET,
            pro_merchant_ads: false,
            shield_merchant_ads: false,
            filter_type: "all",
            publisher_type: "merchant",
            classifies: CLASSIFIES,
            traded_with: false,
            followed: false,
        }
    }
}
