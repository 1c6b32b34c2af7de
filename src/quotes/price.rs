use std::fmt;

use crate::error::{DashboardError, Result};

use super::fetch::JsonFetcher;

// ---------------------------------------------------------------------------
// Crypto symbols
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CryptoSymbol {
    #[default]
    Bitcoin,
    Ethereum,
    Litecoin,
}

impl CryptoSymbol {
    pub const ALL: [CryptoSymbol; 3] = [
        CryptoSymbol::Bitcoin,
        CryptoSymbol::Ethereum,
        CryptoSymbol::Litecoin,
    ];

    pub fn ticker(self) -> &'static str {
        match self {
            CryptoSymbol::Bitcoin => "BTC",
            CryptoSymbol::Ethereum => "ETH",
            CryptoSymbol::Litecoin => "LTC",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CryptoSymbol::Bitcoin => "Bitcoin",
            CryptoSymbol::Ethereum => "Ethereum",
            CryptoSymbol::Litecoin => "Litecoin",
        }
    }
}

impl fmt::Display for CryptoSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Price lookup
// ---------------------------------------------------------------------------

/// USD price of one symbol at the time of the lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub symbol: CryptoSymbol,
    pub usd: f64,
}

impl PriceQuote {
    pub fn message(&self) -> String {
        format!(
            "The current price of {} is US$ {}",
            self.symbol.name().to_lowercase(),
            self.usd
        )
    }
}

pub fn price_url(base: &str, symbol: CryptoSymbol) -> String {
    format!("{base}?fsym={}&tsyms=USD", symbol.ticker())
}

/// Look up the current USD price of `symbol`. The response must be
/// `{"USD": <number>}`.
pub fn fetch_price<F: JsonFetcher + ?Sized>(
    fetcher: &F,
    base_url: &str,
    symbol: CryptoSymbol,
) -> Result<PriceQuote> {
    let url = price_url(base_url, symbol);
    let body = fetcher.get_json(&url)?;
    let usd = body
        .get("USD")
        .and_then(|v| v.as_f64())
        .ok_or_else(|| DashboardError::malformed(&url, "missing numeric 'USD' field"))?;

    log::info!("{} price: US$ {}", symbol.ticker(), usd);
    Ok(PriceQuote { symbol, usd })
}
