use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{DashboardError, Result};

use super::fetch::{redact, JsonFetcher};

// ---------------------------------------------------------------------------
// Target currencies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetCurrency {
    #[default]
    Brl,
    Eur,
    Btc,
}

impl TargetCurrency {
    pub const ALL: [TargetCurrency; 3] = [TargetCurrency::Brl, TargetCurrency::Eur, TargetCurrency::Btc];

    pub fn code(self) -> &'static str {
        match self {
            TargetCurrency::Brl => "BRL",
            TargetCurrency::Eur => "EUR",
            TargetCurrency::Btc => "BTC",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TargetCurrency::Brl => "Brazilian Real",
            TargetCurrency::Eur => "Euro",
            TargetCurrency::Btc => "Bitcoin",
        }
    }

    /// Symbol printed in front of the entered amount.
    pub fn prefix(self) -> &'static str {
        match self {
            TargetCurrency::Brl => "R$",
            TargetCurrency::Eur => "€",
            TargetCurrency::Btc => "₿",
        }
    }

    /// Quote key in the exchange-rate table, e.g. `USDBRL`.
    pub fn pair(self) -> String {
        format!("USD{}", self.code())
    }
}

impl fmt::Display for TargetCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub currency_api: String,
}

impl Credentials {
    /// Read the credentials JSON. A missing file, missing field or blank key
    /// is [`DashboardError::AuthMissing`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            DashboardError::AuthMissing(format!("cannot read {}: {e}", path.display()))
        })?;
        let creds: Credentials = serde_json::from_str(&text).map_err(|e| {
            DashboardError::AuthMissing(format!("{}: {e}", path.display()))
        })?;
        if creds.currency_api.trim().is_empty() {
            return Err(DashboardError::AuthMissing(format!(
                "{}: 'currency_api' is empty",
                path.display()
            )));
        }
        Ok(creds)
    }
}

// ---------------------------------------------------------------------------
// Exchange-rate table
// ---------------------------------------------------------------------------

/// All USD-based quotes returned by one "live" lookup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExchangeRateTable {
    pub quotes: BTreeMap<String, f64>,
}

impl ExchangeRateTable {
    pub fn rate(&self, currency: TargetCurrency) -> Result<f64> {
        let pair = currency.pair();
        self.quotes
            .get(&pair)
            .copied()
            .ok_or(DashboardError::MissingQuote(pair))
    }
}

pub fn exchange_url(base: &str, access_key: &str) -> String {
    format!("{base}?access_key={access_key}")
}

/// Fetch the full quote table.
pub fn fetch_rates<F: JsonFetcher + ?Sized>(
    fetcher: &F,
    base_url: &str,
    credentials: &Credentials,
) -> Result<ExchangeRateTable> {
    let url = exchange_url(base_url, &credentials.currency_api);
    let body = fetcher.get_json(&url)?;
    let table: ExchangeRateTable = serde_json::from_value(body)
        .map_err(|e| DashboardError::malformed(redact(&url), e.to_string()))?;
    log::info!("Fetched {} exchange-rate quotes", table.quotes.len());
    Ok(table)
}

/// `value / rate` for the `USD{currency}` quote.
///
/// The entered value is treated as an amount in the target currency and the
/// result as its US dollar equivalent.
pub fn convert(value: f64, currency: TargetCurrency, table: &ExchangeRateTable) -> Result<f64> {
    let rate = table.rate(currency)?;
    if rate == 0.0 {
        return Err(DashboardError::invalid_schema(format!(
            "quote {} is zero",
            currency.pair()
        )));
    }
    Ok(value / rate)
}

// ---------------------------------------------------------------------------
// Full converter request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub value: f64,
    pub currency: TargetCurrency,
    pub usd: f64,
    pub table: ExchangeRateTable,
}

impl Conversion {
    pub fn message(&self) -> String {
        format!(
            "{} {:.2} is equivalent to US$ {:.2}.",
            self.currency.prefix(),
            self.value,
            self.usd
        )
    }
}

/// Read credentials, fetch every quote, convert `value`.
pub fn run_conversion<F: JsonFetcher + ?Sized>(
    fetcher: &F,
    base_url: &str,
    credentials_path: &Path,
    value: f64,
    currency: TargetCurrency,
) -> Result<Conversion> {
    let credentials = Credentials::load(credentials_path)?;
    let table = fetch_rates(fetcher, base_url, &credentials)?;
    let usd = convert(value, currency, &table)?;
    Ok(Conversion {
        value,
        currency,
        usd,
        table,
    })
}
