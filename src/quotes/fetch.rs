use std::time::Duration;

use serde_json::Value as JsonValue;

use crate::error::{DashboardError, Result};

/// Something that can GET a URL and hand back its JSON body.
///
/// Panels only see this trait, so tests swap in canned responses.
pub trait JsonFetcher {
    fn get_json(&self, url: &str) -> Result<JsonValue>;
}

/// Blocking `reqwest` client used by the running app.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("bay-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DashboardError::UpstreamUnavailable(format!("building HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl JsonFetcher for HttpFetcher {
    fn get_json(&self, url: &str) -> Result<JsonValue> {
        log::debug!("GET {}", redact(url));

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| {
                DashboardError::UpstreamUnavailable(format!("{}: {}", redact(url), e.without_url()))
            })?;

        if !response.status().is_success() {
            return Err(DashboardError::UpstreamUnavailable(format!(
                "{} returned status {}",
                redact(url),
                response.status()
            )));
        }

        response
            .json()
            .map_err(|e| DashboardError::malformed(redact(url), e.without_url().to_string()))
    }
}

/// Drop the query string so access keys never reach logs or the UI.
pub fn redact(url: &str) -> &str {
    url.split_once('?').map(|(base, _)| base).unwrap_or(url)
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    /// Serves fixed JSON per URL and records every request.
    #[derive(Default)]
    pub struct CannedFetcher {
        pub responses: HashMap<String, JsonValue>,
        pub requests: RefCell<Vec<String>>,
    }

    impl CannedFetcher {
        pub fn with(url: &str, body: JsonValue) -> Self {
            let mut fetcher = Self::default();
            fetcher.responses.insert(url.to_string(), body);
            fetcher
        }
    }

    impl JsonFetcher for CannedFetcher {
        fn get_json(&self, url: &str) -> Result<JsonValue> {
            self.requests.borrow_mut().push(url.to_string());
            self.responses
                .get(url)
                .cloned()
                .ok_or_else(|| DashboardError::UpstreamUnavailable(format!("no route to {url}")))
        }
    }
}
