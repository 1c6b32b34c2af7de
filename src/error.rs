use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures a panel can hit while loading or fetching its data.
///
/// None of these abort the application: the dispatcher logs them and shows
/// the message inside the panel that produced it.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(String),

    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    #[error("upstream service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },

    #[error("quote '{0}' not present in exchange-rate table")]
    MissingQuote(String),

    #[error("credentials missing: {0}")]
    AuthMissing(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

impl DashboardError {
    pub fn invalid_schema<S: Into<String>>(msg: S) -> Self {
        DashboardError::InvalidSchema(msg.into())
    }

    pub fn malformed<U: Into<String>, R: Into<String>>(url: U, reason: R) -> Self {
        DashboardError::MalformedResponse {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_culprit() {
        assert_eq!(
            DashboardError::MissingColumn("pH".into()).to_string(),
            "dataset is missing required column 'pH'"
        );
        assert_eq!(
            DashboardError::NotFound(PathBuf::from("csv/x.csv")).to_string(),
            "file not found: csv/x.csv"
        );
        let err = DashboardError::malformed("http://q", "no 'USD' field");
        assert!(err.to_string().contains("no 'USD' field"));
    }
}
