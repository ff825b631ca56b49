//! Power-word sources

use crate::core::ports::{ReferenceError, ReferenceSource};

/// Source that always uses the built-in tables
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinReference;

impl ReferenceSource for BuiltinReference {
    fn fetch_power_words(&self) -> Result<Vec<String>, ReferenceError> {
        Err(ReferenceError::Unavailable)
    }
}

/// Parse a JSON array of strings
pub fn parse_word_list(body: &str) -> Result<Vec<String>, ReferenceError> {
    let words: Vec<String> =
        serde_json::from_str(body).map_err(|e| ReferenceError::Malformed(e.to_string()))?;
    if words.iter().all(|w| w.trim().is_empty()) {
        return Err(ReferenceError::Empty);
    }
    Ok(words)
}

#[cfg(feature = "api")]
pub use http::HttpReferenceSource;

#[cfg(feature = "api")]
mod http {
    use std::time::Duration;

    use log::debug;

    use super::parse_word_list;
    use crate::core::ports::{ReferenceError, ReferenceSource};

    /// Default time allowed for the download
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Downloads the power-word list from a URL
    #[derive(Debug, Clone)]
    pub struct HttpReferenceSource {
        url: String,
        timeout: Duration,
    }

    impl HttpReferenceSource {
        /// Source for `url` with the default timeout
        pub fn new(url: impl Into<String>) -> Self {
            Self {
                url: url.into(),
                timeout: DEFAULT_TIMEOUT,
            }
        }

        /// Override the timeout
        #[must_use]
        pub const fn with_timeout(mut self, timeout: Duration) -> Self {
            self.timeout = timeout;
            self
        }

        /// The configured URL
        #[must_use]
        pub fn url(&self) -> &str {
            &self.url
        }
    }

    impl ReferenceSource for HttpReferenceSource {
        fn fetch_power_words(&self) -> Result<Vec<String>, ReferenceError> {
            let transport = |e: &dyn std::fmt::Display| ReferenceError::Transport(e.to_string());

            let client = reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| transport(&e))?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(|e| transport(&e))?;

            debug!("Fetching power words from {}", self.url);
            let (status, body) = runtime
                .block_on(async {
                    let response = client.get(&self.url).send().await?;
                    let status = response.status();
                    let body = response.text().await?;
                    Ok::<_, reqwest::Error>((status, body))
                })
                .map_err(|e| transport(&e))?;

            if !status.is_success() {
                return Err(ReferenceError::Status(status.as_u16()));
            }
            parse_word_list(&body)
        }
    }
}
