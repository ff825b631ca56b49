//! Command implementations

mod audit;
mod config;
mod describe;
mod optimize;
mod reference;
mod research;
mod score;
mod suggest;
mod tags;
mod trends;

pub use audit::audit;
pub use config::{ConfigAction, config_cmd};
pub use describe::describe;
pub use optimize::optimize;
pub use reference::reference;
pub use research::research;
pub use score::score;
pub use suggest::suggest;
pub use tags::tags;
pub use trends::trends;

use anyhow::Context as _;
use tubeseo::adapters::BuiltinReference;
use tubeseo::config::{API_KEY_ENV, GlobalConfig};
use tubeseo::core::models::{ReferenceData, VideoRecord};
use tubeseo::core::ports::{Credential, ReferenceSource, SearchQuery, VideoPlatform};
use tubeseo::output::OutputMode;

/// Competitor videos fetched for `--live` suggestions
const LIVE_COMPETITORS: u32 = 5;

/// Settings shared by every command
#[derive(Debug)]
pub struct Context {
    /// Output mode
    pub mode: OutputMode,
    /// Skip remote reference data
    pub offline: bool,
    /// `--api-key` flag
    pub api_key: Option<String>,
    /// Loaded config
    pub config: GlobalConfig,
}

impl Context {
    /// Load power words, from the configured URL unless offline
    pub fn reference(&self) -> ReferenceData {
        match (&self.config.reference.url, self.offline) {
            (Some(url), false) => remote_reference(url, self.config.reference.timeout_secs),
            _ => BuiltinReference.load(),
        }
    }

    /// Build a video platform client from the resolved API key
    pub fn platform(&self) -> anyhow::Result<Box<dyn VideoPlatform>> {
        let env = std::env::var(API_KEY_ENV).ok();
        let key = self
            .config
            .resolve_api_key(self.api_key.as_deref(), env.as_deref())
            .unwrap_or_default();
        let credential = Credential::parse(&key)?;
        connect(credential)
    }

    /// Top results for `keyword`, used to steer suggestions
    pub fn competitors(&self, keyword: &str) -> anyhow::Result<Vec<VideoRecord>> {
        let platform = self.platform()?;
        let mut query = SearchQuery::new(keyword, LIVE_COMPETITORS);
        query.region_code.clone_from(&self.config.api.region_code);
        let ids = platform.search(&query).context("competitor search failed")?;
        Ok(platform.videos(&ids)?)
    }
}

#[cfg(feature = "api")]
fn remote_reference(url: &str, timeout_secs: u64) -> ReferenceData {
    use std::time::Duration;
    use tubeseo::adapters::HttpReferenceSource;

    HttpReferenceSource::new(url).with_timeout(Duration::from_secs(timeout_secs)).load()
}

#[cfg(not(feature = "api"))]
fn remote_reference(url: &str, _timeout_secs: u64) -> ReferenceData {
    log::warn!("Built without the api feature; ignoring reference URL {url}");
    BuiltinReference.load()
}

#[cfg(feature = "api")]
fn connect(credential: Credential) -> anyhow::Result<Box<dyn VideoPlatform>> {
    Ok(Box::new(tubeseo::adapters::YouTubeClient::new(credential)?))
}

#[cfg(not(feature = "api"))]
fn connect(_credential: Credential) -> anyhow::Result<Box<dyn VideoPlatform>> {
    anyhow::bail!("tubeseo was built without the api feature")
}
