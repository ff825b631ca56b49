//! Keyword research service
//!
//! Searches the platform for a keyword, looks up statistics for the top
//! results and summarizes them.

use log::{debug, info};

use crate::core::models::KeywordReport;
use crate::core::ports::{PlatformError, SearchQuery, VideoPlatform};

use super::metrics;

/// Default number of search results analyzed
pub const DEFAULT_RESEARCH_RESULTS: u32 = 20;

/// Search parameters for keyword research
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchSettings {
    /// Search results to analyze
    pub max_results: u32,
    /// Region to bias results towards
    pub region_code: Option<String>,
}

impl Default for ResearchSettings {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_RESEARCH_RESULTS,
            region_code: None,
        }
    }
}

/// Research a keyword against the platform
pub fn research_keyword<P: VideoPlatform + ?Sized>(
    platform: &P,
    keyword: &str,
    settings: &ResearchSettings,
) -> Result<KeywordReport, PlatformError> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(PlatformError::EmptyQuery);
    }

    let mut query = SearchQuery::new(keyword, settings.max_results);
    query.region_code.clone_from(&settings.region_code);

    let ids = platform.search(&query)?;
    debug!("Search for '{keyword}' returned {} videos", ids.len());
    if ids.is_empty() {
        return Err(PlatformError::NoResults(keyword.to_string()));
    }

    let records = platform.videos(&ids)?;
    if records.is_empty() {
        return Err(PlatformError::NoResults(keyword.to_string()));
    }

    info!("Analyzed {} competitor videos for '{keyword}'", records.len());
    Ok(metrics::summarize(keyword, records))
}
