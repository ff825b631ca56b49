//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `random` - `rand`-backed [`RandomSource`](crate::core::ports::RandomSource)
//! - `reference` - Built-in and HTTP power-word sources
//! - `youtube` - YouTube Data API client (`api` feature)

use chrono::Datelike;

pub mod random;
pub mod reference;
#[cfg(feature = "api")]
pub mod youtube;

pub use random::RngSource;
#[cfg(feature = "api")]
pub use reference::HttpReferenceSource;
pub use reference::{BuiltinReference, parse_word_list};
#[cfg(feature = "api")]
pub use youtube::YouTubeClient;

/// The current calendar year in local time
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
