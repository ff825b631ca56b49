//! Core domain logic for tubeseo
//!
//! Scoring and generation are pure. External interactions (randomness,
//! remote word lists, the video platform) go through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`ScoreReport`, `ReferenceData`, `VideoRecord`)
//! - `services/` - Scoring, suggestion and analysis
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
