//! Audit command - grade a channel's recent uploads

use tubeseo::adapters::{RngSource, current_year};
use tubeseo::core::services::{SuggestionGenerator, TitleScorer, audit_channel};
use tubeseo::output::Render;

use super::Context;

/// Audit a channel by ID
pub fn audit(channel_id: &str, seed: Option<u64>, ctx: &Context) -> anyhow::Result<()> {
    let platform = ctx.platform()?;
    let reference = ctx.reference();
    let year = current_year();
    let mut rng = RngSource::from_seed_option(seed);

    let report = audit_channel(
        &*platform,
        channel_id,
        &TitleScorer::new(&reference, year),
        &SuggestionGenerator::new(&reference, year),
        &mut rng,
    )?;
    report.render(ctx.mode);
    Ok(())
}
