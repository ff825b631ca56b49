//! Suggest command - generate alternative titles

use tubeseo::adapters::{RngSource, current_year};
use tubeseo::core::services::SuggestionGenerator;
use tubeseo::output::{Render, SuggestResult};

use super::Context;

/// Generate one alternative title per template
pub fn suggest(
    title: &str,
    keyword: &str,
    seed: Option<u64>,
    live: bool,
    ctx: &Context,
) -> anyhow::Result<()> {
    let reference = ctx.reference();
    let competitors = if live { ctx.competitors(keyword)? } else { Vec::new() };
    let mut rng = RngSource::from_seed_option(seed);

    let candidates = SuggestionGenerator::new(&reference, current_year()).suggest(
        title,
        keyword,
        &competitors,
        &mut rng,
    );

    SuggestResult {
        title: title.to_string(),
        keyword: keyword.trim().to_string(),
        candidates,
    }
    .render(ctx.mode);
    Ok(())
}
