//! Optimize command - score, suggest, tag and describe in one pass

use tubeseo::adapters::{RngSource, current_year};
use tubeseo::core::services::{self, OptimizeOptions, SuggestionGenerator, TitleScorer};
use tubeseo::output::Render;

use super::Context;

/// Run the full optimizer for a title
pub fn optimize(
    title: &str,
    keyword: &str,
    seed: Option<u64>,
    length: &str,
    live: bool,
    ctx: &Context,
) -> anyhow::Result<()> {
    let reference = ctx.reference();
    let year = current_year();
    let competitors = if live { ctx.competitors(keyword)? } else { Vec::new() };
    let mut rng = RngSource::from_seed_option(seed);

    let options = OptimizeOptions {
        threshold: ctx.config.optimizer.suggestion_threshold,
        video_length: length,
    };
    let optimization = services::optimize(
        &TitleScorer::new(&reference, year),
        &SuggestionGenerator::new(&reference, year),
        title,
        keyword,
        &competitors,
        options,
        &mut rng,
    );

    optimization.render(ctx.mode);
    Ok(())
}
