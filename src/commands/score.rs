//! Score command - grade a title

use tubeseo::adapters::current_year;
use tubeseo::core::services::TitleScorer;
use tubeseo::output::{Render, ScoreResult};

use super::Context;

/// Score a title; an empty keyword skips the keyword check
pub fn score(title: &str, keyword: &str, ctx: &Context) -> anyhow::Result<()> {
    let reference = ctx.reference();
    let report = TitleScorer::new(&reference, current_year()).score(title, keyword);

    ScoreResult::new(title, keyword, report).render(ctx.mode);
    Ok(())
}
