//! Trends command - what is working in a niche this week

use chrono::Utc;
use tubeseo::core::services::find_trends;
use tubeseo::output::Render;

use super::Context;

/// Show trending keywords, tags and videos for a niche
pub fn trends(niche: &str, ctx: &Context) -> anyhow::Result<()> {
    let platform = ctx.platform()?;
    let reference = ctx.reference();

    let report = find_trends(&*platform, niche, Utc::now(), &reference)?;
    report.render(ctx.mode);
    Ok(())
}
