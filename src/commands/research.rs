//! Research command - analyze competition for a keyword

use tubeseo::core::services::{ResearchSettings, research_keyword};
use tubeseo::output::Render;

use super::Context;

/// Research a keyword on the video platform
pub fn research(keyword: &str, ctx: &Context) -> anyhow::Result<()> {
    let platform = ctx.platform()?;
    let settings = ResearchSettings {
        max_results: ctx.config.api.max_results,
        region_code: ctx.config.api.region_code.clone(),
    };

    let report = research_keyword(&*platform, keyword, &settings)?;
    report.render(ctx.mode);
    Ok(())
}
