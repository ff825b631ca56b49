//! Tags command - generate upload tags

use tubeseo::adapters::current_year;
use tubeseo::core::services::generate_tags;
use tubeseo::output::{Render, TagsResult};

use super::Context;

/// Generate tags from a title, keyword and trending tags
pub fn tags(
    title: &str,
    keyword: Option<&str>,
    trending: &[String],
    ctx: &Context,
) -> anyhow::Result<()> {
    let reference = ctx.reference();
    let tags = generate_tags(
        title,
        keyword.unwrap_or_default(),
        trending,
        &reference,
        current_year(),
    );

    TagsResult { tags }.render(ctx.mode);
    Ok(())
}
