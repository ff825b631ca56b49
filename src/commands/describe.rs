//! Describe command - generate an upload description

use tubeseo::adapters::current_year;
use tubeseo::core::services::{generate_description, generate_tags};
use tubeseo::output::{DescriptionResult, Render};

use super::Context;

/// Generate a description; hashtags come from the generated tags
pub fn describe(title: &str, keyword: &str, length: &str, ctx: &Context) -> anyhow::Result<()> {
    let reference = ctx.reference();
    let year = current_year();
    let tags = generate_tags(title, keyword, &[], &reference, year);
    let description = generate_description(title, keyword, &tags, length, year);

    DescriptionResult { description }.render(ctx.mode);
    Ok(())
}
