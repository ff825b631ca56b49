//! Reference command - show the loaded word tables

use tubeseo::output::{ReferenceSummary, Render};

use super::Context;

/// Print the power words, emojis and stop words in use
pub fn reference(ctx: &Context) -> anyhow::Result<()> {
    ReferenceSummary::from(&ctx.reference()).render(ctx.mode);
    Ok(())
}
