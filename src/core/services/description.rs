//! Upload description generation

/// Video length assumed when none is given or it cannot be parsed
pub const DEFAULT_VIDEO_LENGTH: &str = "10:00";

const DEFAULT_MINUTES: u32 = 10;
/// Tags listed under "Related Topics"
const RELATED_TOPICS: usize = 5;
/// Tags (after the keyword) turned into hashtags
const TAG_HASHTAGS: usize = 2;

/// Minute marks for the closing chapters of a video
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampLadder {
    /// Whole minutes of the video
    pub minutes: u32,
    /// Start of "Key Takeaways"
    pub key_takeaways: u32,
    /// Start of "Conclusion & Next Steps"
    pub conclusion: u32,
}

impl TimestampLadder {
    /// Ladder for a `MM:SS` (or bare minutes) length string.
    ///
    /// Unparseable input is treated as 10 minutes. Offsets are clamped so no
    /// timestamp goes below one minute and the conclusion never precedes
    /// the takeaways.
    #[must_use]
    pub fn from_length(video_length: &str) -> Self {
        let minutes = video_length
            .split(':')
            .next()
            .and_then(|m| m.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_MINUTES);
        let key_takeaways = minutes.saturating_sub(2).max(1);
        let conclusion = minutes.saturating_sub(1).max(key_takeaways);
        Self {
            minutes,
            key_takeaways,
            conclusion,
        }
    }
}

/// Build an SEO description for an upload
#[must_use]
pub fn generate_description(
    title: &str,
    keyword: &str,
    tags: &[String],
    video_length: &str,
    year: i32,
) -> String {
    let keyword = keyword.trim();
    let topic = if keyword.is_empty() { "this topic" } else { keyword };
    let video_length = if video_length.trim().is_empty() {
        DEFAULT_VIDEO_LENGTH
    } else {
        video_length.trim()
    };
    let ladder = TimestampLadder::from_length(video_length);
    let related = tags.iter().take(RELATED_TOPICS).cloned().collect::<Vec<_>>().join(", ");
    let hashtags = hashtags(keyword, tags, year);

    format!(
        "🔴 **{title}**

In this {video_length} video, we explore everything about **{topic}**. Complete guide for {year}.

👇 **Timestamps:**
0:00 Introduction to {topic}
0:30 Main Content
{key}:00 Key Takeaways
{conclusion}:00 Conclusion & Next Steps

📚 **Resources Mentioned:**
• Link 1: [Coming Soon]
• Link 2: [Coming Soon]

🔔 **SUBSCRIBE for more {topic} content!**

🏷️ **Related Topics:**
{related}

#Hashtags:
{hashtags}

---
💬 Drop your questions in the comments!
👍 Like if this helped you!
🔔 Turn on notifications for new videos!

© {year} | All Rights Reserved",
        key = ladder.key_takeaways,
        conclusion = ladder.conclusion,
    )
}

fn hashtag(text: &str) -> Option<String> {
    let body: String = text.chars().filter(|c| c.is_alphanumeric()).collect();
    if body.is_empty() {
        None
    } else {
        Some(format!("#{body}"))
    }
}

fn hashtags(keyword: &str, tags: &[String], year: i32) -> String {
    let mut out: Vec<String> = Vec::new();
    out.extend(hashtag(keyword));

    let from_tags: Vec<String> =
        tags.iter().skip(1).filter_map(|t| hashtag(t)).take(TAG_HASHTAGS).collect();
    if from_tags.is_empty() {
        out.push("#Viral".to_string());
    } else {
        out.extend(from_tags);
    }

    out.push(format!("#{year}"));
    out.push("#Tutorial".to_string());
    out.push("#HowTo".to_string());
    out.join(" ")
}
