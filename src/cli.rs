//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands::{self, ConfigAction, Context};
use tubeseo::config::GlobalConfig;
use tubeseo::core::services::DEFAULT_VIDEO_LENGTH;
use tubeseo::output::OutputMode;

/// tubeseo - Title scoring and keyword research for YouTube creators
#[derive(Parser, Debug)]
#[command(
    name = "tubeseo",
    version,
    about = "Title scoring and keyword research for YouTube creators",
    long_about = "Score video titles, generate better alternatives, tags and descriptions.\n\n\
                  Scoring and generation work offline. Research, trends and channel\n\
                  audits query the YouTube Data API and need an API key."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Use built-in power words even when a reference URL is configured
    #[arg(long, global = true)]
    pub offline: bool,

    /// YouTube Data API key (overrides YOUTUBE_API_KEY and config)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a title (0-100) with a checklist of findings
    Score {
        /// Title to score
        title: String,

        /// Target keyword; omit to skip the keyword check
        #[arg(short, long, default_value_t, hide_default_value = true)]
        keyword: String,
    },

    /// Score a title and, if it falls short, suggest and rank alternatives
    Optimize {
        /// Title to optimize
        title: String,

        /// Target keyword
        #[arg(short, long)]
        keyword: String,

        /// Seed for reproducible suggestions
        #[arg(long)]
        seed: Option<u64>,

        /// Video length as MM:SS, used for description timestamps
        #[arg(short, long, default_value = DEFAULT_VIDEO_LENGTH)]
        length: String,

        /// Steer suggestions with the keyword's top search results
        #[arg(long)]
        live: bool,
    },

    /// Generate alternative titles
    Suggest {
        /// Title to base the suggestions on
        title: String,

        /// Target keyword
        #[arg(short, long)]
        keyword: String,

        /// Seed for reproducible suggestions
        #[arg(long)]
        seed: Option<u64>,

        /// Steer suggestions with the keyword's top search results
        #[arg(long)]
        live: bool,
    },

    /// Generate upload tags
    Tags {
        /// Video title
        title: String,

        /// Target keyword
        #[arg(short, long)]
        keyword: Option<String>,

        /// Trending tags to mix in
        #[arg(short, long = "trending")]
        trending: Vec<String>,
    },

    /// Generate an upload description
    Describe {
        /// Video title
        title: String,

        /// Target keyword
        #[arg(short, long)]
        keyword: String,

        /// Video length as MM:SS
        #[arg(short, long, default_value = DEFAULT_VIDEO_LENGTH)]
        length: String,
    },

    /// Analyze competition for a keyword
    Research {
        /// Keyword to research
        keyword: String,
    },

    /// Show what is trending in a niche this week
    Trends {
        /// Niche, e.g. gaming or cooking
        niche: String,
    },

    /// Audit a channel's recent upload titles
    Audit {
        /// Channel ID (starts with UC)
        channel_id: String,

        /// Seed for reproducible suggestions
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the power words, emojis and stop words in use
    Reference,

    /// Inspect or update the global config
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the current config
    Show,

    /// Set a value (e.g. `tubeseo config set api.region_code US`)
    Set {
        /// Dotted key
        key: String,

        /// New value; empty clears optional keys
        value: String,
    },

    /// Print the config file location
    Path,
}

impl From<ConfigCommand> for ConfigAction {
    fn from(command: ConfigCommand) -> Self {
        match command {
            ConfigCommand::Show => Self::Show,
            ConfigCommand::Set { key, value } => Self::Set { key, value },
            ConfigCommand::Path => Self::Path,
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let ctx = Context {
        mode: output_mode,
        offline: cli.offline,
        api_key: cli.api_key,
        config: GlobalConfig::load(),
    };

    match cli.command {
        Some(Command::Score { title, keyword }) => commands::score(&title, &keyword, &ctx),
        Some(Command::Optimize {
            title,
            keyword,
            seed,
            length,
            live,
        }) => commands::optimize(&title, &keyword, seed, &length, live, &ctx),
        Some(Command::Suggest {
            title,
            keyword,
            seed,
            live,
        }) => commands::suggest(&title, &keyword, seed, live, &ctx),
        Some(Command::Tags {
            title,
            keyword,
            trending,
        }) => commands::tags(&title, keyword.as_deref(), &trending, &ctx),
        Some(Command::Describe {
            title,
            keyword,
            length,
        }) => commands::describe(&title, &keyword, &length, &ctx),
        Some(Command::Research { keyword }) => commands::research(&keyword, &ctx),
        Some(Command::Trends { niche }) => commands::trends(&niche, &ctx),
        Some(Command::Audit { channel_id, seed }) => commands::audit(&channel_id, seed, &ctx),
        Some(Command::Reference) => commands::reference(&ctx),
        Some(Command::Config { action }) => commands::config_cmd(action.into(), output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("tubeseo v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("tubeseo v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'tubeseo --help' for usage");
                println!("Run 'tubeseo score \"<title>\" -k <keyword>' to get started");
            }
            Ok(())
        },
    }
}
