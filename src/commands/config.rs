//! Config command - inspect and update the global config

use tubeseo::config::GlobalConfig;
use tubeseo::output::{OperationResult, OutputMode, Render};

/// Config subcommands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the current config
    Show,
    /// Set a dotted key
    Set {
        /// Key such as `api.region_code`
        key: String,
        /// New value; empty clears optional keys
        value: String,
    },
    /// Print the config file location
    Path,
}

/// Run a config subcommand
pub fn config_cmd(action: ConfigAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            let mut config = GlobalConfig::load();
            if config.api.key.is_some() {
                config.api.key = Some("********".to_string());
            }
            if mode == OutputMode::Json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                print!("{}", toml::to_string_pretty(&config)?);
            }
        },
        ConfigAction::Set { key, value } => {
            let mut config = GlobalConfig::load();
            config.set(&key, &value)?;
            config.save()?;
            OperationResult {
                success: true,
                message: format!("Set {key} in {}", GlobalConfig::config_path().display()),
            }
            .render(mode);
        },
        ConfigAction::Path => {
            let path = GlobalConfig::config_path();
            if mode == OutputMode::Json {
                println!("{}", serde_json::json!({ "path": path }));
            } else {
                println!("{}", path.display());
            }
        },
    }
    Ok(())
}
