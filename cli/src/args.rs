//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for lobby-settings
#[derive(Parser, Debug)]
#[command(name = "lobby-settings")]
#[command(author, version, about = "Run a lobby settings script against an in-memory lobby")]
#[command(long_about = r#"
Builds a lobby from configuration, loads its settings script, fires
onSettingsReady and prints the resulting settings together with the
script's permission answers as JSON.

Configuration files are loaded from (in priority order):
1. LOBBY_* environment variables
2. --config <path>     Explicit config file
3. ./lobby.toml        Project-level config
4. ~/.config/lobby-settings/config.toml   Global config

Example:
  lobby-settings --script maps/duel.lua
  lobby-settings --config lobby.toml -vv
"#)]
pub struct Cli {
    /// Lobby settings script (overrides [script] path)
    #[arg(short, long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Default answer for permission categories the script does not declare
    #[arg(long)]
    pub allow_by_default: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
