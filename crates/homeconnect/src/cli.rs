//! Clap derive structures for the `homeconnect` CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// homeconnect -- inspect Home Connect appliances and follow their events
#[derive(Debug, Parser)]
#[command(
    name = "homeconnect",
    version,
    about = "Inspect Home Connect appliances and follow their event stream",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Account profile to use
    #[arg(long, short = 'p', env = "HOMECONNECT_PROFILE", global = true)]
    pub profile: Option<String>,

    /// API host (overrides profile), e.g. https://simulator.home-connect.com
    #[arg(long, env = "HOMECONNECT_HOST", global = true)]
    pub host: Option<String>,

    /// OAuth access token (overrides profile)
    #[arg(long, env = "HOMECONNECT_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Language for translated names: de-DE, en-US or en-GB
    #[arg(long, short = 'l', env = "HOMECONNECT_LANGUAGE", global = true)]
    pub language: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "HOMECONNECT_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "HOMECONNECT_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List appliances paired with the account
    #[command(alias = "ls")]
    Appliances,

    /// Show the status of one appliance
    Status(StatusArgs),

    /// Follow the live event stream
    Watch(WatchArgs),

    /// Manage profiles and access tokens
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Appliance id (haId)
    pub ha_id: String,

    /// Single status key, e.g. BSH.Common.Status.DoorState
    pub key: Option<String>,
}

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Only follow events for this appliance id
    #[arg(long, short = 'a')]
    pub appliance: Option<String>,

    /// Print appliance lifecycle changes only (connected, paired, ...)
    #[arg(long)]
    pub changes: bool,

    /// Reconnect with backoff when the stream ends or fails
    #[arg(long, short = 'r')]
    pub reconnect: bool,

    /// Give up after this many consecutive failed reconnects
    #[arg(long, requires = "reconnect")]
    pub max_retries: Option<u32>,

    /// Also print KEEP-ALIVE frames
    #[arg(long, conflicts_with = "changes")]
    pub keep_alive: bool,

    /// Stream inactivity timeout in seconds (overrides profile)
    #[arg(long)]
    pub read_timeout: Option<u64>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file path
    Path,

    /// Show the current configuration (tokens masked)
    Show,

    /// Store an access token for the active profile
    SetToken(SetTokenArgs),
}

#[derive(Debug, Args)]
pub struct SetTokenArgs {
    /// Write the token into the config file instead of the system keyring
    #[arg(long)]
    pub plaintext: bool,

    /// Read the token from stdin instead of prompting
    #[arg(long)]
    pub stdin: bool,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: Shell,
}
