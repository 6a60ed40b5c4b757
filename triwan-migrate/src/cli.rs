use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "triwan-migrate")]
#[command(about = "Migrate a router's WAN configuration to a three-WAN topology")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Report current topology preconditions without mutating anything.
    Check(CheckArgs),
    /// Run the full 1-WAN to 3-WAN migration.
    Migrate(MigrateArgs),
    /// Poll WAN link status and classify the result.
    Verify(VerifyArgs),
    /// Copy snapshots from a backup directory back over the live stores.
    Restore(RestoreArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Configuration store directory.
    #[arg(long, default_value = "/etc/config")]
    pub config_dir: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Configuration store directory.
    #[arg(long, default_value = "/etc/config")]
    pub config_dir: PathBuf,
    /// Root directory for timestamped backup snapshots.
    #[arg(long, default_value = "/etc/triwan-backups")]
    pub backup_root: PathBuf,
    /// Directory the operator scripts are written into.
    #[arg(long, default_value = "/usr/sbin")]
    pub bin_dir: PathBuf,
    /// Sysfs root the link verifier reads operstate under.
    #[arg(long, default_value = "/sys")]
    pub sys_root: PathBuf,
    /// Optional TOML file overriding the 1:1:1 load-balancing weights.
    #[arg(long)]
    pub weights_file: Option<PathBuf>,
    /// Persistent log file; events are appended here and echoed to the terminal.
    #[arg(long, default_value = "/var/log/triwan-migrate.log")]
    pub log_file: PathBuf,
    /// Seconds to wait after the network service restart.
    #[arg(long, default_value_t = 10)]
    pub settle_secs: u64,
    /// Upper bound on the link verification poll.
    #[arg(long, default_value_t = 30)]
    pub verify_timeout_secs: u64,
    /// Do not restart services after committing the stores.
    #[arg(long)]
    pub skip_restart: bool,
    /// Do not write the operator scripts.
    #[arg(long)]
    pub skip_artifacts: bool,
    /// Skip the elevated-privilege gate (dev/testing only).
    #[arg(long)]
    pub allow_unprivileged: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Sysfs root the link verifier reads operstate under.
    #[arg(long, default_value = "/sys")]
    pub sys_root: PathBuf,
    /// Upper bound on the link verification poll.
    #[arg(long, default_value_t = 30)]
    pub verify_timeout_secs: u64,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct RestoreArgs {
    /// Backup directory holding the .bak snapshots to restore.
    #[arg(long)]
    pub backup_dir: PathBuf,
    /// Configuration store directory.
    #[arg(long, default_value = "/etc/config")]
    pub config_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
