use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Tracker URL, overrides `[scrape] tracker` from the config file.
    #[arg(long)]
    pub tracker: Option<String>,
    /// Resend limit, overrides `[scrape] retry_limit` from the config file.
    #[arg(long)]
    pub retry_limit: Option<u32>,
    /// Info hashes to scrape, 40 hexadecimal characters each (at most 74).
    #[arg(required = true)]
    pub infohashes: Vec<String>,
}
