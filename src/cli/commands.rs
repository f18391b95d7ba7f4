//! CLI arguments

use clap::Parser;

/// Stream the managed-endpoint inventory from a SEPM server
#[derive(Parser, Debug)]
#[command(name = "sepm-machines")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Host name of the SEP server (my-sep-host.my-domain.com)
    #[arg(long)]
    pub hostname: String,

    /// User name of the SEP admin user
    #[arg(long)]
    pub username: String,

    /// Password of the SEP admin user
    #[arg(long)]
    pub password: String,

    /// Authentication domain of the SEP admin user
    #[arg(long)]
    pub domain: Option<String>,

    /// Machine name to search for
    #[arg(long)]
    pub machine: Option<String>,

    /// JSON structure specifying 'http' and 'https' proxy URLs
    #[arg(long)]
    pub proxies: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Indented JSON (one record per block)
    Pretty,
}
