use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pagelens", version, about = "Webpage privacy and security analyzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a single page and optionally run the AI assessment
    Scan(ScanArgs),
    /// Start the HTTP REST API server
    Serve(ServeArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ScanArgs {
    /// Page URL to analyze (scheme defaults to https)
    pub url: String,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output directory for the result files
    #[arg(short, long)]
    pub output: Option<String>,

    /// AI assessment backend: local, hosted, none
    #[arg(long, default_value = "none")]
    pub assess: String,

    /// Skip writing the result files
    #[arg(long)]
    pub no_save: bool,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Bind address (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: String,
}
