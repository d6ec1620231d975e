use clap::Parser;
use tracing_subscriber::EnvFilter;

use pagelens::cli::{self, Cli, Commands};
use pagelens::config;
use pagelens::errors::PageLensError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    let result = match cli.command {
        Commands::Scan(args) => cli::scan::handle_scan(args).await,
        Commands::Serve(args) => cli::serve::handle_serve(args).await,
        Commands::Validate(args) => handle_validate(args).await,
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                PageLensError::Config(_) => 2,
                PageLensError::Validation(_) => 3,
                PageLensError::Browser(_) => 4,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), PageLensError> {
    let path = std::path::PathBuf::from(&args.config);
    let _config = config::load_config(Some(&path)).await?;
    println!("Configuration is valid: {}", args.config);
    Ok(())
}
