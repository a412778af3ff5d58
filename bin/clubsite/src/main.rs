//! Clubsite CLI
//!
//! Validate the listing fixtures, query them from the terminal, and serve the built site.

use clap::Parser;
use clubsite::cmd::search::SearchArgs;
use clubsite_core::RecordKind;
use color_eyre::eyre::Result;

/// Command-line interface for the club website.
#[derive(Parser)]
#[command(
    name = "clubsite",
    version,
    about = "Club website fixtures: check, search and serve"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "clubsite.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Validate configuration and fixtures
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Filter one listing (news, publications, projects, people)
    Search {
        /// Listing to search
        kind: RecordKind,
        #[command(flatten)]
        args: SearchArgs,
    },
    /// Serve the built site and its fixtures
    Serve {
        /// Port to listen on (defaults to server.port)
        #[arg(short, long)]
        port: Option<u16>,
        /// Built site directory (defaults to server.dist_dir)
        #[arg(long)]
        dist: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    clubsite::init_tracing(cli.verbose);

    match cli.command {
        Commands::Check { strict } => {
            clubsite::cmd::check::run(&cli.config, strict)?;
        }
        Commands::Search { kind, args } => {
            clubsite::cmd::search::run(&cli.config, kind, &args)?;
        }
        Commands::Serve { port, dist } => {
            clubsite::cmd::serve::run(&cli.config, port, dist).await?;
        }
    }

    Ok(())
}
