use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Reconstruct and check the explainer evaluation table", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate every (dataset, method) pair and print the table (the default).
    Build(cmd::build::BuildArgs),
    /// Rebuild the table and highlight where it disagrees with a reference.
    Compare(cmd::compare::CompareArgs),
    /// Print the published reference table.
    Published(cmd::published::PublishedArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Some(Commands::Build(args)) => cmd::build::run(args),
        Some(Commands::Compare(args)) => cmd::compare::run(args),
        Some(Commands::Published(args)) => cmd::published::run(args),
        None => cmd::build::run(cmd::build::BuildArgs::default()),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
