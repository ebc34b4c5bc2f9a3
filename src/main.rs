use clap::Parser;
use label_matcher::cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("label_matcher=debug,info")
    } else {
        EnvFilter::new("label_matcher=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Score(args) => {
            cli::score::run(args, cli.format)?;
        }
        cli::Commands::Compare(args) => {
            cli::compare::run(args, cli.format)?;
        }
    }

    Ok(())
}
