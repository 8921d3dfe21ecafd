//! wavotes - Browse World Assembly resolution vote records

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wavotes::{
    cli::{Cli, Command, ResolutionsArgs},
    data_loader::DataLoader,
    error::Result,
    output::get_formatter,
    report::{nation_history, summarize, summarize_one},
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. The --quiet flag should override RUST_LOG.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("warn")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new("wavotes=info,wavotes_core=info,wavotes_fetch=info")
        })
    };

    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if !is_terminal::is_terminal(std::io::stdout()) {
        colored::control::set_override(false);
    }

    let loader = DataLoader::from_location(&cli.source)?;
    debug!("Using data source {}", loader.describe());
    let data = loader.load_all_data().await?;
    let formatter = get_formatter(cli.json);

    match cli.command.unwrap_or(Command::Resolutions(ResolutionsArgs::default())) {
        Command::Resolutions(args) => {
            info!("Listing resolutions");
            let summaries = summarize(&data, args.chamber.map(Into::into));
            println!("{}", formatter.format_resolutions(&summaries)?);
        }

        Command::Resolution { id } => {
            let summary = summarize_one(&data, &id)?;
            println!("{}", formatter.format_resolution(&summary)?);
        }

        Command::Nation { name } => {
            let votes = nation_history(&data, &name)?;
            println!("{}", formatter.format_nation(&name, &votes)?);
        }

        Command::Dump => {
            println!("{}", formatter.format_raw(&data)?);
        }
    }

    Ok(())
}
