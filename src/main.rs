use anyhow::Result;
use clap::Parser;
use word_harvest::cli::Args;
use word_harvest::logging;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging()?;

    let config = Args::parse().into_config()?;
    let harvester = config.into_harvester()?;
    let report = harvester.harvest().await?;

    println!(
        "{} words from {} pages written to {}",
        report.words,
        report.pages,
        harvester.output().display()
    );
    Ok(())
}
