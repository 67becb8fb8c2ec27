use anyhow::Context;
use clap::Parser;
use envoy_tcp_stats::cli::Cli;
use envoy_tcp_stats::logging::app_config;
use envoy_tcp_stats::stats;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // initialize the logger
    log4rs::init_config(app_config(cli.log_file.as_deref(), cli.loglevel)?)?;
    log::info!("Starting the application!");

    let url = stats::stats_url(&cli.host, cli.port);
    log::info!("Reading statistics from endpoint: {url}");
    let text = stats::fetch_stats(&cli.host, cli.port)?;

    let stats = stats::parse_stats_with_marker(&text, &cli.marker)
        .with_context(|| format!("failed to parse statistics from {url}"))?;
    log::info!("Extracted {} lines matching {:?}", stats.len(), cli.marker);

    println!("{stats:?}");
    Ok(())
}
