use std::path::PathBuf;

use clap::Parser;
use clap::ValueHint;

use crate::stats::{DEFAULT_HOST, DEFAULT_MARKER, DEFAULT_PORT};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Admin host to read statistics from
    ///
    /// Host name or address of the proxy's administrative interface.
    #[arg(short = 'H', long, env="ENVOY_ADMIN_HOST", value_hint=ValueHint::Hostname, default_value=DEFAULT_HOST)]
    pub host: String,

    /// Admin port number
    ///
    /// The port the administrative interface listens on. Example: http://localhost:<PORT>/stats
    #[arg(short, long, env="ENVOY_ADMIN_PORT", value_hint=ValueHint::Other, default_value_t=DEFAULT_PORT, value_parser=clap::value_parser!(u16).range(1..))]
    pub port: u16,

    /// Substring selecting the statistics lines to keep
    #[arg(short, long, env="STATS_MARKER", value_hint=ValueHint::Other, default_value=DEFAULT_MARKER)]
    pub marker: String,

    /// Set the logging level
    ///
    /// Set the logging level used for the stderr log (and the log file, if any)
    #[arg(short, long, env="LOG_LEVEL", value_hint=ValueHint::Other, default_value="WARN")]
    pub loglevel: log::LevelFilter,

    /// Also write the log to this file
    #[arg(long, env="LOG_FILE", value_hint=ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,
}
