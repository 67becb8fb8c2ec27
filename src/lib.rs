//! Extract `tcp_stats` lines from a proxy's administrative `/stats` dump.
//!
//! The flow is one blocking GET through [`stats::StatsFetcher`] followed by a
//! single line scan in [`stats::parse_stats_with_marker`].

pub mod cli;
pub mod logging;
pub mod stats;
