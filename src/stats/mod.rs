mod fetcher;
pub use self::fetcher::fetch_stats;
pub use self::fetcher::stats_url;
pub use self::fetcher::FetchError;
pub use self::fetcher::StatsFetcher;

mod parser;
pub use self::parser::parse_stats;
pub use self::parser::parse_stats_with_marker;
pub use self::parser::split_line;
pub use self::parser::split_lines;
pub use self::parser::ParseError;
pub use self::parser::StatsLines;
pub use self::parser::DELIMITER;

#[cfg(test)]
mod test_data;

/// Loopback host of the administrative interface.
pub const DEFAULT_HOST: &str = "localhost";
/// Default port of Envoy's administrative interface.
pub const DEFAULT_PORT: u16 = 9901;
/// Substring identifying the lines worth keeping.
pub const DEFAULT_MARKER: &str = "tcp_stats";
