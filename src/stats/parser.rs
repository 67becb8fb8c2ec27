use std::collections::BTreeMap;

use log::{debug, trace};

use super::DEFAULT_MARKER;

/// Separator between a statistic's name and its value.
pub const DELIMITER: &str = ": ";

/// Statistic name to unparsed value, for one parse pass.
pub type StatsLines = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line_number}: expected `name: value`, found {line:?}")]
    MissingDelimiter { line_number: usize, line: String },
}

/// Characters that end a line in the statistics dump. `\r\n` counts as one.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Iterates the lines of `text` without their terminators. A break at the
/// very end does not produce a trailing empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let line = match rest.find(LINE_BREAKS) {
            Some(pos) => {
                let tail = &rest[pos..];
                let break_len = if tail.starts_with("\r\n") {
                    2
                } else {
                    tail.chars().next().map_or(1, char::len_utf8)
                };
                let line = &rest[..pos];
                rest = &tail[break_len..];
                line
            }
            None => std::mem::take(&mut rest),
        };
        Some(line)
    })
}

/// Splits `line` on the first [`DELIMITER`]; the value keeps any later ones.
pub fn split_line(line: &str) -> Option<(&str, &str)> {
    line.split_once(DELIMITER)
}

pub fn parse_stats(text: &str) -> Result<StatsLines, ParseError> {
    parse_stats_with_marker(text, DEFAULT_MARKER)
}

/// Collects every line of `text` containing `marker` into a name/value map.
///
/// A later line with the same name replaces the earlier value. A matching
/// line without a delimiter aborts the whole parse.
pub fn parse_stats_with_marker(text: &str, marker: &str) -> Result<StatsLines, ParseError> {
    let mut stats = StatsLines::new();
    for (index, line) in split_lines(text).enumerate() {
        if !line.contains(marker) {
            continue;
        }
        let (key, value) = split_line(line).ok_or_else(|| ParseError::MissingDelimiter {
            line_number: index + 1,
            line: line.to_owned(),
        })?;
        trace!("matched {key} = {value}");
        if let Some(previous) = stats.insert(key.to_owned(), value.to_owned()) {
            debug!("duplicate statistic {key}, dropping earlier value {previous}");
        }
    }
    Ok(stats)
}
