use std::io::BufRead;

use runconf_common::error::{ConfigError, Result};

/// Lines of a running-config paired with their 1-based line number.
///
/// Terminators (`\n` and `\r\n`) are stripped. Read failures, including
/// invalid UTF-8, surface as [`ConfigError::Read`].
pub(crate) fn numbered_lines<R: BufRead>(reader: R) -> impl Iterator<Item = Result<(usize, String)>> {
    reader.lines().enumerate().map(|(idx, line)| {
        line.map(|line| (idx + 1, line))
            .map_err(|source| ConfigError::Read { source })
    })
}
