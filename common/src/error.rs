//! Error taxonomy shared by every parse pass.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading and parsing a running-config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input path does not exist or cannot be opened.
    #[error("running-config '{}' could not be opened", .path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading failed half way through a scan (I/O error or invalid UTF-8).
    #[error("failed to read running-config")]
    Read {
        #[source]
        source: io::Error,
    },

    /// One or more of the mandatory system lines never appeared.
    #[error("incomplete system info: missing {}", .missing.join(", "))]
    IncompleteSystemInfo { missing: Vec<&'static str> },

    /// A `LEFT to RIGHT` expression with non-numeric or inverted bounds.
    #[error("malformed port range '{range}': {reason}")]
    MalformedPortRange { range: String, reason: String },

    /// A `vlan` line without a numeric id.
    #[error("malformed vlan header on line {line_no}: '{line}'")]
    MalformedVlanHeader { line_no: usize, line: String },

    /// A string that is not in `STACKID/SLOT/PORT` form.
    #[error("invalid port address '{0}'")]
    InvalidPortAddress(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
