use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ConfigError;

/// A switch interface in `STACKID/SLOT/PORT` form, e.g. `1/1/24`.
///
/// The text is kept exactly as it appeared in the configuration and is the
/// identity of the port: equality and ordering compare the text, so ports
/// sort lexicographically (`1/1/10` before `1/1/2`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PortAddress(String);

impl PortAddress {
    /// Builds the port `stack/slot/port`, keeping `stack` and `slot` verbatim.
    pub fn with_port(stack: &str, slot: &str, port: u32) -> Result<Self, ConfigError> {
        let text = format!("{stack}/{slot}/{port}");
        if !is_digits(stack) || !is_digits(slot) {
            return Err(ConfigError::InvalidPortAddress(text));
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn stack(&self) -> &str {
        self.part(0)
    }

    pub fn slot(&self) -> &str {
        self.part(1)
    }

    pub fn port(&self) -> &str {
        self.part(2)
    }

    fn part(&self, idx: usize) -> &str {
        self.0.split('/').nth(idx).unwrap_or_default()
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for PortAddress {
    type Err = ConfigError;

    /// Accepts exactly three non-empty digit runs separated by `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 3 || !parts.iter().all(|p| is_digits(p)) {
            return Err(ConfigError::InvalidPortAddress(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for PortAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for PortAddress {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
