//! # System Info Extractor
//!
//! Picks the device identity out of the global section of a running-config:
//!
//! ```text
//! ver 08.0.95bT213
//! hostname SW1
//! ip address 10.0.0.1 255.255.255.0
//! ip default-gateway 10.0.0.254
//! ```
//!
//! Only lines starting at column 0 count, so `ip address` lines inside
//! `interface` blocks are ignored.

use std::io::BufRead;

use runconf_common::error::{ConfigError, Result};
use runconf_common::model::SystemInfo;
use tracing::trace;

use crate::lines::numbered_lines;

/// Accumulates the last value seen for every system field.
#[derive(Default)]
struct SystemInfoBuilder {
    hostname: Option<String>,
    version: Option<String>,
    ip_address: Option<String>,
    ip_default_gateway: Option<String>,
}

impl SystemInfoBuilder {
    fn observe(&mut self, line_no: usize, line: &str) {
        let (field, value) = if let Some(value) = line.strip_prefix("ver ") {
            (&mut self.version, value)
        } else if let Some(value) = line.strip_prefix("hostname ") {
            (&mut self.hostname, value)
        } else if let Some(value) = line.strip_prefix("ip address ") {
            (&mut self.ip_address, value)
        } else if let Some(value) = line.strip_prefix("ip default-gateway ") {
            (&mut self.ip_default_gateway, value)
        } else {
            return;
        };

        trace!("line {line_no}: system value '{value}'");
        *field = Some(value.to_string());
    }

    fn build(self) -> Result<SystemInfo> {
        match self {
            Self {
                hostname: Some(hostname),
                version: Some(version),
                ip_address: Some(ip_address),
                ip_default_gateway: Some(ip_default_gateway),
            } => Ok(SystemInfo {
                hostname,
                version,
                ip_address,
                ip_default_gateway,
            }),
            partial => Err(ConfigError::IncompleteSystemInfo {
                missing: partial.missing(),
            }),
        }
    }

    fn missing(&self) -> Vec<&'static str> {
        [
            ("hostname", self.hostname.is_none()),
            ("version", self.version.is_none()),
            ("ip_address", self.ip_address.is_none()),
            ("ip_default_gateway", self.ip_default_gateway.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect()
    }
}

/// Scans `reader` once and returns the device's system info.
///
/// When a keyword appears more than once the last occurrence wins.
pub fn parse_system_info<R: BufRead>(reader: R) -> Result<SystemInfo> {
    let mut builder = SystemInfoBuilder::default();

    for line in numbered_lines(reader) {
        let (line_no, line) = line?;
        builder.observe(line_no, &line);
    }

    builder.build()
}

/// Parses system info from in-memory text.
pub fn parse_system_info_str(content: &str) -> Result<SystemInfo> {
    parse_system_info(content.as_bytes())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
