//! # Port Resolver
//!
//! Turns a ` tagged ...` / ` untagged ...` line into the set of ports it names.
//!
//! Two forms are recognised on the same line:
//! * **Explicit**: any `STACKID/SLOT/PORT` substring, e.g. `ethe 1/1/7`.
//! * **Range**: `LEFT to RIGHT`, e.g. `ethe 1/1/1 to 1/1/4`. Both ends must
//!   share a stack/slot; every port from LEFT through RIGHT is generated.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use runconf_common::error::{ConfigError, Result};
use runconf_common::model::PortAddress;
use tracing::trace;

static PORT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+/[0-9]+/[0-9]+").expect("valid port pattern"));

static RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\S+/[0-9]+/\S+) to (\S+/[0-9]+/\S+)").expect("valid range pattern")
});

/// Resolves every port named on `line`.
///
/// The result is sorted lexicographically and free of duplicates, so
/// `1/1/10` comes before `1/1/2`.
pub fn resolve_ports(line: &str) -> Result<Vec<PortAddress>> {
    let mut ports: BTreeSet<PortAddress> = BTreeSet::new();

    for explicit in PORT_PATTERN.find_iter(line) {
        ports.insert(explicit.as_str().parse()?);
    }

    // `a to b to c` only yields `(a, b)`: matches never overlap
    for caps in RANGE_PATTERN.captures_iter(line) {
        expand_range(&caps[1], &caps[2], &mut ports)?;
    }

    trace!("resolved {} ports from '{}'", ports.len(), line.trim());
    Ok(ports.into_iter().collect())
}

fn expand_range(left: &str, right: &str, ports: &mut BTreeSet<PortAddress>) -> Result<()> {
    let malformed = |reason: String| ConfigError::MalformedPortRange {
        range: format!("{left} to {right}"),
        reason,
    };

    let start_port: PortAddress = left
        .parse()
        .map_err(|_| malformed(format!("invalid start port '{left}'")))?;
    let end_port: PortAddress = right
        .parse()
        .map_err(|_| malformed(format!("invalid end port '{right}'")))?;

    if (start_port.stack(), start_port.slot()) != (end_port.stack(), end_port.slot()) {
        return Err(malformed("endpoints are on different stack units or slots".into()));
    }

    let start = port_number(&start_port).ok_or_else(|| malformed("start port out of range".into()))?;
    let end = port_number(&end_port).ok_or_else(|| malformed("end port out of range".into()))?;

    if start > end {
        return Err(malformed("start must be <= end".into()));
    }

    for port in start..=end {
        ports.insert(PortAddress::with_port(
            start_port.stack(),
            start_port.slot(),
            port,
        )?);
    }

    Ok(())
}

fn port_number(port: &PortAddress) -> Option<u32> {
    port.port().parse().ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
