//! # VLAN Extractor
//!
//! Collects every `vlan <id>` stanza in file order.
//!
//! A stanza is the header line plus at most two lines of lookahead:
//!
//! ```text
//! vlan 10 name ENG by port
//!  tagged ethe 1/1/1 to 1/1/4
//!  untagged ethe 1/1/5
//! ```
//!
//! The first lookahead line only counts if it is a ` tagged` line and the
//! second only if it is an ` untagged` line. Both are consumed regardless of
//! what they contain, and are never looked at again.

use std::io::BufRead;
use std::sync::LazyLock;

use regex::Regex;
use runconf_common::error::{ConfigError, Result};
use runconf_common::model::{PortAddress, VlanRecord};
use tracing::{debug, trace, warn};

use crate::lines::numbered_lines;
use crate::ports::resolve_ports;

const HEADER: &str = "vlan";
const TAGGED: &str = " tagged";
const UNTAGGED: &str = " untagged";

static HEADER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^vlan ([0-9]+)").expect("valid vlan header pattern"));

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"name (\w*\S)").expect("valid vlan name pattern"));

/// Parses every VLAN stanza read from `reader`.
pub fn parse_vlans<R: BufRead>(reader: R) -> Result<Vec<VlanRecord>> {
    let mut lines = numbered_lines(reader);
    let mut vlans = Vec::new();

    while let Some((line_no, line)) = lines.next().transpose()? {
        if !line.starts_with(HEADER) {
            continue;
        }

        let vlan_id = header_id(&line).ok_or_else(|| ConfigError::MalformedVlanHeader {
            line_no,
            line: line.clone(),
        })?;
        let vlan_name = header_name(&line).unwrap_or_default();

        let tagged_ports = member_ports(lines.next().transpose()?, TAGGED)?;
        let untagged_ports = member_ports(lines.next().transpose()?, UNTAGGED)?;

        debug!(
            "vlan {vlan_id} '{vlan_name}': {} tagged, {} untagged",
            tagged_ports.len(),
            untagged_ports.len()
        );

        vlans.push(VlanRecord {
            vlan_id,
            vlan_name,
            tagged_ports,
            untagged_ports,
        });
    }

    Ok(vlans)
}

/// Parses VLAN stanzas from in-memory text.
pub fn parse_vlans_str(content: &str) -> Result<Vec<VlanRecord>> {
    parse_vlans(content.as_bytes())
}

/// Resolves a consumed lookahead line if it carries the expected keyword.
fn member_ports(line: Option<(usize, String)>, keyword: &str) -> Result<Vec<PortAddress>> {
    let Some((line_no, line)) = line else {
        return Ok(Vec::new());
    };

    if line.starts_with(keyword) {
        return resolve_ports(&line);
    }

    if line.starts_with(HEADER) {
        warn!("line {line_no} starts a vlan stanza but was consumed looking for '{}'", keyword.trim());
    } else {
        trace!("line {line_no} has no '{}' ports", keyword.trim());
    }
    Ok(Vec::new())
}

/// The digits directly following `vlan `.
fn header_id(line: &str) -> Option<u32> {
    HEADER_PATTERN.captures(line)?[1].parse().ok()
}

/// The token following `name `, when the line carries exactly one.
///
/// A token is a run of word characters plus at most one trailing
/// non-space character, so `name ENG by port` yields `ENG`.
fn header_name(line: &str) -> Option<String> {
    let mut captures = NAME_PATTERN.captures_iter(line);
    match (captures.next(), captures.next()) {
        (Some(caps), None) => Some(caps[1].to_string()),
        _ => None,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
