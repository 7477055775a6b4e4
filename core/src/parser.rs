//! File-backed entry point tying the extractors together.
//!
//! Every accessor opens its own read-only handle and runs a fresh pass over
//! the file. Nothing is cached between calls, so two calls on an unchanged
//! file return equal results.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use runconf_common::error::{ConfigError, Result};
use runconf_common::model::{ConfigDocument, SystemInfo, VlanRecord};
use tracing::debug;

use crate::system::{parse_system_info, parse_system_info_str};
use crate::vlan::{parse_vlans, parse_vlans_str};

/// Parser for the running-config of a FastIron switch stack.
#[derive(Clone, Debug)]
pub struct RunningConfigParser {
    path: PathBuf,
}

impl RunningConfigParser {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Hostname, version and management addressing of the device.
    pub fn system_info(&self) -> Result<SystemInfo> {
        parse_system_info(self.open()?)
    }

    /// VLAN stanzas in file order.
    pub fn vlans(&self) -> Result<Vec<VlanRecord>> {
        parse_vlans(self.open()?)
    }

    /// Both passes, combined into one document.
    ///
    /// The passes are independent and run side by side. If both fail, the
    /// system info error is reported.
    pub fn full_config(&self) -> Result<ConfigDocument> {
        let (system, vlans) = rayon::join(|| self.system_info(), || self.vlans());
        Ok(ConfigDocument::new(system?, vlans?))
    }

    fn open(&self) -> Result<BufReader<File>> {
        let file = File::open(&self.path).map_err(|source| ConfigError::ResourceNotFound {
            path: self.path.clone(),
            source,
        })?;
        debug!("opened {}", self.path.display());
        Ok(BufReader::new(file))
    }
}

/// Parses both system info and VLANs from in-memory text.
pub fn parse_document_str(content: &str) -> Result<ConfigDocument> {
    Ok(ConfigDocument::new(
        parse_system_info_str(content)?,
        parse_vlans_str(content)?,
    ))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
