//! Shared fixtures for the integration tests.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

/// Two-unit ICX stack export with five VLANs.
pub fn stack_fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/icx-stack.run")
}

/// Writes `content` to a temporary running-config file.
pub fn write_config(content: &str) -> anyhow::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

pub fn port_strs(ports: &[runconf_common::model::PortAddress]) -> Vec<&str> {
    ports.iter().map(|p| p.as_str()).collect()
}
