use std::path::Path;

use anyhow::Context;
use runconf_common::config::Config;
use tracing::info;

use crate::commands::open_config;
use crate::terminal::print;

/// Every VLAN, then the combined mapping, then the system info.
pub fn show(file: &Path, cfg: &Config) -> anyhow::Result<()> {
    let parser = open_config(file)?;
    let doc = parser
        .full_config()
        .with_context(|| format!("failed to parse {}", parser.path().display()))?;

    info!("parsed {} vlans from {}", doc.vlans.len(), parser.path().display());

    if cfg.json {
        print::json(&doc)?;
        return Ok(());
    }

    print::vlans(&doc.vlans);
    print::header("combined mapping", cfg.quiet);
    print::json(&doc)?;
    print::header("system", cfg.quiet);
    print::system(&doc.system);
    Ok(())
}
