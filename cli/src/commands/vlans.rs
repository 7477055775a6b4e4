use std::path::Path;

use anyhow::Context;
use runconf_common::config::Config;
use tracing::info;

use crate::commands::open_config;
use crate::terminal::print;

pub fn vlans(file: &Path, cfg: &Config) -> anyhow::Result<()> {
    let vlans = open_config(file)?
        .vlans()
        .with_context(|| format!("failed to parse vlans from {}", file.display()))?;

    info!("parsed {} vlans from {}", vlans.len(), file.display());

    if cfg.json {
        return print::json(&vlans);
    }

    if vlans.is_empty() {
        print::no_results();
    } else {
        print::vlans(&vlans);
    }
    Ok(())
}
