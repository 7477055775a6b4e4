use std::path::Path;

use anyhow::Context;
use runconf_common::config::Config;

use crate::commands::open_config;
use crate::terminal::print;

pub fn system(file: &Path, cfg: &Config) -> anyhow::Result<()> {
    let info = open_config(file)?
        .system_info()
        .with_context(|| format!("failed to parse system info from {}", file.display()))?;

    if cfg.json {
        return print::json(&info);
    }

    print::system(&info);
    Ok(())
}
