pub mod show;
pub mod system;
pub mod vlans;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use runconf_core::RunningConfigParser;

#[derive(Parser)]
#[command(name = "runconf")]
#[command(about = "Extracts system info and VLANs from a switch running-config.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Hide headers and separators
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
    /// Print JSON instead of the tree view
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every VLAN, the combined mapping and the system info
    #[command(alias = "s")]
    Show { file: PathBuf },
    /// Print the VLANs and their port members
    #[command(alias = "v")]
    Vlans { file: PathBuf },
    /// Print hostname, version and management addressing
    #[command(alias = "i")]
    System { file: PathBuf },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Checks the file exists before any parse pass touches it.
pub fn open_config(file: &Path) -> anyhow::Result<RunningConfigParser> {
    if !file.is_file() {
        anyhow::bail!("File {} not found", file.display());
    }
    Ok(RunningConfigParser::new(file))
}
