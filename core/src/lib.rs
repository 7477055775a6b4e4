//! Extracts system info and VLAN membership from FastIron running-configs.

mod lines;
pub mod parser;
pub mod ports;
pub mod system;
pub mod vlan;

pub use parser::{RunningConfigParser, parse_document_str};
pub use ports::resolve_ports;
pub use system::{parse_system_info, parse_system_info_str};
pub use vlan::{parse_vlans, parse_vlans_str};
