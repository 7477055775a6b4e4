//! # Running-config Model
//!
//! Structured facts extracted from a switch running-config:
//! * [`SystemInfo`]: identity and management addressing of the device.
//! * [`VlanRecord`]: one VLAN with its tagged and untagged members.
//! * [`PortAddress`]: a `STACKID/SLOT/PORT` interface reference.
//! * [`ConfigDocument`]: both of the above, as one serializable mapping.

mod document;
mod port;
mod system;
mod vlan;

pub use document::ConfigDocument;
pub use port::PortAddress;
pub use system::SystemInfo;
pub use vlan::VlanRecord;
