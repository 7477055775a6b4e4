use std::collections::BTreeSet;

use serde::Serialize;

use super::PortAddress;

/// One `vlan <id>` stanza of the running-config.
///
/// Port lists are sorted (see [`PortAddress`] for the ordering) and free of
/// duplicates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VlanRecord {
    pub vlan_id: u32,
    /// Empty when the header carries no `name`.
    pub vlan_name: String,
    pub tagged_ports: Vec<PortAddress>,
    pub untagged_ports: Vec<PortAddress>,
}

impl VlanRecord {
    /// Number of distinct ports that are members of this VLAN.
    pub fn port_count(&self) -> usize {
        self.tagged_ports
            .iter()
            .chain(&self.untagged_ports)
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn has_name(&self) -> bool {
        !self.vlan_name.is_empty()
    }
}
