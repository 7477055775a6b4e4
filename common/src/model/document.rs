use serde::Serialize;

use super::{SystemInfo, VlanRecord};

/// Everything extracted from one running-config.
///
/// Serializes as `{"system": {...}, "vlan": [...]}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfigDocument {
    pub system: SystemInfo,
    #[serde(rename = "vlan")]
    pub vlans: Vec<VlanRecord>,
}

impl ConfigDocument {
    pub fn new(system: SystemInfo, vlans: Vec<VlanRecord>) -> Self {
        Self { system, vlans }
    }

    pub fn vlan(&self, vlan_id: u32) -> Option<&VlanRecord> {
        self.vlans.iter().find(|v| v.vlan_id == vlan_id)
    }
}
