use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;
use serde::Serialize;

/// Identity and management addressing of the switch.
///
/// Every field holds the text that followed its keyword in the configuration,
/// untouched. The helper methods interpret that text on demand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub version: String,
    pub ip_address: String,
    pub ip_default_gateway: String,
}

impl SystemInfo {
    /// Management network of the switch.
    ///
    /// Supported formats:
    /// * **CIDR**: "10.0.0.1/24"
    /// * **Netmask**: "10.0.0.1 255.255.255.0"
    ///
    /// Anything after the address and mask (e.g. `dynamic`) is ignored.
    pub fn interface_network(&self) -> Option<Ipv4Network> {
        let mut words = self.ip_address.split_whitespace();
        let addr = words.next()?;

        if let Some((ip_str, prefix_str)) = addr.split_once('/') {
            let ip = ip_str.parse::<Ipv4Addr>().ok()?;
            let prefix = prefix_str.parse::<u8>().ok()?;
            return Ipv4Network::new(ip, prefix).ok();
        }

        let ip = addr.parse::<Ipv4Addr>().ok()?;
        let mask = words.next()?.parse::<Ipv4Addr>().ok()?;
        Ipv4Network::with_netmask(ip, mask).ok()
    }

    pub fn gateway_addr(&self) -> Option<Ipv4Addr> {
        self.ip_default_gateway.trim().parse().ok()
    }

    /// Whether the default gateway is reachable on the management network.
    pub fn gateway_in_subnet(&self) -> Option<bool> {
        let network = self.interface_network()?;
        let gateway = self.gateway_addr()?;
        Some(network.contains(gateway))
    }
}
