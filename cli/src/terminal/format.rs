use colored::*;
use runconf_common::model::{PortAddress, SystemInfo, VlanRecord};

use crate::terminal::colors;

pub fn vlan_title(vlan: &VlanRecord) -> String {
    if vlan.has_name() {
        format!("VLAN {} ({})", vlan.vlan_id, vlan.vlan_name)
    } else {
        format!("VLAN {}", vlan.vlan_id)
    }
}

pub fn ports_to_value(ports: &[PortAddress], color: Color) -> ColoredString {
    if ports.is_empty() {
        return "none".dimmed();
    }
    ports
        .iter()
        .map(PortAddress::as_str)
        .collect::<Vec<_>>()
        .join(" ")
        .color(color)
}

pub fn vlan_to_key_value_pair(vlan: &VlanRecord) -> Vec<(String, ColoredString)> {
    vec![
        (
            String::from("name"),
            if vlan.has_name() {
                vlan.vlan_name.color(colors::VLAN_NAME)
            } else {
                "-".dimmed()
            },
        ),
        (
            String::from("tagged"),
            ports_to_value(&vlan.tagged_ports, colors::TAGGED),
        ),
        (
            String::from("untagged"),
            ports_to_value(&vlan.untagged_ports, colors::UNTAGGED),
        ),
        (
            String::from("ports"),
            vlan.port_count().to_string().color(colors::ACCENT),
        ),
    ]
}

pub fn system_to_key_value_pair(info: &SystemInfo) -> Vec<(String, ColoredString)> {
    let mut pairs = vec![
        (String::from("Hostname"), info.hostname.color(colors::PRIMARY)),
        (String::from("Version"), info.version.normal()),
        (String::from("IP address"), info.ip_address.color(colors::IPV4_ADDR)),
        (
            String::from("Default gateway"),
            info.ip_default_gateway.color(colors::IPV4_ADDR),
        ),
    ];

    if let Some(network) = info.interface_network() {
        let value = format!("{}/{}", network.network(), network.prefix());
        pairs.push((String::from("Network"), value.color(colors::IPV4_ADDR)));
        pairs.push((
            String::from("Broadcast"),
            network.broadcast().to_string().color(colors::IPV4_ADDR),
        ));
    }

    if let Some(in_subnet) = info.gateway_in_subnet() {
        let value = if in_subnet {
            "reachable".green()
        } else {
            "outside management network".yellow()
        };
        pairs.push((String::from("Gateway"), value));
    }

    pairs
}
