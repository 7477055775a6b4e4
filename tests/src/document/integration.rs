#![cfg(test)]
use runconf_core::{RunningConfigParser, parse_document_str};
use runconf_integration_tests::stack_fixture;
use serde_json::{Value, json};

/// The combined mapping exposes exactly the `system` and `vlan` keys.
#[test]
fn combined_mapping_shape() {
    let doc = RunningConfigParser::new(stack_fixture())
        .full_config()
        .expect("fixture should parse");
    let value: Value = serde_json::to_value(&doc).unwrap();

    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["system", "vlan"]);

    assert_eq!(
        value["system"],
        json!({
            "hostname": "ABL-CORE-STACK",
            "version": "08.0.95bT213",
            "ip_address": "10.10.99.5 255.255.255.0",
            "ip_default_gateway": "10.10.99.1",
        })
    );
    assert_eq!(value["vlan"].as_array().map(Vec::len), Some(5));
    assert_eq!(
        value["vlan"][4],
        json!({
            "vlan_id": 99,
            "vlan_name": "MGMT",
            "tagged_ports": ["1/2/2", "2/2/2"],
            "untagged_ports": [],
        })
    );
}

#[test]
fn in_memory_document_matches_file() {
    let content = std::fs::read_to_string(stack_fixture()).unwrap();
    let from_str = parse_document_str(&content).unwrap();
    let from_file = RunningConfigParser::new(stack_fixture()).full_config().unwrap();

    assert_eq!(from_str, from_file);
    assert_eq!(from_str.vlan(30).map(|v| v.port_count()), Some(16));
}

#[test]
fn minimal_document() {
    let content = "\
hostname SW1
ver 08.0.95
ip address 10.0.0.1/24
ip default-gateway 10.0.0.254
vlan 10 name ENG
 tagged 1/1/1 1/1/2
 untagged 1/1/3
vlan 20
";
    let doc = parse_document_str(content).unwrap();

    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!({
            "system": {
                "hostname": "SW1",
                "version": "08.0.95",
                "ip_address": "10.0.0.1/24",
                "ip_default_gateway": "10.0.0.254",
            },
            "vlan": [
                {
                    "vlan_id": 10,
                    "vlan_name": "ENG",
                    "tagged_ports": ["1/1/1", "1/1/2"],
                    "untagged_ports": ["1/1/3"],
                },
                {
                    "vlan_id": 20,
                    "vlan_name": "",
                    "tagged_ports": [],
                    "untagged_ports": [],
                },
            ],
        })
    );
}
