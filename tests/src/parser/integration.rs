#![cfg(test)]
use runconf_common::error::ConfigError;
use runconf_common::model::{SystemInfo, VlanRecord};
use runconf_core::RunningConfigParser;
use runconf_integration_tests::{port_strs, stack_fixture, write_config};

/// Reads the bundled stack export and checks every VLAN stanza.
#[test]
fn vlans_from_stack_export() {
    let parser = RunningConfigParser::new(stack_fixture());
    let vlans: Vec<VlanRecord> = parser.vlans().expect("fixture should parse");

    let ids: Vec<u32> = vlans.iter().map(|v| v.vlan_id).collect();
    assert_eq!(ids, vec![1, 10, 20, 30, 99]);

    let names: Vec<&str> = vlans.iter().map(|v| v.vlan_name.as_str()).collect();
    assert_eq!(names, vec!["DEFAULT-", "ADMIN", "VOIP", "", "MGMT"]);

    // DEFAULT-VLAN is followed by spanning-tree, which is consumed
    assert!(vlans[0].tagged_ports.is_empty());
    assert!(vlans[0].untagged_ports.is_empty());

    let admin = &vlans[1];
    assert_eq!(port_strs(&admin.tagged_ports), vec!["1/2/2", "2/2/2"]);
    assert_eq!(
        port_strs(&admin.untagged_ports),
        vec![
            "1/1/1", "1/1/10", "1/1/11", "1/1/12", "1/1/2", "1/1/3", "1/1/4", "1/1/5", "1/1/6",
            "1/1/7", "1/1/8", "1/1/9", "2/1/1", "2/1/2", "2/1/3", "2/1/4",
        ]
    );

    let voip = &vlans[2];
    assert_eq!(voip.tagged_ports.len(), 14);
    assert!(voip.untagged_ports.is_empty());

    let unnamed = &vlans[3];
    assert_eq!(unnamed.untagged_ports.len(), 14);
    assert_eq!(unnamed.untagged_ports.last().map(|p| p.as_str()), Some("2/1/9"));

    let mgmt = &vlans[4];
    assert_eq!(port_strs(&mgmt.tagged_ports), vec!["1/2/2", "2/2/2"]);
    assert!(mgmt.untagged_ports.is_empty());
}

#[test]
fn system_info_from_stack_export() {
    let parser = RunningConfigParser::new(stack_fixture());
    let info: SystemInfo = parser.system_info().expect("fixture should parse");

    assert_eq!(info.hostname, "ABL-CORE-STACK");
    assert_eq!(info.version, "08.0.95bT213");
    // The ve 99 address is indented and must not win
    assert_eq!(info.ip_address, "10.10.99.5 255.255.255.0");
    assert_eq!(info.ip_default_gateway, "10.10.99.1");
    assert_eq!(info.gateway_in_subnet(), Some(true));
}

#[test]
fn missing_file_is_resource_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let parser = RunningConfigParser::new(dir.path().join("abl.teste.stack.run"));

    assert!(matches!(
        parser.system_info(),
        Err(ConfigError::ResourceNotFound { .. })
    ));
    assert!(matches!(parser.vlans(), Err(ConfigError::ResourceNotFound { .. })));
}

#[test]
fn incomplete_system_info_is_an_error() -> anyhow::Result<()> {
    let file = write_config("ver 08.0.95\nhostname SW1\nip address 10.0.0.1/24\n")?;
    let parser = RunningConfigParser::new(file.path());

    match parser.system_info() {
        Err(ConfigError::IncompleteSystemInfo { missing }) => {
            assert_eq!(missing, vec!["ip_default_gateway"]);
        }
        other => panic!("expected IncompleteSystemInfo, got {other:?}"),
    }

    // The VLAN pass does not depend on system info
    assert!(parser.vlans()?.is_empty());
    Ok(())
}

#[test]
fn inverted_range_fails_the_vlan_pass() -> anyhow::Result<()> {
    let file = write_config("vlan 10 name ENG\n tagged ethe 1/1/9 to 1/1/3\n")?;
    let parser = RunningConfigParser::new(file.path());

    assert!(matches!(
        parser.vlans(),
        Err(ConfigError::MalformedPortRange { .. })
    ));
    Ok(())
}

#[test]
fn repeated_parses_are_equal() {
    let parser = RunningConfigParser::new(stack_fixture());

    let first = parser.full_config().expect("fixture should parse");
    let second = parser.full_config().expect("fixture should parse");
    assert_eq!(first, second);
}
