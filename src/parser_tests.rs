// File: parser_tests.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

#[cfg(test)]
mod tests {
    use crate::parser::{parse_file, parse_str, ParseError};
    use crate::scan::ScriptEntry;

    const FULL_REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE nmaprun>
<nmaprun scanner="nmap" args="nmap -sV -O --script vuln 192.168.1.0/24" start="1709546400" startstr="Mon Mar  4 10:00:00 2024" version="7.94">
  <host starttime="1709546401" endtime="1709546460">
    <status state="up" reason="echo-reply"/>
    <address addr="192.168.1.10" addrtype="ipv4"/>
    <address addr="AA:BB:CC:DD:EE:FF" addrtype="mac"/>
    <hostnames>
      <hostname name="fileserver.lan" type="PTR"/>
      <hostname name="fs01" type="user"/>
    </hostnames>
    <ports>
      <port protocol="tcp" portid="22">
        <state state="open" reason="syn-ack"/>
        <service name="ssh" product="OpenSSH" version="8.9p1" extrainfo="Ubuntu Linux; protocol 2.0"/>
        <script id="ssh-hostkey" output="3072 aa:bb (RSA)"/>
      </port>
      <port protocol="tcp" portid="445">
        <state state="open" reason="syn-ack"/>
        <service name="microsoft-ds"/>
        <script id="smb-vuln-ms17-010" output="VULNERABLE: Remote Code Execution"/>
      </port>
      <port protocol="tcp" portid="3306">
        <state state="closed" reason="conn-refused"/>
      </port>
    </ports>
    <hostscript>
      <script id="smb-os-discovery" output="OS: Windows Server 2019; Computer name: FS01"/>
    </hostscript>
    <os>
      <osmatch name="Microsoft Windows Server 2019" accuracy="96"/>
      <osmatch name="Microsoft Windows 10" accuracy="91"/>
    </os>
  </host>
</nmaprun>"#;

    #[test]
    fn test_full_report_is_normalized() {
        let report = parse_str(FULL_REPORT).unwrap();

        assert_eq!(report.meta.scanner.as_deref(), Some("nmap"));
        assert_eq!(
            report.meta.args.as_deref(),
            Some("nmap -sV -O --script vuln 192.168.1.0/24")
        );
        assert_eq!(
            report.meta.start_str.as_deref(),
            Some("Mon Mar  4 10:00:00 2024")
        );
        assert_eq!(report.meta.version.as_deref(), Some("7.94"));
        assert_eq!(report.hosts.len(), 1);

        let host = &report.hosts[0];
        assert_eq!(host.addresses.len(), 2);
        assert_eq!(host.addresses[0].addr, "192.168.1.10");
        assert_eq!(host.addresses[1].addr_type, "mac");
        assert_eq!(host.hostnames.len(), 2);
        assert_eq!(host.hostnames[0].name, "fileserver.lan");
        assert_eq!(host.hostnames[0].kind, "PTR");
        assert_eq!(host.status.as_ref().unwrap().state, "up");
        assert_eq!(
            host.status.as_ref().unwrap().reason.as_deref(),
            Some("echo-reply")
        );

        let ports = host.ports.as_deref().unwrap();
        assert_eq!(ports.len(), 3);
        assert_eq!(ports[0].port_id, "22");
        assert_eq!(ports[0].protocol, "tcp");
        assert!(ports[0].is_open());
        let service = ports[0].service.as_ref().unwrap();
        assert_eq!(service.name, "ssh");
        assert_eq!(service.product.as_deref(), Some("OpenSSH"));
        assert_eq!(service.version.as_deref(), Some("8.9p1"));
        assert_eq!(
            service.extra_info.as_deref(),
            Some("Ubuntu Linux; protocol 2.0")
        );
        assert_eq!(ports[0].findings()[0].id, "ssh-hostkey");
        assert!(!ports[2].is_open());
        assert!(ports[2].service.is_none());

        assert_eq!(host.findings().len(), 1);
        assert_eq!(host.findings()[0].id, "smb-os-discovery");
        assert_eq!(host.os_matches.len(), 2);
        assert_eq!(host.os_matches[0].accuracy, "96");
        assert_eq!(host.open_port_count(), 2);
    }

    #[test]
    fn test_single_children_normalize_like_lists() {
        let xml = r#"<nmaprun scanner="nmap">
  <host>
    <address addr="10.0.0.1" addrtype="ipv4"/>
    <hostnames><hostname name="single.lan" type="PTR"/></hostnames>
    <ports>
      <port protocol="tcp" portid="80">
        <state state="open"/>
        <service name="http"/>
      </port>
    </ports>
  </host>
</nmaprun>"#;
        let report = parse_str(xml).unwrap();
        let host = &report.hosts[0];

        assert_eq!(host.addresses.len(), 1);
        assert_eq!(host.hostnames.len(), 1);
        assert_eq!(host.ports.as_deref().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_ports_section_stays_none() {
        let xml = r#"<nmaprun scanner="nmap">
  <host><address addr="10.0.0.1" addrtype="ipv4"/></host>
  <host><address addr="10.0.0.2" addrtype="ipv4"/><ports/></host>
</nmaprun>"#;
        let report = parse_str(xml).unwrap();

        assert_eq!(report.hosts[0].ports, None);
        assert_eq!(report.hosts[1].ports, Some(vec![]));
    }

    #[test]
    fn test_nested_script_wrappers_flatten_in_order() {
        let xml = r#"<nmaprun scanner="nmap">
  <host>
    <address addr="10.0.0.1" addrtype="ipv4"/>
    <ports>
      <port protocol="tcp" portid="80">
        <state state="open"/>
        <script>
          <script id="http-vuln-cve-2017-5638" output="VULNERABLE"/>
          <script id="http-title" output="Welcome"/>
        </script>
        <script id="http-server-header" output="Apache"/>
      </port>
    </ports>
  </host>
</nmaprun>"#;
        let report = parse_str(xml).unwrap();
        let port = &report.hosts[0].ports.as_deref().unwrap()[0];

        assert!(matches!(port.scripts[0], ScriptEntry::Wrapper(_)));
        let ids: Vec<&str> = port.findings().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["http-vuln-cve-2017-5638", "http-title", "http-server-header"]
        );
    }

    #[test]
    fn test_script_without_id_or_children_is_dropped() {
        let xml = r#"<nmaprun scanner="nmap">
  <host>
    <address addr="10.0.0.1" addrtype="ipv4"/>
    <ports>
      <port protocol="tcp" portid="80">
        <state state="open"/>
        <script/>
        <script id="http-title" output="Welcome"/>
      </port>
    </ports>
  </host>
</nmaprun>"#;
        let report = parse_str(xml).unwrap();
        let port = &report.hosts[0].ports.as_deref().unwrap()[0];

        assert_eq!(port.scripts.len(), 1);
        assert_eq!(port.findings()[0].id, "http-title");
    }

    #[test]
    fn test_port_defaults_for_missing_attributes() {
        let xml = r#"<nmaprun scanner="nmap">
  <host>
    <address addr="10.0.0.1" addrtype="ipv4"/>
    <ports>
      <port portid="80"><state state="open"/></port>
      <port protocol="udp" portid="53"/>
    </ports>
  </host>
</nmaprun>"#;
        let report = parse_str(xml).unwrap();
        let ports = report.hosts[0].ports.as_deref().unwrap();

        assert_eq!(ports[0].protocol, "tcp");
        assert_eq!(ports[1].state.state, "unknown");
        assert!(!ports[1].is_open());
    }

    #[test]
    fn test_empty_nmaprun_yields_no_hosts() {
        let report = parse_str(r#"<nmaprun scanner="nmap" version="7.94"></nmaprun>"#).unwrap();
        assert!(report.hosts.is_empty());
        assert_eq!(report.meta.args, None);
    }

    #[test]
    fn test_rejects_non_nmap_root() {
        let err = parse_str("<scan><host/></scan>").unwrap_err();
        assert!(matches!(err, ParseError::NotNmapXml(_)));
        assert!(err
            .to_string()
            .contains("unexpected root element <scan>"));
    }

    #[test]
    fn test_rejects_empty_input() {
        for input in ["", "   \n  ", "<!-- nothing here -->"] {
            let err = parse_str(input).unwrap_err();
            assert!(matches!(err, ParseError::NotNmapXml(_)));
        }
    }

    #[test]
    fn test_malformed_xml_is_reported() {
        let err = parse_str("<nmaprun scanner=\"nmap\"><host></nmaprun>").unwrap_err();
        assert!(matches!(err, ParseError::Xml(_)));
        assert!(err.to_string().starts_with("Malformed XML"));
    }

    #[test]
    fn test_parse_file_propagates_io_errors() {
        let err = parse_file("/nonexistent/scan.xml").unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }

    #[test]
    fn test_report_serializes_back_to_json() {
        let report = parse_str(FULL_REPORT).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let back: crate::parser::ScanReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }
}
