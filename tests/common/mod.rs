// File: common/mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Three-host sweep: one host with a version-exposing ssh daemon and a
/// vulnerability finding, one with a bare http port, one fully closed.
pub const LAN_SCAN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<nmaprun scanner="nmap" args="nmap -sV --script vuln 192.168.1.0/24" startstr="Mon Mar  4 10:00:00 2024" version="7.94">
  <host>
    <status state="up" reason="echo-reply"/>
    <address addr="192.168.1.10" addrtype="ipv4"/>
    <hostnames>
      <hostname name="fileserver.lan" type="PTR"/>
    </hostnames>
    <ports>
      <port protocol="tcp" portid="22">
        <state state="open" reason="syn-ack"/>
        <service name="ssh" product="OpenSSH" version="8.9p1"/>
        <script id="ssh-vuln-cve-xyz" output="VULNERABLE: example finding"/>
      </port>
    </ports>
  </host>
  <host>
    <status state="up" reason="syn-ack"/>
    <address addr="192.168.1.20" addrtype="ipv4"/>
    <ports>
      <port protocol="tcp" portid="80">
        <state state="open" reason="syn-ack"/>
        <service name="http"/>
      </port>
    </ports>
  </host>
  <host>
    <status state="up" reason="echo-reply"/>
    <address addr="192.168.1.30" addrtype="ipv4"/>
    <ports>
      <port protocol="tcp" portid="22">
        <state state="closed" reason="conn-refused"/>
      </port>
    </ports>
  </host>
</nmaprun>"#;

pub fn write_scan(dir: &TempDir, name: &str, xml: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, xml).unwrap();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lan_scan_fixture_parses() {
        let report = scanlens::parser::parse_str(LAN_SCAN).unwrap();
        assert_eq!(report.hosts.len(), 3);
    }
}
