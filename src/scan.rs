// File: scan.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SMB_COMPUTER_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Computer name: ([\w-]+)").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanMeta {
    pub scanner: Option<String>,
    pub args: Option<String>,
    pub start_str: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    pub addresses: Vec<Address>,
    pub hostnames: Vec<Hostname>,
    pub status: Option<HostStatus>,
    pub ports: Option<Vec<Port>>,
    pub host_scripts: Vec<ScriptEntry>,
    pub os_matches: Vec<OsMatch>,
    pub risk_score: Option<f64>,
    pub risk_factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub addr: String,
    pub addr_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hostname {
    pub name: String,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostStatus {
    pub state: String,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub protocol: String,
    pub port_id: String,
    pub state: PortState,
    pub service: Option<Service>,
    pub scripts: Vec<ScriptEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortState {
    pub state: String,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub product: Option<String>,
    pub version: Option<String>,
    pub extra_info: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub id: String,
    pub output: String,
}

/// A `<script>` element as it appears in the wild: usually a finding, but
/// some nmap builds emit a wrapper `<script>` whose children are the real
/// entries. Variant order matters: an entry carrying an id is a finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptEntry {
    Finding(Script),
    Wrapper(Vec<ScriptEntry>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsMatch {
    pub name: String,
    pub accuracy: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
    Info,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            RiskLevel::High
        } else if score >= 40.0 {
            RiskLevel::Medium
        } else if score > 0.0 {
            RiskLevel::Low
        } else {
            RiskLevel::Info
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Info => write!(f, "Info"),
        }
    }
}

/// Resolves script entries into plain findings, unwrapping nested wrapper
/// entries recursively while preserving document order.
pub fn flatten_scripts(entries: &[ScriptEntry]) -> Vec<&Script> {
    let mut findings = Vec::new();
    collect_findings(entries, &mut findings);
    findings
}

fn collect_findings<'a>(entries: &'a [ScriptEntry], out: &mut Vec<&'a Script>) {
    for entry in entries {
        match entry {
            ScriptEntry::Finding(script) => out.push(script),
            ScriptEntry::Wrapper(nested) => collect_findings(nested, out),
        }
    }
}

impl Host {
    pub fn primary_address(&self) -> Option<&str> {
        self.addresses
            .iter()
            .find(|a| a.addr_type == "ipv4")
            .or_else(|| self.addresses.first())
            .map(|a| a.addr.as_str())
    }

    /// Numeric sort key for ascending IP ordering; non-IPv4 hosts sort last.
    pub fn ipv4_sort_key(&self) -> u32 {
        let addr = match self.addresses.iter().find(|a| a.addr_type == "ipv4") {
            Some(a) => &a.addr,
            None => return u32::MAX,
        };
        let mut key: u32 = 0;
        let mut octets = 0;
        for part in addr.split('.') {
            match part.parse::<u8>() {
                Ok(octet) => {
                    key = (key << 8) | u32::from(octet);
                    octets += 1;
                }
                Err(_) => return u32::MAX,
            }
        }
        if octets == 4 {
            key
        } else {
            u32::MAX
        }
    }

    pub fn display_hostname(&self) -> Option<String> {
        for kind in ["user", "PTR"] {
            if let Some(h) = self.hostnames.iter().find(|h| h.kind == kind) {
                return Some(h.name.clone());
            }
        }
        if let Some(h) = self.hostnames.first() {
            return Some(h.name.clone());
        }
        for script in self.findings() {
            if script.id == "smb-os-discovery" {
                if let Some(caps) = SMB_COMPUTER_NAME.captures(&script.output) {
                    return Some(caps[1].to_string());
                }
            }
        }
        None
    }

    pub fn os_name(&self) -> Option<&str> {
        self.os_matches
            .iter()
            .max_by_key(|m| m.accuracy.parse::<u32>().unwrap_or(0))
            .map(|m| m.name.as_str())
    }

    pub fn open_ports(&self) -> Vec<&Port> {
        self.ports
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .filter(|p| p.is_open())
            .collect()
    }

    pub fn open_port_count(&self) -> usize {
        self.open_ports().len()
    }

    /// Host-level findings, wrapper entries already unwrapped.
    pub fn findings(&self) -> Vec<&Script> {
        flatten_scripts(&self.host_scripts)
    }

    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.risk_score.unwrap_or(0.0))
    }

    /// Every NSE finding on this host as readable text blocks, host-level
    /// scripts first, then per-port scripts in port order.
    pub fn script_transcript(&self) -> String {
        let mut blocks = Vec::new();
        for script in self.findings() {
            blocks.push(format!("Script: {}\nOutput:\n{}", script.id, script.output));
        }
        if let Some(ports) = &self.ports {
            for port in ports {
                for script in port.findings() {
                    blocks.push(format!(
                        "Script: {} (port {})\nOutput:\n{}",
                        script.id, port.port_id, script.output
                    ));
                }
            }
        }
        blocks.join("\n\n---\n\n")
    }
}

impl Port {
    pub fn is_open(&self) -> bool {
        self.state.state == "open"
    }

    pub fn number(&self) -> Option<u16> {
        self.port_id.parse().ok()
    }

    pub fn service_label(&self) -> &str {
        match &self.service {
            Some(s) if !s.name.is_empty() => &s.name,
            _ => "unknown",
        }
    }

    pub fn findings(&self) -> Vec<&Script> {
        flatten_scripts(&self.scripts)
    }
}
