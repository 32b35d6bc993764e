// File: parser.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::scan::{
    Address, Host, HostStatus, Hostname, OsMatch, Port, PortState, ScanMeta, Script, ScriptEntry,
    Service,
};

#[derive(Debug)]
pub enum ParseError {
    Io(std::io::Error),
    Xml(String),
    NotNmapXml(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Xml(e) => write!(f, "Malformed XML: {}", e),
            Self::NotNmapXml(msg) => write!(f, "Not an nmap XML document: {}", msg),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Xml(_) => None,
            Self::NotNmapXml(_) => None,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<quick_xml::DeError> for ParseError {
    fn from(error: quick_xml::DeError) -> Self {
        Self::Xml(error.to_string())
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub meta: ScanMeta,
    pub hosts: Vec<Host>,
}

// Raw deserialization layer. Nmap emits 0, 1 or many of most child
// elements, so every repeatable is a defaulted Vec and everything the DTD
// marks optional is an Option. Normalization into crate::scan happens once,
// below; nothing downstream touches these types.

#[derive(Debug, Deserialize)]
struct RawNmapRun {
    #[serde(rename = "@scanner")]
    scanner: Option<String>,
    #[serde(rename = "@args")]
    args: Option<String>,
    #[serde(rename = "@startstr")]
    start_str: Option<String>,
    #[serde(rename = "@version")]
    version: Option<String>,
    #[serde(rename = "host", default)]
    hosts: Vec<RawHost>,
}

#[derive(Debug, Deserialize)]
struct RawHost {
    status: Option<RawStatus>,
    #[serde(rename = "address", default)]
    addresses: Vec<RawAddress>,
    hostnames: Option<RawHostnames>,
    ports: Option<RawPorts>,
    #[serde(rename = "hostscript")]
    host_script: Option<RawScriptBlock>,
    os: Option<RawOs>,
}

#[derive(Debug, Deserialize)]
struct RawStatus {
    #[serde(rename = "@state")]
    state: Option<String>,
    #[serde(rename = "@reason")]
    reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawAddress {
    #[serde(rename = "@addr")]
    addr: String,
    #[serde(rename = "@addrtype")]
    addr_type: String,
}

#[derive(Debug, Deserialize)]
struct RawHostnames {
    #[serde(rename = "hostname", default)]
    hostnames: Vec<RawHostname>,
}

#[derive(Debug, Deserialize)]
struct RawHostname {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@type")]
    kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPorts {
    #[serde(rename = "port", default)]
    ports: Vec<RawPort>,
}

#[derive(Debug, Deserialize)]
struct RawPort {
    #[serde(rename = "@protocol")]
    protocol: Option<String>,
    #[serde(rename = "@portid")]
    port_id: Option<String>,
    state: Option<RawPortState>,
    service: Option<RawService>,
    #[serde(rename = "script", default)]
    scripts: Vec<RawScript>,
}

#[derive(Debug, Deserialize)]
struct RawPortState {
    #[serde(rename = "@state")]
    state: Option<String>,
    #[serde(rename = "@reason")]
    reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawService {
    #[serde(rename = "@name")]
    name: Option<String>,
    #[serde(rename = "@product")]
    product: Option<String>,
    #[serde(rename = "@version")]
    version: Option<String>,
    #[serde(rename = "@extrainfo")]
    extra_info: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawScriptBlock {
    #[serde(rename = "script", default)]
    scripts: Vec<RawScript>,
}

// Accepts both a genuine finding (id/output attributes) and the wrapper
// quirk where a <script> holds nested <script> children. Structured
// sub-elements (<table>, <elem>) are ignored.
#[derive(Debug, Deserialize)]
struct RawScript {
    #[serde(rename = "@id")]
    id: Option<String>,
    #[serde(rename = "@output")]
    output: Option<String>,
    #[serde(rename = "script", default)]
    nested: Vec<RawScript>,
}

#[derive(Debug, Deserialize)]
struct RawOs {
    #[serde(rename = "osmatch", default)]
    matches: Vec<RawOsMatch>,
}

#[derive(Debug, Deserialize)]
struct RawOsMatch {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@accuracy")]
    accuracy: Option<String>,
}

/// Parses an nmap XML report from a string. The root element must be
/// `<nmaprun>`; a report without any `<host>` children is valid and yields
/// an empty host list.
pub fn parse_str(xml: &str) -> ParseResult<ScanReport> {
    ensure_nmaprun_root(xml)?;
    let raw: RawNmapRun = quick_xml::de::from_str(xml)?;
    Ok(normalize(raw))
}

pub fn parse_file<P: AsRef<Path>>(path: P) -> ParseResult<ScanReport> {
    let xml = std::fs::read_to_string(path)?;
    parse_str(&xml)
}

fn ensure_nmaprun_root(xml: &str) -> ParseResult<()> {
    use quick_xml::events::Event;

    let mut reader = quick_xml::Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if name == "nmaprun" {
                    return Ok(());
                }
                return Err(ParseError::NotNmapXml(format!(
                    "unexpected root element <{}>",
                    name
                )));
            }
            Ok(Event::Eof) => {
                return Err(ParseError::NotNmapXml("no root element found".to_string()))
            }
            Ok(_) => continue,
            Err(e) => return Err(ParseError::Xml(e.to_string())),
        }
    }
}

fn normalize(raw: RawNmapRun) -> ScanReport {
    let meta = ScanMeta {
        scanner: raw.scanner,
        args: raw.args,
        start_str: raw.start_str,
        version: raw.version,
    };
    let hosts: Vec<Host> = raw.hosts.into_iter().map(normalize_host).collect();

    let port_count: usize = hosts
        .iter()
        .map(|h| h.ports.as_ref().map(|p| p.len()).unwrap_or(0))
        .sum();
    debug!(
        "normalized nmap report: {} hosts, {} ports",
        hosts.len(),
        port_count
    );

    ScanReport { meta, hosts }
}

fn normalize_host(raw: RawHost) -> Host {
    Host {
        addresses: raw
            .addresses
            .into_iter()
            .map(|a| Address {
                addr: a.addr,
                addr_type: a.addr_type,
            })
            .collect(),
        hostnames: raw
            .hostnames
            .map(|hn| {
                hn.hostnames
                    .into_iter()
                    .map(|h| Hostname {
                        name: h.name,
                        kind: h.kind.unwrap_or_default(),
                    })
                    .collect()
            })
            .unwrap_or_default(),
        status: raw.status.map(|s| HostStatus {
            state: s.state.unwrap_or_else(|| "unknown".to_string()),
            reason: s.reason,
        }),
        ports: raw
            .ports
            .map(|p| p.ports.into_iter().map(normalize_port).collect()),
        host_scripts: raw
            .host_script
            .map(|block| normalize_scripts(block.scripts))
            .unwrap_or_default(),
        os_matches: raw
            .os
            .map(|os| {
                os.matches
                    .into_iter()
                    .map(|m| OsMatch {
                        name: m.name,
                        accuracy: m.accuracy.unwrap_or_default(),
                    })
                    .collect()
            })
            .unwrap_or_default(),
        risk_score: None,
        risk_factors: Vec::new(),
    }
}

fn normalize_port(raw: RawPort) -> Port {
    Port {
        protocol: raw.protocol.unwrap_or_else(|| "tcp".to_string()),
        port_id: raw.port_id.unwrap_or_default(),
        state: raw
            .state
            .map(|s| PortState {
                state: s.state.unwrap_or_else(|| "unknown".to_string()),
                reason: s.reason,
            })
            .unwrap_or(PortState {
                state: "unknown".to_string(),
                reason: None,
            }),
        service: raw.service.map(|s| Service {
            name: s.name.unwrap_or_default(),
            product: s.product,
            version: s.version,
            extra_info: s.extra_info,
        }),
        scripts: normalize_scripts(raw.scripts),
    }
}

fn normalize_scripts(raw: Vec<RawScript>) -> Vec<ScriptEntry> {
    raw.into_iter().filter_map(normalize_script).collect()
}

fn normalize_script(raw: RawScript) -> Option<ScriptEntry> {
    if let Some(id) = raw.id {
        return Some(ScriptEntry::Finding(Script {
            id,
            output: raw.output.unwrap_or_default(),
        }));
    }
    let nested = normalize_scripts(raw.nested);
    if nested.is_empty() {
        None
    } else {
        Some(ScriptEntry::Wrapper(nested))
    }
}
