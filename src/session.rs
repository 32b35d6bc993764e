// File: session.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::cmp::Ordering;
use std::path::Path;

use crate::parser::{self, ParseResult, ScanReport};
use crate::risk::{score_hosts, RiskWeights};
use crate::scan::{Host, ScanMeta};

/// The one in-memory "current scan" value. Loading a file or changing
/// weights produces a whole new session; nothing is ever patched in place.
/// The unscored baseline is kept so a weight change always re-scores from
/// scratch instead of compounding on previous results.
#[derive(Debug, Clone)]
pub struct ScanSession {
    file_name: String,
    meta: ScanMeta,
    baseline: Vec<Host>,
    hosts: Vec<Host>,
    weights: RiskWeights,
}

impl ScanSession {
    pub fn load<P: AsRef<Path>>(path: P, weights: RiskWeights) -> ParseResult<Self> {
        let report = parser::parse_file(&path)?;
        let file_name = path
            .as_ref()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.as_ref().display().to_string());
        Ok(Self::from_report(file_name, report, weights))
    }

    pub fn from_report(
        file_name: impl Into<String>,
        report: ScanReport,
        weights: RiskWeights,
    ) -> Self {
        let mut hosts = score_hosts(&report.hosts, weights);
        sort_by_risk(&mut hosts);
        Self {
            file_name: file_name.into(),
            meta: report.meta,
            baseline: report.hosts,
            hosts,
            weights,
        }
    }

    /// Re-scores against the unscored baseline under new weights.
    pub fn with_weights(&self, weights: RiskWeights) -> Self {
        let mut hosts = score_hosts(&self.baseline, weights);
        sort_by_risk(&mut hosts);
        Self {
            file_name: self.file_name.clone(),
            meta: self.meta.clone(),
            baseline: self.baseline.clone(),
            hosts,
            weights,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn meta(&self) -> &ScanMeta {
        &self.meta
    }

    /// Scored hosts, highest risk first (parse order on ties).
    pub fn hosts(&self) -> &[Host] {
        &self.hosts
    }

    pub fn baseline(&self) -> &[Host] {
        &self.baseline
    }

    pub fn weights(&self) -> RiskWeights {
        self.weights
    }

    pub fn host_by_address(&self, needle: &str) -> Option<&Host> {
        self.hosts
            .iter()
            .find(|h| h.addresses.iter().any(|a| a.addr == needle))
            .or_else(|| {
                self.hosts.iter().find(|h| {
                    h.hostnames
                        .iter()
                        .any(|n| n.name.eq_ignore_ascii_case(needle))
                })
            })
    }
}

fn sort_by_risk(hosts: &mut [Host]) {
    hosts.sort_by(|a, b| {
        let sa = a.risk_score.unwrap_or(0.0);
        let sb = b.risk_score.unwrap_or(0.0);
        sb.partial_cmp(&sa).unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{Address, Port, PortState, Service};

    fn open_port(id: &str, service: &str, product: Option<&str>) -> Port {
        Port {
            protocol: "tcp".to_string(),
            port_id: id.to_string(),
            state: PortState {
                state: "open".to_string(),
                reason: None,
            },
            service: Some(Service {
                name: service.to_string(),
                product: product.map(str::to_string),
                version: None,
                extra_info: None,
            }),
            scripts: vec![],
        }
    }

    fn host(addr: &str, ports: Vec<Port>) -> Host {
        Host {
            addresses: vec![Address {
                addr: addr.to_string(),
                addr_type: "ipv4".to_string(),
            }],
            hostnames: vec![],
            status: None,
            ports: Some(ports),
            host_scripts: vec![],
            os_matches: vec![],
            risk_score: None,
            risk_factors: vec![],
        }
    }

    fn report(hosts: Vec<Host>) -> ScanReport {
        ScanReport {
            meta: ScanMeta::default(),
            hosts,
        }
    }

    #[test]
    fn test_session_sorts_hosts_by_risk_descending() {
        let quiet = host("10.0.0.1", vec![open_port("9999", "", None)]);
        let loud = host(
            "10.0.0.2",
            vec![open_port("3389", "ms-wbt-server", Some("Microsoft Terminal Services"))],
        );
        let session =
            ScanSession::from_report("scan.xml", report(vec![quiet, loud]), RiskWeights::default());

        let first = session.hosts()[0].primary_address();
        assert_eq!(first, Some("10.0.0.2"));
    }

    #[test]
    fn test_with_weights_rescored_from_baseline() {
        let session = ScanSession::from_report(
            "scan.xml",
            report(vec![host("10.0.0.1", vec![open_port("22", "ssh", None)])]),
            RiskWeights::default(),
        );

        let reweighted = session.with_weights(RiskWeights::new(40, 90, 60, 70));
        let direct = ScanSession::from_report(
            "scan.xml",
            report(session.baseline().to_vec()),
            RiskWeights::new(40, 90, 60, 70),
        );

        assert_eq!(reweighted.hosts(), direct.hosts());
        // The original session is untouched.
        assert_eq!(session.weights(), RiskWeights::default());
    }

    #[test]
    fn test_host_lookup_by_address_and_hostname() {
        let mut named = host("192.168.1.5", vec![]);
        named.hostnames = vec![crate::scan::Hostname {
            name: "printer.lan".to_string(),
            kind: "PTR".to_string(),
        }];
        let session = ScanSession::from_report(
            "scan.xml",
            report(vec![named]),
            RiskWeights::default(),
        );

        assert!(session.host_by_address("192.168.1.5").is_some());
        assert!(session.host_by_address("PRINTER.LAN").is_some());
        assert!(session.host_by_address("10.9.9.9").is_none());
    }
}
