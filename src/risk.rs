// File: risk.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::scan::{Host, Port};

// Ports frequently probed first by attackers, with a base severity out of 25.
static CRITICAL_PORTS: Lazy<HashMap<u16, f64>> = Lazy::new(|| {
    HashMap::from([
        (21, 10.0),
        (22, 20.0),
        (23, 15.0),
        (25, 10.0),
        (53, 10.0),
        (80, 15.0),
        (110, 10.0),
        (143, 10.0),
        (443, 15.0),
        (445, 20.0),
        (993, 10.0),
        (995, 10.0),
        (1433, 15.0),
        (1521, 15.0),
        (3306, 20.0),
        (3389, 25.0),
        (5432, 15.0),
        (5900, 20.0),
        (8080, 10.0),
    ])
});

const VULN_SCRIPT_PATTERNS: [&str; 6] = [
    "http-vuln",
    "smb-vuln",
    "ftp-vuln",
    "ssh-vuln",
    "rdp-vuln",
    "-vuln-",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskWeights {
    pub critical_ports: u8,
    pub vuln_scripts: u8,
    pub service_versions: u8,
    pub open_ports_count: u8,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            critical_ports: 80,
            vuln_scripts: 90,
            service_versions: 60,
            open_ports_count: 70,
        }
    }
}

impl RiskWeights {
    /// Builds a weight set with every knob clamped to the 0-100 range.
    pub fn new(
        critical_ports: u8,
        vuln_scripts: u8,
        service_versions: u8,
        open_ports_count: u8,
    ) -> Self {
        Self {
            critical_ports: critical_ports.min(100),
            vuln_scripts: vuln_scripts.min(100),
            service_versions: service_versions.min(100),
            open_ports_count: open_ports_count.min(100),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostRisk {
    pub score: f64,
    pub factors: Vec<String>,
}

pub fn is_vuln_script(id: &str) -> bool {
    VULN_SCRIPT_PATTERNS.iter().any(|p| id.contains(p))
}

fn critical_port_weight(port: &Port) -> Option<f64> {
    port.number().and_then(|n| CRITICAL_PORTS.get(&n).copied())
}

fn exposed_product(port: &Port) -> Option<&str> {
    port.service
        .as_ref()
        .and_then(|s| s.product.as_deref())
        .filter(|p| !p.is_empty())
}

/// Scores a single port. Additive terms, clamped to [0,100], never rounded.
pub fn score_port(port: &Port, weights: RiskWeights) -> f64 {
    let mut score = 0.0;

    if let Some(base) = critical_port_weight(port) {
        score += (base / 25.0) * f64::from(weights.critical_ports);
    }
    if exposed_product(port).is_some() {
        score += (5.0 / 100.0) * f64::from(weights.service_versions);
    }
    for script in port.findings() {
        if is_vuln_script(&script.id) {
            score += (25.0 / 100.0) * f64::from(weights.vuln_scripts);
        }
    }

    score.min(100.0)
}

/// Scores a host and explains the result. A host without a single open port
/// always comes back as score 0 with the lone "No open ports detected"
/// factor, whatever else the host carries.
pub fn score_host(host: &Host, weights: RiskWeights) -> HostRisk {
    let open_ports = host.open_ports();
    if open_ports.is_empty() {
        return HostRisk {
            score: 0.0,
            factors: vec!["No open ports detected".to_string()],
        };
    }

    let mut score = 0.0;
    let mut factors = Vec::new();

    if open_ports.len() > 10 {
        score += (open_ports.len() as f64 / 50.0) * f64::from(weights.open_ports_count);
        factors.push(format!("Large number of open ports ({})", open_ports.len()));
    }

    for port in &open_ports {
        score += score_port(port, weights);

        if critical_port_weight(port).is_some() {
            factors.push(format!(
                "Critical port {} ({}) is open",
                port.port_id,
                port.service_label()
            ));
        }
        if let Some(product) = exposed_product(port) {
            factors.push(format!(
                "Detailed service version exposed on port {} ({})",
                port.port_id, product
            ));
        }
        for script in port.findings() {
            if is_vuln_script(&script.id) {
                factors.push(format!(
                    "Potential vulnerability found by NSE script '{}' on port {}",
                    script.id, port.port_id
                ));
            }
        }
    }

    for script in host.findings() {
        if is_vuln_script(&script.id) {
            score += (25.0 / 100.0) * f64::from(weights.vuln_scripts);
            factors.push(format!(
                "Potential vulnerability found by host-level NSE script '{}'",
                script.id
            ));
        }
    }

    let mut seen = HashSet::new();
    factors.retain(|f| seen.insert(f.clone()));

    HostRisk {
        score: score.round().min(100.0),
        factors,
    }
}

/// Scores every host against the given weights. The input is never mutated;
/// each result is a copy with `risk_score` and `risk_factors` overwritten, so
/// re-running against the same baseline with new weights never accumulates.
pub fn score_hosts(hosts: &[Host], weights: RiskWeights) -> Vec<Host> {
    hosts
        .iter()
        .map(|host| {
            let risk = score_host(host, weights);
            let mut scored = host.clone();
            scored.risk_score = Some(risk.score);
            scored.risk_factors = risk.factors;
            scored
        })
        .collect()
}
