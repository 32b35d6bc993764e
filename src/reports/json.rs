// File: json.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::Result;

use super::{ReportConfig, ReportData, ReportGenerator};

pub struct JsonGenerator;

impl JsonGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonGenerator {
    fn generate(&self, data: &ReportData, _config: &ReportConfig) -> Result<String> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| anyhow::anyhow!("Failed to serialize report to JSON: {}", e))?;
        Ok(json)
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportEngine;
    use crate::risk::RiskWeights;
    use crate::scan::{Address, Host};

    #[test]
    fn test_json_report_round_trips() {
        let engine = ReportEngine::new();
        let host = Host {
            addresses: vec![Address {
                addr: "10.0.0.1".to_string(),
                addr_type: "ipv4".to_string(),
            }],
            hostnames: vec![],
            status: None,
            ports: None,
            host_scripts: vec![],
            os_matches: vec![],
            risk_score: Some(0.0),
            risk_factors: vec!["No open ports detected".to_string()],
        };
        let data = ReportData {
            generated_at: chrono::Utc::now(),
            title: "Nmap Scan Report".to_string(),
            source_file: "lan.xml".to_string(),
            meta: Default::default(),
            weights: RiskWeights::default(),
            summary: engine.calculate_summary(std::slice::from_ref(&host)),
            hosts: vec![host],
        };

        let json = JsonGenerator::new()
            .generate(&data, &ReportConfig::default())
            .unwrap();
        let parsed: ReportData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.hosts, data.hosts);
        assert_eq!(parsed.summary, data.summary);
        assert_eq!(parsed.weights, data.weights);
    }
}
