// File: text.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::Result;

use super::{top_risk_hosts, ReportConfig, ReportData, ReportGenerator};
use crate::scan::Host;

pub struct TextGenerator;

impl TextGenerator {
    pub fn new() -> Self {
        Self
    }

    fn host_label(&self, host: &Host) -> String {
        let address = host.primary_address().unwrap_or("unknown");
        match host.display_hostname() {
            Some(name) => format!("{} ({})", address, name),
            None => address.to_string(),
        }
    }
}

impl ReportGenerator for TextGenerator {
    fn generate(&self, data: &ReportData, config: &ReportConfig) -> Result<String> {
        let mut output = String::new();

        output.push_str(
            "===============================================================================\n",
        );
        output.push_str(&format!(
            "                          {}\n",
            data.title.to_uppercase()
        ));
        output.push_str(
            "===============================================================================\n",
        );
        output.push_str(&format!(
            "Generated: {}\n",
            data.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        output.push_str(&format!("Tool: scanlens v{}\n", env!("CARGO_PKG_VERSION")));
        output.push_str(&format!("Source: {}\n", data.source_file));
        if let Some(args) = &data.meta.args {
            output.push_str(&format!("Scan Command: {}\n", args));
        }
        if let Some(started) = &data.meta.start_str {
            output.push_str(&format!("Scan Started: {}\n", started));
        }
        output.push_str(&format!(
            "Weights: critical-ports={} vuln-scripts={} service-versions={} open-ports={}\n",
            data.weights.critical_ports,
            data.weights.vuln_scripts,
            data.weights.service_versions,
            data.weights.open_ports_count
        ));
        output.push_str(
            "===============================================================================\n\n",
        );

        output.push_str("EXECUTIVE SUMMARY\n");
        output.push_str("-----------------\n");
        output.push_str(&format!(
            "Hosts Scanned:        {}\n",
            data.summary.host_count
        ));
        output.push_str(&format!(
            "Open Ports:           {}\n",
            data.summary.open_ports
        ));
        output.push_str(&format!(
            "Unique Services:      {}\n",
            data.summary.unique_services
        ));
        output.push_str(&format!(
            "High Risk Hosts:      {}\n",
            data.summary.high_risk_hosts
        ));

        output.push_str("\nRISK DISTRIBUTION\n");
        output.push_str("-----------------\n");
        let dist = &data.summary.risk_distribution;
        output.push_str(&format!("  High (75-100)   {:>6}\n", dist.high));
        output.push_str(&format!("  Medium (40-74)  {:>6}\n", dist.medium));
        output.push_str(&format!("  Low (1-39)      {:>6}\n", dist.low));
        output.push_str(&format!("  Info (0)        {:>6}\n", dist.info));

        let ranked = top_risk_hosts(&data.hosts, config.top_n);
        if !ranked.is_empty() {
            output.push_str("\nRISKIEST HOSTS\n");
            output.push_str("--------------\n");
            for (i, host) in ranked.iter().enumerate() {
                output.push_str(&format!(
                    "  {}. {:<40} {:>3}  [{}]\n",
                    i + 1,
                    self.host_label(host),
                    host.risk_score.unwrap_or(0.0),
                    host.risk_level()
                ));
            }
        }

        if !data.summary.top_ports.is_empty() {
            output.push_str("\nTOP OPEN PORTS\n");
            output.push_str("--------------\n");
            for entry in &data.summary.top_ports {
                output.push_str(&format!("  {:<10} {:>6}\n", entry.port, entry.count));
            }
        }

        if !data.summary.service_distribution.is_empty() {
            output.push_str("\nSERVICE DISTRIBUTION\n");
            output.push_str("--------------------\n");
            for entry in &data.summary.service_distribution {
                output.push_str(&format!("  {:<20} {:>6}\n", entry.service, entry.count));
            }
        }

        output.push('\n');
        output.push_str(
            "===============================================================================\n",
        );
        output.push_str("DETAILED HOST RESULTS\n");
        output.push_str(
            "===============================================================================\n\n",
        );

        for (i, host) in data.hosts.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, self.host_label(host)));
            output.push_str(&format!(
                "   Risk Score: {} ({})\n",
                host.risk_score.unwrap_or(0.0),
                host.risk_level()
            ));
            if let Some(os) = host.os_name() {
                output.push_str(&format!("   OS: {}\n", os));
            }

            let open_ports = host.open_ports();
            if !open_ports.is_empty() {
                output.push_str("   Open Ports:\n");
                for port in open_ports {
                    let mut line = format!("     {}/{}  {}", port.port_id, port.protocol, port.service_label());
                    if let Some(service) = &port.service {
                        if let Some(product) = &service.product {
                            line.push_str(&format!("  {}", product));
                            if let Some(version) = &service.version {
                                line.push_str(&format!(" {}", version));
                            }
                        }
                    }
                    output.push_str(&line);
                    output.push('\n');
                }
            }

            if !host.risk_factors.is_empty() {
                output.push_str("   Risk Factors:\n");
                for factor in &host.risk_factors {
                    output.push_str(&format!("     - {}\n", factor));
                }
            }

            output.push('\n');
        }

        output.push_str(
            "===============================================================================\n",
        );
        output.push_str("End of Report\n");
        output.push_str(
            "===============================================================================\n",
        );

        Ok(output)
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }

    fn content_type(&self) -> &'static str {
        "text/plain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ScanReport;
    use crate::reports::ReportEngine;
    use crate::risk::RiskWeights;
    use crate::scan::{Address, Host, Port, PortState, ScanMeta, Service};
    use crate::session::ScanSession;

    fn create_test_host() -> Host {
        Host {
            addresses: vec![Address {
                addr: "10.0.0.5".to_string(),
                addr_type: "ipv4".to_string(),
            }],
            hostnames: vec![],
            status: None,
            ports: Some(vec![Port {
                protocol: "tcp".to_string(),
                port_id: "22".to_string(),
                state: PortState {
                    state: "open".to_string(),
                    reason: None,
                },
                service: Some(Service {
                    name: "ssh".to_string(),
                    product: Some("OpenSSH".to_string()),
                    version: Some("8.9p1".to_string()),
                    extra_info: None,
                }),
                scripts: vec![],
            }]),
            host_scripts: vec![],
            os_matches: vec![],
            risk_score: None,
            risk_factors: vec![],
        }
    }

    #[test]
    fn test_text_generation() {
        let generator = TextGenerator::new();
        let engine = ReportEngine::new();
        let session = ScanSession::from_report(
            "lan.xml",
            ScanReport {
                meta: ScanMeta {
                    scanner: Some("nmap".to_string()),
                    args: Some("nmap -sV 10.0.0.0/24".to_string()),
                    start_str: None,
                    version: None,
                },
                hosts: vec![create_test_host()],
            },
            RiskWeights::default(),
        );
        let data = engine.create_report_data(&session, None);
        let config = super::ReportConfig::default();

        let result = generator.generate(&data, &config);
        assert!(result.is_ok());

        let text = result.unwrap();
        assert!(text.contains("NMAP SCAN REPORT"));
        assert!(text.contains("EXECUTIVE SUMMARY"));
        assert!(text.contains("Scan Command: nmap -sV 10.0.0.0/24"));
        assert!(text.contains("10.0.0.5"));
        assert!(text.contains("22/tcp  ssh  OpenSSH 8.9p1"));
        assert!(text.contains("Critical port 22 (ssh) is open"));
        assert!(text.contains("RISKIEST HOSTS"));
    }
}
