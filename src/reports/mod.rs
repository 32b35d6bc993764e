// File: mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::risk::RiskWeights;
use crate::scan::{Host, RiskLevel, ScanMeta};
use crate::session::ScanSession;

pub mod csv;
pub mod html;
pub mod json;
pub mod text;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportData {
    pub generated_at: DateTime<Utc>,
    pub title: String,
    pub source_file: String,
    pub meta: ScanMeta,
    pub weights: RiskWeights,
    pub hosts: Vec<Host>,
    pub summary: ReportSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub host_count: usize,
    pub open_ports: usize,
    pub unique_services: usize,
    pub high_risk_hosts: usize,
    pub risk_distribution: RiskDistribution,
    pub top_ports: Vec<PortCount>,
    pub service_distribution: Vec<ServiceCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub info: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortCount {
    pub port: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCount {
    pub service: String,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub theme: Theme,
    pub top_n: usize,
}

#[derive(Debug, Clone)]
pub enum Theme {
    Light,
    Dark,
    Auto,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            top_n: 10,
        }
    }
}

pub trait ReportGenerator {
    fn generate(&self, data: &ReportData, config: &ReportConfig) -> Result<String>;
    fn file_extension(&self) -> &'static str;
    fn content_type(&self) -> &'static str;
    fn supports_themes(&self) -> bool {
        false
    }
}

/// Hosts worth listing in a ranking: scored above zero, riskiest first,
/// cut to the configured length.
pub fn top_risk_hosts<'a>(hosts: &'a [Host], top_n: usize) -> Vec<&'a Host> {
    let mut ranked: Vec<&Host> = hosts
        .iter()
        .filter(|h| h.risk_score.unwrap_or(0.0) > 0.0)
        .collect();
    ranked.sort_by(|a, b| {
        let sa = a.risk_score.unwrap_or(0.0);
        let sb = b.risk_score.unwrap_or(0.0);
        sb.partial_cmp(&sa).unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(top_n);
    ranked
}

pub struct ReportEngine;

impl ReportEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_report<P: AsRef<Path>>(
        &self,
        format: &str,
        data: &ReportData,
        config: &ReportConfig,
        output_path: Option<P>,
    ) -> Result<String> {
        let generator = self.get_generator(format)?;
        let content = generator.generate(data, config)?;

        if let Some(path) = output_path {
            std::fs::write(path, &content)?;
        }

        Ok(content)
    }

    pub fn create_report_data(&self, session: &ScanSession, title: Option<String>) -> ReportData {
        let hosts = session.hosts().to_vec();
        let summary = self.calculate_summary(&hosts);

        ReportData {
            generated_at: Utc::now(),
            title: title.unwrap_or_else(|| "Nmap Scan Report".to_string()),
            source_file: session.file_name().to_string(),
            meta: session.meta().clone(),
            weights: session.weights(),
            hosts,
            summary,
        }
    }

    pub fn get_generator(&self, format: &str) -> Result<Box<dyn ReportGenerator>> {
        match format.to_lowercase().as_str() {
            "html" => Ok(Box::new(html::HtmlGenerator::new())),
            "json" => Ok(Box::new(json::JsonGenerator::new())),
            "csv" => Ok(Box::new(csv::CsvGenerator::new())),
            "text" | "txt" => Ok(Box::new(text::TextGenerator::new())),
            _ => Err(anyhow::anyhow!("Unsupported report format: {}", format)),
        }
    }

    pub fn calculate_summary(&self, hosts: &[Host]) -> ReportSummary {
        let host_count = hosts.len();
        let open_ports = hosts.iter().map(|h| h.open_port_count()).sum();

        let unique_services = hosts
            .iter()
            .flat_map(|h| h.open_ports())
            .filter_map(|p| p.service.as_ref())
            .filter(|s| !s.name.is_empty())
            .map(|s| s.name.as_str())
            .collect::<HashSet<_>>()
            .len();

        let high_risk_hosts = hosts
            .iter()
            .filter(|h| h.risk_score.unwrap_or(0.0) >= 75.0)
            .count();

        let mut risk_distribution = RiskDistribution::default();
        for host in hosts {
            match host.risk_level() {
                RiskLevel::High => risk_distribution.high += 1,
                RiskLevel::Medium => risk_distribution.medium += 1,
                RiskLevel::Low => risk_distribution.low += 1,
                RiskLevel::Info => risk_distribution.info += 1,
            }
        }

        let mut port_counts: HashMap<String, usize> = HashMap::new();
        let mut service_counts: HashMap<String, usize> = HashMap::new();
        for host in hosts {
            for port in host.open_ports() {
                *port_counts.entry(port.port_id.clone()).or_insert(0) += 1;
                if let Some(service) = port.service.as_ref().filter(|s| !s.name.is_empty()) {
                    *service_counts.entry(service.name.clone()).or_insert(0) += 1;
                }
            }
        }

        let mut top_ports: Vec<PortCount> = port_counts
            .into_iter()
            .map(|(port, count)| PortCount { port, count })
            .collect();
        top_ports.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| port_sort_key(&a.port).cmp(&port_sort_key(&b.port)))
        });
        top_ports.truncate(15);

        let mut service_distribution: Vec<ServiceCount> = service_counts
            .into_iter()
            .map(|(service, count)| ServiceCount { service, count })
            .collect();
        service_distribution
            .sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.service.cmp(&b.service)));
        service_distribution.truncate(10);

        ReportSummary {
            host_count,
            open_ports,
            unique_services,
            high_risk_hosts,
            risk_distribution,
            top_ports,
            service_distribution,
        }
    }
}

fn port_sort_key(port: &str) -> u32 {
    port.parse().unwrap_or(u32::MAX)
}
