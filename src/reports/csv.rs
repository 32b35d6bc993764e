// File: csv.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::Result;

use super::{ReportConfig, ReportData, ReportGenerator};

pub struct CsvGenerator;

impl CsvGenerator {
    pub fn new() -> Self {
        Self
    }

    fn escape_csv(&self, field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }
}

impl ReportGenerator for CsvGenerator {
    fn generate(&self, data: &ReportData, _config: &ReportConfig) -> Result<String> {
        let mut csv = String::new();

        csv.push_str("Address,Hostname,OS,Open_Ports,Risk_Score,Risk_Level,Risk_Factors\n");

        for host in &data.hosts {
            let address = host.primary_address().unwrap_or("");
            let hostname = host.display_hostname().unwrap_or_default();
            let os = host.os_name().unwrap_or("");
            let factors = host.risk_factors.join("; ");

            csv.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                self.escape_csv(address),
                self.escape_csv(&hostname),
                self.escape_csv(os),
                host.open_port_count(),
                host.risk_score.unwrap_or(0.0),
                host.risk_level(),
                self.escape_csv(&factors),
            ));
        }

        Ok(csv)
    }

    fn file_extension(&self) -> &'static str {
        "csv"
    }

    fn content_type(&self) -> &'static str {
        "text/csv"
    }
}
