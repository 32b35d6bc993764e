// File: summary.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::Result;
use colored::*;

use super::{format_risk, host_label, load_session};
use crate::cli::SummaryArgs;
use crate::reports::{top_risk_hosts, ReportEngine};
use crate::risk::RiskWeights;

pub fn execute(args: &SummaryArgs, weights: RiskWeights) -> Result<()> {
    let session = load_session(&args.file, weights)?;
    let engine = ReportEngine::new();
    let summary = engine.calculate_summary(session.hosts());

    println!();
    println!("{}", "═".repeat(72).bright_black());
    println!("{:^72}", "SCAN SUMMARY".bold().bright_white());
    println!("{}", "═".repeat(72).bright_black());
    println!();
    println!("  Source: {}", session.file_name().bold());
    if let Some(scan_args) = &session.meta().args {
        println!("  Scan Command: {}", scan_args);
    }
    if let Some(started) = &session.meta().start_str {
        println!("  Scan Started: {}", started);
    }

    println!("\n{}", "  OVERVIEW".bold().cyan());
    println!("  {}", "─".repeat(40).bright_black());
    println!(
        "  Hosts Scanned:    {}",
        summary.host_count.to_string().bold()
    );
    println!(
        "  Open Ports:       {}",
        summary.open_ports.to_string().bold()
    );
    println!(
        "  Unique Services:  {}",
        summary.unique_services.to_string().bold()
    );
    let high_risk = summary.high_risk_hosts.to_string();
    println!(
        "  High Risk Hosts:  {}",
        if summary.high_risk_hosts > 0 {
            high_risk.red().bold()
        } else {
            high_risk.green().bold()
        }
    );

    println!("\n{}", "  RISK DISTRIBUTION".bold().cyan());
    println!("  {}", "─".repeat(40).bright_black());
    let dist = &summary.risk_distribution;
    println!(
        "  High   (75-100):  {}",
        dist.high.to_string().red().bold()
    );
    println!(
        "  Medium (40-74):   {}",
        dist.medium.to_string().yellow().bold()
    );
    println!("  Low    (1-39):    {}", dist.low.to_string().cyan());
    println!("  Info   (0):       {}", dist.info.to_string().bright_black());

    let top = top_risk_hosts(session.hosts(), args.top_n);
    println!("\n{}", "  RISKIEST HOSTS".bold().cyan());
    println!("  {}", "─".repeat(40).bright_black());
    if top.is_empty() {
        println!("  {}", "No hosts with an elevated risk score.".green());
    } else {
        for (index, host) in top.iter().enumerate() {
            let score = host.risk_score.unwrap_or(0.0);
            println!(
                "  {:>2}. {:<42} {}",
                index + 1,
                host_label(host),
                format_risk(score)
            );
        }
    }

    if !summary.top_ports.is_empty() {
        println!("\n{}", "  TOP OPEN PORTS".bold().cyan());
        println!("  {}", "─".repeat(40).bright_black());
        for entry in summary.top_ports.iter().take(5) {
            println!(
                "  {:<12} {} hosts",
                entry.port,
                entry.count.to_string().bold()
            );
        }
    }

    if !summary.service_distribution.is_empty() {
        println!("\n{}", "  SERVICES".bold().cyan());
        println!("  {}", "─".repeat(40).bright_black());
        for entry in summary.service_distribution.iter().take(5) {
            println!(
                "  {:<12} {} ports",
                entry.service,
                entry.count.to_string().bold()
            );
        }
    }

    println!("\n{}", "═".repeat(72).bright_black());
    Ok(())
}
