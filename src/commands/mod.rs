// File: mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::{Context, Result};
use colored::*;
use log::info;
use std::path::Path;

use crate::cli::{HostArgs, HostsArgs, ReportArgs, SummaryArgs};
use crate::risk::RiskWeights;
use crate::scan::RiskLevel;
use crate::session::ScanSession;

pub mod host;
pub mod hosts;
pub mod report;
pub mod summary;

pub fn handle_summary_command(args: &SummaryArgs, weights: RiskWeights) -> Result<()> {
    summary::execute(args, weights)
}

pub fn handle_hosts_command(args: &HostsArgs, weights: RiskWeights) -> Result<()> {
    hosts::execute(args, weights)
}

pub fn handle_host_command(args: &HostArgs, weights: RiskWeights) -> Result<()> {
    host::execute(args, weights)
}

pub fn handle_report_command(args: &ReportArgs, weights: RiskWeights) -> Result<()> {
    report::execute(args, weights)
}

fn load_session(path: &Path, weights: RiskWeights) -> Result<ScanSession> {
    let session = ScanSession::load(path, weights)
        .with_context(|| format!("Failed to load scan report from {}", path.display()))?;
    info!(
        "Loaded {} hosts from {}",
        session.hosts().len(),
        path.display()
    );
    Ok(session)
}

fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

fn format_risk(score: f64) -> ColoredString {
    let text = format!("{} ({})", RiskLevel::from_score(score), score);
    match RiskLevel::from_score(score) {
        RiskLevel::High => text.red().bold(),
        RiskLevel::Medium => text.yellow().bold(),
        RiskLevel::Low => text.cyan(),
        RiskLevel::Info => text.bright_black(),
    }
}

fn format_port_state(state: &str) -> ColoredString {
    match state {
        "open" => state.green().bold(),
        "closed" => state.bright_black(),
        "filtered" => state.yellow(),
        _ => state.normal(),
    }
}

fn host_label(host: &crate::scan::Host) -> String {
    let address = host.primary_address().unwrap_or("unknown");
    match host.display_hostname() {
        Some(name) => format!("{} ({})", address, name),
        None => address.to_string(),
    }
}
