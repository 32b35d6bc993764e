// File: cli.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::reports::Theme;
use crate::risk::RiskWeights;

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(help = "Nmap XML report (shorthand for the summary command)")]
    pub file: Option<PathBuf>,

    #[arg(long = "log-level", default_value = "warn", global = true)]
    pub log_level: String,

    #[arg(
        short = 'q',
        long = "quiet",
        help = "Reduce output verbosity",
        global = true
    )]
    pub quiet: bool,

    #[arg(long = "no-color", help = "Disable colored output", global = true)]
    pub no_color: bool,

    #[arg(
        long = "critical-ports-weight",
        default_value_t = 80,
        global = true,
        help = "Weight for critical-port exposure (0-100)"
    )]
    pub critical_ports_weight: u8,

    #[arg(
        long = "vuln-scripts-weight",
        default_value_t = 90,
        global = true,
        help = "Weight for NSE vulnerability findings (0-100)"
    )]
    pub vuln_scripts_weight: u8,

    #[arg(
        long = "service-versions-weight",
        default_value_t = 60,
        global = true,
        help = "Weight for exposed service versions (0-100)"
    )]
    pub service_versions_weight: u8,

    #[arg(
        long = "open-ports-weight",
        default_value_t = 70,
        global = true,
        help = "Weight for large open-port counts (0-100)"
    )]
    pub open_ports_weight: u8,
}

impl Cli {
    pub fn weights(&self) -> RiskWeights {
        RiskWeights::new(
            self.critical_ports_weight,
            self.vuln_scripts_weight,
            self.service_versions_weight,
            self.open_ports_weight,
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Summarize a scan: counts, risk distribution, riskiest hosts")]
    Summary(SummaryArgs),
    #[command(about = "List scanned hosts with scores, sortable and filterable")]
    Hosts(HostsArgs),
    #[command(about = "Show one host in detail")]
    Host(HostArgs),
    #[command(about = "Generate a report file (json, html, csv, text)")]
    Report(ReportArgs),
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[arg(help = "Nmap XML report")]
    pub file: PathBuf,

    #[arg(long = "top-n", default_value_t = 10, help = "Riskiest hosts to list")]
    pub top_n: usize,
}

#[derive(Args, Debug)]
pub struct HostsArgs {
    #[arg(help = "Nmap XML report")]
    pub file: PathBuf,

    #[arg(
        long = "sort",
        default_value = "risk",
        help = "Sort order: risk, ip, hostname, ports"
    )]
    pub sort: String,

    #[arg(long = "min-score", help = "Hide hosts scoring below this value")]
    pub min_score: Option<f64>,

    #[arg(short = 'l', long = "limit", help = "Show at most N hosts")]
    pub limit: Option<usize>,
}

#[derive(Args, Debug)]
pub struct HostArgs {
    #[arg(help = "Nmap XML report")]
    pub file: PathBuf,

    #[arg(help = "Host address or hostname")]
    pub address: String,

    #[arg(long = "scripts", help = "Include full NSE script output")]
    pub scripts: bool,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    #[arg(help = "Nmap XML report")]
    pub file: PathBuf,

    #[arg(short = 'f', long = "format", default_value = "html")]
    pub format: String,

    #[arg(short = 'o', long = "output", help = "Output path (derived from the input file by default)")]
    pub output: Option<PathBuf>,

    #[arg(long = "theme", default_value = "light", help = "Report theme: light, dark, auto")]
    pub theme: String,

    #[arg(long = "top-n", default_value_t = 10, help = "Riskiest hosts to rank")]
    pub top_n: usize,

    #[arg(long = "title", help = "Custom report title")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Risk,
    Ip,
    Hostname,
    Ports,
}

impl HostsArgs {
    pub fn parse_sort(&self) -> Option<SortKey> {
        match self.sort.to_lowercase().as_str() {
            "risk" | "score" => Some(SortKey::Risk),
            "ip" | "address" => Some(SortKey::Ip),
            "hostname" | "name" => Some(SortKey::Hostname),
            "ports" | "open-ports" => Some(SortKey::Ports),
            _ => None,
        }
    }
}

impl ReportArgs {
    pub fn parse_theme(&self) -> Theme {
        match self.theme.to_lowercase().as_str() {
            "dark" => Theme::Dark,
            "auto" => Theme::Auto,
            _ => Theme::Light,
        }
    }
}

pub fn is_legacy_mode(cli: &Cli) -> bool {
    cli.command.is_none()
}

pub fn merge_legacy_args(cli: &Cli) -> Option<SummaryArgs> {
    cli.file.as_ref().map(|file| SummaryArgs {
        file: file.clone(),
        top_n: 10,
    })
}
