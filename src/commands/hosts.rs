// File: hosts.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::Result;
use colored::*;

use super::{format_risk, load_session, print_warning};
use crate::cli::{HostsArgs, SortKey};
use crate::risk::RiskWeights;
use crate::scan::Host;

pub fn execute(args: &HostsArgs, weights: RiskWeights) -> Result<()> {
    let session = load_session(&args.file, weights)?;

    let sort_key = match args.parse_sort() {
        Some(key) => key,
        None => {
            print_warning(&format!(
                "Unknown sort key '{}', falling back to risk",
                args.sort
            ));
            SortKey::Risk
        }
    };

    let mut rows: Vec<&Host> = session.hosts().iter().collect();
    if let Some(min_score) = args.min_score {
        rows.retain(|host| host.risk_score.unwrap_or(0.0) >= min_score);
    }
    sort_rows(&mut rows, sort_key);
    let total = rows.len();
    if let Some(limit) = args.limit {
        rows.truncate(limit);
    }

    println!();
    println!(
        "{:<18} {:<26} {:<20} {:>10}  {:<14}",
        "ADDRESS".bold(),
        "HOSTNAME".bold(),
        "OS".bold(),
        "OPEN PORTS".bold(),
        "RISK".bold()
    );
    println!("{}", "─".repeat(92).bright_black());

    for host in &rows {
        let address = host.primary_address().unwrap_or("unknown");
        let hostname = host.display_hostname().unwrap_or_default();
        let os = host.os_name().unwrap_or_default();
        println!(
            "{:<18} {:<26} {:<20} {:>10}  {}",
            address,
            truncate(&hostname, 25),
            truncate(&os, 19),
            host.open_port_count(),
            format_risk(host.risk_score.unwrap_or(0.0))
        );
    }

    println!("{}", "─".repeat(92).bright_black());
    if rows.len() < total {
        println!(
            "{} of {} hosts shown (use --limit to adjust)",
            rows.len().to_string().bold(),
            total
        );
    } else {
        println!("{} hosts", rows.len().to_string().bold());
    }
    Ok(())
}

fn sort_rows(rows: &mut [&Host], key: SortKey) {
    match key {
        // Sessions already order hosts by score, keep that order stable.
        SortKey::Risk => {}
        SortKey::Ip => rows.sort_by_key(|host| host.ipv4_sort_key()),
        SortKey::Hostname => rows.sort_by_key(|host| {
            host.display_hostname()
                .map(|name| name.to_lowercase())
                .unwrap_or_else(|| "\u{10ffff}".to_string())
        }),
        SortKey::Ports => rows.sort_by(|a, b| b.open_port_count().cmp(&a.open_port_count())),
    }
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let cut: String = value.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
