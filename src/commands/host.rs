// File: host.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::Result;
use colored::*;

use super::{format_port_state, format_risk, host_label, load_session, print_error};
use crate::cli::HostArgs;
use crate::risk::RiskWeights;

pub fn execute(args: &HostArgs, weights: RiskWeights) -> Result<()> {
    let session = load_session(&args.file, weights)?;

    let host = match session.host_by_address(&args.address) {
        Some(host) => host,
        None => {
            print_error(&format!(
                "Host '{}' not found in {}",
                args.address,
                session.file_name()
            ));
            return Ok(());
        }
    };

    println!();
    println!("{}", "═".repeat(72).bright_black());
    println!("{:^72}", host_label(host).bold().bright_white());
    println!("{}", "═".repeat(72).bright_black());
    println!();
    println!(
        "  Risk: {}",
        format_risk(host.risk_score.unwrap_or(0.0))
    );
    if let Some(status) = &host.status {
        match &status.reason {
            Some(reason) => println!("  Status: {} ({})", status.state, reason),
            None => println!("  Status: {}", status.state),
        }
    }
    if let Some(os) = host.os_name() {
        println!("  OS: {}", os);
    }

    println!("\n{}", "  ADDRESSES".bold().cyan());
    println!("  {}", "─".repeat(40).bright_black());
    for address in &host.addresses {
        println!("  {:<40} {}", address.addr, address.addr_type.bright_black());
    }

    if !host.hostnames.is_empty() {
        println!("\n{}", "  HOSTNAMES".bold().cyan());
        println!("  {}", "─".repeat(40).bright_black());
        for hostname in &host.hostnames {
            println!(
                "  {:<40} {}",
                hostname.name,
                hostname.kind.bright_black()
            );
        }
    }

    println!("\n{}", "  PORTS".bold().cyan());
    println!("  {}", "─".repeat(40).bright_black());
    match host.ports.as_deref() {
        None => println!("  {}", "No port scan results for this host.".bright_black()),
        Some([]) => println!("  {}", "No ports reported.".bright_black()),
        Some(ports) => {
            println!(
                "  {:<12} {:<10} {:<16} {:<24} {}",
                "PORT".bold(),
                "STATE".bold(),
                "SERVICE".bold(),
                "PRODUCT".bold(),
                "SCRIPTS".bold()
            );
            for port in ports {
                let product = port
                    .service
                    .as_ref()
                    .map(|service| {
                        let mut label = service.product.clone().unwrap_or_default();
                        if let Some(version) = &service.version {
                            if !label.is_empty() {
                                label.push(' ');
                            }
                            label.push_str(version);
                        }
                        label
                    })
                    .unwrap_or_default();
                println!(
                    "  {:<12} {:<10} {:<16} {:<24} {}",
                    format!("{}/{}", port.port_id, port.protocol),
                    format_port_state(&port.state.state),
                    port.service_label(),
                    product,
                    port.findings().len()
                );
            }
        }
    }

    if !host.risk_factors.is_empty() {
        println!("\n{}", "  RISK FACTORS".bold().cyan());
        println!("  {}", "─".repeat(40).bright_black());
        for factor in &host.risk_factors {
            println!("  • {}", factor);
        }
    }

    if args.scripts {
        println!("\n{}", "  SCRIPT OUTPUT".bold().cyan());
        println!("  {}", "─".repeat(40).bright_black());
        let transcript = host.script_transcript();
        if transcript.is_empty() {
            println!("  {}", "No script output recorded.".bright_black());
        } else {
            for line in transcript.lines() {
                println!("  {}", line);
            }
        }
    }

    println!();
    Ok(())
}
