// File: command_tests.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use scanlens::cli::{HostArgs, HostsArgs, ReportArgs, SummaryArgs};
use scanlens::commands;
use scanlens::risk::RiskWeights;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

mod common;

fn weights() -> RiskWeights {
    RiskWeights::default()
}

#[test]
fn test_summary_command_runs() {
    let dir = TempDir::new().unwrap();
    let file = common::write_scan(&dir, "lan.xml", common::LAN_SCAN);
    let args = SummaryArgs { file, top_n: 5 };

    assert!(commands::handle_summary_command(&args, weights()).is_ok());
}

#[test]
fn test_hosts_command_with_filters() {
    let dir = TempDir::new().unwrap();
    let file = common::write_scan(&dir, "lan.xml", common::LAN_SCAN);
    let args = HostsArgs {
        file,
        sort: "ip".to_string(),
        min_score: Some(1.0),
        limit: Some(1),
    };

    assert!(commands::handle_hosts_command(&args, weights()).is_ok());
}

#[test]
fn test_hosts_command_falls_back_on_unknown_sort() {
    let dir = TempDir::new().unwrap();
    let file = common::write_scan(&dir, "lan.xml", common::LAN_SCAN);
    let args = HostsArgs {
        file,
        sort: "bogus".to_string(),
        min_score: None,
        limit: None,
    };

    assert!(commands::handle_hosts_command(&args, weights()).is_ok());
}

#[test]
fn test_host_command_shows_known_host() {
    let dir = TempDir::new().unwrap();
    let file = common::write_scan(&dir, "lan.xml", common::LAN_SCAN);
    let args = HostArgs {
        file,
        address: "fileserver.lan".to_string(),
        scripts: true,
    };

    assert!(commands::handle_host_command(&args, weights()).is_ok());
}

#[test]
fn test_host_command_tolerates_unknown_host() {
    let dir = TempDir::new().unwrap();
    let file = common::write_scan(&dir, "lan.xml", common::LAN_SCAN);
    let args = HostArgs {
        file,
        address: "10.99.99.99".to_string(),
        scripts: false,
    };

    assert!(commands::handle_host_command(&args, weights()).is_ok());
}

#[test]
fn test_report_command_writes_html_file() {
    let dir = TempDir::new().unwrap();
    let file = common::write_scan(&dir, "lan.xml", common::LAN_SCAN);
    let output = dir.path().join("sweep.html");
    let args = ReportArgs {
        file,
        format: "html".to_string(),
        output: Some(output.clone()),
        theme: "dark".to_string(),
        top_n: 10,
        title: Some("Lan Sweep".to_string()),
    };

    commands::handle_report_command(&args, weights()).unwrap();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Lan Sweep"));
}

#[test]
fn test_report_command_derives_output_next_to_input() {
    let dir = TempDir::new().unwrap();
    let file = common::write_scan(&dir, "lan.xml", common::LAN_SCAN);
    let args = ReportArgs {
        file,
        format: "csv".to_string(),
        output: None,
        theme: "light".to_string(),
        top_n: 10,
        title: None,
    };

    commands::handle_report_command(&args, weights()).unwrap();

    let derived = dir.path().join("lan_report.csv");
    assert!(derived.exists());
}

#[test]
fn test_commands_fail_on_missing_file() {
    let args = SummaryArgs {
        file: PathBuf::from("/nonexistent/lan.xml"),
        top_n: 10,
    };
    let err = commands::handle_summary_command(&args, weights()).unwrap_err();
    assert!(err.to_string().contains("Failed to load scan report"));
}

#[test]
fn test_commands_fail_on_non_nmap_input() {
    let dir = TempDir::new().unwrap();
    let file = common::write_scan(&dir, "notes.xml", "<notes><entry/></notes>");
    let args = SummaryArgs { file, top_n: 10 };

    let err = commands::handle_summary_command(&args, weights()).unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("Not an nmap XML document"));
}
