// File: main.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::{CommandFactory, Parser};
use colored::*;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use scanlens::cli::{self, Cli, Commands};
use scanlens::commands;

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(&cli);

    if let Err(err) = run(&cli) {
        eprintln!("{} {:#}", "✗".red().bold(), err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let weights = cli.weights();

    if cli::is_legacy_mode(cli) {
        if let Some(args) = cli::merge_legacy_args(cli) {
            return commands::handle_summary_command(&args, weights);
        }
        Cli::command().print_help()?;
        return Ok(());
    }

    match &cli.command {
        Some(Commands::Summary(args)) => commands::handle_summary_command(args, weights),
        Some(Commands::Hosts(args)) => commands::handle_hosts_command(args, weights),
        Some(Commands::Host(args)) => commands::handle_host_command(args, weights),
        Some(Commands::Report(args)) => commands::handle_report_command(args, weights),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        LevelFilter::Error
    } else {
        match cli.log_level.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "error" => LevelFilter::Error,
            _ => LevelFilter::Warn,
        }
    };
    let _ = SimpleLogger::new().with_level(level).init();
}
