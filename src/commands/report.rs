// File: report.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use super::{load_session, print_info, print_success, print_warning};
use crate::cli::ReportArgs;
use crate::reports::{ReportConfig, ReportEngine, Theme};
use crate::risk::RiskWeights;

pub fn execute(args: &ReportArgs, weights: RiskWeights) -> Result<()> {
    let engine = ReportEngine::new();
    let generator = engine.get_generator(&args.format)?;
    let theme = args.parse_theme();

    print_info(&format!(
        "Generating {} report from {}",
        args.format.to_lowercase(),
        args.file.display()
    ));
    if !matches!(theme, Theme::Light) && !generator.supports_themes() {
        print_warning(&format!(
            "The {} format does not support themes, ignoring --theme",
            args.format.to_lowercase()
        ));
    }

    let session = load_session(&args.file, weights)?;
    let data = engine.create_report_data(&session, args.title.clone());
    let config = ReportConfig {
        theme,
        top_n: args.top_n,
    };

    let output_path = determine_output_path(args, generator.file_extension());
    debug!(
        "Writing {} report ({}) to {}",
        args.format.to_lowercase(),
        generator.content_type(),
        output_path.display()
    );
    let content = engine.generate_report(&args.format, &data, &config, Some(&output_path))?;

    print_success(&format!(
        "Report written to {} ({} bytes)",
        output_path.display(),
        content.len()
    ));
    Ok(())
}

fn determine_output_path(args: &ReportArgs, extension: &str) -> PathBuf {
    if let Some(path) = &args.output {
        return path.clone();
    }
    let stem = args
        .file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "scan".to_string());
    args.file.with_file_name(format!("{}_report.{}", stem, extension))
}
