// File: lib.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::new_without_default)]

pub mod cli;
pub mod commands;
pub mod parser;
pub mod reports;
pub mod risk;
pub mod scan;
pub mod session;

#[cfg(test)]
mod parser_tests;
