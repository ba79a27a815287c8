// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ecuscan contributors

//! CLI command definitions and handlers
//!
//! Defines the command-line interface for ecuscan.

pub mod analyze;
pub mod check;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ECU configuration analyzer
///
/// Analyze AUTOSAR ECUC configuration files for structural issues.
#[derive(Parser, Debug)]
#[clap(
    name = "ecuscan",
    version,
    about = "ECU configuration analyzer for AUTOSAR XML files",
    long_about = None,
    after_help = "Examples:\n\
        ecuscan analyze ecuc.arxml           Analyze a configuration file\n\
        ecuscan analyze -f json ecuc.arxml   Emit the full result as JSON\n\
        ecuscan check 'configs/**/*.arxml'   Validate a batch of files\n\n\
        See 'ecuscan <command> --help' for more information on a specific command."
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[clap(short, long, global = true)]
    pub verbose: bool,

    /// Change to directory before executing
    #[clap(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze ECUC configuration files
    Analyze {
        /// Files to analyze
        files: Vec<PathBuf>,

        /// Output format (text, json)
        #[clap(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Check that files parse as AUTOSAR documents
    Check {
        /// Glob pattern of files to check
        #[clap(default_value = "*.arxml")]
        pattern: String,
    },
}

/// Output format for the analyze command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
