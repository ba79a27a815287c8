// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ecuscan contributors

//! Check command - batch-validate that files parse as AUTOSAR documents

use colored::Colorize;
use miette::Result;
use std::path::PathBuf;

use crate::document::{tag, ArxmlDocument};
use crate::errors::EcuscanError;

/// Run the check command
pub fn run(pattern: String, verbose: bool) -> Result<()> {
    let mut paths: Vec<PathBuf> = glob::glob(&pattern)
        .map_err(EcuscanError::from)?
        .filter_map(|entry| entry.ok())
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(EcuscanError::NoInputFiles { pattern }.into());
    }

    println!("{}", "Checking ARXML files...".bold());
    println!();

    let mut passed = 0usize;
    let mut failed = 0usize;

    for path in &paths {
        match check_file(path) {
            Ok(modules) => {
                passed += 1;
                println!("  {} {}", "✓".green(), path.display());
                if verbose {
                    let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
                    println!(
                        "    {}",
                        format!("{} modules, {} bytes", modules, size).dimmed()
                    );
                }
            }
            Err(e) => {
                failed += 1;
                println!("  {} {}", "✗".red(), path.display());
                println!("    {}", e.to_string().dimmed());
            }
        }
    }

    println!();
    println!(
        "{}: {} passed, {} failed, {} total",
        "Summary".bold(),
        passed.to_string().green(),
        if failed > 0 {
            failed.to_string().red().to_string()
        } else {
            failed.to_string()
        },
        paths.len()
    );

    if failed > 0 {
        Err(miette::miette!("{} file(s) failed validation", failed))
    } else {
        Ok(())
    }
}

/// Validate one file; returns the module-configuration count on success.
fn check_file(path: &PathBuf) -> Result<usize, EcuscanError> {
    let content = std::fs::read_to_string(path).map_err(|e| EcuscanError::FileReadError {
        path: path.clone(),
        error: e.to_string(),
    })?;
    let parsed = roxmltree::Document::parse(&content)?;
    let doc = ArxmlDocument::new(&parsed);
    if !doc.is_autosar() {
        return Err(EcuscanError::NotAutosar { path: path.clone() });
    }
    Ok(doc
        .descendants_named(doc.root(), tag::MODULE_CONFIGURATION)
        .count())
}
