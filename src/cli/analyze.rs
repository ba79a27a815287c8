// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ecuscan contributors

//! Analyze command - run the full ECUC analysis over one or more files

use colored::Colorize;
use miette::Result;
use std::path::PathBuf;

use super::OutputFormat;
use crate::analyzer::{AnalysisResult, AnalysisStatus, EcucAnalyzer};
use crate::document::ArxmlDocument;
use crate::errors::EcuscanError;

/// Run the analyze command
pub fn run(files: Vec<PathBuf>, format: OutputFormat, verbose: bool) -> Result<()> {
    if files.is_empty() {
        return Err(miette::miette!(
            "No files specified.\n\n\
             Usage: ecuscan analyze <file>..."
        ));
    }

    let analyzer = EcucAnalyzer::new();

    for file in &files {
        if !file.exists() {
            eprintln!("{}: File not found: {}", "Warning".yellow(), file.display());
            continue;
        }

        match analyze_file(&analyzer, file) {
            Ok(result) => match format {
                OutputFormat::Text => print_text_analysis(file, &result, verbose),
                OutputFormat::Json => print_json_analysis(file, &result)?,
            },
            Err(e) => {
                eprintln!(
                    "{}: Failed to analyze {}: {}",
                    "Error".red(),
                    file.display(),
                    e
                );
            }
        }
    }

    Ok(())
}

fn analyze_file(analyzer: &EcucAnalyzer, file: &PathBuf) -> Result<AnalysisResult, EcuscanError> {
    let content = std::fs::read_to_string(file).map_err(|e| EcuscanError::FileReadError {
        path: file.clone(),
        error: e.to_string(),
    })?;
    let parsed = roxmltree::Document::parse(&content)?;
    let doc = ArxmlDocument::new(&parsed);
    if !doc.is_autosar() {
        return Err(EcuscanError::NotAutosar { path: file.clone() });
    }
    Ok(analyzer.analyze(&doc))
}

fn print_text_analysis(file: &PathBuf, result: &AnalysisResult, verbose: bool) {
    println!();
    println!("{}: {}", "Analyzing".bold(), file.display());
    println!("{}", "═".repeat(50));
    println!();

    let status = match result.metadata.status {
        AnalysisStatus::Completed => "completed".green(),
        AnalysisStatus::Failed => "failed".red(),
        AnalysisStatus::Pending => "pending".yellow(),
    };
    println!("{}:      {}", "Status".bold(), status);
    for error in &result.metadata.errors {
        println!("  {} {}", "✗".red(), error);
    }
    println!();

    println!("{}:", "Summary".bold());
    println!("  Modules:      {}", result.summary.total_modules);
    println!("  Containers:   {}", result.summary.total_containers);
    println!("  Parameters:   {}", result.summary.total_parameters);
    println!("  References:   {}", result.summary.total_references);
    println!("  Dependencies: {}", result.summary.module_dependencies);
    println!();

    if verbose {
        println!("{}:", "Modules".bold());
        for module in &result.details.modules {
            println!(
                "  {} {} ({} containers, {} parameters, {} references)",
                "•".cyan(),
                module.name,
                module.container_count,
                module.parameter_count,
                module.reference_count
            );
        }
        println!();

        let stats = &result.statistics;
        println!("{}:", "Statistics".bold());
        println!(
            "  Avg containers/module: {:.1}",
            stats.modules.avg_containers
        );
        println!(
            "  Avg parameters/module: {:.1}",
            stats.modules.avg_parameters
        );
        println!("  Max container depth:   {}", stats.containers.max_depth);
        println!("  Symbolic ratio:        {:.2}", stats.parameters.symbolic_ratio);
        println!();
    }

    if !result.warnings.is_empty() {
        println!("{}:", "Warnings".yellow().bold());
        for warning in &result.warnings {
            println!("  {} {}", "⚠".yellow(), warning);
        }
        println!();
    }

    if result.recommendations.is_empty() {
        println!("{}", "No issues found.".green().bold());
    } else {
        println!("{}:", "Recommendations".bold());
        for recommendation in &result.recommendations {
            println!("  {} {}", "•".cyan(), recommendation);
        }
    }
    println!();
}

fn print_json_analysis(file: &PathBuf, result: &AnalysisResult) -> Result<()> {
    let json = serde_json::json!({
        "file": file.display().to_string(),
        "result": result,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&json).map_err(EcuscanError::from)?
    );
    Ok(())
}
