// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ecuscan contributors

//! Error types for ecuscan
//!
//! Element-level parse defects inside the model builder are not errors:
//! the offending element is dropped and analysis continues. These variants
//! cover the run boundary and the CLI edge.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for ecuscan operations
pub type EcuscanResult<T> = Result<T, EcuscanError>;

/// Main error type for ecuscan
#[derive(Error, Debug, Diagnostic)]
pub enum EcuscanError {
    // ─────────────────────────────────────────────────────────────────────────
    // File Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("File not found: {path}")]
    #[diagnostic(
        code(ecuscan::file_not_found),
        help("Check that the path exists and is readable")
    )]
    FileNotFound { path: PathBuf },

    #[error("Failed to read file '{path}': {error}")]
    #[diagnostic(code(ecuscan::file_read_error))]
    FileReadError { path: PathBuf, error: String },

    #[error("No input files matched pattern: {pattern}")]
    #[diagnostic(
        code(ecuscan::no_input_files),
        help("Check that files matching '{pattern}' exist")
    )]
    NoInputFiles { pattern: String },

    // ─────────────────────────────────────────────────────────────────────────
    // Document Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("XML parsing error: {message}")]
    #[diagnostic(
        code(ecuscan::xml_error),
        help("The document is not well-formed XML; run 'ecuscan check' for details")
    )]
    Xml { message: String },

    #[error("Not an AUTOSAR document: {path}")]
    #[diagnostic(
        code(ecuscan::not_autosar),
        help("Expected an AUTOSAR root element (namespace http://www.autosar.org/schema/r4.0)")
    )]
    NotAutosar { path: PathBuf },

    // ─────────────────────────────────────────────────────────────────────────
    // Analysis Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Analysis failed: {message}")]
    #[diagnostic(code(ecuscan::analysis_failed))]
    AnalysisFailed {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid naming pattern: {message}")]
    #[diagnostic(code(ecuscan::invalid_pattern))]
    InvalidPattern { message: String },

    // ─────────────────────────────────────────────────────────────────────────
    // IO/System Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("IO error: {message}")]
    #[diagnostic(code(ecuscan::io_error))]
    Io { message: String },

    #[error("JSON serialization error: {message}")]
    #[diagnostic(code(ecuscan::json_error))]
    Json { message: String },

    #[error("Glob pattern error: {message}")]
    #[diagnostic(code(ecuscan::glob_error))]
    GlobPattern { message: String },
}

impl From<std::io::Error> for EcuscanError {
    fn from(e: std::io::Error) -> Self {
        Self::Io { message: e.to_string() }
    }
}

impl From<roxmltree::Error> for EcuscanError {
    fn from(e: roxmltree::Error) -> Self {
        Self::Xml { message: e.to_string() }
    }
}

impl From<serde_json::Error> for EcuscanError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json { message: e.to_string() }
    }
}

impl From<glob::PatternError> for EcuscanError {
    fn from(e: glob::PatternError) -> Self {
        Self::GlobPattern { message: e.to_string() }
    }
}

impl From<regex::Error> for EcuscanError {
    fn from(e: regex::Error) -> Self {
        Self::InvalidPattern { message: e.to_string() }
    }
}

impl EcuscanError {
    /// Create an analysis failure with context about the failing pass
    pub fn analysis_failed_in_pass(pass: &str, message: impl Into<String>) -> Self {
        Self::AnalysisFailed {
            message: message.into(),
            help: Some(format!(
                "The '{pass}' pass did not complete; earlier results are kept"
            )),
        }
    }
}
