// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ecuscan contributors

//! # ecuscan - ECU Configuration Analyzer
//!
//! `ecuscan` analyzes AUTOSAR ECUC configuration files (ARXML) for
//! structural issues.
//!
//! ## Features
//!
//! - **Module extraction** - Typed model of modules, containers, parameters, references
//! - **Reference checking** - Broken, external, and potentially circular references
//! - **Dependency mapping** - Inter-module dependencies and similarity groups
//! - **Pattern detection** - Naming conventions, shared definitions, mixed hierarchies
//! - **Recommendations** - Actionable findings derived from the analysis
//!
//! ## Quick Start
//!
//! ```bash
//! # Analyze a configuration file
//! ecuscan analyze ecuc.arxml
//!
//! # Full result as JSON
//! ecuscan analyze --format json ecuc.arxml
//!
//! # Batch-validate a directory
//! ecuscan check 'configs/**/*.arxml'
//! ```

pub mod analyzer;
pub mod cli;
pub mod document;
pub mod errors;
pub mod model;

// Re-export commonly used types
pub use analyzer::{AnalysisResult, AnalysisStatus, EcucAnalyzer};
pub use document::ArxmlDocument;
pub use errors::{EcuscanError, EcuscanResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
