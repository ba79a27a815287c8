// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ecuscan contributors

//! ECUC analysis engine
//!
//! Builds the configuration model from the document, then runs the analysis
//! passes in a fixed order, each reading the model and writing its findings
//! into the shared [`AnalysisResult`].

mod containers;
mod dependencies;
mod parameters;
mod patterns;
mod recommend;
mod references;
mod result;
mod statistics;

pub use result::{
    AnalysisMetadata, AnalysisResult, AnalysisStatus, BrokenReference, CircularReference,
    CommonParameter, ContainerAnalysis, DeepNesting, DependencyAnalysis, Details, EmptyContainer,
    ExternalReference, MixedHierarchy, ModuleDependency, ModuleSummary, NamingPattern,
    OutOfRange, ParameterAnalysis, PatternFindings, ReferenceAnalysis, SharedDefinition,
    SimilarityGroup, Statistics, Summary,
};

use tracing::{debug, warn};

use crate::document::ArxmlDocument;
use crate::errors::EcuscanResult;
use crate::model::{ModelBuilder, ModuleSet};

/// Analyzer identity recorded in result metadata.
pub const ANALYZER_NAME: &str = "EcucAnalyzer";
pub const ANALYZER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// ECUC configuration analyzer.
///
/// Holds no per-run state: every `analyze` call builds a fresh model and a
/// fresh accumulator, so one instance can be reused across documents.
pub struct EcucAnalyzer;

impl EcucAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze one document end-to-end.
    ///
    /// Never propagates an error: a failing pass sets status `Failed` and
    /// records the message, keeping whatever earlier passes produced.
    pub fn analyze(&self, doc: &ArxmlDocument) -> AnalysisResult {
        let mut result = AnalysisResult::new(ANALYZER_NAME, ANALYZER_VERSION);

        match run_passes(doc, &mut result) {
            Ok(()) => {
                result.metadata.status = AnalysisStatus::Completed;
                debug!(
                    modules = result.summary.total_modules,
                    warnings = result.warnings.len(),
                    "analysis completed"
                );
            }
            Err(e) => {
                warn!(error = %e, "analysis failed");
                result.metadata.status = AnalysisStatus::Failed;
                result.metadata.errors.push(e.to_string());
            }
        }

        result
    }
}

impl Default for EcucAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn run_passes(doc: &ArxmlDocument, result: &mut AnalysisResult) -> EcuscanResult<()> {
    let modules = ModelBuilder::new(doc).build();
    summarize_modules(&modules, result);

    parameters::analyze(&modules, result);
    containers::analyze(&modules, result);
    references::analyze(&modules, result);
    dependencies::analyze(&modules, result);
    patterns::analyze(doc, &modules, result)?;
    statistics::generate(&modules, result);
    recommend::generate(&modules, result);

    Ok(())
}

fn summarize_modules(modules: &ModuleSet, result: &mut AnalysisResult) {
    result.details.modules = modules
        .iter()
        .map(|m| ModuleSummary {
            name: m.name.clone(),
            definition_ref: m.definition_ref.clone(),
            container_count: m.containers.len(),
            parameter_count: m.parameters.len(),
            reference_count: m.references.len(),
        })
        .collect();
    result.summary.total_modules = modules.len();
}
