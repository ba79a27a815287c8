// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ecuscan contributors

//! Analysis result types
//!
//! One [`AnalysisResult`] accumulates everything a run produces: the module
//! summaries, per-pass findings, statistics rollups, pattern buckets,
//! warnings, and recommendations. Every type serializes with serde so the
//! JSON renderer is a plain `serde_json` call over the typed result.

use serde::Serialize;
use std::collections::BTreeMap;

/// Execution status of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Pending,
    Completed,
    Failed,
}

/// Run metadata: analyzer identity, status, and run-boundary errors.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisMetadata {
    pub analyzer_name: &'static str,
    pub analyzer_version: &'static str,
    pub status: AnalysisStatus,
    pub errors: Vec<String>,
}

/// Short per-module rollup for the `modules` detail list.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleSummary {
    pub name: String,
    pub definition_ref: String,
    pub container_count: usize,
    pub parameter_count: usize,
    pub reference_count: usize,
}

/// An integer parameter outside the heuristic 0..=65535 range.
#[derive(Debug, Clone, Serialize)]
pub struct OutOfRange {
    pub parameter: String,
    pub value: i64,
    pub module: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ParameterAnalysis {
    pub total: usize,
    pub by_type: BTreeMap<String, usize>,
    pub symbolic_count: usize,
    pub out_of_range: Vec<OutOfRange>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmptyContainer {
    pub name: String,
    pub module: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeepNesting {
    pub name: String,
    pub module: String,
    pub depth: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContainerAnalysis {
    pub total: usize,
    pub max_depth: usize,
    pub avg_params_per_container: f64,
    pub empty_containers: Vec<EmptyContainer>,
    pub deep_nesting: Vec<DeepNesting>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrokenReference {
    pub reference: String,
    pub module: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExternalReference {
    pub reference: String,
    pub target: String,
    pub module: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircularReference {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReferenceAnalysis {
    pub total: usize,
    pub broken: Vec<BrokenReference>,
    pub circular: Vec<CircularReference>,
    pub external: Vec<ExternalReference>,
}

/// Deduplicated dependency edges for one source module, sorted by target.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleDependency {
    pub module: String,
    pub depends_on: Vec<String>,
}

/// A parameter name occurring in two or more modules.
#[derive(Debug, Clone, Serialize)]
pub struct CommonParameter {
    pub name: String,
    pub modules: Vec<String>,
}

/// A greedy similarity group of modules sharing >50% of their parameters.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityGroup {
    pub modules: Vec<String>,
    pub common_params: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DependencyAnalysis {
    pub module_dependencies: Vec<ModuleDependency>,
    pub common_parameters: Vec<CommonParameter>,
    pub configuration_groups: Vec<SimilarityGroup>,
}

/// Full findings structures, one bucket per analyzer pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Details {
    pub modules: Vec<ModuleSummary>,
    pub parameter_analysis: ParameterAnalysis,
    pub container_analysis: ContainerAnalysis,
    pub reference_analysis: ReferenceAnalysis,
    pub dependencies: DependencyAnalysis,
}

#[derive(Debug, Clone, Serialize)]
pub struct NamingPattern {
    pub pattern: &'static str,
    pub element: String,
    #[serde(rename = "type")]
    pub element_kind: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SharedDefinition {
    pub pattern: &'static str,
    pub definition: String,
    pub modules: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MixedHierarchy {
    pub pattern: &'static str,
    pub module: String,
    pub flat_count: usize,
    pub nested_count: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatternFindings {
    pub naming: Vec<NamingPattern>,
    pub configuration: Vec<SharedDefinition>,
    pub structure: Vec<MixedHierarchy>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ModuleStats {
    pub count: usize,
    pub avg_containers: f64,
    pub avg_parameters: f64,
    pub avg_references: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ParameterStats {
    pub total: usize,
    pub by_type: BTreeMap<String, usize>,
    pub symbolic_ratio: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContainerStats {
    pub total: usize,
    pub max_depth: usize,
    pub empty_count: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReferenceStats {
    pub total: usize,
    pub broken_count: usize,
    pub external_count: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ComplexityStats {
    pub dependency_count: usize,
    pub common_param_count: usize,
    pub config_group_count: usize,
}

/// Nested numeric rollups derived from the detail findings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Statistics {
    pub modules: ModuleStats,
    pub parameters: ParameterStats,
    pub containers: ContainerStats,
    pub references: ReferenceStats,
    pub complexity: ComplexityStats,
}

/// Top-level counts exposed for quick consumption.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub total_modules: usize,
    pub total_parameters: usize,
    pub total_containers: usize,
    pub total_references: usize,
    pub module_dependencies: usize,
}

/// Accumulator for one analysis run, handed to the caller as a snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub metadata: AnalysisMetadata,
    pub summary: Summary,
    pub details: Details,
    pub patterns: PatternFindings,
    pub statistics: Statistics,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    pub fn new(analyzer_name: &'static str, analyzer_version: &'static str) -> Self {
        Self {
            metadata: AnalysisMetadata {
                analyzer_name,
                analyzer_version,
                status: AnalysisStatus::Pending,
                errors: Vec::new(),
            },
            summary: Summary::default(),
            details: Details::default(),
            patterns: PatternFindings::default(),
            statistics: Statistics::default(),
            warnings: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Append a recommendation unless an identical one is already present.
    pub fn add_recommendation(&mut self, recommendation: impl Into<String>) {
        let recommendation = recommendation.into();
        if !self.recommendations.contains(&recommendation) {
            self.recommendations.push(recommendation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_result_is_pending_and_empty() {
        let result = AnalysisResult::new("ECUCAnalyzer", "1.0.0");
        assert_eq!(result.metadata.status, AnalysisStatus::Pending);
        assert!(result.metadata.errors.is_empty());
        assert_eq!(result.summary.total_modules, 0);
    }

    #[test]
    fn test_recommendations_are_deduplicated() {
        let mut result = AnalysisResult::new("ECUCAnalyzer", "1.0.0");
        result.add_recommendation("do the thing");
        result.add_recommendation("do the thing");
        result.add_recommendation("do another thing");
        assert_eq!(result.recommendations.len(), 2);
    }
}
