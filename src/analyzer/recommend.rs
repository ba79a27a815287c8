// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ecuscan contributors

//! Recommendation pass
//!
//! Turns accumulated findings into actionable prose. Runs last, reads only
//! the result, and relies on [`AnalysisResult::add_recommendation`] for
//! deduplication.

use crate::analyzer::result::AnalysisResult;
use crate::model::{ModuleSet, ParamKind};

/// Above this module count the configuration is flagged for splitting.
const LARGE_CONFIGURATION_THRESHOLD: usize = 20;

pub fn generate(modules: &ModuleSet, result: &mut AnalysisResult) {
    let empty = result.details.container_analysis.empty_containers.len();
    if empty > 0 {
        result.add_recommendation(format!(
            "Found {empty} empty containers. Consider removing unused containers or adding required parameters."
        ));
    }

    if result.details.container_analysis.max_depth > 5 {
        result.add_recommendation(
            "Deep container nesting detected (>5 levels). Consider flattening the hierarchy for better maintainability.",
        );
    }

    let broken = result.details.reference_analysis.broken.len();
    if broken > 0 {
        result.add_recommendation(format!(
            "Found {broken} broken references. Review and fix missing reference targets."
        ));
    }

    if !result.details.reference_analysis.circular.is_empty() {
        result.add_recommendation(
            "Circular references detected. Review module dependencies to avoid circular dependencies.",
        );
    }

    let out_of_range = result.details.parameter_analysis.out_of_range.len();
    if out_of_range > 0 {
        result.add_recommendation(format!(
            "Found {out_of_range} parameters with potentially out-of-range values. Review parameter constraints and valid ranges."
        ));
    }

    let groups = result.details.dependencies.configuration_groups.len();
    if groups > 0 {
        result.add_recommendation(format!(
            "Found {groups} groups of similar modules. Consider using shared configuration templates or inheritance."
        ));
    }

    if modules.len() > LARGE_CONFIGURATION_THRESHOLD {
        result.add_recommendation(format!(
            "Large number of modules detected ({}). Consider modularizing or splitting the configuration for better management.",
            modules.len()
        ));
    }

    if let Some(&unknown) = result
        .details
        .parameter_analysis
        .by_type
        .get(&ParamKind::Unknown.to_string())
    {
        if unknown > 0 {
            result.add_recommendation(format!(
                "Found {unknown} parameters with unknown types. Ensure all parameters have properly defined types."
            ));
        }
    }
}
