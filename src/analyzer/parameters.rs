// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ecuscan contributors

//! Parameter pass: type distribution, symbolic counts, range checks
//!
//! Counts module-level and container-level parameters, tallies them by
//! kind, and flags integer values outside the heuristic 0..=65535 range.
//! The range is a plausibility check, not schema-derived.

use crate::analyzer::result::{AnalysisResult, OutOfRange, ParameterAnalysis};
use crate::model::{Container, ModuleSet, Parameter};

const RANGE_MIN: i64 = 0;
const RANGE_MAX: i64 = 65535;

pub fn analyze(modules: &ModuleSet, result: &mut AnalysisResult) {
    let mut stats = ParameterAnalysis::default();

    for module in modules.iter() {
        for param in &module.parameters {
            record(param, &module.name, &mut stats);
        }
        for container in &module.containers {
            record_container(container, &module.name, &mut stats);
        }
    }

    for oor in &stats.out_of_range {
        result.add_warning(format!(
            "Parameter '{}' in module '{}' has potentially out-of-range value: {}",
            oor.parameter, oor.module, oor.value
        ));
    }

    result.summary.total_parameters = stats.total;
    result.details.parameter_analysis = stats;
}

fn record(param: &Parameter, module: &str, stats: &mut ParameterAnalysis) {
    stats.total += 1;
    *stats.by_type.entry(param.kind.to_string()).or_insert(0) += 1;

    if param.is_symbolic {
        stats.symbolic_count += 1;
    }

    if let Some(value) = param.value.as_integer() {
        if !(RANGE_MIN..=RANGE_MAX).contains(&value) {
            stats.out_of_range.push(OutOfRange {
                parameter: param.name.clone(),
                value,
                module: module.to_string(),
            });
        }
    }
}

fn record_container(container: &Container, module: &str, stats: &mut ParameterAnalysis) {
    for param in &container.parameters {
        record(param, module, stats);
    }
    for sub in &container.sub_containers {
        record_container(sub, module, stats);
    }
}
