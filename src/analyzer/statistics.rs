// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ecuscan contributors

//! Statistics rollup
//!
//! Purely derived numbers: everything here is computed from the module set
//! and the findings earlier passes already recorded. Runs last among the
//! data passes so the detail buckets are final.

use crate::analyzer::result::{
    AnalysisResult, ComplexityStats, ContainerStats, ModuleStats, ParameterStats, ReferenceStats,
};
use crate::model::ModuleSet;

pub fn generate(modules: &ModuleSet, result: &mut AnalysisResult) {
    let count = modules.len();
    let (mut containers, mut parameters, mut references) = (0usize, 0usize, 0usize);
    for module in modules.iter() {
        containers += module.containers.len();
        parameters += module.parameters.len();
        references += module.references.len();
    }

    let avg = |total: usize| {
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    };
    result.statistics.modules = ModuleStats {
        count,
        avg_containers: avg(containers),
        avg_parameters: avg(parameters),
        avg_references: avg(references),
    };

    let params = &result.details.parameter_analysis;
    result.statistics.parameters = ParameterStats {
        total: params.total,
        by_type: params.by_type.clone(),
        symbolic_ratio: if params.total == 0 {
            0.0
        } else {
            params.symbolic_count as f64 / params.total as f64
        },
    };

    let containers = &result.details.container_analysis;
    result.statistics.containers = ContainerStats {
        total: containers.total,
        max_depth: containers.max_depth,
        empty_count: containers.empty_containers.len(),
    };

    let refs = &result.details.reference_analysis;
    result.statistics.references = ReferenceStats {
        total: refs.total,
        broken_count: refs.broken.len(),
        external_count: refs.external.len(),
    };

    let deps = &result.details.dependencies;
    result.statistics.complexity = ComplexityStats {
        dependency_count: deps.module_dependencies.len(),
        common_param_count: deps.common_parameters.len(),
        config_group_count: deps.configuration_groups.len(),
    };
}
