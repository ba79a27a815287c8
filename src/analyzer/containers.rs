// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ecuscan contributors

//! Structural pass: container depth, empty containers, deep nesting
//!
//! Depth is computed over the owned container tree (leaf = 1, parent =
//! 1 + deepest child), so traversal always terminates. The deep-nesting
//! threshold of 5 is fixed.

use crate::analyzer::result::{AnalysisResult, ContainerAnalysis, DeepNesting, EmptyContainer};
use crate::model::ModuleSet;

const DEEP_NESTING_THRESHOLD: usize = 5;

pub fn analyze(modules: &ModuleSet, result: &mut AnalysisResult) {
    let mut stats = ContainerAnalysis::default();
    let mut total_params = 0usize;

    for module in modules.iter() {
        for container in &module.containers {
            let depth = container.depth();
            stats.total += 1;
            stats.max_depth = stats.max_depth.max(depth);
            total_params += container.parameters.len();

            if container.is_empty() {
                stats.empty_containers.push(EmptyContainer {
                    name: container.name.clone(),
                    module: module.name.clone(),
                });
            }

            if depth > DEEP_NESTING_THRESHOLD {
                stats.deep_nesting.push(DeepNesting {
                    name: container.name.clone(),
                    module: module.name.clone(),
                    depth,
                });
            }
        }
    }

    if stats.total > 0 {
        stats.avg_params_per_container = total_params as f64 / stats.total as f64;
    }

    for deep in &stats.deep_nesting {
        result.add_warning(format!(
            "Container '{}' in module '{}' has deep nesting (depth: {})",
            deep.name, deep.module, deep.depth
        ));
    }

    result.summary.total_containers = stats.total;
    result.details.container_analysis = stats;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Container, Module};

    fn container(name: &str, subs: Vec<Container>) -> Container {
        Container {
            name: name.to_string(),
            definition_ref: String::new(),
            parameters: vec![],
            sub_containers: subs,
        }
    }

    fn module_with(containers: Vec<Container>) -> ModuleSet {
        let mut set = ModuleSet::new();
        set.insert(Module {
            name: "M".into(),
            definition_ref: String::new(),
            containers,
            parameters: vec![],
            references: vec![],
        });
        set
    }

    fn chain(len: usize) -> Container {
        let mut c = container(&format!("L{len}"), vec![]);
        for i in (1..len).rev() {
            c = container(&format!("L{i}"), vec![c]);
        }
        c
    }

    #[test]
    fn test_empty_container_is_flagged() {
        let modules = module_with(vec![container("Empty", vec![])]);
        let mut result = AnalysisResult::new("EcucAnalyzer", "test");
        analyze(&modules, &mut result);

        let analysis = &result.details.container_analysis;
        assert_eq!(analysis.total, 1);
        assert_eq!(analysis.empty_containers.len(), 1);
        assert_eq!(analysis.max_depth, 1);
        // Not deep enough to warn.
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_no_containers_means_zero_average() {
        let modules = module_with(vec![]);
        let mut result = AnalysisResult::new("EcucAnalyzer", "test");
        analyze(&modules, &mut result);

        let analysis = &result.details.container_analysis;
        assert_eq!(analysis.total, 0);
        assert_eq!(analysis.avg_params_per_container, 0.0);
    }

    #[test]
    fn test_six_levels_trigger_deep_nesting() {
        let modules = module_with(vec![chain(6)]);
        let mut result = AnalysisResult::new("EcucAnalyzer", "test");
        analyze(&modules, &mut result);

        let analysis = &result.details.container_analysis;
        assert_eq!(analysis.max_depth, 6);
        assert_eq!(analysis.deep_nesting.len(), 1);
        assert_eq!(analysis.deep_nesting[0].depth, 6);
        assert!(result.warnings[0].contains("deep nesting (depth: 6)"));
    }

    #[test]
    fn test_five_levels_do_not_trigger() {
        let modules = module_with(vec![chain(5)]);
        let mut result = AnalysisResult::new("EcucAnalyzer", "test");
        analyze(&modules, &mut result);

        assert!(result.details.container_analysis.deep_nesting.is_empty());
    }
}
