// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ecuscan contributors

//! Dependency and similarity pass
//!
//! Builds the inter-module dependency graph from reference target paths,
//! collects parameter names shared across modules, and groups modules by
//! parameter-set similarity. Grouping is greedy and order-dependent over
//! the fixed module enumeration order: once a module joins a group it is
//! never reconsidered, and the reported common parameters are those shared
//! with the last module added. This is intentionally not a maximal-clique
//! computation.

use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};

use crate::analyzer::result::{
    AnalysisResult, CommonParameter, DependencyAnalysis, ModuleDependency, SimilarityGroup,
};
use crate::model::ModuleSet;

const SIMILARITY_THRESHOLD: f64 = 0.5;

pub fn analyze(modules: &ModuleSet, result: &mut AnalysisResult) {
    let mut analysis = DependencyAnalysis {
        module_dependencies: dependency_edges(modules),
        common_parameters: common_parameters(modules),
        configuration_groups: Vec::new(),
    };

    if modules.len() > 1 {
        analysis.configuration_groups = similarity_groups(modules);
    }

    result.summary.module_dependencies = analysis.module_dependencies.len();
    result.details.dependencies = analysis;
}

/// Dependency edges: any reference path segment exactly matching another
/// known module name, deduplicated per source via the graph itself.
fn dependency_edges(modules: &ModuleSet) -> Vec<ModuleDependency> {
    let mut graph: DiGraph<&str, ()> = DiGraph::new();
    let mut name_to_index: HashMap<&str, NodeIndex> = HashMap::new();

    for module in modules.iter() {
        let node = graph.add_node(module.name.as_str());
        name_to_index.insert(module.name.as_str(), node);
    }

    for module in modules.iter() {
        let source = name_to_index[module.name.as_str()];
        for reference in &module.references {
            let Some(path) = reference.value_ref.as_deref() else {
                continue;
            };
            for part in path.split('/') {
                if part == module.name {
                    continue;
                }
                if let Some(&target) = name_to_index.get(part) {
                    // update_edge keeps the edge set free of duplicates.
                    graph.update_edge(source, target, ());
                }
            }
        }
    }

    let mut edges = Vec::new();
    for module in modules.iter() {
        let source = name_to_index[module.name.as_str()];
        let mut depends_on: Vec<String> = graph
            .neighbors(source)
            .map(|n| graph[n].to_string())
            .collect();
        if !depends_on.is_empty() {
            depends_on.sort();
            edges.push(ModuleDependency {
                module: module.name.clone(),
                depends_on,
            });
        }
    }
    edges
}

/// Parameter names present in two or more distinct modules, in the order
/// each name was first seen.
fn common_parameters(modules: &ModuleSet) -> Vec<CommonParameter> {
    let mut by_name: Vec<CommonParameter> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for module in modules.iter() {
        for param in &module.parameters {
            let slot = *index.entry(param.name.clone()).or_insert_with(|| {
                by_name.push(CommonParameter {
                    name: param.name.clone(),
                    modules: Vec::new(),
                });
                by_name.len() - 1
            });
            if !by_name[slot].modules.contains(&module.name) {
                by_name[slot].modules.push(module.name.clone());
            }
        }
    }

    by_name.retain(|c| c.modules.len() > 1);
    by_name
}

/// Greedy similarity grouping over direct module-level parameter names.
fn similarity_groups(modules: &ModuleSet) -> Vec<SimilarityGroup> {
    let ordered: Vec<_> = modules.iter().collect();
    let param_sets: Vec<HashSet<&str>> = ordered
        .iter()
        .map(|m| m.parameters.iter().map(|p| p.name.as_str()).collect())
        .collect();

    let mut groups = Vec::new();
    let mut processed: HashSet<&str> = HashSet::new();

    for (i, seed) in ordered.iter().enumerate() {
        if processed.contains(seed.name.as_str()) {
            continue;
        }

        let mut group_modules = vec![seed.name.clone()];
        let mut common_params: Vec<String> = Vec::new();

        for (j, candidate) in ordered.iter().enumerate() {
            if j == i || processed.contains(candidate.name.as_str()) {
                continue;
            }

            let common: Vec<&str> = param_sets[i]
                .intersection(&param_sets[j])
                .copied()
                .collect();
            let larger = param_sets[i].len().max(param_sets[j].len());
            if common.is_empty() || larger == 0 {
                continue;
            }

            if common.len() as f64 / larger as f64 > SIMILARITY_THRESHOLD {
                group_modules.push(candidate.name.clone());
                let mut sorted: Vec<String> =
                    common.iter().map(|s| s.to_string()).collect();
                sorted.sort();
                common_params = sorted;
                processed.insert(candidate.name.as_str());
            }
        }

        if group_modules.len() > 1 {
            processed.insert(seed.name.as_str());
            groups.push(SimilarityGroup {
                modules: group_modules,
                common_params,
            });
        }
    }

    groups
}
