// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ecuscan contributors

//! Configuration pattern detection
//!
//! Surfaces recurring structure across the document: PascalCase naming of
//! modules and containers, module definitions referenced from more than
//! one configuration, and modules mixing flat and nested container
//! hierarchies.

use regex::Regex;
use std::collections::HashMap;

use crate::analyzer::result::{
    AnalysisResult, MixedHierarchy, NamingPattern, SharedDefinition,
};
use crate::document::{tag, ArxmlDocument};
use crate::errors::EcuscanResult;
use crate::model::ModuleSet;

/// Naming findings are a sample, not an inventory.
const NAMING_SAMPLE_LIMIT: usize = 10;

pub fn analyze(
    doc: &ArxmlDocument,
    modules: &ModuleSet,
    result: &mut AnalysisResult,
) -> EcuscanResult<()> {
    result.patterns.naming = naming_patterns(doc)?;
    result.patterns.configuration = shared_definitions(modules);
    result.patterns.structure = mixed_hierarchies(modules);
    Ok(())
}

/// PascalCase short-names of modules, then containers, in document order,
/// truncated to the sample limit.
fn naming_patterns(doc: &ArxmlDocument) -> EcuscanResult<Vec<NamingPattern>> {
    let pascal = Regex::new(r"^[A-Z][a-zA-Z0-9]+$")?;
    let mut findings = Vec::new();

    let scopes = [
        (tag::MODULE_CONFIGURATION, "module"),
        (tag::CONTAINER_VALUE, "container"),
    ];
    for (element_tag, element_kind) in scopes {
        for node in doc.descendants_named(doc.root(), element_tag) {
            let Some(name) = doc
                .children_named(node, tag::SHORT_NAME)
                .next()
                .and_then(|n| n.text())
            else {
                continue;
            };
            if pascal.is_match(name) {
                findings.push(NamingPattern {
                    pattern: "PascalCase",
                    element: name.to_string(),
                    element_kind,
                });
            }
        }
    }

    findings.truncate(NAMING_SAMPLE_LIMIT);
    Ok(findings)
}

/// Module definitions referenced by two or more configurations.
fn shared_definitions(modules: &ModuleSet) -> Vec<SharedDefinition> {
    let mut order: Vec<&str> = Vec::new();
    let mut by_definition: HashMap<&str, Vec<String>> = HashMap::new();

    for module in modules.iter() {
        if module.definition_ref.is_empty() {
            continue;
        }
        let entry = by_definition
            .entry(module.definition_ref.as_str())
            .or_insert_with(|| {
                order.push(module.definition_ref.as_str());
                Vec::new()
            });
        entry.push(module.name.clone());
    }

    order
        .into_iter()
        .filter_map(|definition| {
            let members = &by_definition[definition];
            (members.len() > 1).then(|| SharedDefinition {
                pattern: "shared_definition",
                definition: definition.to_string(),
                modules: members.clone(),
                count: members.len(),
            })
        })
        .collect()
}

/// Modules whose top-level containers mix leaf and nested shapes.
fn mixed_hierarchies(modules: &ModuleSet) -> Vec<MixedHierarchy> {
    let mut findings = Vec::new();

    for module in modules.iter() {
        if module.containers.is_empty() {
            continue;
        }
        let nested_count = module
            .containers
            .iter()
            .filter(|c| !c.sub_containers.is_empty())
            .count();
        let flat_count = module.containers.len() - nested_count;

        if flat_count > 0 && nested_count > 0 {
            findings.push(MixedHierarchy {
                pattern: "mixed_hierarchy",
                module: module.name.clone(),
                flat_count,
                nested_count,
            });
        }
    }

    findings
}
