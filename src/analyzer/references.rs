// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ecuscan contributors

//! Reference pass: broken, external, and circular references
//!
//! A reference with no target path is broken. A target path starting with
//! `/` that does not end with any known module name points outside this
//! document. Circularity is a bounded two-hop heuristic: take the last
//! path segment of an outgoing reference, and if that names a module whose
//! own outgoing references mention the source module name as a substring,
//! flag the pair. It is deliberately not a graph cycle search.

use std::collections::HashMap;

use crate::analyzer::result::{
    AnalysisResult, BrokenReference, CircularReference, ExternalReference, ReferenceAnalysis,
};
use crate::model::ModuleSet;

pub fn analyze(modules: &ModuleSet, result: &mut AnalysisResult) {
    let mut stats = ReferenceAnalysis::default();

    // Outgoing reference paths per module, in module enumeration order.
    let mut outgoing: Vec<(&str, Vec<&str>)> = Vec::new();
    let mut outgoing_index: HashMap<&str, usize> = HashMap::new();

    for module in modules.iter() {
        for reference in &module.references {
            stats.total += 1;

            match reference.value_ref.as_deref() {
                Some(path) => {
                    let slot = *outgoing_index.entry(&module.name).or_insert_with(|| {
                        outgoing.push((&module.name, Vec::new()));
                        outgoing.len() - 1
                    });
                    outgoing[slot].1.push(path);

                    let known_target = modules.iter().any(|m| path.ends_with(&m.name));
                    if path.starts_with('/') && !known_target {
                        stats.external.push(ExternalReference {
                            reference: reference.name.clone(),
                            target: path.to_string(),
                            module: module.name.clone(),
                        });
                    }
                }
                None => {
                    stats.broken.push(BrokenReference {
                        reference: reference.name.clone(),
                        module: module.name.clone(),
                    });
                }
            }
        }
    }

    // Two-hop substring heuristic over the collected outgoing paths.
    for (module_name, paths) in &outgoing {
        for path in paths {
            let target = path.rsplit('/').next().unwrap_or(path);
            if let Some(&slot) = outgoing_index.get(target) {
                if outgoing[slot].1.iter().any(|r| r.contains(module_name)) {
                    stats.circular.push(CircularReference {
                        from: module_name.to_string(),
                        to: target.to_string(),
                    });
                }
            }
        }
    }

    for broken in &stats.broken {
        result.add_warning(format!(
            "Broken reference '{}' in module '{}'",
            broken.reference, broken.module
        ));
    }
    for circular in &stats.circular {
        result.add_warning(format!(
            "Potential circular reference between '{}' and '{}'",
            circular.from, circular.to
        ));
    }

    result.summary.total_references = stats.total;
    result.details.reference_analysis = stats;
}
