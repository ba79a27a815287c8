// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ecuscan contributors

//! Typed ECUC configuration model
//!
//! Pure data extracted from the document tree. Containers form an owned
//! tree (a parent exclusively owns its children), so traversal terminates
//! by construction. The parameter value is a closed sum keyed by kind:
//! an integer parameter can never carry a textual payload.

mod builder;

pub use builder::ModelBuilder;

use serde::Serialize;
use std::collections::HashMap;

/// Parameter kind as reported in analysis output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ParamKind {
    #[serde(rename = "INTEGER")]
    Integer,
    #[serde(rename = "STRING")]
    String,
    #[serde(rename = "BOOLEAN")]
    Boolean,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl std::fmt::Display for ParamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Integer => "INTEGER",
            Self::String => "STRING",
            Self::Boolean => "BOOLEAN",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// Parameter value, typed per kind. The inner `None` is the absent state
/// (missing value element, unparsable number, empty text).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Integer(Option<i64>),
    Text(Option<String>),
    Boolean(Option<bool>),
    Unknown(Option<String>),
}

impl ParamValue {
    /// The kind this value was parsed as.
    pub fn kind(&self) -> ParamKind {
        match self {
            Self::Integer(_) => ParamKind::Integer,
            Self::Text(_) => ParamKind::String,
            Self::Boolean(_) => ParamKind::Boolean,
            Self::Unknown(_) => ParamKind::Unknown,
        }
    }

    /// True when no usable value was present in the document.
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Integer(v) => v.is_none(),
            Self::Text(v) => v.is_none(),
            Self::Boolean(v) => v.is_none(),
            Self::Unknown(v) => v.is_none(),
        }
    }

    /// Integer payload, if this is a present integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => *v,
            _ => None,
        }
    }
}

/// A configuration parameter.
#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    pub name: String,
    pub definition_ref: String,
    #[serde(rename = "type")]
    pub kind: ParamKind,
    pub value: ParamValue,
    pub is_symbolic: bool,
}

/// A configuration reference. A reference without a definition reference
/// cannot exist; the builder drops it during parsing.
#[derive(Debug, Clone, Serialize)]
pub struct Reference {
    pub name: String,
    pub definition_ref: String,
    pub value_ref: Option<String>,
}

/// A named, potentially nested grouping of parameters within a module.
#[derive(Debug, Clone, Serialize)]
pub struct Container {
    pub name: String,
    pub definition_ref: String,
    pub parameters: Vec<Parameter>,
    pub sub_containers: Vec<Container>,
}

impl Container {
    /// True when the container holds neither parameters nor sub-containers.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty() && self.sub_containers.is_empty()
    }

    /// Maximum depth of this container hierarchy. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .sub_containers
            .iter()
            .map(Container::depth)
            .max()
            .unwrap_or(0)
    }
}

/// One ECUC module-configuration-values element and everything under it.
#[derive(Debug, Clone, Serialize)]
pub struct Module {
    pub name: String,
    pub definition_ref: String,
    pub containers: Vec<Container>,
    pub parameters: Vec<Parameter>,
    pub references: Vec<Reference>,
}

impl Module {
    /// Names of the module's direct (module-level) parameters.
    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters.iter().map(|p| p.name.as_str()).collect()
    }
}

/// Insertion-ordered module collection keyed by name.
///
/// Duplicate names replace the stored module but keep the original
/// position, so enumeration order is deterministic for a given document.
/// Built fresh for every analysis run.
#[derive(Debug, Default)]
pub struct ModuleSet {
    modules: Vec<Module>,
    index: HashMap<String, usize>,
}

impl ModuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a module; last write wins on duplicate names.
    pub fn insert(&mut self, module: Module) {
        match self.index.get(&module.name) {
            Some(&i) => self.modules[i] = module,
            None => {
                self.index.insert(module.name.clone(), self.modules.len());
                self.modules.push(module);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Module> {
        self.index.get(name).map(|&i| &self.modules[i])
    }

    /// Modules in fixed enumeration (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(name: &str) -> Module {
        Module {
            name: name.to_string(),
            definition_ref: String::new(),
            containers: vec![],
            parameters: vec![],
            references: vec![],
        }
    }

    #[test]
    fn test_value_kind_is_fixed_by_variant() {
        assert_eq!(ParamValue::Integer(Some(3)).kind(), ParamKind::Integer);
        assert_eq!(ParamValue::Integer(None).kind(), ParamKind::Integer);
        assert_eq!(ParamValue::Text(None).kind(), ParamKind::String);
        assert!(ParamValue::Boolean(None).is_absent());
        assert!(!ParamValue::Boolean(Some(false)).is_absent());
    }

    #[test]
    fn test_leaf_container_depth_is_one() {
        let leaf = Container {
            name: "Leaf".into(),
            definition_ref: String::new(),
            parameters: vec![],
            sub_containers: vec![],
        };
        assert_eq!(leaf.depth(), 1);
        assert!(leaf.is_empty());
    }

    #[test]
    fn test_nested_container_depth() {
        let mut c = Container {
            name: "L3".into(),
            definition_ref: String::new(),
            parameters: vec![],
            sub_containers: vec![],
        };
        for name in ["L2", "L1"] {
            c = Container {
                name: name.into(),
                definition_ref: String::new(),
                parameters: vec![],
                sub_containers: vec![c],
            };
        }
        // One child of depth 3 under a fresh parent gives depth 4.
        let parent = Container {
            name: "L0".into(),
            definition_ref: String::new(),
            parameters: vec![],
            sub_containers: vec![c],
        };
        assert_eq!(parent.depth(), 4);
    }

    #[test]
    fn test_module_set_last_write_wins_keeps_position() {
        let mut set = ModuleSet::new();
        set.insert(module("Os"));
        set.insert(module("Com"));
        let mut replacement = module("Os");
        replacement.definition_ref = "/Def/Os".into();
        set.insert(replacement);

        assert_eq!(set.len(), 2);
        let order: Vec<_> = set.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(order, vec!["Os", "Com"]);
        assert_eq!(set.get("Os").unwrap().definition_ref, "/Def/Os");
    }
}
