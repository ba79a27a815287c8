// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ecuscan contributors

//! Recursive model builder
//!
//! Walks the document tree and populates the configuration model. Parsing
//! is best-effort: an element missing its identity (short-name for modules
//! and containers, definition-ref for parameters and references) is dropped
//! and its siblings are still processed. Partial, malformed configuration
//! data must never prevent analysis of the rest of the document.

use roxmltree::Node;
use tracing::debug;

use crate::document::{tag, ArxmlDocument};
use crate::model::{Container, Module, ModuleSet, Parameter, ParamValue, Reference};

/// Builds a [`ModuleSet`] from an [`ArxmlDocument`].
pub struct ModelBuilder<'d, 'a> {
    doc: &'d ArxmlDocument<'a>,
}

impl<'d, 'a> ModelBuilder<'d, 'a> {
    pub fn new(doc: &'d ArxmlDocument<'a>) -> Self {
        Self { doc }
    }

    /// Locate every module-configuration element under the root and parse
    /// it. Modules without a short-name are silently omitted.
    pub fn build(&self) -> ModuleSet {
        let mut modules = ModuleSet::new();
        for elem in self
            .doc
            .descendants_named(self.doc.root(), tag::MODULE_CONFIGURATION)
        {
            if let Some(module) = self.parse_module(elem) {
                modules.insert(module);
            }
        }
        debug!(count = modules.len(), "extracted ECUC modules");
        modules
    }

    fn parse_module(&self, elem: Node<'a, 'a>) -> Option<Module> {
        let name = self.doc.descendant_text(elem, tag::SHORT_NAME)?.to_string();
        let definition_ref = elem.attribute(tag::DEFINITION_REF).unwrap_or("").to_string();

        // Flattened descendant searches: containers, parameters, and
        // references anywhere under the module, not only direct children.
        let containers = self
            .doc
            .descendants_named(elem, tag::CONTAINER_VALUE)
            .filter_map(|c| self.parse_container(c))
            .collect();
        let parameters = self
            .doc
            .descendants_named(elem, tag::PARAMETER_VALUE)
            .filter_map(|p| self.parse_parameter(p))
            .collect();
        let references = self
            .doc
            .descendants_named(elem, tag::REFERENCE_VALUE)
            .filter_map(|r| self.parse_reference(r))
            .collect();

        Some(Module {
            name,
            definition_ref,
            containers,
            parameters,
            references,
        })
    }

    fn parse_container(&self, elem: Node<'a, 'a>) -> Option<Container> {
        let name = self.doc.descendant_text(elem, tag::SHORT_NAME)?.to_string();
        let definition_ref = elem.attribute(tag::DEFINITION_REF).unwrap_or("").to_string();

        let parameters = elem
            .descendants()
            .filter(|n| {
                n.is_element()
                    && (self.doc.has_tag(*n, tag::NUMERICAL_PARAM_VALUE)
                        || self.doc.has_tag(*n, tag::TEXTUAL_PARAM_VALUE))
            })
            .filter_map(|p| self.parse_parameter(p))
            .collect();

        // The descendant search excludes the container element itself, so
        // the recursion bottoms out at leaf containers.
        let sub_containers = self
            .doc
            .descendants_named(elem, tag::CONTAINER_VALUE)
            .filter_map(|c| self.parse_container(c))
            .collect();

        Some(Container {
            name,
            definition_ref,
            parameters,
            sub_containers,
        })
    }

    fn parse_parameter(&self, elem: Node<'a, 'a>) -> Option<Parameter> {
        // A parameter without a definition reference has no identity.
        let def_elem = self.doc.first_descendant(elem, tag::DEFINITION_REF)?;
        let definition_ref = def_elem.text().unwrap_or("").to_string();
        let name = last_path_segment(&definition_ref);

        let local_tag = elem.tag_name().name();
        let text = self.doc.descendant_text(elem, tag::VALUE);
        let value = if local_tag.contains("NUMERICAL") {
            ParamValue::Integer(text.and_then(|t| t.trim().parse::<i64>().ok()))
        } else if local_tag.contains("TEXTUAL") {
            ParamValue::Text(text.map(str::to_string))
        } else if local_tag.contains("BOOLEAN") {
            ParamValue::Boolean(text.map(|t| t.eq_ignore_ascii_case("true")))
        } else {
            ParamValue::Unknown(text.map(str::to_string))
        };

        let is_symbolic = self.doc.first_descendant(elem, tag::IS_SYMBOLIC).is_some();

        Some(Parameter {
            name,
            definition_ref,
            kind: value.kind(),
            value,
            is_symbolic,
        })
    }

    fn parse_reference(&self, elem: Node<'a, 'a>) -> Option<Reference> {
        let def_elem = self.doc.first_descendant(elem, tag::DEFINITION_REF)?;
        let definition_ref = def_elem.text().unwrap_or("").to_string();
        let name = last_path_segment(&definition_ref);
        let value_ref = self
            .doc
            .descendant_text(elem, tag::VALUE_REF)
            .map(str::to_string);

        Some(Reference {
            name,
            definition_ref,
            value_ref,
        })
    }
}

/// Final `/`-delimited segment of a definition reference, or the sentinel
/// "unknown" when the reference is empty.
fn last_path_segment(path: &str) -> String {
    if path.is_empty() {
        return "unknown".to_string();
    }
    path.rsplit('/').next().unwrap_or(path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParamKind;
    use roxmltree::Document;

    fn build(xml: &str) -> ModuleSet {
        let parsed = Document::parse(xml).unwrap();
        let doc = ArxmlDocument::new(&parsed);
        ModelBuilder::new(&doc).build()
    }

    #[test]
    fn test_module_without_short_name_is_skipped() {
        let xml = r#"<AUTOSAR xmlns="http://www.autosar.org/schema/r4.0">
            <ECUC-MODULE-CONFIGURATION-VALUES/>
            <ECUC-MODULE-CONFIGURATION-VALUES>
                <SHORT-NAME>Os</SHORT-NAME>
            </ECUC-MODULE-CONFIGURATION-VALUES>
        </AUTOSAR>"#;
        let modules = build(xml);
        assert_eq!(modules.len(), 1);
        assert!(modules.contains("Os"));
    }

    #[test]
    fn test_module_definition_ref_defaults_to_empty() {
        let xml = r#"<AUTOSAR xmlns="http://www.autosar.org/schema/r4.0">
            <ECUC-MODULE-CONFIGURATION-VALUES DEFINITION-REF="/Def/Os">
                <SHORT-NAME>Os</SHORT-NAME>
            </ECUC-MODULE-CONFIGURATION-VALUES>
            <ECUC-MODULE-CONFIGURATION-VALUES>
                <SHORT-NAME>Com</SHORT-NAME>
            </ECUC-MODULE-CONFIGURATION-VALUES>
        </AUTOSAR>"#;
        let modules = build(xml);
        assert_eq!(modules.get("Os").unwrap().definition_ref, "/Def/Os");
        assert_eq!(modules.get("Com").unwrap().definition_ref, "");
    }

    #[test]
    fn test_parameter_kinds_and_values() {
        let xml = r#"<AUTOSAR xmlns="http://www.autosar.org/schema/r4.0">
            <ECUC-MODULE-CONFIGURATION-VALUES>
                <SHORT-NAME>M</SHORT-NAME>
                <ECUC-CONTAINER-VALUE>
                    <SHORT-NAME>C</SHORT-NAME>
                    <ECUC-NUMERICAL-PARAM-VALUE>
                        <DEFINITION-REF>/Def/M/C/Count</DEFINITION-REF>
                        <VALUE>42</VALUE>
                    </ECUC-NUMERICAL-PARAM-VALUE>
                    <ECUC-TEXTUAL-PARAM-VALUE>
                        <DEFINITION-REF>/Def/M/C/Mode</DEFINITION-REF>
                        <VALUE>EXTENDED</VALUE>
                    </ECUC-TEXTUAL-PARAM-VALUE>
                </ECUC-CONTAINER-VALUE>
            </ECUC-MODULE-CONFIGURATION-VALUES>
        </AUTOSAR>"#;
        let modules = build(xml);
        let m = modules.get("M").unwrap();
        let c = &m.containers[0];
        assert_eq!(c.parameters.len(), 2);

        let count = &c.parameters[0];
        assert_eq!(count.name, "Count");
        assert_eq!(count.kind, ParamKind::Integer);
        assert_eq!(count.value, ParamValue::Integer(Some(42)));

        let mode = &c.parameters[1];
        assert_eq!(mode.kind, ParamKind::String);
        assert_eq!(mode.value, ParamValue::Text(Some("EXTENDED".into())));
    }

    #[test]
    fn test_malformed_numeric_value_is_absent_not_fatal() {
        let xml = r#"<AUTOSAR xmlns="http://www.autosar.org/schema/r4.0">
            <ECUC-MODULE-CONFIGURATION-VALUES>
                <SHORT-NAME>M</SHORT-NAME>
                <ECUC-CONTAINER-VALUE>
                    <SHORT-NAME>C</SHORT-NAME>
                    <ECUC-NUMERICAL-PARAM-VALUE>
                        <DEFINITION-REF>/Def/P</DEFINITION-REF>
                        <VALUE>not_a_number</VALUE>
                    </ECUC-NUMERICAL-PARAM-VALUE>
                </ECUC-CONTAINER-VALUE>
            </ECUC-MODULE-CONFIGURATION-VALUES>
        </AUTOSAR>"#;
        let modules = build(xml);
        let p = &modules.get("M").unwrap().containers[0].parameters[0];
        assert_eq!(p.value, ParamValue::Integer(None));
        assert!(p.value.is_absent());
    }

    #[test]
    fn test_parameter_without_definition_ref_is_dropped() {
        let xml = r#"<AUTOSAR xmlns="http://www.autosar.org/schema/r4.0">
            <ECUC-MODULE-CONFIGURATION-VALUES>
                <SHORT-NAME>M</SHORT-NAME>
                <ECUC-CONTAINER-VALUE>
                    <SHORT-NAME>C</SHORT-NAME>
                    <ECUC-NUMERICAL-PARAM-VALUE>
                        <VALUE>7</VALUE>
                    </ECUC-NUMERICAL-PARAM-VALUE>
                </ECUC-CONTAINER-VALUE>
            </ECUC-MODULE-CONFIGURATION-VALUES>
        </AUTOSAR>"#;
        let modules = build(xml);
        assert!(modules.get("M").unwrap().containers[0].parameters.is_empty());
    }

    #[test]
    fn test_symbolic_marker_detection() {
        let xml = r#"<AUTOSAR xmlns="http://www.autosar.org/schema/r4.0">
            <ECUC-MODULE-CONFIGURATION-VALUES>
                <SHORT-NAME>M</SHORT-NAME>
                <ECUC-PARAMETER-VALUE>
                    <DEFINITION-REF>/Def/Sym</DEFINITION-REF>
                    <VALUE>X</VALUE>
                    <IS-SYMBOLIC/>
                </ECUC-PARAMETER-VALUE>
            </ECUC-MODULE-CONFIGURATION-VALUES>
        </AUTOSAR>"#;
        let modules = build(xml);
        let p = &modules.get("M").unwrap().parameters[0];
        assert!(p.is_symbolic);
        assert_eq!(p.kind, ParamKind::Unknown);
    }

    #[test]
    fn test_reference_without_definition_ref_is_dropped() {
        let xml = r#"<AUTOSAR xmlns="http://www.autosar.org/schema/r4.0">
            <ECUC-MODULE-CONFIGURATION-VALUES>
                <SHORT-NAME>M</SHORT-NAME>
                <ECUC-REFERENCE-VALUE>
                    <VALUE-REF>/Some/Target</VALUE-REF>
                </ECUC-REFERENCE-VALUE>
                <ECUC-REFERENCE-VALUE>
                    <DEFINITION-REF>/Def/M/Ref</DEFINITION-REF>
                </ECUC-REFERENCE-VALUE>
            </ECUC-MODULE-CONFIGURATION-VALUES>
        </AUTOSAR>"#;
        let modules = build(xml);
        let refs = &modules.get("M").unwrap().references;
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].name, "Ref");
        assert_eq!(refs[0].value_ref, None);
    }

    #[test]
    fn test_nested_containers_form_owned_tree() {
        let xml = r#"<AUTOSAR xmlns="http://www.autosar.org/schema/r4.0">
            <ECUC-MODULE-CONFIGURATION-VALUES>
                <SHORT-NAME>M</SHORT-NAME>
                <ECUC-CONTAINER-VALUE>
                    <SHORT-NAME>Outer</SHORT-NAME>
                    <SUB-CONTAINERS>
                        <ECUC-CONTAINER-VALUE>
                            <SHORT-NAME>Inner</SHORT-NAME>
                        </ECUC-CONTAINER-VALUE>
                    </SUB-CONTAINERS>
                </ECUC-CONTAINER-VALUE>
            </ECUC-MODULE-CONFIGURATION-VALUES>
        </AUTOSAR>"#;
        let modules = build(xml);
        let m = modules.get("M").unwrap();
        // Flattened module-level search sees both containers.
        assert_eq!(m.containers.len(), 2);
        let outer = &m.containers[0];
        assert_eq!(outer.name, "Outer");
        assert_eq!(outer.sub_containers.len(), 1);
        assert_eq!(outer.sub_containers[0].name, "Inner");
        assert_eq!(outer.depth(), 2);
    }
}
