// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ecuscan contributors

//! Namespace-aware view over a parsed AUTOSAR XML tree
//!
//! The analysis engine never touches the filesystem; it consumes an
//! [`ArxmlDocument`] built from an already-parsed [`roxmltree::Document`].
//! All queries are depth-unbounded descendant searches by qualified tag
//! name, which is how ECUC structures are located regardless of packaging
//! depth (`AR-PACKAGES` nesting varies between tool chains).

use roxmltree::{Document, Node};

/// Default AUTOSAR r4.0 schema namespace, used when no mapping is supplied.
pub const AUTOSAR_R40_NS: &str = "http://www.autosar.org/schema/r4.0";

/// Qualified element names the engine consumes.
pub mod tag {
    pub const MODULE_CONFIGURATION: &str = "ECUC-MODULE-CONFIGURATION-VALUES";
    pub const CONTAINER_VALUE: &str = "ECUC-CONTAINER-VALUE";
    pub const PARAMETER_VALUE: &str = "ECUC-PARAMETER-VALUE";
    pub const NUMERICAL_PARAM_VALUE: &str = "ECUC-NUMERICAL-PARAM-VALUE";
    pub const TEXTUAL_PARAM_VALUE: &str = "ECUC-TEXTUAL-PARAM-VALUE";
    pub const REFERENCE_VALUE: &str = "ECUC-REFERENCE-VALUE";
    pub const SHORT_NAME: &str = "SHORT-NAME";
    pub const DEFINITION_REF: &str = "DEFINITION-REF";
    pub const VALUE: &str = "VALUE";
    pub const VALUE_REF: &str = "VALUE-REF";
    pub const IS_SYMBOLIC: &str = "IS-SYMBOLIC";
}

/// Borrowed view over a parsed ARXML tree plus its resolved namespace.
pub struct ArxmlDocument<'a> {
    root: Node<'a, 'a>,
    namespace: String,
}

impl<'a> ArxmlDocument<'a> {
    /// Wrap a parsed document using the default AUTOSAR r4.0 namespace.
    pub fn new(doc: &'a Document<'a>) -> Self {
        Self::with_namespace(doc, AUTOSAR_R40_NS)
    }

    /// Wrap a parsed document with an explicit namespace URI.
    pub fn with_namespace(doc: &'a Document<'a>, namespace: impl Into<String>) -> Self {
        Self {
            root: doc.root_element(),
            namespace: namespace.into(),
        }
    }

    /// Root element of the document.
    pub fn root(&self) -> Node<'a, 'a> {
        self.root
    }

    /// Namespace URI this view resolves qualified names against.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// True when the root element looks like an AUTOSAR document.
    pub fn is_autosar(&self) -> bool {
        self.root.tag_name().name() == "AUTOSAR"
    }

    /// Check whether a node carries the given qualified tag name.
    ///
    /// Elements in no namespace also match, so namespace-stripped fixtures
    /// analyze identically; elements in a foreign namespace never match.
    pub fn has_tag(&self, node: Node, name: &str) -> bool {
        let tag = node.tag_name();
        tag.name() == name && tag.namespace().map_or(true, |ns| ns == self.namespace)
    }

    /// Depth-unbounded search for descendants with the given qualified name.
    /// The scope element itself is excluded.
    pub fn descendants_named<'b>(
        &'b self,
        scope: Node<'a, 'a>,
        name: &'b str,
    ) -> impl Iterator<Item = Node<'a, 'a>> + 'b {
        scope
            .descendants()
            .filter(move |n| n.is_element() && n.id() != scope.id() && self.has_tag(*n, name))
    }

    /// First descendant with the given qualified name, in document order.
    pub fn first_descendant(&self, scope: Node<'a, 'a>, name: &str) -> Option<Node<'a, 'a>> {
        self.descendants_named(scope, name).next()
    }

    /// Text of the first descendant with the given qualified name.
    pub fn descendant_text(&self, scope: Node<'a, 'a>, name: &str) -> Option<&'a str> {
        self.first_descendant(scope, name).and_then(|n| n.text())
    }

    /// Direct element children with the given qualified name.
    pub fn children_named<'b>(
        &'b self,
        scope: Node<'a, 'a>,
        name: &'b str,
    ) -> impl Iterator<Item = Node<'a, 'a>> + 'b {
        scope
            .children()
            .filter(move |n| n.is_element() && self.has_tag(*n, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_descendant_search() {
        let xml = r#"<AUTOSAR xmlns="http://www.autosar.org/schema/r4.0">
            <AR-PACKAGES><AR-PACKAGE>
                <SHORT-NAME>Pkg</SHORT-NAME>
                <ELEMENTS>
                    <ECUC-MODULE-CONFIGURATION-VALUES>
                        <SHORT-NAME>Os</SHORT-NAME>
                    </ECUC-MODULE-CONFIGURATION-VALUES>
                </ELEMENTS>
            </AR-PACKAGE></AR-PACKAGES>
        </AUTOSAR>"#;
        let parsed = Document::parse(xml).unwrap();
        let doc = ArxmlDocument::new(&parsed);

        assert!(doc.is_autosar());
        let modules: Vec<_> = doc
            .descendants_named(doc.root(), tag::MODULE_CONFIGURATION)
            .collect();
        assert_eq!(modules.len(), 1);
        assert_eq!(doc.descendant_text(modules[0], tag::SHORT_NAME), Some("Os"));
    }

    #[test]
    fn test_unnamespaced_elements_match() {
        let xml = "<AUTOSAR><ECUC-CONTAINER-VALUE><SHORT-NAME>C</SHORT-NAME></ECUC-CONTAINER-VALUE></AUTOSAR>";
        let parsed = Document::parse(xml).unwrap();
        let doc = ArxmlDocument::new(&parsed);

        assert_eq!(
            doc.descendants_named(doc.root(), tag::CONTAINER_VALUE).count(),
            1
        );
    }

    #[test]
    fn test_foreign_namespace_never_matches() {
        let xml =
            r#"<AUTOSAR xmlns="http://example.org/other"><SHORT-NAME>X</SHORT-NAME></AUTOSAR>"#;
        let parsed = Document::parse(xml).unwrap();
        let doc = ArxmlDocument::new(&parsed);

        assert_eq!(doc.descendant_text(doc.root(), tag::SHORT_NAME), None);
    }

    #[test]
    fn test_scope_excluded_from_own_search() {
        let xml = r#"<AUTOSAR xmlns="http://www.autosar.org/schema/r4.0">
            <ECUC-CONTAINER-VALUE>
                <SHORT-NAME>Outer</SHORT-NAME>
                <ECUC-CONTAINER-VALUE><SHORT-NAME>Inner</SHORT-NAME></ECUC-CONTAINER-VALUE>
            </ECUC-CONTAINER-VALUE>
        </AUTOSAR>"#;
        let parsed = Document::parse(xml).unwrap();
        let doc = ArxmlDocument::new(&parsed);

        let outer = doc
            .first_descendant(doc.root(), tag::CONTAINER_VALUE)
            .unwrap();
        let nested: Vec<_> = doc.descendants_named(outer, tag::CONTAINER_VALUE).collect();
        assert_eq!(nested.len(), 1);
        assert_eq!(doc.descendant_text(nested[0], tag::SHORT_NAME), Some("Inner"));
    }
}
