//! Browser resolver hooks.
//!
//! - [`IdentifierLookup`] backs `getElementById`: resolves the id against the
//!   document's identifier index and types the call as the owner's element
//! - [`ElementFactory`] backs `createElement`: types the call from the tag
//!   name argument
//! - [`SelectorLookup`] is the effect of `querySelector(All)`: only marks the
//!   argument for selector validation
//!
//! All of them degrade to the generic element type (or nothing) when the
//! argument is not a string literal.

use lucarne_relief::ArgumentNode;

use crate::definitions::element_type_for_tag;
use crate::overrides::{CREATE_ELEMENT, GET_ELEMENT_BY_ID, QUERY_SELECTOR};
use crate::registry::{CallContext, CustomFunction};
use crate::types::{Provenance, TypeValue};

/// First argument when it is a string literal.
fn literal_argument(nodes: &[ArgumentNode]) -> Option<(&ArgumentNode, &str)> {
    let node = nodes.first()?;
    node.string_value().map(|value| (node, value))
}

pub struct IdentifierLookup;

impl CustomFunction for IdentifierLookup {
    fn name(&self) -> &'static str {
        GET_ELEMENT_BY_ID
    }

    fn call(
        &self,
        cx: &mut CallContext<'_>,
        _receiver: Option<&TypeValue>,
        _args: &[TypeValue],
        nodes: &[ArgumentNode],
    ) -> Option<TypeValue> {
        let Some(index) = cx.document.identifier_index.as_ref() else {
            return Some(TypeValue::HTML_ELEMENT);
        };
        let Some((node, id)) = literal_argument(nodes) else {
            return Some(TypeValue::HTML_ELEMENT);
        };

        cx.annotations.mark_identifier_lookup(node.span);
        let Some(entry) = index.get(id) else {
            tracing::trace!(id, "element id not declared");
            return Some(TypeValue::HTML_ELEMENT);
        };

        let ty = element_type_for_tag(&entry.owner_tag, cx.definitions);
        cx.annotations.resolve(node.span, entry.clone());
        // The generic fallback stays provenance-free
        if ty.is_generic_element() {
            return Some(ty);
        }
        Some(ty.with_provenance(Provenance::from_entry(entry)))
    }
}

pub struct ElementFactory;

impl CustomFunction for ElementFactory {
    fn name(&self) -> &'static str {
        CREATE_ELEMENT
    }

    fn call(
        &self,
        cx: &mut CallContext<'_>,
        _receiver: Option<&TypeValue>,
        _args: &[TypeValue],
        nodes: &[ArgumentNode],
    ) -> Option<TypeValue> {
        let ty = match literal_argument(nodes) {
            Some((_, tag)) => element_type_for_tag(tag, cx.definitions),
            None => TypeValue::HTML_ELEMENT,
        };
        Some(ty)
    }
}

pub struct SelectorLookup;

impl CustomFunction for SelectorLookup {
    fn name(&self) -> &'static str {
        QUERY_SELECTOR
    }

    fn call(
        &self,
        cx: &mut CallContext<'_>,
        _receiver: Option<&TypeValue>,
        _args: &[TypeValue],
        nodes: &[ArgumentNode],
    ) -> Option<TypeValue> {
        if cx.document.identifier_index.is_none() {
            return None;
        }
        if let Some((node, _)) = literal_argument(nodes) {
            cx.annotations.mark_selector_lookup(node.span);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use lucarne_relief::{AnnotationTable, SourceDocument, Span};

    use super::*;
    use crate::definitions::BrowserDefinitions;

    fn run(
        function: &dyn CustomFunction,
        document: &SourceDocument,
        nodes: &[ArgumentNode],
    ) -> (Option<TypeValue>, AnnotationTable) {
        let mut annotations = AnnotationTable::new();
        let mut cx = CallContext {
            document,
            definitions: &BrowserDefinitions,
            annotations: &mut annotations,
        };
        let ty = function.call(&mut cx, None, &[], nodes);
        (ty, annotations)
    }

    fn markup() -> SourceDocument {
        lucarne_atelier::project(r#"<div id="app"></div><x-card id="card"></x-card>"#, "index.html")
    }

    #[test]
    fn test_identifier_lookup_resolves() {
        let doc = markup();
        let arg = ArgumentNode::string_literal(Span::new(70, 75), "app");
        let (ty, annotations) = run(&IdentifierLookup, &doc, &[arg]);

        let ty = ty.unwrap();
        assert_eq!(ty.name(), "HTMLDivElement");
        let provenance = ty.provenance().unwrap();
        assert_eq!(provenance.origin_file, "index.html");
        assert_eq!(provenance.origin_entry.owner_tag, "div");
        assert!(TypeValue::HTML_ELEMENT.provenance().is_none());

        let span = Span::new(70, 75);
        assert!(annotations.is_identifier_lookup(span));
        assert_eq!(annotations.resolved(span).unwrap().owner_tag, "div");
    }

    #[test]
    fn test_identifier_lookup_unknown_tag_falls_back() {
        let doc = markup();
        let arg = ArgumentNode::string_literal(Span::new(70, 76), "card");
        let (ty, annotations) = run(&IdentifierLookup, &doc, &[arg]);

        let ty = ty.unwrap();
        assert!(ty.is_generic_element());
        assert!(ty.provenance().is_none());
        assert!(annotations.resolved(Span::new(70, 76)).is_some());
    }

    #[test]
    fn test_identifier_lookup_unknown_id_is_still_marked() {
        let doc = markup();
        let span = Span::new(70, 79);
        let (ty, annotations) = run(
            &IdentifierLookup,
            &doc,
            &[ArgumentNode::string_literal(span, "missing")],
        );

        assert!(ty.unwrap().is_generic_element());
        assert!(annotations.is_identifier_lookup(span));
        assert!(annotations.resolved(span).is_none());
    }

    #[test]
    fn test_identifier_lookup_without_index_or_literal() {
        let script = SourceDocument::pass_through("app.js", "document.getElementById('app')");
        let span = Span::new(24, 29);
        let (ty, annotations) = run(
            &IdentifierLookup,
            &script,
            &[ArgumentNode::string_literal(span, "app")],
        );
        assert!(ty.unwrap().is_generic_element());
        assert!(annotations.is_empty());

        let doc = markup();
        let (ty, annotations) = run(&IdentifierLookup, &doc, &[ArgumentNode::other(span)]);
        assert!(ty.unwrap().is_generic_element());
        assert!(annotations.is_empty());

        let (ty, _) = run(&IdentifierLookup, &doc, &[]);
        assert!(ty.unwrap().is_generic_element());
    }

    #[test]
    fn test_element_factory() {
        let doc = SourceDocument::pass_through("app.js", "");
        let (ty, _) = run(
            &ElementFactory,
            &doc,
            &[ArgumentNode::string_literal(Span::new(0, 8), "canvas")],
        );
        assert_eq!(ty.unwrap().name(), "HTMLCanvasElement");

        let (ty, _) = run(
            &ElementFactory,
            &doc,
            &[ArgumentNode::string_literal(Span::new(0, 7), "blink")],
        );
        assert!(ty.unwrap().is_generic_element());

        let (ty, _) = run(&ElementFactory, &doc, &[ArgumentNode::other(Span::new(0, 3))]);
        assert!(ty.unwrap().is_generic_element());
    }

    #[test]
    fn test_selector_lookup_only_marks() {
        let doc = markup();
        let span = Span::new(60, 66);
        let (ty, annotations) = run(
            &SelectorLookup,
            &doc,
            &[ArgumentNode::string_literal(span, "#app")],
        );
        assert!(ty.is_none());
        assert!(annotations.is_selector_lookup(span));
        assert!(!annotations.is_identifier_lookup(span));

        let script = SourceDocument::pass_through("app.js", "");
        let (_, annotations) = run(
            &SelectorLookup,
            &script,
            &[ArgumentNode::string_literal(span, "#app")],
        );
        assert!(annotations.is_empty());
    }
}
