//! Owned view of script call expressions.
//!
//! The script parser's AST lives in an arena that is dropped right after
//! extraction, so every call the resolver hooks, lint rules and completion
//! provider care about is copied into a [`CallSite`].

use lucarne_carton::CompactString;
use serde::Serialize;

use crate::span::Span;

/// What kind of expression an argument is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ArgumentKind {
    /// A string literal with its cooked value
    StringLiteral { value: CompactString },
    /// Anything the hooks cannot analyze statically
    Other,
}

/// A call argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentNode {
    pub span: Span,
    pub kind: ArgumentKind,
    /// The literal runs to the end of its script region without a closing
    /// quote (text being typed)
    pub unterminated: bool,
}

impl ArgumentNode {
    pub fn string_literal(span: Span, value: impl Into<CompactString>) -> Self {
        Self {
            span,
            kind: ArgumentKind::StringLiteral {
                value: value.into(),
            },
            unterminated: false,
        }
    }

    /// A string literal whose closing quote has not been typed yet.
    pub fn unterminated_literal(span: Span, value: impl Into<CompactString>) -> Self {
        Self {
            unterminated: true,
            ..Self::string_literal(span, value)
        }
    }

    pub fn other(span: Span) -> Self {
        Self {
            span,
            kind: ArgumentKind::Other,
            unterminated: false,
        }
    }

    /// Cooked value when this argument is a string literal.
    #[inline]
    pub fn string_value(&self) -> Option<&str> {
        match &self.kind {
            ArgumentKind::StringLiteral { value } => Some(value.as_str()),
            ArgumentKind::Other => None,
        }
    }

    #[inline]
    pub fn is_string_literal(&self) -> bool {
        matches!(self.kind, ArgumentKind::StringLiteral { .. })
    }

    /// Source text of the argument, quotes included for literals.
    #[inline]
    pub fn raw<'t>(&self, text: &'t str) -> &'t str {
        self.span.source_text(text)
    }

    /// Whether `offset` lies inside the literal's quotes. The end of an
    /// unterminated literal counts as inside.
    #[inline]
    pub fn contains_cursor(&self, offset: u32) -> bool {
        self.span.encloses(offset)
            || (self.unterminated && self.span.start < offset && offset == self.span.end)
    }
}

/// The callee of a call expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Callee {
    pub span: Span,
    /// Source text of the receiver for member callees (`document` in
    /// `document.getElementById`)
    pub object: Option<CompactString>,
    pub object_span: Option<Span>,
    /// Property name for member callees with a static key
    pub property: Option<CompactString>,
}

impl Callee {
    #[inline]
    pub fn is_member(&self) -> bool {
        self.object_span.is_some()
    }
}

/// A call expression found in a script region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallSite {
    pub span: Span,
    pub callee: Callee,
    pub arguments: Vec<ArgumentNode>,
}

impl CallSite {
    #[inline]
    pub fn first_argument(&self) -> Option<&ArgumentNode> {
        self.arguments.first()
    }

    /// Property name of a member callee.
    #[inline]
    pub fn method_name(&self) -> Option<&str> {
        self.callee.property.as_deref()
    }

    /// First string-literal argument with `offset` inside its quotes.
    pub fn literal_argument_at(&self, offset: u32) -> Option<&ArgumentNode> {
        self.arguments
            .iter()
            .find(|arg| arg.is_string_literal() && arg.contains_cursor(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_element_by_id() -> CallSite {
        // document.getElementById("app")
        CallSite {
            span: Span::new(0, 30),
            callee: Callee {
                span: Span::new(0, 23),
                object: Some("document".into()),
                object_span: Some(Span::new(0, 8)),
                property: Some("getElementById".into()),
            },
            arguments: vec![ArgumentNode::string_literal(Span::new(24, 29), "app")],
        }
    }

    #[test]
    fn test_method_name() {
        let call = get_element_by_id();
        assert!(call.callee.is_member());
        assert_eq!(call.method_name(), Some("getElementById"));
        assert_eq!(call.first_argument().and_then(|a| a.string_value()), Some("app"));
    }

    #[test]
    fn test_literal_argument_at_excludes_quotes() {
        let call = get_element_by_id();
        assert!(call.literal_argument_at(24).is_none());
        assert!(call.literal_argument_at(25).is_some());
        assert!(call.literal_argument_at(28).is_some());
        assert!(call.literal_argument_at(29).is_none());
    }

    #[test]
    fn test_unterminated_literal_includes_its_end() {
        let mut call = get_element_by_id();
        // document.getElementById("ap
        call.arguments = vec![ArgumentNode::unterminated_literal(Span::new(24, 27), "ap")];
        assert!(call.literal_argument_at(24).is_none());
        assert!(call.literal_argument_at(27).is_some());
        assert!(call.literal_argument_at(28).is_none());
    }

    #[test]
    fn test_other_argument_has_no_value() {
        let arg = ArgumentNode::other(Span::new(3, 8));
        assert!(!arg.is_string_literal());
        assert_eq!(arg.string_value(), None);
    }
}
