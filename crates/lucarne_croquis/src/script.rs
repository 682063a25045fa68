//! Call-site extraction from script regions.
//!
//! Every script region is parsed on its own with OXC so that adjacent event
//! handlers never run into each other. Spans are shifted by the region start
//! and are therefore offsets into the raw document.
//!
//! A region that does not parse is usually being typed. Its open string,
//! comment and brackets are closed at the end and it is parsed once more;
//! spans reaching into the appended text are cut back to the region.

use oxc_allocator::Allocator;
use oxc_ast::ast::{Argument, CallExpression, Expression};
use oxc_ast_visit::{walk, Visit};
use oxc_parser::{ParseOptions, Parser, ParserReturn};
use oxc_span::{GetSpan, SourceType};

use lucarne_carton::CompactString;
use lucarne_relief::{ArgumentNode, CallSite, Callee, ScriptRegion, SourceDocument, Span};

/// Collect the calls of every script region, inner calls before outer ones.
pub fn collect_call_sites(document: &SourceDocument) -> Vec<CallSite> {
    let mut calls = Vec::new();
    for region in &document.script_regions {
        collect_region(document, region, &mut calls);
    }
    calls
}

fn collect_region(document: &SourceDocument, region: &ScriptRegion, calls: &mut Vec<CallSite>) {
    let source = document.region_text(region);
    if source.trim().is_empty() {
        return;
    }

    let allocator = Allocator::default();
    let ret = parse(&allocator, source);
    if ret.errors.is_empty() {
        CallCollector::new(source, source, region.span.start, calls).visit_program(&ret.program);
        return;
    }

    // Text being typed: close what is still open and try once more
    if let Some(repaired) = close_open_constructs(source) {
        let repaired_ret = parse(&allocator, &repaired);
        if !repaired_ret.panicked {
            tracing::trace!(
                file = %document.name,
                start = region.span.start,
                closed = &repaired[source.len()..],
                "script region parsed after closing open constructs"
            );
            CallCollector::new(&repaired, source, region.span.start, calls)
                .visit_program(&repaired_ret.program);
            return;
        }
    }

    if ret.panicked {
        tracing::debug!(
            file = %document.name,
            start = region.span.start,
            errors = ret.errors.len(),
            "script region failed to parse"
        );
        return;
    }
    CallCollector::new(source, source, region.span.start, calls).visit_program(&ret.program);
}

fn parse<'a>(allocator: &'a Allocator, source: &'a str) -> ParserReturn<'a> {
    let options = ParseOptions {
        allow_return_outside_function: true,
        ..ParseOptions::default()
    };
    Parser::new(allocator, source, SourceType::cjs())
        .with_options(options)
        .parse()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Code,
    Str(u8),
    LineComment,
    BlockComment,
}

/// `source` followed by whatever closes the string, comment and brackets
/// left open at its end. `None` when nothing is open.
///
/// Only appends, so every offset into `source` stays valid in the result.
fn close_open_constructs(source: &str) -> Option<String> {
    let bytes = source.as_bytes();
    let mut state = Scan::Code;
    let mut closers: Vec<u8> = Vec::new();

    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        match state {
            Scan::Code => match b {
                b'"' | b'\'' | b'`' => state = Scan::Str(b),
                b'/' if bytes.get(i + 1) == Some(&b'/') => {
                    state = Scan::LineComment;
                    i += 1;
                }
                b'/' if bytes.get(i + 1) == Some(&b'*') => {
                    state = Scan::BlockComment;
                    i += 1;
                }
                b'(' => closers.push(b')'),
                b'[' => closers.push(b']'),
                b'{' => closers.push(b'}'),
                b')' | b']' | b'}' => {
                    if closers.last() == Some(&b) {
                        closers.pop();
                    }
                }
                _ => {}
            },
            Scan::Str(quote) => match b {
                b'\\' => i += 1,
                b'\n' if quote != b'`' => state = Scan::Code,
                _ if b == quote => state = Scan::Code,
                _ => {}
            },
            Scan::LineComment => {
                if b == b'\n' {
                    state = Scan::Code;
                }
            }
            Scan::BlockComment => {
                if b == b'*' && bytes.get(i + 1) == Some(&b'/') {
                    state = Scan::Code;
                    i += 1;
                }
            }
        }
        i += 1;
    }

    let mut suffix = String::new();
    match state {
        Scan::Str(quote) => suffix.push(quote as char),
        Scan::LineComment => suffix.push('\n'),
        Scan::BlockComment => suffix.push_str("*/"),
        Scan::Code => {}
    }
    suffix.extend(closers.iter().rev().map(|&c| c as char));

    if suffix.is_empty() {
        return None;
    }
    Some(format!("{source}{suffix}"))
}

/// Visitor copying call expressions out of the arena.
struct CallCollector<'s, 'c> {
    /// Text the program was parsed from
    source: &'s str,
    /// Length of the region text; anything past it was appended to close
    /// open constructs
    limit: u32,
    /// Region start in the document
    base: u32,
    calls: &'c mut Vec<CallSite>,
}

impl<'s, 'c> CallCollector<'s, 'c> {
    fn new(source: &'s str, region_text: &str, base: u32, calls: &'c mut Vec<CallSite>) -> Self {
        Self {
            source,
            limit: region_text.len() as u32,
            base,
            calls,
        }
    }

    /// Document span of a parser span, cut back to the region.
    #[inline]
    fn shift(&self, span: oxc_span::Span) -> Span {
        Span::new(
            span.start.min(self.limit) + self.base,
            span.end.min(self.limit) + self.base,
        )
    }

    fn callee(&self, callee: &Expression<'_>) -> Callee {
        let span = self.shift(callee.span());
        let (object, property) = match callee.get_inner_expression() {
            Expression::StaticMemberExpression(member) => (
                &member.object,
                Some(CompactString::from(member.property.name.as_str())),
            ),
            Expression::ComputedMemberExpression(member) => {
                let property = match &member.expression {
                    Expression::StringLiteral(key) => Some(CompactString::from(key.value.as_str())),
                    _ => None,
                };
                (&member.object, property)
            }
            _ => {
                return Callee {
                    span,
                    object: None,
                    object_span: None,
                    property: None,
                }
            }
        };

        let object_span = object.span();
        Callee {
            span,
            object: Some(CompactString::from(object_span.source_text(self.source))),
            object_span: Some(self.shift(object_span)),
            property,
        }
    }

    fn argument(&self, argument: &Argument<'_>) -> ArgumentNode {
        match argument {
            Argument::StringLiteral(lit) if lit.span.end > self.limit => {
                ArgumentNode::unterminated_literal(self.shift(lit.span), lit.value.as_str())
            }
            Argument::StringLiteral(lit) => {
                ArgumentNode::string_literal(self.shift(lit.span), lit.value.as_str())
            }
            other => ArgumentNode::other(self.shift(other.span())),
        }
    }
}

impl<'a> Visit<'a> for CallCollector<'_, '_> {
    fn visit_call_expression(&mut self, it: &CallExpression<'a>) {
        walk::walk_call_expression(self, it);

        let call = CallSite {
            span: self.shift(it.span),
            callee: self.callee(&it.callee),
            arguments: it.arguments.iter().map(|arg| self.argument(arg)).collect(),
        };
        self.calls.push(call);
    }
}
