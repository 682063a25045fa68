//! Call-type inference over a document.
//!
//! Walks the document's call sites (inner calls first), dispatches calls to
//! overridden builtins to their custom functions, and records which lint
//! rules the overrides ask for. The result lives as long as one analysis of
//! the document.

use lucarne_carton::FxHashMap;
use lucarne_relief::{AnnotationTable, ArgumentKind, CallSite, SourceDocument, Span};

use crate::definitions::TypeDefinitions;
use crate::overrides::BuiltinOverrides;
use crate::registry::{CallContext, FunctionRegistry};
use crate::script::collect_call_sites;
use crate::types::TypeValue;

/// A lint rule to run on one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintRequest {
    /// Index into [`Inference::calls`]
    pub call: usize,
    pub rule: &'static str,
}

/// Outcome of inferring one document.
#[derive(Debug, Default)]
pub struct Inference {
    pub calls: Vec<CallSite>,
    pub annotations: AnnotationTable,
    pub lints: Vec<LintRequest>,
    call_types: FxHashMap<Span, TypeValue>,
}

impl Inference {
    /// Type a custom function gave to the call at `span`.
    #[inline]
    pub fn call_type(&self, span: Span) -> Option<&TypeValue> {
        self.call_types.get(&span)
    }

    /// Innermost call whose span covers `offset`.
    pub fn call_at(&self, offset: u32) -> Option<&CallSite> {
        self.calls
            .iter()
            .filter(|call| call.span.covers(offset))
            .min_by_key(|call| call.span.len())
    }

    /// Calls paired with the lint rule requested for them.
    pub fn lint_targets(&self) -> impl Iterator<Item = (&CallSite, &'static str)> {
        self.lints
            .iter()
            .filter_map(|req| self.calls.get(req.call).map(|call| (call, req.rule)))
    }
}

/// Runs the overrides of a plugin over documents.
pub struct Resolver<'r> {
    overrides: &'r BuiltinOverrides,
    functions: &'r FunctionRegistry,
    definitions: &'r dyn TypeDefinitions,
}

impl<'r> Resolver<'r> {
    pub fn new(
        overrides: &'r BuiltinOverrides,
        functions: &'r FunctionRegistry,
        definitions: &'r dyn TypeDefinitions,
    ) -> Self {
        Self {
            overrides,
            functions,
            definitions,
        }
    }

    /// Extract the document's calls and infer them.
    pub fn infer(&self, document: &SourceDocument) -> Inference {
        self.infer_calls(document, collect_call_sites(document))
    }

    /// Infer already extracted calls.
    pub fn infer_calls(&self, document: &SourceDocument, calls: Vec<CallSite>) -> Inference {
        let mut annotations = AnnotationTable::new();
        let mut call_types: FxHashMap<Span, TypeValue> = FxHashMap::default();
        let mut lints = Vec::new();

        for (i, call) in calls.iter().enumerate() {
            let Some(entry) = call.method_name().and_then(|m| self.overrides.find(m)) else {
                continue;
            };

            let receiver = call
                .callee
                .object_span
                .and_then(|span| call_types.get(&span))
                .cloned();
            let args: Vec<TypeValue> = call
                .arguments
                .iter()
                .map(|arg| match &arg.kind {
                    ArgumentKind::StringLiteral { .. } => TypeValue::STRING,
                    ArgumentKind::Other => call_types
                        .get(&arg.span)
                        .cloned()
                        .unwrap_or(TypeValue::UNKNOWN),
                })
                .collect();

            let mut cx = CallContext {
                document,
                definitions: self.definitions,
                annotations: &mut annotations,
            };

            if let Some(name) = entry.custom {
                match self.functions.get(name) {
                    Some(function) => {
                        let ty = function.call(&mut cx, receiver.as_ref(), &args, &call.arguments);
                        if let Some(ty) = ty {
                            tracing::trace!(method = entry.method, ty = ty.name(), "call typed");
                            call_types.insert(call.span, ty);
                        }
                    }
                    None => tracing::debug!(function = name, "custom function not registered"),
                }
            }

            for &name in entry.effects {
                match self.functions.get(name) {
                    Some(function) => {
                        function.call(&mut cx, receiver.as_ref(), &args, &call.arguments);
                    }
                    None => tracing::debug!(function = name, "effect not registered"),
                }
            }

            if let Some(rule) = entry.lint {
                lints.push(LintRequest { call: i, rule });
            }
        }

        tracing::debug!(
            file = %document.name,
            calls = calls.len(),
            annotated = annotations.len(),
            "inference done"
        );

        Inference {
            calls,
            annotations,
            lints,
            call_types,
        }
    }
}
