//! Type values produced by the resolver hooks.
//!
//! A [`TypeValue`] is immutable. Shared values ([`TypeValue::HTML_ELEMENT`],
//! [`TypeValue::STRING`], ...) are plain constants, and attaching provenance
//! always builds a new value, so two call sites never see each other's
//! origin.

use std::sync::Arc;

use lucarne_carton::CompactString;
use lucarne_relief::IdentifierEntry;

/// Generic element interface every element type falls back to.
pub const HTML_ELEMENT: &str = "HTMLElement";

/// Shape of a type value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Nothing is known statically
    Unknown,
    String,
    /// A DOM element with its interface name (`HTMLDivElement`)
    Element { interface: CompactString },
}

/// Where a type value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    /// Name of the file declaring the origin
    pub origin_file: CompactString,
    /// The `id` declaration the value was derived from
    pub origin_entry: IdentifierEntry,
}

impl Provenance {
    pub fn from_entry(entry: &IdentifierEntry) -> Self {
        Self {
            origin_file: entry.source_file.clone(),
            origin_entry: entry.clone(),
        }
    }
}

/// A type value with optional provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeValue {
    kind: TypeKind,
    provenance: Option<Arc<Provenance>>,
}

impl TypeValue {
    pub const UNKNOWN: TypeValue = TypeValue {
        kind: TypeKind::Unknown,
        provenance: None,
    };

    pub const STRING: TypeValue = TypeValue {
        kind: TypeKind::String,
        provenance: None,
    };

    /// The generic element fallback. Never carries provenance.
    pub const HTML_ELEMENT: TypeValue = TypeValue {
        kind: TypeKind::Element {
            interface: CompactString::const_new(HTML_ELEMENT),
        },
        provenance: None,
    };

    pub fn element(interface: impl Into<CompactString>) -> Self {
        Self {
            kind: TypeKind::Element {
                interface: interface.into(),
            },
            provenance: None,
        }
    }

    /// A fresh copy of this value carrying `provenance`.
    #[must_use]
    pub fn with_provenance(&self, provenance: Provenance) -> Self {
        Self {
            kind: self.kind.clone(),
            provenance: Some(Arc::new(provenance)),
        }
    }

    #[inline]
    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    #[inline]
    pub fn provenance(&self) -> Option<&Provenance> {
        self.provenance.as_deref()
    }

    /// Display name (`string`, `HTMLDivElement`, `?`).
    pub fn name(&self) -> &str {
        match &self.kind {
            TypeKind::Unknown => "?",
            TypeKind::String => "string",
            TypeKind::Element { interface } => interface,
        }
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.kind, TypeKind::Element { .. })
    }

    /// The generic `HTMLElement` fallback.
    #[inline]
    pub fn is_generic_element(&self) -> bool {
        matches!(&self.kind, TypeKind::Element { interface } if interface == HTML_ELEMENT)
    }
}
