//! Type under the cursor.
//!
//! String literals resolved to an `id` declaration get a fresh copy of the
//! shared string type carrying the declaration as its origin, which is what
//! jump-to-definition follows.

use lucarne_carton::CompactString;
use lucarne_croquis::{Provenance, TypeValue};
use lucarne_relief::Span;
use serde::Serialize;

use super::IdeContext;

/// Type-at service.
pub struct TypeAtService;

impl TypeAtService {
    /// Type of the string literal or call under `offset`.
    pub fn type_at(ctx: &IdeContext<'_>, offset: u32) -> Option<TypeValue> {
        let call = ctx.inference.call_at(offset)?;

        if let Some(arg) = call.literal_argument_at(offset) {
            let ty = match ctx.inference.annotations.resolved(arg.span) {
                Some(entry) => TypeValue::STRING.with_provenance(Provenance::from_entry(entry)),
                None => TypeValue::STRING,
            };
            return Some(ty);
        }

        let ty = ctx
            .inference
            .call_type(call.span)
            .cloned()
            .unwrap_or(TypeValue::UNKNOWN);
        Some(ty)
    }

    /// Serializable form of [`Self::type_at`].
    pub fn info_at(ctx: &IdeContext<'_>, offset: u32) -> Option<TypeInfo> {
        Self::type_at(ctx, offset).map(|ty| TypeInfo::from(&ty))
    }
}

/// Type description sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeInfo {
    #[serde(rename = "type")]
    pub name: CompactString,
    /// File declaring the origin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<CompactString>,
    /// Span of the `id` attribute value the type came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_span: Option<Span>,
}

impl From<&TypeValue> for TypeInfo {
    fn from(ty: &TypeValue) -> Self {
        let provenance = ty.provenance();
        Self {
            name: CompactString::from(ty.name()),
            origin: provenance.map(|p| p.origin_file.clone()),
            origin_span: provenance.map(|p| p.origin_entry.span),
        }
    }
}
