//! UnknownElementId
//!
//! Flags `getElementById` calls whose id is not declared by any `id`
//! attribute of the document.
//!
//! ## Examples
//!
//! ### Invalid
//! ```html
//! <div id="app"></div>
//! <script>document.getElementById("ap")</script>
//! ```
//!
//! ### Valid
//! ```html
//! <div id="app"></div>
//! <script>document.getElementById("app")</script>
//! ```

use lucarne_croquis::VALIDATE_ELEMENT_ID;
use lucarne_relief::CallSite;

use crate::config::UNKNOWN_ELEMENT_ID;
use crate::context::LintContext;
use crate::rule::{Rule, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: VALIDATE_ELEMENT_ID,
    config_key: UNKNOWN_ELEMENT_ID,
    description: "Disallow looking up element ids the document does not declare",
};

pub struct UnknownElementId;

impl Rule for UnknownElementId {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check_call(&self, ctx: &mut LintContext<'_>, call: &CallSite) {
        let Some(arg) = call.first_argument() else {
            return;
        };
        if !ctx.annotations.is_identifier_lookup(arg.span)
            || ctx.annotations.resolved(arg.span).is_some()
        {
            return;
        }
        let Some(rule) = ctx.get_rule(META.config_key) else {
            return;
        };

        let value = arg.string_value().unwrap_or_default();
        ctx.report(
            META.config_key,
            rule.severity,
            format!("Unknown element id '{value}'"),
            arg.span.start,
            arg.span.end,
        );
    }
}
