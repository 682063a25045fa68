//! Element id completion.
//!
//! Completes the string literal argument of an id lookup with the ids the
//! document declares. The callee is not matched by name: any member call
//! whose literal argument inference marked as an id lookup qualifies, so
//! aliases of `getElementById` work too.

use lucarne_carton::CompactString;

use super::IdeContext;
use crate::query::{Completion, CompletionEntry, CompletionQuery, CompletionResult};

/// A completion source for a cursor position.
pub trait CompletionProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// `None` when the cursor is not somewhere this provider completes.
    fn complete(&self, ctx: &IdeContext<'_>, query: &CompletionQuery) -> Option<CompletionResult>;
}

/// Completes `getElementById('|')` with declared ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementIdCompletion;

impl CompletionProvider for ElementIdCompletion {
    fn name(&self) -> &'static str {
        "browser-element-id"
    }

    fn complete(&self, ctx: &IdeContext<'_>, query: &CompletionQuery) -> Option<CompletionResult> {
        let text = ctx.document.raw_text.as_str();
        let mut word_end = query.end.resolve(text)?;

        let call = ctx.inference.call_at(word_end)?;
        if !call.callee.is_member() || call.arguments.is_empty() {
            return None;
        }
        let arg = call.literal_argument_at(word_end)?;
        if !ctx.inference.annotations.is_identifier_lookup(arg.span) {
            return None;
        }

        let raw = arg.raw(text);
        let quote = raw.chars().next()?;
        let mut word = raw.get(1..(word_end - arg.span.start) as usize).unwrap_or_default();
        if let Some(stripped) = word.strip_suffix(quote) {
            word = stripped;
        }

        let completions = complete_ids(ctx, query, word, quote);

        // Swallow the closing quote right after the cursor
        if arg.span.end == word_end + 1 && text.as_bytes().get(word_end as usize) == Some(&(quote as u8)) {
            word_end += 1;
        }

        tracing::trace!(word, count = completions.len(), "element id completions");
        Some(CompletionResult {
            start: query.output_position(text, arg.span.start),
            end: query.output_position(text, word_end),
            is_property: false,
            is_object_key: false,
            completions,
        })
    }
}

fn complete_ids(
    ctx: &IdeContext<'_>,
    query: &CompletionQuery,
    word: &str,
    quote: char,
) -> Vec<Completion> {
    let Some(index) = ctx.document.identifier_index.as_ref() else {
        return Vec::new();
    };
    let word = if query.case_insensitive {
        word.to_lowercase()
    } else {
        word.to_string()
    };
    let filtering = query.filter && !word.is_empty();

    index
        .names()
        .filter(|name| !name.is_empty())
        .filter(|name| {
            if !filtering {
                return true;
            }
            if query.case_insensitive {
                name.to_lowercase().starts_with(&word)
            } else {
                name.starts_with(&word)
            }
        })
        .map(|name| {
            let quoted = quote_name(name, quote);
            if !query.wraps_as_objects() {
                return Completion::Name(quoted);
            }
            Completion::Entry(CompletionEntry {
                name: quoted,
                display_name: CompactString::from(name),
                ty: query.types.then_some("Attr"),
                origin: query.origins.then(|| ctx.document.name.clone()),
            })
        })
        .collect()
}

/// JSON-quote `name`, switching to single quotes when the literal uses them.
fn quote_name(name: &str, quote: char) -> CompactString {
    let json = serde_json::Value::from(name).to_string();
    if quote != '\'' {
        return CompactString::from(json);
    }
    let inner = &json[1..json.len() - 1];
    let mut quoted = CompactString::with_capacity(inner.len() + 2);
    quoted.push('\'');
    quoted.push_str(&inner.replace('\'', "\\'"));
    quoted.push('\'');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ide::test_utils::analyze;
    use crate::query::QueryPosition;
    use lucarne_carton::LineCh;

    const FRUIT: &str = r#"<li id="apple"></li><li id="Apricot"></li><li id="apricot"></li><li id="banana"></li>
<script>document.getElementById("ap")</script>"#;

    fn complete(raw: &str, query: &CompletionQuery) -> Option<CompletionResult> {
        let (doc, inference) = analyze(raw, "index.html");
        ElementIdCompletion.complete(&IdeContext::new(&doc, &inference), query)
    }

    fn names(result: &CompletionResult) -> Vec<&str> {
        result.completions.iter().map(|c| c.insert_text()).collect()
    }

    fn cursor_after(raw: &str, needle: &str) -> u32 {
        (raw.find(needle).unwrap() + needle.len()) as u32
    }

    #[test]
    fn test_prefix_filter() {
        let end = cursor_after(FRUIT, "(\"ap");
        let result = complete(FRUIT, &CompletionQuery::at(end)).unwrap();
        assert_eq!(names(&result), ["\"apple\"", "\"apricot\""]);

        let literal = FRUIT.find("\"ap\"").unwrap() as u32;
        assert_eq!(result.start, QueryPosition::Offset(literal));
        // The closing quote right after the cursor is replaced too
        assert_eq!(result.end, QueryPosition::Offset(end + 1));
    }

    #[test]
    fn test_case_insensitive() {
        let mut query = CompletionQuery::at(cursor_after(FRUIT, "(\"ap"));
        query.case_insensitive = true;
        let result = complete(FRUIT, &query).unwrap();
        assert_eq!(names(&result), ["\"apple\"", "\"Apricot\"", "\"apricot\""]);
    }

    #[test]
    fn test_without_filter() {
        let mut query = CompletionQuery::at(cursor_after(FRUIT, "(\"ap"));
        query.filter = false;
        let result = complete(FRUIT, &query).unwrap();
        assert_eq!(result.completions.len(), 4);
    }

    #[test]
    fn test_empty_word_offers_everything() {
        let raw = "<b id=one></b><i id=two></i><script>document.getElementById('')</script>";
        let end = cursor_after(raw, "('");
        let result = complete(raw, &CompletionQuery::at(end)).unwrap();
        assert_eq!(names(&result), ["'one'", "'two'"]);
        assert_eq!(result.end, QueryPosition::Offset(end + 1));
    }

    #[test]
    fn test_single_quotes_are_escaped() {
        let raw = r#"<p id="it's"></p><script>document.getElementById('i')</script>"#;
        let result = complete(raw, &CompletionQuery::at(cursor_after(raw, "('i"))).unwrap();
        assert_eq!(names(&result), [r"'it\'s'"]);

        assert_eq!(quote_name("say \"hi\"", '"'), r#""say \"hi\"""#);
    }

    #[test]
    fn test_metadata() {
        let mut query = CompletionQuery::at(cursor_after(FRUIT, "(\"ap"));
        query.types = true;
        query.origins = true;
        let result = complete(FRUIT, &query).unwrap();
        assert_eq!(
            result.completions[0],
            Completion::Entry(CompletionEntry {
                name: "\"apple\"".into(),
                display_name: "apple".into(),
                ty: Some("Attr"),
                origin: Some("index.html".into()),
            })
        );
    }

    #[test]
    fn test_line_ch_positions() {
        let mut query = CompletionQuery::at(QueryPosition::LineCh(LineCh::new(1, 35)));
        query.line_char_positions = true;
        let result = complete(FRUIT, &query).unwrap();
        assert_eq!(names(&result), ["\"apple\"", "\"apricot\""]);
        assert_eq!(result.start, QueryPosition::LineCh(LineCh::new(1, 32)));
        assert_eq!(result.end, QueryPosition::LineCh(LineCh::new(1, 36)));
    }

    #[test]
    fn test_outside_id_lookup() {
        let raw = "<b id=one></b><script>document.querySelector('o'); f('o')</script>";
        assert!(complete(raw, &CompletionQuery::at(cursor_after(raw, "querySelector('o"))).is_none());
        assert!(complete(raw, &CompletionQuery::at(cursor_after(raw, "f('o"))).is_none());
        assert!(complete(raw, &CompletionQuery::at(3)).is_none());
    }

    #[test]
    fn test_while_typing_an_unclosed_call() {
        let raw = r#"<li id="apple"></li><li id="banana"></li><script>document.getElementById("ap</script>"#;
        let end = cursor_after(raw, "(\"ap");
        let result = complete(raw, &CompletionQuery::at(end)).unwrap();
        assert_eq!(names(&result), ["\"apple\""]);
        assert_eq!(result.start, QueryPosition::Offset(end - 3));
        assert_eq!(result.end, QueryPosition::Offset(end));

        let raw = r#"<li id="apple"></li><script>document.getElementById("ap"</script>"#;
        let end = cursor_after(raw, "(\"ap");
        let result = complete(raw, &CompletionQuery::at(end)).unwrap();
        assert_eq!(names(&result), ["\"apple\""]);
        assert_eq!(result.end, QueryPosition::Offset(end + 1));
    }
}
