//! Reference host session.
//!
//! Drives the pipeline the way an analyzer host would: pre-parse hooks turn a
//! file into a [`SourceDocument`], inference runs the resolver hooks over its
//! calls, and lint, completion and type-at requests read the result. Each
//! file keeps exactly one analysis, replaced wholesale when its text changes.

use lucarne_carton::hash::Fingerprint;
use lucarne_carton::{CompactString, FxHashMap};
use lucarne_croquis::{Inference, Resolver};
use lucarne_maestro::{CompletionQuery, CompletionResult, IdeContext, TypeAtService, TypeInfo};
use lucarne_patina::{LintConfig, LintDiagnostic, Linter};
use lucarne_relief::SourceDocument;
use thiserror::Error;

use crate::plugin::PluginRegistry;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown file: {0}")]
    UnknownFile(CompactString),
}

/// One file as last analyzed.
#[derive(Debug)]
pub struct AnalyzedFile {
    /// Fingerprint of the text the analysis was built from
    pub fingerprint: Fingerprint,
    pub document: SourceDocument,
    pub inference: Inference,
}

impl AnalyzedFile {
    #[inline]
    fn ide(&self) -> IdeContext<'_> {
        IdeContext::new(&self.document, &self.inference)
    }
}

/// A set of analyzed files sharing one plugin registry.
pub struct Session {
    registry: PluginRegistry,
    linter: Linter,
    config: LintConfig,
    files: FxHashMap<CompactString, AnalyzedFile>,
}

impl Session {
    pub fn new(mut registry: PluginRegistry, config: LintConfig) -> Self {
        let linter = registry.take_linter();
        Self {
            registry,
            linter,
            config,
            files: FxHashMap::default(),
        }
    }

    /// Session with the browser extension loaded.
    pub fn browser(config: LintConfig) -> Self {
        Self::new(PluginRegistry::browser(), config)
    }

    /// Replace the lint configuration used by later [`Self::lint`] calls.
    pub fn set_config(&mut self, config: LintConfig) {
        self.config = config;
    }

    /// Add or update a file.
    ///
    /// Returns `false` when the text is unchanged and the previous analysis
    /// was kept.
    pub fn add_file(&mut self, name: &str, text: &str) -> bool {
        let fingerprint = Fingerprint::of(text);
        if self
            .files
            .get(name)
            .is_some_and(|file| file.fingerprint == fingerprint)
        {
            tracing::trace!(file = name, "unchanged, keeping analysis");
            return false;
        }

        let document = self
            .registry
            .pre_parse(name, text)
            .unwrap_or_else(|| SourceDocument::pass_through(name, text));
        let inference = Resolver::new(
            self.registry.overrides(),
            self.registry.functions(),
            self.registry.definitions(),
        )
        .infer(&document);

        tracing::debug!(
            file = name,
            markup = document.is_markup(),
            calls = inference.calls.len(),
            "file analyzed"
        );

        self.files.insert(
            CompactString::from(name),
            AnalyzedFile {
                fingerprint,
                document,
                inference,
            },
        );
        true
    }

    /// Forget a file. Returns whether it was known.
    pub fn remove_file(&mut self, name: &str) -> bool {
        self.files.remove(name).is_some()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    pub fn file(&self, name: &str) -> Result<&AnalyzedFile, SessionError> {
        self.files
            .get(name)
            .ok_or_else(|| SessionError::UnknownFile(CompactString::from(name)))
    }

    /// Run the requested lint rules over a file.
    pub fn lint(&self, name: &str) -> Result<Vec<LintDiagnostic>, SessionError> {
        let file = self.file(name)?;
        Ok(self
            .linter
            .lint(&file.document, &file.inference, &self.config))
    }

    /// Ask the completion providers in order; the first answer wins.
    pub fn completions(
        &self,
        name: &str,
        query: &CompletionQuery,
    ) -> Result<Option<CompletionResult>, SessionError> {
        let file = self.file(name)?;
        let ctx = file.ide();
        let result = self.registry.completions().iter().find_map(|provider| {
            let result = provider.complete(&ctx, query)?;
            tracing::trace!(provider = provider.name(), file = name, "completion answered");
            Some(result)
        });
        Ok(result)
    }

    /// Type of the expression under `offset`.
    pub fn type_at(&self, name: &str, offset: u32) -> Result<Option<TypeInfo>, SessionError> {
        let file = self.file(name)?;
        Ok(TypeAtService::info_at(&file.ide(), offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<div id="a"></div><script>document.getElementById("a")</script>"#;

    #[test]
    fn test_unknown_file() {
        let session = Session::browser(LintConfig::default());
        assert_eq!(
            session.lint("nope.html").unwrap_err(),
            SessionError::UnknownFile(CompactString::from("nope.html"))
        );
        assert!(session.type_at("nope.html", 0).is_err());
        assert!(session.completions("nope.html", &CompletionQuery::at(0)).is_err());
    }

    #[test]
    fn test_unchanged_text_is_not_reanalyzed() {
        let mut session = Session::browser(LintConfig::default());
        assert!(session.add_file("index.html", PAGE));
        assert!(!session.add_file("index.html", PAGE));
        assert!(session.add_file("index.html", "<p></p>"));
        assert!(session.file("index.html").unwrap().inference.calls.is_empty());
    }

    #[test]
    fn test_script_files_pass_through() {
        let mut session = Session::browser(LintConfig::default());
        session.add_file("app.js", "document.getElementById('x')");
        let file = session.file("app.js").unwrap();
        assert!(!file.document.is_markup());
        assert!(session.lint("app.js").unwrap().is_empty());
    }

    #[test]
    fn test_remove_file() {
        let mut session = Session::browser(LintConfig::default());
        session.add_file("index.html", PAGE);
        assert!(session.contains("index.html"));
        assert!(session.remove_file("index.html"));
        assert!(!session.contains("index.html"));
        assert!(!session.remove_file("index.html"));
    }

    #[test]
    fn test_empty_registry_lints_nothing() {
        let mut session = Session::new(PluginRegistry::new(), LintConfig::default());
        session.add_file("index.html", r#"<script>document.getElementById("zz")</script>"#);
        let file = session.file("index.html").unwrap();
        assert!(!file.document.is_markup());
        assert!(session.lint("index.html").unwrap().is_empty());
    }
}
