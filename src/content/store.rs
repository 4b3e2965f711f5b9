use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;

use crate::{
    content::model::LocaleContent,
    foundation::error::{ReportError, ReportResult},
    prefs::Language,
};

/// Supplies locale content for a language code.
pub trait ContentSource {
    /// Load the content for `language`. `Ok(None)` means the language is not available.
    fn load(&self, language: &Language) -> ReportResult<Option<LocaleContent>>;
}

/// Reads `<root>/<language>.json`.
#[derive(Clone, Debug)]
pub struct DirContentSource {
    root: PathBuf,
}

impl DirContentSource {
    /// Serve content from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// File that holds `language`.
    pub fn path_for(&self, language: &Language) -> PathBuf {
        self.root.join(format!("{}.json", language.as_str()))
    }

    /// Content root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentSource for DirContentSource {
    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    fn load(&self, language: &Language) -> ReportResult<Option<LocaleContent>> {
        let path = self.path_for(language);
        let text = match std::fs::read_to_string(&path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("read content '{}'", path.display()))
                    .into());
            }
        };
        let content: LocaleContent = serde_json::from_str(&text)
            .with_context(|| format!("parse content '{}'", path.display()))?;
        Ok(Some(content))
    }
}

/// In-memory content, keyed by language.
#[derive(Clone, Debug, Default)]
pub struct StaticContentSource {
    by_language: BTreeMap<Language, LocaleContent>,
}

impl StaticContentSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register content for `language`.
    pub fn with(mut self, language: Language, content: LocaleContent) -> Self {
        self.by_language.insert(language, content);
        self
    }
}

impl ContentSource for StaticContentSource {
    fn load(&self, language: &Language) -> ReportResult<Option<LocaleContent>> {
        Ok(self.by_language.get(language).cloned())
    }
}

/// Loads locale content at most once per language and falls back to a default language.
pub struct ContentStore<S> {
    source: S,
    fallback: Language,
    cache: BTreeMap<Language, Arc<LocaleContent>>,
}

impl<S: ContentSource> ContentStore<S> {
    /// Create a store that falls back to `fallback` when a language is missing.
    pub fn new(source: S, fallback: Language) -> Self {
        Self {
            source,
            fallback,
            cache: BTreeMap::new(),
        }
    }

    /// Content for `language`, loading it on first use.
    pub fn get(&mut self, language: &Language) -> ReportResult<Arc<LocaleContent>> {
        if let Some(hit) = self.cache.get(language) {
            return Ok(Arc::clone(hit));
        }
        let content = match self.source.load(language)? {
            Some(c) => c,
            None if *language != self.fallback => {
                tracing::warn!(
                    %language,
                    fallback = %self.fallback,
                    "content missing, using fallback"
                );
                let fallback = self.fallback.clone();
                let content = self.get(&fallback)?;
                self.cache.insert(language.clone(), Arc::clone(&content));
                return Ok(content);
            }
            None => {
                return Err(ReportError::content(format!(
                    "no content available for '{language}'"
                )));
            }
        };
        tracing::debug!(
            %language,
            layers = content.layers.len(),
            shifts = content.shifts.len(),
            "content loaded"
        );
        let content = Arc::new(content);
        self.cache.insert(language.clone(), Arc::clone(&content));
        Ok(content)
    }

    /// Whether `language` has been loaded already.
    pub fn is_cached(&self, language: &Language) -> bool {
        self.cache.contains_key(language)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/store.rs"]
mod tests;
