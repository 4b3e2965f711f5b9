//! Persisted presentation preferences (theme and language).
//!
//! Preferences are read once at startup and handed to constructors; they never influence
//! control flow, only which strings and colors are shown.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::foundation::error::{ReportError, ReportResult};

/// Preference key for the color theme.
pub const THEME_KEY: &str = "theme";
/// Preference key for the content language.
pub const LANGUAGE_KEY: &str = "language";

/// Color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Dark background, light text.
    #[default]
    Dark,
    /// Light background, dark text.
    Light,
}

impl Theme {
    /// Stored string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse the stored string form.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Content language code (`en`, `de`, `pt-br`, ...), normalized to lowercase.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language(String);

impl Language {
    /// Validate and normalize a language code.
    pub fn new(code: impl AsRef<str>) -> ReportResult<Self> {
        let code = code.as_ref().trim().to_ascii_lowercase();
        let valid = !code.is_empty()
            && code.len() <= 16
            && code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(ReportError::validation(format!(
                "invalid language code '{code}'"
            )));
        }
        Ok(Self(code))
    }

    /// Language code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self("en".to_owned())
    }
}

impl TryFrom<String> for Language {
    type Error = ReportError;

    fn try_from(value: String) -> ReportResult<Self> {
        Self::new(value)
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.0
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key/value store behind the preferences (browser local storage, a JSON file, memory).
pub trait PreferenceStore {
    /// Read a stored value.
    fn get(&self, key: &str) -> ReportResult<Option<String>>;
    /// Persist a value.
    fn set(&mut self, key: &str, value: &str) -> ReportResult<()>;
}

/// In-memory store, used by tests and hosts without persistence.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> ReportResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> ReportResult<()> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store backed by a flat JSON object on disk. A missing file reads as empty.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Use `path` as the backing file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> ReportResult<BTreeMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(s) if s.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(s) => serde_json::from_str(&s).map_err(|e| {
                ReportError::preference(format!("parse '{}': {e}", self.path.display()))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(ReportError::preference(format!(
                "read '{}': {e}",
                self.path.display()
            ))),
        }
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> ReportResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> ReportResult<()> {
        let mut all = self.read_all()?;
        all.insert(key.to_owned(), value.to_owned());
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ReportError::preference(format!("create '{}': {e}", parent.display()))
            })?;
        }
        let body = serde_json::to_string_pretty(&all)?;
        std::fs::write(&self.path, body).map_err(|e| {
            ReportError::preference(format!("write '{}': {e}", self.path.display()))
        })
    }
}

/// Resolved preferences.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Preferences {
    /// Active color theme.
    pub theme: Theme,
    /// Active content language.
    pub language: Language,
}

impl Preferences {
    /// Read both keys once, falling back to defaults for missing or unreadable values.
    pub fn load(store: &impl PreferenceStore) -> Self {
        let theme = read_key(store, THEME_KEY)
            .and_then(|s| {
                let parsed = Theme::parse(&s);
                if parsed.is_none() {
                    tracing::warn!(value = %s, "unknown stored theme, using default");
                }
                parsed
            })
            .unwrap_or_default();
        let language = read_key(store, LANGUAGE_KEY)
            .and_then(|s| match Language::new(&s) {
                Ok(lang) => Some(lang),
                Err(err) => {
                    tracing::warn!(%err, "invalid stored language, using default");
                    None
                }
            })
            .unwrap_or_default();
        Self { theme, language }
    }

    /// Flip the theme and persist the new value. A failed write leaves the theme unchanged.
    pub fn toggle_theme(&mut self, store: &mut impl PreferenceStore) -> ReportResult<Theme> {
        let next = self.theme.toggled();
        store.set(THEME_KEY, next.as_str())?;
        self.theme = next;
        Ok(next)
    }

    /// Switch language and persist the new value.
    pub fn set_language(
        &mut self,
        language: Language,
        store: &mut impl PreferenceStore,
    ) -> ReportResult<()> {
        store.set(LANGUAGE_KEY, language.as_str())?;
        self.language = language;
        Ok(())
    }
}

fn read_key(store: &impl PreferenceStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(v) => v,
        Err(err) => {
            tracing::warn!(key, %err, "preference store unreadable, using default");
            None
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/prefs/prefs.rs"]
mod tests;
