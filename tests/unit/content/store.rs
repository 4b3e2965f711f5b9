use std::cell::Cell;

use super::*;
use crate::content::model::LayerSummary;

fn lang(s: &str) -> Language {
    Language::new(s).unwrap()
}

fn one_layer(title: &str) -> LocaleContent {
    LocaleContent {
        layers: vec![LayerSummary {
            id: "I".to_owned(),
            title: title.to_owned(),
            subtitle: String::new(),
            description: String::new(),
            accent: None,
        }],
        shifts: vec![],
    }
}

struct CountingSource {
    inner: StaticContentSource,
    calls: Cell<usize>,
}

impl ContentSource for CountingSource {
    fn load(&self, language: &Language) -> ReportResult<Option<LocaleContent>> {
        self.calls.set(self.calls.get() + 1);
        self.inner.load(language)
    }
}

#[test]
fn loads_once_per_language() {
    let source = CountingSource {
        inner: StaticContentSource::new().with(lang("en"), one_layer("Ground")),
        calls: Cell::new(0),
    };
    let mut store = ContentStore::new(source, lang("en"));
    let a = store.get(&lang("en")).unwrap();
    let b = store.get(&lang("en")).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(store.source.calls.get(), 1);
    assert!(store.is_cached(&lang("en")));
}

#[test]
fn missing_language_falls_back() {
    let source = StaticContentSource::new().with(lang("en"), one_layer("Ground"));
    let mut store = ContentStore::new(source, lang("en"));
    let c = store.get(&lang("de")).unwrap();
    assert_eq!(c.layers[0].title, "Ground");
}

#[test]
fn missing_fallback_is_a_content_error() {
    let mut store = ContentStore::new(StaticContentSource::new(), lang("en"));
    assert!(matches!(
        store.get(&lang("en")),
        Err(ReportError::Content(_))
    ));
}

#[test]
fn dir_source_reads_language_files() {
    let dir = PathBuf::from("target").join("content_store_tests");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("en.json"),
        serde_json::to_string(&one_layer("Ground")).unwrap(),
    )
    .unwrap();
    std::fs::write(dir.join("xx.json"), "{broken").unwrap();

    let source = DirContentSource::new(&dir);
    assert_eq!(source.load(&lang("en")).unwrap().unwrap().layers.len(), 1);
    assert!(source.load(&lang("fr")).unwrap().is_none());
    assert!(source.load(&lang("xx")).is_err());
}
