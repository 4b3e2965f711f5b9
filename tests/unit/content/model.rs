use super::*;

fn shift(id: &str) -> ShiftRecord {
    ShiftRecord {
        id: id.to_owned(),
        layer_id: "I".to_owned(),
        title: String::new(),
        summary: String::new(),
        quote: None,
        links: vec![],
    }
}

#[test]
fn shift_ids_sort_numerically_then_lexically() {
    let mut v = vec![shift("10"), shift("x"), shift("02"), shift("9"), shift("a")];
    v.sort_by(compare_shift_ids);
    let ids: Vec<_> = v.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["02", "9", "10", "a", "x"]);
}

#[test]
fn parses_camel_case_json_with_defaults() {
    let json = r##"{
        "layers": [{"id": "I", "title": "Ground", "accent": "#ff0000"}],
        "shifts": [{"id": "01", "layerId": "I", "title": "First",
                    "links": [{"label": "src", "url": "https://example.com"}]}]
    }"##;
    let c = LocaleContent::from_json_str(json).unwrap();
    assert_eq!(c.layers[0].subtitle, "");
    assert_eq!(c.layers[0].accent.as_deref(), Some("#ff0000"));
    assert_eq!(c.shifts[0].layer_id, "I");
    assert_eq!(c.shifts[0].links.len(), 1);
    assert!(!c.is_loading());
}

#[test]
fn empty_object_is_the_loading_state() {
    let c = LocaleContent::from_json_str("{}").unwrap();
    assert!(c.is_loading());
    assert!(LocaleContent::from_json_str("[").is_err());
}
