use super::*;

#[test]
fn push_truncates_forward_entries() {
    let mut h = MemoryHistory::new("#main");
    h.set_slug("layer-I");
    h.set_slug("shift-01");
    assert!(h.back());
    h.set_slug("summary");
    assert_eq!(h.entries(), ["main", "layer-I", "summary"]);
    assert!(!h.forward());
}

#[test]
fn back_and_forward_report_changes_once() {
    let mut h = MemoryHistory::new("main");
    h.set_slug("layer-I");
    assert_eq!(h.take_slug_change(), None);
    assert!(h.back());
    assert_eq!(h.slug(), "main");
    assert_eq!(h.take_slug_change().as_deref(), Some("main"));
    assert_eq!(h.take_slug_change(), None);
    assert!(!h.back());
    assert!(h.forward());
    assert_eq!(h.take_slug_change().as_deref(), Some("layer-I"));
}

#[test]
fn replace_does_not_add_entries() {
    let mut h = MemoryHistory::new("bogus");
    h.replace_slug("main");
    assert_eq!(h.entries(), ["main"]);
}

#[test]
fn manual_hash_edit_is_a_change() {
    let mut h = MemoryHistory::new("main");
    h.edit_hash("#conclusion");
    assert_eq!(h.slug(), "conclusion");
    assert_eq!(h.take_slug_change().as_deref(), Some("conclusion"));
}
