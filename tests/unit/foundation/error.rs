use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ReportError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ReportError::timeline("x")
            .to_string()
            .contains("timeline error:")
    );
    assert!(
        ReportError::content("x")
            .to_string()
            .contains("content error:")
    );
    assert!(
        ReportError::preference("x")
            .to_string()
            .contains("preference error:")
    );
    assert!(
        ReportError::preview("x")
            .to_string()
            .contains("preview error:")
    );
    assert!(
        ReportError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ReportError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let err: ReportError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, ReportError::Serde(_)));
}
