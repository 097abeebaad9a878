use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TableshotError::invalid_configuration("x")
            .to_string()
            .contains("invalid configuration:")
    );
    assert!(
        TableshotError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        TableshotError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn only_configuration_errors_report_as_such() {
    assert!(TableshotError::invalid_configuration("x").is_invalid_configuration());
    assert!(!TableshotError::render("x").is_invalid_configuration());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TableshotError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
