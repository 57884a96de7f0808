use super::*;

fn record(filename: Option<&str>, created_at: Option<&str>) -> AnalysisRecord {
    AnalysisRecord {
        id: "a1".into(),
        severity: Severity::Moderate,
        severity_level: serde_json::Value::from(2),
        confidence: 0.9,
        original_filename: filename.map(str::to_owned),
        created_at: created_at.map(str::to_owned),
    }
}

#[test]
fn known_grades_use_their_own_color() {
    assert_eq!(severity_color(&Severity::Severe, "#000000"), "#f44336");
}

#[test]
fn unknown_grade_uses_theme_color() {
    assert_eq!(severity_color(&Severity::Other("Ungradable".into()), "#1976d2"), "#1976d2");
}

#[test]
fn history_meta_joins_name_and_date() {
    let line = history_meta(&record(Some("left-eye.png"), Some("2024-03-05T09:07:00Z")));
    assert_eq!(line, "left-eye.png · 05/03/2024 09:07");
}

#[test]
fn history_meta_skips_missing_parts() {
    assert_eq!(history_meta(&record(None, None)), "");
    assert_eq!(history_meta(&record(Some(""), Some("yesterday"))), "yesterday");
}

#[test]
fn active_tab_is_marked() {
    assert!(tab_class(ScanTab::Result, ScanTab::Result).contains("--active"));
    assert!(!tab_class(ScanTab::Scan, ScanTab::Result).contains("--active"));
}
