use super::*;
use retina::analysis::{Prediction, Severity};
use serde_json::json;
use retina::error::{NETWORK_ERROR_MESSAGE, ValidationError};
use retina::upload::{ScanTab, SelectedImage};

fn selected() -> ScanState {
    let mut state = ScanState::default();
    state.upload.select(SelectedImage::new("eye.png", "image/png", vec![1])).unwrap();
    state.upload.begin_upload().unwrap();
    state
}

#[test]
fn success_switches_to_result_and_stores_history() {
    let mut state = selected();
    state.request_error = Some("old".to_owned());
    state.upload_succeeded(ScanOutcome {
        prediction: Prediction { severity: Severity::Severe, confidence: 0.5 },
        history: Ok(Vec::new()),
    });

    assert!(!state.upload.loading);
    assert_eq!(state.upload.active_tab, ScanTab::Result);
    assert_eq!(state.request_error, None);
}

#[test]
fn failure_shows_server_message_and_stops_loading() {
    let mut state = selected();
    state.upload_failed(&ApiError::Server { status: 400, message: Some("Bad image".to_owned()) });
    assert!(!state.upload.loading);
    assert_eq!(state.error_text().as_deref(), Some("Bad image"));
}

#[test]
fn failure_without_message_uses_fallbacks() {
    let mut state = selected();
    state.upload_failed(&ApiError::Server { status: 500, message: None });
    assert_eq!(state.error_text().as_deref(), Some(UPLOAD_FAILED_MESSAGE));

    state.upload_failed(&ApiError::Transport("offline".to_owned()));
    assert_eq!(state.error_text().as_deref(), Some(NETWORK_ERROR_MESSAGE));
}

#[test]
fn validation_error_takes_precedence() {
    let mut state = ScanState { request_error: Some("server".to_owned()), ..ScanState::default() };
    state.upload.error = Some(ValidationError::NoImageSelected);
    assert_eq!(state.error_text().as_deref(), Some("Please choose a file first."));
}

#[test]
fn history_load_clears_deleting() {
    let mut state = ScanState { deleting: Some("r1".to_owned()), ..ScanState::default() };
    state.history_loaded(Vec::new());
    assert_eq!(state.deleting, None);
}

#[test]
fn delete_failure_releases_row() {
    let mut state = ScanState { deleting: Some("r1".to_owned()), ..ScanState::default() };
    state.delete_failed(&ApiError::Server { status: 500, message: None });
    assert_eq!(state.deleting, None);
    assert_eq!(state.error_text().as_deref(), Some(DELETE_FAILED_MESSAGE));
}

fn record(id: &str) -> AnalysisRecord {
    serde_json::from_value(json!({ "_id": id, "severity": "Ringan", "confidence": 0.6 })).unwrap()
}

fn moderate() -> Prediction {
    Prediction { severity: Severity::Moderate, confidence: 0.8 }
}

#[test]
fn failed_refresh_after_upload_still_shows_prediction() {
    let mut state = selected();
    state.history = vec![record("old")];
    state.upload_succeeded(ScanOutcome {
        prediction: moderate(),
        history: Err(ApiError::Server { status: 500, message: None }),
    });

    assert!(!state.upload.loading);
    assert_eq!(state.upload.result, Some(moderate()));
    assert_eq!(state.upload.active_tab, ScanTab::Result);
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.error_text().as_deref(), Some(UPLOAD_REFRESH_FAILED_MESSAGE));
}

#[test]
fn failed_rerun_keeps_earlier_prediction() {
    let mut state = selected();
    state.upload_succeeded(ScanOutcome { prediction: moderate(), history: Ok(Vec::new()) });

    state.upload.begin_upload().unwrap();
    state.upload_failed(&ApiError::Transport("offline".to_owned()));

    assert!(!state.upload.loading);
    assert_eq!(state.upload.result, Some(moderate()));
    assert_eq!(state.upload.active_tab, ScanTab::Result);
}

#[test]
fn delete_with_fresh_history_replaces_list() {
    let mut state = ScanState { deleting: Some("r1".to_owned()), history: vec![record("r1")], ..ScanState::default() };
    state.delete_succeeded("r1", Ok(vec![record("r2")]));

    assert_eq!(state.deleting, None);
    assert_eq!(state.history.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), ["r2"]);
    assert_eq!(state.error_text(), None);
}

#[test]
fn delete_with_failed_refresh_drops_row_locally() {
    let mut state = ScanState {
        deleting: Some("r1".to_owned()),
        history: vec![record("r1"), record("r2")],
        ..ScanState::default()
    };
    state.delete_succeeded("r1", Err(ApiError::Transport("offline".to_owned())));

    assert_eq!(state.deleting, None);
    assert_eq!(state.history.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), ["r2"]);
    assert_eq!(state.error_text().as_deref(), Some(DELETE_REFRESH_FAILED_MESSAGE));
}
