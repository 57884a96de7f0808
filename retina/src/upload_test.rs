use super::*;
use crate::analysis::Severity;

fn png(name: &str, len: usize) -> SelectedImage {
    SelectedImage::new(name, "image/png", vec![0u8; len]).with_preview(format!("blob:{name}"))
}

fn prediction() -> Prediction {
    Prediction { severity: Severity::Mild, confidence: 0.875 }
}

#[test]
fn validate_accepts_jpeg_and_png_up_to_limit() {
    assert_eq!(validate_image("image/jpeg", 1), Ok(()));
    assert_eq!(validate_image("image/png", MAX_IMAGE_BYTES), Ok(()));
}

#[test]
fn validate_rejects_other_types() {
    assert_eq!(
        validate_image("image/gif", 10),
        Err(ValidationError::UnsupportedImageType("image/gif".to_owned()))
    );
    assert!(validate_image("", 10).is_err());
}

#[test]
fn validate_rejects_oversized() {
    assert_eq!(
        validate_image("image/jpeg", MAX_IMAGE_BYTES + 1),
        Err(ValidationError::ImageTooLarge { size: MAX_IMAGE_BYTES + 1 })
    );
}

#[test]
fn to_multipart_uses_image_field() {
    let part = png("eye.png", 3).to_multipart();
    assert_eq!(part.field, "image");
    assert_eq!(part.filename, "eye.png");
    assert_eq!(part.mime, "image/png");
    assert_eq!(part.bytes.len(), 3);
}

#[test]
fn valid_select_replaces_wholesale() {
    let mut state = UploadState::default();
    assert_eq!(state.select(png("a.png", 10)), Ok(None));

    state.finish_upload(prediction());
    assert_eq!(state.active_tab, ScanTab::Result);

    let previous = state.select(png("b.png", 20)).unwrap();
    assert_eq!(previous.map(|p| p.name), Some("a.png".to_owned()));
    assert_eq!(state.selected.as_ref().map(|s| s.name.as_str()), Some("b.png"));
    assert_eq!(state.result, None);
    assert_eq!(state.error, None);
    assert_eq!(state.active_tab, ScanTab::Scan);
}

#[test]
fn invalid_select_keeps_previous_selection() {
    let mut state = UploadState::default();
    state.select(png("a.png", 10)).unwrap();
    let before = state.selected.clone();

    let oversized = SelectedImage {
        name: "big.jpg".to_owned(),
        mime: "image/jpeg".to_owned(),
        size: 6 * 1024 * 1024,
        bytes: Vec::new(),
        preview_url: None,
    };
    assert!(state.select(oversized).is_err());

    assert_eq!(state.selected, before);
    assert_eq!(state.error, Some(ValidationError::ImageTooLarge { size: 6 * 1024 * 1024 }));
}

#[test]
fn invalid_select_keeps_previous_result() {
    let mut state = UploadState::default();
    state.select(png("a.png", 10)).unwrap();
    state.finish_upload(prediction());

    assert!(state.select(SelectedImage::new("x.gif", "image/gif", vec![1])).is_err());

    assert_eq!(state.result, Some(prediction()));
    assert_eq!(state.active_tab, ScanTab::Result);
}

#[test]
fn begin_upload_without_selection_errors() {
    let mut state = UploadState::default();
    assert_eq!(state.begin_upload(), Err(ValidationError::NoImageSelected));
    assert_eq!(state.error, Some(ValidationError::NoImageSelected));
    assert!(!state.loading);
}

#[test]
fn upload_lifecycle_toggles_loading() {
    let mut state = UploadState::default();
    state.select(png("a.png", 10)).unwrap();
    assert!(state.can_upload());

    let image = state.begin_upload().unwrap();
    assert_eq!(image.name, "a.png");
    assert!(state.loading);
    assert!(!state.can_upload());

    state.fail_upload();
    assert!(!state.loading);
    assert_eq!(state.active_tab, ScanTab::Scan);
}

#[test]
fn failed_rerun_keeps_earlier_prediction() {
    let mut state = UploadState::default();
    state.select(png("a.png", 10)).unwrap();
    state.begin_upload().unwrap();
    state.finish_upload(prediction());

    state.begin_upload().unwrap();
    state.fail_upload();

    assert!(!state.loading);
    assert_eq!(state.result, Some(prediction()));
    assert_eq!(state.active_tab, ScanTab::Result);
}

#[test]
fn reset_returns_dropped_selection() {
    let mut state = UploadState::default();
    state.select(png("a.png", 10)).unwrap();
    state.error = Some(ValidationError::NoImageSelected);

    let dropped = state.reset();
    assert_eq!(dropped.and_then(|d| d.preview_url), Some("blob:a.png".to_owned()));
    assert_eq!(state, UploadState::default());
}
