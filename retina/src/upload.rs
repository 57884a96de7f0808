//! Image selection and upload state for the scan page.
//!
//! A selection is validated before it replaces anything: a rejected file
//! sets the inline error and leaves the previous file, preview and result
//! exactly as they were.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::analysis::Prediction;
use crate::error::ValidationError;
use crate::http::MultipartFile;

pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;
pub const ACCEPTED_MIME_TYPES: [&str; 2] = ["image/jpeg", "image/png"];
pub const UPLOAD_FIELD: &str = "image";

/// Check type and size before anything leaves the browser.
///
/// # Errors
///
/// [`ValidationError::UnsupportedImageType`] for anything but JPEG/PNG,
/// [`ValidationError::ImageTooLarge`] above [`MAX_IMAGE_BYTES`].
pub fn validate_image(mime: &str, size: u64) -> Result<(), ValidationError> {
    if !ACCEPTED_MIME_TYPES.contains(&mime) {
        return Err(ValidationError::UnsupportedImageType(mime.to_owned()));
    }
    if size > MAX_IMAGE_BYTES {
        return Err(ValidationError::ImageTooLarge { size });
    }
    Ok(())
}

/// A file picked by the user, read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedImage {
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub bytes: Vec<u8>,
    /// Object URL for the preview `<img>`; owned by the browser layer.
    pub preview_url: Option<String>,
}

impl SelectedImage {
    #[must_use]
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        let size = bytes.len() as u64;
        Self { name: name.into(), mime: mime.into(), size, bytes, preview_url: None }
    }

    #[must_use]
    pub fn with_preview(mut self, url: impl Into<String>) -> Self {
        self.preview_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn to_multipart(&self) -> MultipartFile {
        MultipartFile {
            field: UPLOAD_FIELD.to_owned(),
            filename: self.name.clone(),
            mime: self.mime.clone(),
            bytes: self.bytes.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanTab {
    #[default]
    Scan,
    Result,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    pub selected: Option<SelectedImage>,
    pub error: Option<ValidationError>,
    pub result: Option<Prediction>,
    pub active_tab: ScanTab,
    pub loading: bool,
}

impl UploadState {
    /// Accept or reject a new file. On success the whole selection is
    /// replaced and the displaced image is returned so its preview URL can
    /// be released.
    ///
    /// # Errors
    ///
    /// The validation failure, also stored in `self.error`.
    pub fn select(&mut self, image: SelectedImage) -> Result<Option<SelectedImage>, ValidationError> {
        if let Err(e) = validate_image(&image.mime, image.size) {
            log::warn!("rejected {} ({}, {} bytes): {e}", image.name, image.mime, image.size);
            self.error = Some(e.clone());
            return Err(e);
        }
        self.error = None;
        self.result = None;
        self.active_tab = ScanTab::Scan;
        Ok(self.selected.replace(image))
    }

    /// Mark the upload as in flight and hand back the file to send.
    ///
    /// # Errors
    ///
    /// [`ValidationError::NoImageSelected`] when nothing is selected.
    pub fn begin_upload(&mut self) -> Result<SelectedImage, ValidationError> {
        let Some(image) = self.selected.clone() else {
            self.error = Some(ValidationError::NoImageSelected);
            return Err(ValidationError::NoImageSelected);
        };
        self.error = None;
        self.loading = true;
        Ok(image)
    }

    /// Record a prediction and switch to the result tab.
    pub fn finish_upload(&mut self, prediction: Prediction) {
        self.loading = false;
        self.active_tab = ScanTab::Result;
        self.result = Some(prediction);
    }

    /// Stop loading after a failed upload. An earlier prediction for the
    /// same selection stays visible; only a new pick or a reset clears it.
    pub fn fail_upload(&mut self) {
        self.loading = false;
    }

    /// Back to an empty scan tab. Returns the dropped selection.
    pub fn reset(&mut self) -> Option<SelectedImage> {
        let previous = self.selected.take();
        *self = Self::default();
        previous
    }

    #[must_use]
    pub fn can_upload(&self) -> bool {
        self.selected.is_some() && !self.loading
    }
}
