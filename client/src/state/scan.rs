//! Retina scan page state: selection, upload lifecycle, history.

#[cfg(test)]
#[path = "scan_test.rs"]
mod scan_test;

use retina::ApiError;
use retina::analysis::{AnalysisRecord, HistoryRefresh, ScanOutcome, UPLOAD_FAILED_MESSAGE};
use retina::upload::UploadState;

pub const DELETE_FAILED_MESSAGE: &str = "Could not delete the analysis. Please try again.";
pub const UPLOAD_REFRESH_FAILED_MESSAGE: &str =
    "The scan was analyzed, but the history could not be refreshed. Reload the page to see it.";
pub const DELETE_REFRESH_FAILED_MESSAGE: &str =
    "The analysis was deleted, but the history could not be refreshed.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanState {
    pub upload: UploadState,
    pub history: Vec<AnalysisRecord>,
    /// Last request failure, shown next to validation errors.
    pub request_error: Option<String>,
    /// Record whose delete is in flight.
    pub deleting: Option<String>,
}

impl ScanState {
    /// Show the prediction. A failed history refetch is reported on its
    /// own and leaves the current list in place.
    pub fn upload_succeeded(&mut self, outcome: ScanOutcome) {
        self.upload.finish_upload(outcome.prediction);
        match outcome.history {
            Ok(history) => {
                self.request_error = None;
                self.history = history;
            }
            Err(e) => {
                log::warn!("history refresh after upload failed: {e}");
                self.request_error = Some(UPLOAD_REFRESH_FAILED_MESSAGE.to_owned());
            }
        }
    }

    pub fn upload_failed(&mut self, error: &ApiError) {
        self.request_error = Some(error.user_message(UPLOAD_FAILED_MESSAGE));
        self.upload.fail_upload();
    }

    /// The record is gone server-side. Without a fresh list it is dropped
    /// locally.
    pub fn delete_succeeded(&mut self, id: &str, refresh: HistoryRefresh) {
        match refresh {
            Ok(history) => {
                self.request_error = None;
                self.history_loaded(history);
            }
            Err(e) => {
                self.deleting = None;
                self.history.retain(|record| record.id != id);
                log::warn!("history refresh after delete of {id} failed: {e}");
                self.request_error = Some(DELETE_REFRESH_FAILED_MESSAGE.to_owned());
            }
        }
    }

    pub fn delete_failed(&mut self, error: &ApiError) {
        self.deleting = None;
        self.request_error = Some(error.user_message(DELETE_FAILED_MESSAGE));
    }

    pub fn history_loaded(&mut self, history: Vec<AnalysisRecord>) {
        self.history = history;
        self.deleting = None;
    }

    /// The message for the error banner: validation first, then request.
    #[must_use]
    pub fn error_text(&self) -> Option<String> {
        self.upload
            .error
            .as_ref()
            .map(ToString::to_string)
            .or_else(|| self.request_error.clone())
    }
}
