//! Simulated upload flow tests. All use explicit instants; nothing sleeps.

use std::time::{Duration, Instant};

use crate::error::UploadError;
use crate::upload::{FileSelection, UploadState, UploadTask};

const DELAY: Duration = Duration::from_millis(2000);

#[test]
fn test_start_without_selection_is_an_error() {
    let mut state = UploadState::default();
    let now = Instant::now();

    let result = state.start(now, DELAY);
    assert_eq!(result, Err(UploadError::NoFileSelected));
    assert!(!state.is_complete());
    assert!(!state.is_uploading());

    // No timer was started, so nothing ever completes.
    assert!(!state.poll(now + DELAY * 2));
    assert!(!state.is_complete());
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let mut state = UploadState::default();
    let result = state.select("tabel-io.pdf");
    assert!(matches!(result, Err(UploadError::UnsupportedExtension(_))));
    assert!(state.selected().is_none());
}

#[test]
fn test_supported_extensions() {
    for name in ["tabel.csv", "tabel.xlsx", "tabel.xls", "TABEL.CSV"] {
        assert!(FileSelection::new(name).is_ok(), "{name} should be accepted");
    }
    assert!(FileSelection::new("tabel").is_err());
    assert!(FileSelection::new("tabel.txt").is_err());
}

#[test]
fn test_upload_completes_after_delay() {
    let mut state = UploadState::default();
    let start = Instant::now();

    state.select("tabel-io.csv").unwrap();
    state.start(start, DELAY).unwrap();
    assert!(state.is_uploading());

    assert!(!state.poll(start + Duration::from_millis(1999)));
    assert!(!state.is_complete());

    assert!(state.poll(start + DELAY));
    assert!(state.is_complete());
    assert!(!state.is_uploading());

    // Completion is reported once; later polls are quiet no-ops.
    assert!(!state.poll(start + DELAY * 2));
    assert!(state.is_complete());
}

#[test]
fn test_cancel_drops_the_timer() {
    let mut state = UploadState::default();
    let start = Instant::now();

    state.select("tabel-io.xlsx").unwrap();
    state.start(start, DELAY).unwrap();
    state.cancel();

    assert!(!state.is_uploading());
    assert!(!state.poll(start + DELAY * 2));
    assert!(!state.is_complete());
}

#[test]
fn test_reselect_clears_completion_and_task() {
    let mut state = UploadState::default();
    let start = Instant::now();

    state.select("a.csv").unwrap();
    state.start(start, DELAY).unwrap();
    assert!(state.poll(start + DELAY));
    assert!(state.is_complete());

    state.select("b.csv").unwrap();
    assert!(!state.is_complete());
    assert!(!state.is_uploading());
    assert_eq!(state.selected().unwrap().file_name(), "b.csv");
}

#[test]
fn test_double_start_is_rejected() {
    let mut state = UploadState::default();
    let start = Instant::now();

    state.select("a.csv").unwrap();
    state.start(start, DELAY).unwrap();
    assert_eq!(state.start(start, DELAY), Err(UploadError::AlreadyUploading));
}

#[test]
fn test_task_deadline_arithmetic() {
    let now = Instant::now();
    let task = UploadTask::begin(now, DELAY);

    assert!(!task.is_done(now));
    assert_eq!(task.remaining(now), DELAY);
    assert!(task.is_done(now + DELAY));
    assert_eq!(task.remaining(now + DELAY * 2), Duration::ZERO);
}
