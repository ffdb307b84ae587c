//! Simulated upload of an input-output table file.
//!
//! The chosen file is never opened or read. "Uploading" is a single-shot
//! delay with an explicit deadline, so the frontend polls it from its tick
//! loop and can cancel it when the user leaves the screen. Taking `Instant`
//! arguments keeps the whole flow testable without sleeping.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::UploadError;

/// File extensions accepted by the selection hint.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["csv", "xlsx", "xls"];

/// Documented size ceiling (10 MB). Shown in the requirements text only;
/// not enforced anywhere.
pub const MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// A file chosen for upload. Only the path is kept; contents are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelection {
    path: PathBuf,
}

impl FileSelection {
    /// Accept a path if it carries one of the supported extensions.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, UploadError> {
        let path = path.into();
        if is_supported(&path) {
            Ok(Self { path })
        } else {
            Err(UploadError::UnsupportedExtension(path))
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.iter().any(|s| *s == e)
        })
        .unwrap_or(false)
}

/// A single-shot delayed completion standing in for the network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTask {
    deadline: Instant,
}

impl UploadTask {
    pub fn begin(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
        }
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

/// Selection plus in-flight task plus completion flag for the upload screen.
#[derive(Debug, Default)]
pub struct UploadState {
    selected: Option<FileSelection>,
    task: Option<UploadTask>,
    complete: bool,
}

impl UploadState {
    pub fn selected(&self) -> Option<&FileSelection> {
        self.selected.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.task.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Choose a file. A new selection cancels any in-flight task and clears
    /// the completion flag.
    pub fn select(&mut self, path: impl Into<PathBuf>) -> Result<(), UploadError> {
        let selection = FileSelection::new(path)?;
        self.selected = Some(selection);
        self.task = None;
        self.complete = false;
        Ok(())
    }

    /// Start the simulated upload. With no file selected this is an error
    /// and neither the completion flag nor a timer is touched.
    pub fn start(&mut self, now: Instant, delay: Duration) -> Result<(), UploadError> {
        if self.task.is_some() {
            return Err(UploadError::AlreadyUploading);
        }
        if self.selected.is_none() {
            return Err(UploadError::NoFileSelected);
        }
        self.task = Some(UploadTask::begin(now, delay));
        Ok(())
    }

    /// Advance the task against the given clock. Returns true on the tick
    /// where the upload completes.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.task {
            Some(task) if task.is_done(now) => {
                self.task = None;
                self.complete = true;
                true
            }
            _ => false,
        }
    }

    /// Drop any in-flight task. Called on screen teardown; the delay never
    /// outlives the view that started it.
    pub fn cancel(&mut self) {
        self.task = None;
    }
}
