use std::fmt;
use std::path::PathBuf;

/// Errors from the simulated upload flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The upload action was triggered with no file selected.
    NoFileSelected,
    /// The chosen path does not carry one of the accepted extensions.
    UnsupportedExtension(PathBuf),
    /// An upload is already running.
    AlreadyUploading,
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::NoFileSelected => write!(f, "Silakan pilih file terlebih dahulu"),
            UploadError::UnsupportedExtension(path) => {
                write!(f, "Format file tidak didukung: {}", path.display())
            }
            UploadError::AlreadyUploading => write!(f, "Upload sedang berjalan"),
        }
    }
}

impl std::error::Error for UploadError {}

/// Errors from report export.
#[derive(Debug)]
pub enum ReportError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Io(e) => write!(f, "report IO error: {e}"),
            ReportError::Serialize(e) => write!(f, "report serialization error: {e}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Io(e) => Some(e),
            ReportError::Serialize(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(e: std::io::Error) -> Self {
        ReportError::Io(e)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        ReportError::Serialize(e)
    }
}
