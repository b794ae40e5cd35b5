// Error types for the launcher.
// Covers snapshot file problems, GitHub API failures, and GUI startup errors.

use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("No save file found at {}, please re-run the program.", .path.display())]
    MissingSnapshot { path: PathBuf },

    #[error(
        "Empty save at {} ({reason}), please delete the file and re-run the program.",
        .path.display()
    )]
    CorruptSnapshot { path: PathBuf, reason: String },

    #[error("Request to {url} failed: {source}")]
    RemoteRequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid request to {url}: {message}")]
    RemoteInvalidResponse { url: String, message: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Avatar decoding error: {0}")]
    Avatar(#[from] image::ImageError),

    #[error("Window error: {0}")]
    Gui(String),
}

impl LauncherError {
    /// Process exit status; each fatal snapshot/API condition gets its own.
    pub fn exit_status(&self) -> u8 {
        match self {
            LauncherError::MissingSnapshot { .. } => 2,
            LauncherError::CorruptSnapshot { .. } => 3,
            LauncherError::RemoteRequestFailed { .. } => 4,
            LauncherError::RemoteInvalidResponse { .. } => 5,
            _ => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    /// Display text followed by each underlying cause not already part of it.
    pub fn report(&self) -> String {
        let mut report = self.to_string();
        let mut cause = std::error::Error::source(self);
        while let Some(err) = cause {
            let text = err.to_string();
            if !report.contains(&text) {
                report.push_str(": ");
                report.push_str(&text);
            }
            cause = err.source();
        }
        report
    }
}

impl From<eframe::Error> for LauncherError {
    fn from(err: eframe::Error) -> Self {
        LauncherError::Gui(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LauncherError>;
