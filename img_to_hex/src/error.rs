/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no image path supplied")]
    MissingArgument,

    #[error("invalid image {}: {reason}", display_path(.path))]
    InvalidImage {
        path: Option<PathBuf>,
        reason: String,
    },

    #[error("failed to write dump: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Usage(#[from] clap::Error),
}

impl Error {
    pub fn invalid_image(reason: impl Into<String>) -> Self {
        Error::InvalidImage {
            path: None,
            reason: reason.into(),
        }
    }

    /// Attaches the file the image came from, if none is set yet.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Error::InvalidImage { path: None, reason } => Error::InvalidImage {
                path: Some(path.into()),
                reason,
            },
            other => other,
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map_or_else(|| "<memory>".to_string(), |p| p.display().to_string())
}
