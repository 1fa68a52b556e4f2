use crate::upload::types::{Rejection, RejectionPayload};
use reqwest::StatusCode;
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("upload rejected with status {status}")]
    Rejected {
        status: StatusCode,
        payload: RejectionPayload,
    },
    #[error("failed to send upload request: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("upload task ended without reporting a result")]
    Abandoned,
}

impl UploadError {
    pub fn into_rejection(self) -> Rejection {
        match self {
            UploadError::Rejected { payload, .. } => payload.into(),
            read @ UploadError::Read { .. } => Rejection {
                message: read.to_string(),
                visual: String::new(),
            },
            UploadError::Transport(_) | UploadError::Abandoned => Rejection::default(),
        }
    }
}
