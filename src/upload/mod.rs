mod client;
mod error;
mod types;

pub use client::DatasetUploader;
pub use error::UploadError;
pub use types::{Rejection, RejectionPayload, SelectedFile};
