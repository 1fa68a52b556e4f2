use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
}

impl SelectedFile {
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a file", path.display()),
            ));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self {
            path: path.to_path_buf(),
            name,
            size: metadata.len(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RejectionPayload {
    #[serde(default, deserialize_with = "string_or_none")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub visual: Option<String>,
}

// a field of the wrong type must not hide the other one
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        other => {
            if !other.is_null() {
                tracing::debug!(value = %other, "ignoring non-string field in error payload");
            }
            Ok(None)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rejection {
    pub message: String,
    pub visual: String,
}

impl From<RejectionPayload> for Rejection {
    fn from(payload: RejectionPayload) -> Self {
        Self {
            message: payload.message.unwrap_or_default(),
            visual: payload.visual.unwrap_or_default(),
        }
    }
}
