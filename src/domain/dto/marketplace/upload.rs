use serde::{Deserialize, Serialize};

/// `POST /upload` 성공 응답의 `data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub url: String,
    pub key: String,
    pub mimetype: String,
    pub size: u64,
}
