use log::info;

use crate::client::{ApiClient, ApiRequest, FormPart};
use crate::domain::dto::marketplace::UploadedFile;
use crate::errors::{AppError, AppResult};

/// 이미지 업로드
pub struct UploadService<'a> {
    client: &'a ApiClient,
}

impl<'a> UploadService<'a> {
    /// multipart 필드 이름
    pub const FIELD: &'static str = "image";

    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /upload`
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 빈 파일 또는 이미지가 아닌 MIME 타입
    pub async fn upload_image(&self, file_name: &str, mime_type: &str, data: Vec<u8>) -> AppResult<UploadedFile> {
        if data.is_empty() {
            return Err(AppError::ValidationError("빈 파일은 업로드할 수 없습니다".to_string()));
        }
        if !mime_type.starts_with("image/") {
            return Err(AppError::ValidationError(format!("이미지 파일이 아닙니다: {}", mime_type)));
        }

        let size = data.len();
        let request = ApiRequest::post("/upload")
            .multipart(vec![FormPart::file(Self::FIELD, file_name, mime_type, data)]);
        let uploaded: UploadedFile = self.client.fetch_data(request).await?;
        info!("📤 업로드 완료: {} ({} bytes)", uploaded.key, size);
        Ok(uploaded)
    }
}
