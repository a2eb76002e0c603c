use reqwest::multipart::{Form, Part};
use std::path::Path;

use super::types::*;
use crate::api::ApiClient;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const XLS_MIME: &str = "application/vnd.ms-excel";

/// Submit the original spreadsheet file to the endpoint of the selected
/// upload type and return the server's structured receipt.
///
/// No retry and no idempotency key: submitting the same file twice creates
/// duplicate records server-side, which is an accepted external-API concern.
pub async fn submit_upload(
    api: &ApiClient,
    upload_type: &UploadType,
    file_path: &str,
) -> Result<UploadReceipt, UploadError> {
    let bytes = tokio::fs::read(file_path).await?;
    let file_name = Path::new(file_path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload.xlsx".to_string());

    let mime = if file_name.to_ascii_lowercase().ends_with(".xls") {
        XLS_MIME
    } else {
        XLSX_MIME
    };

    let part = Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(mime)
        .map_err(UploadError::Network)?;
    let form = Form::new().part("file", part);

    let url = format!("{}/api/v1/{}", api.base_url(), upload_type.endpoint);
    let response = api.http().post(&url).multipart(form).send().await?;

    let status = response.status();
    let body = response.bytes().await?;

    if status.is_success() {
        serde_json::from_slice(&body).map_err(|e| UploadError::Decode(e.to_string()))
    } else {
        // Error bodies carry `{"error": "..."}` when the server rejected the
        // file; fall back to a generic message otherwise.
        let message = serde_json::from_slice::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or_else(|| "Upload failed".to_string());

        Err(UploadError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
