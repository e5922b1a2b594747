// src/fixtures.rs

use reqwest::multipart::Part;
use std::path::Path;

use crate::error::{AppError, AppResult};

pub const TEST_IMAGE: &str = "test_image.jpg";
pub const INAPPROPRIATE_IMAGE: &str = "inappropriate_image.jpg";

/// フィクスチャ画像を読み込んで multipart の `profileImage` パートにする。
/// ファイルが無い場合はそのまま致命的エラー（リトライしない）。
pub async fn profile_image_part(fixture_dir: &Path, file_name: &str) -> AppResult<Part> {
    let path = fixture_dir.join(file_name);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| AppError::FixtureNotFound {
            path: path.clone(),
            source,
        })?;

    let part = Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str(mime::IMAGE_JPEG.as_ref())?;
    Ok(part)
}
