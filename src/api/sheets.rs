use super::ApiClient;
use crate::errors::{AppError, AppResult};
use crate::models::sheets::{
    CsvExport, CsvExportQuery, ImportResponse, SheetExportRequest, SheetExportResponse,
    SheetImportRequest,
};
use reqwest::multipart::{Form, Part};
use std::path::Path;

pub struct SheetsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SheetsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn export(&self, body: &SheetExportRequest) -> AppResult<SheetExportResponse> {
        body.validate()?;
        self.client.post("/google-sheets/export", body).await
    }

    pub async fn import(&self, body: &SheetImportRequest) -> AppResult<ImportResponse> {
        body.validate()?;
        self.client.post("/google-sheets/import", body).await
    }

    pub async fn export_csv(&self, query: &CsvExportQuery) -> AppResult<CsvExport> {
        self.client
            .get_query("/google-sheets/export-csv", query)
            .await
    }

    /// Upload a CSV file as the multipart field `file`.
    pub async fn upload_csv(&self, path: &Path) -> AppResult<ImportResponse> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| AppError::Validation(format!("not a file: {}", path.display())))?;
        let bytes = tokio::fs::read(path).await?;

        let part = Part::bytes(bytes).file_name(file_name).mime_str("text/csv")?;
        let form = Form::new().part("file", part);

        self.client
            .post_multipart("/google-sheets/upload-csv", form)
            .await
    }
}
