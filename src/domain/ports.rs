use crate::domain::model::Code;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

/// Remote lookup of one reservation code. Implementations make exactly one
/// attempt per call.
#[async_trait]
pub trait StatusClient: Send + Sync {
    async fn fetch_status(&self, code: &Code) -> Result<serde_json::Value>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn input_path(&self) -> &Path;
    fn csv_output_path(&self) -> &Path;
    fn txt_output_path(&self) -> &Path;
}
