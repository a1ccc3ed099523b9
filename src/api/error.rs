// ==========================================
// 轮胎工厂 ERP - API 层错误类型
// ==========================================
// 职责: RPC 边界上的失败（载荷解码、工作簿写出、存储查询）
// 说明: 行级导入失败不在此列，它们作为 ImportResult 的数据返回
// ==========================================

use crate::exporter::ExportError;
use crate::repository::RepositoryError;
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid file payload: {0}")]
    InvalidPayload(String),

    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Could not load records: {0}")]
    Store(#[from] RepositoryError),
}

impl From<base64::DecodeError> for ApiError {
    fn from(err: base64::DecodeError) -> Self {
        ApiError::InvalidPayload(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
