// ==========================================
// 轮胎工厂 ERP - API 层
// ==========================================
// 职责: 面向 RPC 调用方的数据交换接口（base64 进出、文件名约定）
// ==========================================

pub mod error;
pub mod interchange_api;

pub use error::{ApiError, ApiResult};
pub use interchange_api::{
    decode_payload, export_filename, parse_domain, template_filename, DateRange, FilePayload,
    InterchangeApi,
};
