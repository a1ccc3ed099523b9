// ==========================================
// 轮胎工厂 ERP - 记录存储错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 错误文本会原样出现在导入结果的行错误中，面向操作员
// ==========================================

use thiserror::Error;

/// 记录存储错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 数据质量错误 =====
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid value for {field}: {message}")]
    FieldValueError { field: String, message: String },

    // ===== 约束错误 =====
    #[error("Duplicate key: {0}")]
    UniqueConstraintViolation(String),

    #[error("Unknown reference: {0}")]
    ForeignKeyViolation(String),

    // ===== 基础设施错误 =====
    #[error("Store lock failed: {0}")]
    LockError(String),
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
