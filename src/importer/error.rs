// ==========================================
// 轮胎工厂 ERP - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 分类:
// - 结构性错误（整个文件无法处理）: WorkbookDecode / NoWorksheets / HeaderRowNotFound
// - 行级错误（单行隔离）: MissingField / InvalidValue / InvalidDate / Store
// ==========================================

use crate::repository::RepositoryError;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误（结构性）=====
    #[error("Could not read workbook: {0}")]
    WorkbookDecode(String),

    #[error("Workbook contains no worksheets")]
    NoWorksheets,

    #[error("Could not read sheet '{sheet}': {message}")]
    SheetRead { sheet: String, message: String },

    #[error("Could not find header row")]
    HeaderRowNotFound,

    // ===== 数据映射错误（行级）=====
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: &'static str, message: String },

    #[error("Invalid date for {field}: '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },

    // ===== 存储错误（行级）=====
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

// 实现 From<calamine::XlsxError>
impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::WorkbookDecode(err.to_string())
    }
}

/// Result 类型别名
pub type ImportOutcome<T> = Result<T, ImportError>;
