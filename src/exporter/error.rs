// ==========================================
// 轮胎工厂 ERP - 导出模块错误类型
// ==========================================

use thiserror::Error;

/// 导出 / 模板生成错误
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Could not write workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("Sheet '{sheet}' has {actual} cells in row {row}, expected {expected}")]
    RowWidthMismatch {
        sheet: String,
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
