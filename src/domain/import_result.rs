// ==========================================
// 轮胎工厂 ERP - 导入结果
// ==========================================
// 不变量:
// - imported + failed == 实际处理（未跳过）的数据行数
// - errors.len() == failed（结构性失败除外：failed = 0，errors 仅一条）
// - success == (failed == 0)，结构性失败时 success = false
// ==========================================

use serde::{Deserialize, Serialize};

/// 单行错误（row 为表格中的 1 基物理行号；0 表示整个文件）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    pub row: u32,
    pub error: String,
}

/// 导入结果（原样序列化给调用方）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResult {
    pub success: bool,
    pub imported: usize,
    pub failed: usize,
    pub errors: Vec<RowError>,
}

impl ImportResult {
    /// 结构性失败：一行都没有尝试
    pub fn structural_failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            imported: 0,
            failed: 0,
            errors: vec![RowError {
                row: 0,
                error: message.into(),
            }],
        }
    }

    /// 是否为结构性失败
    pub fn is_structural_failure(&self) -> bool {
        !self.success && self.failed == 0 && self.imported == 0 && !self.errors.is_empty()
    }
}

// ==========================================
// ImportTally - 单次导入调用内的累加器
// ==========================================
// 按值在逐行循环中传递，最后 finish() 成为 ImportResult
#[derive(Debug, Default)]
pub struct ImportTally {
    imported: usize,
    failed: usize,
    errors: Vec<RowError>,
}

impl ImportTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(mut self) -> Self {
        self.imported += 1;
        self
    }

    pub fn record_failure(mut self, row: u32, error: impl Into<String>) -> Self {
        self.failed += 1;
        self.errors.push(RowError {
            row,
            error: error.into(),
        });
        self
    }

    pub fn imported(&self) -> usize {
        self.imported
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn finish(self) -> ImportResult {
        ImportResult {
            success: self.failed == 0,
            imported: self.imported,
            failed: self.failed,
            errors: self.errors,
        }
    }
}
