// ==========================================
// 轮胎工厂 ERP - 领域模型层
// ==========================================
// 职责: 定义数据交换涉及的实体、类型与导入结果
// 红线: 不含数据访问逻辑，不含表格解析逻辑
// ==========================================

pub mod import_result;
pub mod records;
pub mod types;

// 重导出核心类型
pub use import_result::{ImportResult, ImportTally, RowError};
pub use records::{
    Dealer, DomainRecord, FinancialTransaction, FinishedGood, ProductionRecord,
    QualityInspection, RawMaterial, SalesOrder,
};
pub use types::{Domain, InspectionResult, InspectionStage, OrderStatus, TransactionType};
