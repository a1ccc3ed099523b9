// ==========================================
// 轮胎工厂 ERP - 批量数据交换核心库
// ==========================================
// 范围: 导入模板生成 / Excel 逐行导入 / 记录导出
// 业务域: 生产、库存、销售、财务、质检
// 持久化: 通过 RecordStore trait 交给外部系统
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体、枚举与导入结果
pub mod domain;

// 记录存储层 - 外部存储接口 + 内存实现
pub mod repository;

// 导入层 - 工作簿解析与逐行导入
pub mod importer;

// 导出层 - 模板与记录导出
pub mod exporter;

// 配置层
pub mod config;

// API 层 - RPC 边界
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use api::{ApiError, DateRange, FilePayload, InterchangeApi};
pub use config::InterchangeConfig;
pub use domain::{
    Dealer, Domain, DomainRecord, FinancialTransaction, FinishedGood, ImportResult,
    InspectionResult, InspectionStage, OrderStatus, ProductionRecord, QualityInspection,
    RawMaterial, RowError, SalesOrder, TransactionType,
};
pub use exporter::{
    export_financial_data, export_inventory_data, export_production_data, export_quality_data,
    export_sales_data, generate_financial_template, generate_inventory_template,
    generate_production_template, generate_quality_template, generate_sales_template,
    generate_template, ExportError,
};
pub use importer::{
    coerce_date, coerce_number, import_data, import_financial_data, import_inventory_data,
    import_production_data, import_quality_data, import_sales_data, ImportError,
};
pub use repository::{InMemoryRecordStore, RecordQuery, RecordStore, RepositoryError};

// ==========================================
// 常量定义
// ==========================================

// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "轮胎工厂 ERP 数据交换";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_every_domain_has_template() {
        let config = InterchangeConfig::default();
        for domain in Domain::ALL {
            assert!(generate_template(domain, &config).is_ok(), "domain {}", domain);
        }
    }
}
