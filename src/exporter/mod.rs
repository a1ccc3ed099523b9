// ==========================================
// 轮胎工厂 ERP - 导出层
// ==========================================
// 职责: 领域记录 / 模板示例 → .xlsx 字节
// 与导入层共用 SheetSchema，保证导出结果可再导入
// ==========================================

pub mod error;
pub mod record_exporter;
pub mod sheet_writer;
pub mod template;

pub use error::{ExportError, ExportResult};
pub use record_exporter::{
    export_financial_data, export_inventory_data, export_production_data, export_quality_data,
    export_sales_data, sheet_of, SheetRow,
};
pub use sheet_writer::{write_workbook, SheetData};
pub use template::{
    generate_financial_template, generate_inventory_template, generate_production_template,
    generate_quality_template, generate_sales_template, generate_template,
};
