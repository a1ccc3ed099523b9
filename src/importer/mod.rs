// ==========================================
// 轮胎工厂 ERP - 导入层
// ==========================================
// 职责: 表格字节 → 领域记录 → 外部记录存储，逐行统计成败
// 支持: .xlsx
// 分层: cell（单元格强制转换）→ sheet_reader（工作簿 / 表头定位）
//       → header_rules（表头映射）→ adapters（每张表的规则）→ row_importer（逐行循环）
// ==========================================

pub mod adapters;
pub mod cell;
pub mod error;
pub mod header_rules;
pub mod row_importer;
pub mod sheet_reader;

// 重导出
pub use cell::{
    coerce_date, coerce_integer, coerce_number, coerce_text, excel_serial_to_date,
    parse_iso_date, CellValue, ISO_DATE_FORMAT,
};
pub use error::{ImportError, ImportOutcome};
pub use header_rules::{normalize_header, resolve_header, unmapped_headers, HeaderMatcher, HeaderRule, MappedRow};
pub use row_importer::{
    import_data, import_financial_data, import_inventory_data, import_production_data,
    import_quality_data, import_sales_data,
};
pub use sheet_reader::{into_tabular, HeaderLocator, RawRow, TabularSheet, WorkbookSource};
