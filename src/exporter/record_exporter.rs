// ==========================================
// 轮胎工厂 ERP - 记录导出
// ==========================================
// 职责: 领域记录 → 工作簿（每个记录集合一张表）
// 红线: 表头与列顺序直接取自导入适配器的 SheetSchema，导出结果可原样再导入
// 单元格约定:
// - 日期 → "YYYY-MM-DD" 文本
// - 枚举 → 小写文本
// - 整数 → 数值
// - None → 空单元格
// ==========================================

use crate::config::InterchangeConfig;
use crate::domain::{
    Dealer, FinancialTransaction, FinishedGood, ProductionRecord, QualityInspection, RawMaterial,
    SalesOrder,
};
use crate::exporter::error::ExportResult;
use crate::exporter::sheet_writer::{write_workbook, SheetData};
use crate::importer::adapters::{
    DealersAdapter, FinancialAdapter, FinishedGoodsAdapter, ProductionAdapter, QualityAdapter,
    RawMaterialsAdapter, SalesOrdersAdapter, SheetAdapter, SheetSchema,
};
use crate::importer::cell::{CellValue, ISO_DATE_FORMAT};
use chrono::NaiveDate;
use tracing::info;

// ==========================================
// SheetRow Trait - 记录 → 一行单元格
// ==========================================
pub trait SheetRow {
    /// 所属工作表（与导入适配器共用）
    const SCHEMA: SheetSchema;

    /// 按 SCHEMA.columns 顺序展开的单元格
    fn cells(&self) -> Vec<CellValue>;

    /// 主日期（导出时按日期区间过滤；无日期的实体返回 None，永不被过滤）
    fn primary_date(&self) -> Option<NaiveDate> {
        None
    }
}

fn date(value: NaiveDate) -> CellValue {
    CellValue::Text(value.format(ISO_DATE_FORMAT).to_string())
}

fn opt_date(value: Option<NaiveDate>) -> CellValue {
    value.map(date).unwrap_or_default()
}

fn text(value: &str) -> CellValue {
    CellValue::text(value)
}

fn opt_text(value: Option<&String>) -> CellValue {
    value.map(|s| CellValue::text(s.as_str())).unwrap_or_default()
}

fn int(value: i64) -> CellValue {
    CellValue::Number(value as f64)
}

impl SheetRow for ProductionRecord {
    const SCHEMA: SheetSchema = ProductionAdapter::SCHEMA;

    fn cells(&self) -> Vec<CellValue> {
        vec![
            date(self.production_date),
            text(&self.tire_size),
            opt_text(self.tire_type.as_ref()),
            text(&self.batch_number),
            text(&self.shift),
            int(self.curing_a),
            int(self.curing_b),
            int(self.curing_r),
            int(self.total_produced),
            opt_text(self.notes.as_ref()),
        ]
    }

    fn primary_date(&self) -> Option<NaiveDate> {
        Some(self.production_date)
    }
}

impl SheetRow for RawMaterial {
    const SCHEMA: SheetSchema = RawMaterialsAdapter::SCHEMA;

    fn cells(&self) -> Vec<CellValue> {
        vec![
            text(&self.material_name),
            text(&self.material_type),
            int(self.quantity_in_stock),
            text(&self.unit),
            int(self.unit_cost),
            int(self.reorder_level),
            opt_text(self.supplier.as_ref()),
            opt_text(self.location.as_ref()),
        ]
    }
}

impl SheetRow for FinishedGood {
    const SCHEMA: SheetSchema = FinishedGoodsAdapter::SCHEMA;

    fn cells(&self) -> Vec<CellValue> {
        vec![
            text(&self.tire_size),
            text(&self.tire_type),
            int(self.quantity_in_stock),
            int(self.unit_price),
            opt_text(self.location.as_ref()),
        ]
    }
}

impl SheetRow for Dealer {
    const SCHEMA: SheetSchema = DealersAdapter::SCHEMA;

    fn cells(&self) -> Vec<CellValue> {
        vec![
            text(&self.dealer_code),
            text(&self.dealer_name),
            opt_text(self.contact_person.as_ref()),
            opt_text(self.phone.as_ref()),
            opt_text(self.email.as_ref()),
            opt_text(self.address.as_ref()),
            self.credit_limit.map(int).unwrap_or_default(),
            opt_text(self.payment_terms.as_ref()),
        ]
    }
}

impl SheetRow for SalesOrder {
    const SCHEMA: SheetSchema = SalesOrdersAdapter::SCHEMA;

    fn cells(&self) -> Vec<CellValue> {
        vec![
            text(&self.order_number),
            text(&self.dealer_code),
            date(self.order_date),
            text(&self.tire_size),
            opt_text(self.tire_type.as_ref()),
            int(self.quantity),
            int(self.unit_price),
            int(self.total_amount),
            text(&self.status.to_string()),
            opt_date(self.delivery_date),
        ]
    }

    fn primary_date(&self) -> Option<NaiveDate> {
        Some(self.order_date)
    }
}

impl SheetRow for FinancialTransaction {
    const SCHEMA: SheetSchema = FinancialAdapter::SCHEMA;

    fn cells(&self) -> Vec<CellValue> {
        vec![
            date(self.transaction_date),
            text(&self.transaction_type.to_string()),
            text(&self.category),
            opt_text(self.description.as_ref()),
            int(self.amount),
            opt_text(self.reference_number.as_ref()),
            opt_text(self.dealer_code.as_ref()),
        ]
    }

    fn primary_date(&self) -> Option<NaiveDate> {
        Some(self.transaction_date)
    }
}

impl SheetRow for QualityInspection {
    const SCHEMA: SheetSchema = QualityAdapter::SCHEMA;

    fn cells(&self) -> Vec<CellValue> {
        vec![
            text(&self.batch_number),
            text(&self.stage.to_string()),
            date(self.inspection_date),
            text(&self.inspector_name),
            text(&self.result.to_string()),
            opt_text(self.defect_type.as_ref()),
            int(self.defect_count),
            opt_text(self.notes.as_ref()),
        ]
    }

    fn primary_date(&self) -> Option<NaiveDate> {
        Some(self.inspection_date)
    }
}

/// 记录集合 → 一张工作表
pub fn sheet_of<R: SheetRow>(records: &[R], config: &InterchangeConfig) -> SheetData {
    SheetData {
        name: R::SCHEMA.sheet_name.to_string(),
        headers: R::SCHEMA.headers(config),
        rows: records.iter().map(SheetRow::cells).collect(),
    }
}

// ==========================================
// 导出入口
// ==========================================

/// 导出生产日报
pub fn export_production_data(
    records: &[ProductionRecord],
    config: &InterchangeConfig,
) -> ExportResult<Vec<u8>> {
    info!(records = records.len(), "导出生产日报");
    write_workbook(&[sheet_of(records, config)])
}

/// 导出库存（原材料 + 成品两张表）
pub fn export_inventory_data(
    raw_materials: &[RawMaterial],
    finished_goods: &[FinishedGood],
    config: &InterchangeConfig,
) -> ExportResult<Vec<u8>> {
    info!(
        raw_materials = raw_materials.len(),
        finished_goods = finished_goods.len(),
        "导出库存"
    );
    write_workbook(&[sheet_of(raw_materials, config), sheet_of(finished_goods, config)])
}

/// 导出销售（经销商 + 销售订单两张表）
pub fn export_sales_data(
    dealers: &[Dealer],
    orders: &[SalesOrder],
    config: &InterchangeConfig,
) -> ExportResult<Vec<u8>> {
    info!(dealers = dealers.len(), orders = orders.len(), "导出销售");
    write_workbook(&[sheet_of(dealers, config), sheet_of(orders, config)])
}

/// 导出财务交易
pub fn export_financial_data(
    transactions: &[FinancialTransaction],
    config: &InterchangeConfig,
) -> ExportResult<Vec<u8>> {
    info!(records = transactions.len(), "导出财务交易");
    write_workbook(&[sheet_of(transactions, config)])
}

/// 导出质检记录
pub fn export_quality_data(
    inspections: &[QualityInspection],
    config: &InterchangeConfig,
) -> ExportResult<Vec<u8>> {
    info!(records = inspections.len(), "导出质检记录");
    write_workbook(&[sheet_of(inspections, config)])
}
