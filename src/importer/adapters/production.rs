// ==========================================
// 轮胎工厂 ERP - 生产日报适配器
// ==========================================
// 表头定位: 扫描前 N 行寻找含 "date" 的单元格（手工报表常有标题行）
// 兼容两种表头风格:
// - 模板风格: "Curing A (Approved)" / "Curing B (B-Grade)" / "Curing R (Rejected)"
// - 车间报表: "Curing(A)" / "Curing(B)" / "Curing(R)" / "Bach No" 等
// 派生: total_produced = A + B + R（输入中的合计列被忽略）
// ==========================================

use crate::domain::{DomainRecord, ProductionRecord};
use crate::importer::adapters::{
    non_negative, required_date, required_text, AdapterContext, ColumnDef, SheetAdapter,
    SheetSchema,
};
use crate::importer::error::{ImportError, ImportOutcome};
use crate::importer::header_rules::{HeaderMatcher::*, HeaderRule, MappedRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductionField {
    Date,
    BatchNumber,
    TireSize,
    TireType,
    Shift,
    Notes,
    /// 输入中的合计列：识别后丢弃，总产量只由三档派生
    ReportedTotal,
    CuringA,
    CuringB,
    CuringR,
}

pub struct ProductionAdapter;

impl SheetAdapter for ProductionAdapter {
    type Field = ProductionField;

    const SCHEMA: SheetSchema = SheetSchema {
        sheet_name: "Production",
        columns: &[
            ColumnDef::plain("Production Date (YYYY-MM-DD)"),
            ColumnDef::plain("Tire Size"),
            ColumnDef::plain("Tire Type"),
            ColumnDef::plain("Batch Number"),
            ColumnDef::plain("Shift"),
            ColumnDef::plain("Curing A (Approved)"),
            ColumnDef::plain("Curing B (B-Grade)"),
            ColumnDef::plain("Curing R (Rejected)"),
            ColumnDef::plain("Total Produced"),
            ColumnDef::plain("Notes"),
        ],
    };

    // 顺序敏感: 备注 / 合计必须先于 "a)" 这类后缀规则
    const RULES: &'static [HeaderRule<ProductionField>] = &[
        HeaderRule::new(ProductionField::Date, &[Contains("date")]),
        HeaderRule::new(ProductionField::BatchNumber, &[Contains("batch"), Contains("bach")]),
        HeaderRule::new(ProductionField::TireSize, &[Contains("size")]),
        HeaderRule::new(ProductionField::TireType, &[Contains("type")]),
        HeaderRule::new(ProductionField::Shift, &[Contains("shift")]),
        HeaderRule::new(ProductionField::Notes, &[Contains("note"), Contains("remark")]),
        HeaderRule::new(ProductionField::ReportedTotal, &[Contains("total"), Contains("produced")]),
        HeaderRule::new(
            ProductionField::CuringA,
            &[Contains("curing a"), EndsWith("a)"), Contains("approved")],
        ),
        HeaderRule::new(ProductionField::CuringB, &[Contains("curing b"), EndsWith("b)")]),
        HeaderRule::new(
            ProductionField::CuringR,
            &[Contains("curing r"), EndsWith("r)"), Contains("rejected")],
        ),
    ];

    fn is_padding(row: &MappedRow<ProductionField>) -> bool {
        !row.has(ProductionField::Date) || !row.has(ProductionField::TireSize)
    }

    fn build(
        row: &MappedRow<ProductionField>,
        ctx: &AdapterContext<'_>,
    ) -> ImportOutcome<DomainRecord> {
        let production_date = required_date(row, ProductionField::Date, "Production Date", ctx)?;
        let tire_size = required_text(row, ProductionField::TireSize, "Tire Size")?;

        let curing_a = non_negative("Curing A", row.integer(ProductionField::CuringA))?;
        let curing_b = non_negative("Curing B", row.integer(ProductionField::CuringB))?;
        let curing_r = non_negative("Curing R", row.integer(ProductionField::CuringR))?;
        let total_produced = ProductionRecord::curing_total(curing_a, curing_b, curing_r)
            .ok_or_else(|| ImportError::InvalidValue {
                field: "Total Produced",
                message: format!("{} + {} + {} is out of range", curing_a, curing_b, curing_r),
            })?;

        Ok(DomainRecord::Production(ProductionRecord {
            production_date,
            tire_size,
            tire_type: row.text(ProductionField::TireType),
            batch_number: row
                .text(ProductionField::BatchNumber)
                .unwrap_or_else(|| ctx.config.default_batch_number.clone()),
            shift: row
                .text(ProductionField::Shift)
                .unwrap_or_else(|| ctx.config.default_shift.clone()),
            curing_a,
            curing_b,
            curing_r,
            total_produced,
            notes: row.text(ProductionField::Notes),
        }))
    }
}
