// ==========================================
// 轮胎工厂 ERP - 领域适配器
// ==========================================
// 职责: 每张工作表一套规则（表头 ↔ 字段、类型转换、跳行判定、派生字段）
// 红线: 表头文本是模板生成器与导入器之间的契约，两边共用 SheetSchema
// ==========================================

pub mod financial;
pub mod inventory;
pub mod production;
pub mod quality;
pub mod sales;

use crate::config::InterchangeConfig;
use crate::domain::DomainRecord;
use crate::importer::cell::{coerce_date, parse_iso_date};
use crate::importer::error::{ImportError, ImportOutcome};
use crate::importer::header_rules::{HeaderRule, MappedRow};
use chrono::NaiveDate;

pub use financial::FinancialAdapter;
pub use inventory::{FinishedGoodsAdapter, RawMaterialsAdapter};
pub use production::ProductionAdapter;
pub use quality::QualityAdapter;
pub use sales::{DealersAdapter, SalesOrdersAdapter};

// ==========================================
// ColumnDef / SheetSchema - 工作表列定义
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub label: &'static str,
    /// 金额列：表头追加币种标签，如 "Unit Price (MMK)"
    pub money: bool,
}

impl ColumnDef {
    pub const fn plain(label: &'static str) -> Self {
        Self { label, money: false }
    }

    pub const fn money(label: &'static str) -> Self {
        Self { label, money: true }
    }

    pub fn header(&self, currency_label: &str) -> String {
        if self.money {
            format!("{} ({})", self.label, currency_label)
        } else {
            self.label.to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetSchema {
    pub sheet_name: &'static str,
    pub columns: &'static [ColumnDef],
}

impl SheetSchema {
    pub fn headers(&self, config: &InterchangeConfig) -> Vec<String> {
        self.columns
            .iter()
            .map(|c| c.header(&config.currency_label))
            .collect()
    }
}

// ==========================================
// AdapterContext - 单次导入调用的上下文
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct AdapterContext<'a> {
    pub config: &'a InterchangeConfig,
    /// 日期无法识别时的兜底值
    pub today: NaiveDate,
}

// ==========================================
// SheetAdapter Trait
// ==========================================
// 实现者: 每张工作表一个零大小类型
pub trait SheetAdapter {
    type Field: Copy + PartialEq + std::fmt::Debug + 'static;

    /// 工作表名称与列（模板 / 导出 / 导入共用）
    const SCHEMA: SheetSchema;

    /// 有序表头规则表
    const RULES: &'static [HeaderRule<Self::Field>];

    /// 行定义字段缺失 → 视为空白/填充行，整行跳过（既不算成功也不算失败）
    fn is_padding(row: &MappedRow<Self::Field>) -> bool;

    /// 组装领域记录（含派生字段）；Err 记为该行失败
    fn build(row: &MappedRow<Self::Field>, ctx: &AdapterContext<'_>) -> ImportOutcome<DomainRecord>;
}

// ==========================================
// 适配器共用的字段读取
// ==========================================

/// 必填文本
pub(crate) fn required_text<F: Copy + PartialEq>(
    row: &MappedRow<F>,
    field: F,
    label: &'static str,
) -> ImportOutcome<String> {
    row.text(field).ok_or(ImportError::MissingField(label))
}

/// 必填日期（数值序列号 / ISO 文本）
pub(crate) fn required_date<F: Copy + PartialEq>(
    row: &MappedRow<F>,
    field: F,
    label: &'static str,
    ctx: &AdapterContext<'_>,
) -> ImportOutcome<NaiveDate> {
    if !row.has(field) {
        return Err(ImportError::MissingField(label));
    }
    parse_iso_date(label, &coerce_date(row.cell(field), ctx.today))
}

/// 可选日期：空单元格 → None，非空但无法解析 → Err
pub(crate) fn optional_date<F: Copy + PartialEq>(
    row: &MappedRow<F>,
    field: F,
    label: &'static str,
    ctx: &AdapterContext<'_>,
) -> ImportOutcome<Option<NaiveDate>> {
    if !row.has(field) {
        return Ok(None);
    }
    parse_iso_date(label, &coerce_date(row.cell(field), ctx.today)).map(Some)
}

/// 必填枚举（FromStr 错误文本原样作为行错误）
pub(crate) fn required_enum<F, T>(
    row: &MappedRow<F>,
    field: F,
    label: &'static str,
) -> ImportOutcome<T>
where
    F: Copy + PartialEq,
    T: std::str::FromStr<Err = String>,
{
    let raw = required_text(row, field, label)?;
    raw.parse::<T>()
        .map_err(|message| ImportError::InvalidValue { field: label, message })
}

/// 不可为负的整数
pub(crate) fn non_negative(label: &'static str, value: i64) -> ImportOutcome<i64> {
    if value < 0 {
        return Err(ImportError::InvalidValue {
            field: label,
            message: format!("must not be negative (got {})", value),
        });
    }
    Ok(value)
}
