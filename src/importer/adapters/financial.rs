// ==========================================
// 轮胎工厂 ERP - 财务交易适配器
// ==========================================
// 行定义字段: 交易日期
// 金额不做符号校验（支出 / 负债按原值记录）
// ==========================================

use crate::domain::{DomainRecord, FinancialTransaction, TransactionType};
use crate::importer::adapters::{
    required_date, required_enum, required_text, AdapterContext, ColumnDef, SheetAdapter,
    SheetSchema,
};
use crate::importer::error::ImportOutcome;
use crate::importer::header_rules::{HeaderMatcher::*, HeaderRule, MappedRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinancialField {
    TransactionDate,
    TransactionType,
    Category,
    Description,
    Amount,
    ReferenceNumber,
    DealerCode,
}

pub struct FinancialAdapter;

impl SheetAdapter for FinancialAdapter {
    type Field = FinancialField;

    const SCHEMA: SheetSchema = SheetSchema {
        sheet_name: "Transactions",
        columns: &[
            ColumnDef::plain("Transaction Date (YYYY-MM-DD)"),
            ColumnDef::plain("Transaction Type"),
            ColumnDef::plain("Category"),
            ColumnDef::plain("Description"),
            ColumnDef::money("Amount"),
            ColumnDef::plain("Reference Number"),
            ColumnDef::plain("Dealer Code"),
        ],
    };

    const RULES: &'static [HeaderRule<FinancialField>] = &[
        HeaderRule::new(FinancialField::TransactionDate, &[Contains("date")]),
        HeaderRule::new(FinancialField::TransactionType, &[Contains("type")]),
        HeaderRule::new(FinancialField::Category, &[Contains("category")]),
        HeaderRule::new(
            FinancialField::Description,
            &[Contains("description"), Contains("details"), Contains("memo")],
        ),
        HeaderRule::new(FinancialField::Amount, &[Contains("amount")]),
        HeaderRule::new(
            FinancialField::ReferenceNumber,
            &[Contains("reference"), StartsWith("ref"), Contains("voucher")],
        ),
        HeaderRule::new(FinancialField::DealerCode, &[Contains("dealer")]),
    ];

    fn is_padding(row: &MappedRow<FinancialField>) -> bool {
        !row.has(FinancialField::TransactionDate)
    }

    fn build(row: &MappedRow<FinancialField>, ctx: &AdapterContext<'_>) -> ImportOutcome<DomainRecord> {
        let transaction_date =
            required_date(row, FinancialField::TransactionDate, "Transaction Date", ctx)?;
        let transaction_type: TransactionType =
            required_enum(row, FinancialField::TransactionType, "Transaction Type")?;

        Ok(DomainRecord::FinancialTransaction(FinancialTransaction {
            transaction_date,
            transaction_type,
            category: required_text(row, FinancialField::Category, "Category")?,
            description: row.text(FinancialField::Description),
            amount: row.integer(FinancialField::Amount),
            reference_number: row.text(FinancialField::ReferenceNumber),
            dealer_code: row.text(FinancialField::DealerCode),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InterchangeConfig;
    use crate::importer::cell::CellValue;
    use crate::importer::header_rules::normalize_header;
    use crate::importer::sheet_reader::RawRow;
    use chrono::NaiveDate;

    fn build(cells: &[(&str, CellValue)]) -> ImportOutcome<FinancialTransaction> {
        let config = InterchangeConfig::default();
        let ctx = AdapterContext {
            config: &config,
            today: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        };
        let raw = RawRow {
            row_number: 2,
            cells: cells
                .iter()
                .map(|(h, c)| (normalize_header(h), c.clone()))
                .collect(),
        };
        match FinancialAdapter::build(&MappedRow::from_raw(&raw, FinancialAdapter::RULES), &ctx)? {
            DomainRecord::FinancialTransaction(t) => Ok(t),
            other => panic!("unexpected record: {:?}", other),
        }
    }

    #[test]
    fn test_revenue_row() {
        let txn = build(&[
            ("Transaction Date (YYYY-MM-DD)", CellValue::Number(45672.0)),
            ("Transaction Type", CellValue::text("Revenue")),
            ("Category", CellValue::text("Tire Sales")),
            ("Amount (MMK)", CellValue::text("4,250,000 MMK")),
            ("Reference Number", CellValue::text("INV-001")),
            ("Dealer Code", CellValue::text("D001")),
        ])
        .unwrap();

        assert_eq!(txn.transaction_type, TransactionType::Revenue);
        assert_eq!(txn.amount, 4_250_000);
        assert_eq!(txn.dealer_code.as_deref(), Some("D001"));
        assert_eq!(txn.description, None);
    }

    #[test]
    fn test_unknown_transaction_type_fails() {
        let err = build(&[
            ("Transaction Date", CellValue::text("2025-01-15")),
            ("Transaction Type", CellValue::text("gift")),
            ("Category", CellValue::text("Misc")),
        ])
        .unwrap_err();

        assert!(err.to_string().starts_with("Invalid value for Transaction Type"));
    }

    #[test]
    fn test_missing_category_fails() {
        let err = build(&[
            ("Transaction Date", CellValue::text("2025-01-15")),
            ("Transaction Type", CellValue::text("expense")),
        ])
        .unwrap_err();

        assert_eq!(err.to_string(), "Missing required field: Category");
    }
}
