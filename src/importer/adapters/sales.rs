// ==========================================
// 轮胎工厂 ERP - 销售适配器
// ==========================================
// 工作簿包含两张表，处理顺序固定:
// 1. "Dealers"      → Dealer（先导入，订单引用其 dealer_code）
// 2. "Sales Orders" → SalesOrder
// 派生: total_amount = quantity × unit_price（输入中的合计列被忽略）
// ==========================================

use crate::domain::{Dealer, DomainRecord, OrderStatus, SalesOrder};
use crate::importer::adapters::{
    non_negative, optional_date, required_date, required_text, AdapterContext, ColumnDef,
    SheetAdapter, SheetSchema,
};
use crate::importer::error::{ImportError, ImportOutcome};
use crate::importer::header_rules::{HeaderMatcher::*, HeaderRule, MappedRow};

// ==========================================
// 经销商
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerField {
    DealerCode,
    DealerName,
    ContactPerson,
    Phone,
    Email,
    Address,
    CreditLimit,
    PaymentTerms,
}

pub struct DealersAdapter;

impl SheetAdapter for DealersAdapter {
    type Field = DealerField;

    const SCHEMA: SheetSchema = SheetSchema {
        sheet_name: "Dealers",
        columns: &[
            ColumnDef::plain("Dealer Code"),
            ColumnDef::plain("Dealer Name"),
            ColumnDef::plain("Contact Person"),
            ColumnDef::plain("Phone"),
            ColumnDef::plain("Email"),
            ColumnDef::plain("Address"),
            ColumnDef::money("Credit Limit"),
            ColumnDef::plain("Payment Terms"),
        ],
    };

    const RULES: &'static [HeaderRule<DealerField>] = &[
        HeaderRule::new(
            DealerField::DealerCode,
            &[Contains("dealer code"), Contains("dealer id"), Equals("code")],
        ),
        HeaderRule::new(
            DealerField::DealerName,
            &[Contains("dealer name"), Equals("name"), Contains("company")],
        ),
        HeaderRule::new(DealerField::ContactPerson, &[Contains("contact")]),
        HeaderRule::new(
            DealerField::Phone,
            &[Contains("phone"), Contains("mobile"), StartsWith("tel")],
        ),
        HeaderRule::new(DealerField::Email, &[Contains("email"), Contains("e mail")]),
        HeaderRule::new(DealerField::Address, &[Contains("address")]),
        HeaderRule::new(DealerField::CreditLimit, &[Contains("credit")]),
        HeaderRule::new(DealerField::PaymentTerms, &[Contains("payment"), Contains("terms")]),
    ];

    fn is_padding(row: &MappedRow<DealerField>) -> bool {
        !row.has(DealerField::DealerCode)
    }

    fn build(row: &MappedRow<DealerField>, _ctx: &AdapterContext<'_>) -> ImportOutcome<DomainRecord> {
        let credit_limit = match row.optional_integer(DealerField::CreditLimit) {
            Some(limit) => Some(non_negative("Credit Limit", limit)?),
            None => None,
        };

        Ok(DomainRecord::Dealer(Dealer {
            dealer_code: required_text(row, DealerField::DealerCode, "Dealer Code")?,
            dealer_name: required_text(row, DealerField::DealerName, "Dealer Name")?,
            contact_person: row.text(DealerField::ContactPerson),
            phone: row.text(DealerField::Phone),
            email: row.text(DealerField::Email),
            address: row.text(DealerField::Address),
            credit_limit,
            payment_terms: row.text(DealerField::PaymentTerms),
        }))
    }
}

// ==========================================
// 销售订单
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalesOrderField {
    OrderNumber,
    DeliveryDate,
    OrderDate,
    DealerCode,
    TireSize,
    TireType,
    Quantity,
    UnitPrice,
    /// 输入中的合计列：识别后丢弃
    ReportedTotal,
    Status,
}

pub struct SalesOrdersAdapter;

impl SheetAdapter for SalesOrdersAdapter {
    type Field = SalesOrderField;

    const SCHEMA: SheetSchema = SheetSchema {
        sheet_name: "Sales Orders",
        columns: &[
            ColumnDef::plain("Order Number"),
            ColumnDef::plain("Dealer Code"),
            ColumnDef::plain("Order Date (YYYY-MM-DD)"),
            ColumnDef::plain("Tire Size"),
            ColumnDef::plain("Tire Type"),
            ColumnDef::plain("Quantity"),
            ColumnDef::money("Unit Price"),
            ColumnDef::money("Total Amount"),
            ColumnDef::plain("Status"),
            ColumnDef::plain("Delivery Date (YYYY-MM-DD)"),
        ],
    };

    // 交货日期先于订单日期；单价先于合计
    const RULES: &'static [HeaderRule<SalesOrderField>] = &[
        HeaderRule::new(
            SalesOrderField::OrderNumber,
            &[Contains("order number"), Contains("order no"), Contains("so number"), Equals("order")],
        ),
        HeaderRule::new(SalesOrderField::DeliveryDate, &[Contains("delivery")]),
        HeaderRule::new(SalesOrderField::OrderDate, &[Contains("date")]),
        HeaderRule::new(SalesOrderField::DealerCode, &[Contains("dealer")]),
        HeaderRule::new(SalesOrderField::TireSize, &[Contains("size")]),
        HeaderRule::new(SalesOrderField::TireType, &[Contains("type")]),
        HeaderRule::new(SalesOrderField::Quantity, &[Contains("quantity"), Contains("qty")]),
        HeaderRule::new(SalesOrderField::UnitPrice, &[Contains("unit price"), Equals("price")]),
        HeaderRule::new(SalesOrderField::ReportedTotal, &[Contains("total"), Contains("amount")]),
        HeaderRule::new(SalesOrderField::Status, &[Contains("status")]),
    ];

    fn is_padding(row: &MappedRow<SalesOrderField>) -> bool {
        !row.has(SalesOrderField::OrderNumber)
    }

    fn build(
        row: &MappedRow<SalesOrderField>,
        ctx: &AdapterContext<'_>,
    ) -> ImportOutcome<DomainRecord> {
        let order_number = required_text(row, SalesOrderField::OrderNumber, "Order Number")?;
        let dealer_code = required_text(row, SalesOrderField::DealerCode, "Dealer Code")?;
        let order_date = required_date(row, SalesOrderField::OrderDate, "Order Date", ctx)?;
        let tire_size = required_text(row, SalesOrderField::TireSize, "Tire Size")?;

        let quantity = non_negative("Quantity", row.integer(SalesOrderField::Quantity))?;
        let unit_price = non_negative("Unit Price", row.integer(SalesOrderField::UnitPrice))?;
        let total_amount = quantity
            .checked_mul(unit_price)
            .ok_or_else(|| ImportError::InvalidValue {
                field: "Total Amount",
                message: format!("{} × {} is out of range", quantity, unit_price),
            })?;

        let status = match row.text(SalesOrderField::Status) {
            Some(raw) => raw
                .parse::<OrderStatus>()
                .map_err(|message| ImportError::InvalidValue {
                    field: "Status",
                    message,
                })?,
            None => ctx.config.default_order_status,
        };

        Ok(DomainRecord::SalesOrder(SalesOrder {
            order_number,
            dealer_code,
            order_date,
            tire_size,
            tire_type: row.text(SalesOrderField::TireType),
            quantity,
            unit_price,
            total_amount,
            status,
            delivery_date: optional_date(row, SalesOrderField::DeliveryDate, "Delivery Date", ctx)?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InterchangeConfig;
    use crate::importer::cell::CellValue;
    use crate::importer::header_rules::{normalize_header, resolve_header};
    use crate::importer::sheet_reader::RawRow;
    use chrono::NaiveDate;

    fn raw(cells: &[(&str, CellValue)]) -> RawRow {
        RawRow {
            row_number: 2,
            cells: cells
                .iter()
                .map(|(h, c)| (normalize_header(h), c.clone()))
                .collect(),
        }
    }

    fn build_order(cells: &[(&str, CellValue)]) -> ImportOutcome<SalesOrder> {
        let config = InterchangeConfig::default();
        let ctx = AdapterContext {
            config: &config,
            today: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        };
        let row = MappedRow::from_raw(&raw(cells), SalesOrdersAdapter::RULES);
        match SalesOrdersAdapter::build(&row, &ctx)? {
            DomainRecord::SalesOrder(order) => Ok(order),
            other => panic!("unexpected record: {:?}", other),
        }
    }

    #[test]
    fn test_order_headers_resolve() {
        let resolve = |h: &str| resolve_header(SalesOrdersAdapter::RULES, &normalize_header(h));
        assert_eq!(resolve("Order Date (YYYY-MM-DD)"), Some(SalesOrderField::OrderDate));
        assert_eq!(resolve("Delivery Date (YYYY-MM-DD)"), Some(SalesOrderField::DeliveryDate));
        assert_eq!(resolve("Total Amount (MMK)"), Some(SalesOrderField::ReportedTotal));
        assert_eq!(resolve("Unit Price (MMK)"), Some(SalesOrderField::UnitPrice));
        assert_eq!(resolve("Dealer Code"), Some(SalesOrderField::DealerCode));
    }

    #[test]
    fn test_order_total_derived_and_status_defaulted() {
        let order = build_order(&[
            ("Order Number", CellValue::text("SO-2025-001")),
            ("Dealer Code", CellValue::text("D001")),
            ("Order Date (YYYY-MM-DD)", CellValue::Number(45672.0)),
            ("Tire Size", CellValue::text("750R16")),
            ("Quantity", CellValue::Number(50.0)),
            ("Unit Price (MMK)", CellValue::text("85,000")),
            ("Total Amount (MMK)", CellValue::Number(1.0)),
        ])
        .unwrap();

        assert_eq!(order.total_amount, 4_250_000);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.delivery_date, None);
    }

    #[test]
    fn test_order_unknown_status_fails() {
        let err = build_order(&[
            ("Order Number", CellValue::text("SO-1")),
            ("Dealer Code", CellValue::text("D001")),
            ("Order Date", CellValue::text("2025-01-15")),
            ("Tire Size", CellValue::text("750R16")),
            ("Status", CellValue::text("lost")),
        ])
        .unwrap_err();

        assert!(err.to_string().starts_with("Invalid value for Status"));
    }

    #[test]
    fn test_order_delivery_date_parsed() {
        let order = build_order(&[
            ("Order Number", CellValue::text("SO-1")),
            ("Dealer Code", CellValue::text("D001")),
            ("Order Date", CellValue::text("2025-01-15")),
            ("Tire Size", CellValue::text("750R16")),
            ("Status", CellValue::text("Shipped")),
            ("Delivery Date", CellValue::text("2025-01-20")),
        ])
        .unwrap();

        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(order.delivery_date, NaiveDate::from_ymd_opt(2025, 1, 20));
    }

    #[test]
    fn test_dealer_build() {
        let config = InterchangeConfig::default();
        let ctx = AdapterContext {
            config: &config,
            today: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        };
        let row = MappedRow::from_raw(
            &raw(&[
                ("Dealer Code", CellValue::text("D001")),
                ("Dealer Name", CellValue::text("Yangon Tire Center")),
                ("Phone", CellValue::Number(959123456789.0)),
                ("Credit Limit (MMK)", CellValue::text("10,000,000")),
            ]),
            DealersAdapter::RULES,
        );

        let DomainRecord::Dealer(dealer) = DealersAdapter::build(&row, &ctx).unwrap() else {
            panic!("expected dealer");
        };
        assert_eq!(dealer.phone.as_deref(), Some("959123456789"));
        assert_eq!(dealer.credit_limit, Some(10_000_000));
        assert_eq!(dealer.email, None);
    }

    #[test]
    fn test_dealer_without_name_fails() {
        let config = InterchangeConfig::default();
        let ctx = AdapterContext {
            config: &config,
            today: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        };
        let row = MappedRow::from_raw(&raw(&[("Dealer Code", CellValue::text("D002"))]), DealersAdapter::RULES);

        let err = DealersAdapter::build(&row, &ctx).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: Dealer Name");
    }
}
