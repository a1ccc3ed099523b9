// ==========================================
// 轮胎工厂 ERP - 导入模板生成
// ==========================================
// 职责: 每个领域一个工作簿，每张表 = 表头 + 一行示例数据
// 做法: 示例行本身就是一条领域记录，经由导出路径写出
//       → 模板表头与导入规则永远一致，模板可直接导入
// 确定性: 同一配置下输出不变（示例日期固定）
// ==========================================

use crate::config::InterchangeConfig;
use crate::domain::{
    Dealer, Domain, FinancialTransaction, FinishedGood, InspectionResult, InspectionStage,
    OrderStatus, ProductionRecord, QualityInspection, RawMaterial, SalesOrder, TransactionType,
};
use crate::exporter::error::ExportResult;
use crate::exporter::record_exporter::{
    export_financial_data, export_inventory_data, export_production_data, export_quality_data,
    export_sales_data,
};
use chrono::NaiveDate;

// 示例行日期
fn example_date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, day).unwrap_or_default()
}

fn example_production() -> ProductionRecord {
    let (curing_a, curing_b, curing_r) = (95, 3, 2);
    let total_produced = curing_a + curing_b + curing_r;
    ProductionRecord {
        production_date: example_date(15),
        tire_size: "750R16".to_string(),
        tire_type: Some("nylon".to_string()),
        batch_number: "BATCH-001".to_string(),
        shift: "day".to_string(),
        curing_a,
        curing_b,
        curing_r,
        total_produced,
        notes: Some("Normal production".to_string()),
    }
}

fn example_raw_material() -> RawMaterial {
    RawMaterial {
        material_name: "Natural Rubber".to_string(),
        material_type: "rubber".to_string(),
        quantity_in_stock: 5000,
        unit: "kg".to_string(),
        unit_cost: 2500,
        reorder_level: 1000,
        supplier: Some("Myanmar Rubber Co.".to_string()),
        location: Some("Warehouse A".to_string()),
    }
}

fn example_finished_good() -> FinishedGood {
    FinishedGood {
        tire_size: "750R16".to_string(),
        tire_type: "nylon".to_string(),
        quantity_in_stock: 500,
        unit_price: 85000,
        location: Some("Finished Goods Warehouse".to_string()),
    }
}

fn example_dealer() -> Dealer {
    Dealer {
        dealer_code: "D001".to_string(),
        dealer_name: "Yangon Tire Shop".to_string(),
        contact_person: Some("U Aung".to_string()),
        phone: Some("09-123456789".to_string()),
        email: Some("dealer@example.com".to_string()),
        address: Some("Yangon, Myanmar".to_string()),
        credit_limit: Some(10_000_000),
        payment_terms: Some("net30".to_string()),
    }
}

fn example_sales_order() -> SalesOrder {
    let (quantity, unit_price) = (50, 85000);
    SalesOrder {
        order_number: "SO-2025-001".to_string(),
        dealer_code: "D001".to_string(),
        order_date: example_date(15),
        tire_size: "750R16".to_string(),
        tire_type: Some("nylon".to_string()),
        quantity,
        unit_price,
        total_amount: quantity * unit_price,
        status: OrderStatus::Pending,
        delivery_date: Some(example_date(20)),
    }
}

fn example_transaction() -> FinancialTransaction {
    FinancialTransaction {
        transaction_date: example_date(15),
        transaction_type: TransactionType::Revenue,
        category: "tire_sales".to_string(),
        description: Some("Sale to Dealer D001".to_string()),
        amount: 4_250_000,
        reference_number: Some("INV-001".to_string()),
        dealer_code: Some("D001".to_string()),
    }
}

fn example_inspection() -> QualityInspection {
    QualityInspection {
        batch_number: "BATCH-001".to_string(),
        stage: InspectionStage::Final,
        inspection_date: example_date(15),
        inspector_name: "U Kyaw".to_string(),
        result: InspectionResult::Pass,
        defect_type: None,
        defect_count: 0,
        notes: Some("All quality checks passed".to_string()),
    }
}

// ==========================================
// 模板入口
// ==========================================

pub fn generate_production_template(config: &InterchangeConfig) -> ExportResult<Vec<u8>> {
    export_production_data(&[example_production()], config)
}

pub fn generate_inventory_template(config: &InterchangeConfig) -> ExportResult<Vec<u8>> {
    export_inventory_data(&[example_raw_material()], &[example_finished_good()], config)
}

pub fn generate_sales_template(config: &InterchangeConfig) -> ExportResult<Vec<u8>> {
    export_sales_data(&[example_dealer()], &[example_sales_order()], config)
}

pub fn generate_financial_template(config: &InterchangeConfig) -> ExportResult<Vec<u8>> {
    export_financial_data(&[example_transaction()], config)
}

pub fn generate_quality_template(config: &InterchangeConfig) -> ExportResult<Vec<u8>> {
    export_quality_data(&[example_inspection()], config)
}

/// 按领域生成模板
pub fn generate_template(domain: Domain, config: &InterchangeConfig) -> ExportResult<Vec<u8>> {
    match domain {
        Domain::Production => generate_production_template(config),
        Domain::Inventory => generate_inventory_template(config),
        Domain::Sales => generate_sales_template(config),
        Domain::Financial => generate_financial_template(config),
        Domain::Quality => generate_quality_template(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::sheet_reader::WorkbookSource;

    #[test]
    fn test_template_sheet_names() {
        let config = InterchangeConfig::default();
        let expected: [(Domain, &[&str]); 5] = [
            (Domain::Production, &["Production"]),
            (Domain::Inventory, &["Raw Materials", "Finished Goods"]),
            (Domain::Sales, &["Dealers", "Sales Orders"]),
            (Domain::Financial, &["Transactions"]),
            (Domain::Quality, &["Quality Inspections"]),
        ];

        for (domain, sheets) in expected {
            let bytes = generate_template(domain, &config).unwrap();
            let source = WorkbookSource::open(&bytes).unwrap();
            assert_eq!(source.sheet_names(), sheets, "domain {}", domain);
        }
    }

    #[test]
    fn test_example_rows_are_consistent() {
        assert_eq!(example_production().total_produced, 100);
        assert_eq!(example_sales_order().total_amount, 4_250_000);
    }
}
