// ==========================================
// 轮胎工厂 ERP - 领域记录
// ==========================================
// 职责: 交给外部记录存储的强类型实体
// 约定: 必填字段为非 Option；可选字段为 Option（空单元格 → None）
// 金额单位: MMK（整数，无辅币）
// ==========================================

use crate::domain::types::{
    InspectionResult, InspectionStage, OrderStatus, TransactionType,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// ProductionRecord - 日产记录
// ==========================================
// 硫化三档: A = 合格, B = 次品, R = 报废
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub production_date: NaiveDate,
    pub tire_size: String,
    pub tire_type: Option<String>,
    pub batch_number: String,
    pub shift: String,
    pub curing_a: i64,
    pub curing_b: i64,
    pub curing_r: i64,
    pub total_produced: i64, // 派生: A + B + R
    pub notes: Option<String>,
}

impl ProductionRecord {
    /// 三档硫化数量合计（总产量只由此派生，不信任输入的合计列）
    ///
    /// 溢出 → None
    pub fn curing_total(curing_a: i64, curing_b: i64, curing_r: i64) -> Option<i64> {
        curing_a.checked_add(curing_b)?.checked_add(curing_r)
    }
}

// ==========================================
// RawMaterial - 原材料库存
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMaterial {
    pub material_name: String,
    pub material_type: String,
    pub quantity_in_stock: i64,
    pub unit: String,
    pub unit_cost: i64,
    pub reorder_level: i64,
    pub supplier: Option<String>,
    pub location: Option<String>,
}

// ==========================================
// FinishedGood - 成品库存
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishedGood {
    pub tire_size: String,
    pub tire_type: String,
    pub quantity_in_stock: i64,
    pub unit_price: i64,
    pub location: Option<String>,
}

// ==========================================
// Dealer - 经销商
// ==========================================
// 自然键: dealer_code（销售订单 / 财务交易通过它引用经销商）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dealer {
    pub dealer_code: String,
    pub dealer_name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub credit_limit: Option<i64>,
    pub payment_terms: Option<String>,
}

// ==========================================
// SalesOrder - 销售订单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrder {
    pub order_number: String,
    pub dealer_code: String,
    pub order_date: NaiveDate,
    pub tire_size: String,
    pub tire_type: Option<String>,
    pub quantity: i64,
    pub unit_price: i64,
    pub total_amount: i64, // 派生: quantity × unit_price
    pub status: OrderStatus,
    pub delivery_date: Option<NaiveDate>,
}

// ==========================================
// FinancialTransaction - 财务交易
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialTransaction {
    pub transaction_date: NaiveDate,
    pub transaction_type: TransactionType,
    pub category: String,
    pub description: Option<String>,
    pub amount: i64,
    pub reference_number: Option<String>,
    pub dealer_code: Option<String>,
}

// ==========================================
// QualityInspection - 质检记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityInspection {
    pub batch_number: String,
    pub stage: InspectionStage,
    pub inspection_date: NaiveDate,
    pub inspector_name: String,
    pub result: InspectionResult,
    pub defect_type: Option<String>,
    pub defect_count: i64,
    pub notes: Option<String>,
}

// ==========================================
// DomainRecord - 单行解码结果
// ==========================================
// 适配器把每一行解码为其中一个变体，再交给 RecordStore::create 分派
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entity", rename_all = "snake_case")]
pub enum DomainRecord {
    Production(ProductionRecord),
    RawMaterial(RawMaterial),
    FinishedGood(FinishedGood),
    Dealer(Dealer),
    SalesOrder(SalesOrder),
    FinancialTransaction(FinancialTransaction),
    QualityInspection(QualityInspection),
}

impl DomainRecord {
    /// 实体名（用于日志）
    pub fn entity_name(&self) -> &'static str {
        match self {
            DomainRecord::Production(_) => "production_record",
            DomainRecord::RawMaterial(_) => "raw_material",
            DomainRecord::FinishedGood(_) => "finished_good",
            DomainRecord::Dealer(_) => "dealer",
            DomainRecord::SalesOrder(_) => "sales_order",
            DomainRecord::FinancialTransaction(_) => "financial_transaction",
            DomainRecord::QualityInspection(_) => "quality_inspection",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curing_total() {
        assert_eq!(ProductionRecord::curing_total(95, 3, 2), Some(100));
        assert_eq!(ProductionRecord::curing_total(0, 0, 0), Some(0));
        assert_eq!(ProductionRecord::curing_total(i64::MAX, 1, 0), None);
    }

    #[test]
    fn test_domain_record_serializes_with_entity_tag() {
        let record = DomainRecord::FinishedGood(FinishedGood {
            tire_size: "750R16".to_string(),
            tire_type: "nylon".to_string(),
            quantity_in_stock: 500,
            unit_price: 85000,
            location: None,
        });

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["entity"], "finished_good");
        assert_eq!(json["unit_price"], 85000);
        assert_eq!(record.entity_name(), "finished_good");
    }
}
