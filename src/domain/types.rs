// ==========================================
// 轮胎工厂 ERP - 领域类型定义
// ==========================================
// 职责: 数据交换涉及的枚举值（业务域 / 交易类型 / 检验阶段等）
// 约定: 表格中一律使用小写英文取值
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 业务域 (Domain)
// ==========================================
// 每个业务域对应一套模板 / 导入 / 导出
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Production, // 生产
    Inventory,  // 库存（原材料 + 成品）
    Sales,      // 销售（经销商 + 订单）
    Financial,  // 财务
    Quality,    // 质检
}

impl Domain {
    pub const ALL: [Domain; 5] = [
        Domain::Production,
        Domain::Inventory,
        Domain::Sales,
        Domain::Financial,
        Domain::Quality,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Production => "production",
            Domain::Inventory => "inventory",
            Domain::Sales => "sales",
            Domain::Financial => "financial",
            Domain::Quality => "quality",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" => Ok(Domain::Production),
            "inventory" => Ok(Domain::Inventory),
            "sales" => Ok(Domain::Sales),
            "financial" => Ok(Domain::Financial),
            "quality" => Ok(Domain::Quality),
            other => Err(format!("Unknown domain: {}", other)),
        }
    }
}

// ==========================================
// 财务交易类型 (Transaction Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Revenue,   // 收入
    Expense,   // 支出
    Asset,     // 资产
    Liability, // 负债
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Revenue => write!(f, "revenue"),
            TransactionType::Expense => write!(f, "expense"),
            TransactionType::Asset => write!(f, "asset"),
            TransactionType::Liability => write!(f, "liability"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "revenue" => Ok(TransactionType::Revenue),
            "expense" => Ok(TransactionType::Expense),
            "asset" => Ok(TransactionType::Asset),
            "liability" => Ok(TransactionType::Liability),
            other => Err(format!(
                "Invalid transaction type '{}' (expected revenue, expense, asset or liability)",
                other
            )),
        }
    }
}

// ==========================================
// 质检阶段 (Inspection Stage)
// ==========================================
// 混炼 → 成型 → 硫化 → 终检
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspectionStage {
    Mixing,
    Building,
    Curing,
    Final,
}

impl fmt::Display for InspectionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectionStage::Mixing => write!(f, "mixing"),
            InspectionStage::Building => write!(f, "building"),
            InspectionStage::Curing => write!(f, "curing"),
            InspectionStage::Final => write!(f, "final"),
        }
    }
}

impl FromStr for InspectionStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mixing" => Ok(InspectionStage::Mixing),
            "building" => Ok(InspectionStage::Building),
            "curing" => Ok(InspectionStage::Curing),
            "final" => Ok(InspectionStage::Final),
            other => Err(format!(
                "Invalid inspection stage '{}' (expected mixing, building, curing or final)",
                other
            )),
        }
    }
}

// ==========================================
// 质检结果 (Inspection Result)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspectionResult {
    Pass,
    Fail,
    Rework, // 返工
}

impl fmt::Display for InspectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectionResult::Pass => write!(f, "pass"),
            InspectionResult::Fail => write!(f, "fail"),
            InspectionResult::Rework => write!(f, "rework"),
        }
    }
}

impl FromStr for InspectionResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pass" | "passed" => Ok(InspectionResult::Pass),
            "fail" | "failed" => Ok(InspectionResult::Fail),
            "rework" => Ok(InspectionResult::Rework),
            other => Err(format!(
                "Invalid inspection result '{}' (expected pass, fail or rework)",
                other
            )),
        }
    }
}

// ==========================================
// 销售订单状态 (Order Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Confirmed => write!(f, "confirmed"),
            OrderStatus::Shipped => write!(f, "shipped"),
            OrderStatus::Delivered => write!(f, "delivered"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" | "canceled" => Ok(OrderStatus::Cancelled),
            other => Err(format!("Invalid order status '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_round_trip_str() {
        for domain in Domain::ALL {
            assert_eq!(domain.as_str().parse::<Domain>().unwrap(), domain);
        }
        assert!("payroll".parse::<Domain>().is_err());
    }

    #[test]
    fn test_enum_parse_is_case_insensitive() {
        assert_eq!(" Revenue ".parse::<TransactionType>(), Ok(TransactionType::Revenue));
        assert_eq!("FINAL".parse::<InspectionStage>(), Ok(InspectionStage::Final));
        assert_eq!("Passed".parse::<InspectionResult>(), Ok(InspectionResult::Pass));
        assert_eq!("canceled".parse::<OrderStatus>(), Ok(OrderStatus::Cancelled));
    }

    #[test]
    fn test_enum_parse_rejects_unknown() {
        let err = "income".parse::<TransactionType>().unwrap_err();
        assert!(err.contains("income"));
        assert!("packing".parse::<InspectionStage>().is_err());
    }
}
