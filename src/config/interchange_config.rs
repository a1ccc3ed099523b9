// ==========================================
// 轮胎工厂 ERP - 数据交换配置
// ==========================================
// 职责: 导入 / 导出 / 模板共用的可调参数
// 来源: 代码默认值，或由外层系统传入的 JSON
// ==========================================

use crate::domain::OrderStatus;
use serde::{Deserialize, Serialize};

// ==========================================
// InterchangeConfig
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterchangeConfig {
    /// 表头扫描深度（生产表的表头行不一定在第 1 行）
    ///
    /// # 默认值
    /// - 10
    pub header_scan_depth: usize,

    /// 表头行标记（归一化后的单元格文本包含该子串即视为表头行）
    ///
    /// # 默认值
    /// - "date"
    pub header_marker: String,

    /// 生产记录缺少班次时使用的默认值
    pub default_shift: String,

    /// 生产记录缺少批号时使用的默认值
    pub default_batch_number: String,

    /// 销售订单状态为空时使用的默认值
    pub default_order_status: OrderStatus,

    /// 金额列表头中的币种标签，如 "Unit Price (MMK)"
    pub currency_label: String,
}

impl Default for InterchangeConfig {
    fn default() -> Self {
        Self {
            header_scan_depth: 10,
            header_marker: "date".to_string(),
            default_shift: "3-shift".to_string(),
            default_batch_number: "N/A".to_string(),
            default_order_status: OrderStatus::Pending,
            currency_label: "MMK".to_string(),
        }
    }
}

impl InterchangeConfig {
    /// 从 JSON 读取配置，缺省字段取默认值
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// 配置快照（JSON），用于日志
    pub fn snapshot(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InterchangeConfig::default();
        assert_eq!(config.header_scan_depth, 10);
        assert_eq!(config.header_marker, "date");
        assert_eq!(config.default_shift, "3-shift");
        assert_eq!(config.default_batch_number, "N/A");
        assert_eq!(config.default_order_status, OrderStatus::Pending);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = InterchangeConfig::from_json(r#"{"header_scan_depth": 5}"#).unwrap();
        assert_eq!(config.header_scan_depth, 5);
        assert_eq!(config.currency_label, "MMK");
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(InterchangeConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_snapshot_is_json() {
        let snapshot = InterchangeConfig::default().snapshot();
        let value: serde_json::Value = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(value["default_order_status"], "pending");
    }
}
