// ==========================================
// 轮胎工厂 ERP - 配置层
// ==========================================
// 职责: 数据交换参数（表头扫描深度、默认值、币种标签）
// ==========================================

pub mod interchange_config;

pub use interchange_config::InterchangeConfig;
