// ==========================================
// 轮胎工厂 ERP - 记录存储层
// ==========================================
// 职责: 外部记录存储的抽象接口 + 内存实现
// 红线: 存储只做数据 CRUD，不含表格规则
// ==========================================

pub mod error;
pub mod memory_store;
pub mod record_store;

// 重导出
pub use error::{RepositoryError, RepositoryResult};
pub use memory_store::InMemoryRecordStore;
pub use record_store::{RecordQuery, RecordStore};
