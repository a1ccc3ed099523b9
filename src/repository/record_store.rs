// ==========================================
// 轮胎工厂 ERP - 记录存储 Trait
// ==========================================
// 职责: 定义数据交换所依赖的外部存储接口（不包含实现）
// 红线: 存储不含表格逻辑；导入器不关心持久化方式
// ==========================================

use crate::domain::{
    Dealer, DomainRecord, FinancialTransaction, FinishedGood, ProductionRecord,
    QualityInspection, RawMaterial, SalesOrder,
};
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// RecordStore Trait
// ==========================================
// 用途: 每个实体一个创建操作；校验或持久化失败时返回 Err
// 实现者: InMemoryRecordStore（测试 / 开发工具），外部数据库适配层
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// 创建日产记录，返回新记录 ID
    async fn create_production_record(&self, record: ProductionRecord) -> RepositoryResult<String>;

    /// 创建原材料记录
    async fn create_raw_material(&self, record: RawMaterial) -> RepositoryResult<String>;

    /// 创建成品记录
    async fn create_finished_good(&self, record: FinishedGood) -> RepositoryResult<String>;

    /// 创建经销商
    async fn create_dealer(&self, record: Dealer) -> RepositoryResult<String>;

    /// 创建销售订单
    ///
    /// # 说明
    /// - dealer_code 引用的经销商不存在时应返回 Err，导入器把它记为该行失败
    async fn create_sales_order(&self, record: SalesOrder) -> RepositoryResult<String>;

    /// 创建财务交易
    async fn create_financial_transaction(
        &self,
        record: FinancialTransaction,
    ) -> RepositoryResult<String>;

    /// 创建质检记录
    async fn create_quality_inspection(&self, record: QualityInspection)
        -> RepositoryResult<String>;

    /// 按变体分派到对应的创建操作
    async fn create(&self, record: DomainRecord) -> RepositoryResult<String> {
        match record {
            DomainRecord::Production(r) => self.create_production_record(r).await,
            DomainRecord::RawMaterial(r) => self.create_raw_material(r).await,
            DomainRecord::FinishedGood(r) => self.create_finished_good(r).await,
            DomainRecord::Dealer(r) => self.create_dealer(r).await,
            DomainRecord::SalesOrder(r) => self.create_sales_order(r).await,
            DomainRecord::FinancialTransaction(r) => self.create_financial_transaction(r).await,
            DomainRecord::QualityInspection(r) => self.create_quality_inspection(r).await,
        }
    }
}

// ==========================================
// RecordQuery Trait
// ==========================================
// 用途: 导出前由调用方读取记录（导出器本身只做纯转换）
#[async_trait]
pub trait RecordQuery: Send + Sync {
    async fn list_production_records(&self) -> RepositoryResult<Vec<ProductionRecord>>;

    async fn list_raw_materials(&self) -> RepositoryResult<Vec<RawMaterial>>;

    async fn list_finished_goods(&self) -> RepositoryResult<Vec<FinishedGood>>;

    async fn list_dealers(&self) -> RepositoryResult<Vec<Dealer>>;

    async fn list_sales_orders(&self) -> RepositoryResult<Vec<SalesOrder>>;

    async fn list_financial_transactions(&self) -> RepositoryResult<Vec<FinancialTransaction>>;

    async fn list_quality_inspections(&self) -> RepositoryResult<Vec<QualityInspection>>;
}
