// ==========================================
// RecordingStore - 记录调用顺序、可按条件拒绝的测试存储
// ==========================================
// 所有 create_* 调用（包括被拒绝的）都按顺序记下，
// 通过校验的记录再交给内存存储（保留其唯一键 / 外键约束）
// ==========================================

use async_trait::async_trait;
use std::sync::Mutex;
use tire_erp_interchange::domain::{
    Dealer, DomainRecord, FinancialTransaction, FinishedGood, ProductionRecord,
    QualityInspection, RawMaterial, SalesOrder,
};
use tire_erp_interchange::repository::{
    InMemoryRecordStore, RecordStore, RepositoryError, RepositoryResult,
};

type RejectRule = Box<dyn Fn(&DomainRecord) -> Option<String> + Send + Sync>;

#[derive(Default)]
pub struct RecordingStore {
    inner: InMemoryRecordStore,
    calls: Mutex<Vec<DomainRecord>>,
    reject: Option<RejectRule>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 命中规则的记录被拒绝，返回值作为拒绝原因
    pub fn rejecting<F>(rule: F) -> Self
    where
        F: Fn(&DomainRecord) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            reject: Some(Box::new(rule)),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<DomainRecord> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn inner(&self) -> &InMemoryRecordStore {
        &self.inner
    }

    fn admit(&self, record: DomainRecord) -> RepositoryResult<()> {
        let verdict = self.reject.as_ref().and_then(|rule| rule(&record));
        self.calls.lock().unwrap().push(record);
        match verdict {
            Some(reason) => Err(RepositoryError::ValidationError(reason)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RecordStore for RecordingStore {
    async fn create_production_record(&self, record: ProductionRecord) -> RepositoryResult<String> {
        self.admit(DomainRecord::Production(record.clone()))?;
        self.inner.create_production_record(record).await
    }

    async fn create_raw_material(&self, record: RawMaterial) -> RepositoryResult<String> {
        self.admit(DomainRecord::RawMaterial(record.clone()))?;
        self.inner.create_raw_material(record).await
    }

    async fn create_finished_good(&self, record: FinishedGood) -> RepositoryResult<String> {
        self.admit(DomainRecord::FinishedGood(record.clone()))?;
        self.inner.create_finished_good(record).await
    }

    async fn create_dealer(&self, record: Dealer) -> RepositoryResult<String> {
        self.admit(DomainRecord::Dealer(record.clone()))?;
        self.inner.create_dealer(record).await
    }

    async fn create_sales_order(&self, record: SalesOrder) -> RepositoryResult<String> {
        self.admit(DomainRecord::SalesOrder(record.clone()))?;
        self.inner.create_sales_order(record).await
    }

    async fn create_financial_transaction(
        &self,
        record: FinancialTransaction,
    ) -> RepositoryResult<String> {
        self.admit(DomainRecord::FinancialTransaction(record.clone()))?;
        self.inner.create_financial_transaction(record).await
    }

    async fn create_quality_inspection(
        &self,
        record: QualityInspection,
    ) -> RepositoryResult<String> {
        self.admit(DomainRecord::QualityInspection(record.clone()))?;
        self.inner.create_quality_inspection(record).await
    }
}
