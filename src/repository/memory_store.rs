// ==========================================
// 轮胎工厂 ERP - 内存记录存储
// ==========================================
// 职责: RecordStore / RecordQuery 的内存实现
// 用途: 集成测试、开发工具；行为上模拟数据库约束
// 约束:
// - 必填文本字段不可为空白，数量 / 金额不可为负
// - dealer_code、order_number 唯一
// - 销售订单的 dealer_code 必须引用已创建的经销商
// ==========================================

use crate::domain::{
    Dealer, FinancialTransaction, FinishedGood, ProductionRecord, QualityInspection, RawMaterial,
    SalesOrder,
};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::record_store::{RecordQuery, RecordStore};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default)]
struct StoreState {
    production_records: Vec<(String, ProductionRecord)>,
    raw_materials: Vec<(String, RawMaterial)>,
    finished_goods: Vec<(String, FinishedGood)>,
    dealers: Vec<(String, Dealer)>,
    sales_orders: Vec<(String, SalesOrder)>,
    financial_transactions: Vec<(String, FinancialTransaction)>,
    quality_inspections: Vec<(String, QualityInspection)>,
}

// ==========================================
// InMemoryRecordStore
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> RepositoryResult<MutexGuard<'_, StoreState>> {
        self.state
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 已存储记录总数（所有实体）
    pub fn total_records(&self) -> usize {
        self.lock()
            .map(|s| {
                s.production_records.len()
                    + s.raw_materials.len()
                    + s.finished_goods.len()
                    + s.dealers.len()
                    + s.sales_orders.len()
                    + s.financial_transactions.len()
                    + s.quality_inspections.len()
            })
            .unwrap_or(0)
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn require_text(field: &str, value: &str) -> RepositoryResult<()> {
    if value.trim().is_empty() {
        return Err(RepositoryError::ValidationError(format!("{} is required", field)));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: i64) -> RepositoryResult<()> {
    if value < 0 {
        return Err(RepositoryError::FieldValueError {
            field: field.to_string(),
            message: format!("must not be negative (got {})", value),
        });
    }
    Ok(())
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn create_production_record(&self, record: ProductionRecord) -> RepositoryResult<String> {
        require_text("tire_size", &record.tire_size)?;
        require_non_negative("curing_a", record.curing_a)?;
        require_non_negative("curing_b", record.curing_b)?;
        require_non_negative("curing_r", record.curing_r)?;

        let id = new_id();
        self.lock()?.production_records.push((id.clone(), record));
        debug!(id = %id, "production_record 已创建");
        Ok(id)
    }

    async fn create_raw_material(&self, record: RawMaterial) -> RepositoryResult<String> {
        require_text("material_name", &record.material_name)?;
        require_text("material_type", &record.material_type)?;
        require_text("unit", &record.unit)?;
        require_non_negative("quantity_in_stock", record.quantity_in_stock)?;
        require_non_negative("unit_cost", record.unit_cost)?;
        require_non_negative("reorder_level", record.reorder_level)?;

        let id = new_id();
        self.lock()?.raw_materials.push((id.clone(), record));
        Ok(id)
    }

    async fn create_finished_good(&self, record: FinishedGood) -> RepositoryResult<String> {
        require_text("tire_size", &record.tire_size)?;
        require_text("tire_type", &record.tire_type)?;
        require_non_negative("quantity_in_stock", record.quantity_in_stock)?;
        require_non_negative("unit_price", record.unit_price)?;

        let id = new_id();
        self.lock()?.finished_goods.push((id.clone(), record));
        Ok(id)
    }

    async fn create_dealer(&self, record: Dealer) -> RepositoryResult<String> {
        require_text("dealer_code", &record.dealer_code)?;
        require_text("dealer_name", &record.dealer_name)?;
        if let Some(limit) = record.credit_limit {
            require_non_negative("credit_limit", limit)?;
        }

        let mut state = self.lock()?;
        if state.dealers.iter().any(|(_, d)| d.dealer_code == record.dealer_code) {
            return Err(RepositoryError::UniqueConstraintViolation(format!(
                "dealer code {} already exists",
                record.dealer_code
            )));
        }

        let id = new_id();
        state.dealers.push((id.clone(), record));
        Ok(id)
    }

    async fn create_sales_order(&self, record: SalesOrder) -> RepositoryResult<String> {
        require_text("order_number", &record.order_number)?;
        require_text("dealer_code", &record.dealer_code)?;
        require_non_negative("quantity", record.quantity)?;
        require_non_negative("unit_price", record.unit_price)?;

        let mut state = self.lock()?;
        if !state.dealers.iter().any(|(_, d)| d.dealer_code == record.dealer_code) {
            return Err(RepositoryError::ForeignKeyViolation(format!(
                "dealer code {} does not exist",
                record.dealer_code
            )));
        }
        if state
            .sales_orders
            .iter()
            .any(|(_, o)| o.order_number == record.order_number)
        {
            return Err(RepositoryError::UniqueConstraintViolation(format!(
                "order number {} already exists",
                record.order_number
            )));
        }

        let id = new_id();
        state.sales_orders.push((id.clone(), record));
        Ok(id)
    }

    async fn create_financial_transaction(
        &self,
        record: FinancialTransaction,
    ) -> RepositoryResult<String> {
        require_text("category", &record.category)?;

        let id = new_id();
        self.lock()?.financial_transactions.push((id.clone(), record));
        Ok(id)
    }

    async fn create_quality_inspection(
        &self,
        record: QualityInspection,
    ) -> RepositoryResult<String> {
        require_text("batch_number", &record.batch_number)?;
        require_text("inspector_name", &record.inspector_name)?;
        require_non_negative("defect_count", record.defect_count)?;

        let id = new_id();
        self.lock()?.quality_inspections.push((id.clone(), record));
        Ok(id)
    }
}

fn values<T: Clone>(rows: &[(String, T)]) -> Vec<T> {
    rows.iter().map(|(_, r)| r.clone()).collect()
}

#[async_trait]
impl RecordQuery for InMemoryRecordStore {
    async fn list_production_records(&self) -> RepositoryResult<Vec<ProductionRecord>> {
        Ok(values(&self.lock()?.production_records))
    }

    async fn list_raw_materials(&self) -> RepositoryResult<Vec<RawMaterial>> {
        Ok(values(&self.lock()?.raw_materials))
    }

    async fn list_finished_goods(&self) -> RepositoryResult<Vec<FinishedGood>> {
        Ok(values(&self.lock()?.finished_goods))
    }

    async fn list_dealers(&self) -> RepositoryResult<Vec<Dealer>> {
        Ok(values(&self.lock()?.dealers))
    }

    async fn list_sales_orders(&self) -> RepositoryResult<Vec<SalesOrder>> {
        Ok(values(&self.lock()?.sales_orders))
    }

    async fn list_financial_transactions(&self) -> RepositoryResult<Vec<FinancialTransaction>> {
        Ok(values(&self.lock()?.financial_transactions))
    }

    async fn list_quality_inspections(&self) -> RepositoryResult<Vec<QualityInspection>> {
        Ok(values(&self.lock()?.quality_inspections))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainRecord, OrderStatus};
    use chrono::NaiveDate;

    fn dealer(code: &str) -> Dealer {
        Dealer {
            dealer_code: code.to_string(),
            dealer_name: "Yangon Tire Shop".to_string(),
            contact_person: None,
            phone: None,
            email: None,
            address: None,
            credit_limit: Some(10_000_000),
            payment_terms: None,
        }
    }

    fn order(number: &str, dealer_code: &str) -> SalesOrder {
        SalesOrder {
            order_number: number.to_string(),
            dealer_code: dealer_code.to_string(),
            order_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            tire_size: "750R16".to_string(),
            tire_type: None,
            quantity: 2,
            unit_price: 85000,
            total_amount: 170000,
            status: OrderStatus::Pending,
            delivery_date: None,
        }
    }

    #[tokio::test]
    async fn test_sales_order_requires_existing_dealer() {
        let store = InMemoryRecordStore::new();

        let err = store.create_sales_order(order("SO-1", "D001")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::ForeignKeyViolation(_)));

        store.create_dealer(dealer("D001")).await.unwrap();
        store.create_sales_order(order("SO-1", "D001")).await.unwrap();
        assert_eq!(store.list_sales_orders().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_dealer_code_rejected() {
        let store = InMemoryRecordStore::new();
        store.create_dealer(dealer("D001")).await.unwrap();

        let err = store.create_dealer(dealer("D001")).await.unwrap_err();
        assert!(err.to_string().contains("D001"));
        assert_eq!(store.total_records(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_through_domain_record() {
        let store = InMemoryRecordStore::new();
        let id = store
            .create(DomainRecord::Dealer(dealer("D009")))
            .await
            .unwrap();

        assert!(!id.is_empty());
        assert_eq!(store.list_dealers().await.unwrap()[0].dealer_code, "D009");
    }

    #[tokio::test]
    async fn test_negative_quantity_rejected() {
        let store = InMemoryRecordStore::new();
        let good = FinishedGood {
            tire_size: "750R16".to_string(),
            tire_type: "nylon".to_string(),
            quantity_in_stock: -5,
            unit_price: 85000,
            location: None,
        };

        let err = store.create_finished_good(good).await.unwrap_err();
        assert!(err.to_string().contains("quantity_in_stock"));
    }
}
