// ==========================================
// InterchangeApi 集成测试
// ==========================================
// 测试目标: base64 载荷进出、文件名约定、导出日期过滤
// ==========================================

mod helpers;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{Local, NaiveDate};
use helpers::recording_store::RecordingStore;
use tire_erp_interchange::api::{export_filename, ApiError, DateRange, InterchangeApi};
use tire_erp_interchange::domain::Domain;
use tire_erp_interchange::importer::{import_production_data, WorkbookSource};
use tire_erp_interchange::repository::{InMemoryRecordStore, RecordQuery};
use tire_erp_interchange::InterchangeConfig;

#[tokio::test]
async fn test_template_payload_imports_through_api() {
    let api = InterchangeApi::default();
    let store = InMemoryRecordStore::new();

    for domain in Domain::ALL {
        let payload = api.generate_template(domain).unwrap();
        assert_eq!(payload.filename, format!("{}_template.xlsx", domain));

        let result = api.import(domain, &payload.data, &store).await.unwrap();
        assert!(result.success, "{}: {:?}", domain, result.errors);
    }

    assert_eq!(store.total_records(), 7);
}

#[tokio::test]
async fn test_invalid_base64_is_rejected_before_import() {
    let api = InterchangeApi::default();
    let store = RecordingStore::new();

    let err = api.import(Domain::Production, "%%%not base64%%%", &store).await.unwrap_err();

    assert!(matches!(err, ApiError::InvalidPayload(_)));
    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn test_valid_base64_of_non_workbook_is_structural_result() {
    let api = InterchangeApi::default();
    let store = RecordingStore::new();

    let result = api
        .import(Domain::Quality, &STANDARD.encode(b"hello"), &store)
        .await
        .unwrap();

    assert!(result.is_structural_failure());
}

#[tokio::test]
async fn test_export_filters_by_date_range() {
    let api = InterchangeApi::new(InterchangeConfig::default());
    let store = InMemoryRecordStore::new();
    let template = api.generate_template(Domain::Production).unwrap();
    api.import(Domain::Production, &template.data, &store).await.unwrap();

    let outside = DateRange {
        start: NaiveDate::from_ymd_opt(2025, 2, 1),
        end: None,
    };
    let payload = api.export(Domain::Production, &store, Some(&outside)).await.unwrap();
    assert_eq!(
        payload.filename,
        export_filename(Domain::Production, Local::now().date_naive())
    );

    let reimport = InMemoryRecordStore::new();
    let result = import_production_data(&payload.decode().unwrap(), &reimport, api.config()).await;
    assert!(result.success);
    assert_eq!(result.imported, 0);

    let inside = DateRange {
        start: NaiveDate::from_ymd_opt(2025, 1, 1),
        end: NaiveDate::from_ymd_opt(2025, 1, 31),
    };
    let payload = api.export(Domain::Production, &store, Some(&inside)).await.unwrap();
    let result = import_production_data(&payload.decode().unwrap(), &reimport, api.config()).await;
    assert_eq!(result.imported, 1);
    assert_eq!(
        reimport.list_production_records().await.unwrap(),
        store.list_production_records().await.unwrap()
    );
}

#[tokio::test]
async fn test_sales_export_keeps_dealers_when_filtering_orders() {
    let api = InterchangeApi::default();
    let store = InMemoryRecordStore::new();
    let template = api.generate_template(Domain::Sales).unwrap();
    api.import(Domain::Sales, &template.data, &store).await.unwrap();

    let range = DateRange {
        start: None,
        end: NaiveDate::from_ymd_opt(2024, 12, 31),
    };
    let payload = api.export(Domain::Sales, &store, Some(&range)).await.unwrap();

    let bytes = payload.decode().unwrap();
    let source = WorkbookSource::open(&bytes).unwrap();
    assert_eq!(source.sheet_names(), &["Dealers".to_string(), "Sales Orders".to_string()]);

    let reimport = InMemoryRecordStore::new();
    let result = api.import(Domain::Sales, &payload.data, &reimport).await.unwrap();
    assert_eq!(result.imported, 1);
    assert_eq!(reimport.list_dealers().await.unwrap().len(), 1);
    assert!(reimport.list_sales_orders().await.unwrap().is_empty());
}
