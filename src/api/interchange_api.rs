// ==========================================
// 轮胎工厂 ERP - 数据交换 API
// ==========================================
// 职责: RPC 边界封装
// - 导入: base64 文件 → ImportResult
// - 模板 / 导出: 工作簿 → { data: base64, filename }
// 文件名: <domain>_template.xlsx / <domain>_export_<YYYY-MM-DD>.xlsx
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::InterchangeConfig;
use crate::domain::{Domain, ImportResult};
use crate::exporter::{
    export_financial_data, export_inventory_data, export_production_data, export_quality_data,
    export_sales_data, generate_template, SheetRow,
};
use crate::importer::{import_data, ISO_DATE_FORMAT};
use crate::repository::{RecordQuery, RecordStore};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{info, instrument};

// ==========================================
// FilePayload - 返回给调用方的文件
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePayload {
    /// base64 编码的 .xlsx
    pub data: String,
    pub filename: String,
}

impl FilePayload {
    fn new(bytes: &[u8], filename: String) -> Self {
        Self {
            data: STANDARD.encode(bytes),
            filename,
        }
    }

    /// 解码 data 为原始字节
    pub fn decode(&self) -> ApiResult<Vec<u8>> {
        decode_payload(&self.data)
    }
}

// ==========================================
// DateRange - 导出日期过滤（闭区间，任一端可缺省）
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |s| date >= s) && self.end.map_or(true, |e| date <= e)
    }
}

fn within<R: SheetRow>(records: Vec<R>, range: Option<&DateRange>) -> Vec<R> {
    let Some(range) = range else {
        return records;
    };
    records
        .into_iter()
        .filter(|r| r.primary_date().map_or(true, |d| range.contains(d)))
        .collect()
}

/// 解码 base64 载荷（容忍 data URL 前缀与换行）
pub fn decode_payload(data: &str) -> ApiResult<Vec<u8>> {
    let body = match data.find("base64,") {
        Some(pos) => &data[pos + "base64,".len()..],
        None => data,
    };
    let compact: String = body.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(ApiError::InvalidPayload("file data is empty".to_string()));
    }
    Ok(STANDARD.decode(compact)?)
}

pub fn template_filename(domain: Domain) -> String {
    format!("{}_template.xlsx", domain)
}

pub fn export_filename(domain: Domain, date: NaiveDate) -> String {
    format!("{}_export_{}.xlsx", domain, date.format(ISO_DATE_FORMAT))
}

/// 解析领域名（RPC 以字符串传入）
pub fn parse_domain(raw: &str) -> ApiResult<Domain> {
    Domain::from_str(raw).map_err(|_| ApiError::UnknownDomain(raw.to_string()))
}

// ==========================================
// InterchangeApi
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct InterchangeApi {
    config: InterchangeConfig,
}

impl InterchangeApi {
    pub fn new(config: InterchangeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InterchangeConfig {
        &self.config
    }

    /// 导入 base64 编码的工作簿
    ///
    /// # 返回
    /// - Ok(ImportResult): 含结构性失败与行级失败（作为数据返回）
    /// - Err(InvalidPayload): 载荷不是合法 base64
    #[instrument(skip_all, fields(domain = %domain))]
    pub async fn import<S>(&self, domain: Domain, file_data: &str, store: &S) -> ApiResult<ImportResult>
    where
        S: RecordStore + ?Sized,
    {
        let bytes = decode_payload(file_data)?;
        info!(bytes = bytes.len(), "收到导入请求");
        Ok(import_data(domain, &bytes, store, &self.config).await)
    }

    /// 生成导入模板
    pub fn generate_template(&self, domain: Domain) -> ApiResult<FilePayload> {
        let bytes = generate_template(domain, &self.config)?;
        Ok(FilePayload::new(&bytes, template_filename(domain)))
    }

    /// 导出存储中的记录
    ///
    /// # 参数
    /// - range: 按主日期过滤；经销商 / 库存等无日期实体不受影响
    #[instrument(skip_all, fields(domain = %domain))]
    pub async fn export<Q>(
        &self,
        domain: Domain,
        store: &Q,
        range: Option<&DateRange>,
    ) -> ApiResult<FilePayload>
    where
        Q: RecordQuery + ?Sized,
    {
        let config = &self.config;
        let bytes = match domain {
            Domain::Production => {
                let records = within(store.list_production_records().await?, range);
                export_production_data(&records, config)?
            }
            Domain::Inventory => {
                let raw = within(store.list_raw_materials().await?, range);
                let finished = within(store.list_finished_goods().await?, range);
                export_inventory_data(&raw, &finished, config)?
            }
            Domain::Sales => {
                let dealers = within(store.list_dealers().await?, range);
                let orders = within(store.list_sales_orders().await?, range);
                export_sales_data(&dealers, &orders, config)?
            }
            Domain::Financial => {
                let records = within(store.list_financial_transactions().await?, range);
                export_financial_data(&records, config)?
            }
            Domain::Quality => {
                let records = within(store.list_quality_inspections().await?, range);
                export_quality_data(&records, config)?
            }
        };

        Ok(FilePayload::new(
            &bytes,
            export_filename(domain, Local::now().date_naive()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filenames() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(template_filename(Domain::Sales), "sales_template.xlsx");
        assert_eq!(export_filename(Domain::Quality, date), "quality_export_2025-01-15.xlsx");
    }

    #[test]
    fn test_decode_payload_variants() {
        assert_eq!(decode_payload("aGVsbG8=").unwrap(), b"hello");
        assert_eq!(
            decode_payload("data:application/octet-stream;base64,aGVs\nbG8=").unwrap(),
            b"hello"
        );
        assert!(matches!(decode_payload("***"), Err(ApiError::InvalidPayload(_))));
        assert!(matches!(decode_payload("  "), Err(ApiError::InvalidPayload(_))));
    }

    #[test]
    fn test_date_range_bounds_inclusive() {
        let range = DateRange {
            start: NaiveDate::from_ymd_opt(2025, 1, 1),
            end: NaiveDate::from_ymd_opt(2025, 1, 31),
        };
        assert!(range.contains(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()));
        assert!(DateRange::default().contains(NaiveDate::from_ymd_opt(1999, 1, 1).unwrap()));
    }

    #[test]
    fn test_parse_domain() {
        assert_eq!(parse_domain("Inventory").unwrap(), Domain::Inventory);
        assert!(matches!(parse_domain("payroll"), Err(ApiError::UnknownDomain(_))));
    }

    #[test]
    fn test_generate_template_payload() {
        let api = InterchangeApi::default();
        let payload = api.generate_template(Domain::Production).unwrap();
        assert_eq!(payload.filename, "production_template.xlsx");
        assert!(!payload.decode().unwrap().is_empty());
    }
}
