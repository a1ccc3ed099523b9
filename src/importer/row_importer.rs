// ==========================================
// 轮胎工厂 ERP - 逐行导入器
// ==========================================
// 流程: 解码工作簿 → 选表 → 定位表头 → 逐行（映射 → 跳行判定 → 组装 → 落库）→ 汇总
// 红线:
// - 结构性错误只可能发生在任何一行落库之前（所有相关工作表先读完）
// - 单行失败只记录，不中断后续行
// - 落库调用按行顺序逐个 await，不并发
// ==========================================

use crate::config::InterchangeConfig;
use crate::domain::{Domain, ImportResult, ImportTally};
use crate::importer::adapters::{
    AdapterContext, DealersAdapter, FinancialAdapter, FinishedGoodsAdapter, ProductionAdapter,
    QualityAdapter, RawMaterialsAdapter, SalesOrdersAdapter, SheetAdapter,
};
use crate::importer::error::{ImportError, ImportOutcome};
use crate::importer::header_rules::{unmapped_headers, MappedRow};
use crate::importer::sheet_reader::{into_tabular, HeaderLocator, TabularSheet, WorkbookSource};
use crate::repository::RecordStore;
use chrono::Local;
use tracing::{debug, error, info, instrument, warn};

// ==========================================
// 入口：按领域分派
// ==========================================

/// 按领域导入
pub async fn import_data<S>(
    domain: Domain,
    bytes: &[u8],
    store: &S,
    config: &InterchangeConfig,
) -> ImportResult
where
    S: RecordStore + ?Sized,
{
    match domain {
        Domain::Production => import_production_data(bytes, store, config).await,
        Domain::Inventory => import_inventory_data(bytes, store, config).await,
        Domain::Sales => import_sales_data(bytes, store, config).await,
        Domain::Financial => import_financial_data(bytes, store, config).await,
        Domain::Quality => import_quality_data(bytes, store, config).await,
    }
}

/// 导入生产日报
///
/// # 说明
/// - 表头行通过扫描定位（前 header_scan_depth 行中含 header_marker 的行）
/// - 找不到表头 → 结构性失败，不调用存储
#[instrument(skip_all, fields(domain = "production", bytes = bytes.len()))]
pub async fn import_production_data<S>(
    bytes: &[u8],
    store: &S,
    config: &InterchangeConfig,
) -> ImportResult
where
    S: RecordStore + ?Sized,
{
    let locator = HeaderLocator::Scan {
        depth: config.header_scan_depth,
        marker: config.header_marker.clone(),
    };
    import_single_sheet::<ProductionAdapter, S>(bytes, store, config, &locator).await
}

/// 导入库存（原材料 → 成品）
#[instrument(skip_all, fields(domain = "inventory", bytes = bytes.len()))]
pub async fn import_inventory_data<S>(
    bytes: &[u8],
    store: &S,
    config: &InterchangeConfig,
) -> ImportResult
where
    S: RecordStore + ?Sized,
{
    import_sheet_pair::<RawMaterialsAdapter, FinishedGoodsAdapter, S>(bytes, store, config).await
}

/// 导入销售（经销商 → 销售订单）
///
/// # 说明
/// - 经销商表先于订单表处理；订单引用的经销商不存在时由存储拒绝，记为该行失败
#[instrument(skip_all, fields(domain = "sales", bytes = bytes.len()))]
pub async fn import_sales_data<S>(bytes: &[u8], store: &S, config: &InterchangeConfig) -> ImportResult
where
    S: RecordStore + ?Sized,
{
    import_sheet_pair::<DealersAdapter, SalesOrdersAdapter, S>(bytes, store, config).await
}

/// 导入财务交易
#[instrument(skip_all, fields(domain = "financial", bytes = bytes.len()))]
pub async fn import_financial_data<S>(
    bytes: &[u8],
    store: &S,
    config: &InterchangeConfig,
) -> ImportResult
where
    S: RecordStore + ?Sized,
{
    import_single_sheet::<FinancialAdapter, S>(bytes, store, config, &HeaderLocator::FirstRow)
        .await
}

/// 导入质检记录
#[instrument(skip_all, fields(domain = "quality", bytes = bytes.len()))]
pub async fn import_quality_data<S>(
    bytes: &[u8],
    store: &S,
    config: &InterchangeConfig,
) -> ImportResult
where
    S: RecordStore + ?Sized,
{
    import_single_sheet::<QualityAdapter, S>(bytes, store, config, &HeaderLocator::FirstRow).await
}

// ==========================================
// 单表 / 双表流程
// ==========================================

async fn import_single_sheet<A, S>(
    bytes: &[u8],
    store: &S,
    config: &InterchangeConfig,
    locator: &HeaderLocator,
) -> ImportResult
where
    A: SheetAdapter,
    S: RecordStore + ?Sized,
{
    let sheet = match load_single_sheet(bytes, A::SCHEMA.sheet_name, locator) {
        Ok(sheet) => sheet,
        Err(e) => return structural_failure(e),
    };

    let ctx = AdapterContext {
        config,
        today: Local::now().date_naive(),
    };
    let tally = import_sheet::<A, S>(&sheet, store, &ctx, false, ImportTally::new()).await;
    finish(tally)
}

async fn import_sheet_pair<First, Second, S>(
    bytes: &[u8],
    store: &S,
    config: &InterchangeConfig,
) -> ImportResult
where
    First: SheetAdapter,
    Second: SheetAdapter,
    S: RecordStore + ?Sized,
{
    let (first, second) = match load_sheet_pair(
        bytes,
        First::SCHEMA.sheet_name,
        Second::SCHEMA.sheet_name,
    ) {
        Ok(pair) => pair,
        Err(e) => return structural_failure(e),
    };

    if first.is_none() && second.is_none() {
        warn!(
            expected = ?[First::SCHEMA.sheet_name, Second::SCHEMA.sheet_name],
            "工作簿中没有可识别的工作表，未导入任何行"
        );
    }

    let ctx = AdapterContext {
        config,
        today: Local::now().date_naive(),
    };

    let mut tally = ImportTally::new();
    if let Some(sheet) = &first {
        tally = import_sheet::<First, S>(sheet, store, &ctx, true, tally).await;
    }
    if let Some(sheet) = &second {
        tally = import_sheet::<Second, S>(sheet, store, &ctx, true, tally).await;
    }
    finish(tally)
}

// ==========================================
// 工作表加载（结构性错误只在这里产生）
// ==========================================

fn load_single_sheet(
    bytes: &[u8],
    preferred: &str,
    locator: &HeaderLocator,
) -> ImportOutcome<TabularSheet> {
    let mut source = WorkbookSource::open(bytes)?;
    let name = source.preferred_or_first(preferred);
    if name != preferred {
        debug!(expected = preferred, using = %name, "未找到指定工作表，使用第一张");
    }
    let grid = source.read_grid(&name)?;
    into_tabular(grid, locator)
}

fn load_sheet_pair(
    bytes: &[u8],
    first: &str,
    second: &str,
) -> ImportOutcome<(Option<TabularSheet>, Option<TabularSheet>)> {
    let mut source = WorkbookSource::open(bytes)?;
    let first = load_optional(&mut source, first)?;
    let second = load_optional(&mut source, second)?;
    Ok((first, second))
}

/// 按名称读取；工作表不存在或整张空白 → None（跳过，不是错误）
fn load_optional(source: &mut WorkbookSource, name: &str) -> ImportOutcome<Option<TabularSheet>> {
    if !source.has_sheet(name) {
        debug!(sheet = name, "工作表不存在，跳过");
        return Ok(None);
    }
    let grid = source.read_grid(name)?;
    if grid.is_blank() {
        debug!(sheet = name, "工作表为空，跳过");
        return Ok(None);
    }
    into_tabular(grid, &HeaderLocator::FirstRow).map(Some)
}

// ==========================================
// 逐行循环
// ==========================================

/// 处理一张表的全部数据行，累加器按值传入传出
///
/// # 参数
/// - prefix_sheet: 多表工作簿中，行错误前加工作表名
async fn import_sheet<A, S>(
    sheet: &TabularSheet,
    store: &S,
    ctx: &AdapterContext<'_>,
    prefix_sheet: bool,
    mut tally: ImportTally,
) -> ImportTally
where
    A: SheetAdapter,
    S: RecordStore + ?Sized,
{
    let (imported_before, failed_before) = (tally.imported(), tally.failed());

    let unmapped = unmapped_headers(A::RULES, &sheet.headers);
    if !unmapped.is_empty() {
        debug!(sheet = %sheet.name, columns = ?unmapped, "忽略未识别的列");
    }
    info!(sheet = %sheet.name, rows = sheet.rows.len(), header_row = sheet.header_row, "开始处理工作表");

    for raw in &sheet.rows {
        let row = MappedRow::from_raw(raw, A::RULES);
        if A::is_padding(&row) {
            debug!(sheet = %sheet.name, row = row.row_number, "空白/填充行，跳过");
            continue;
        }

        match import_row::<A, S>(&row, store, ctx).await {
            Ok(id) => {
                debug!(sheet = %sheet.name, row = row.row_number, id = %id, "行已导入");
                tally = tally.record_success();
            }
            Err(e) => {
                warn!(sheet = %sheet.name, row = row.row_number, error = %e, "行导入失败");
                let message = if prefix_sheet {
                    format!("{}: {}", sheet.name, e)
                } else {
                    e.to_string()
                };
                tally = tally.record_failure(row.row_number, message);
            }
        }
    }

    info!(
        sheet = %sheet.name,
        imported = tally.imported() - imported_before,
        failed = tally.failed() - failed_before,
        "工作表处理完成"
    );
    tally
}

async fn import_row<A, S>(
    row: &MappedRow<A::Field>,
    store: &S,
    ctx: &AdapterContext<'_>,
) -> ImportOutcome<String>
where
    A: SheetAdapter,
    S: RecordStore + ?Sized,
{
    let record = A::build(row, ctx)?;
    let id = store.create(record).await?;
    Ok(id)
}

fn structural_failure(err: ImportError) -> ImportResult {
    error!(error = %err, "导入中止（结构性错误）");
    ImportResult::structural_failure(err.to_string())
}

fn finish(tally: ImportTally) -> ImportResult {
    let result = tally.finish();
    info!(
        imported = result.imported,
        failed = result.failed,
        success = result.success,
        "导入完成"
    );
    result
}
