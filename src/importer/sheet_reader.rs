// ==========================================
// 轮胎工厂 ERP - 工作簿读取
// ==========================================
// 职责: 内存字节 → 工作簿 → 工作表网格 → 带表头的原始行
// 支持: .xlsx（calamine）
// 行号: 一律保留 1 基物理行号，错误报告直接使用
// ==========================================

use crate::importer::cell::{CellValue, ISO_DATE_FORMAT};
use crate::importer::error::{ImportError, ImportOutcome};
use crate::importer::header_rules::normalize_header;
use calamine::{Reader, Xlsx};
use std::io::Cursor;
use tracing::debug;

// ==========================================
// GridRow / SheetGrid - 原始网格
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub row_number: u32,
    pub cells: Vec<CellValue>,
}

impl GridRow {
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(CellValue::is_blank)
    }
}

impl SheetGrid {
    /// 整张表没有任何非空单元格
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(GridRow::is_blank)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetGrid {
    pub name: String,
    pub rows: Vec<GridRow>,
}

// ==========================================
// RawRow / TabularSheet - 按表头键控的行
// ==========================================
// cells 保持列顺序；表头为归一化文本
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub row_number: u32,
    pub cells: Vec<(String, CellValue)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabularSheet {
    pub name: String,
    /// 表头所在物理行
    pub header_row: u32,
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

// ==========================================
// HeaderLocator - 表头行定位策略
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderLocator {
    /// 第一条非空行即表头（常规模板）
    FirstRow,
    /// 在前 depth 个物理行中寻找包含 marker 的单元格（手工报表，表头上方可能有标题）
    Scan { depth: usize, marker: String },
}

// ==========================================
// WorkbookSource - 内存工作簿
// ==========================================
pub struct WorkbookSource {
    workbook: Xlsx<Cursor<Vec<u8>>>,
    sheet_names: Vec<String>,
}

impl WorkbookSource {
    /// 从内存字节打开工作簿
    ///
    /// # 返回
    /// - Err(WorkbookDecode): 字节不是有效的 xlsx
    /// - Err(NoWorksheets): 工作簿中没有工作表
    pub fn open(bytes: &[u8]) -> ImportOutcome<Self> {
        let workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes.to_vec()))?;
        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::NoWorksheets);
        }
        debug!(sheets = ?sheet_names, "工作簿已打开");
        Ok(Self {
            workbook,
            sheet_names,
        })
    }

    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheet_names.iter().any(|s| s == name)
    }

    /// 指定名称的工作表；不存在时退回第一张
    pub fn preferred_or_first(&self, preferred: &str) -> String {
        if self.has_sheet(preferred) {
            preferred.to_string()
        } else {
            self.sheet_names[0].clone()
        }
    }

    /// 读取工作表为网格
    pub fn read_grid(&mut self, name: &str) -> ImportOutcome<SheetGrid> {
        let range = self
            .workbook
            .worksheet_range(name)
            .map_err(|e| ImportError::SheetRead {
                sheet: name.to_string(),
                message: e.to_string(),
            })?;

        // calamine 的 Range 从第一个非空单元格开始，需要加回偏移
        let first_row = range.start().map(|(row, _)| row).unwrap_or(0);

        let rows = range
            .rows()
            .enumerate()
            .map(|(idx, cells)| GridRow {
                row_number: first_row + idx as u32 + 1,
                cells: cells.iter().map(CellValue::from).collect(),
            })
            .collect();

        Ok(SheetGrid {
            name: name.to_string(),
            rows,
        })
    }
}

/// 网格 → 带表头的行
///
/// # 规则
/// - 表头单元格归一化；空表头列被丢弃
/// - 表头之后全空白的行被丢弃（不计入任何统计）
/// - 找不到表头（整张表空白，或 Scan 策略未命中）→ HeaderRowNotFound（结构性失败）
pub fn into_tabular(grid: SheetGrid, locator: &HeaderLocator) -> ImportOutcome<TabularSheet> {
    let header_idx = match locator {
        HeaderLocator::FirstRow => grid.rows.iter().position(|r| !r.is_blank()),
        HeaderLocator::Scan { depth, marker } => find_header_row(&grid, *depth, marker),
    }
    .ok_or(ImportError::HeaderRowNotFound)?;

    let mut rows_iter = grid.rows.into_iter().skip(header_idx);
    let header = rows_iter.next().ok_or(ImportError::HeaderRowNotFound)?;
    let headers: Vec<String> = header
        .cells
        .iter()
        .map(|cell| match cell {
            CellValue::Text(s) => normalize_header(s),
            CellValue::Number(n) => normalize_header(&n.to_string()),
            CellValue::Date(d) => normalize_header(&d.format(ISO_DATE_FORMAT).to_string()),
            CellValue::Blank => String::new(),
        })
        .collect();

    let rows = rows_iter
        .filter(|row| !row.is_blank())
        .map(|row| RawRow {
            row_number: row.row_number,
            cells: headers
                .iter()
                .zip(row.cells)
                .filter(|(h, _)| !h.is_empty())
                .map(|(h, c)| (h.clone(), c))
                .collect(),
        })
        .collect();

    Ok(TabularSheet {
        name: grid.name,
        header_row: header.row_number,
        headers,
        rows,
    })
}

/// 在前 depth 个物理行中查找表头行（返回网格内下标）
fn find_header_row(grid: &SheetGrid, depth: usize, marker: &str) -> Option<usize> {
    let marker = normalize_header(marker);
    grid.rows
        .iter()
        .take_while(|row| row.row_number as usize <= depth)
        .position(|row| {
            row.cells.iter().any(|cell| match cell {
                CellValue::Text(s) => normalize_header(s).contains(&marker),
                _ => false,
            })
        })
}
