// ==========================================
// 轮胎工厂 ERP - 工作簿写出
// ==========================================
// 职责: 表头 + 数据行 → 内存中的 .xlsx 字节（rust_xlsxwriter）
// 约定: 第 1 行为加粗表头，数据从第 2 行开始；空单元格不写入
// ==========================================

use crate::exporter::error::{ExportError, ExportResult};
use crate::importer::cell::{CellValue, ISO_DATE_FORMAT};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::debug;

/// 一张待写出的工作表
#[derive(Debug, Clone, PartialEq)]
pub struct SheetData {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

/// 写出工作簿并返回字节
///
/// # 返回
/// - Err(RowWidthMismatch): 某行单元格数与表头数不一致
/// - Err(Workbook): rust_xlsxwriter 写出失败
pub fn write_workbook(sheets: &[SheetData]) -> ExportResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;
        write_sheet(worksheet, sheet, &header_format)?;
        debug!(sheet = %sheet.name, rows = sheet.rows.len(), "工作表已写出");
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &SheetData, header_format: &Format) -> ExportResult<()> {
    for (col, header) in sheet.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, header, header_format)?;
    }

    for (idx, cells) in sheet.rows.iter().enumerate() {
        if cells.len() != sheet.headers.len() {
            return Err(ExportError::RowWidthMismatch {
                sheet: sheet.name.clone(),
                row: idx + 2,
                expected: sheet.headers.len(),
                actual: cells.len(),
            });
        }

        let row = (idx + 1) as u32;
        for (col, cell) in cells.iter().enumerate() {
            match cell {
                CellValue::Blank => {}
                CellValue::Text(s) => {
                    worksheet.write_string(row, col as u16, s)?;
                }
                CellValue::Number(n) => {
                    worksheet.write_number(row, col as u16, *n)?;
                }
                CellValue::Date(d) => {
                    worksheet.write_string(row, col as u16, d.format(ISO_DATE_FORMAT).to_string())?;
                }
            }
        }
    }

    worksheet.autofit();
    Ok(())
}
