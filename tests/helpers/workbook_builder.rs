// ==========================================
// 测试工作簿构建器
// ==========================================
// 按物理行写入任意网格（可在表头上方放标题行、留空行）
// ==========================================

use rust_xlsxwriter::Workbook;
use tire_erp_interchange::importer::CellValue;

pub fn t(value: &str) -> CellValue {
    CellValue::text(value)
}

pub fn n(value: f64) -> CellValue {
    CellValue::Number(value)
}

pub fn blank() -> CellValue {
    CellValue::Blank
}

/// 一张工作表: 名称 + 从第 1 行开始的行
pub struct SheetRows {
    pub name: String,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetRows {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, cells: Vec<CellValue>) -> Self {
        self.rows.push(cells);
        self
    }

    pub fn header(self, headers: &[&str]) -> Self {
        self.row(headers.iter().map(|h| t(h)).collect())
    }

    pub fn empty_row(self) -> Self {
        self.row(Vec::new())
    }
}

pub fn build_workbook(sheets: Vec<SheetRows>) -> Vec<u8> {
    let mut workbook = Workbook::new();
    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name).unwrap();
        for (r, cells) in sheet.rows.iter().enumerate() {
            for (c, cell) in cells.iter().enumerate() {
                match cell {
                    CellValue::Blank => {}
                    CellValue::Text(s) => {
                        worksheet.write_string(r as u32, c as u16, s).unwrap();
                    }
                    CellValue::Number(v) => {
                        worksheet.write_number(r as u32, c as u16, *v).unwrap();
                    }
                    CellValue::Date(d) => {
                        let text = d.format("%Y-%m-%d").to_string();
                        worksheet.write_string(r as u32, c as u16, text).unwrap();
                    }
                }
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}
