// ==========================================
// 轮胎工厂 ERP - 表头映射规则
// ==========================================
// 职责: 人工维护的表头文本 → 领域字段
// 做法: 每个适配器一张有序规则表 (匹配器, 字段)，按顺序取第一条命中的规则
// 归一化: 小写 + '_' '-' '.' ':' 视为空格 + 连续空白折叠 + 去首尾空白
// 未命中的表头被显式丢弃（不是错误）
// ==========================================

use crate::importer::cell::{coerce_integer, coerce_number, coerce_text, CellValue};
use crate::importer::sheet_reader::RawRow;

/// 表头归一化
pub fn normalize_header(raw: &str) -> String {
    let lowered: String = raw
        .chars()
        .map(|ch| match ch {
            '_' | '-' | '.' | ':' => ' ',
            other => other,
        })
        .collect::<String>()
        .to_lowercase();

    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ==========================================
// HeaderMatcher - 单个匹配条件
// ==========================================
// 对归一化后的表头文本求值；模式本身需为归一化形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMatcher {
    Equals(&'static str),
    Contains(&'static str),
    StartsWith(&'static str),
    EndsWith(&'static str),
}

impl HeaderMatcher {
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            HeaderMatcher::Equals(p) => normalized == *p,
            HeaderMatcher::Contains(p) => normalized.contains(p),
            HeaderMatcher::StartsWith(p) => normalized.starts_with(p),
            HeaderMatcher::EndsWith(p) => normalized.ends_with(p),
        }
    }
}

// ==========================================
// HeaderRule - 规则表中的一行
// ==========================================
// 任一匹配器命中即映射到 field
#[derive(Debug, Clone, Copy)]
pub struct HeaderRule<F: 'static> {
    pub field: F,
    pub matchers: &'static [HeaderMatcher],
}

impl<F: Copy> HeaderRule<F> {
    pub const fn new(field: F, matchers: &'static [HeaderMatcher]) -> Self {
        Self { field, matchers }
    }
}

/// 按规则表顺序解析一个（已归一化的）表头
pub fn resolve_header<F: Copy>(rules: &[HeaderRule<F>], normalized: &str) -> Option<F> {
    rules
        .iter()
        .find(|rule| rule.matchers.iter().any(|m| m.matches(normalized)))
        .map(|rule| rule.field)
}

/// 规则表无法识别的表头（用于日志和模板一致性检查）
pub fn unmapped_headers<F: Copy>(rules: &[HeaderRule<F>], headers: &[String]) -> Vec<String> {
    headers
        .iter()
        .filter(|h| !h.is_empty() && resolve_header(rules, h).is_none())
        .cloned()
        .collect()
}

// ==========================================
// MappedRow - 映射到字段后的一行
// ==========================================
// 只保留非空单元格；同一字段出现多列时，靠右的列覆盖靠左的列
#[derive(Debug, Clone)]
pub struct MappedRow<F> {
    pub row_number: u32,
    values: Vec<(F, CellValue)>,
}

impl<F: Copy + PartialEq> MappedRow<F> {
    /// 按规则表映射一行原始数据，未识别的列直接丢弃
    pub fn from_raw(raw: &RawRow, rules: &[HeaderRule<F>]) -> Self {
        let mut values: Vec<(F, CellValue)> = Vec::new();

        for (header, cell) in &raw.cells {
            if cell.is_blank() {
                continue;
            }
            let Some(field) = resolve_header(rules, header) else {
                continue;
            };
            match values.iter_mut().find(|(f, _)| *f == field) {
                Some(slot) => slot.1 = cell.clone(),
                None => values.push((field, cell.clone())),
            }
        }

        Self {
            row_number: raw.row_number,
            values,
        }
    }

    /// 取字段单元格；缺失时返回 Blank
    pub fn cell(&self, field: F) -> &CellValue {
        static BLANK: CellValue = CellValue::Blank;
        self.values
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, c)| c)
            .unwrap_or(&BLANK)
    }

    pub fn has(&self, field: F) -> bool {
        !self.cell(field).is_blank()
    }

    pub fn text(&self, field: F) -> Option<String> {
        coerce_text(self.cell(field))
    }

    pub fn number(&self, field: F) -> f64 {
        coerce_number(self.cell(field))
    }

    pub fn integer(&self, field: F) -> i64 {
        coerce_integer(self.cell(field))
    }

    /// 可选整数：空单元格 → None
    pub fn optional_integer(&self, field: F) -> Option<i64> {
        if self.has(field) {
            Some(self.integer(field))
        } else {
            None
        }
    }
}
