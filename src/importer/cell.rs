// ==========================================
// 轮胎工厂 ERP - 单元格强制转换
// ==========================================
// 职责: 原始单元格 → 强类型值（日期 / 整数 / 数值 / 文本）
// 约定: 纯函数，永不 panic；无法转换时返回约定的默认值
// - 数值: 去除噪声字符后解析，失败 → 0
// - 日期: 带日期格式的单元格由 calamine 按工作簿日期系统（1900/1904）换算；
//   裸数值按 1900 日期序列号解码；文本原样透传；其他 → 调用方给定的兜底日期
// ==========================================

use crate::importer::error::{ImportError, ImportOutcome};
use calamine::Data;
use chrono::{Duration, NaiveDate};

/// 日期输出格式
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

// Excel 能表示的最大日期序列号（9999-12-31）
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

// ==========================================
// CellValue - 原始单元格值
// ==========================================
// 空白文本一律视为 Blank；Date 只来自带日期格式的单元格
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Blank,
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl CellValue {
    /// 构造文本单元格（空白 → Blank）
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            CellValue::Blank
        } else {
            CellValue::Text(value)
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Blank)
    }
}

impl From<&Data> for CellValue {
    fn from(cell: &Data) -> Self {
        match cell {
            Data::Empty => CellValue::Blank,
            Data::String(s) => CellValue::text(s.as_str()),
            Data::Float(f) => CellValue::Number(*f),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Bool(b) => CellValue::Text(b.to_string()),
            // 时长格式不是日历日期，保留原值
            Data::DateTime(dt) if dt.is_duration() => CellValue::Number(dt.as_f64()),
            Data::DateTime(dt) => dt
                .as_datetime()
                .map(|d| CellValue::Date(d.date()))
                .unwrap_or(CellValue::Blank),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::text(s.as_str()),
            Data::Error(_) => CellValue::Blank,
        }
    }
}

/// Excel 日期序列号 → 日历日期（1900 日期系统）
///
/// # 说明
/// - 序列号 1 = 1900-01-01
/// - Excel 把 1900 视为闰年，序列号 60 是不存在的 1900-02-29，按 1900-02-28 处理
/// - 小数部分（时间）被截断
/// - 非有限值或超出 [1, 2958465] 返回 None
pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 || serial > MAX_EXCEL_SERIAL {
        return None;
    }

    let days = serial.floor() as i64;
    let (base, offset) = if days < 60 {
        (NaiveDate::from_ymd_opt(1899, 12, 31)?, days)
    } else if days == 60 {
        (NaiveDate::from_ymd_opt(1900, 2, 28)?, 0)
    } else {
        (NaiveDate::from_ymd_opt(1899, 12, 30)?, days)
    };

    base.checked_add_signed(Duration::days(offset))
}

/// 日期强制转换 → "YYYY-MM-DD" 文本
///
/// # 参数
/// - cell: 原始单元格
/// - fallback: 无法识别时使用的日期（调用方通常传入今天）
///
/// # 规则
/// - Date: 直接格式化
/// - Number: 按日期序列号解码，补零到两位
/// - Text: 原样透传（上游文本视为已格式化的 ISO 日期），仅去除首尾空白
/// - 其他: fallback
pub fn coerce_date(cell: &CellValue, fallback: NaiveDate) -> String {
    match cell {
        CellValue::Date(d) => d.format(ISO_DATE_FORMAT).to_string(),
        CellValue::Number(serial) => excel_serial_to_date(*serial)
            .unwrap_or(fallback)
            .format(ISO_DATE_FORMAT)
            .to_string(),
        CellValue::Text(s) => s.trim().to_string(),
        CellValue::Blank => fallback.format(ISO_DATE_FORMAT).to_string(),
    }
}

/// 解析日期文本为 NaiveDate（行级校验）
///
/// # 支持格式
/// - YYYY-MM-DD（主格式）
/// - YYYY/MM/DD
/// - YYYYMMDD
/// - 带时间后缀的 ISO 文本（如 2025-01-15T00:00:00，只取日期部分）
pub fn parse_iso_date(field: &'static str, value: &str) -> ImportOutcome<NaiveDate> {
    let trimmed = value.trim();
    let date_part = trimmed.get(..10).filter(|_| trimmed.len() > 10).unwrap_or(trimmed);

    NaiveDate::parse_from_str(date_part, ISO_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%Y/%m/%d"))
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y%m%d"))
        .map_err(|_| ImportError::InvalidDate {
            field,
            value: trimmed.to_string(),
        })
}

/// 数值强制转换
///
/// # 规则
/// - Number: 原样返回
/// - Text: 只保留数字、小数点和前导负号，取最长的合法数字前缀，失败 → 0
/// - Date: 1900 日期序列号
/// - Blank: 0
pub fn coerce_number(cell: &CellValue) -> f64 {
    match cell {
        CellValue::Number(n) => *n,
        CellValue::Date(d) => excel_epoch()
            .map(|epoch| (*d - epoch).num_days() as f64)
            .unwrap_or(0.0),
        CellValue::Text(s) => {
            let mut cleaned = String::with_capacity(s.len());
            for ch in s.chars() {
                if ch.is_ascii_digit() || ch == '.' {
                    cleaned.push(ch);
                } else if ch == '-' && cleaned.is_empty() {
                    cleaned.push(ch);
                }
            }
            leading_number(&cleaned)
        }
        CellValue::Blank => 0.0,
    }
}

// "1.2.3" → 1.2：第二个小数点起截断
fn leading_number(cleaned: &str) -> f64 {
    let end = cleaned
        .match_indices('.')
        .nth(1)
        .map(|(idx, _)| idx)
        .unwrap_or(cleaned.len());
    cleaned[..end]
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

// 1900 日期系统中序列号 0 对应的日期（对 1900-03-01 之后的日期成立）
fn excel_epoch() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1899, 12, 30)
}

/// 整数强制转换（四舍五入）
pub fn coerce_integer(cell: &CellValue) -> i64 {
    coerce_number(cell).round() as i64
}

/// 文本强制转换
///
/// # 规则
/// - Blank → None
/// - Text → 去除首尾空白
/// - Number → 整数值不带小数点（如批号 1001、电话号码）
/// - Date → YYYY-MM-DD
pub fn coerce_text(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::Blank => None,
        CellValue::Date(d) => Some(d.format(ISO_DATE_FORMAT).to_string()),
        CellValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        CellValue::Number(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                Some(format!("{}", *n as i64))
            } else {
                Some(n.to_string())
            }
        }
    }
}
