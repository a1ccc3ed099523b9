// ==========================================
// 集成测试共用工具
// ==========================================

#![allow(dead_code)]

pub mod recording_store;
pub mod workbook_builder;
