// ==========================================
// 轮胎工厂 ERP - 质检适配器
// ==========================================
// 行定义字段: 批号
// 阶段: mixing / building / curing / final
// 结果: pass / fail / rework
// ==========================================

use crate::domain::{DomainRecord, InspectionResult, InspectionStage, QualityInspection};
use crate::importer::adapters::{
    non_negative, required_date, required_enum, required_text, AdapterContext, ColumnDef,
    SheetAdapter, SheetSchema,
};
use crate::importer::error::ImportOutcome;
use crate::importer::header_rules::{HeaderMatcher::*, HeaderRule, MappedRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityField {
    BatchNumber,
    Stage,
    InspectionDate,
    InspectorName,
    DefectType,
    DefectCount,
    Result,
    Notes,
}

pub struct QualityAdapter;

impl SheetAdapter for QualityAdapter {
    type Field = QualityField;

    const SCHEMA: SheetSchema = SheetSchema {
        sheet_name: "Quality Inspections",
        columns: &[
            ColumnDef::plain("Batch Number"),
            ColumnDef::plain("Inspection Stage"),
            ColumnDef::plain("Inspection Date (YYYY-MM-DD)"),
            ColumnDef::plain("Inspector Name"),
            ColumnDef::plain("Result"),
            ColumnDef::plain("Defect Type"),
            ColumnDef::plain("Defect Count"),
            ColumnDef::plain("Notes"),
        ],
    };

    // 缺陷类型 / 数量先于结果（"Defect Result" 之类的表头归到缺陷列）
    const RULES: &'static [HeaderRule<QualityField>] = &[
        HeaderRule::new(QualityField::BatchNumber, &[Contains("batch"), Contains("bach")]),
        HeaderRule::new(QualityField::Stage, &[Contains("stage")]),
        HeaderRule::new(QualityField::InspectionDate, &[Contains("date")]),
        HeaderRule::new(QualityField::InspectorName, &[Contains("inspector")]),
        HeaderRule::new(QualityField::DefectType, &[Contains("defect type"), Equals("defect")]),
        HeaderRule::new(
            QualityField::DefectCount,
            &[Contains("defect count"), Contains("defects"), Contains("count")],
        ),
        HeaderRule::new(QualityField::Result, &[Contains("result"), Contains("status")]),
        HeaderRule::new(QualityField::Notes, &[Contains("note"), Contains("remark")]),
    ];

    fn is_padding(row: &MappedRow<QualityField>) -> bool {
        !row.has(QualityField::BatchNumber)
    }

    fn build(row: &MappedRow<QualityField>, ctx: &AdapterContext<'_>) -> ImportOutcome<DomainRecord> {
        let batch_number = required_text(row, QualityField::BatchNumber, "Batch Number")?;
        let stage: InspectionStage = required_enum(row, QualityField::Stage, "Inspection Stage")?;
        let inspection_date =
            required_date(row, QualityField::InspectionDate, "Inspection Date", ctx)?;
        let inspector_name = required_text(row, QualityField::InspectorName, "Inspector Name")?;
        let result: InspectionResult = required_enum(row, QualityField::Result, "Result")?;

        Ok(DomainRecord::QualityInspection(QualityInspection {
            batch_number,
            stage,
            inspection_date,
            inspector_name,
            result,
            defect_type: row.text(QualityField::DefectType),
            defect_count: non_negative("Defect Count", row.integer(QualityField::DefectCount))?,
            notes: row.text(QualityField::Notes),
        }))
    }
}
