// ==========================================
// 轮胎工厂 ERP - 库存适配器
// ==========================================
// 工作簿包含两张表:
// - "Raw Materials"  → RawMaterial（行定义字段: 材料名称）
// - "Finished Goods" → FinishedGood（行定义字段: 轮胎规格）
// 两张表互不引用，任意一张缺失都直接跳过
// ==========================================

use crate::domain::{DomainRecord, FinishedGood, RawMaterial};
use crate::importer::adapters::{
    non_negative, required_text, AdapterContext, ColumnDef, SheetAdapter, SheetSchema,
};
use crate::importer::error::ImportOutcome;
use crate::importer::header_rules::{HeaderMatcher::*, HeaderRule, MappedRow};

// ==========================================
// 原材料
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawMaterialField {
    MaterialName,
    MaterialType,
    ReorderLevel,
    QuantityInStock,
    UnitCost,
    Unit,
    Supplier,
    Location,
}

pub struct RawMaterialsAdapter;

impl SheetAdapter for RawMaterialsAdapter {
    type Field = RawMaterialField;

    const SCHEMA: SheetSchema = SheetSchema {
        sheet_name: "Raw Materials",
        columns: &[
            ColumnDef::plain("Material Name"),
            ColumnDef::plain("Material Type"),
            ColumnDef::plain("Quantity In Stock"),
            ColumnDef::plain("Unit"),
            ColumnDef::money("Unit Cost"),
            ColumnDef::plain("Reorder Level"),
            ColumnDef::plain("Supplier"),
            ColumnDef::plain("Location"),
        ],
    };

    // 再订货点先于数量匹配（"Reorder Quantity" 不应落到库存数量）
    const RULES: &'static [HeaderRule<RawMaterialField>] = &[
        HeaderRule::new(
            RawMaterialField::MaterialName,
            &[Contains("material name"), Equals("material"), Equals("name")],
        ),
        HeaderRule::new(
            RawMaterialField::MaterialType,
            &[Contains("material type"), Contains("category"), Equals("type")],
        ),
        HeaderRule::new(
            RawMaterialField::ReorderLevel,
            &[Contains("reorder"), Contains("minimum stock"), Contains("min stock")],
        ),
        HeaderRule::new(
            RawMaterialField::QuantityInStock,
            &[Contains("quantity"), Contains("qty"), Contains("current stock"), Equals("stock")],
        ),
        HeaderRule::new(RawMaterialField::UnitCost, &[Contains("cost")]),
        HeaderRule::new(
            RawMaterialField::Unit,
            &[Equals("unit"), Equals("uom"), Contains("unit of measure")],
        ),
        HeaderRule::new(RawMaterialField::Supplier, &[Contains("supplier"), Contains("vendor")]),
        HeaderRule::new(RawMaterialField::Location, &[Contains("location"), Contains("warehouse")]),
    ];

    fn is_padding(row: &MappedRow<RawMaterialField>) -> bool {
        !row.has(RawMaterialField::MaterialName)
    }

    fn build(
        row: &MappedRow<RawMaterialField>,
        _ctx: &AdapterContext<'_>,
    ) -> ImportOutcome<DomainRecord> {
        Ok(DomainRecord::RawMaterial(RawMaterial {
            material_name: required_text(row, RawMaterialField::MaterialName, "Material Name")?,
            material_type: required_text(row, RawMaterialField::MaterialType, "Material Type")?,
            quantity_in_stock: non_negative(
                "Quantity In Stock",
                row.integer(RawMaterialField::QuantityInStock),
            )?,
            unit: required_text(row, RawMaterialField::Unit, "Unit")?,
            unit_cost: non_negative("Unit Cost", row.integer(RawMaterialField::UnitCost))?,
            reorder_level: non_negative(
                "Reorder Level",
                row.integer(RawMaterialField::ReorderLevel),
            )?,
            supplier: row.text(RawMaterialField::Supplier),
            location: row.text(RawMaterialField::Location),
        }))
    }
}

// ==========================================
// 成品
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishedGoodField {
    TireSize,
    TireType,
    QuantityInStock,
    UnitPrice,
    Location,
}

pub struct FinishedGoodsAdapter;

impl SheetAdapter for FinishedGoodsAdapter {
    type Field = FinishedGoodField;

    const SCHEMA: SheetSchema = SheetSchema {
        sheet_name: "Finished Goods",
        columns: &[
            ColumnDef::plain("Tire Size"),
            ColumnDef::plain("Tire Type"),
            ColumnDef::plain("Quantity In Stock"),
            ColumnDef::money("Unit Price"),
            ColumnDef::plain("Location"),
        ],
    };

    const RULES: &'static [HeaderRule<FinishedGoodField>] = &[
        HeaderRule::new(FinishedGoodField::TireSize, &[Contains("size")]),
        HeaderRule::new(FinishedGoodField::TireType, &[Contains("type")]),
        HeaderRule::new(
            FinishedGoodField::QuantityInStock,
            &[Contains("quantity"), Contains("qty"), Contains("stock")],
        ),
        HeaderRule::new(FinishedGoodField::UnitPrice, &[Contains("price")]),
        HeaderRule::new(FinishedGoodField::Location, &[Contains("location"), Contains("warehouse")]),
    ];

    fn is_padding(row: &MappedRow<FinishedGoodField>) -> bool {
        !row.has(FinishedGoodField::TireSize)
    }

    fn build(
        row: &MappedRow<FinishedGoodField>,
        _ctx: &AdapterContext<'_>,
    ) -> ImportOutcome<DomainRecord> {
        Ok(DomainRecord::FinishedGood(FinishedGood {
            tire_size: required_text(row, FinishedGoodField::TireSize, "Tire Size")?,
            tire_type: required_text(row, FinishedGoodField::TireType, "Tire Type")?,
            quantity_in_stock: non_negative(
                "Quantity In Stock",
                row.integer(FinishedGoodField::QuantityInStock),
            )?,
            unit_price: non_negative("Unit Price", row.integer(FinishedGoodField::UnitPrice))?,
            location: row.text(FinishedGoodField::Location),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InterchangeConfig;
    use crate::importer::cell::CellValue;
    use crate::importer::header_rules::normalize_header;
    use crate::importer::sheet_reader::RawRow;
    use chrono::NaiveDate;

    fn raw(cells: &[(&str, CellValue)]) -> RawRow {
        RawRow {
            row_number: 2,
            cells: cells
                .iter()
                .map(|(h, c)| (normalize_header(h), c.clone()))
                .collect(),
        }
    }

    fn ctx(config: &InterchangeConfig) -> AdapterContext<'_> {
        AdapterContext {
            config,
            today: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_raw_material_with_noisy_numbers() {
        let config = InterchangeConfig::default();
        let row = MappedRow::from_raw(
            &raw(&[
                ("Material Name", CellValue::text("Natural Rubber")),
                ("Material Type", CellValue::text("rubber")),
                ("Quantity In Stock", CellValue::text("5,000 kg")),
                ("Unit", CellValue::text("kg")),
                ("Unit Cost (MMK)", CellValue::text("2,500 MMK")),
                ("Reorder Level", CellValue::Number(1000.0)),
            ]),
            RawMaterialsAdapter::RULES,
        );

        let DomainRecord::RawMaterial(material) = RawMaterialsAdapter::build(&row, &ctx(&config)).unwrap() else {
            panic!("expected raw material");
        };
        assert_eq!(material.quantity_in_stock, 5000);
        assert_eq!(material.unit_cost, 2500);
        assert_eq!(material.reorder_level, 1000);
        assert_eq!(material.supplier, None);
    }

    #[test]
    fn test_raw_material_missing_unit_fails() {
        let config = InterchangeConfig::default();
        let row = MappedRow::from_raw(
            &raw(&[
                ("Material Name", CellValue::text("Carbon Black")),
                ("Material Type", CellValue::text("filler")),
            ]),
            RawMaterialsAdapter::RULES,
        );

        let err = RawMaterialsAdapter::build(&row, &ctx(&config)).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: Unit");
    }

    #[test]
    fn test_reorder_quantity_not_confused_with_stock() {
        let row = MappedRow::from_raw(
            &raw(&[
                ("Material", CellValue::text("Steel Cord")),
                ("Reorder Quantity", CellValue::Number(50.0)),
                ("Qty", CellValue::Number(300.0)),
            ]),
            RawMaterialsAdapter::RULES,
        );

        assert_eq!(row.integer(RawMaterialField::ReorderLevel), 50);
        assert_eq!(row.integer(RawMaterialField::QuantityInStock), 300);
    }

    #[test]
    fn test_finished_good_padding_and_build() {
        let config = InterchangeConfig::default();
        let blank_size = MappedRow::from_raw(
            &raw(&[("Tire Type", CellValue::text("nylon"))]),
            FinishedGoodsAdapter::RULES,
        );
        assert!(FinishedGoodsAdapter::is_padding(&blank_size));

        let row = MappedRow::from_raw(
            &raw(&[
                ("Tire Size", CellValue::text("750R16")),
                ("Tire Type", CellValue::text("nylon")),
                ("Quantity In Stock", CellValue::Number(500.0)),
                ("Unit Price (MMK)", CellValue::Number(85000.0)),
            ]),
            FinishedGoodsAdapter::RULES,
        );
        let DomainRecord::FinishedGood(good) = FinishedGoodsAdapter::build(&row, &ctx(&config)).unwrap() else {
            panic!("expected finished good");
        };
        assert_eq!(good.unit_price, 85000);
        assert_eq!(good.location, None);
    }
}
