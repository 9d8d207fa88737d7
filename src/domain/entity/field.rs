//! 外部のスキーマ記述（フィールド）からカラム・テーブルへの変換。
//!
//! フィールドごとの失敗は `FieldMappingError` として個別に報告し、一括変換全体は止めない。

use crate::domain::entity::column::{Column, ColumnType, Tag};
use crate::domain::entity::dialect::Dialect;
use crate::domain::entity::enums::Enums;
use crate::domain::entity::index::Index;
use crate::domain::entity::table::{Table, TableError};
use crate::domain::entity::value::Value;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldMappingError {
    #[error("field #{index} has no name")]
    MissingName { index: usize },

    #[error("field '{field}': minLength {min} exceeds maxLength {max}")]
    LengthRange { field: String, min: u64, max: u64 },

    #[error("field '{field}': minimum {min} exceeds maximum {max}")]
    NumericRange { field: String, min: i64, max: u64 },

    #[error("field '{field}': autoIncrement requires an integer type, got {column_type}")]
    AutoIncrementType { field: String, column_type: String },
}

/// 外部スキーマから受け取るフィールド記述
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldDescriptor {
    pub name: String,
    pub comment: String,
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    pub size: u32,
    pub default: Option<Value>,
    pub enums: Option<Enums>,
    pub min_length: u64,
    pub max_length: u64,
    /// -1 以下なら符号付き
    pub minimum: i64,
    pub maximum: u64,
    pub primary: bool,
    pub auto_increment: bool,
    pub on_update: Option<String>,
    pub tags: Vec<Tag>,
}

impl FieldDescriptor {
    // int/string 以外の型名は最小値・最大値の有無から推定する
    fn column_type(&self) -> ColumnType {
        match self.field_type.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some(name @ ("int" | "integer" | "string")) => ColumnType::from(name),
            _ if self.minimum > 0 || self.maximum > 0 => ColumnType::Int,
            _ => ColumnType::String,
        }
    }

    // 列挙があればその説明をコメントに付け足す
    fn full_comment(&self) -> String {
        match self.enums.as_ref().filter(|enums| !enums.is_empty()) {
            Some(enums) => format!("{}({})", self.comment, enums.describe()),
            None => self.comment.clone(),
        }
    }

    /// `index` は一括変換時の位置（名前がないときのエラー報告用）
    pub fn to_column(&self, index: usize) -> Result<Column, FieldMappingError> {
        if self.name.trim().is_empty() {
            return Err(FieldMappingError::MissingName { index });
        }
        if self.max_length > 0 && self.min_length > self.max_length {
            return Err(FieldMappingError::LengthRange {
                field: self.name.clone(),
                min: self.min_length,
                max: self.max_length,
            });
        }
        if self.maximum > 0 && u64::try_from(self.minimum).map_or(false, |min| min > self.maximum) {
            return Err(FieldMappingError::NumericRange {
                field: self.name.clone(),
                min: self.minimum,
                max: self.maximum,
            });
        }
        let column_type = self.column_type();
        if self.auto_increment && column_type != ColumnType::Int {
            return Err(FieldMappingError::AutoIncrementType {
                field: self.name.clone(),
                column_type: column_type.to_string(),
            });
        }

        Ok(Column {
            name: self.name.clone(),
            comment: self.full_comment(),
            column_type,
            size: self.size,
            unsigned: self.minimum > -1,
            default: self.default.clone(),
            enums: self.enums.clone(),
            min_length: self.min_length,
            max_length: self.max_length,
            minimum: self.minimum,
            maximum: self.maximum,
            primary: self.primary,
            auto_increment: self.auto_increment,
            on_update: self.on_update.clone(),
            tags: self.tags.clone(),
        })
    }
}

/// フィールドを一括でカラムに変換する。成功したカラムと失敗したフィールドのエラーを両方返す
pub fn columns_from_fields(fields: &[FieldDescriptor]) -> (Vec<Column>, Vec<FieldMappingError>) {
    let (columns, errors): (Vec<_>, Vec<_>) = fields
        .iter()
        .enumerate()
        .map(|(index, field)| field.to_column(index))
        .partition_result();
    debug!(mapped = columns.len(), failed = errors.len(), "mapped fields to columns");
    (columns, errors)
}

/// カラム名で指定するインデックス
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexDescriptor {
    pub columns: Vec<String>,
    pub unique: bool,
}

/// 外部スキーマから受け取るテーブル記述
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableDescriptor {
    pub name: String,
    pub comment: String,
    pub dialect: Dialect,
    pub with_drop: bool,
    pub fields: Vec<FieldDescriptor>,
    pub indexes: Vec<IndexDescriptor>,
}

impl TableDescriptor {
    /// 検証済みのテーブルに変換する
    pub fn into_table(self) -> crate::Result<Table> {
        let (columns, errors) = columns_from_fields(&self.fields);
        if !errors.is_empty() {
            return Err(crate::Error::FieldMapping(errors));
        }

        let mut table = Table::new(self.name)
            .with_dialect(self.dialect)
            .with_comment(self.comment);
        table.with_drop = self.with_drop;
        for column in columns {
            table.add_column(column)?;
        }
        for descriptor in self.indexes {
            let columns = descriptor
                .columns
                .iter()
                .map(|name| {
                    table
                        .get_column(name)
                        .cloned()
                        .ok_or_else(|| TableError::ColumnNotFound(name.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            let index = if descriptor.unique {
                Index::unique(columns)
            } else {
                Index::new(columns)
            };
            table.add_index(index)?;
        }
        table.validate()?;
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::EnumItem;

    fn field(name: &str) -> FieldDescriptor {
        FieldDescriptor {
            name: name.to_string(),
            ..FieldDescriptor::default()
        }
    }

    #[test]
    fn unsigned_unless_minimum_is_negative() {
        let column = field("n").to_column(0).unwrap();
        assert!(column.unsigned);
        let signed = FieldDescriptor { minimum: -10, ..field("n") }.to_column(0).unwrap();
        assert!(!signed.unsigned);
    }

    #[test]
    fn type_is_inferred_from_bounds() {
        assert_eq!(field("s").to_column(0).unwrap().column_type, ColumnType::String);
        let by_max = FieldDescriptor { maximum: 10, ..field("n") };
        assert_eq!(by_max.to_column(0).unwrap().column_type, ColumnType::Int);
        let declared = FieldDescriptor { field_type: Some("Integer".into()), ..field("n") };
        assert_eq!(declared.to_column(0).unwrap().column_type, ColumnType::Int);
        let unknown = FieldDescriptor { field_type: Some("boolean".into()), ..field("b") };
        assert_eq!(unknown.to_column(0).unwrap().column_type, ColumnType::String);
    }

    #[test]
    fn enum_titles_are_appended_to_comment() {
        let status = FieldDescriptor {
            comment: "status".into(),
            enums: Some(Enums::new(vec![EnumItem::new(1i64, "on"), EnumItem::new(2i64, "off")])),
            ..field("status")
        };
        assert_eq!(status.to_column(0).unwrap().comment, "status(1-on,2-off)");
    }

    #[test]
    fn batch_reports_every_failure_and_keeps_good_columns() {
        let fields = vec![
            field("id"),
            field(""),
            FieldDescriptor { min_length: 10, max_length: 5, ..field("code") },
            FieldDescriptor { minimum: 20, maximum: 10, ..field("qty") },
            FieldDescriptor { auto_increment: true, field_type: Some("string".into()), ..field("seq") },
            field("name"),
        ];
        let (columns, errors) = columns_from_fields(&fields);
        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name"]);
        assert_eq!(
            errors,
            vec![
                FieldMappingError::MissingName { index: 1 },
                FieldMappingError::LengthRange { field: "code".into(), min: 10, max: 5 },
                FieldMappingError::NumericRange { field: "qty".into(), min: 20, max: 10 },
                FieldMappingError::AutoIncrementType {
                    field: "seq".into(),
                    column_type: "string".into(),
                },
            ]
        );
    }

    #[test]
    fn descriptor_builds_table_with_indexes() {
        let json = r#"{
            "name": "user",
            "comment": "users",
            "withDrop": true,
            "fields": [
                {"name": "id", "type": "int", "autoIncrement": true, "primary": true},
                {"name": "email", "maxLength": 128}
            ],
            "indexes": [{"columns": ["email"], "unique": true}]
        }"#;
        let descriptor: TableDescriptor = serde_json::from_str(json).unwrap();
        let table = descriptor.into_table().unwrap();
        assert!(table.with_drop);
        assert_eq!(table.dialect, Dialect::Mysql);
        assert_eq!(table.indexes[0].name(), "uk_email");
        assert_eq!(table.primary_key().unwrap().name, "id");
    }

    #[test]
    fn descriptor_rejects_unknown_index_column() {
        let descriptor = TableDescriptor {
            name: "t".into(),
            fields: vec![field("a")],
            indexes: vec![IndexDescriptor { columns: vec!["b".into()], unique: false }],
            ..TableDescriptor::default()
        };
        assert!(matches!(
            descriptor.into_table(),
            Err(crate::Error::Table(TableError::ColumnNotFound(name))) if name == "b"
        ));
    }

    #[test]
    fn descriptor_surfaces_field_errors() {
        let descriptor = TableDescriptor {
            name: "t".into(),
            fields: vec![field(""), field("ok")],
            ..TableDescriptor::default()
        };
        match descriptor.into_table() {
            Err(crate::Error::FieldMapping(errors)) => assert_eq!(errors.len(), 1),
            other => panic!("unexpected result: {:?}", other.map(|t| t.name)),
        }
    }
}
