use crate::domain::entity::column::Column;
use crate::domain::entity::dialect::Dialect;
use crate::domain::renderer::renderer_for;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// テーブルのインデックス
///
/// カラムの順序がDDL上の列順とインデックス名の両方を決める。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Index {
    pub columns: Vec<Column>,
    #[serde(default)]
    pub unique: bool,
}

impl Index {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            unique: false,
        }
    }

    pub fn unique(columns: Vec<Column>) -> Self {
        Self {
            columns,
            unique: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// "unique" または "index"
    pub fn kind(&self) -> &'static str {
        if self.unique {
            "unique"
        } else {
            "index"
        }
    }

    /// `uk_a_b` / `idx_a_b`
    pub fn name(&self) -> String {
        let prefix = if self.unique { "uk" } else { "idx" };
        format!("{}_{}", prefix, self.column_names().join("_"))
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect_vec()
    }

    pub fn ddl(&self, dialect: Dialect) -> crate::Result<String> {
        Ok(renderer_for(dialect)?.index_ddl(self))
    }
}
