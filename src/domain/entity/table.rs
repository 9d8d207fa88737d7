use crate::domain::entity::column::{Column, Tag};
use crate::domain::entity::dialect::Dialect;
use crate::domain::entity::index::Index;
use crate::domain::migrate::{Migrate, MigrateOption, Scene};
use crate::domain::renderer::{renderer_for, DdlRenderer};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("Column '{0}' already exists in table")]
    ColumnAlreadyExists(String),

    #[error("Column '{0}' not found in table")]
    ColumnNotFound(String),

    #[error("Table must have at least one column")]
    NoColumns,

    #[error("Multiple primary keys not allowed")]
    MultiplePrimaryKeys,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Table {
    // table name
    pub name: String,

    // table columns
    pub columns: Vec<Column>,

    pub indexes: Vec<Index>,

    pub comment: String,

    pub dialect: Dialect,

    /// CREATE の前に DROP TABLE IF EXISTS を出力するかどうか
    pub with_drop: bool,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn with_drop(mut self) -> Self {
        self.with_drop = true;
        self
    }

    pub fn add_column(&mut self, column: Column) -> Result<(), TableError> {
        // 同名のカラムが既に存在するかチェック
        if self.get_column(&column.name).is_some() {
            return Err(TableError::ColumnAlreadyExists(column.name));
        }
        // 既にプライマリキーが存在する場合、新しいカラムがプライマリキーであればエラー
        if column.primary && self.primary_key().is_some() {
            return Err(TableError::MultiplePrimaryKeys);
        }

        self.columns.push(column);
        Ok(())
    }

    /// ビルダーパターンでカラムを追加する
    pub fn with_column(mut self, column: Column) -> Result<Self, TableError> {
        self.add_column(column)?;
        Ok(self)
    }

    /// インデックスを追加する。インデックスのカラムはすべてテーブルに存在しなければならない
    pub fn add_index(&mut self, index: Index) -> Result<(), TableError> {
        if let Some(missing) = index
            .columns
            .iter()
            .find(|c| self.get_column(&c.name).is_none())
        {
            return Err(TableError::ColumnNotFound(missing.name.clone()));
        }
        self.indexes.push(index);
        Ok(())
    }

    pub fn with_index(mut self, index: Index) -> Result<Self, TableError> {
        self.add_index(index)?;
        Ok(self)
    }

    /// 名前でカラムを検索する
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// プライマリキーのカラムを取得する
    pub fn primary_key(&self) -> Option<&Column> {
        self.columns.iter().find(|c| c.primary)
    }

    /// 指定タグを持つカラム（宣言順）
    pub fn columns_by_tag(&self, tag: &Tag) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.has_tag(tag)).collect()
    }

    /// テーブルが有効かチェックする
    pub fn validate(&self) -> Result<(), TableError> {
        if self.columns.is_empty() {
            return Err(TableError::NoColumns);
        }

        Ok(())
    }

    /// テーブルの方言でCREATE TABLE文を生成する
    pub fn create_ddl(&self) -> crate::Result<String> {
        self.create_ddl_with(renderer_for(self.dialect)?)
    }

    /// 指定したレンダラーでCREATE TABLE文を組み立てる
    ///
    /// 本体はカラム定義句、PRIMARY KEY 句、インデックス句の順に並び、空の句は除外される。
    pub fn create_ddl_with(&self, renderer: &dyn DdlRenderer) -> crate::Result<String> {
        self.check_renderer(renderer)?;

        let body = self
            .columns
            .iter()
            .map(|c| renderer.column_ddl(c))
            .chain(self.columns.iter().map(|c| renderer.primary_ddl(c)))
            .chain(self.indexes.iter().map(|i| renderer.index_ddl(i)))
            .filter(|line| !line.trim().is_empty())
            .join(",\n");

        let mut ddl = String::new();
        if self.with_drop {
            ddl.push_str(&renderer.drop_table_ddl(&self.name));
            ddl.push('\n');
        }
        ddl.push_str(&renderer.create_table_open(&self.name));
        ddl.push('\n');
        ddl.push_str(&body);
        ddl.push('\n');
        ddl.push_str(&renderer.table_options_ddl(&self.comment));

        debug!(table = %self.name, dialect = %self.dialect, "rendered create table");
        Ok(ddl)
    }

    // レンダラーの方言はテーブルの方言と一致しなければならない
    fn check_renderer(&self, renderer: &dyn DdlRenderer) -> crate::Result<()> {
        if renderer.dialect() != self.dialect {
            return Err(crate::Error::UnsupportedDialect(self.dialect));
        }
        Ok(())
    }

    /// CREATE TABLE 文をマイグレーションとして取得する
    pub fn create_migrate(&self) -> crate::Result<Migrate> {
        self.create_migrate_with(renderer_for(self.dialect)?)
    }

    pub fn create_migrate_with(&self, renderer: &dyn DdlRenderer) -> crate::Result<Migrate> {
        let ddl = self.create_ddl_with(renderer)?;
        Ok(Migrate::new(self.dialect, Scene::Create, Vec::new(), ddl))
    }

    /// カラム追加のマイグレーション。配置句（AFTER など）は `options` で上書きできる
    pub fn add_column_migrate(
        &self,
        column: &Column,
        options: &[MigrateOption],
    ) -> crate::Result<Migrate> {
        self.add_column_migrate_with(renderer_for(self.dialect)?, column, options)
    }

    pub fn add_column_migrate_with(
        &self,
        renderer: &dyn DdlRenderer,
        column: &Column,
        options: &[MigrateOption],
    ) -> crate::Result<Migrate> {
        self.check_renderer(renderer)?;
        if self.get_column(&column.name).is_some() {
            return Err(TableError::ColumnAlreadyExists(column.name.clone()).into());
        }
        let ddl = renderer.add_column_ddl(&self.name, column, options);
        Ok(Migrate::new(self.dialect, Scene::Append, options.to_vec(), ddl))
    }

    /// カラム変更のマイグレーション
    pub fn modify_column_migrate(
        &self,
        column: &Column,
        options: &[MigrateOption],
    ) -> crate::Result<Migrate> {
        self.modify_column_migrate_with(renderer_for(self.dialect)?, column, options)
    }

    pub fn modify_column_migrate_with(
        &self,
        renderer: &dyn DdlRenderer,
        column: &Column,
        options: &[MigrateOption],
    ) -> crate::Result<Migrate> {
        self.check_renderer(renderer)?;
        if self.get_column(&column.name).is_none() {
            return Err(TableError::ColumnNotFound(column.name.clone()).into());
        }
        let ddl = renderer.modify_column_ddl(&self.name, column, options);
        Ok(Migrate::new(self.dialect, Scene::Modify, options.to_vec(), ddl))
    }

    /// カラム削除のマイグレーション
    pub fn drop_column_migrate(&self, name: &str) -> crate::Result<Migrate> {
        self.drop_column_migrate_with(renderer_for(self.dialect)?, name)
    }

    pub fn drop_column_migrate_with(
        &self,
        renderer: &dyn DdlRenderer,
        name: &str,
    ) -> crate::Result<Migrate> {
        self.check_renderer(renderer)?;
        if self.get_column(name).is_none() {
            return Err(TableError::ColumnNotFound(name.to_string()).into());
        }
        let ddl = renderer.drop_column_ddl(&self.name, name);
        Ok(Migrate::new(self.dialect, Scene::Delete, Vec::new(), ddl))
    }
}
