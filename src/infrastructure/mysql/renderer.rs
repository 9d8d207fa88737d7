use crate::config::RenderConfig;
use crate::domain::entity::value::quote;
use crate::domain::entity::{Column, Dialect, Index, TypeTierTables};
use crate::domain::migrate::{resolve_option, MigrateOption};
use crate::domain::renderer::DdlRenderer;
use crate::infrastructure::mysql::column_resolver::{column_clause, ColumnResolver};
use crate::infrastructure::mysql::tiers::MYSQL_TIERS;
use itertools::Itertools;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// 既定設定の MySQL レンダラー
pub static MYSQL_RENDERER: Lazy<MysqlRenderer> = Lazy::new(MysqlRenderer::default);

/// MySQL 方言のDDLレンダラー
#[derive(Debug, Clone)]
pub struct MysqlRenderer {
    tiers: Arc<TypeTierTables>,
    config: RenderConfig,
}

impl MysqlRenderer {
    pub fn new(tiers: Arc<TypeTierTables>, config: RenderConfig) -> Self {
        Self { tiers, config }
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self::new(Arc::clone(&MYSQL_TIERS), config)
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn resolver(&self) -> ColumnResolver<'_> {
        ColumnResolver::new(&self.tiers, self.config.column)
    }

    fn quote_ident(name: &str) -> String {
        format!("`{}`", name.replace('`', "``"))
    }

    // ALTER TABLE `t` <action> <clause> [AFTER `x`];
    fn alter_column(&self, table: &str, action: &str, column: &Column, options: &[MigrateOption]) -> String {
        let placement = MigrateOption::mysql_after("");
        let placement = resolve_option(&placement, options);
        let statement = [
            format!("ALTER TABLE {}", Self::quote_ident(table)),
            action.to_string(),
            self.column_ddl(column),
            placement.text().to_string(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .join(" ");
        format!("{};", statement)
    }
}

impl Default for MysqlRenderer {
    fn default() -> Self {
        Self::with_config(RenderConfig::default())
    }
}

impl DdlRenderer for MysqlRenderer {
    fn dialect(&self) -> Dialect {
        Dialect::Mysql
    }

    fn column_ddl(&self, column: &Column) -> String {
        let resolved = self.resolver().resolve(column);
        column_clause(column, &resolved)
    }

    fn primary_ddl(&self, column: &Column) -> String {
        if column.primary {
            format!("PRIMARY KEY ({})", column.name)
        } else {
            String::new()
        }
    }

    fn index_ddl(&self, index: &Index) -> String {
        if index.is_empty() {
            return String::new();
        }
        format!("{} {}({})", index.kind(), index.name(), index.column_names().join(","))
    }

    fn drop_table_ddl(&self, table: &str) -> String {
        format!("DROP TABLE IF EXISTS {};", Self::quote_ident(table))
    }

    fn create_table_open(&self, table: &str) -> String {
        format!("CREATE TABLE IF NOT EXISTS {}(", Self::quote_ident(table))
    }

    fn table_options_ddl(&self, comment: &str) -> String {
        let options = &self.config.table;
        format!(
            ")ENGINE={} AUTO_INCREMENT={} DEFAULT CHARSET={} COMMENT={};",
            options.engine,
            options.auto_increment,
            options.charset,
            quote(comment)
        )
    }

    fn add_column_ddl(&self, table: &str, column: &Column, options: &[MigrateOption]) -> String {
        self.alter_column(table, "ADD COLUMN", column, options)
    }

    fn modify_column_ddl(&self, table: &str, column: &Column, options: &[MigrateOption]) -> String {
        self.alter_column(table, "MODIFY COLUMN", column, options)
    }

    fn drop_column_ddl(&self, table: &str, column: &str) -> String {
        format!(
            "ALTER TABLE {} DROP COLUMN {};",
            Self::quote_ident(table),
            Self::quote_ident(column)
        )
    }
}
