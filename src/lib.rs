pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{ColumnDefaults, RenderConfig, TableOptions};
pub use domain::entity::{
    columns_from_fields, Column, ColumnType, Dialect, EnumItem, Enums, FieldDescriptor,
    FieldMappingError, Index, IndexDescriptor, Table, TableDescriptor, TableError, Tag,
    TypeTier, TypeTierTable, TypeTierTables, Value,
};
pub use domain::migrate::{resolve_option, Migrate, MigrateOption, Migrates, Scene, Token};
pub use domain::renderer::{renderer_for, DdlRenderer};
pub use infrastructure::mysql::{ColumnResolver, MysqlRenderer, ResolvedColumn, MYSQL_TIERS};

// RustyDDL version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// DDL generation result type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unsupported dialect: {0}")]
    UnsupportedDialect(Dialect),

    #[error("Field mapping failed for {} field(s): {}", .0.len(), join_errors(.0))]
    FieldMapping(Vec<FieldMappingError>),

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Configuration error: {0}")]
    Config(String),
}

fn join_errors(errors: &[FieldMappingError]) -> String {
    use itertools::Itertools;
    errors.iter().join("; ")
}
