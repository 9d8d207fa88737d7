pub mod column;
pub mod dialect;
pub mod enums;
pub mod field;
pub mod index;
pub mod table;
pub mod type_tier;
pub mod value;
// src/domain/entity/mod.rs

pub use column::{Column, ColumnType, Tag};
pub use dialect::Dialect;
pub use enums::{EnumItem, Enums};
pub use field::{columns_from_fields, FieldDescriptor, FieldMappingError, IndexDescriptor, TableDescriptor};
pub use index::Index;
pub use table::{Table, TableError};
pub use type_tier::{TypeTier, TypeTierTable, TypeTierTables};
pub use value::Value;
