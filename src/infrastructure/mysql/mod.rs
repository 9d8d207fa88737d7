pub mod column_resolver;
pub mod renderer;
pub mod tiers;

pub use column_resolver::{ColumnResolver, ResolvedColumn};
pub use renderer::{MysqlRenderer, MYSQL_RENDERER};
pub use tiers::{mysql_tiers, MYSQL_TIERS};
