pub mod mysql;

pub use mysql::{MysqlRenderer, MYSQL_RENDERER, MYSQL_TIERS};
