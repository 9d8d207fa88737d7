pub mod migration;
pub mod option;

pub use migration::{Migrate, Migrates, Scene};
pub use option::{resolve_option, MigrateOption, Token};
