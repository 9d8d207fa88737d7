use crate::domain::entity::{TypeTier, TypeTierTable, TypeTierTables};
use once_cell::sync::Lazy;
use std::sync::Arc;

/// プロセス全体で共有する MySQL の段階テーブル（初期化時に一度だけソートされる）
pub static MYSQL_TIERS: Lazy<Arc<TypeTierTables>> = Lazy::new(|| Arc::new(mysql_tiers()));

fn tier<T>(upper_limit: T, storage_type: &str, display_size: i32) -> TypeTier<T> {
    TypeTier::builder()
        .upper_limit(upper_limit)
        .storage_type(storage_type)
        .display_size(display_size)
        .build()
}

fn default_tier<T>(upper_limit: T, storage_type: &str, display_size: i32) -> TypeTier<T> {
    TypeTier {
        is_default: true,
        ..tier(upper_limit, storage_type, display_size)
    }
}

fn text_tier(upper_limit: u64, storage_type: &str) -> TypeTier<u64> {
    TypeTier {
        disallow_default: true,
        ..tier(upper_limit, storage_type, TypeTier::<u64>::NO_SIZE)
    }
}

pub fn mysql_tiers() -> TypeTierTables {
    TypeTierTables {
        string: TypeTierTable::new(vec![
            default_tier(255, "varchar", 0),
            text_tier(65_535, "TEXT"),
            text_tier(16_777_215, "MEDIUMTEXT"),
            text_tier(4_294_967_295, "LONGTEXT"),
        ]),
        unsigned_int: TypeTierTable::new(vec![
            tier((1 << 8) - 1, "TINYINT", 1),
            tier((1 << 16) - 1, "SMALLINT", 11),
            tier((1 << 24) - 1, "mediumint", 11),
            default_tier((1 << 32) - 1, "int", 11),
            tier(u64::MAX, "bigint", 11),
        ]),
        signed_int: TypeTierTable::new(vec![
            tier((1 << 7) - 1, "TINYINT", 1),
            tier((1 << 15) - 1, "SMALLINT", 11),
            tier((1 << 23) - 1, "mediumint", 11),
            default_tier((1 << 31) - 1, "int", 11),
            tier(i64::MAX, "bigint", 11),
        ]),
    }
}
