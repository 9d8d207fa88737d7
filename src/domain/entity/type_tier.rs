//! 上限値から最小の格納型を選ぶための段階テーブル。
//!
//! テーブルは構築時に一度だけ `upper_limit` の昇順へ安定ソートされ、以後は読み取り専用。
//! 検索はソートを行わない。

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// 段階テーブルの1エントリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct TypeTier<T> {
    /// この段階が扱える上限（この値を含む）
    pub upper_limit: T,

    /// 格納型の名前（例: varchar, int）
    #[builder(setter(into))]
    pub storage_type: String,

    /// 既定の段階かどうか
    #[builder(default)]
    #[serde(default)]
    pub is_default: bool,

    /// 表示サイズ。`NO_SIZE` のときは型名にサイズを付けない
    #[builder(default)]
    #[serde(default)]
    pub display_size: i32,

    /// 既定値を設定できない型かどうか（TEXT など）
    #[builder(default)]
    #[serde(default)]
    pub disallow_default: bool,
}

impl<T> TypeTier<T> {
    pub const NO_SIZE: i32 = -1;

    pub fn is_sized(&self) -> bool {
        self.display_size > Self::NO_SIZE
    }
}

/// 昇順ソート済みの段階テーブル
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "Vec<TypeTier<T>>",
    into = "Vec<TypeTier<T>>",
    bound(
        serialize = "T: Serialize + Clone",
        deserialize = "T: Deserialize<'de> + Copy + Ord + Default"
    )
)]
pub struct TypeTierTable<T> {
    tiers: Vec<TypeTier<T>>,
}

impl<T: Copy + Ord + Default> TypeTierTable<T> {
    pub fn new(mut tiers: Vec<TypeTier<T>>) -> Self {
        tiers.sort_by_key(|tier| tier.upper_limit);
        Self { tiers }
    }

    pub fn tiers(&self) -> &[TypeTier<T>] {
        &self.tiers
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// `target` 以上の上限を持つ段階のうち最小のものを返す
    pub fn get_by_upper_limit(&self, target: T) -> Option<&TypeTier<T>> {
        self.tiers.iter().find(|tier| tier.upper_limit >= target)
    }

    /// `get_by_upper_limit` と同じだが、`target` が0以下か該当なしの場合は既定の段階を返す
    pub fn get_by_upper_limit_with_default(&self, target: T) -> Option<&TypeTier<T>> {
        if target > T::default() {
            if let Some(tier) = self.get_by_upper_limit(target) {
                return Some(tier);
            }
        }
        self.get_default()
    }

    /// `is_default` の段階（複数あれば昇順で最初のもの）、なければ最大の段階
    pub fn get_default(&self) -> Option<&TypeTier<T>> {
        self.tiers
            .iter()
            .find(|tier| tier.is_default)
            .or_else(|| self.tiers.last())
    }
}

impl<T: Copy + Ord + Default> From<Vec<TypeTier<T>>> for TypeTierTable<T> {
    fn from(tiers: Vec<TypeTier<T>>) -> Self {
        Self::new(tiers)
    }
}

impl<T> From<TypeTierTable<T>> for Vec<TypeTier<T>> {
    fn from(table: TypeTierTable<T>) -> Self {
        table.tiers
    }
}

/// 方言ごとに独立して設定される3種類の段階テーブル
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeTierTables {
    /// 文字列長 -> 文字列型
    pub string: TypeTierTable<u64>,
    /// 最大値 -> 符号なし整数型
    pub unsigned_int: TypeTierTable<u64>,
    /// 最大値 -> 符号付き整数型
    pub signed_int: TypeTierTable<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tier(upper_limit: u64, storage_type: &str) -> TypeTier<u64> {
        TypeTier::builder()
            .upper_limit(upper_limit)
            .storage_type(storage_type)
            .build()
    }

    fn sample() -> TypeTierTable<u64> {
        TypeTierTable::new(vec![
            tier(1000, "large"),
            tier(10, "small"),
            TypeTier::builder()
                .upper_limit(100)
                .storage_type("medium")
                .is_default(true)
                .build(),
        ])
    }

    #[test]
    fn construction_sorts_ascending() {
        let table = sample();
        let limits: Vec<u64> = table.tiers().iter().map(|t| t.upper_limit).collect();
        assert_eq!(limits, vec![10, 100, 1000]);
    }

    #[test]
    fn picks_smallest_sufficient_tier() {
        let table = sample();
        assert_eq!(table.get_by_upper_limit(1).unwrap().storage_type, "small");
        assert_eq!(table.get_by_upper_limit(10).unwrap().storage_type, "small");
        assert_eq!(table.get_by_upper_limit(11).unwrap().storage_type, "medium");
        assert_eq!(table.get_by_upper_limit(1000).unwrap().storage_type, "large");
        assert!(table.get_by_upper_limit(1001).is_none());
    }

    #[test]
    fn falls_back_to_flagged_default() {
        let table = sample();
        assert_eq!(table.get_by_upper_limit_with_default(0).unwrap().storage_type, "medium");
        assert_eq!(table.get_by_upper_limit_with_default(5000).unwrap().storage_type, "medium");
    }

    #[test]
    fn default_without_flag_is_the_widest_tier() {
        let table = TypeTierTable::new(vec![tier(5, "a"), tier(50, "b")]);
        assert_eq!(table.get_default().unwrap().storage_type, "b");
        assert_eq!(table.get_by_upper_limit_with_default(500).unwrap().storage_type, "b");
    }

    #[test]
    fn first_flagged_default_wins() {
        let flagged = |limit: u64, name: &str| {
            TypeTier::builder()
                .upper_limit(limit)
                .storage_type(name)
                .is_default(true)
                .build()
        };
        let table = TypeTierTable::new(vec![flagged(50, "second"), flagged(5, "first")]);
        assert_eq!(table.get_default().unwrap().storage_type, "first");
    }

    #[test]
    fn empty_table_has_no_default() {
        let table: TypeTierTable<i64> = TypeTierTable::new(Vec::new());
        assert!(table.get_default().is_none());
        assert!(table.get_by_upper_limit_with_default(3).is_none());
    }

    #[test]
    fn negative_target_uses_default_for_signed_tables() {
        let table = TypeTierTable::new(vec![
            TypeTier::builder().upper_limit(127i64).storage_type("tiny").build(),
            TypeTier::builder()
                .upper_limit(i64::MAX)
                .storage_type("big")
                .is_default(true)
                .build(),
        ]);
        assert_eq!(table.get_by_upper_limit_with_default(-5).unwrap().storage_type, "big");
    }

    #[test]
    fn deserialized_table_is_sorted() {
        let json = r#"[
            {"upperLimit": 300, "storageType": "wide"},
            {"upperLimit": 3, "storageType": "narrow", "displaySize": -1}
        ]"#;
        let table: TypeTierTable<u64> = serde_json::from_str(json).unwrap();
        assert_eq!(table.tiers()[0].storage_type, "narrow");
        assert!(!table.tiers()[0].is_sized());
        assert!(table.tiers()[1].is_sized());
    }

    fn arb_limits() -> impl Strategy<Value = Vec<u64>> {
        prop::collection::vec(1u64..10_000, 1..8)
    }

    proptest! {
        #[test]
        fn prop_lookup_returns_smallest_sufficient_or_default(limits in arb_limits(), target in 1u64..12_000) {
            let table = TypeTierTable::new(
                limits.iter().map(|l| tier(*l, &l.to_string())).collect(),
            );
            let found = table.get_by_upper_limit_with_default(target).unwrap();
            match limits.iter().filter(|l| **l >= target).min() {
                Some(expected) => prop_assert_eq!(found.upper_limit, *expected),
                None => prop_assert_eq!(found.upper_limit, *limits.iter().max().unwrap()),
            }
        }
    }
}
