use crate::domain::entity::column::ColumnType;
use crate::domain::entity::value::Value;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// 列挙値の1項目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumItem {
    /// 実際に格納されるキー
    pub key: Value,

    /// 表示名（カラムコメントに使われる）
    #[serde(default)]
    pub title: String,

    /// 既定値として使う項目かどうか
    #[serde(default)]
    pub is_default: bool,
}

impl EnumItem {
    pub fn new(key: impl Into<Value>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            is_default: false,
        }
    }

    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}

/// 順序付きの列挙定義
///
/// 列挙が設定されたカラムでは、型・上限・既定値はすべてここから導出される。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Enums(pub Vec<EnumItem>);

impl Enums {
    pub fn new(items: Vec<EnumItem>) -> Self {
        Self(items)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn items(&self) -> &[EnumItem] {
        &self.0
    }

    /// キーがすべて整数なら int、それ以外は string
    pub fn column_type(&self) -> ColumnType {
        if !self.0.is_empty() && self.0.iter().all(|item| item.key.is_integer()) {
            ColumnType::Int
        } else {
            ColumnType::String
        }
    }

    /// (最長キーの文字数, 最大の非負整数キー)
    pub fn max_length_maximum(&self) -> (u64, u64) {
        let max_length = self
            .0
            .iter()
            .map(|item| item.key.to_string().chars().count() as u64)
            .max()
            .unwrap_or(0);
        let maximum = self
            .0
            .iter()
            .filter_map(|item| item.key.as_integer())
            .filter_map(|key| u64::try_from(key).ok())
            .max()
            .unwrap_or(0);
        (max_length, maximum)
    }

    /// 既定項目（なければ先頭の項目）
    pub fn default_item(&self) -> Option<&EnumItem> {
        self.0
            .iter()
            .find(|item| item.is_default)
            .or_else(|| self.0.first())
    }

    /// コメント用の説明 `1-有効,2-無効`
    pub fn describe(&self) -> String {
        self.0
            .iter()
            .map(|item| format!("{}-{}", item.key, item.title))
            .join(",")
    }
}
