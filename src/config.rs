use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::Error;

/// CREATE TABLE 文の末尾に付与するテーブルオプション
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct TableOptions {
    /// ストレージエンジン
    #[builder(default = "InnoDB".to_string(), setter(into))]
    pub engine: String,

    /// AUTO_INCREMENT の初期値
    #[builder(default = 1)]
    pub auto_increment: u64,

    /// デフォルト文字セット
    #[builder(default = "utf8".to_string(), setter(into))]
    pub charset: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// 境界値が指定されていないカラムに適用する既定値
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct ColumnDefaults {
    /// maxLength 未指定の文字列カラムの長さ
    #[builder(default = 255)]
    pub string_max_length: u64,

    /// size 未指定の整数カラムの表示幅
    #[builder(default = 11)]
    pub int_size: u32,
}

impl Default for ColumnDefaults {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// レンダラー全体の設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct RenderConfig {
    #[builder(default)]
    pub table: TableOptions,

    #[builder(default)]
    pub column: ColumnDefaults,
}

impl RenderConfig {
    /// JSON文字列から設定を読み込む（未指定の項目は既定値）
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }
}
