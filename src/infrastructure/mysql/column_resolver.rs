//! カラムの具体的な型・既定値・NULL可否を決める。
//!
//! 優先順位は 列挙定義 > 意味的な型（段階テーブル）> AUTO_INCREMENT > 日時タグ。
//! 後の規則ほど強く、前の結果を上書きする。

use crate::config::ColumnDefaults;
use crate::domain::entity::value::quote;
use crate::domain::entity::{Column, ColumnType, Tag, TypeTierTables, Value};
use tracing::{debug, warn};

const DATETIME: &str = "datetime";
const CURRENT_TIMESTAMP: &str = "CURRENT_TIMESTAMP";

/// 解決済みのカラム属性
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub sql_type: String,
    /// `default` キーワードの後に続く式（引用済み）
    pub default: Option<String>,
    pub on_update: Option<String>,
    pub auto_increment: bool,
}

impl ResolvedColumn {
    /// 既定値がある場合のみ NOT NULL（既定値なしは NULL 許容）
    pub fn not_null(&self) -> bool {
        self.default.is_some()
    }
}

pub struct ColumnResolver<'a> {
    tiers: &'a TypeTierTables,
    defaults: ColumnDefaults,
}

impl<'a> ColumnResolver<'a> {
    pub fn new(tiers: &'a TypeTierTables, defaults: ColumnDefaults) -> Self {
        Self { tiers, defaults }
    }

    pub fn resolve(&self, column: &Column) -> ResolvedColumn {
        // 列挙が設定されていれば型・上限・既定値はすべて列挙から取る
        let (column_type, max_length, maximum, default) = match column.effective_enums() {
            Some(enums) => {
                let (max_length, maximum) = enums.max_length_maximum();
                let default = enums.default_item().map(|item| item.key.clone());
                (enums.column_type(), max_length, maximum, default)
            }
            None => (
                column.column_type.clone(),
                column.max_length,
                column.maximum,
                column.default.clone(),
            ),
        };

        let (sql_type, mut default) = match &column_type {
            ColumnType::String => self.resolve_string(column, max_length, default),
            ColumnType::Int => self.resolve_int(column, maximum, default),
            ColumnType::Raw(raw) => (raw.clone(), default.map(|v| v.to_string())),
        };

        if column.auto_increment {
            default = None;
        }

        let mut resolved = ResolvedColumn {
            sql_type,
            default,
            on_update: column.on_update.clone(),
            auto_increment: column.auto_increment,
        };

        if column.has_tag(&Tag::CreatedAt) {
            resolved.sql_type = DATETIME.to_string();
            resolved.default = Some(CURRENT_TIMESTAMP.to_string());
            resolved.on_update = None;
        } else if column.has_tag(&Tag::UpdatedAt) {
            resolved.sql_type = DATETIME.to_string();
            resolved.default = Some(CURRENT_TIMESTAMP.to_string());
            resolved.on_update = Some(CURRENT_TIMESTAMP.to_string());
        }

        resolved
    }

    fn resolve_string(
        &self,
        column: &Column,
        max_length: u64,
        default: Option<Value>,
    ) -> (String, Option<String>) {
        let max_length = if max_length == 0 {
            self.defaults.string_max_length
        } else {
            max_length
        };
        let default = default.map(|v| v.quoted());

        let Some(tier) = self.tiers.string.get_by_upper_limit_with_default(max_length) else {
            warn!(column = %column.name, "string tier table is empty, falling back to varchar");
            return (format!("varchar({})", max_length), default);
        };
        debug!(column = %column.name, max_length, tier = %tier.storage_type, "resolved string tier");

        let sql_type = if tier.is_sized() {
            format!("{}({})", tier.storage_type, max_length)
        } else {
            tier.storage_type.clone()
        };
        if tier.disallow_default && default.is_some() {
            debug!(column = %column.name, tier = %tier.storage_type, "default suppressed by tier");
            return (sql_type, None);
        }
        (sql_type, default)
    }

    fn resolve_int(
        &self,
        column: &Column,
        maximum: u64,
        default: Option<Value>,
    ) -> (String, Option<String>) {
        let size = if column.size == 0 {
            self.defaults.int_size
        } else {
            column.size
        };
        let default = default.unwrap_or(Value::Integer(0)).to_string();

        // 符号の有無でテーブルの数値型が異なるので、型名だけを取り出す
        let storage_type = if column.unsigned {
            self.tiers
                .unsigned_int
                .get_by_upper_limit_with_default(maximum)
                .map(|tier| tier.storage_type.as_str())
        } else {
            let maximum = i64::try_from(maximum).unwrap_or(i64::MAX);
            self.tiers
                .signed_int
                .get_by_upper_limit_with_default(maximum)
                .map(|tier| tier.storage_type.as_str())
        };
        let storage_type = match storage_type {
            Some(storage_type) => {
                debug!(column = %column.name, maximum, tier = storage_type, "resolved integer tier");
                storage_type
            }
            None => {
                warn!(column = %column.name, "integer tier table is empty, falling back to int");
                "int"
            }
        };

        let sql_type = if column.unsigned {
            format!("{}({}) unsigned", storage_type, size)
        } else {
            format!("{}({})", storage_type, size)
        };
        (sql_type, Some(default))
    }
}

/// カラム定義句を組み立てる: 名前 型 NULL制約 AUTO_INCREMENT 既定値 コメント
pub fn column_clause(column: &Column, resolved: &ResolvedColumn) -> String {
    let mut segments: Vec<String> = vec![column.name.clone(), resolved.sql_type.clone()];
    if resolved.not_null() {
        segments.push("not null".to_string());
    }
    if resolved.auto_increment {
        segments.push("AUTO_INCREMENT".to_string());
    }
    if let Some(default) = &resolved.default {
        segments.push(format!("default {}", default));
    }
    if let Some(on_update) = &resolved.on_update {
        segments.push(format!("ON UPDATE {}", on_update));
    }
    if !column.comment.is_empty() {
        segments.push(format!("COMMENT {}", quote(&column.comment)));
    }
    segments.retain(|segment| !segment.is_empty());
    segments.join(" ")
}
