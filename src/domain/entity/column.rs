use crate::domain::entity::dialect::Dialect;
use crate::domain::entity::enums::Enums;
use crate::domain::entity::value::Value;
use crate::domain::renderer::renderer_for;
use serde::{Deserialize, Serialize};
use std::fmt;
use typed_builder::TypedBuilder;

/// カラムの意味的な型
///
/// `string` と `int` は上限値から具体的な格納型が決まる。それ以外は方言の型名をそのまま使う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnType {
    #[default]
    String,
    Int,
    Raw(String),
}

impl From<&str> for ColumnType {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "string" => ColumnType::String,
            "int" | "integer" => ColumnType::Int,
            _ => ColumnType::Raw(value.to_string()),
        }
    }
}

impl From<String> for ColumnType {
    fn from(value: String) -> Self {
        ColumnType::from(value.as_str())
    }
}

impl From<ColumnType> for String {
    fn from(value: ColumnType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::String => write!(f, "string"),
            ColumnType::Int => write!(f, "int"),
            ColumnType::Raw(raw) => write!(f, "{}", raw),
        }
    }
}

/// カラムに付与される意味タグ
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tag {
    /// 作成日時（作成時に自動設定）
    CreatedAt,
    /// 更新日時（作成時に設定、更新時に自動更新）
    UpdatedAt,
    Custom(String),
}

impl From<&str> for Tag {
    // "created_at" / "created-at" / "createdAt" はどれも同じタグ
    fn from(value: &str) -> Self {
        let normalized: String = value
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "createdat" => Tag::CreatedAt,
            "updatedat" => Tag::UpdatedAt,
            _ => Tag::Custom(value.to_string()),
        }
    }
}

impl From<String> for Tag {
    fn from(value: String) -> Self {
        Tag::from(value.as_str())
    }
}

impl From<Tag> for String {
    fn from(value: Tag) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::CreatedAt => write!(f, "created_at"),
            Tag::UpdatedAt => write!(f, "updated_at"),
            Tag::Custom(tag) => write!(f, "{}", tag),
        }
    }
}

/// テーブルのカラムを表すエンティティ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct Column {
    /// カラム名
    #[builder(setter(into))]
    pub name: String,

    #[builder(default, setter(into))]
    pub comment: String,

    /// 意味的な型
    #[serde(rename = "type")]
    #[builder(default, setter(into))]
    pub column_type: ColumnType,

    /// 整数の表示幅（0 は未指定）
    #[builder(default)]
    pub size: u32,

    #[builder(default)]
    pub unsigned: bool,

    #[builder(default, setter(strip_option, into))]
    pub default: Option<Value>,

    #[builder(default, setter(strip_option))]
    pub enums: Option<Enums>,

    // string bounds
    #[builder(default)]
    pub min_length: u64,
    #[builder(default)]
    pub max_length: u64,

    // int bounds
    #[builder(default)]
    pub minimum: i64,
    #[builder(default)]
    pub maximum: u64,

    #[builder(default)]
    pub primary: bool,

    #[builder(default)]
    pub auto_increment: bool,

    /// ON UPDATE 句の式
    #[builder(default, setter(strip_option, into))]
    pub on_update: Option<String>,

    #[builder(default)]
    pub tags: Vec<Tag>,
}

impl Column {
    /// 型だけを指定してカラムを作成する
    pub fn new(name: impl Into<String>, column_type: impl Into<ColumnType>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            ..Self::default()
        }
    }

    /// このカラムが指定タグを持つかどうか
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// 空でない列挙定義（空の列挙は未設定と同じ扱い）
    pub fn effective_enums(&self) -> Option<&Enums> {
        self.enums.as_ref().filter(|enums| !enums.is_empty())
    }

    /// カラム定義句を生成する
    pub fn ddl(&self, dialect: Dialect) -> crate::Result<String> {
        Ok(renderer_for(dialect)?.column_ddl(self))
    }

    /// PRIMARY KEY 句を生成する（主キーでなければ空文字列）
    pub fn primary_ddl(&self, dialect: Dialect) -> crate::Result<String> {
        Ok(renderer_for(dialect)?.primary_ddl(self))
    }
}
