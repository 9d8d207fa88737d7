use crate::domain::entity::dialect::Dialect;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// DDL構文の一部を識別するトークン（例: AFTER）
///
/// 大文字に正規化して保持するため、比較は大文字小文字を区別しない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Token(String);

impl Token {
    pub fn new(token: impl AsRef<str>) -> Self {
        Self(token.as_ref().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token::new(value)
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Token::new(value)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

/// 方言固有のマイグレーション句
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[display(fmt = "{}", text)]
pub struct MigrateOption {
    dialect: Dialect,
    token: Token,
    text: String,
}

impl MigrateOption {
    pub const MYSQL_AFTER: &'static str = "AFTER";

    pub fn new(dialect: Dialect, token: impl Into<Token>, text: impl Into<String>) -> Self {
        Self {
            dialect,
            token: token.into(),
            text: text.into(),
        }
    }

    /// MySQL のカラム配置句 `AFTER `field``。フィールド名が空なら何も出力しない
    pub fn mysql_after(field: &str) -> Self {
        let text = if field.is_empty() {
            String::new()
        } else {
            format!("AFTER `{}`", field.replace('`', "``"))
        };
        Self::new(Dialect::Mysql, Self::MYSQL_AFTER, text)
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 方言とトークンが同じなら同じ種類の句
    pub fn is_same_kind(&self, other: &MigrateOption) -> bool {
        self.dialect == other.dialect && self.token == other.token
    }
}

/// `candidates` のうち `target` と同じ種類の最初の句を返す。なければ `target` をそのまま返す
///
/// 呼び出し側は何も出力しない既定の句を `target` に渡しておけば、上書きの有無を気にせず使える。
pub fn resolve_option<'a>(
    target: &'a MigrateOption,
    candidates: &'a [MigrateOption],
) -> &'a MigrateOption {
    candidates
        .iter()
        .find(|candidate| candidate.is_same_kind(target))
        .unwrap_or(target)
}
