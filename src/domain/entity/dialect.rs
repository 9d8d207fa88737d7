use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// DDLの出力対象となるデータベース方言
///
/// 文字列からの変換は大文字小文字を区別しない（"MySQL" と "mysql" は同じ方言）。
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(try_from = "String", into = "String")]
pub enum Dialect {
    #[default]
    Mysql,
    Postgres,
    Sqlite,
    Mssql,
}

impl TryFrom<String> for Dialect {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Dialect> for String {
    fn from(dialect: Dialect) -> Self {
        dialect.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("MySQL".parse::<Dialect>().unwrap(), Dialect::Mysql);
        assert_eq!("POSTGRES".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert!("oracle".parse::<Dialect>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Dialect::Mysql).unwrap(), "\"mysql\"");
        let parsed: Dialect = serde_json::from_str("\"Sqlite\"").unwrap();
        assert_eq!(parsed, Dialect::Sqlite);
    }
}
