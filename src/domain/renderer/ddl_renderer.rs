use crate::domain::entity::{Column, Dialect, Index};
use crate::domain::migrate::MigrateOption;
use crate::infrastructure::mysql::MYSQL_RENDERER;
use tracing::warn;

/// 方言ごとのDDL句生成 - テーブルの組み立てと方言固有の構文を切り離すためのインターフェース
#[cfg_attr(test, mockall::automock)]
pub trait DdlRenderer: Send + Sync {
    /// このレンダラーが対象とする方言
    fn dialect(&self) -> Dialect;

    /// カラム定義句（1行）
    fn column_ddl(&self, column: &Column) -> String;

    /// PRIMARY KEY 句。主キーでなければ空文字列
    fn primary_ddl(&self, column: &Column) -> String;

    /// インデックス句。カラムのないインデックスは空文字列
    fn index_ddl(&self, index: &Index) -> String;

    fn drop_table_ddl(&self, table: &str) -> String;

    /// CREATE TABLE 文の開始部分
    fn create_table_open(&self, table: &str) -> String;

    /// 閉じ括弧とテーブルオプション
    fn table_options_ddl(&self, comment: &str) -> String;

    fn add_column_ddl(&self, table: &str, column: &Column, options: &[MigrateOption]) -> String;

    fn modify_column_ddl(&self, table: &str, column: &Column, options: &[MigrateOption]) -> String;

    fn drop_column_ddl(&self, table: &str, column: &str) -> String;
}

/// 方言に対応する既定のレンダラーを取得する
///
/// 未実装の方言は設定ミスとして `UnsupportedDialect` を返す。
pub fn renderer_for(dialect: Dialect) -> crate::Result<&'static dyn DdlRenderer> {
    match dialect {
        Dialect::Mysql => Ok(&*MYSQL_RENDERER),
        other => {
            warn!(dialect = %other, "no DDL renderer for dialect");
            Err(crate::Error::UnsupportedDialect(other))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn mysql_has_a_renderer() {
        assert_eq!(renderer_for(Dialect::Mysql).unwrap().dialect(), Dialect::Mysql);
    }

    #[test_case(Dialect::Postgres ; "postgres")]
    #[test_case(Dialect::Sqlite ; "sqlite")]
    #[test_case(Dialect::Mssql ; "mssql")]
    fn other_dialects_are_unsupported(dialect: Dialect) {
        let err = renderer_for(dialect).err().unwrap();
        assert_eq!(err.to_string(), format!("Unsupported dialect: {}", dialect));
    }
}
