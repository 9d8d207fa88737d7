use crate::domain::entity::dialect::Dialect;
use crate::domain::migrate::option::MigrateOption;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{AsRefStr, Display, EnumString};

/// マイグレーションの意図
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Scene {
    Create,
    Modify,
    Append,
    Delete,
}

/// 1つのDDL文とその分類
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Migrate {
    pub dialect: Dialect,
    pub scene: Scene,
    #[serde(default)]
    pub options: Vec<MigrateOption>,
    pub ddl: String,
}

impl Migrate {
    pub fn new(
        dialect: Dialect,
        scene: Scene,
        options: Vec<MigrateOption>,
        ddl: impl Into<String>,
    ) -> Self {
        Self {
            dialect,
            scene,
            options,
            ddl: ddl.into(),
        }
    }
}

/// 順序付きのマイグレーション集合
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Migrates(Vec<Migrate>);

impl Migrates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, migrate: Migrate) {
        self.0.push(migrate);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Migrate> {
        self.0.iter()
    }

    /// 方言とシーンが一致するものを元の順序のまま返す
    pub fn filter_by(&self, dialect: Dialect, scene: Scene) -> Migrates {
        self.0
            .iter()
            .filter(|m| m.dialect == dialect && m.scene == scene)
            .cloned()
            .collect()
    }

    /// DDL文を順に取り出す
    pub fn render_all(&self) -> Vec<&str> {
        self.0.iter().map(|m| m.ddl.as_str()).collect()
    }

    /// 各DDL文を改行で区切ったスクリプト
    pub fn script(&self) -> String {
        self.0.iter().fold(String::new(), |mut script, m| {
            script.push_str(&m.ddl);
            script.push('\n');
            script
        })
    }
}

impl fmt::Display for Migrates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.script())
    }
}

impl FromIterator<Migrate> for Migrates {
    fn from_iter<I: IntoIterator<Item = Migrate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Migrates {
    type Item = Migrate;
    type IntoIter = std::vec::IntoIter<Migrate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Vec<Migrate>> for Migrates {
    fn from(migrates: Vec<Migrate>) -> Self {
        Self(migrates)
    }
}
