//! Read and write entities of a query plan

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An object a query reads from or writes to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Entity {
    Database {
        name: String,
    },
    Table {
        database: String,
        name: String,
    },
    Partition {
        database: String,
        table: String,
        name: String,
    },
    DfsDir {
        path: String,
    },
    LocalDir {
        path: String,
    },
    Function {
        database: Option<String>,
        name: String,
    },
}

impl Entity {
    /// `db@table` for tables, `db@table@partition` for partitions
    pub fn complete_name(&self) -> String {
        match self {
            Self::Database { name } => name.clone(),
            Self::Table { database, name } => format!("{}@{}", database, name),
            Self::Partition {
                database,
                table,
                name,
            } => format!("{}@{}@{}", database, table, name),
            Self::DfsDir { path } | Self::LocalDir { path } => path.clone(),
            Self::Function {
                database: Some(db),
                name,
            } => format!("{}.{}", db, name),
            Self::Function { database: None, name } => name.clone(),
        }
    }
}

fn names_of<'a>(
    entities: impl IntoIterator<Item = &'a Entity>,
    keep: impl Fn(&Entity) -> bool,
) -> Vec<String> {
    entities
        .into_iter()
        .filter(|e| keep(e))
        .map(Entity::complete_name)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn tables<'a>(entities: impl IntoIterator<Item = &'a Entity>) -> Vec<String> {
    names_of(entities, |e| matches!(e, Entity::Table { .. }))
}

pub fn partitions<'a>(entities: impl IntoIterator<Item = &'a Entity>) -> Vec<String> {
    names_of(entities, |e| matches!(e, Entity::Partition { .. }))
}

pub fn databases<'a>(entities: impl IntoIterator<Item = &'a Entity>) -> Vec<String> {
    names_of(entities, |e| matches!(e, Entity::Database { .. }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Entity> {
        vec![
            Entity::Database {
                name: "sales".into(),
            },
            Entity::Table {
                database: "sales".into(),
                name: "orders".into(),
            },
            Entity::Table {
                database: "sales".into(),
                name: "orders".into(),
            },
            Entity::Partition {
                database: "sales".into(),
                table: "orders".into(),
                name: "ds=2023-01-01".into(),
            },
            Entity::DfsDir {
                path: "hdfs:///tmp/out".into(),
            },
        ]
    }

    #[test]
    fn test_filters_by_kind_and_dedups() {
        let entities = sample();
        assert_eq!(tables(&entities), vec!["sales@orders"]);
        assert_eq!(partitions(&entities), vec!["sales@orders@ds=2023-01-01"]);
        assert_eq!(databases(&entities), vec!["sales"]);
    }

    #[test]
    fn test_empty_set_yields_empty_list() {
        assert!(tables(&[]).is_empty());
    }

    #[test]
    fn test_entity_json_shape() {
        let entity: Entity =
            serde_json::from_str(r#"{"type":"table","database":"db","name":"t"}"#).unwrap();
        assert_eq!(entity.complete_name(), "db@t");
    }
}
