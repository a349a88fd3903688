use std::collections::HashSet;
use std::hash::Hash;
use std::path::Path;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use crate::config::DataSource;
use crate::db::Db;
use crate::model::{Category, Product, User};

static BUNDLED_CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// The three static tables the catalog is built from. Loaded once at startup and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tables {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonTables {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Tables {
    /// Fails if any table contains the same ID twice.
    pub fn new(
        users: Vec<User>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> anyhow::Result<Tables> {
        ensure_unique_ids("users", users.iter().map(|u| u.id))?;
        ensure_unique_ids("categories", categories.iter().map(|c| c.id))?;
        ensure_unique_ids("products", products.iter().map(|p| p.id))?;

        Ok(Tables {
            users,
            categories,
            products,
        })
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<Tables> {
        let tables_json = serde_json::from_str::<JsonTables>(json)?;
        Self::new(
            tables_json.users,
            tables_json.categories,
            tables_json.products,
        )
    }

    /// The sample catalog compiled into the binary.
    pub fn bundled() -> anyhow::Result<Tables> {
        Self::from_json_str(BUNDLED_CATALOG_JSON).context("Parsing bundled catalog")
    }

    pub fn read_json(file_path: &str) -> anyhow::Result<Tables> {
        let json = std::fs::read_to_string(file_path)
            .with_context(|| format!("Reading catalog file {file_path:?}"))?;
        Self::from_json_str(&json).with_context(|| format!("Parsing JSON catalog file {file_path:?}"))
    }

    pub fn load(source: &DataSource) -> anyhow::Result<Tables> {
        let tables = match source {
            DataSource::Bundled => {
                log::info!("Loading bundled catalog");
                Self::bundled()?
            }
            DataSource::Json(file_path) => {
                log::info!("Loading catalog from JSON file {file_path}");
                Self::read_json(file_path)?
            }
            DataSource::Sqlite(file_path) => {
                log::info!("Loading catalog from SQLite DB {file_path}");
                Db::open(file_path)?
                    .load_tables()
                    .with_context(|| format!("Loading catalog tables from {file_path:?}"))?
            }
        };

        log::debug!(
            "Loaded {} users, {} categories, {} products",
            tables.users.len(),
            tables.categories.len(),
            tables.products.len()
        );
        Ok(tables)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

fn ensure_unique_ids<T>(table_name: &str, ids: impl Iterator<Item = T>) -> anyhow::Result<()>
where
    T: Copy + Eq + Hash + std::fmt::Display,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            bail!("Duplicate ID {id} in {table_name} table");
        }
    }
    Ok(())
}

impl DataSource {
    /// Picks the data source kind from the file extension.
    pub fn from_path(path: &Path) -> anyhow::Result<DataSource> {
        let file_path = path
            .to_str()
            .with_context(|| format!("Data file path {path:?} is not valid UTF-8"))?
            .to_owned();
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .with_context(|| format!("Data file path {path:?} does not have a valid extension"))?;

        match ext.to_ascii_lowercase().as_str() {
            "json" => Ok(DataSource::Json(file_path)),
            "sqlite" | "sqlite3" | "db" => Ok(DataSource::Sqlite(file_path)),
            _ => bail!("Could not determine data source kind for {path:?} with unknown extension {ext}"),
        }
    }
}
