mod category;
mod product;
mod table_model;
mod user;

use self::table_model::TableModel;
use crate::model::{Category, Product, User};
use crate::tables::Tables;
use anyhow::Context;

/// Read-only access to a SQLite database holding the three catalog tables.
pub struct Db {
    pub conn: rusqlite::Connection,
}

impl Db {
    pub fn open(file_path: &str) -> anyhow::Result<Self> {
        let conn = rusqlite::Connection::open_with_flags(
            file_path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY,
        )
        .with_context(|| format!("Failed to open SQLite DB: {file_path}"))?;
        Ok(Self { conn })
    }

    pub fn from_connection(conn: rusqlite::Connection) -> Self {
        Self { conn }
    }

    pub fn get_all<T: TableModel>(&self) -> anyhow::Result<Vec<T>> {
        // rowid order is the insertion order, which is the display order of the catalog
        let sql = format!("SELECT * FROM {} ORDER BY rowid", T::table_name());
        let mut stmt = self
            .conn
            .prepare(&sql)
            .with_context(|| format!("Querying all {}", T::table_name()))?;

        let rows = stmt
            .query_and_then((), |row| {
                T::from_full_row(row).with_context(|| {
                    format!("Error deserializing {} row: {row:?}", T::table_name())
                })
            })
            .with_context(|| format!("Querying all {}", T::table_name()))?;

        let mut result = Vec::new();
        for (row_idx, row) in rows.into_iter().enumerate() {
            result.push(row.with_context(|| {
                format!("Error reading {} row {row_idx}", T::table_name())
            })?);
        }
        Ok(result)
    }

    pub fn get_all_users(&self) -> anyhow::Result<Vec<User>> {
        self.get_all::<User>()
    }

    pub fn get_all_categories(&self) -> anyhow::Result<Vec<Category>> {
        self.get_all::<Category>()
    }

    pub fn get_all_products(&self) -> anyhow::Result<Vec<Product>> {
        self.get_all::<Product>()
    }

    pub fn load_tables(&self) -> anyhow::Result<Tables> {
        Tables::new(
            self.get_all_users()?,
            self.get_all_categories()?,
            self.get_all_products()?,
        )
    }

    #[cfg(test)]
    pub(crate) fn create_schema(&self) -> anyhow::Result<()> {
        self.conn
            .execute_batch(
                "CREATE TABLE users (id INTEGER NOT NULL UNIQUE, name TEXT NOT NULL, sex TEXT NOT NULL);
                 CREATE TABLE categories (id INTEGER NOT NULL UNIQUE, title TEXT NOT NULL, icon TEXT NOT NULL, owner_id INTEGER NOT NULL);
                 CREATE TABLE products (id INTEGER NOT NULL UNIQUE, name TEXT NOT NULL, category_id INTEGER NOT NULL);",
            )
            .context("Creating catalog schema")
    }

    #[cfg(test)]
    pub(crate) fn insert_tables(&self, tables: &Tables) -> anyhow::Result<()> {
        for user in tables.users() {
            self.conn.execute(
                "INSERT INTO users (id, name, sex) VALUES (:id, :name, :sex)",
                rusqlite::named_params! { ":id": user.id, ":name": user.name, ":sex": user.sex },
            )?;
        }
        for category in tables.categories() {
            self.conn.execute(
                "INSERT INTO categories (id, title, icon, owner_id) VALUES (:id, :title, :icon, :owner_id)",
                rusqlite::named_params! {
                    ":id": category.id,
                    ":title": category.title,
                    ":icon": category.icon,
                    ":owner_id": category.owner_id,
                },
            )?;
        }
        for product in tables.products() {
            self.conn.execute(
                "INSERT INTO products (id, name, category_id) VALUES (:id, :name, :category_id)",
                rusqlite::named_params! {
                    ":id": product.id,
                    ":name": product.name,
                    ":category_id": product.category_id,
                },
            )?;
        }
        Ok(())
    }
}
