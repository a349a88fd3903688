use super::table_model::TableModel;
use crate::model::{Product, ProductId};
use rusqlite::types::{FromSql, ToSql};

impl ToSql for ProductId {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        self.0.to_sql()
    }
}

impl FromSql for ProductId {
    fn column_result(value: rusqlite::types::ValueRef<'_>) -> rusqlite::types::FromSqlResult<Self> {
        <i64 as FromSql>::column_result(value).map(ProductId)
    }
}

impl TableModel for Product {
    fn table_name() -> &'static str {
        "products"
    }

    fn from_full_row(row: &rusqlite::Row) -> anyhow::Result<Self> {
        let result = Self {
            id: row.get("id")?,
            name: row.get("name")?,
            category_id: row.get("category_id")?,
        };
        Ok(result)
    }
}
