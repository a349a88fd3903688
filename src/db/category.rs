use super::table_model::TableModel;
use crate::model::{Category, CategoryId};
use rusqlite::types::{FromSql, ToSql};

impl ToSql for CategoryId {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        self.0.to_sql()
    }
}

impl FromSql for CategoryId {
    fn column_result(value: rusqlite::types::ValueRef<'_>) -> rusqlite::types::FromSqlResult<Self> {
        <i64 as FromSql>::column_result(value).map(CategoryId)
    }
}

impl TableModel for Category {
    fn table_name() -> &'static str {
        "categories"
    }

    fn from_full_row(row: &rusqlite::Row) -> anyhow::Result<Self> {
        let result = Self {
            id: row.get("id")?,
            title: row.get("title")?,
            icon: row.get("icon")?,
            owner_id: row.get("owner_id")?,
        };
        Ok(result)
    }
}
