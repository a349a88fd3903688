use super::table_model::TableModel;
use crate::model::{Sex, User, UserId};
use rusqlite::types::{FromSql, FromSqlError, ToSql};

impl ToSql for UserId {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        self.0.to_sql()
    }
}

impl FromSql for UserId {
    fn column_result(value: rusqlite::types::ValueRef<'_>) -> rusqlite::types::FromSqlResult<Self> {
        <i64 as FromSql>::column_result(value).map(UserId)
    }
}

impl ToSql for Sex {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        Ok(self.as_ref().into())
    }
}

impl FromSql for Sex {
    fn column_result(value: rusqlite::types::ValueRef<'_>) -> rusqlite::types::FromSqlResult<Self> {
        let value_str = <String as FromSql>::column_result(value)?;
        value_str
            .parse::<Sex>()
            .map_err(|err| FromSqlError::Other(err.into()))
    }
}

impl TableModel for User {
    fn table_name() -> &'static str {
        "users"
    }

    fn from_full_row(row: &rusqlite::Row) -> anyhow::Result<Self> {
        let result = Self {
            id: row.get("id")?,
            name: row.get("name")?,
            sex: row.get("sex")?,
        };
        Ok(result)
    }
}
