/// A catalog model stored one-to-one as a row of its own table.
pub trait TableModel: Sized {
    fn table_name() -> &'static str;
    /// Builds the model from a `SELECT *` row, reading columns by name.
    fn from_full_row(row: &rusqlite::Row) -> anyhow::Result<Self>;
}
