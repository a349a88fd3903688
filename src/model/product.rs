use serde::{Deserialize, Serialize};
use std::fmt;

use super::CategoryId;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    /// Display name, also what the search box matches against
    pub name: String,
    pub category_id: CategoryId,
}
