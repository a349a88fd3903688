use serde::{Deserialize, Serialize};
use std::fmt;

use super::UserId;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct CategoryId(pub i64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    /// Usually a single emoji.
    pub icon: String,
    pub owner_id: UserId,
}

impl Category {
    pub fn label(&self) -> String {
        format!("{} - {}", self.icon, self.title)
    }
}
