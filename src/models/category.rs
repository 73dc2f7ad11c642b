use serde::{Deserialize, Serialize};

pub type AngelTypeId = i64;

/// Grouping key for the statistics: an angel type or a shift type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
