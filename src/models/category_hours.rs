use super::category::Category;
use serde::{Deserialize, Serialize};

/// Accounted hours of one category. All three values are non-negative;
/// `worked + overbooked` is the total of filled hours.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryHours {
    pub id: i64,
    pub name: String,
    pub needed: f64,
    pub worked: f64,
    pub overbooked: f64,
}

impl CategoryHours {
    pub fn zero(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            needed: 0.0,
            worked: 0.0,
            overbooked: 0.0,
        }
    }
}

/// Both groupings computed over the same snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsReport {
    pub generated_at: String,
    pub ongoing_only: bool,
    pub shift_count: usize,
    pub by_angel_type: Vec<CategoryHours>,
    pub by_shift_type: Vec<CategoryHours>,
}
