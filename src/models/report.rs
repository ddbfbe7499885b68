use serde::{Deserialize, Serialize};

use crate::models::NutritionRecord;

/// One row of the final report: where an item appeared and its nutrition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "MealType")]
    pub meal_type: String,

    #[serde(rename = "ItemName")]
    pub item_name: String,

    #[serde(rename = "Nutrition")]
    pub nutrition: NutritionRecord,
}

impl ReportEntry {
    pub fn new(date: &str, meal_type: &str, item_name: &str, nutrition: NutritionRecord) -> Self {
        Self {
            date: date.to_string(),
            meal_type: meal_type.to_string(),
            item_name: item_name.to_string(),
            nutrition,
        }
    }
}
