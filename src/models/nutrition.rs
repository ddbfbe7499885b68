use serde::{Deserialize, Serialize};

/// Nutrition facts for a single menu item.
///
/// Macro fields keep their unit suffix ("25g") and calories stays a
/// numeral string ("480"); the output schema is string-typed end to end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionRecord {
    #[serde(rename = "Item")]
    pub item: String,

    pub protein: String,

    pub fat: String,

    pub carbs: String,

    pub calories: String,

    #[serde(rename = "isVegan")]
    pub is_vegan: bool,

    #[serde(rename = "isVegetarian")]
    pub is_vegetarian: bool,

    #[serde(rename = "isGlutenFree")]
    pub is_gluten_free: bool,
}

impl NutritionRecord {
    /// Zero-valued record for an item the catalog already knows.
    ///
    /// Existing items have authoritative data elsewhere, so the report
    /// carries zeros and false flags for them rather than an estimate.
    pub fn placeholder(item: &str) -> Self {
        Self {
            item: item.to_string(),
            protein: "0g".to_string(),
            fat: "0g".to_string(),
            carbs: "0g".to_string(),
            calories: "0".to_string(),
            is_vegan: false,
            is_vegetarian: false,
            is_gluten_free: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_values() {
        let record = NutritionRecord::placeholder("Pizza");
        assert_eq!(record.item, "Pizza");
        assert_eq!(record.protein, "0g");
        assert_eq!(record.fat, "0g");
        assert_eq!(record.carbs, "0g");
        assert_eq!(record.calories, "0");
        assert!(!record.is_vegan);
        assert!(!record.is_vegetarian);
        assert!(!record.is_gluten_free);
    }

    #[test]
    fn test_serialized_field_names() {
        let record = NutritionRecord::placeholder("Pizza");
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "Item",
            "protein",
            "fat",
            "carbs",
            "calories",
            "isVegan",
            "isVegetarian",
            "isGlutenFree",
        ] {
            assert!(object.contains_key(key), "missing key {}", key);
        }
        assert_eq!(object.len(), 8);
    }

    #[test]
    fn test_deserialize_estimate_shape() {
        let json = r#"{
            "Item": "Chicken Bacon Ranch Wrap",
            "protein": "25g",
            "fat": "20g",
            "carbs": "45g",
            "calories": "480",
            "isVegan": false,
            "isVegetarian": false,
            "isGlutenFree": false
        }"#;

        let record: NutritionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.item, "Chicken Bacon Ranch Wrap");
        assert_eq!(record.calories, "480");
        assert!(!record.is_vegan);
    }
}
