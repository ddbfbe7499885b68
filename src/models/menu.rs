/// One meal's item list within a scraped day.
#[derive(Debug, Clone)]
pub struct MealMenu {
    pub meal_type: String,
    pub items: Vec<String>,
}

/// One scraped date and its meals, in first-seen order.
#[derive(Debug, Clone)]
pub struct MenuDay {
    pub date: String,
    pub meals: Vec<MealMenu>,
}

/// The full scraped menu: date -> meal -> items.
///
/// Nested vectors rather than maps so that iteration replays the order
/// sections appeared in the input file: dates and meals in first-seen
/// order, items in append order. The report writer depends on this.
#[derive(Debug, Clone, Default)]
pub struct ScrapedMenu {
    days: Vec<MenuDay>,
}

impl ScrapedMenu {
    pub fn new() -> Self {
        Self { days: Vec::new() }
    }

    /// Ensure an item list exists for (date, meal).
    ///
    /// An already-started list is left untouched, so a repeated section
    /// header never discards earlier items.
    pub fn ensure_meal(&mut self, date: &str, meal_type: &str) {
        self.meal_entry(date, meal_type);
    }

    /// Append an item under (date, meal), creating the levels if missing.
    pub fn push_item(&mut self, date: &str, meal_type: &str, item: String) {
        self.meal_entry(date, meal_type).items.push(item);
    }

    /// All scraped days in first-seen order.
    pub fn days(&self) -> &[MenuDay] {
        &self.days
    }

    /// Iterate every (date, meal, item) triple in scan order.
    pub fn iter_items(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.days.iter().flat_map(|day| {
            day.meals.iter().flat_map(move |meal| {
                meal.items
                    .iter()
                    .map(move |item| (day.date.as_str(), meal.meal_type.as_str(), item.as_str()))
            })
        })
    }

    /// Count of scraped dates.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Check if nothing was scraped.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total item count across all dates and meals.
    pub fn total_items(&self) -> usize {
        self.days
            .iter()
            .flat_map(|day| day.meals.iter())
            .map(|meal| meal.items.len())
            .sum()
    }

    fn day_entry(&mut self, date: &str) -> &mut MenuDay {
        let idx = match self.days.iter().position(|d| d.date == date) {
            Some(idx) => idx,
            None => {
                self.days.push(MenuDay {
                    date: date.to_string(),
                    meals: Vec::new(),
                });
                self.days.len() - 1
            }
        };
        &mut self.days[idx]
    }

    fn meal_entry(&mut self, date: &str, meal_type: &str) -> &mut MealMenu {
        let day = self.day_entry(date);
        let idx = match day.meals.iter().position(|m| m.meal_type == meal_type) {
            Some(idx) => idx,
            None => {
                day.meals.push(MealMenu {
                    meal_type: meal_type.to_string(),
                    items: Vec::new(),
                });
                day.meals.len() - 1
            }
        };
        &mut day.meals[idx]
    }
}
