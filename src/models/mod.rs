mod menu;
mod nutrition;
mod report;

pub use menu::{MealMenu, MenuDay, ScrapedMenu};
pub use nutrition::NutritionRecord;
pub use report::ReportEntry;
