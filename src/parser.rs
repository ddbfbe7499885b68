use crate::error::{MenuNutritionError, Result};
use crate::models::ScrapedMenu;

/// Scan raw scrape text into a structured menu.
///
/// Two line shapes matter: a line starting with "Scraping" opens a
/// (meal, date) section, taking the meal type from the second token and
/// the date from the last; a line starting with "Item:" appends the text
/// after the first ": " to the currently open section. Every other line
/// is ignored.
pub fn parse_menu(text: &str) -> Result<ScrapedMenu> {
    let mut menu = ScrapedMenu::new();
    let mut current: Option<(String, String)> = None;

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        let line_no = index + 1;

        if line.starts_with("Scraping") {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() < 2 {
                return Err(MenuNutritionError::MalformedMenu(format!(
                    "line {}: section header has no meal type: '{}'",
                    line_no, line
                )));
            }
            let meal_type = tokens[1];
            let date = tokens[tokens.len() - 1];
            menu.ensure_meal(date, meal_type);
            current = Some((date.to_string(), meal_type.to_string()));
        } else if line.starts_with("Item:") {
            let (date, meal_type) = current.as_ref().ok_or_else(|| {
                MenuNutritionError::MalformedMenu(format!(
                    "line {}: item appears before any 'Scraping' section header",
                    line_no
                ))
            })?;
            let item = match line.split_once(": ") {
                Some((_, rest)) => rest,
                None => {
                    return Err(MenuNutritionError::MalformedMenu(format!(
                        "line {}: item line has no ': ' separator: '{}'",
                        line_no, line
                    )));
                }
            };
            menu.push_item(date, meal_type, item.to_string());
        }
    }

    Ok(menu)
}
