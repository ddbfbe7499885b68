use menu_nutrition_rs::error::MenuNutritionError;
use menu_nutrition_rs::parser::parse_menu;

fn two_meal_scrape() -> &'static str {
    "Scraping Breakfast for 2024-05-01\n\
     Item: Oatmeal\n\
     Scraping Lunch for 2024-05-01\n\
     Item: Cajun Tempeh\n"
}

#[test]
fn test_two_sections_one_date() {
    let menu = parse_menu(two_meal_scrape()).unwrap();

    assert_eq!(menu.len(), 1, "both sections share one date");
    let day = &menu.days()[0];
    assert_eq!(day.date, "2024-05-01");
    assert_eq!(day.meals.len(), 2);
    assert_eq!(day.meals[0].meal_type, "Breakfast");
    assert_eq!(day.meals[0].items, vec!["Oatmeal"]);
    assert_eq!(day.meals[1].meal_type, "Lunch");
    assert_eq!(day.meals[1].items, vec!["Cajun Tempeh"]);
}

#[test]
fn test_scan_order_survives_revisited_dates() {
    let text = "Scraping Breakfast for 2024-05-01\n\
                Item: Oatmeal\n\
                Scraping Breakfast for 2024-05-02\n\
                Item: Eggs\n\
                Scraping Dinner for 2024-05-01\n\
                Item: Pasta\n\
                Item: Salad\n";
    let menu = parse_menu(text).unwrap();

    let triples: Vec<_> = menu.iter_items().collect();
    assert_eq!(
        triples,
        vec![
            ("2024-05-01", "Breakfast", "Oatmeal"),
            ("2024-05-01", "Dinner", "Pasta"),
            ("2024-05-01", "Dinner", "Salad"),
            ("2024-05-02", "Breakfast", "Eggs"),
        ],
        "dates group by first appearance, items keep file order"
    );
}

#[test]
fn test_noise_lines_are_ignored() {
    let text = "starting scraper run\n\
                \n\
                Scraping Lunch menu for 2024-05-03\n\
                found 2 items\n\
                Item: Grilled Cheese\n\
                Item: Tomato Soup\n\
                done in 1.2s\n";
    let menu = parse_menu(text).unwrap();

    assert_eq!(menu.total_items(), 2);
    let day = &menu.days()[0];
    assert_eq!(day.date, "2024-05-03");
    assert_eq!(day.meals[0].meal_type, "Lunch");
    assert_eq!(day.meals[0].items, vec!["Grilled Cheese", "Tomato Soup"]);
}

#[test]
fn test_repeated_section_header_extends_items() {
    let text = "Scraping Lunch for 2024-05-01\n\
                Item: Tacos\n\
                Scraping Lunch for 2024-05-01\n\
                Item: Rice\n";
    let menu = parse_menu(text).unwrap();

    assert_eq!(
        menu.days()[0].meals[0].items,
        vec!["Tacos", "Rice"],
        "a repeated header must not reset the item list"
    );
}

#[test]
fn test_item_before_any_section_is_rejected() {
    let text = "Item: Orphaned Sandwich\nScraping Lunch for 2024-05-01\n";
    let err = parse_menu(text).unwrap_err();

    match err {
        MenuNutritionError::MalformedMenu(msg) => {
            assert!(msg.contains("line 1"), "message was: {}", msg);
        }
        other => panic!("expected MalformedMenu, got: {:?}", other),
    }
}

#[test]
fn test_empty_input_yields_empty_menu() {
    let menu = parse_menu("").unwrap();
    assert!(menu.is_empty());
    assert_eq!(menu.total_items(), 0);
}
