use std::fs;
use std::path::Path;

use crate::catalog::CatalogLookup;
use crate::error::Result;
use crate::estimator::NutritionEstimator;
use crate::models::{NutritionRecord, ReportEntry, ScrapedMenu};
use crate::parser::parse_menu;
use crate::report::save_report;

/// Walk every scraped item in scan order and resolve its nutrition.
///
/// Items the catalog already knows get the zero placeholder; everything
/// else is sent to the estimator. A single estimation failure aborts the
/// run, so a report is either complete or absent.
pub fn build_report<C, E>(
    menu: &ScrapedMenu,
    catalog: &C,
    estimator: &E,
) -> Result<Vec<ReportEntry>>
where
    C: CatalogLookup,
    E: NutritionEstimator,
{
    let mut entries = Vec::with_capacity(menu.total_items());

    for (date, meal_type, item) in menu.iter_items() {
        println!("Processing: {} on {} for {}", item, date, meal_type);

        let nutrition = if catalog.exists(item) {
            println!("Item '{}' already exists. Using placeholder values.", item);
            NutritionRecord::placeholder(item)
        } else {
            println!("Sending query for item: {}", item);
            estimator.estimate(item)?
        };

        entries.push(ReportEntry::new(date, meal_type, item, nutrition));
    }

    Ok(entries)
}

/// Full run: read the scrape file, build the report, write it out.
///
/// Returns the number of entries written. No output file is produced
/// when any stage fails.
pub fn run_to_file<P, Q, C, E>(input: P, output: Q, catalog: &C, estimator: &E) -> Result<usize>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    C: CatalogLookup,
    E: NutritionEstimator,
{
    let text = fs::read_to_string(input)?;
    let menu = parse_menu(&text)?;
    let entries = build_report(&menu, catalog, estimator)?;
    save_report(output, &entries)?;
    Ok(entries.len())
}
