pub mod catalog;
pub mod config;
pub mod error;
pub mod estimator;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod report;

pub use error::{MenuNutritionError, Result};
pub use models::{NutritionRecord, ReportEntry, ScrapedMenu};
