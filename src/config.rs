use std::env;

use crate::error::{MenuNutritionError, Result};

/// Environment variable holding the estimation service credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable holding the existence catalog base URL.
pub const BASE_URL_VAR: &str = "BASE_URL";

/// Process-wide configuration, read once at startup and passed by
/// reference to the clients that need it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub catalog_base_url: String,
}

impl AppConfig {
    /// Build the configuration from the environment.
    ///
    /// Missing or empty variables are rejected up front so a bad
    /// deployment fails before any network call is attempted.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: require_var(API_KEY_VAR)?,
            catalog_base_url: require_var(BASE_URL_VAR)?,
        })
    }
}

fn require_var(name: &'static str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(MenuNutritionError::MissingEnv(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_var_present() {
        // SAFETY: test-local variable name, no other test reads it.
        unsafe { env::set_var("MENU_NUTRITION_TEST_PRESENT", "value") };
        let got = require_var("MENU_NUTRITION_TEST_PRESENT").unwrap();
        assert_eq!(got, "value");
    }

    #[test]
    fn test_require_var_missing() {
        let err = require_var("MENU_NUTRITION_TEST_ABSENT").unwrap_err();
        assert!(matches!(err, MenuNutritionError::MissingEnv(_)));
    }

    #[test]
    fn test_require_var_rejects_blank() {
        // SAFETY: test-local variable name, no other test reads it.
        unsafe { env::set_var("MENU_NUTRITION_TEST_BLANK", "   ") };
        let err = require_var("MENU_NUTRITION_TEST_BLANK").unwrap_err();
        assert!(matches!(
            err,
            MenuNutritionError::MissingEnv("MENU_NUTRITION_TEST_BLANK")
        ));
    }
}
