use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::error::Result;

/// Timeout for a single existence check.
const CHECK_TIMEOUT_SECS: u64 = 10;

/// Answers whether the nutrition catalog already knows an item.
///
/// Implementations must be best-effort: ambiguity resolves to `false`
/// so the pipeline falls through to requesting a fresh estimate.
pub trait CatalogLookup {
    fn exists(&self, item: &str) -> bool;
}

/// HTTP client for the existence catalog.
pub struct CatalogClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl CatalogClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(CHECK_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url: config.catalog_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

impl CatalogLookup for CatalogClient {
    /// GET `<base>/check-exists?name=<lowercased item>`.
    ///
    /// Only an HTTP 200 with a decodable JSON body counts as an answer;
    /// transport failures, other statuses, and undecodable bodies are
    /// downgraded to "not found" and logged.
    fn exists(&self, item: &str) -> bool {
        let url = format!("{}/check-exists", self.base_url);
        let response = match self
            .client
            .get(&url)
            .query(&[("name", item.to_lowercase())])
            .send()
        {
            Ok(response) => response,
            Err(e) => {
                warn!(item, error = %e, "existence check failed, treating item as unknown");
                return false;
            }
        };

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!(item, %status, "existence check returned non-200, treating item as unknown");
            return false;
        }

        match response.json::<Value>() {
            Ok(payload) => {
                let known = json_truthy(&payload);
                debug!(item, known, payload = %payload, "existence check answered");
                known
            }
            Err(e) => {
                warn!(item, error = %e, "existence check body undecodable, treating item as unknown");
                false
            }
        }
    }
}

/// Interpret the catalog's JSON payload as an existence answer.
///
/// `false`, `null`, zero, empty strings and empty containers all mean
/// "not found"; everything else means "found".
pub fn json_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
