//! Dashboard Configuration
//!
//! Optional JSON block in the host page:
//!
//! ```html
//! <script type="application/json" id="crm-config">
//!   { "currency_symbol": "€", "strict_forms": false }
//! </script>
//! ```
//!
//! Every field has a default, so an absent or partial block is fine.

use crm_core::FormPolicy;
use serde::Deserialize;

/// Element id the configuration is read from
pub const CONFIG_ELEMENT_ID: &str = "crm-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Prefix for monetary amounts
    pub currency_symbol: String,
    /// `log` level name (error, warn, info, debug, trace, off)
    pub log_level: String,
    /// Reject bad form input instead of coercing it to zero
    pub strict_forms: bool,
    /// Start with the demo contacts, deals and tasks
    pub seed_demo_data: bool,
    /// Rows in the dashboard's upcoming tasks list
    pub upcoming_task_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            log_level: "info".to_string(),
            strict_forms: true,
            seed_demo_data: true,
            upcoming_task_limit: 4,
        }
    }
}

impl DashboardConfig {
    pub fn form_policy(&self) -> FormPolicy {
        if self.strict_forms {
            FormPolicy::Strict
        } else {
            FormPolicy::Lenient
        }
    }
}

/// Parse a configuration block. Returns the error text on malformed JSON.
pub fn parse_config(text: &str) -> Result<DashboardConfig, String> {
    if text.trim().is_empty() {
        return Ok(DashboardConfig::default());
    }
    serde_json::from_str(text).map_err(|e| e.to_string())
}

/// Read the configuration from the page, falling back to defaults.
///
/// Runs before the logger is installed, so problems are reported together
/// with the config for `main` to log afterwards.
pub fn load_config() -> (DashboardConfig, Option<String>) {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match text {
        None => (DashboardConfig::default(), None),
        Some(text) => match parse_config(&text) {
            Ok(config) => (config, None),
            Err(e) => (DashboardConfig::default(), Some(format!("ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse_config("").unwrap(), DashboardConfig::default());
        assert_eq!(parse_config("{}").unwrap(), DashboardConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = parse_config(r#"{ "currency_symbol": "€", "strict_forms": false }"#).unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.form_policy(), FormPolicy::Lenient);
        assert!(config.seed_demo_data);
        assert_eq!(config.upcoming_task_limit, 4);
    }

    #[test]
    fn test_malformed_config() {
        assert!(parse_config("{ currency").is_err());
        assert!(parse_config(r#"{ "upcoming_task_limit": -1 }"#).is_err());
    }
}
