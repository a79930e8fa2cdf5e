//! JSON Export

use serde::Serialize;

use crate::domain::{DomainError, DomainResult};

/// Pretty-printed JSON for any serializable value (record slices, summaries)
pub fn export_json<T: Serialize + ?Sized>(value: &T) -> DomainResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        log::error!("export failed: {}", e);
        DomainError::Internal(format!("export failed: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::pipeline_summary;
    use crate::seed;

    #[test]
    fn test_export_deals() {
        let deals = seed::deals();
        let json = export_json(deals.as_slice()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(5));
        assert_eq!(parsed[4]["stage"], "closed-won");
        assert_eq!(parsed[0]["closeDate"], "2024-03-15");
    }

    #[test]
    fn test_export_summary() {
        let json = export_json(&pipeline_summary(&seed::deals())).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["totalValue"], 370_000);
        assert_eq!(parsed["stages"][0]["stage"], "prospecting");
        assert!(parsed["winRate"].is_number());
    }

    #[test]
    fn test_export_empty() {
        let empty: &[crate::domain::Deal] = &[];
        assert_eq!(export_json(empty).unwrap(), "[]");
    }
}
