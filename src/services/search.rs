//! Client-side inventory filtering

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Asset;

/// Inventory search and filter inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryQuery {
    /// Free-text term matched against every field
    #[serde(default)]
    pub search: String,
    /// Exact asset type, empty for any
    #[serde(default, rename = "type")]
    pub asset_type: String,
    /// Exact status label, empty for any
    #[serde(default)]
    pub status: String,
}

impl InventoryQuery {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.asset_type.is_empty() && self.status.is_empty()
    }
}

/// True when any field of `record`, stringified, contains `term`
/// case-insensitively. An empty term matches everything.
pub fn matches_term<T: Serialize>(record: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    match serde_json::to_value(record) {
        Ok(Value::Object(fields)) => fields
            .values()
            .filter_map(stringify)
            .any(|value| value.to_lowercase().contains(&needle)),
        Ok(other) => stringify(&other).is_some_and(|v| v.to_lowercase().contains(&needle)),
        Err(_) => false,
    }
}

/// Searchable text of a field; whole floats drop the fraction, `999.0` reads `999`
fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.is_f64() => n.as_f64().map(|f| f.to_string()),
        other => Some(other.to_string()),
    }
}

/// Assets matching the query, in collection order
pub fn filter_assets<'a>(assets: &'a [Asset], query: &InventoryQuery) -> Vec<&'a Asset> {
    assets
        .iter()
        .filter(|asset| query.asset_type.is_empty() || asset.asset_type == query.asset_type)
        .filter(|asset| query.status.is_empty() || asset.status.label() == query.status)
        .filter(|asset| matches_term(asset, &query.search))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssetStatus;

    fn asset(id: &str, brand: &str, asset_type: &str, status: AssetStatus, assignee: Option<&str>) -> Asset {
        Asset {
            id: id.to_string(),
            asset_type: asset_type.to_string(),
            brand: brand.to_string(),
            model: "X1".to_string(),
            serial: format!("SN-{}", id),
            purchase_date: "2023-06-15".to_string(),
            cost: 1250.5,
            warranty_status: "Active".to_string(),
            status,
            assignee: assignee.map(str::to_string),
            department: None,
            location: None,
        }
    }

    fn inventory() -> Vec<Asset> {
        vec![
            asset("IT-001", "Dell", "Laptop", AssetStatus::Available, None),
            asset("IT-002", "Lenovo", "Laptop", AssetStatus::Active, Some("Ama Mensah")),
            asset("HR-001", "HP", "Printer", AssetStatus::Retired, None),
        ]
    }

    fn ids(found: &[&Asset]) -> Vec<String> {
        found.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let assets = inventory();
        let found = filter_assets(&assets, &InventoryQuery::default());
        assert_eq!(ids(&found), vec!["IT-001", "IT-002", "HR-001"]);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let assets = inventory();
        let query = |term: &str| InventoryQuery {
            search: term.to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_assets(&assets, &query("dell"))), vec!["IT-001"]);
        assert_eq!(ids(&filter_assets(&assets, &query("MENSAH"))), vec!["IT-002"]);
        assert_eq!(ids(&filter_assets(&assets, &query("it-"))), vec!["IT-001", "IT-002"]);
        assert_eq!(ids(&filter_assets(&assets, &query("printer"))), vec!["HR-001"]);
        assert_eq!(ids(&filter_assets(&assets, &query("retired"))), vec!["HR-001"]);
    }

    #[test]
    fn test_search_matches_stringified_numbers() {
        let assets = inventory();
        let query = InventoryQuery {
            search: "1250.5".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_assets(&assets, &query).len(), 3);
    }

    #[test]
    fn test_whole_number_cost_matches_as_displayed() {
        let mut assets = inventory();
        assets[0].cost = 999.0;
        let query = |term: &str| InventoryQuery {
            search: term.to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_assets(&assets, &query("999"))), vec!["IT-001"]);
        assert!(filter_assets(&assets, &query("999.0")).is_empty());
    }

    #[test]
    fn test_filters_combine_with_search() {
        let assets = inventory();
        let query = InventoryQuery {
            search: "sn".to_string(),
            asset_type: "Laptop".to_string(),
            status: "Active".to_string(),
        };
        assert_eq!(ids(&filter_assets(&assets, &query)), vec!["IT-002"]);
    }

    #[test]
    fn test_null_fields_never_match() {
        let assets = inventory();
        let query = InventoryQuery {
            search: "null".to_string(),
            ..Default::default()
        };
        assert!(filter_assets(&assets, &query).is_empty());
    }
}
