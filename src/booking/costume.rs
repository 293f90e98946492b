//! Costume summary and price breakdown shown alongside the form

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The costume being rented
///
/// Listing data often carries more attributes than the form needs; those land
/// in `extra` and are written back unchanged when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostumeRentalInfo {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl CostumeRentalInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: None,
            description: None,
            category: None,
            size: None,
            extra: IndexMap::new(),
        }
    }

    /// Look up an attribute outside the known fields
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// Price breakdown computed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalCalculation {
    pub daily_rate: f64,
    pub number_of_days: u32,
    pub subtotal: f64,
    pub security_deposit: f64,
    pub tax: f64,
    pub total: f64,
}
