use serde::{Deserialize, Serialize};

/// A retail item sold by the company. This is a private resource; fetching
/// it requires an API token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub product_type: Option<String>,
    /// Price representation varies by account (number or formatted string).
    pub price: Option<serde_json::Value>,
    /// Ids of services this product applies to.
    #[serde(default)]
    pub services: Vec<i64>,
}
