use serde::{Deserialize, Serialize};

/// A bookable service from the company catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Appointment length in minutes.
    pub time: Option<i64>,
    /// Setup padding before the appointment, in minutes.
    pub buffer_before: Option<i64>,
    /// Cleanup padding after the appointment, in minutes.
    pub buffer_cleanup: Option<i64>,
    /// Price representation varies by account (number or formatted string).
    pub price: Option<serde_json::Value>,
    /// Ids of employees who provide this service.
    #[serde(default)]
    pub employees: Vec<i64>,
}
