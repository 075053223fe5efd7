use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An entry on the company schedule. This is a private resource; fetching
/// it requires an API token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    /// Identifier shared by every occurrence of a recurring event.
    pub global_id: Option<String>,
    pub global_sequence: Option<i64>,
    #[serde(default)]
    pub services: Vec<i64>,
    pub created_at: Option<String>,
    pub at: Option<String>,
    pub to: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    /// Employee the event belongs to; bare id or embedded record
    /// depending on the event type.
    pub employee: Option<Value>,
    #[serde(default)]
    pub attendees: Vec<Value>,
    /// Set when the query asked for occurrences.
    pub occurrence_at: Option<String>,
}

/// Filters for the events resource.
#[derive(Debug, Clone, Default)]
pub struct EventsQuery {
    /// Expand recurring events into individual occurrences.
    pub occurrences: bool,
    pub start: Option<NaiveDate>,
    pub stop: Option<NaiveDate>,
    pub changed_since: Option<NaiveDate>,
}

impl EventsQuery {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.occurrences {
            pairs.push(("occurrences", "true".to_string()));
        }
        if let Some(start) = self.start {
            pairs.push(("start", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(stop) = self.stop {
            pairs.push(("stop", stop.format("%Y-%m-%d").to_string()));
        }
        if let Some(changed_since) = self.changed_since {
            pairs.push(("changed_since", changed_since.format("%Y-%m-%d").to_string()));
        }
        pairs
    }
}
