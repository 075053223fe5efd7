use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Search window accepted by the openings endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    Week,
    Month,
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Window::Week => write!(f, "week"),
            Window::Month => write!(f, "month"),
        }
    }
}

/// Optional filters for the openings search.
#[derive(Debug, Clone, Default)]
pub struct OpeningsQuery {
    /// Only openings before this time.
    pub before: Option<DateTime<FixedOffset>>,
    /// Only openings after this time.
    pub after: Option<DateTime<FixedOffset>>,
    pub window: Option<Window>,
}

impl OpeningsQuery {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(before) = &self.before {
            pairs.push(("before", before.to_rfc3339()));
        }
        if let Some(after) = &self.after {
            pairs.push(("after", after.to_rfc3339()));
        }
        if let Some(window) = self.window {
            pairs.push(("window", window.to_string()));
        }
        pairs
    }
}

/// Result of an openings search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningsResponse {
    #[serde(default)]
    pub success: bool,
    /// Company time zone the opening times are expressed in.
    pub tz: Option<String>,
    #[serde(default)]
    pub matches: Vec<Opening>,
}

/// A bookable time slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opening {
    pub at: Option<String>,
    /// Employees free at this time.
    #[serde(default)]
    pub employees: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn window_renders_lowercase() {
        assert_eq!(Window::Week.to_string(), "week");
        assert_eq!(Window::Month.to_string(), "month");
    }

    #[test]
    fn default_query_sends_nothing() {
        assert!(OpeningsQuery::default().query_pairs().is_empty());
    }

    #[test]
    fn query_pairs_format_rfc3339() {
        let offset = FixedOffset::west_opt(7 * 3600).unwrap();
        let query = OpeningsQuery {
            before: Some(offset.with_ymd_and_hms(2015, 9, 8, 9, 0, 0).unwrap()),
            after: Some(offset.with_ymd_and_hms(2015, 9, 1, 17, 30, 0).unwrap()),
            window: Some(Window::Week),
        };

        let pairs = query.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("before", "2015-09-08T09:00:00-07:00".to_string()),
                ("after", "2015-09-01T17:30:00-07:00".to_string()),
                ("window", "week".to_string()),
            ]
        );
    }

    #[test]
    fn response_tolerates_minimal_bodies() {
        let parsed: OpeningsResponse = serde_json::from_str(r#"{"success": true}"#)
            .expect("minimal openings body should parse");
        assert!(parsed.success);
        assert!(parsed.matches.is_empty());
        assert!(parsed.tz.is_none());
    }
}
