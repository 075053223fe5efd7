use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An appointment on the company schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// FullSlate booking code, e.g. `"ZnG9PYXF0r"`.
    pub id: String,
    pub at: Option<String>,
    /// Service booked; embedded record or bare id depending on endpoint.
    pub service: Option<Value>,
    pub employee: Option<Value>,
    pub client: Option<Value>,
}

/// Parameters for creating a booking.
///
/// `at`, `service`, `first_name` and `last_name` are required by the
/// booking endpoint; the optional contact fields are forwarded when set.
#[derive(Debug, Clone, Serialize)]
pub struct BookingRequest {
    pub at: DateTime<FixedOffset>,
    pub service: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BookingRequest {
    pub fn new(
        at: DateTime<FixedOffset>,
        service: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            at,
            service,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
            phone_number: None,
            notes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_at() -> DateTime<FixedOffset> {
        FixedOffset::west_opt(7 * 3600)
            .unwrap()
            .with_ymd_and_hms(2015, 9, 1, 17, 30, 0)
            .unwrap()
    }

    #[test]
    fn request_serializes_at_as_rfc3339() {
        let request = BookingRequest::new(sample_at(), 2, "Pat", "Jones");
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["at"], "2015-09-01T17:30:00-07:00");
        assert_eq!(body["service"], 2);
        assert_eq!(body["first_name"], "Pat");
        assert_eq!(body["last_name"], "Jones");
    }

    #[test]
    fn request_skips_unset_contact_fields() {
        let request = BookingRequest::new(sample_at(), 2, "Pat", "Jones");
        let body = serde_json::to_value(&request).unwrap();
        let keys: Vec<&String> = body.as_object().unwrap().keys().collect();

        assert_eq!(keys.len(), 4);
        assert!(body.get("email").is_none());
        assert!(body.get("notes").is_none());
    }

    #[test]
    fn request_forwards_contact_fields_when_set() {
        let mut request = BookingRequest::new(sample_at(), 2, "Pat", "Jones");
        request.email = Some("pat@example.com".to_string());
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["email"], "pat@example.com");
    }
}
