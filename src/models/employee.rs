use serde::{Deserialize, Serialize};

/// A staff member who can be booked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Ids of the services this employee offers.
    #[serde(default)]
    pub services: Vec<i64>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
