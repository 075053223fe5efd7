use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A company client record. This is a private resource; fetching it
/// requires an API token.
///
/// The `emails`, `phone_numbers`, `addresses` and `links` collections are
/// populated only when requested through [`ClientsQuery::include`]; their
/// shape varies by account, so entries are passed through as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub notes: Option<String>,
    pub active: Option<bool>,
    pub right_to_contact: Option<bool>,
    #[serde(default)]
    pub emails: Vec<Value>,
    #[serde(default)]
    pub phone_numbers: Vec<Value>,
    #[serde(default)]
    pub addresses: Vec<Value>,
    #[serde(default)]
    pub links: Vec<Value>,
}

/// Options for the clients resource.
#[derive(Debug, Clone, Default)]
pub struct ClientsQuery {
    /// Opt-in collections to include in returned records.
    pub include: Vec<ClientInclude>,
}

impl ClientsQuery {
    /// Request all four opt-in collections.
    pub fn include_all(mut self) -> Self {
        self.include = ClientInclude::ALL.to_vec();
        self
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        if self.include.is_empty() {
            return Vec::new();
        }
        let joined = self
            .include
            .iter()
            .map(ClientInclude::to_string)
            .collect::<Vec<_>>()
            .join(",");
        vec![("include", joined)]
    }
}

/// Client fields that must be requested explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientInclude {
    Emails,
    PhoneNumbers,
    Addresses,
    Links,
}

impl ClientInclude {
    /// All four opt-in collections.
    pub const ALL: [ClientInclude; 4] = [
        ClientInclude::Emails,
        ClientInclude::PhoneNumbers,
        ClientInclude::Addresses,
        ClientInclude::Links,
    ];
}

impl std::fmt::Display for ClientInclude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientInclude::Emails => write!(f, "emails"),
            ClientInclude::PhoneNumbers => write!(f, "phone_numbers"),
            ClientInclude::Addresses => write!(f, "addresses"),
            ClientInclude::Links => write!(f, "links"),
        }
    }
}
