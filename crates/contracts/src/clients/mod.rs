use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Engagement state of an agency client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClientStatus {
    Active,
    Pending,
    Inactive,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Active => "active",
            ClientStatus::Pending => "pending",
            ClientStatus::Inactive => "inactive",
        }
    }
}

/// Row of the client-management table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub industry: String,
    pub status: ClientStatus,
    /// ISO datetime of the last recorded activity.
    pub last_active: String,
    pub ad_spend: u32,
    pub campaigns: u32,
    pub roi: f64,
}

impl Client {
    /// Case-insensitive match on name or industry, used by the table search.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.industry.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(name: &str, industry: &str) -> Client {
        Client {
            id: Uuid::new_v4(),
            name: name.to_string(),
            industry: industry.to_string(),
            status: ClientStatus::Active,
            last_active: "2023-04-27T12:30:00".to_string(),
            ad_spend: 12_450,
            campaigns: 8,
            roi: 3.2,
        }
    }

    #[test]
    fn search_matches_name_and_industry() {
        let acme = client("Acme Corporation", "E-commerce");
        assert!(acme.matches_query("acme"));
        assert!(acme.matches_query("COMMERCE"));
        assert!(acme.matches_query("  "));
        assert!(!acme.matches_query("restaurant"));
    }
}
