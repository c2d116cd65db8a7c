use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role, embedded in issued tokens and consulted by the route guard
/// and the row-level scoping rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Mechanic,
    Client,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Mechanic => "mechanic",
            Role::Client => "client",
        }
    }

    /// Landing page for this role; wrong-role denials redirect here.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::Mechanic => "/mechanic/dashboard",
            Role::Client => "/client/dashboard",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "mechanic" => Ok(Role::Mechanic),
            "client" => Ok(Role::Client),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// User account record as held by the credential store.
///
/// Deliberately not `Serialize`: the password hash must never reach a
/// response body. API-facing views live in `models::api::UserSummary`.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    /// Stored lowercase; lookups are case-insensitive exact match.
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub name: String,
    /// Set for `Role::Client` accounts; links to the owning Client row.
    pub client_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        email: &str,
        password_hash: String,
        role: Role,
        name: &str,
        client_id: Option<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.trim().to_ascii_lowercase(),
            password_hash,
            role,
            name: name.to_string(),
            client_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Admin, Role::Mechanic, Role::Client] {
            assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
        }
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Mechanic).unwrap(), "\"mechanic\"");
        let parsed: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(parsed, Role::Admin);
    }

    #[test]
    fn test_home_paths_are_role_prefixed() {
        assert!(Role::Admin.home_path().starts_with("/admin/"));
        assert!(Role::Mechanic.home_path().starts_with("/mechanic/"));
        assert!(Role::Client.home_path().starts_with("/client/"));
    }

    #[test]
    fn test_new_user_lowercases_email() {
        let user = User::new("Ana.Gomez@Example.COM ", "hash".into(), Role::Client, "Ana", None);
        assert_eq!(user.email, "ana.gomez@example.com");
    }
}
