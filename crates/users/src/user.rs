use serde::{Deserialize, Serialize};

use eproc_core::{Entity, UserId};

/// Role a user holds across the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::User => "user",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl core::str::FromStr for UserRole {
    type Err = eproc_core::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "manager" => Ok(UserRole::Manager),
            "user" => Ok(UserRole::User),
            other => Err(eproc_core::DomainError::validation(format!(
                "role must be one of: admin, manager, user (got '{other}')"
            ))),
        }
    }
}

impl core::fmt::Display for UserRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directory entry: someone who can request, approve, or generate things.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub department: String,
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Resolve a user id to a display name; unknown ids render a placeholder.
pub fn name_of(users: &[User], id: UserId) -> String {
    users
        .iter()
        .find(|u| u.id == id)
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "Unknown User".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> Vec<User> {
        vec![
            User {
                id: UserId::new(1),
                name: "Asha Raman".to_string(),
                email: "asha.raman@example.com".to_string(),
                role: UserRole::Admin,
                department: "Procurement".to_string(),
            },
            User {
                id: UserId::new(2),
                name: "Dev Mehta".to_string(),
                email: "dev.mehta@example.com".to_string(),
                role: UserRole::Manager,
                department: "Finance".to_string(),
            },
        ]
    }

    #[test]
    fn name_of_resolves_known_ids() {
        assert_eq!(name_of(&directory(), UserId::new(2)), "Dev Mehta");
    }

    #[test]
    fn name_of_falls_back_for_unknown_ids() {
        assert_eq!(name_of(&directory(), UserId::new(99)), "Unknown User");
    }

    #[test]
    fn role_round_trips_through_lowercase_strings() {
        for (s, role) in [
            ("admin", UserRole::Admin),
            ("manager", UserRole::Manager),
            ("user", UserRole::User),
        ] {
            assert_eq!(s.parse::<UserRole>().unwrap(), role);
            assert_eq!(role.as_str(), s);
        }
        assert!("root".parse::<UserRole>().is_err());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let user = &directory()[0];
        let json = serde_json::to_value(user).unwrap();
        assert_eq!(json["role"], "admin");
        assert_eq!(json["department"], "Procurement");
    }
}
