use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role carried by the cached user object.
///
/// Only `admin` unlocks the back office; anything the backend sends that is
/// not `admin` is treated as a partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    Partner,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrador",
            Role::Partner => "Parceiro",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Partner => write!(f, "partner"),
        }
    }
}

/// An account as returned by login, profile and the admin user listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default = "default_active", deserialize_with = "null_as_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

fn null_as_active<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_else(default_active))
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Search box and role picker of the admin user list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserFilter {
    pub term: String,
    /// `None` shows every role.
    pub role: Option<Role>,
}

impl UserFilter {
    /// Case-insensitive match of the term against name, email or company.
    pub fn matches(&self, user: &User) -> bool {
        if self.role.is_some_and(|role| role != user.role) {
            return false;
        }
        let term = self.term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        [Some(user.name.as_str()), Some(user.email.as_str()), user.company.as_deref()]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&term))
    }

    pub fn apply<'u>(&self, users: &'u [User]) -> Vec<&'u User> {
        users.iter().filter(|user| self.matches(user)).collect()
    }
}

/// The populated user reference embedded in orders and messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserSummary {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_roles_are_partners() {
        let user: User =
            serde_json::from_str(r#"{"_id":"u1","name":"Ana","role":"auditor"}"#).unwrap();
        assert_eq!(user.role, Role::Partner);
        assert!(!user.is_admin());
    }

    #[test]
    fn admin_role_and_defaults() {
        let user: User = serde_json::from_str(
            r#"{"_id":"u2","name":"Bia","email":"bia@ebenezer.com","role":"admin"}"#,
        )
        .unwrap();
        assert!(user.is_admin());
        assert!(user.is_active);
        assert_eq!(user.company, None);
    }

    #[test]
    fn plain_id_is_accepted() {
        let user: User = serde_json::from_str(r#"{"id":"u3"}"#).unwrap();
        assert_eq!(user.id, "u3");
    }

    #[test]
    fn filter_searches_name_email_and_company() {
        let users = vec![
            User { name: "Ana Souza".into(), email: "ana@x.com".into(), ..User::default() },
            User {
                name: "Bruno".into(),
                email: "b@y.com".into(),
                company: Some("Metais LTDA".into()),
                role: Role::Admin,
                ..User::default()
            },
        ];
        let by_company = UserFilter { term: "metais".into(), role: None };
        assert_eq!(by_company.apply(&users).len(), 1);
        assert_eq!(by_company.apply(&users)[0].name, "Bruno");

        let by_email = UserFilter { term: " ANA@ ".into(), role: None };
        assert_eq!(by_email.apply(&users)[0].name, "Ana Souza");

        let partners = UserFilter { term: String::new(), role: Some(Role::Partner) };
        assert_eq!(partners.apply(&users).len(), 1);
        assert_eq!(UserFilter::default().apply(&users).len(), 2);
    }

    #[test]
    fn null_fields_read_as_empty() {
        let users: Vec<User> = serde_json::from_str(
            r#"[{"_id":"u1","name":null,"email":"a@x.com","role":null,"company":null},
                {"_id":"u2","name":"Bia","email":null,"isActive":null}]"#,
        )
        .unwrap();
        assert_eq!(users[0].name, "");
        assert_eq!(users[0].role, Role::default());
        assert_eq!(users[1].email, "");
        assert!(users[1].is_active);
    }
}
