use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: UserInfo,
    #[serde(default)]
    pub permissions: PermissionsPayload,
}

/// Body of `GET /api/auth/me`: the identity behind a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user: UserInfo,
    #[serde(default)]
    pub permissions: PermissionsPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// One protected resource and the operations granted on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRecord {
    pub key: String,
    #[serde(default)]
    pub actions: BTreeSet<String>,
}

impl PermissionRecord {
    pub fn new<K, I, A>(key: K, actions: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            key: key.into(),
            actions: actions.into_iter().map(Into::into).collect(),
        }
    }
}

/// Permissions as the API ships them.
///
/// Older endpoints send `{"add-User": ["add"]}`, newer ones send a list of
/// `{key, actions}` records. Both decode into the same records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PermissionsPayload {
    Map(BTreeMap<String, Vec<String>>),
    List(Vec<PermissionRecord>),
}

impl Default for PermissionsPayload {
    fn default() -> Self {
        PermissionsPayload::List(Vec::new())
    }
}

impl PermissionsPayload {
    pub fn into_records(self) -> Vec<PermissionRecord> {
        match self {
            PermissionsPayload::Map(map) => map
                .into_iter()
                .map(|(key, actions)| PermissionRecord::new(key, actions))
                .collect(),
            PermissionsPayload::List(records) => records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_payload() {
        let payload: PermissionsPayload =
            serde_json::from_str(r#"{"add-User": ["add", "list"], "all-offers": []}"#).unwrap();
        let records = payload.into_records();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], PermissionRecord::new("add-User", ["add", "list"]));
        assert!(records[1].actions.is_empty());
    }

    #[test]
    fn test_list_payload() {
        let payload: PermissionsPayload = serde_json::from_str(
            r#"[{"key": "all-zones", "actions": ["menu", "list"]}, {"key": "all-cities"}]"#,
        )
        .unwrap();
        let records = payload.into_records();

        assert_eq!(records[0].key, "all-zones");
        assert!(records[0].actions.contains("menu"));
        assert_eq!(records[1].key, "all-cities");
        assert!(records[1].actions.is_empty());
    }

    #[test]
    fn test_session_without_permissions() {
        let session: SessionResponse =
            serde_json::from_str(r#"{"user": {"id": "7", "email": "ops@example.com"}}"#).unwrap();

        assert_eq!(session.user.display_name(), "ops@example.com");
        assert!(session.permissions.into_records().is_empty());
    }

    #[test]
    fn test_login_response() {
        let response: LoginResponse = serde_json::from_str(
            r#"{
                "access_token": "t0k3n",
                "user": {"id": "1", "name": "Admin", "email": "admin@example.com"},
                "permissions": {"all-users": ["menu"]}
            }"#,
        )
        .unwrap();

        assert_eq!(response.access_token, "t0k3n");
        assert!(response.refresh_token.is_none());
        assert_eq!(response.user.display_name(), "Admin");
        assert_eq!(response.permissions.into_records().len(), 1);
    }
}
