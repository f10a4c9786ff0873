/// User domain type
use serde::{Deserialize, Serialize};

/// A directory entry as returned by the remote collection.
///
/// Unknown fields in remote payloads (addresses, phone numbers, and so on)
/// are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier assigned by the remote service.
    ///
    /// Create responses from the mock service may omit it, in which case
    /// it deserializes to 0.
    #[serde(default)]
    pub id: i64,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,
}

impl User {
    /// Build a user record.
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_remote_payload_with_extra_fields() {
        let body = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "street": "Kulas Light", "city": "Gwenborough" },
            "phone": "1-770-736-8031 x56442"
        }"#;

        let user: User = serde_json::from_str(body).expect("valid user payload");
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.email, "Sincere@april.biz");
    }

    #[test]
    fn missing_id_defaults_to_zero() {
        let body = r#"{ "name": "Ana", "email": "ana@x.com" }"#;

        let user: User = serde_json::from_str(body).expect("valid user payload");
        assert_eq!(user.id, 0);
        assert_eq!(user.name, "Ana");
    }
}
