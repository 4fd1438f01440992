use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Stored account. `password` always holds a bcrypt hash, never plaintext.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub roles: Vec<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(nombre: Option<String>, email: &str, password_hash: String, roles: Vec<ObjectId>) -> Self {
        let now = Utc::now();
        User {
            id: ObjectId::new(),
            nombre,
            email: email.to_string(),
            password: password_hash,
            roles,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}
