use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const ADMIN_ROLE: &str = "admin";
pub const USER_ROLE: &str = "user";

/// Roles created at startup when the collection lacks them.
pub const DEFAULT_ROLES: [&str; 2] = [USER_ROLE, ADMIN_ROLE];

/// Role names match exactly, case included.
pub fn is_admin_role(name: &str) -> bool {
    name == ADMIN_ROLE
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Role {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
}

impl Role {
    pub fn new(name: &str) -> Self {
        Role {
            id: ObjectId::new(),
            name: name.to_string(),
        }
    }
}
