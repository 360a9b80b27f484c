use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;
use crate::de::nullable;
use crate::pii::Masked;

/// A registered account. Customers and delivery partners share this record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: Masked<String>,
    pub full_name: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub is_delivery_partner: bool,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Registration payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: Masked<String>,
    pub full_name: String,
    pub phone_number: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_delivery_partner: Option<bool>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Partial profile update.
///
/// Identity, credential and creation time have no field here, so unknown keys
/// such as `password` or `createdAt` in a request body are simply ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub email: Option<Option<String>>,
    #[serde(default)]
    pub is_delivery_partner: Option<bool>,
    #[serde(default, deserialize_with = "nullable")]
    pub profile_image: Option<Option<String>>,
}

impl UserUpdate {
    /// Write every supplied field onto `user`, leaving the rest untouched.
    pub fn apply_to(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(full_name) = self.full_name {
            user.full_name = full_name;
        }
        if let Some(phone_number) = self.phone_number {
            user.phone_number = phone_number;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(flag) = self.is_delivery_partner {
            user.is_delivery_partner = flag;
        }
        if let Some(image) = self.profile_image {
            user.profile_image = image;
        }
    }
}
