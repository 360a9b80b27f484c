use parcel_core::{CoreError, CoreResult, Storage};
use parcel_shared::{NewUser, User, UserId, UserUpdate};
use std::sync::Arc;
use tracing::{info, warn};

/// Registration, login and profile maintenance.
pub struct AccountService {
    store: Arc<dyn Storage>,
}

impl AccountService {
    pub fn new(store: Arc<dyn Storage>) -> Self {
        Self { store }
    }

    pub async fn register(&self, new_user: NewUser) -> CoreResult<User> {
        if new_user.username.trim().is_empty() {
            return Err(CoreError::validation("username", "is required"));
        }
        if new_user.password.is_blank() {
            return Err(CoreError::validation("password", "is required"));
        }
        if new_user.full_name.trim().is_empty() {
            return Err(CoreError::validation("fullName", "is required"));
        }
        if new_user.phone_number.trim().is_empty() {
            return Err(CoreError::validation("phoneNumber", "is required"));
        }

        let user = self.store.create_user(new_user).await?;
        info!(
            "Registered user {} ({}), partner: {}",
            user.id, user.username, user.is_delivery_partner
        );
        Ok(user)
    }

    /// Unknown handle and wrong credential fail the same way.
    pub async fn login(&self, username: &str, password: &str) -> CoreResult<User> {
        match self.store.get_user_by_username(username).await? {
            Some(user) if user.password.matches(password) => Ok(user),
            _ => {
                warn!("Failed login for {}", username);
                Err(CoreError::AuthFailure("Invalid credentials".to_string()))
            }
        }
    }

    pub async fn get(&self, id: UserId) -> CoreResult<User> {
        self.store
            .get_user(id)
            .await?
            .ok_or_else(|| CoreError::not_found("User", id))
    }

    pub async fn update(&self, id: UserId, update: UserUpdate) -> CoreResult<User> {
        if let Some(username) = &update.username {
            if username.trim().is_empty() {
                return Err(CoreError::validation("username", "must not be blank"));
            }
        }
        self.store
            .update_user(id, update)
            .await?
            .ok_or_else(|| CoreError::not_found("User", id))
    }
}
