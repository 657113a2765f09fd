use crate::client::Client;
use crate::error::BasiqError;
use crate::models::{AuthLink, AuthLinkParams, User, UserConsentList, UserParams};
use log::info;
use reqwest::Method;

impl Client {
    pub async fn user(&self, user_id: &str) -> Result<User, BasiqError> {
        let url = self.endpoint(&["users", user_id])?;
        self.with_reauth(|| self.get_json(&url)).await
    }

    pub async fn create_user(&self, params: &UserParams) -> Result<User, BasiqError> {
        let url = self.endpoint(&["users"])?;
        let user: User = self
            .with_reauth(|| self.send_json(Method::POST, &url, Some(params)))
            .await?;
        info!("Created user {}", user.id.as_deref().unwrap_or("<unknown>"));
        Ok(user)
    }

    /// The API updates users with POST, not PUT/PATCH.
    pub async fn update_user(&self, user_id: &str, params: &UserParams) -> Result<User, BasiqError> {
        let url = self.endpoint(&["users", user_id])?;
        self.with_reauth(|| self.send_json(Method::POST, &url, Some(params)))
            .await
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<(), BasiqError> {
        let url = self.endpoint(&["users", user_id])?;
        self.with_reauth(|| self.delete(&url)).await?;
        info!("Deleted user {}", user_id);
        Ok(())
    }

    /// Fetch the active consent link for a user.
    pub async fn auth_link(&self, user_id: &str) -> Result<AuthLink, BasiqError> {
        let url = self.endpoint(&["users", user_id, "auth_link"])?;
        self.with_reauth(|| self.get_json(&url)).await
    }

    pub async fn create_auth_link(
        &self,
        user_id: &str,
        params: &AuthLinkParams,
    ) -> Result<AuthLink, BasiqError> {
        let url = self.endpoint(&["users", user_id, "auth_link"])?;
        self.with_reauth(|| self.send_json(Method::POST, &url, Some(params)))
            .await
    }

    pub async fn delete_auth_link(&self, user_id: &str) -> Result<(), BasiqError> {
        let url = self.endpoint(&["users", user_id, "auth_link"])?;
        self.with_reauth(|| self.delete(&url)).await
    }

    pub async fn user_consents(&self, user_id: &str) -> Result<UserConsentList, BasiqError> {
        let url = self.endpoint(&["users", user_id, "consents"])?;
        self.with_reauth(|| self.get_json(&url)).await
    }

    /// Revoke a consent. The API also purges the data collected under it.
    pub async fn delete_user_consent(
        &self,
        user_id: &str,
        consent_id: &str,
    ) -> Result<(), BasiqError> {
        let url = self.endpoint(&["users", user_id, "consents", consent_id])?;
        self.with_reauth(|| self.delete(&url)).await
    }
}
