//! User administration commands

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use urlencoding::encode;
use zapwallet_domain::types::user::{ActivityStatus, ApprovalStatus, User};
use zapwallet_domain::types::ChangeStatusRequest;
use zapwallet_domain::Result;

use crate::client::WalletClient;

/// Body for the agent approval endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveAgentRequest {
    pub approval_status: ApprovalStatus,
}

/// Partial profile update; unset fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

/// Commands for `/user` operations
pub struct UserCommands {
    client: Arc<WalletClient>,
}

impl UserCommands {
    /// Create a new commands instance.
    #[must_use]
    pub fn new(client: Arc<WalletClient>) -> Self {
        Self { client }
    }

    /// Fetch the calling user's profile.
    ///
    /// # Errors
    /// Returns error if the request fails
    #[instrument(skip(self))]
    pub async fn my_info(&self) -> Result<User> {
        self.client.get("/user/myInfo").await
    }

    /// Update the calling user's profile.
    ///
    /// # Errors
    /// Returns error if validation fails or the request fails
    #[instrument(skip(self, update))]
    pub async fn update_my_info(&self, update: &UpdateProfileRequest) -> Result<User> {
        self.client.patch("/user/myInfo", update).await
    }

    /// List all user accounts (admin).
    ///
    /// # Errors
    /// Returns error if the request fails
    #[instrument(skip(self))]
    pub async fn all_users(&self) -> Result<Vec<User>> {
        self.client.get("/user/all-users").await
    }

    /// List all agent accounts (admin).
    ///
    /// # Errors
    /// Returns error if the request fails
    #[instrument(skip(self))]
    pub async fn all_agents(&self) -> Result<Vec<User>> {
        self.client.get("/user/all-agents").await
    }

    /// List agents awaiting approval (admin).
    ///
    /// # Errors
    /// Returns error if the request fails
    #[instrument(skip(self))]
    pub async fn pending_agents(&self) -> Result<Vec<User>> {
        self.client.get("/user/pending-agents").await
    }

    /// Approve or reject an agent application (admin).
    ///
    /// # Errors
    /// Returns error if the agent is not found or the request fails
    #[instrument(skip(self), fields(agent_id = %agent_id, status = ?status))]
    pub async fn approve_agent(&self, agent_id: &str, status: ApprovalStatus) -> Result<User> {
        let path = format!("/user/agent-approve/{}", encode(agent_id));
        let request = ApproveAgentRequest { approval_status: status };

        let user: User = self.client.patch(&path, &request).await?;
        debug!(agent_id = %user.id, "agent approval updated");
        Ok(user)
    }

    /// Change an account's activity status (admin).
    ///
    /// # Errors
    /// Returns error if the user is not found or the request fails
    #[instrument(skip(self), fields(user_id = %user_id, status = ?status))]
    pub async fn change_status(&self, user_id: &str, status: ActivityStatus) -> Result<User> {
        let path = format!("/user/change-status/{}", encode(user_id));
        let request = ChangeStatusRequest { is_active: status };

        self.client.patch(&path, &request).await
    }
}
