//! User and agent profile types
//!
//! Accounts carry a role (user, agent, admin) plus activity flags; agents
//! additionally carry approval state and commission bookkeeping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    Admin,
    User,
    Agent,
}

/// Account activity status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Active,
    Inactive,
    Suspended,
    Blocked,
}

/// Agent approval state, set by an admin review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
    Suspended,
}

/// Agent-specific profile data nested under a user record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentInfo {
    pub tin_id: String,
    pub approval_status: ApprovalStatus,
    pub commission_rate: f64,
    pub total_commission: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
}

/// User account record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub nid: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub is_deleted: bool,
    pub is_active: ActivityStatus,
    pub is_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_info: Option<AgentInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether this account is an agent pending admin approval.
    #[must_use]
    pub fn is_pending_agent(&self) -> bool {
        self.role == Role::Agent
            && self
                .agent_info
                .as_ref()
                .is_some_and(|info| info.approval_status == ApprovalStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_uses_screaming_snake_case_on_the_wire() {
        assert_eq!(serde_json::to_string(&Role::SuperAdmin).unwrap(), "\"SUPER_ADMIN\"");
        assert_eq!(serde_json::from_str::<Role>("\"AGENT\"").unwrap(), Role::Agent);
    }

    #[test]
    fn activity_status_is_lowercase_on_the_wire() {
        assert_eq!(serde_json::to_string(&ActivityStatus::Blocked).unwrap(), "\"blocked\"");
    }

    #[test]
    fn user_deserializes_mongo_id_and_nested_agent_info() {
        let json = r#"{
            "_id": "665f1c2e9b1d8a0012345678",
            "name": "Rahim",
            "email": "rahim@example.com",
            "phone": "+8801711111111",
            "nid": "1990123456789",
            "role": "AGENT",
            "isDeleted": false,
            "isActive": "active",
            "isVerified": true,
            "agentInfo": {
                "tinId": "TIN-4521",
                "approvalStatus": "pending",
                "commissionRate": 0.015,
                "totalCommission": 0.0
            },
            "createdAt": "2024-06-01T10:00:00Z",
            "updatedAt": "2024-06-01T10:00:00Z"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "665f1c2e9b1d8a0012345678");
        assert!(user.is_pending_agent());
    }
}
