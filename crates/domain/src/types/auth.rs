//! Authentication request payloads
//!
//! Session credentials are cookie-based: a successful login sets the access
//! and refresh cookies, so none of these types carry tokens.

use serde::{Deserialize, Serialize};

use super::user::{ActivityStatus, Role};

/// Credentials for `/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub phone: String,
    pub pin: String,
}

/// New-account payload for `/user/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub pin: String,
    pub nid: String,
    pub role: Role,
}

/// OTP delivery request for `/otp/send`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpRequest {
    pub name: String,
    pub email: String,
}

/// OTP check for `/otp/verify`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

/// Admin request to change another account's activity status
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStatusRequest {
    pub is_active: ActivityStatus,
}
