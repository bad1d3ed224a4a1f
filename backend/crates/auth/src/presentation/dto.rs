//! API DTOs (Data Transfer Objects)
//!
//! Wire shapes for the auth endpoints. Success bodies carry a `message`
//! field alongside any payload.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Register response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: Uuid,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

// ============================================================================
// Password Change
// ============================================================================

/// Password change request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeRequest {
    pub username: String,
    pub old_password: String,
    pub new_password: String,
}

// ============================================================================
// Shared
// ============================================================================

/// Message-only success response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Account name response
#[derive(Debug, Clone, Serialize)]
pub struct AdminNameResponse {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_request_wire_keys() {
        let req: RegisterRequest = serde_json::from_value(json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "pw1"
        }))
        .unwrap();
        assert_eq!(req.username, "alice");
    }

    #[test]
    fn test_register_response_wire_keys() {
        let user_id = Uuid::new_v4();
        let value = serde_json::to_value(RegisterResponse {
            message: "User registered successfully".into(),
            user_id,
        })
        .unwrap();

        assert_eq!(value["message"], "User registered successfully");
        assert_eq!(value["userId"], user_id.to_string());
    }

    #[test]
    fn test_password_change_request_wire_keys() {
        let req: PasswordChangeRequest = serde_json::from_value(json!({
            "username": "alice",
            "oldPassword": "old",
            "newPassword": "new"
        }))
        .unwrap();
        assert_eq!(req.old_password, "old");
        assert_eq!(req.new_password, "new");
    }

    #[test]
    fn test_admin_name_response_wire_keys() {
        let value = serde_json::to_value(AdminNameResponse {
            name: "alice".into(),
        })
        .unwrap();
        assert_eq!(value, json!({ "name": "alice" }));
    }
}
