//! Credential-bearing payloads. Parsed here, consumed by the auth handlers,
//! and never echoed back in any response.

use serde_json::Value;

use crate::error::ApiError;
use crate::serializers::fields::Extractor;

#[derive(Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

pub fn parse_login(value: &Value) -> Result<LoginRequest, ApiError> {
    let mut ex = Extractor::new(value)?;

    let username = ex.string("username");
    let username = ex.require("username", username);
    let password = ex.string("password");
    let password = ex.require("password", password);

    ex.finish()?;

    Ok(LoginRequest {
        username: username.unwrap_or_default(),
        password: password.unwrap_or_default(),
    })
}

#[derive(Debug)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

pub fn parse_change_password(value: &Value) -> Result<ChangePasswordRequest, ApiError> {
    let mut ex = Extractor::new(value)?;

    let old_password = ex.string("old_password");
    let old_password = ex.require("old_password", old_password);
    let new_password = ex.string("new_password");
    let new_password = ex.require("new_password", new_password);

    ex.finish()?;

    Ok(ChangePasswordRequest {
        old_password: old_password.unwrap_or_default(),
        new_password: new_password.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_requires_both_fields() {
        let err = parse_login(&json!({"username": "admin"})).unwrap_err();
        match err {
            ApiError::ValidationError { field_errors, .. } => {
                assert!(field_errors.contains_key("password"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn change_password_requires_both_fields() {
        let err = parse_change_password(&json!({})).unwrap_err();
        match err {
            ApiError::ValidationError { field_errors, .. } => {
                assert!(field_errors.contains_key("old_password"));
                assert!(field_errors.contains_key("new_password"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
