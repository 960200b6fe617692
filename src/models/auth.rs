//! Register/login request and response models

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::validation::{Choice, NAME_MAX_LEN, Validator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Entrepreneur,
    Investor,
    Admin,
}

impl Choice for Role {
    const ALL: &'static [Self] = &[Role::Entrepreneur, Role::Investor, Role::Admin];

    fn as_str(self) -> &'static str {
        match self {
            Role::Entrepreneur => "entrepreneur",
            Role::Investor => "investor",
            Role::Admin => "admin",
        }
    }
}

/// Body of POST /api/auth/register. The role is assigned server-side.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<NewUser, ApiError> {
        let mut v = Validator::new();

        let name = v.required(self.name.as_deref(), "Name");
        v.max_len(name.as_deref(), "Name", NAME_MAX_LEN);
        let email = v.email(self.email.as_deref());
        let password = v.password(self.password.as_deref());

        v.finish(|| {
            Some(NewUser {
                name: name?,
                email: email?,
                password: password?,
            })
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Only presence is checked; a malformed email simply fails the lookup.
    pub fn validate(&self) -> Result<Credentials, ApiError> {
        let mut v = Validator::new();

        let email = v.required(self.email.as_deref(), "Email");
        let password = match self.password.as_deref() {
            Some(p) if !p.is_empty() => Some(p.to_string()),
            _ => v.required(None, "Password"),
        };

        v.finish(|| {
            Some(Credentials {
                email: email?.to_lowercase(),
                password: password?,
            })
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: i32,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub role: Role,
}
