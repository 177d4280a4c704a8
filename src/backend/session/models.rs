//! Session record and login payloads.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display name used when none was supplied at registration.
pub const DEFAULT_DISPLAY_NAME: &str = "Utilisateur";
/// Organization used when none was supplied at registration.
pub const DEFAULT_ORGANIZATION: &str = "ECOSPECHE";

/// The only role a session can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    MaritimeProfessional,
}

/// A logged-in user.
///
/// Fields are private so a session can't be edited after creation; logout is
/// the only way to get rid of one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    id: String,
    email: String,
    display_name: String,
    organization: String,
    role: Role,
}

impl Session {
    /// Builds a fresh session from a validated request, filling in placeholders.
    pub(crate) fn from_request(request: &LoginRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: request.email.clone(),
            display_name: non_blank(request.display_name.as_deref())
                .unwrap_or(DEFAULT_DISPLAY_NAME)
                .to_string(),
            organization: non_blank(request.organization.as_deref())
                .unwrap_or(DEFAULT_ORGANIZATION)
                .to_string(),
            role: Role::MaritimeProfessional,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Rejects records that deserialized but can't be a real session.
    pub(crate) fn is_well_formed(&self) -> bool {
        !self.id.is_empty() && !self.email.is_empty()
    }
}

/// Credentials submitted by the sign-in or registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
    pub organization: Option<String>,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    pub fn with_profile(
        mut self,
        display_name: impl Into<String>,
        organization: impl Into<String>,
    ) -> Self {
        self.display_name = Some(display_name.into());
        self.organization = Some(organization.into());
        self
    }

    /// Names of the required fields that are empty. Whitespace counts as a value.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.email.is_empty() {
            missing.push("email");
        }
        if self.password.is_empty() {
            missing.push("password");
        }
        missing
    }

    /// Names of the profile fields that are absent or empty.
    pub fn missing_profile(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.display_name.as_deref().is_none_or(str::is_empty) {
            missing.push("display_name");
        }
        if self.organization.as_deref().is_none_or(str::is_empty) {
            missing.push("organization");
        }
        missing
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
