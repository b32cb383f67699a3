//! Session gate and the injected authentication context.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use crate::error::AdminError;

/// Role stored on the user record by the login flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Store administrator.
    Admin,
    /// Regular customer account.
    User,
    /// Any other role string.
    #[serde(other)]
    Other,
}

impl Role {
    fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Other => "other",
        }
    }
}

/// User record persisted by the external login flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Backend user id.
    #[serde(alias = "_id")]
    pub id: String,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Login email.
    #[serde(default)]
    pub email: String,
    /// Account role.
    pub role: Role,
}

impl SessionUser {
    /// `"First Last"`, falling back to the email.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }
}

/// Read-only access to whatever session storage the platform has.
pub trait SessionProvider {
    /// The persisted user record, if any.
    fn user(&self) -> Option<SessionUser>;
    /// The bearer token, if any.
    fn token(&self) -> Option<String>;
}

impl<P: SessionProvider + ?Sized> SessionProvider for &P {
    fn user(&self) -> Option<SessionUser> {
        (**self).user()
    }

    fn token(&self) -> Option<String> {
        (**self).token()
    }
}

/// Authentication context handed to every admin operation.
#[derive(Debug, Clone)]
pub struct AuthContext<S> {
    provider: S,
    user: SessionUser,
}

impl<S: SessionProvider> AuthContext<S> {
    /// Runs the session gate: a user record must exist and carry the admin
    /// role.
    pub fn establish(provider: S) -> Result<Self, AdminError> {
        let Some(user) = provider.user() else {
            tracing::warn!("no user record in session");
            return Err(AdminError::AuthenticationMissing);
        };
        if user.role != Role::Admin {
            tracing::warn!(user_id = %user.id, role = user.role.as_str(), "non-admin session");
            return Err(AdminError::NotAuthorized {
                role: user.role.as_str().to_string(),
            });
        }
        Ok(Self {
            provider,
            user,
        })
    }

    /// The admin the context was established for.
    pub fn user(&self) -> &SessionUser {
        &self.user
    }

    /// Current bearer token. Read fresh on every call.
    pub fn bearer_token(&self) -> Result<String, AdminError> {
        self.provider
            .token()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or(AdminError::AuthenticationMissing)
    }

    /// Underlying provider.
    pub fn provider(&self) -> &S {
        &self.provider
    }
}

/// In-memory session, for tests and demos.
#[derive(Debug, Default)]
pub struct MemorySession {
    user: RefCell<Option<SessionUser>>,
    token: RefCell<Option<String>>,
}

impl MemorySession {
    /// Session holding `user` and `token`.
    pub fn new(user: Option<SessionUser>, token: Option<&str>) -> Self {
        Self {
            user: RefCell::new(user),
            token: RefCell::new(token.map(str::to_string)),
        }
    }

    /// Session for an admin named `Ada Admin` holding `token`.
    pub fn admin(token: &str) -> Self {
        Self::new(
            Some(SessionUser {
                id: "admin-1".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Admin".to_string(),
                email: "ada@example.com".to_string(),
                role: Role::Admin,
            }),
            Some(token),
        )
    }

    /// Drops the token, as a logout in another tab would.
    pub fn clear_token(&self) {
        self.token.borrow_mut().take();
    }
}

impl SessionProvider for MemorySession {
    fn user(&self) -> Option<SessionUser> {
        self.user.borrow().clone()
    }

    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: Role) -> SessionUser {
        SessionUser {
            id: "u1".into(),
            first_name: "Sam".into(),
            last_name: String::new(),
            email: "sam@example.com".into(),
            role,
        }
    }

    #[test]
    fn gate_rejects_missing_user() {
        let session = MemorySession::new(None, Some("tok"));
        let err = AuthContext::establish(&session).expect_err("gate should fail");
        assert_eq!(err, AdminError::AuthenticationMissing);
    }

    #[test]
    fn gate_rejects_non_admin() {
        let session = MemorySession::new(Some(user_with_role(Role::User)), Some("tok"));
        let err = AuthContext::establish(&session).expect_err("gate should fail");
        assert!(matches!(err, AdminError::NotAuthorized { ref role } if role == "user"));
        assert!(err.redirects_to_login());
    }

    #[test]
    fn gate_accepts_admin_without_reading_token() {
        let session = MemorySession::new(Some(user_with_role(Role::Admin)), None);
        let ctx = AuthContext::establish(&session).expect("admin passes gate");
        assert_eq!(ctx.user().display_name(), "Sam");
        assert_eq!(ctx.bearer_token(), Err(AdminError::AuthenticationMissing));
    }

    #[test]
    fn bearer_token_is_read_on_every_call() {
        let session = MemorySession::admin("tok-1");
        let ctx = AuthContext::establish(&session).expect("admin passes gate");
        assert_eq!(ctx.bearer_token().as_deref(), Ok("tok-1"));
        session.clear_token();
        assert_eq!(ctx.bearer_token(), Err(AdminError::AuthenticationMissing));
    }

    #[test]
    fn user_record_parses_login_flow_shape() {
        let user: SessionUser = serde_json::from_str(
            r#"{"_id":"42","firstName":"Lee","lastName":"Park","email":"lee@x.io","role":"admin"}"#,
        )
        .expect("parse user");
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.display_name(), "Lee Park");

        let odd: SessionUser =
            serde_json::from_str(r#"{"id":"7","role":"pharmacist"}"#).expect("parse user");
        assert_eq!(odd.role, Role::Other);
        assert_eq!(odd.display_name(), "");
    }
}
