//! Closed error taxonomy for admin operations.

use std::fmt;

use thiserror::Error;

/// Remote operation an error originated from. Selects the generic fallback
/// message when the backend does not supply one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `GET /api/admin/inventory`
    Fetch,
    /// `POST /api/admin/inventory`
    Create,
    /// `PUT /api/admin/inventory/{id}`
    Update,
    /// `DELETE /api/admin/inventory/{id}`
    Delete,
}

impl Operation {
    /// Message shown when the backend gives no better explanation.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::Fetch => "Failed to fetch inventory",
            Operation::Create => "Failed to create item",
            Operation::Update => "Failed to update item",
            Operation::Delete => "Failed to delete item",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Fetch => "fetch",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Draft field checked by the required-field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    /// Item name.
    Name,
    /// Item description.
    Description,
    /// Category selection.
    Category,
    /// Price text.
    Price,
    /// Stock text.
    Stock,
    /// Brand name.
    Brand,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DraftField::Name => "name",
            DraftField::Description => "description",
            DraftField::Category => "category",
            DraftField::Price => "price",
            DraftField::Stock => "stock",
            DraftField::Brand => "brand",
        };
        f.write_str(name)
    }
}

/// Client-side rule violation. Raised before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required scalar field is blank.
    #[error("Please fill in all required fields")]
    MissingField(DraftField),
    /// Create mode without any selected image file.
    #[error("Please upload at least one image")]
    MissingImages,
    /// Price is not a number greater than zero.
    #[error("Price must be greater than 0")]
    InvalidPrice,
    /// Stock is below zero.
    #[error("Stock cannot be negative")]
    InvalidStock,
    /// Stock is not a number, or has a fractional part.
    #[error("Stock must be a whole number")]
    StockNotWhole,
    /// Stock does not fit the backend's counter.
    #[error("Stock is too large")]
    StockTooLarge,
}

/// Failure of an admin operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdminError {
    /// No user record or bearer token in the session.
    #[error("Please log in to continue")]
    AuthenticationMissing,
    /// The backend answered 401.
    #[error("Session expired, please log in again")]
    AuthenticationRejected,
    /// The signed-in user is not an administrator.
    #[error("Access denied: administrator privileges required")]
    NotAuthorized {
        /// Role found in the session record.
        role: String,
    },
    /// The draft broke a client-side rule.
    #[error(transparent)]
    ValidationFailed(#[from] ValidationError),
    /// The backend answered 400 to a create or update.
    #[error("{message}")]
    BackendRejected {
        /// Backend-supplied text, or the generic invalid-data message.
        message: String,
    },
    /// Any other non-success response or transport error.
    #[error("{message}")]
    OperationFailed {
        /// Operation that failed.
        operation: Operation,
        /// Backend-supplied text, or the operation's fallback message.
        message: String,
    },
    /// A submit is already waiting for the backend.
    #[error("A save is already in progress")]
    SubmitInFlight,
}

impl AdminError {
    /// Message used when a 400 carries no explanation.
    pub const INVALID_DATA: &'static str = "Invalid item data";

    /// Whether the caller must navigate to the login screen.
    pub fn redirects_to_login(&self) -> bool {
        matches!(
            self,
            AdminError::AuthenticationMissing
                | AdminError::AuthenticationRejected
                | AdminError::NotAuthorized { .. }
        )
    }

    /// Text for the transient user-facing notification.
    pub fn notice(&self) -> String {
        self.to_string()
    }

    pub(crate) fn failed(operation: Operation, message: Option<String>) -> Self {
        let message = message
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| operation.fallback_message().to_string());
        AdminError::OperationFailed {
            operation,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_variants_redirect() {
        assert!(AdminError::AuthenticationMissing.redirects_to_login());
        assert!(AdminError::AuthenticationRejected.redirects_to_login());
        assert!(AdminError::NotAuthorized {
            role: "user".into()
        }
        .redirects_to_login());
        assert!(!AdminError::from(ValidationError::InvalidPrice).redirects_to_login());
        assert!(!AdminError::failed(Operation::Delete, None).redirects_to_login());
    }

    #[test]
    fn validation_notice_is_rule_specific() {
        assert_eq!(
            AdminError::from(ValidationError::InvalidStock).notice(),
            "Stock cannot be negative"
        );
        assert_eq!(
            AdminError::from(ValidationError::StockNotWhole).notice(),
            "Stock must be a whole number"
        );
        assert_eq!(
            AdminError::from(ValidationError::MissingField(DraftField::Brand)).notice(),
            "Please fill in all required fields"
        );
    }

    #[test]
    fn failed_prefers_backend_message_over_fallback() {
        let err = AdminError::failed(Operation::Update, Some("Item is locked".into()));
        assert_eq!(err.notice(), "Item is locked");

        let err = AdminError::failed(Operation::Update, Some("   ".into()));
        assert_eq!(err.notice(), "Failed to update item");
    }
}
