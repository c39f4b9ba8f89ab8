//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation-class domain error.
///
/// Every variant is a deterministic business-rule rejection, surfaced
/// synchronously to the caller with the field it is scoped to. None of these
/// is retried and none is fatal to the process; a rejected operation leaves
/// persisted state unchanged. Infrastructure failures (storage unavailable)
/// are not represented here and belong to the storage collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A name failed the alphabetic-only pattern.
    #[error("{field}: name must contain only letters")]
    InvalidFormat { field: &'static str },

    /// A normalized name collides case-insensitively with another record.
    #[error("{field}: '{name}' already exists")]
    DuplicateName { field: &'static str, name: String },

    /// A required reference was not supplied.
    #[error("{field}: field is required")]
    MissingField { field: &'static str },

    /// Movement quantity must be a positive integer.
    #[error("quantity: must be greater than zero")]
    InvalidQuantity,

    /// Outbound movement against a product with no balance record.
    #[error("product: not in stock")]
    ProductNotInStock,

    /// Outbound quantity exceeds the current balance.
    #[error("quantity: insufficient stock")]
    InsufficientStock,

    /// Outbound unit differs from the most recent inbound unit.
    #[error("unit: does not match the unit of the last inbound movement")]
    UnitMismatch,

    /// A supplied identifier does not reference an existing record.
    #[error("{entity}: not found")]
    NotFound { entity: &'static str },
}

impl ValidationError {
    pub fn invalid_format(field: &'static str) -> Self {
        Self::InvalidFormat { field }
    }

    pub fn duplicate_name(field: &'static str, name: impl Into<String>) -> Self {
        Self::DuplicateName {
            field,
            name: name.into(),
        }
    }

    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => "invalid_format",
            Self::DuplicateName { .. } => "duplicate_name",
            Self::MissingField { .. } => "missing_field",
            Self::InvalidQuantity => "invalid_quantity",
            Self::ProductNotInStock => "product_not_in_stock",
            Self::InsufficientStock => "insufficient_stock",
            Self::UnitMismatch => "unit_mismatch",
            Self::NotFound { .. } => "not_found",
        }
    }
}
