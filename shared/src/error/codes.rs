//! Unified error codes for the ordering platform
//!
//! Error codes are shared between the engine and its consumers (storefront,
//! admin tooling) and are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Catalog errors
//! - 2xxx: Selection errors
//! - 3xxx: Cart errors
//! - 4xxx: Order errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Catalog ====================
    /// Catalog data could not be loaded (customization unavailable)
    CatalogUnavailable = 1001,
    /// Attribute not found
    AttributeNotFound = 1002,
    /// Attribute option not found
    OptionNotFound = 1003,
    /// Menu item not found
    MenuItemNotFound = 1004,
    /// Dependency edges form a cycle (fatal configuration error)
    CyclicDependency = 1005,
    /// Catalog load was cancelled before completion
    LoadCancelled = 1006,

    // ==================== 2xxx: Selection ====================
    /// A required attribute has no selection
    SelectionIncomplete = 2001,

    // ==================== 3xxx: Cart ====================
    /// Cart line not found
    CartLineNotFound = 3001,
    /// Quantity is zero or negative
    InvalidQuantity = 3002,

    // ==================== 4xxx: Order ====================
    /// Cart is empty at checkout
    EmptyOrder = 4001,
    /// Customer information is incomplete
    CustomerInfoIncomplete = 4002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Storage backend error
    StorageError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this code represents success
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",

            Self::CatalogUnavailable => "Customization is unavailable",
            Self::AttributeNotFound => "Attribute not found",
            Self::OptionNotFound => "Attribute option not found",
            Self::MenuItemNotFound => "Menu item not found",
            Self::CyclicDependency => "Attribute dependencies form a cycle",
            Self::LoadCancelled => "Catalog load was cancelled",

            Self::SelectionIncomplete => "Required options are not selected",

            Self::CartLineNotFound => "Cart line not found",
            Self::InvalidQuantity => "Quantity must be positive",

            Self::EmptyOrder => "Cannot place an empty order",
            Self::CustomerInfoIncomplete => "Customer information is incomplete",

            Self::InternalError => "Internal error",
            Self::StorageError => "Storage backend error",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 value to [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            4 => Ok(Self::AlreadyExists),
            5 => Ok(Self::InvalidRequest),

            1001 => Ok(Self::CatalogUnavailable),
            1002 => Ok(Self::AttributeNotFound),
            1003 => Ok(Self::OptionNotFound),
            1004 => Ok(Self::MenuItemNotFound),
            1005 => Ok(Self::CyclicDependency),
            1006 => Ok(Self::LoadCancelled),

            2001 => Ok(Self::SelectionIncomplete),

            3001 => Ok(Self::CartLineNotFound),
            3002 => Ok(Self::InvalidQuantity),

            4001 => Ok(Self::EmptyOrder),
            4002 => Ok(Self::CustomerInfoIncomplete),

            9001 => Ok(Self::InternalError),
            9002 => Ok(Self::StorageError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.code())
    }
}
