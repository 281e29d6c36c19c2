//! Shared types for the ordering platform
//!
//! Domain models, bilingual display text, and the unified error system
//! used by the storefront engine and any server-side consumers.

pub mod error;
pub mod models;
pub mod order;
pub mod text;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use text::{Language, LocalizedText};
