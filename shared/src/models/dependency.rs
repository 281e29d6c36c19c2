//! Attribute Dependency Model

use serde::{Deserialize, Serialize};

/// Directed visibility edge: selecting the parent option reveals the
/// child attribute.
///
/// Multiple edges may target the same child attribute from different
/// parent options (OR-visibility). The edge set must stay acyclic;
/// the engine validates this at catalog load time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeDependency {
    pub id: String,
    pub parent_option_id: String,
    pub child_attribute_id: String,
}
