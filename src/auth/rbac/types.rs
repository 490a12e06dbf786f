//! RBAC type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value granted for a permission key: either a symbolic level
/// (`"result_only"`, `"total"`, ...) or a plain flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PermissionValue {
    /// Boolean capability flag
    Flag(bool),
    /// Symbolic access level
    Level(String),
}

impl PermissionValue {
    /// Symbolic level constructor
    pub fn level<S: Into<String>>(value: S) -> Self {
        Self::Level(value.into())
    }

    /// Flag constructor
    pub fn flag(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for PermissionValue {
    fn from(value: &str) -> Self {
        Self::Level(value.to_string())
    }
}

impl From<bool> for PermissionValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Permission grants for one role: module name -> key -> value.
///
/// BTreeMaps keep session payloads deterministically ordered.
pub type ModulePermissions = BTreeMap<String, BTreeMap<String, PermissionValue>>;
