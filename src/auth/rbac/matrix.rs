//! Permission matrix construction and checks

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::core::models::Role;

use super::types::{ModulePermissions, PermissionValue};

/// Static role -> module -> key -> value permission matrix.
///
/// Constructed once at process start and injected by `Arc` wherever
/// permission decisions are made; never mutated afterwards. Every lookup
/// is fail-closed: a role, module, or key with no entry grants nothing.
#[derive(Debug, Clone)]
pub struct PermissionMatrix {
    grants: HashMap<Role, ModulePermissions>,
}

impl PermissionMatrix {
    /// The built-in production matrix.
    pub fn builtin() -> Self {
        let mut grants: HashMap<Role, ModulePermissions> = HashMap::new();

        grants.insert(
            Role::Natural,
            modules([
                ("ia", &[("analysis", "result_only".into())]),
                ("health", &[("records", "own".into())]),
                ("governance", &[("reports", "create".into())]),
                ("market", &[("trade", "basic".into())]),
                ("democracy", &[("vote", "standard".into())]),
                ("volunteering", &[("missions", "join".into())]),
            ]),
        );

        grants.insert(
            Role::Gobierno,
            modules([
                ("ia", &[("analysis", "full_analysis".into())]),
                ("health", &[("records", "aggregate".into())]),
                ("governance", &[("reports", "audit".into())]),
                (
                    "democracy",
                    &[("vote", "audit".into()), ("results", "full".into())],
                ),
                ("user", &[("management", "read_only".into())]),
            ]),
        );

        grants.insert(
            Role::Admin,
            modules([
                ("ia", &[("analysis", "full_analysis".into())]),
                ("health", &[("records", "total".into())]),
                ("governance", &[("reports", "total".into())]),
                ("market", &[("trade", "total".into())]),
                (
                    "democracy",
                    &[("vote", "total".into()), ("results", "full".into())],
                ),
                ("volunteering", &[("missions", "total".into())]),
                ("user", &[("management", "global".into())]),
            ]),
        );

        grants.insert(
            Role::Mantenimiento,
            modules([
                ("ia", &[("analysis", "diagnostics".into())]),
                ("governance", &[("reports", "read_only".into())]),
                ("user", &[("management", "support".into())]),
            ]),
        );

        Self { grants }
    }

    /// An empty matrix that denies everything. Used in tests to exercise
    /// the fail-closed default.
    pub fn empty() -> Self {
        Self {
            grants: HashMap::new(),
        }
    }

    /// Full permission map for a role; empty for roles with no grants.
    pub fn permissions_for(&self, role: Role) -> ModulePermissions {
        self.grants.get(&role).cloned().unwrap_or_default()
    }

    /// Grants a role holds in one module, if any.
    pub(crate) fn module_grants(
        &self,
        role: Role,
        module: &str,
    ) -> Option<&BTreeMap<String, PermissionValue>> {
        self.grants.get(&role).and_then(|m| m.get(module))
    }

    /// True iff the stored value at `[role][module][key]` equals
    /// `required`. Absence at any level denies.
    pub fn has_permission(
        &self,
        role: Role,
        module: &str,
        key: &str,
        required: &PermissionValue,
    ) -> bool {
        match self.module_grants(role, module).and_then(|m| m.get(key)) {
            Some(value) => value == required,
            None => {
                debug!(%role, module, key, "permission absent, denying");
                false
            }
        }
    }

    /// Set-membership variant: true iff the stored value is one of
    /// `accepted`.
    pub fn has_any_permission(
        &self,
        role: Role,
        module: &str,
        key: &str,
        accepted: &[PermissionValue],
    ) -> bool {
        match self.module_grants(role, module).and_then(|m| m.get(key)) {
            Some(value) => accepted.contains(value),
            None => false,
        }
    }
}

fn modules<const N: usize>(entries: [(&str, &[(&str, PermissionValue)]); N]) -> ModulePermissions {
    entries
        .into_iter()
        .map(|(module, keys)| {
            let keys = keys
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect();
            (module.to_string(), keys)
        })
        .collect()
}
