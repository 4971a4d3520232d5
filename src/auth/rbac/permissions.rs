//! Permission enumeration and permission sets

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Declares the permission enumeration from a single list so that
/// `Permission::ALL`, the codes and the descriptions cannot drift apart.
macro_rules! permissions {
    ($($variant:ident => $code:literal, $description:literal;)+) => {
        /// Permission
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum Permission {
            $(
                #[doc = $description]
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl Permission {
            /// Every permission that exists
            pub const ALL: &'static [Permission] = &[$(Permission::$variant),+];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Permission::$variant => $code,)+
                }
            }

            pub const fn description(&self) -> &'static str {
                match self {
                    $(Permission::$variant => $description,)+
                }
            }
        }

        impl std::str::FromStr for Permission {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok(Permission::$variant),)+
                    _ => Err(format!("Invalid permission: {}", s)),
                }
            }
        }
    };
}

permissions! {
    TenantCreate => "tenant:create", "Create tenants";
    TenantRead => "tenant:read", "Read tenant information";
    TenantUpdate => "tenant:update", "Update tenant settings and profile";
    TenantDelete => "tenant:delete", "Delete tenants";
    UserCreate => "user:create", "Invite and create users";
    UserRead => "user:read", "Read user information";
    UserUpdate => "user:update", "Update users and their role assignments";
    UserDelete => "user:delete", "Remove users";
    LeadCreate => "lead:create", "Create leads";
    LeadRead => "lead:read", "Read leads";
    LeadUpdate => "lead:update", "Update leads";
    LeadDelete => "lead:delete", "Delete leads";
    LeadAssign => "lead:assign", "Assign leads to users";
    OnboardingRead => "onboarding:read", "Read onboarding workflow progress";
    OnboardingManage => "onboarding:manage", "Drive onboarding workflows";
    BillingRead => "billing:read", "Read invoices and subscription state";
    BillingAdmin => "billing:admin", "Manage subscriptions and payment settings";
    DomainManage => "domain:manage", "Manage tenant subdomains and custom domains";
    AnalyticsRead => "analytics:read", "Read usage analytics";
    SettingsManage => "settings:manage", "Manage tenant configuration";
    AuditRead => "audit:read", "Read audit logs";
}

impl Permission {
    /// Resource half of the code, e.g. `tenant` for `tenant:create`
    pub fn resource(&self) -> &'static str {
        let code = self.as_str();
        code.split_once(':').map_or(code, |(resource, _)| resource)
    }

    /// Action half of the code, e.g. `create` for `tenant:create`
    pub fn action(&self) -> &'static str {
        let code = self.as_str();
        code.split_once(':').map_or(code, |(_, action)| action)
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, de-duplicated set of permissions
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<Permission>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    pub fn insert(&mut self, permission: Permission) -> bool {
        self.0.insert(permission)
    }

    /// Set union; neither operand is modified
    pub fn union(&self, other: &PermissionSet) -> PermissionSet {
        self.0.union(&other.0).copied().collect()
    }

    pub fn is_superset(&self, other: &PermissionSet) -> bool {
        self.0.is_superset(&other.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0.iter().copied()
    }

    /// Permission codes in stable order
    pub fn codes(&self) -> Vec<&'static str> {
        self.iter().map(|p| p.as_str()).collect()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = &'a Permission>>(iter: I) -> Self {
        Self(iter.into_iter().copied().collect())
    }
}

impl Extend<Permission> for PermissionSet {
    fn extend<I: IntoIterator<Item = Permission>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for PermissionSet {
    type Item = Permission;
    type IntoIter = std::collections::btree_set::IntoIter<Permission>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
