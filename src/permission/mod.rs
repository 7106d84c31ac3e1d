//! Feature permissions
//!
//! Tier-based feature flags plus affiliate and admin grants. Admins hold
//! every permission.

use crate::tier::Tier;
use serde::{Deserialize, Serialize};

/// A gated feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewDashboard,
    CreateAlerts,
    ViewWatchlist,
    ViewSymbols,
    ViewTimeframes,
    ViewAllSymbols,
    ViewAllTimeframes,
    CreateAdvancedAlerts,
    ExportData,
    PrioritySupport,
    AffiliateDashboard,
    AffiliateCodes,
    AffiliateCommissionReports,
    AffiliateProfile,
    AffiliateCodeGeneration,
    AffiliateEarnings,
    AdminDashboard,
    AdminUsers,
    AdminAffiliates,
    AdminSettings,
    AdminReports,
    AdminSystemConfig,
    AdminTierManagement,
    AdminBilling,
    AdminLogs,
}

const FREE_PERMISSIONS: &[Permission] = &[
    Permission::ViewDashboard,
    Permission::CreateAlerts,
    Permission::ViewWatchlist,
    Permission::ViewSymbols,
    Permission::ViewTimeframes,
];

const PRO_PERMISSIONS: &[Permission] = &[
    Permission::ViewDashboard,
    Permission::CreateAlerts,
    Permission::ViewWatchlist,
    Permission::ViewSymbols,
    Permission::ViewTimeframes,
    Permission::ViewAllSymbols,
    Permission::ViewAllTimeframes,
    Permission::CreateAdvancedAlerts,
    Permission::ExportData,
    Permission::PrioritySupport,
];

const AFFILIATE_PERMISSIONS: &[Permission] = &[
    Permission::AffiliateDashboard,
    Permission::AffiliateCodes,
    Permission::AffiliateCommissionReports,
    Permission::AffiliateProfile,
    Permission::AffiliateCodeGeneration,
    Permission::AffiliateEarnings,
];

const ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::AdminDashboard,
    Permission::AdminUsers,
    Permission::AdminAffiliates,
    Permission::AdminSettings,
    Permission::AdminReports,
    Permission::AdminSystemConfig,
    Permission::AdminTierManagement,
    Permission::AdminBilling,
    Permission::AdminLogs,
];

/// Permissions a tier grants on its own
pub fn tier_permissions(tier: Tier) -> &'static [Permission] {
    match tier {
        Tier::Free => FREE_PERMISSIONS,
        Tier::Pro => PRO_PERMISSIONS,
    }
}

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// The parts of a session that decide permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserContext {
    pub tier: Tier,
    pub role: Role,
    pub is_affiliate: bool,
}

impl UserContext {
    /// Regular user on `tier`
    pub fn new(tier: Tier) -> Self {
        Self {
            tier,
            role: Role::User,
            is_affiliate: false,
        }
    }

    /// Build from session fields. A missing or unrecognized tier falls back
    /// to FREE, the least privileged tier.
    pub fn from_session(tier: Option<&str>, role: Option<&str>, is_affiliate: bool) -> Self {
        let tier = tier.and_then(|t| t.parse().ok()).unwrap_or(Tier::Free);
        let role = match role {
            Some("ADMIN") => Role::Admin,
            _ => Role::User,
        };
        Self {
            tier,
            role,
            is_affiliate,
        }
    }

    /// Whether the user holds `permission`
    pub fn has_permission(&self, permission: Permission) -> bool {
        if self.role == Role::Admin {
            return true;
        }
        if tier_permissions(self.tier).contains(&permission) {
            return true;
        }
        if AFFILIATE_PERMISSIONS.contains(&permission) {
            return self.is_affiliate;
        }
        false
    }

    /// Every permission the user holds
    pub fn permissions(&self) -> Vec<Permission> {
        let mut permissions = tier_permissions(self.tier).to_vec();
        if self.is_affiliate || self.role == Role::Admin {
            permissions.extend_from_slice(AFFILIATE_PERMISSIONS);
        }
        if self.role == Role::Admin {
            for &permission in PRO_PERMISSIONS {
                if !permissions.contains(&permission) {
                    permissions.push(permission);
                }
            }
            permissions.extend_from_slice(ADMIN_PERMISSIONS);
        }
        permissions
    }

    /// Whether the user holds all of `permissions`
    pub fn has_all_permissions(&self, permissions: &[Permission]) -> bool {
        permissions.iter().all(|&p| self.has_permission(p))
    }

    /// Whether the user holds at least one of `permissions`
    pub fn has_any_permission(&self, permissions: &[Permission]) -> bool {
        permissions.iter().any(|&p| self.has_permission(p))
    }

    /// Subset of `permissions` the user lacks
    pub fn missing_permissions(&self, permissions: &[Permission]) -> Vec<Permission> {
        permissions
            .iter()
            .copied()
            .filter(|&p| !self.has_permission(p))
            .collect()
    }
}
