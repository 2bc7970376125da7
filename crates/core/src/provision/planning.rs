//! Pure functions for calculating provisioning plans.

use super::types::ProvisionPlan;

/// Pure function: decide what to do given whether the resource exists.
pub fn calculate_provision_plan(exists: bool, resource: &str) -> ProvisionPlan {
    if exists {
        ProvisionPlan::NoChanges {
            resource: resource.to_string(),
        }
    } else {
        ProvisionPlan::Create {
            resource: resource.to_string(),
        }
    }
}

/// Pure function: format a plan for logging.
pub fn format_provision_plan(plan: &ProvisionPlan) -> String {
    match plan {
        ProvisionPlan::Create { resource } => format!("+ Create {resource}"),
        ProvisionPlan::NoChanges { resource } => format!("= {resource} already exists"),
    }
}
