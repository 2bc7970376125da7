//! Startup provisioning plans and reports (Functional Core).
//!
//! Backends decide whether a resource exists; the functions here decide what to do
//! about it and summarize the outcome for the readiness probe.

mod planning;
mod types;

pub use planning::{calculate_provision_plan, format_provision_plan};
pub use types::{ProvisionOutcome, ProvisionPlan, ProvisionReport, ResourceReport, ResourceStatus};
