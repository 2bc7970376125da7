use serde::{Deserialize, Serialize};

use crate::storage::RepositoryError;

/// Result of provisioning a single resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvisionOutcome {
    /// The resource was already there.
    AlreadyExists,
    /// The resource was created during this run.
    Created,
}

/// Planned action for a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionPlan {
    /// Resource doesn't exist, needs to be created.
    Create { resource: String },
    /// Resource exists, nothing to do.
    NoChanges { resource: String },
}

/// Final status of a resource after provisioning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResourceStatus {
    AlreadyExists,
    Created,
    Failed { error: String },
}

impl From<ProvisionOutcome> for ResourceStatus {
    fn from(outcome: ProvisionOutcome) -> Self {
        match outcome {
            ProvisionOutcome::AlreadyExists => ResourceStatus::AlreadyExists,
            ProvisionOutcome::Created => ResourceStatus::Created,
        }
    }
}

/// Provisioning status for one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceReport {
    pub resource: String,
    #[serde(flatten)]
    pub status: ResourceStatus,
}

/// Summary of a provisioning run, exposed by the readiness probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionReport {
    /// False if any resource failed to provision.
    pub ready: bool,
    pub resources: Vec<ResourceReport>,
}

impl Default for ProvisionReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ProvisionReport {
    /// An empty report. Ready until a failure is recorded.
    pub fn new() -> Self {
        Self {
            ready: true,
            resources: Vec::new(),
        }
    }

    /// Records the outcome of provisioning `resource`.
    pub fn record(
        &mut self,
        resource: impl Into<String>,
        result: Result<ProvisionOutcome, RepositoryError>,
    ) {
        let status = match result {
            Ok(outcome) => outcome.into(),
            Err(err) => {
                self.ready = false;
                ResourceStatus::Failed {
                    error: err.to_string(),
                }
            }
        };

        self.resources.push(ResourceReport {
            resource: resource.into(),
            status,
        });
    }

    /// Resources that failed to provision.
    pub fn failures(&self) -> impl Iterator<Item = &ResourceReport> {
        self.resources
            .iter()
            .filter(|r| matches!(r.status, ResourceStatus::Failed { .. }))
    }
}
