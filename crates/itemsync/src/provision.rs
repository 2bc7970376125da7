//! Best-effort startup provisioning.
//!
//! Every resource is attempted even if an earlier one failed. Failures are logged
//! and recorded in the report; they never abort startup.

use std::sync::Arc;

use itemsync_core::provision::{ProvisionOutcome, ProvisionReport};
use itemsync_core::storage::Provision;

/// Ensures every resource exists and returns the resulting report.
pub async fn provision_all(provisioners: &[Arc<dyn Provision>]) -> ProvisionReport {
    let mut report = ProvisionReport::new();

    for provisioner in provisioners {
        let resource = provisioner.resource();
        let result = provisioner.ensure_provisioned().await;

        match &result {
            Ok(ProvisionOutcome::Created) => {
                tracing::info!(resource = %resource, "Resource created");
            }
            Ok(ProvisionOutcome::AlreadyExists) => {
                tracing::info!(resource = %resource, "Resource already exists");
            }
            Err(err) => {
                tracing::error!(resource = %resource, error = %err, "Failed to provision resource");
            }
        }

        report.record(resource, result);
    }

    if !report.ready {
        let failed: Vec<&str> = report
            .failures()
            .map(|failure| failure.resource.as_str())
            .collect();
        tracing::warn!(
            failed = ?failed,
            "Starting with incomplete provisioning, see /readyz"
        );
    }

    report
}
