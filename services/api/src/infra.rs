use homecare::config::IntakeConfig;
use homecare::workflows::assessment::{
    IntakeError, LeadIntake, LeadReceipt, LeadSubmission, StaticZipDirectory, ZipDirectoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Keeps accepted leads in memory until a CRM adapter is wired in.
#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadIntake {
    leads: Arc<Mutex<Vec<(LeadReceipt, LeadSubmission)>>>,
}

impl LeadIntake for InMemoryLeadIntake {
    fn submit(&self, lead: LeadSubmission) -> Result<LeadReceipt, IntakeError> {
        let mut guard = self
            .leads
            .lock()
            .map_err(|_| IntakeError::Unavailable("lead store poisoned".to_string()))?;
        let receipt = LeadReceipt::issue();
        info!(
            lead_id = %receipt.lead_id.0,
            first_name = %lead.contact.first_name,
            "lead stored in memory"
        );
        guard.push((receipt.clone(), lead));
        Ok(receipt)
    }
}

impl InMemoryLeadIntake {
    #[cfg(test)]
    pub(crate) fn leads(&self) -> Vec<(LeadReceipt, LeadSubmission)> {
        self.leads.lock().expect("lead mutex poisoned").clone()
    }
}

pub(crate) fn zip_directory(config: &IntakeConfig) -> Result<StaticZipDirectory, ZipDirectoryError> {
    match &config.zip_directory {
        Some(path) => {
            let directory = StaticZipDirectory::from_path(path)?;
            info!(path = %path.display(), entries = directory.len(), "loaded ZIP directory");
            Ok(directory)
        }
        None => Ok(StaticZipDirectory::builtin()),
    }
}
