//! Audit orchestration: prompt → model → recovered JSON → validated report.

use chrono::Utc;
use serde_json::Value;
use tracing::{info, warn};

use crate::audit::error::AuditError;
use crate::audit::form_validation::ValidatedForm;
use crate::audit::prompts::AUDIT_SYSTEM;
use crate::audit::report_validation::validate_report;
use crate::audit::request::build_prompt;
use crate::llm_client::recovery::recover_json;
use crate::llm_client::GenerativeService;
use crate::models::report::AuditResult;

/// Runs one audit. A single model call; failures are returned, never retried.
pub async fn run_audit(
    form: &ValidatedForm,
    llm: &dyn GenerativeService,
) -> Result<AuditResult, AuditError> {
    info!("Running brand audit for '{}'", form.business_name());

    let prompt = build_prompt(form, Utc::now());
    let raw = llm.generate_text(&prompt, AUDIT_SYSTEM).await?;

    let value: Value = recover_json(&raw).map_err(|e| {
        warn!("Could not recover report JSON ({} chars of text): {e}", raw.len());
        e
    })?;

    let result = validate_report(value, form.data())?;
    match &result {
        AuditResult::Complete(report) => info!(
            "Audit for '{}' complete (overall score {})",
            report.business_name, report.overall_score
        ),
        AuditResult::NameMismatch { business_name, .. } => {
            warn!("Audit for '{business_name}' reported a business name mismatch")
        }
    }
    Ok(result)
}
