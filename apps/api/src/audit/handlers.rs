use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::audit::error::{AuditError, AuditFailure};
use crate::audit::form_validation::{validate_form, ValidatedForm};
use crate::audit::service::run_audit;
use crate::errors::AppError;
use crate::images::{eligible_categories, spawn_augmentation, ImageCategory, PlaceholderImages};
use crate::models::form::{AuditFormData, SocialPlatform};
use crate::models::report::AuditResult;
use crate::render::markdown::to_markdown;
use crate::render::{build_view, ReportView};
use crate::session::AuditState;
use crate::state::AppState;

#[derive(Serialize)]
pub struct AuditResponse {
    pub audit_id: Uuid,
    pub view: ReportView,
    /// Categories whose placeholder images are being generated.
    pub image_eligible: Vec<ImageCategory>,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub session: AuditState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ReportView>,
}

#[derive(Serialize)]
pub struct PlatformInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub placeholder: &'static str,
}

/// POST /api/v1/audit
pub async fn handle_create_audit(
    State(state): State<AppState>,
    Json(form): Json<AuditFormData>,
) -> Result<Json<AuditResponse>, AppError> {
    let form = validate_form(form).map_err(AppError::InvalidForm)?;
    let audit_id = state.session.write().await.begin()?;
    info!("Audit {audit_id} started for '{}'", form.business_name());

    // Detached so the session still settles if the client disconnects.
    let task = tokio::spawn(settle_audit(state.clone(), audit_id, form));
    let (result, eligible) = match task.await {
        Ok(outcome) => outcome?,
        Err(e) => {
            state.session.write().await.fail(
                audit_id,
                AuditFailure {
                    code: "INTERNAL_ERROR",
                    message: "The audit stopped unexpectedly. Please try again.".to_string(),
                },
            );
            return Err(AppError::Internal(anyhow!("audit task {audit_id} failed: {e}")));
        }
    };

    let view = build_view(&result, &PlaceholderImages::pending(&eligible));
    Ok(Json(AuditResponse {
        audit_id,
        view,
        image_eligible: eligible,
    }))
}

/// Runs the audit and moves the session out of Loading. Image generation is
/// started only if the report actually landed in the session.
async fn settle_audit(
    state: AppState,
    audit_id: Uuid,
    form: ValidatedForm,
) -> Result<(AuditResult, Vec<ImageCategory>), AuditError> {
    let result = match run_audit(&form, state.llm.as_ref()).await {
        Ok(result) => result,
        Err(e) => {
            warn!("Audit {audit_id} failed: {e}");
            state.session.write().await.fail(audit_id, e.to_failure());
            return Err(e);
        }
    };

    let eligible = if state.config.enable_image_augmentation {
        eligible_categories(&result)
    } else {
        Vec::new()
    };

    let landed = state.session.write().await.complete(
        audit_id,
        result.clone(),
        PlaceholderImages::pending(&eligible),
    );

    if !landed {
        debug!("Audit {audit_id} was discarded before it finished");
    } else if !eligible.is_empty() {
        spawn_augmentation(
            Arc::clone(&state.llm),
            Arc::clone(&state.session),
            audit_id,
            result.business_name(),
            &eligible,
        );
    }

    Ok((result, eligible))
}

/// GET /api/v1/audit
pub async fn handle_get_audit(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.session.read().await;
    let current = session.state().clone();
    drop(session);

    let view = match &current {
        AuditState::Loaded { result, images, .. } => Some(build_view(result, images)),
        _ => None,
    };
    Json(SessionResponse {
        session: current,
        view,
    })
}

/// GET /api/v1/audit/report.md
pub async fn handle_audit_markdown(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let session = state.session.read().await;
    let AuditState::Loaded { result, images, .. } = session.state() else {
        return Err(AppError::NotFound("No audit report is loaded".to_string()));
    };
    let markdown = to_markdown(&build_view(result, images));
    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        markdown,
    ))
}

/// DELETE /api/v1/audit
pub async fn handle_reset_audit(State(state): State<AppState>) -> StatusCode {
    state.session.write().await.reset();
    info!("Audit session reset");
    StatusCode::NO_CONTENT
}

/// GET /api/v1/platforms
pub async fn handle_platforms() -> Json<Vec<PlatformInfo>> {
    Json(
        SocialPlatform::ALL
            .into_iter()
            .map(|p| PlatformInfo {
                key: p.key(),
                name: p.display_name(),
                placeholder: p.placeholder(),
            })
            .collect(),
    )
}
