//! Audit session: the single in-memory state machine behind the HTTP surface.
//!
//! ```text
//!   Idle ──begin──▶ Loading ──complete──▶ Loaded ──apply_image──▶ Loaded
//!    ▲                 │                    │
//!    │                 └──fail──▶ Failed    │
//!    └──────────── reset (any state) ◀──────┘
//! ```
//!
//! Every audit gets a fresh id at `begin`. Completion, failure and image
//! patches carry that id and are ignored unless it still names the current
//! audit, so results from a discarded audit can never leak into a new one.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::audit::error::AuditFailure;
use crate::images::{ImageCategory, ImageSlot, PlaceholderImages};
use crate::models::report::AuditResult;

pub type SharedSession = Arc<RwLock<AuditSession>>;

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("an audit is already in progress")]
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AuditState {
    #[default]
    Idle,
    Loading {
        audit_id: Uuid,
        started_at: DateTime<Utc>,
    },
    Loaded {
        audit_id: Uuid,
        result: AuditResult,
        images: PlaceholderImages,
    },
    Failed {
        audit_id: Uuid,
        failure: AuditFailure,
    },
}

#[derive(Debug, Default)]
pub struct AuditSession {
    state: AuditState,
}

impl AuditSession {
    pub fn shared() -> SharedSession {
        Arc::new(RwLock::new(Self::default()))
    }

    pub fn state(&self) -> &AuditState {
        &self.state
    }

    /// Starts a new audit, replacing any loaded or failed one.
    pub fn begin(&mut self) -> Result<Uuid, SessionError> {
        if matches!(self.state, AuditState::Loading { .. }) {
            return Err(SessionError::Busy);
        }
        let audit_id = Uuid::new_v4();
        self.state = AuditState::Loading {
            audit_id,
            started_at: Utc::now(),
        };
        Ok(audit_id)
    }

    /// Loading → Loaded. Returns false if `audit_id` is no longer loading.
    pub fn complete(
        &mut self,
        audit_id: Uuid,
        result: AuditResult,
        images: PlaceholderImages,
    ) -> bool {
        if !self.is_loading(audit_id) {
            return false;
        }
        self.state = AuditState::Loaded {
            audit_id,
            result,
            images,
        };
        true
    }

    /// Loading → Failed. Returns false if `audit_id` is no longer loading.
    pub fn fail(&mut self, audit_id: Uuid, failure: AuditFailure) -> bool {
        if !self.is_loading(audit_id) {
            return false;
        }
        self.state = AuditState::Failed { audit_id, failure };
        true
    }

    /// Patches one image slot of the loaded audit. Late results for a
    /// discarded or replaced audit are dropped and false is returned.
    pub fn apply_image(&mut self, audit_id: Uuid, category: ImageCategory, slot: ImageSlot) -> bool {
        match &mut self.state {
            AuditState::Loaded {
                audit_id: current,
                images,
                ..
            } if *current == audit_id => {
                images.set(category, slot);
                true
            }
            _ => false,
        }
    }

    /// Back to Idle from any state.
    pub fn reset(&mut self) {
        self.state = AuditState::Idle;
    }

    fn is_loading(&self, audit_id: Uuid) -> bool {
        matches!(self.state, AuditState::Loading { audit_id: current, .. } if current == audit_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::report::BrandReport;

    fn report() -> AuditResult {
        AuditResult::Complete(Box::new(BrandReport {
            business_name: "Creative Solutions Inc.".to_string(),
            overall_score: 55,
            ..Default::default()
        }))
    }

    fn failure() -> AuditFailure {
        AuditFailure {
            code: "LLM_ERROR",
            message: "down".to_string(),
        }
    }

    #[test]
    fn test_starts_idle() {
        assert_eq!(AuditSession::default().state(), &AuditState::Idle);
    }

    #[test]
    fn test_begin_while_loading_is_busy() {
        let mut session = AuditSession::default();
        session.begin().unwrap();
        assert_eq!(session.begin(), Err(SessionError::Busy));
    }

    #[test]
    fn test_complete_moves_to_loaded() {
        let mut session = AuditSession::default();
        let id = session.begin().unwrap();
        assert!(session.complete(id, report(), PlaceholderImages::default()));
        assert!(matches!(session.state(), AuditState::Loaded { audit_id, .. } if *audit_id == id));
    }

    #[test]
    fn test_fail_moves_to_failed_and_allows_restart() {
        let mut session = AuditSession::default();
        let id = session.begin().unwrap();
        assert!(session.fail(id, failure()));
        assert!(matches!(session.state(), AuditState::Failed { .. }));
        assert!(session.begin().is_ok());
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut session = AuditSession::default();
        let first = session.begin().unwrap();
        session.reset();
        let second = session.begin().unwrap();
        assert!(!session.complete(first, report(), PlaceholderImages::default()));
        assert!(matches!(session.state(), AuditState::Loading { audit_id, .. } if *audit_id == second));
    }

    #[test]
    fn test_image_patches_loaded_audit() {
        let mut session = AuditSession::default();
        let id = session.begin().unwrap();
        session.complete(id, report(), PlaceholderImages::pending(&[ImageCategory::Logo]));

        let slot = ImageSlot::Ready {
            data_url: "data:image/png;base64,AAAA".to_string(),
        };
        assert!(session.apply_image(id, ImageCategory::Logo, slot.clone()));

        match session.state() {
            AuditState::Loaded { images, .. } => {
                assert_eq!(images.get(ImageCategory::Logo), Some(&slot));
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn test_image_for_discarded_audit_is_dropped() {
        let mut session = AuditSession::default();
        let old = session.begin().unwrap();
        session.complete(old, report(), PlaceholderImages::pending(&[ImageCategory::Logo]));
        session.reset();

        assert!(!session.apply_image(old, ImageCategory::Logo, ImageSlot::Unavailable));
        assert_eq!(session.state(), &AuditState::Idle);

        let new = session.begin().unwrap();
        session.complete(new, report(), PlaceholderImages::default());
        assert!(!session.apply_image(old, ImageCategory::Logo, ImageSlot::Unavailable));
        match session.state() {
            AuditState::Loaded { images, .. } => assert!(images.get(ImageCategory::Logo).is_none()),
            other => panic!("unexpected state {other:?}"),
        }
    }
}
