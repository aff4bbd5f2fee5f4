//! Image augmentation: AI placeholder concepts for weak visual categories.
//!
//! Each eligible category gets one independent task. Tasks race each other,
//! are never retried or cancelled, and patch the session when they finish.
//! A task that finishes after its audit was discarded is dropped by the
//! session (see `AuditSession::apply_image`).

pub mod prompts;

use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::images::prompts::{
    COLOR_PALETTE_PROMPT_TEMPLATE, IMAGERY_PROMPT_TEMPLATE, LOGO_PROMPT_TEMPLATE,
};
use crate::llm_client::GenerativeService;
use crate::models::report::{AuditResult, CriteriaAudit, WebsiteAudit};
use crate::session::SharedSession;

/// Categories scoring below this get a generated suggestion.
pub const IMAGE_SCORE_THRESHOLD: u8 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageCategory {
    Logo,
    ColorPalette,
    Imagery,
}

impl ImageCategory {
    pub const ALL: [ImageCategory; 3] = [
        ImageCategory::Logo,
        ImageCategory::ColorPalette,
        ImageCategory::Imagery,
    ];

    pub fn criterion(self, website: &WebsiteAudit) -> Option<&CriteriaAudit> {
        match self {
            ImageCategory::Logo => website.logo.as_ref(),
            ImageCategory::ColorPalette => website.color_palette.as_ref(),
            ImageCategory::Imagery => website.imagery.as_ref(),
        }
    }

    /// Human label used in captions ("inspire improvements for your ...").
    pub fn label(self) -> &'static str {
        match self {
            ImageCategory::Logo => "logo",
            ImageCategory::ColorPalette => "color palette",
            ImageCategory::Imagery => "imagery",
        }
    }

    pub fn prompt(self, business_name: &str) -> String {
        let template = match self {
            ImageCategory::Logo => LOGO_PROMPT_TEMPLATE,
            ImageCategory::ColorPalette => COLOR_PALETTE_PROMPT_TEMPLATE,
            ImageCategory::Imagery => IMAGERY_PROMPT_TEMPLATE,
        };
        template.replace("{business_name}", business_name)
    }
}

/// Progress of one placeholder image.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImageSlot {
    Pending,
    Ready { data_url: String },
    /// Generation failed or returned no image. Not shown.
    Unavailable,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderImages {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_palette: Option<ImageSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagery: Option<ImageSlot>,
}

impl PlaceholderImages {
    /// All given categories marked `Pending`.
    pub fn pending(categories: &[ImageCategory]) -> Self {
        let mut images = Self::default();
        for &category in categories {
            images.set(category, ImageSlot::Pending);
        }
        images
    }

    pub fn get(&self, category: ImageCategory) -> Option<&ImageSlot> {
        match category {
            ImageCategory::Logo => self.logo.as_ref(),
            ImageCategory::ColorPalette => self.color_palette.as_ref(),
            ImageCategory::Imagery => self.imagery.as_ref(),
        }
    }

    pub fn set(&mut self, category: ImageCategory, slot: ImageSlot) {
        let target = match category {
            ImageCategory::Logo => &mut self.logo,
            ImageCategory::ColorPalette => &mut self.color_palette,
            ImageCategory::Imagery => &mut self.imagery,
        };
        *target = Some(slot);
    }
}

/// True when the criterion has a numeric score below the threshold.
pub fn is_eligible(criterion: Option<&CriteriaAudit>) -> bool {
    criterion
        .and_then(|c| c.score)
        .is_some_and(|score| score < IMAGE_SCORE_THRESHOLD)
}

/// Categories of a loaded report that qualify for a placeholder image.
pub fn eligible_categories(result: &AuditResult) -> Vec<ImageCategory> {
    let Some(website) = result.report().and_then(|r| r.website_analysis.as_ref()) else {
        return Vec::new();
    };
    ImageCategory::ALL
        .into_iter()
        .filter(|category| is_eligible(category.criterion(website)))
        .collect()
}

/// Spawns one generation task per category. Handles are returned for tests;
/// production callers drop them.
pub fn spawn_augmentation(
    llm: Arc<dyn GenerativeService>,
    session: SharedSession,
    audit_id: Uuid,
    business_name: &str,
    categories: &[ImageCategory],
) -> Vec<JoinHandle<()>> {
    if !categories.is_empty() {
        info!(
            "Requesting {} placeholder image(s) for audit {}",
            categories.len(),
            audit_id
        );
    }

    categories
        .iter()
        .map(|&category| {
            let llm = Arc::clone(&llm);
            let session = Arc::clone(&session);
            let prompt = category.prompt(business_name);

            tokio::spawn(async move {
                let slot = generate_slot(llm.as_ref(), category, &prompt).await;
                let applied = session.write().await.apply_image(audit_id, category, slot);
                if !applied {
                    debug!("Dropped {:?} image for discarded audit {}", category, audit_id);
                }
            })
        })
        .collect()
}

async fn generate_slot(
    llm: &dyn GenerativeService,
    category: ImageCategory,
    prompt: &str,
) -> ImageSlot {
    match llm.generate_image(prompt).await {
        Ok(Some(image)) => ImageSlot::Ready {
            data_url: image.to_data_url(),
        },
        Ok(None) => {
            warn!("No image data returned for {:?} placeholder", category);
            ImageSlot::Unavailable
        }
        Err(e) => {
            warn!("Placeholder image generation failed for {:?}: {e}", category);
            ImageSlot::Unavailable
        }
    }
}
