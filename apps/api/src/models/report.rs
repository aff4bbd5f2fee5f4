use serde::{Deserialize, Serialize};

/// A single observation and the reasoning behind it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisItem {
    pub point: String,
    pub rationale: String,
}

impl AnalysisItem {
    pub fn new(point: impl Into<String>, rationale: impl Into<String>) -> Self {
        Self {
            point: point.into(),
            rationale: rationale.into(),
        }
    }
}

/// Score (0 – 100) plus its explanation pairs. A score the model did not
/// provide as a number is `None` and renders as "N/A".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CriteriaAudit {
    pub score: Option<u8>,
    pub analysis: Vec<AnalysisItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteAudit {
    pub overall_score: Option<u8>,
    pub logo: Option<CriteriaAudit>,
    pub color_palette: Option<CriteriaAudit>,
    pub typography: Option<CriteriaAudit>,
    pub imagery: Option<CriteriaAudit>,
    pub iconography: Option<CriteriaAudit>,
    pub seo_meta_description: Option<CriteriaAudit>,
    pub seo_keywords: Option<CriteriaAudit>,
    pub seo_mobile_friendly: Option<CriteriaAudit>,
    pub seo_schema_markup: Option<CriteriaAudit>,
    pub seo_site_speed: Option<CriteriaAudit>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaPlatformAudit {
    pub platform: String,
    pub overall_score: Option<u8>,
    pub profile_branding: Option<CriteriaAudit>,
    pub content_consistency: Option<CriteriaAudit>,
    pub engagement_tactics: Option<CriteriaAudit>,
    pub actionable_tips: Vec<AnalysisItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechStackAudit {
    pub tools_detected: Vec<String>,
    pub analysis: Vec<AnalysisItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficInsightsAudit {
    pub estimated_monthly_visits: Option<String>,
    pub engagement_level: Option<String>,
    pub analysis: Vec<AnalysisItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorComparison {
    pub competitor_name: Option<String>,
    pub competitor_url: Option<String>,
    pub comparison_points: Vec<AnalysisItem>,
}

/// A complete brand audit. Only produced once the model's output has passed
/// validation, so `overall_score` is always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandReport {
    pub business_name: String,
    pub overall_score: u8,
    pub summary: Option<String>,
    pub brand_compliance_summary: Option<String>,
    pub website_analysis: Option<WebsiteAudit>,
    pub reputation_analysis: Option<CriteriaAudit>,
    pub social_media_analysis: Vec<SocialMediaPlatformAudit>,
    pub key_recommendations: Vec<AnalysisItem>,
    pub tech_stack: Option<TechStackAudit>,
    pub traffic_insights: Option<TrafficInsightsAudit>,
    pub competitor_analysis: Vec<CompetitorComparison>,
}

/// Outcome of a successful audit call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditResult {
    Complete(Box<BrandReport>),
    /// The model could not match the business name to the website. Carries
    /// no scores.
    NameMismatch {
        business_name: String,
        summary: String,
    },
}

impl AuditResult {
    pub fn business_name(&self) -> &str {
        match self {
            AuditResult::Complete(report) => &report.business_name,
            AuditResult::NameMismatch { business_name, .. } => business_name,
        }
    }

    pub fn report(&self) -> Option<&BrandReport> {
        match self {
            AuditResult::Complete(report) => Some(report),
            AuditResult::NameMismatch { .. } => None,
        }
    }
}
