//! Report validation: the trust boundary between model output and typed reports.
//!
//! The model is asked for a fixed JSON shape but nothing guarantees it: scores
//! arrive as strings, sections go missing, a list comes back as a single
//! object, rationales get nested. Everything is normalised here once so the
//! renderer never probes raw JSON.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::audit::error::AuditError;
use crate::models::form::{AuditFormData, SocialPlatform};
use crate::models::report::{
    AnalysisItem, AuditResult, BrandReport, CompetitorComparison, CriteriaAudit,
    SocialMediaPlatformAudit, TechStackAudit, TrafficInsightsAudit, WebsiteAudit,
};

const NAME_MISMATCH_PHRASE: &str = "business name mismatch";

/// Converts the recovered JSON object into an `AuditResult`.
///
/// The submitted business name always wins over whatever the model echoed
/// back, and social audits are kept only for platforms the user linked.
pub fn validate_report(value: Value, form: &AuditFormData) -> Result<AuditResult, AuditError> {
    let empty = Map::new();
    let obj = value.as_object().unwrap_or(&empty);

    let summary = text(obj.get("summary"));

    if let Some(summary) = &summary {
        if summary.to_lowercase().contains(NAME_MISMATCH_PHRASE) {
            return Ok(AuditResult::NameMismatch {
                business_name: form.business_name.clone(),
                summary: summary.clone(),
            });
        }
    }

    let overall_score =
        score(obj.get("overallScore")).ok_or(AuditError::Incomplete { summary: summary.clone() })?;

    let report = BrandReport {
        business_name: form.business_name.clone(),
        overall_score,
        summary,
        brand_compliance_summary: text(obj.get("brandComplianceSummary")),
        website_analysis: obj.get("websiteAnalysis").and_then(website),
        reputation_analysis: criteria(obj.get("reputationAnalysis")),
        social_media_analysis: social_audits(obj.get("socialMediaAnalysis"), form),
        key_recommendations: loose_items(obj.get("keyRecommendations")),
        tech_stack: obj.get("techStack").and_then(tech_stack),
        traffic_insights: obj.get("trafficInsights").and_then(traffic),
        competitor_analysis: one_or_many(obj.get("competitorAnalysis"))
            .filter_map(competitor)
            .collect(),
    };

    Ok(AuditResult::Complete(Box::new(report)))
}

// ────────────────────────────────────────────────────────────────────────────
// Scalars
// ────────────────────────────────────────────────────────────────────────────

/// Numbers and numeric strings, rounded and clamped to 0 – 100.
fn score(value: Option<&Value>) -> Option<u8> {
    let raw = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().trim_end_matches("/100").trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !raw.is_finite() {
        return None;
    }
    Some(raw.round().clamp(0.0, 100.0) as u8)
}

/// Trimmed non-empty string.
fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

fn text_or_empty(value: Option<&Value>) -> String {
    text(value).unwrap_or_default()
}

fn strings(value: Option<&Value>) -> Vec<String> {
    one_or_many(value).filter_map(|v| text(Some(v))).collect()
}

/// Iterates an array, or a lone non-null value as a one-element list.
fn one_or_many(value: Option<&Value>) -> impl Iterator<Item = &Value> {
    let slice: &[Value] = match value {
        Some(Value::Array(items)) => items,
        Some(Value::Null) | None => &[],
        Some(single) => std::slice::from_ref(single),
    };
    slice.iter()
}

// ────────────────────────────────────────────────────────────────────────────
// Analysis items
// ────────────────────────────────────────────────────────────────────────────

fn analysis_item(value: &Value) -> AnalysisItem {
    let point = text_or_empty(value.get("point"));
    // Models occasionally nest the rationale: {"rationale": {"rationale": "..."}}
    let rationale = match value.get("rationale") {
        Some(Value::Object(inner)) => text_or_empty(inner.get("rationale")),
        other => text_or_empty(other),
    };
    AnalysisItem::new(point, rationale)
}

/// Items with a point; rationale optional.
fn analysis_points(value: Option<&Value>) -> Vec<AnalysisItem> {
    one_or_many(value)
        .map(analysis_item)
        .filter(|item| !item.point.is_empty())
        .collect()
}

/// Items with either a point or a rationale.
fn loose_items(value: Option<&Value>) -> Vec<AnalysisItem> {
    one_or_many(value)
        .map(analysis_item)
        .filter(|item| !item.point.is_empty() || !item.rationale.is_empty())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

fn criteria(value: Option<&Value>) -> Option<CriteriaAudit> {
    let obj = value?.as_object()?;
    Some(CriteriaAudit {
        score: score(obj.get("score")),
        analysis: analysis_points(obj.get("analysis")),
    })
}

fn website(value: &Value) -> Option<WebsiteAudit> {
    let obj = value.as_object()?;
    Some(WebsiteAudit {
        overall_score: score(obj.get("overallScore")),
        logo: criteria(obj.get("logo")),
        color_palette: criteria(obj.get("colorPalette")),
        typography: criteria(obj.get("typography")),
        imagery: criteria(obj.get("imagery")),
        iconography: criteria(obj.get("iconography")),
        seo_meta_description: criteria(obj.get("seoMetaDescription")),
        seo_keywords: criteria(obj.get("seoKeywords")),
        seo_mobile_friendly: criteria(obj.get("seoMobileFriendly")),
        seo_schema_markup: criteria(obj.get("seoSchemaMarkup")),
        seo_site_speed: criteria(obj.get("seoSiteSpeed")),
    })
}

fn tech_stack(value: &Value) -> Option<TechStackAudit> {
    let obj = value.as_object()?;
    Some(TechStackAudit {
        tools_detected: strings(obj.get("toolsDetected")),
        analysis: analysis_points(obj.get("analysis")),
    })
}

fn traffic(value: &Value) -> Option<TrafficInsightsAudit> {
    let obj = value.as_object()?;
    Some(TrafficInsightsAudit {
        estimated_monthly_visits: text(obj.get("estimatedMonthlyVisits")),
        engagement_level: text(obj.get("engagementLevel")),
        analysis: analysis_points(obj.get("analysis")),
    })
}

fn competitor(value: &Value) -> Option<CompetitorComparison> {
    let obj = value.as_object()?;
    Some(CompetitorComparison {
        competitor_name: text(obj.get("competitorName")),
        competitor_url: text(obj.get("competitorUrl")),
        comparison_points: analysis_points(obj.get("comparisonPoints")),
    })
}

fn social_audits(value: Option<&Value>, form: &AuditFormData) -> Vec<SocialMediaPlatformAudit> {
    one_or_many(value)
        .filter_map(|entry| {
            let obj = entry.as_object()?;
            let platform = text(obj.get("platform"))?;

            match SocialPlatform::from_reported_name(&platform) {
                Some(p) if form.social_media.is_provided(p) => {}
                _ => {
                    warn!("Dropping social audit for unrequested platform '{platform}'");
                    return None;
                }
            }

            Some(SocialMediaPlatformAudit {
                platform,
                overall_score: score(obj.get("overallScore")),
                profile_branding: criteria(obj.get("profileBranding")),
                content_consistency: criteria(obj.get("contentConsistency")),
                engagement_tactics: criteria(obj.get("engagementTactics")),
                actionable_tips: loose_items(obj.get("actionableTips")),
            })
        })
        .inspect(|audit| debug!("Accepted social audit for {}", audit.platform))
        .collect()
}
