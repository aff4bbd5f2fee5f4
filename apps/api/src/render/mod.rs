//! Report renderer: maps a validated audit onto display sections.
//!
//! The view is a plain serializable tree: sections hold blocks, blocks hold
//! cards. Clients (and `markdown::to_markdown`) draw it without re-checking the
//! report. Rules carried by the view:
//! - absent optional sections are omitted, never rendered empty
//! - absent criteria inside a present section render a "not available" card
//! - placeholder images only appear on criteria scoring below 70

pub mod compliance;
pub mod markdown;

use serde::Serialize;

use crate::images::{is_eligible, ImageCategory, ImageSlot, PlaceholderImages};
use crate::models::report::{
    AnalysisItem, AuditResult, BrandReport, CompetitorComparison, CriteriaAudit,
    SocialMediaPlatformAudit, TechStackAudit, TrafficInsightsAudit, WebsiteAudit,
};
use crate::render::compliance::{compliance_checks, ComplianceCheck};

pub const CRITERIA_NOT_AVAILABLE: &str = "Analysis for this category was not available.";
pub const NO_ANALYSIS_POINTS: &str = "No detailed analysis points provided.";
pub const NO_RECOMMENDATIONS: &str = "No key recommendations were generated in this audit.";
pub const NO_TOOLS_DETECTED: &str = "No specific technologies detected.";
pub const NO_COMPARISON_DATA: &str = "No comparison data available.";
pub const TRAFFIC_DISCLAIMER: &str = "*Metrics are approximations based on public data signals \
    and may vary from actual analytics.";
const NOT_AVAILABLE: &str = "N/A";

// ────────────────────────────────────────────────────────────────────────────
// Scores
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsImprovement,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ScoreBand::Excellent,
            60..=79 => ScoreBand::Good,
            40..=59 => ScoreBand::NeedsImprovement,
            _ => ScoreBand::Poor,
        }
    }

    fn verdict(self) -> &'static str {
        match self {
            ScoreBand::Excellent => {
                "Excellent standing. This area is a strong asset for your brand."
            }
            ScoreBand::Good => {
                "Good performance. There are minor opportunities for improvement."
            }
            ScoreBand::NeedsImprovement => {
                "Needs Improvement. This area requires attention to meet industry standards."
            }
            ScoreBand::Poor => {
                "Poor. This is a critical area that needs immediate action to improve brand health."
            }
        }
    }
}

/// Colour family for score gauges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTone {
    Strong,
    Fair,
    Weak,
}

impl ScoreTone {
    pub fn from_score(score: u8) -> Self {
        match score {
            75.. => ScoreTone::Strong,
            50..=74 => ScoreTone::Fair,
            _ => ScoreTone::Weak,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreView {
    pub value: u8,
    pub band: ScoreBand,
    pub tone: ScoreTone,
    pub description: String,
}

impl ScoreView {
    pub fn new(value: u8) -> Self {
        let band = ScoreBand::from_score(value);
        Self {
            value,
            band,
            tone: ScoreTone::from_score(value),
            description: format!("Score: {value}/100 - {}", band.verdict()),
        }
    }

    /// "72/100", or "N/A/100" when the model gave no score.
    pub fn display(score: Option<&ScoreView>) -> String {
        match score {
            Some(s) => format!("{}/100", s.value),
            None => format!("{NOT_AVAILABLE}/100"),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Cards and blocks
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceholderView {
    pub category: ImageCategory,
    pub slot: ImageSlot,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriteriaCard {
    pub title: String,
    pub available: bool,
    pub score: Option<ScoreView>,
    pub analysis: Vec<AnalysisItem>,
    /// Italic placeholder text when there is nothing else to show.
    pub note: Option<&'static str>,
    pub placeholder: Option<PlaceholderView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrafficCard {
    pub estimated_monthly_visits: String,
    pub engagement_level: String,
    pub analysis: Vec<AnalysisItem>,
    pub disclaimer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechStackCard {
    pub tools_detected: Vec<String>,
    pub note: Option<&'static str>,
    pub analysis: Vec<AnalysisItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitorCard {
    pub name: String,
    pub url: Option<String>,
    pub comparison_points: Vec<AnalysisItem>,
    pub note: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialCard {
    pub platform: String,
    pub overall_score: Option<ScoreView>,
    pub criteria: Vec<CriteriaCard>,
    pub actionable_tips: Vec<AnalysisItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph { text: String },
    Note { text: &'static str },
    Recommendations { items: Vec<AnalysisItem> },
    ScoreLine { label: &'static str, score: Option<ScoreView> },
    Traffic(TrafficCard),
    TechStack(TechStackCard),
    Group { title: &'static str, cards: Vec<CriteriaCard> },
    Criteria(CriteriaCard),
    Competitor(CompetitorCard),
    Social(SocialCard),
    ComplianceChecks { checks: Vec<ComplianceCheck> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    KeyRecommendations,
    WebsiteAnalysis,
    CompetitorComparison,
    SocialMediaPresence,
    OnlineReputation,
    BrandCompliance,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub id: SectionId,
    pub title: &'static str,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoticeView {
    pub title: String,
    pub message: String,
    pub action: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullReportView {
    pub business_name: String,
    pub overall: ScoreView,
    pub summary: String,
    pub sections: Vec<SectionView>,
}

impl FullReportView {
    #[cfg(test)]
    pub fn section(&self, id: SectionId) -> Option<&SectionView> {
        self.sections.iter().find(|s| s.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportView {
    /// Softer notice for a business-name mismatch.
    Notice(NoticeView),
    Report(Box<FullReportView>),
}

// ────────────────────────────────────────────────────────────────────────────
// Building
// ────────────────────────────────────────────────────────────────────────────

pub fn build_view(result: &AuditResult, images: &PlaceholderImages) -> ReportView {
    match result {
        AuditResult::NameMismatch {
            business_name,
            summary,
        } => ReportView::Notice(NoticeView {
            title: format!("Audit Notice for {business_name}"),
            message: summary.clone(),
            action: "Check Inputs",
        }),
        AuditResult::Complete(report) => ReportView::Report(Box::new(build_report(report, images))),
    }
}

fn build_report(report: &BrandReport, images: &PlaceholderImages) -> FullReportView {
    let mut sections = vec![recommendations_section(&report.key_recommendations)];

    if let Some(website) = &report.website_analysis {
        sections.push(website_section(report, website, images));
    }

    if !report.competitor_analysis.is_empty() {
        sections.push(SectionView {
            id: SectionId::CompetitorComparison,
            title: "Competitor Comparison",
            blocks: report
                .competitor_analysis
                .iter()
                .map(|c| Block::Competitor(competitor_card(c)))
                .collect(),
        });
    }

    if !report.social_media_analysis.is_empty() {
        sections.push(SectionView {
            id: SectionId::SocialMediaPresence,
            title: "Social Media Presence",
            blocks: report
                .social_media_analysis
                .iter()
                .map(|s| Block::Social(social_card(s)))
                .collect(),
        });
    }

    if let Some(reputation) = &report.reputation_analysis {
        sections.push(SectionView {
            id: SectionId::OnlineReputation,
            title: "Online Reputation Analysis",
            blocks: vec![Block::Criteria(criteria_card(
                "Customer Reviews & Trust",
                Some(reputation),
            ))],
        });
    }

    if let Some(compliance) = &report.brand_compliance_summary {
        let mut blocks = vec![Block::Paragraph {
            text: compliance.clone(),
        }];
        if let Some(website) = &report.website_analysis {
            let checks = compliance_checks(website, &report.social_media_analysis);
            if !report.social_media_analysis.is_empty() && !checks.is_empty() {
                blocks.push(Block::ComplianceChecks { checks });
            }
        }
        sections.push(SectionView {
            id: SectionId::BrandCompliance,
            title: "Brand Compliance Summary",
            blocks,
        });
    }

    FullReportView {
        business_name: report.business_name.clone(),
        overall: ScoreView::new(report.overall_score),
        summary: report.summary.clone().unwrap_or_default(),
        sections,
    }
}

fn recommendations_section(items: &[AnalysisItem]) -> SectionView {
    let block = if items.is_empty() {
        Block::Note {
            text: NO_RECOMMENDATIONS,
        }
    } else {
        Block::Recommendations {
            items: items.to_vec(),
        }
    };
    SectionView {
        id: SectionId::KeyRecommendations,
        title: "Key Recommendations",
        blocks: vec![block],
    }
}

fn website_section(
    report: &BrandReport,
    website: &WebsiteAudit,
    images: &PlaceholderImages,
) -> SectionView {
    let mut blocks = vec![Block::ScoreLine {
        label: "Overall Website Score",
        score: website.overall_score.map(ScoreView::new),
    }];

    if let Some(traffic) = &report.traffic_insights {
        blocks.push(Block::Traffic(traffic_card(traffic)));
    }
    if let Some(stack) = &report.tech_stack {
        blocks.push(Block::TechStack(tech_stack_card(stack)));
    }

    let visual = |title: &str, category: ImageCategory| {
        let criterion = category.criterion(website);
        let mut card = criteria_card(title, criterion);
        card.placeholder = placeholder_view(category, criterion, images);
        card
    };

    blocks.push(Block::Group {
        title: "Visual Branding",
        cards: vec![
            visual("Logo & Visual Identity", ImageCategory::Logo),
            visual("Color Palette", ImageCategory::ColorPalette),
            visual("Imagery & Visuals", ImageCategory::Imagery),
            criteria_card("Iconography & Visual Elements", website.iconography.as_ref()),
        ],
    });

    blocks.push(Block::Group {
        title: "SEO & Technical Analysis",
        cards: vec![
            criteria_card("SEO: Meta Descriptions", website.seo_meta_description.as_ref()),
            criteria_card("SEO: Keyword Usage", website.seo_keywords.as_ref()),
            criteria_card("SEO: Mobile Friendliness", website.seo_mobile_friendly.as_ref()),
            criteria_card("SEO: Schema Markup", website.seo_schema_markup.as_ref()),
            criteria_card("SEO: Site Speed", website.seo_site_speed.as_ref()),
        ],
    });

    SectionView {
        id: SectionId::WebsiteAnalysis,
        title: "Website Analysis",
        blocks,
    }
}

fn criteria_card(title: &str, criterion: Option<&CriteriaAudit>) -> CriteriaCard {
    let Some(criterion) = criterion else {
        return CriteriaCard {
            title: title.to_string(),
            available: false,
            score: None,
            analysis: Vec::new(),
            note: Some(CRITERIA_NOT_AVAILABLE),
            placeholder: None,
        };
    };

    CriteriaCard {
        title: title.to_string(),
        available: true,
        score: criterion.score.map(ScoreView::new),
        analysis: criterion.analysis.clone(),
        note: criterion.analysis.is_empty().then_some(NO_ANALYSIS_POINTS),
        placeholder: None,
    }
}

/// Pending and ready images on eligible criteria. Failed generations show nothing.
fn placeholder_view(
    category: ImageCategory,
    criterion: Option<&CriteriaAudit>,
    images: &PlaceholderImages,
) -> Option<PlaceholderView> {
    if !is_eligible(criterion) {
        return None;
    }
    let caption = match images.get(category)? {
        ImageSlot::Pending => "Generating AI Suggestion...".to_string(),
        ImageSlot::Ready { .. } => format!(
            "This is an AI-generated concept to inspire improvements for your {}.",
            category.label()
        ),
        ImageSlot::Unavailable => return None,
    };
    Some(PlaceholderView {
        category,
        slot: images.get(category)?.clone(),
        caption,
    })
}

fn traffic_card(traffic: &TrafficInsightsAudit) -> TrafficCard {
    TrafficCard {
        estimated_monthly_visits: traffic
            .estimated_monthly_visits
            .clone()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        engagement_level: traffic
            .engagement_level
            .clone()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        analysis: traffic.analysis.clone(),
        disclaimer: TRAFFIC_DISCLAIMER,
    }
}

fn tech_stack_card(stack: &TechStackAudit) -> TechStackCard {
    TechStackCard {
        tools_detected: stack.tools_detected.clone(),
        note: stack.tools_detected.is_empty().then_some(NO_TOOLS_DETECTED),
        analysis: stack.analysis.clone(),
    }
}

fn competitor_card(competitor: &CompetitorComparison) -> CompetitorCard {
    CompetitorCard {
        name: competitor
            .competitor_name
            .clone()
            .unwrap_or_else(|| "Competitor".to_string()),
        url: competitor.competitor_url.clone(),
        comparison_points: competitor.comparison_points.clone(),
        note: competitor
            .comparison_points
            .is_empty()
            .then_some(NO_COMPARISON_DATA),
    }
}

fn social_card(social: &SocialMediaPlatformAudit) -> SocialCard {
    SocialCard {
        platform: social.platform.clone(),
        overall_score: social.overall_score.map(ScoreView::new),
        criteria: vec![
            criteria_card("Profile Branding", social.profile_branding.as_ref()),
            criteria_card("Content Consistency", social.content_consistency.as_ref()),
            criteria_card("Engagement Tactics", social.engagement_tactics.as_ref()),
        ],
        actionable_tips: social.actionable_tips.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion(score: u8) -> Option<CriteriaAudit> {
        Some(CriteriaAudit {
            score: Some(score),
            analysis: vec![AnalysisItem::new("Observed", "Because")],
        })
    }

    fn full(view: ReportView) -> FullReportView {
        match view {
            ReportView::Report(report) => *report,
            other => panic!("expected full report, got {other:?}"),
        }
    }

    fn minimal_report() -> BrandReport {
        BrandReport {
            business_name: "Creative Solutions Inc.".to_string(),
            overall_score: 78,
            summary: Some("Strong foundation.".to_string()),
            ..Default::default()
        }
    }

    fn complete(report: BrandReport) -> AuditResult {
        AuditResult::Complete(Box::new(report))
    }

    #[test]
    fn test_score_bands_and_tones() {
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(40), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::from_score(39), ScoreBand::Poor);
        assert_eq!(ScoreTone::from_score(75), ScoreTone::Strong);
        assert_eq!(ScoreTone::from_score(74), ScoreTone::Fair);
        assert_eq!(ScoreTone::from_score(49), ScoreTone::Weak);
        assert_eq!(
            ScoreView::new(62).description,
            "Score: 62/100 - Good performance. There are minor opportunities for improvement."
        );
    }

    #[test]
    fn test_name_mismatch_renders_notice() {
        let result = AuditResult::NameMismatch {
            business_name: "Creative".to_string(),
            summary: "Error: Business name mismatch.".to_string(),
        };
        let view = build_view(&result, &PlaceholderImages::default());
        assert_eq!(
            view,
            ReportView::Notice(NoticeView {
                title: "Audit Notice for Creative".to_string(),
                message: "Error: Business name mismatch.".to_string(),
                action: "Check Inputs",
            })
        );
    }

    #[test]
    fn test_minimal_report_only_has_recommendations_section() {
        let view = full(build_view(
            &complete(minimal_report()),
            &PlaceholderImages::default(),
        ));
        assert_eq!(view.sections.len(), 1);
        let recs = view.section(SectionId::KeyRecommendations).unwrap();
        assert_eq!(
            recs.blocks,
            vec![Block::Note {
                text: NO_RECOMMENDATIONS
            }]
        );
        assert!(view.section(SectionId::CompetitorComparison).is_none());
        assert!(view.section(SectionId::WebsiteAnalysis).is_none());
    }

    #[test]
    fn test_missing_competitor_analysis_omits_section() {
        let report = BrandReport {
            website_analysis: Some(WebsiteAudit::default()),
            reputation_analysis: criterion(80),
            ..minimal_report()
        };
        let view = full(build_view(&complete(report), &PlaceholderImages::default()));
        let ids: Vec<_> = view.sections.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec![
                SectionId::KeyRecommendations,
                SectionId::WebsiteAnalysis,
                SectionId::OnlineReputation
            ]
        );
    }

    #[test]
    fn test_missing_criterion_renders_not_available_card() {
        let report = BrandReport {
            website_analysis: Some(WebsiteAudit {
                logo: criterion(90),
                ..Default::default()
            }),
            ..minimal_report()
        };
        let view = full(build_view(&complete(report), &PlaceholderImages::default()));
        let website = view.section(SectionId::WebsiteAnalysis).unwrap();
        let Block::Group { cards, .. } = &website.blocks[1] else {
            panic!("expected visual branding group");
        };
        assert!(cards[0].available);
        assert_eq!(cards[0].score.as_ref().map(|s| s.value), Some(90));
        assert!(!cards[1].available);
        assert_eq!(cards[1].note, Some(CRITERIA_NOT_AVAILABLE));
    }

    #[test]
    fn test_placeholder_only_on_low_scores() {
        let report = BrandReport {
            website_analysis: Some(WebsiteAudit {
                logo: criterion(45),
                color_palette: criterion(88),
                imagery: criterion(30),
                ..Default::default()
            }),
            ..minimal_report()
        };
        let mut images = PlaceholderImages::pending(&[ImageCategory::Logo, ImageCategory::Imagery]);
        images.set(ImageCategory::ColorPalette, ImageSlot::Pending);
        images.set(ImageCategory::Imagery, ImageSlot::Unavailable);

        let view = full(build_view(&complete(report), &images));
        let website = view.section(SectionId::WebsiteAnalysis).unwrap();
        let Block::Group { cards, .. } = &website.blocks[1] else {
            panic!("expected visual branding group");
        };
        let logo = cards[0].placeholder.as_ref().unwrap();
        assert_eq!(logo.slot, ImageSlot::Pending);
        assert!(cards[1].placeholder.is_none());
        assert!(cards[2].placeholder.is_none());
    }

    #[test]
    fn test_ready_placeholder_caption_names_category() {
        let report = BrandReport {
            website_analysis: Some(WebsiteAudit {
                color_palette: criterion(20),
                ..Default::default()
            }),
            ..minimal_report()
        };
        let mut images = PlaceholderImages::default();
        images.set(
            ImageCategory::ColorPalette,
            ImageSlot::Ready {
                data_url: "data:image/png;base64,AAAA".to_string(),
            },
        );
        let view = full(build_view(&complete(report), &images));
        let website = view.section(SectionId::WebsiteAnalysis).unwrap();
        let Block::Group { cards, .. } = &website.blocks[1] else {
            panic!("expected visual branding group");
        };
        assert_eq!(
            cards[1].placeholder.as_ref().unwrap().caption,
            "This is an AI-generated concept to inspire improvements for your color palette."
        );
    }

    #[test]
    fn test_traffic_and_tech_stack_defaults() {
        let report = BrandReport {
            website_analysis: Some(WebsiteAudit::default()),
            traffic_insights: Some(TrafficInsightsAudit::default()),
            tech_stack: Some(TechStackAudit::default()),
            ..minimal_report()
        };
        let view = full(build_view(&complete(report), &PlaceholderImages::default()));
        let website = view.section(SectionId::WebsiteAnalysis).unwrap();
        match (&website.blocks[1], &website.blocks[2]) {
            (Block::Traffic(traffic), Block::TechStack(stack)) => {
                assert_eq!(traffic.estimated_monthly_visits, "N/A");
                assert_eq!(stack.note, Some(NO_TOOLS_DETECTED));
            }
            other => panic!("unexpected blocks {other:?}"),
        }
    }

    #[test]
    fn test_compliance_summary_without_social_has_no_checks() {
        let report = BrandReport {
            brand_compliance_summary: Some("Mostly consistent.".to_string()),
            website_analysis: Some(WebsiteAudit {
                logo: criterion(40),
                ..Default::default()
            }),
            ..minimal_report()
        };
        let view = full(build_view(&complete(report), &PlaceholderImages::default()));
        let compliance = view.section(SectionId::BrandCompliance).unwrap();
        assert_eq!(compliance.blocks.len(), 1);
    }
}
