//! Markdown export of a rendered report.

use std::fmt::Write as _;

use crate::images::ImageSlot;
use crate::models::report::AnalysisItem;
use crate::render::compliance::ComplianceFinding;
use crate::render::{
    Block, CompetitorCard, CriteriaCard, FullReportView, NoticeView, ReportView, ScoreView,
    SectionView, SocialCard, TechStackCard, TrafficCard,
};

pub fn to_markdown(view: &ReportView) -> String {
    let mut out = String::new();
    match view {
        ReportView::Notice(notice) => write_notice(&mut out, notice),
        ReportView::Report(report) => write_report(&mut out, report),
    }
    out
}

fn write_notice(out: &mut String, notice: &NoticeView) {
    let _ = writeln!(out, "# {}\n", notice.title);
    let _ = writeln!(out, "{}", notice.message);
}

fn write_report(out: &mut String, report: &FullReportView) {
    let _ = writeln!(out, "# Brand Audit Report for {}\n", report.business_name);
    let _ = writeln!(
        out,
        "**Overall Brand Health Score:** {}/100\n",
        report.overall.value
    );
    let _ = writeln!(out, "{}\n", report.overall.description);
    if !report.summary.is_empty() {
        let _ = writeln!(out, "{}\n", report.summary);
    }
    for section in &report.sections {
        write_section(out, section);
    }
}

fn write_section(out: &mut String, section: &SectionView) {
    let _ = writeln!(out, "## {}\n", section.title);
    for block in &section.blocks {
        write_block(out, block);
    }
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Paragraph { text } => {
            let _ = writeln!(out, "{text}\n");
        }
        Block::Note { text } => {
            let _ = writeln!(out, "_{text}_\n");
        }
        Block::Recommendations { items } => {
            for (i, item) in items.iter().enumerate() {
                let _ = writeln!(out, "{}. **{}**", i + 1, item.point);
                if !item.rationale.is_empty() {
                    let _ = writeln!(out, "   {}", item.rationale);
                }
            }
            out.push('\n');
        }
        Block::ScoreLine { label, score } => {
            let _ = writeln!(out, "**{label}:** {}\n", ScoreView::display(score.as_ref()));
        }
        Block::Traffic(card) => write_traffic(out, card),
        Block::TechStack(card) => write_tech_stack(out, card),
        Block::Group { title, cards } => {
            let _ = writeln!(out, "### {title}\n");
            for card in cards {
                write_criteria(out, card, "####");
            }
        }
        Block::Criteria(card) => write_criteria(out, card, "###"),
        Block::Competitor(card) => write_competitor(out, card),
        Block::Social(card) => write_social(out, card),
        Block::ComplianceChecks { checks } => {
            let _ = writeln!(out, "### Detailed Compliance Checks\n");
            for check in checks {
                let (label, text) = match &check.finding {
                    ComplianceFinding::Strength { text } => ("Strength", text),
                    ComplianceFinding::Opportunity { text } => ("Opportunity", text),
                };
                let _ = writeln!(out, "- **{}** ({label}): {text}", check.category);
            }
            out.push('\n');
        }
    }
}

fn write_criteria(out: &mut String, card: &CriteriaCard, heading: &str) {
    let _ = writeln!(out, "{heading} {}\n", card.title);
    if card.available {
        let _ = writeln!(out, "**Score:** {}\n", ScoreView::display(card.score.as_ref()));
        write_items(out, &card.analysis);
    }
    if let Some(note) = card.note {
        let _ = writeln!(out, "_{note}_\n");
    }
    if let Some(placeholder) = &card.placeholder {
        match &placeholder.slot {
            ImageSlot::Ready { data_url } => {
                let _ = writeln!(out, "![{}]({data_url})\n", placeholder.caption);
            }
            _ => {
                let _ = writeln!(out, "_{}_\n", placeholder.caption);
            }
        }
    }
}

fn write_traffic(out: &mut String, card: &TrafficCard) {
    let _ = writeln!(out, "### Traffic Insights\n");
    let _ = writeln!(
        out,
        "- **Est. Monthly Visits:** {}",
        card.estimated_monthly_visits
    );
    let _ = writeln!(out, "- **Engagement Level:** {}\n", card.engagement_level);
    write_items(out, &card.analysis);
    let _ = writeln!(out, "{}\n", card.disclaimer);
}

fn write_tech_stack(out: &mut String, card: &TechStackCard) {
    let _ = writeln!(out, "### Technology Stack\n");
    match card.note {
        Some(note) => {
            let _ = writeln!(out, "_{note}_\n");
        }
        None => {
            let _ = writeln!(out, "{}\n", card.tools_detected.join(", "));
        }
    }
    write_items(out, &card.analysis);
}

fn write_competitor(out: &mut String, card: &CompetitorCard) {
    match &card.url {
        Some(url) => {
            let _ = writeln!(out, "### {} ({url})\n", card.name);
        }
        None => {
            let _ = writeln!(out, "### {}\n", card.name);
        }
    }
    if let Some(note) = card.note {
        let _ = writeln!(out, "_{note}_\n");
    }
    write_items(out, &card.comparison_points);
}

fn write_social(out: &mut String, card: &SocialCard) {
    let _ = writeln!(
        out,
        "### {} ({})\n",
        card.platform,
        ScoreView::display(card.overall_score.as_ref())
    );
    for criteria in &card.criteria {
        write_criteria(out, criteria, "####");
    }
    if !card.actionable_tips.is_empty() {
        let _ = writeln!(out, "**Actionable Tips**\n");
        write_items(out, &card.actionable_tips);
    }
}

fn write_items(out: &mut String, items: &[AnalysisItem]) {
    if items.is_empty() {
        return;
    }
    for item in items {
        if item.rationale.is_empty() {
            let _ = writeln!(out, "- {}", item.point);
        } else {
            let _ = writeln!(out, "- {}: {}", item.point, item.rationale);
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::PlaceholderImages;
    use crate::models::report::{AuditResult, BrandReport, CriteriaAudit};
    use crate::render::{build_view, CRITERIA_NOT_AVAILABLE, NO_RECOMMENDATIONS};

    fn view_of(report: BrandReport) -> ReportView {
        build_view(
            &AuditResult::Complete(Box::new(report)),
            &PlaceholderImages::default(),
        )
    }

    #[test]
    fn test_notice_markdown() {
        let view = build_view(
            &AuditResult::NameMismatch {
                business_name: "Creative".to_string(),
                summary: "Business name mismatch detected.".to_string(),
            },
            &PlaceholderImages::default(),
        );
        assert_eq!(
            to_markdown(&view),
            "# Audit Notice for Creative\n\nBusiness name mismatch detected.\n"
        );
    }

    #[test]
    fn test_report_markdown_has_header_and_sections() {
        let md = to_markdown(&view_of(BrandReport {
            business_name: "Creative Solutions Inc.".to_string(),
            overall_score: 82,
            summary: Some("Strong foundation.".to_string()),
            key_recommendations: vec![AnalysisItem::new("Add schema", "Rich results")],
            reputation_analysis: Some(CriteriaAudit {
                score: None,
                analysis: Vec::new(),
            }),
            ..Default::default()
        }));

        assert!(md.starts_with("# Brand Audit Report for Creative Solutions Inc.\n"));
        assert!(md.contains("**Overall Brand Health Score:** 82/100"));
        assert!(md.contains("1. **Add schema**\n   Rich results"));
        assert!(md.contains("## Online Reputation Analysis"));
        assert!(md.contains("**Score:** N/A/100"));
        assert!(!md.contains("## Competitor Comparison"));
        assert!(!md.contains(NO_RECOMMENDATIONS));
    }

    #[test]
    fn test_missing_criteria_are_noted() {
        let md = to_markdown(&view_of(BrandReport {
            business_name: "Acme".to_string(),
            overall_score: 40,
            website_analysis: Some(Default::default()),
            ..Default::default()
        }));
        assert!(md.contains("#### Logo & Visual Identity"));
        assert!(md.contains(&format!("_{CRITERIA_NOT_AVAILABLE}_")));
        assert!(md.contains(NO_RECOMMENDATIONS));
    }
}
