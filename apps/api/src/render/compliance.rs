//! Brand compliance checks: website visuals compared against social profiles.

use serde::Serialize;

use crate::models::report::{CriteriaAudit, SocialMediaPlatformAudit, WebsiteAudit};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComplianceFinding {
    Strength { text: String },
    Opportunity { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceCheck {
    pub category: &'static str,
    pub finding: ComplianceFinding,
}

struct Rule {
    category: &'static str,
    strong_above: u8,
    weak_below: u8,
    strength: &'static str,
    opportunity: &'static str,
}

const LOGO: Rule = Rule {
    category: "Logo & Visual Identity",
    strong_above: 80,
    weak_below: 60,
    strength: "Excellent consistency in logo usage between the website and social media \
        profiles, reinforcing brand recognition.",
    opportunity: "Inconsistent logo application or quality noted between the website and \
        social media profiles. Ensuring the same high-resolution logo is used everywhere is \
        crucial.",
};

const COLOR_PALETTE: Rule = Rule {
    category: "Color Palette",
    strong_above: 80,
    weak_below: 60,
    strength: "The brand's color palette is applied consistently across the website and \
        social channels, creating a cohesive user experience.",
    opportunity: "Discrepancies in the use of brand colors were observed between the website \
        and social media, which can dilute the brand's visual identity.",
};

const TYPOGRAPHY: Rule = Rule {
    category: "Typography",
    strong_above: 75,
    weak_below: 60,
    strength: "Consistent use of fonts and text styles helps maintain a professional and \
        readable brand voice across all digital touchpoints.",
    opportunity: "Typography varies between the website and social media content, potentially \
        confusing the brand's voice and weakening its professional appearance.",
};

const IMAGERY: Rule = Rule {
    category: "Imagery & Tone",
    strong_above: 75,
    weak_below: 60,
    strength: "The style of imagery and overall tone is consistent, presenting a unified brand \
        personality on the website and social platforms.",
    opportunity: "The visual tone and style of imagery differ significantly between the \
        website and social media, creating a disjointed brand experience for the audience.",
};

/// Strengths and opportunities for the four visual categories.
///
/// Logo, colour and typography are weighed against the average social
/// profile-branding score; imagery against the average content-consistency
/// score. A category with no website score yields no finding unless the
/// social average alone is weak.
pub fn compliance_checks(
    website: &WebsiteAudit,
    social: &[SocialMediaPlatformAudit],
) -> Vec<ComplianceCheck> {
    let branding = average(social, |s| s.profile_branding.as_ref());
    let content = average(social, |s| s.content_consistency.as_ref());

    [
        (&LOGO, website.logo.as_ref(), branding),
        (&COLOR_PALETTE, website.color_palette.as_ref(), branding),
        (&TYPOGRAPHY, website.typography.as_ref(), branding),
        (&IMAGERY, website.imagery.as_ref(), content),
    ]
    .into_iter()
    .filter_map(|(rule, criterion, social_avg)| {
        evaluate(rule, criterion.and_then(|c| c.score), social_avg, !social.is_empty())
    })
    .collect()
}

fn evaluate(
    rule: &Rule,
    website_score: Option<u8>,
    social_avg: f64,
    has_social: bool,
) -> Option<ComplianceCheck> {
    let strong = f64::from(rule.strong_above);
    let weak = f64::from(rule.weak_below);

    let finding = if website_score.is_some_and(|s| s > rule.strong_above) && social_avg > strong {
        ComplianceFinding::Strength {
            text: rule.strength.to_string(),
        }
    } else if website_score.is_some_and(|s| s < rule.weak_below) || (has_social && social_avg < weak)
    {
        ComplianceFinding::Opportunity {
            text: rule.opportunity.to_string(),
        }
    } else {
        return None;
    };

    Some(ComplianceCheck {
        category: rule.category,
        finding,
    })
}

/// Mean score across platforms, counting a missing criterion as zero.
fn average<F>(social: &[SocialMediaPlatformAudit], pick: F) -> f64
where
    F: Fn(&SocialMediaPlatformAudit) -> Option<&CriteriaAudit>,
{
    if social.is_empty() {
        return 0.0;
    }
    let total: u32 = social
        .iter()
        .map(|s| u32::from(pick(s).and_then(|c| c.score).unwrap_or(0)))
        .sum();
    f64::from(total) / social.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(score: u8) -> Option<CriteriaAudit> {
        Some(CriteriaAudit {
            score: Some(score),
            analysis: Vec::new(),
        })
    }

    fn platform(branding: u8, content: u8) -> SocialMediaPlatformAudit {
        SocialMediaPlatformAudit {
            platform: "Instagram".to_string(),
            profile_branding: scored(branding),
            content_consistency: scored(content),
            ..Default::default()
        }
    }

    fn category_finding(checks: &[ComplianceCheck], category: &str) -> Option<ComplianceFinding> {
        checks
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.finding.clone())
    }

    #[test]
    fn test_strong_website_and_social_is_strength() {
        let website = WebsiteAudit {
            logo: scored(90),
            ..Default::default()
        };
        let checks = compliance_checks(&website, &[platform(85, 70), platform(95, 70)]);
        assert!(matches!(
            category_finding(&checks, "Logo & Visual Identity"),
            Some(ComplianceFinding::Strength { .. })
        ));
    }

    #[test]
    fn test_weak_social_average_flags_opportunity() {
        let website = WebsiteAudit {
            color_palette: scored(70),
            ..Default::default()
        };
        let checks = compliance_checks(&website, &[platform(40, 90), platform(60, 90)]);
        assert!(matches!(
            category_finding(&checks, "Color Palette"),
            Some(ComplianceFinding::Opportunity { .. })
        ));
    }

    #[test]
    fn test_middling_scores_yield_no_finding() {
        let website = WebsiteAudit {
            typography: scored(70),
            imagery: scored(70),
            ..Default::default()
        };
        let checks = compliance_checks(&website, &[platform(70, 70)]);
        assert!(category_finding(&checks, "Typography").is_none());
        assert!(category_finding(&checks, "Imagery & Tone").is_none());
    }

    #[test]
    fn test_imagery_uses_content_consistency() {
        let website = WebsiteAudit {
            imagery: scored(80),
            ..Default::default()
        };
        let checks = compliance_checks(&website, &[platform(10, 90)]);
        assert!(matches!(
            category_finding(&checks, "Imagery & Tone"),
            Some(ComplianceFinding::Strength { .. })
        ));
    }

    #[test]
    fn test_missing_social_criterion_counts_as_zero() {
        let website = WebsiteAudit {
            logo: scored(95),
            ..Default::default()
        };
        let half = SocialMediaPlatformAudit {
            platform: "Facebook".to_string(),
            ..Default::default()
        };
        // (100 + 0) / 2 = 50, below the weak threshold
        let checks = compliance_checks(&website, &[platform(100, 100), half]);
        assert!(matches!(
            category_finding(&checks, "Logo & Visual Identity"),
            Some(ComplianceFinding::Opportunity { .. })
        ));
    }
}
