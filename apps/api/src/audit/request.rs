//! Request builder: turns a validated form into the audit prompt.

use std::sync::OnceLock;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::{Captures, Regex};

use crate::audit::form_validation::ValidatedForm;
use crate::audit::prompts::AUDIT_PROMPT_TEMPLATE;
use crate::models::form::{AuditFormData, CustomerReputation};

fn placeholder_pattern() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"))
}

/// Builds the user prompt for one audit. `scan_timestamp` is embedded in the
/// summary template so reports can be traced back to the scan.
///
/// Placeholders are filled in one pass, so submitted text is never expanded.
pub fn build_prompt(form: &ValidatedForm, scan_timestamp: DateTime<Utc>) -> String {
    let data = form.data();
    let reputation = reputation_line(&data.customer_reputation);
    let social = social_lines(data);
    let competitors = competitor_lines(&data.competitors);
    let timestamp = scan_timestamp.to_rfc3339_opts(SecondsFormat::Millis, true);

    placeholder_pattern()
        .replace_all(AUDIT_PROMPT_TEMPLATE, |caps: &Captures| {
            let value = match &caps[1] {
                "business_name" => &data.business_name,
                "website_url" => &data.website_url,
                "reputation" => &reputation,
                "social_links" => &social,
                "competitors" => &competitors,
                "scan_timestamp" => &timestamp,
                _ => return caps[0].to_string(),
            };
            value.to_string()
        })
        .into_owned()
}

fn reputation_line(reputation: &CustomerReputation) -> String {
    let reviews = reputation.reviews_count.trim();
    let rating = reputation.average_rating.trim();
    if reviews.is_empty() || rating.is_empty() {
        return "- Not provided.".to_string();
    }
    format!("- {reviews} reviews with an average rating of {rating} out of 5.")
}

fn social_lines(data: &AuditFormData) -> String {
    let lines: Vec<String> = data
        .social_media
        .provided()
        .map(|(platform, url)| format!("- {}: {}", capitalize(platform.key()), url))
        .collect();

    if lines.is_empty() {
        "- None provided".to_string()
    } else {
        lines.join("\n")
    }
}

fn competitor_lines(competitors: &[String]) -> String {
    if competitors.is_empty() {
        return "- No competitors provided.".to_string();
    }
    competitors
        .iter()
        .map(|url| format!("- Competitor URL: {url}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
