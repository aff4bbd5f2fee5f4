//! Form validation: presence and shape checks on the submitted business profile.
//!
//! All failures are collected per field so the client can show them inline.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::models::form::AuditFormData;

/// Competitor URLs compared per audit.
pub const MAX_COMPETITORS: usize = 2;

/// Field name (camelCase, as submitted) → message.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    fn add(&mut self, field: &'static str, message: &str) {
        self.0.insert(field, message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// A form that passed validation. Text fields are trimmed and blank
/// competitor entries removed.
#[derive(Debug, Clone)]
pub struct ValidatedForm(AuditFormData);

impl ValidatedForm {
    pub fn data(&self) -> &AuditFormData {
        &self.0
    }

    pub fn business_name(&self) -> &str {
        &self.0.business_name
    }
}

fn url_pattern() -> &'static Regex {
    static URL: OnceLock<Regex> = OnceLock::new();
    URL.get_or_init(|| {
        Regex::new(r"^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w .-]*)*/?$")
            .expect("url pattern is valid")
    })
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"))
}

pub fn validate_form(form: AuditFormData) -> Result<ValidatedForm, FieldErrors> {
    let mut errors = FieldErrors::default();

    let business_name = form.business_name.trim().to_string();
    let website_url = form.website_url.trim().to_string();
    let contact_email = form.contact_email.trim().to_string();

    if business_name.is_empty() {
        errors.add("businessName", "Business name is required.");
    }

    if website_url.is_empty() {
        errors.add("websiteUrl", "Website URL is required.");
    } else if !url_pattern().is_match(&website_url) {
        errors.add("websiteUrl", "Please enter a valid URL.");
    }

    if contact_email.is_empty() {
        errors.add("contactEmail", "Email is required.");
    } else if !email_pattern().is_match(&contact_email) {
        errors.add("contactEmail", "Please enter a valid email address.");
    }

    let competitors: Vec<String> = form
        .competitors
        .iter()
        .map(|url| url.trim())
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect();

    if competitors.len() > MAX_COMPETITORS {
        errors.add(
            "competitors",
            "At most 2 competitor URLs can be compared.",
        );
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidatedForm(AuditFormData {
        business_name,
        website_url,
        contact_email,
        competitors,
        ..form
    }))
}
