use serde::{Deserialize, Serialize};

/// Social platforms the audit form collects a link for, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    Twitter,
    Linkedin,
    Tiktok,
    Youtube,
    GoogleBusiness,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 7] = [
        SocialPlatform::Facebook,
        SocialPlatform::Instagram,
        SocialPlatform::Twitter,
        SocialPlatform::Linkedin,
        SocialPlatform::Tiktok,
        SocialPlatform::Youtube,
        SocialPlatform::GoogleBusiness,
    ];

    /// Form field key, matching the camelCase wire name.
    pub fn key(self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Tiktok => "tiktok",
            SocialPlatform::Youtube => "youtube",
            SocialPlatform::GoogleBusiness => "googleBusiness",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Twitter => "Twitter (X)",
            SocialPlatform::Linkedin => "LinkedIn",
            SocialPlatform::Tiktok => "TikTok",
            SocialPlatform::Youtube => "YouTube",
            SocialPlatform::GoogleBusiness => "Google Business",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "facebook.com/yourpage",
            SocialPlatform::Instagram => "instagram.com/yourprofile",
            SocialPlatform::Twitter => "twitter.com/yourhandle",
            SocialPlatform::Linkedin => "linkedin.com/company/your-company",
            SocialPlatform::Tiktok => "tiktok.com/@yourusername",
            SocialPlatform::Youtube => "youtube.com/c/yourchannel",
            SocialPlatform::GoogleBusiness => "g.page/your-business",
        }
    }

    /// Matches a platform name as written by the model ("Twitter (X)",
    /// "Google Business", "LinkedIn") against the form keys.
    pub fn from_reported_name(name: &str) -> Option<Self> {
        let lowered = name.trim().to_lowercase();
        let lowered = lowered.strip_suffix("(x)").unwrap_or(&lowered);
        let normalized: String = lowered.chars().filter(|c| !c.is_whitespace()).collect();
        Self::ALL
            .into_iter()
            .find(|p| p.key().to_lowercase() == normalized)
    }
}

/// One optional link per platform. Empty strings count as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLinks {
    pub facebook: String,
    pub twitter: String,
    pub instagram: String,
    pub linkedin: String,
    pub tiktok: String,
    pub youtube: String,
    pub google_business: String,
}

impl SocialLinks {
    pub fn get(&self, platform: SocialPlatform) -> &str {
        match platform {
            SocialPlatform::Facebook => &self.facebook,
            SocialPlatform::Instagram => &self.instagram,
            SocialPlatform::Twitter => &self.twitter,
            SocialPlatform::Linkedin => &self.linkedin,
            SocialPlatform::Tiktok => &self.tiktok,
            SocialPlatform::Youtube => &self.youtube,
            SocialPlatform::GoogleBusiness => &self.google_business,
        }
    }

    /// Platforms with a non-blank link, in form order.
    pub fn provided(&self) -> impl Iterator<Item = (SocialPlatform, &str)> + '_ {
        SocialPlatform::ALL
            .into_iter()
            .map(move |p| (p, self.get(p).trim()))
            .filter(|(_, url)| !url.is_empty())
    }

    pub fn is_provided(&self, platform: SocialPlatform) -> bool {
        !self.get(platform).trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerReputation {
    pub reviews_count: String,
    pub average_rating: String,
}

/// Raw form submission, exactly as the client sends it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditFormData {
    pub business_name: String,
    pub contact_email: String,
    pub website_url: String,
    pub social_media: SocialLinks,
    pub customer_reputation: CustomerReputation,
    pub competitors: Vec<String>,
}
