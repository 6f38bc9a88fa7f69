// ============================================================================
// Service Identifiers - closed enumeration of supported integrations
// ============================================================================
// Each variant maps to exactly one lowercase wire token (e.g. "facebook",
// "gdocs"). The tokens are compatibility-critical: external APIs key
// credentials and operations by these exact strings, so values here must
// never be renamed.
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier for a third-party service integration.
///
/// Serializes as its bare wire token (`Service::Facebook` -> `"facebook"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Service {
    #[serde(rename = "google")]
    Google,
    #[serde(rename = "instagram")]
    Instagram,
    #[serde(rename = "twitter")]
    Twitter,
    #[serde(rename = "zeo")]
    Zeo,
    #[serde(rename = "linkedin")]
    LinkedIn,
    #[serde(rename = "tumblr")]
    Tumblr,
    #[serde(rename = "gdocs")]
    GoogleDocs,
    #[serde(rename = "gcontacts")]
    GoogleContacts,
    #[serde(rename = "fitbit")]
    Fitbit,
    #[serde(rename = "gmail")]
    Gmail,
    #[serde(rename = "meetup")]
    Meetup,
    #[serde(rename = "foursquare")]
    Foursquare,
    #[serde(rename = "wordpress")]
    WordPress,
    #[serde(rename = "runkeeper")]
    RunKeeper,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "bodymedia")]
    BodyMedia,
    #[serde(rename = "facebook")]
    Facebook,
    #[serde(rename = "dropbox")]
    Dropbox,
    #[serde(rename = "yammer")]
    Yammer,
    #[serde(rename = "gplus")]
    GooglePlus,
    #[serde(rename = "github")]
    GitHub,
    #[serde(rename = "withings")]
    Withings,
}

/// Returned when a string does not match any known service token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown service token: {0:?}")]
pub struct UnknownServiceError(pub String);

impl Service {
    /// Every known service, in declaration order.
    pub const ALL: [Service; 22] = [
        Service::Google,
        Service::Instagram,
        Service::Twitter,
        Service::Zeo,
        Service::LinkedIn,
        Service::Tumblr,
        Service::GoogleDocs,
        Service::GoogleContacts,
        Service::Fitbit,
        Service::Gmail,
        Service::Meetup,
        Service::Foursquare,
        Service::WordPress,
        Service::RunKeeper,
        Service::Email,
        Service::BodyMedia,
        Service::Facebook,
        Service::Dropbox,
        Service::Yammer,
        Service::GooglePlus,
        Service::GitHub,
        Service::Withings,
    ];

    /// The canonical wire token for this service.
    pub fn token(&self) -> &'static str {
        match self {
            Service::Google => "google",
            Service::Instagram => "instagram",
            Service::Twitter => "twitter",
            Service::Zeo => "zeo",
            Service::LinkedIn => "linkedin",
            Service::Tumblr => "tumblr",
            Service::GoogleDocs => "gdocs",
            Service::GoogleContacts => "gcontacts",
            Service::Fitbit => "fitbit",
            Service::Gmail => "gmail",
            Service::Meetup => "meetup",
            Service::Foursquare => "foursquare",
            Service::WordPress => "wordpress",
            Service::RunKeeper => "runkeeper",
            Service::Email => "email",
            Service::BodyMedia => "bodymedia",
            Service::Facebook => "facebook",
            Service::Dropbox => "dropbox",
            Service::Yammer => "yammer",
            Service::GooglePlus => "gplus",
            Service::GitHub => "github",
            Service::Withings => "withings",
        }
    }

    /// Human-readable name suitable for display in UIs and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Service::Google => "Google",
            Service::Instagram => "Instagram",
            Service::Twitter => "Twitter",
            Service::Zeo => "Zeo",
            Service::LinkedIn => "LinkedIn",
            Service::Tumblr => "Tumblr",
            Service::GoogleDocs => "Google Docs",
            Service::GoogleContacts => "Google Contacts",
            Service::Fitbit => "Fitbit",
            Service::Gmail => "Gmail",
            Service::Meetup => "Meetup",
            Service::Foursquare => "Foursquare",
            Service::WordPress => "WordPress",
            Service::RunKeeper => "RunKeeper",
            Service::Email => "Email",
            Service::BodyMedia => "BodyMedia",
            Service::Facebook => "Facebook",
            Service::Dropbox => "Dropbox",
            Service::Yammer => "Yammer",
            Service::GooglePlus => "Google+",
            Service::GitHub => "GitHub",
            Service::Withings => "Withings",
        }
    }

    /// Reverse lookup from a wire token. Exact match only; tokens are
    /// lowercase by definition, so no normalization is applied.
    pub fn from_token(token: &str) -> Option<Service> {
        Service::ALL.iter().copied().find(|s| s.token() == token)
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Service {
    type Err = UnknownServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::from_token(s).ok_or_else(|| UnknownServiceError(s.to_string()))
    }
}

impl TryFrom<&str> for Service {
    type Error = UnknownServiceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn tokens_are_nonempty_lowercase_ascii() {
        for service in Service::ALL {
            let token = service.token();
            assert!(!token.is_empty(), "{:?} has an empty token", service);
            assert!(
                token.chars().all(|c| c.is_ascii_lowercase()),
                "{:?} token {:?} is not lowercase ASCII",
                service,
                token
            );
        }
    }

    #[test]
    fn tokens_are_pairwise_distinct() {
        let unique: HashSet<&str> = Service::ALL.iter().map(|s| s.token()).collect();
        assert_eq!(unique.len(), Service::ALL.len());
    }

    #[test]
    fn token_set_is_stable() {
        let expected = [
            "google",
            "instagram",
            "twitter",
            "zeo",
            "linkedin",
            "tumblr",
            "gdocs",
            "gcontacts",
            "fitbit",
            "gmail",
            "meetup",
            "foursquare",
            "wordpress",
            "runkeeper",
            "email",
            "bodymedia",
            "facebook",
            "dropbox",
            "yammer",
            "gplus",
            "github",
            "withings",
        ];
        let actual: Vec<&str> = Service::ALL.iter().map(|s| s.token()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn well_known_tokens() {
        assert_eq!(Service::Facebook.token(), "facebook");
        assert_eq!(Service::Google.token(), "google");
        assert_eq!(Service::GoogleDocs.token(), "gdocs");
        assert_eq!(Service::GooglePlus.token(), "gplus");
    }

    #[test]
    fn from_token_round_trips_every_service() {
        for service in Service::ALL {
            assert_eq!(Service::from_token(service.token()), Some(service));
        }
    }

    #[test]
    fn from_token_rejects_unknown_and_wrong_case() {
        assert_eq!(Service::from_token("myspace"), None);
        assert_eq!(Service::from_token("Facebook"), None);
        assert_eq!(Service::from_token(""), None);
    }

    #[test]
    fn from_str_reports_rejected_token() {
        let err = "orkut".parse::<Service>().unwrap_err();
        assert_eq!(err, UnknownServiceError("orkut".to_string()));
        assert_eq!(err.to_string(), "unknown service token: \"orkut\"");
    }

    #[test]
    fn display_writes_the_wire_token() {
        assert_eq!(Service::LinkedIn.to_string(), "linkedin");
        assert_eq!(Service::Withings.to_string(), "withings");
    }

    #[test]
    fn serde_uses_bare_tokens() {
        for service in Service::ALL {
            let json = serde_json::to_string(&service).unwrap();
            assert_eq!(json, format!("\"{}\"", service.token()));
            let back: Service = serde_json::from_str(&json).unwrap();
            assert_eq!(back, service);
        }
        assert!(serde_json::from_str::<Service>("\"myspace\"").is_err());
    }
}
