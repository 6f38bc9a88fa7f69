//! Raw wire tokens as flat string constants.
//!
//! Callers that key dictionaries or request parameters by literal token can
//! use these directly instead of going through [`Service`](crate::Service).
//! The values here must stay in lockstep with `Service::token`.

pub const GOOGLE: &str = "google";
pub const INSTAGRAM: &str = "instagram";
pub const TWITTER: &str = "twitter";
pub const ZEO: &str = "zeo";
pub const LINKEDIN: &str = "linkedin";
pub const TUMBLR: &str = "tumblr";
pub const GDOCS: &str = "gdocs";
pub const GCONTACTS: &str = "gcontacts";
pub const FITBIT: &str = "fitbit";
pub const GMAIL: &str = "gmail";
pub const MEETUP: &str = "meetup";
pub const FOURSQUARE: &str = "foursquare";
pub const WORDPRESS: &str = "wordpress";
pub const RUNKEEPER: &str = "runkeeper";
pub const EMAIL: &str = "email";
pub const BODYMEDIA: &str = "bodymedia";
pub const FACEBOOK: &str = "facebook";
pub const DROPBOX: &str = "dropbox";
pub const YAMMER: &str = "yammer";
pub const GPLUS: &str = "gplus";
pub const GITHUB: &str = "github";
pub const WITHINGS: &str = "withings";
