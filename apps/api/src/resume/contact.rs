//! Contact-Info Extractor: best-effort name/email/phone lookup in resume text.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "Candidate";
pub const DEFAULT_EMAIL: &str = "[Email Address]";
pub const DEFAULT_PHONE: &str = "[Phone Number]";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            phone: DEFAULT_PHONE.to_string(),
        }
    }
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
            .expect("phone pattern is valid")
    })
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
            .expect("email pattern is valid")
    })
}

/// Pulls contact details out of free text. Fields not found keep their placeholder.
pub fn extract_contact_info(text: &str) -> ContactInfo {
    let mut info = ContactInfo::default();

    if let Some(m) = phone_re().find(text) {
        info.phone = m.as_str().to_string();
    }
    if let Some(m) = email_re().find(text) {
        info.email = m.as_str().to_string();
    }
    if let Some(name) = text.lines().map(str::trim).find(|line| looks_like_name(line)) {
        info.name = name.to_string();
    }

    info
}

/// 2–4 whitespace-separated tokens and no digits.
fn looks_like_name(line: &str) -> bool {
    let tokens = line.split_whitespace().count();
    (2..=4).contains(&tokens) && !line.chars().any(|c| c.is_numeric())
}
