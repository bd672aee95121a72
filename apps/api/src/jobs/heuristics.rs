//! Heuristics for turning general web-search hits into job listings.
//!
//! These are deliberately loose keyword checks. They will let some listing
//! pages through and drop some real postings.

use reqwest::Url;

use crate::resume::skills::title_case;

/// Links containing any of these are search/listing pages, not postings.
const PORTAL_KEYWORDS: &[&str] = &["search?", "jobs?", "browse", "find-jobs", "job-search"];

/// A link or title containing any of these probably points at a single posting.
const POSTING_INDICATORS: &[&str] = &[
    "hiring",
    "apply",
    "career",
    "jobs/view",
    "job-details",
    "opening",
    "vacancy",
];

const TITLE_SEPARATORS: &[&str] = &[" - ", " | ", " at "];
const DISPLAYED_LINK_SEPARATOR: &str = " › ";
const UNKNOWN_COMPANY: &str = "Unknown Company";

pub fn is_portal_link(link: &str) -> bool {
    let link = link.to_lowercase();
    PORTAL_KEYWORDS.iter().any(|k| link.contains(k))
}

pub fn is_job_posting(link: &str, title: &str) -> bool {
    let link = link.to_lowercase();
    let title = title.to_lowercase();
    POSTING_INDICATORS
        .iter()
        .any(|i| link.contains(i) || title.contains(i))
}

/// Keeps the part of a result title before the first " - ", " | " or " at ".
pub fn clean_job_title(title: &str) -> String {
    let cut = TITLE_SEPARATORS
        .iter()
        .filter_map(|sep| title.find(sep))
        .min()
        .unwrap_or(title.len());
    title[..cut].trim().to_string()
}

/// Best guess at the hiring company for a web-search hit.
///
/// Tries, in order: the title suffix after the last " - ", the first segment
/// of the displayed link, then the first label of the URL host.
pub fn extract_company_name(title: &str, displayed_link: &str, url: &str) -> String {
    if title.contains(" - ") {
        let suffix = title.rsplit(" - ").next().unwrap_or_default().trim();
        if !suffix.is_empty() && !mentions_any(suffix, &["jobs", "careers", "apply", "hiring"]) {
            return suffix.to_string();
        }
    }

    if !displayed_link.is_empty() {
        let head = displayed_link
            .split(DISPLAYED_LINK_SEPARATOR)
            .next()
            .unwrap_or_default()
            .trim();
        if !head.is_empty() && !mentions_any(head, &["www", "http", "jobs"]) {
            return head.to_string();
        }
    }

    company_from_url(url).unwrap_or_else(|| UNKNOWN_COMPANY.to_string())
}

fn company_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed
        .host_str()?
        .replace("www.", "")
        .replace("jobs.", "")
        .replace("careers.", "");
    let label = host.split('.').next().unwrap_or_default();
    if label.is_empty() {
        None
    } else {
        Some(title_case(label))
    }
}

fn mentions_any(text: &str, words: &[&str]) -> bool {
    let text = text.to_lowercase();
    words.iter().any(|w| text.contains(w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_job_title_splits_on_dash() {
        assert_eq!(clean_job_title("Senior Engineer - Acme Corp"), "Senior Engineer");
    }

    #[test]
    fn test_clean_job_title_uses_earliest_separator() {
        assert_eq!(clean_job_title("Data Engineer at Zeta | Careers - 2025"), "Data Engineer");
        assert_eq!(clean_job_title("SRE | Hiring now"), "SRE");
        assert_eq!(clean_job_title("Plain Title"), "Plain Title");
    }

    #[test]
    fn test_portal_links_detected() {
        assert!(is_portal_link("https://www.naukri.com/jobs?k=python"));
        assert!(is_portal_link("https://example.com/Find-Jobs/python"));
        assert!(!is_portal_link("https://www.linkedin.com/jobs/view/12345"));
    }

    #[test]
    fn test_posting_indicator_in_link_or_title() {
        assert!(is_job_posting("https://www.linkedin.com/jobs/view/12345", "Python Dev"));
        assert!(is_job_posting("https://acme.com/x", "Acme is Hiring Rust engineers"));
        assert!(!is_job_posting("https://blog.acme.com/post", "How we use Rust"));
    }

    #[test]
    fn test_company_from_title_suffix() {
        assert_eq!(
            extract_company_name("Backend Engineer - Razorpay", "", "https://x.com"),
            "Razorpay"
        );
    }

    #[test]
    fn test_company_skips_generic_title_suffix() {
        assert_eq!(
            extract_company_name(
                "Backend Engineer - Apply Now",
                "Swiggy › careers › backend",
                "https://careers.swiggy.com/123"
            ),
            "Swiggy"
        );
    }

    #[test]
    fn test_company_from_url_host() {
        assert_eq!(
            extract_company_name(
                "Backend Engineer opening",
                "https://www.zomato.com › careers",
                "https://careers.zomato.com/openings/42"
            ),
            "Zomato"
        );
        assert_eq!(
            extract_company_name("Opening", "", "https://www.phonepe.com/careers/"),
            "Phonepe"
        );
    }

    #[test]
    fn test_company_unknown_for_bad_url() {
        assert_eq!(extract_company_name("Opening", "", "not a url"), "Unknown Company");
        assert_eq!(extract_company_name("Opening", "", ""), "Unknown Company");
    }
}
