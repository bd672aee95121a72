//! Job Search Aggregator: three fallback tiers, each tried only when the one
//! before it errored or came back empty:
//!
//! 1. job-search engine (structured postings)
//! 2. general web search, filtered by posting heuristics
//! 3. a fixed list of eight postings
//!
//! Upstream failures never reach the caller; each tier's outcome is reported
//! in `JobSearchOutcome::tiers`.

use chrono::{Datelike, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::{SourceStatus, UpstreamError};
use crate::jobs::fallback::fallback_jobs;
use crate::jobs::heuristics::{
    clean_job_title, extract_company_name, is_job_posting, is_portal_link,
};
use crate::jobs::models::{truncate_description, JobListing};
use crate::jobs::normalize::top_terms;
use crate::search_client::{JobQuery, OrganicResult, RawJobPosting, SearchProvider, WebQuery};

pub const DEFAULT_LOCATION: &str = "India";
pub const DEFAULT_LIMIT: usize = 8;

const PRIMARY_QUERY_TERMS: usize = 5;
const ALTERNATIVE_QUERY_TERMS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobSource {
    JobSearch,
    WebSearch,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierReport {
    pub tier: JobSource,
    pub status: SourceStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobSearchOutcome {
    pub jobs: Vec<JobListing>,
    /// Tier that produced `jobs`.
    pub source: JobSource,
    /// Every live tier attempted, in order.
    pub tiers: Vec<TierReport>,
}

/// Runs the tiered search for already-normalized skills. Never returns an empty list.
pub async fn search_jobs(
    search: &dyn SearchProvider,
    skills: &[String],
    location: &str,
    limit: usize,
) -> JobSearchOutcome {
    let mut tiers = Vec::with_capacity(2);

    let primary = primary_search(search, skills, location, limit).await;
    let status = SourceStatus::of(&primary);
    log_tier(JobSource::JobSearch, &status);
    tiers.push(TierReport {
        tier: JobSource::JobSearch,
        status,
    });
    if let Ok(jobs) = primary {
        if !jobs.is_empty() {
            info!("Returning {} jobs from job search", jobs.len());
            return JobSearchOutcome {
                jobs,
                source: JobSource::JobSearch,
                tiers,
            };
        }
    }

    let alternative = alternative_search(search, skills, location, limit).await;
    let status = SourceStatus::of(&alternative);
    log_tier(JobSource::WebSearch, &status);
    tiers.push(TierReport {
        tier: JobSource::WebSearch,
        status,
    });
    if let Ok(jobs) = alternative {
        if !jobs.is_empty() {
            info!("Returning {} jobs from web search", jobs.len());
            return JobSearchOutcome {
                jobs,
                source: JobSource::WebSearch,
                tiers,
            };
        }
    }

    warn!("Using fallback jobs");
    JobSearchOutcome {
        jobs: fallback_jobs(),
        source: JobSource::Fallback,
        tiers,
    }
}

fn log_tier(tier: JobSource, status: &SourceStatus) {
    match status {
        SourceStatus::Ok => {}
        SourceStatus::NoResults => warn!("{tier:?} tier returned no jobs"),
        SourceStatus::Unavailable(reason) => warn!("{tier:?} tier failed: {reason}"),
    }
}

async fn primary_search(
    search: &dyn SearchProvider,
    skills: &[String],
    location: &str,
    limit: usize,
) -> Result<Vec<JobListing>, UpstreamError> {
    let query = JobQuery {
        q: format!(
            "{} jobs in {location}",
            top_terms(skills, PRIMARY_QUERY_TERMS).join(" ")
        ),
        location: location.to_string(),
    };
    info!("Job search query: {}", query.q);

    let postings = search.search_jobs(&query).await?;
    Ok(postings
        .into_iter()
        .take(limit)
        .map(|posting| listing_from_posting(posting, location))
        .collect())
}

async fn alternative_search(
    search: &dyn SearchProvider,
    skills: &[String],
    location: &str,
    limit: usize,
) -> Result<Vec<JobListing>, UpstreamError> {
    let query = WebQuery {
        q: format!(
            "{} job openings {location} apply {}",
            top_terms(skills, ALTERNATIVE_QUERY_TERMS).join(" "),
            Utc::now().year()
        ),
        num: (limit * 2) as u32,
    };
    info!("Alternative search query: {}", query.q);

    let results = search.search_web(&query).await?;
    Ok(results
        .iter()
        .filter(|r| !is_portal_link(&r.link) && is_job_posting(&r.link, &r.title))
        .take(limit)
        .map(|r| listing_from_web_result(r, location))
        .collect())
}

/// Maps a structured posting, filling gaps with defaults. The link prefers the
/// first apply option, then the share URL.
pub fn listing_from_posting(posting: RawJobPosting, location: &str) -> JobListing {
    let link = posting
        .apply_options
        .into_iter()
        .next()
        .and_then(|option| option.link)
        .or(posting.share_url)
        .unwrap_or_else(|| "#".to_string());

    JobListing {
        title: posting.title.unwrap_or_else(|| "Untitled".to_string()),
        company: posting
            .company_name
            .unwrap_or_else(|| "Unknown Company".to_string()),
        location: posting.location.unwrap_or_else(|| location.to_string()),
        description: truncate_description(posting.description.as_deref().unwrap_or_default()),
        link,
    }
}

pub fn listing_from_web_result(result: &OrganicResult, location: &str) -> JobListing {
    JobListing {
        title: clean_job_title(&result.title),
        company: extract_company_name(&result.title, &result.displayed_link, &result.link),
        location: location.to_string(),
        description: truncate_description(&result.snippet),
        link: result.link.clone(),
    }
}
