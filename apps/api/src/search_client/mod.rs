//! Search Client: SerpApi wrapper for both the job-search engine (`google_jobs`)
//! and the general web-search engine (`google`).
//!
//! Pipelines depend on `SearchProvider`; this module is the only place that
//! knows SerpApi's parameter names and response envelope.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::errors::UpstreamError;

const LANGUAGE: &str = "en";
const COUNTRY: &str = "in";

/// Query against the job-search engine.
#[derive(Debug, Clone, PartialEq)]
pub struct JobQuery {
    pub q: String,
    pub location: String,
}

/// Query against the general web-search engine.
#[derive(Debug, Clone, PartialEq)]
pub struct WebQuery {
    pub q: String,
    pub num: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplyOption {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// A posting as the job-search engine returns it. Every field is optional upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawJobPosting {
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub apply_options: Vec<ApplyOption>,
    pub share_url: Option<String>,
}

/// One organic web-search hit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub displayed_link: String,
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search_jobs(&self, query: &JobQuery) -> Result<Vec<RawJobPosting>, UpstreamError>;
    async fn search_web(&self, query: &WebQuery) -> Result<Vec<OrganicResult>, UpstreamError>;
}

#[derive(Debug, Deserialize)]
struct JobsEnvelope {
    #[serde(default)]
    jobs_results: Vec<RawJobPosting>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WebEnvelope {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
    error: Option<String>,
}

/// SerpApi HTTP client. One attempt per call, bounded by the configured timeout.
#[derive(Clone)]
pub struct SerpClient {
    client: Client,
    api_key: String,
    url: String,
}

impl SerpClient {
    pub fn new(config: &Config) -> Result<Self, UpstreamError> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.search_timeout_secs))
                .build()?,
            api_key: config.serpapi_key.clone(),
            url: config.serpapi_url.clone(),
        })
    }

    async fn get<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T, UpstreamError> {
        let response = self
            .client
            .get(&self.url)
            .query(params)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl SearchProvider for SerpClient {
    async fn search_jobs(&self, query: &JobQuery) -> Result<Vec<RawJobPosting>, UpstreamError> {
        debug!("google_jobs query: {}", query.q);
        let envelope: JobsEnvelope = self
            .get(&[
                ("engine", "google_jobs"),
                ("q", query.q.as_str()),
                ("location", query.location.as_str()),
                ("hl", LANGUAGE),
                ("gl", COUNTRY),
            ])
            .await?;
        into_results(envelope.jobs_results, envelope.error)
    }

    async fn search_web(&self, query: &WebQuery) -> Result<Vec<OrganicResult>, UpstreamError> {
        debug!("google query: {} (num={})", query.q, query.num);
        let num = query.num.to_string();
        let envelope: WebEnvelope = self
            .get(&[
                ("engine", "google"),
                ("q", query.q.as_str()),
                ("num", num.as_str()),
                ("gl", COUNTRY),
                ("hl", LANGUAGE),
            ])
            .await?;
        into_results(envelope.organic_results, envelope.error)
    }
}

/// SerpApi reports some failures in-band with a 200 status and an `error` field.
fn into_results<T>(results: Vec<T>, error: Option<String>) -> Result<Vec<T>, UpstreamError> {
    match error {
        Some(message) if results.is_empty() => Err(UpstreamError::Api {
            status: 200,
            message,
        }),
        _ => Ok(results),
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;

    use super::*;

    /// In-process search backend. `None` entries simulate an unavailable upstream.
    #[derive(Default)]
    pub struct FakeSearch {
        pub jobs: Option<Vec<RawJobPosting>>,
        /// Web results keyed by a substring of the query; first match wins.
        /// Queries matching nothing get an empty result set.
        pub web: Vec<(String, Option<Vec<OrganicResult>>)>,
        pub job_queries: Mutex<Vec<JobQuery>>,
        pub web_queries: Mutex<Vec<WebQuery>>,
    }

    impl FakeSearch {
        pub fn down() -> Self {
            FakeSearch {
                jobs: None,
                web: vec![(String::new(), None)],
                ..Default::default()
            }
        }
    }

    fn unavailable() -> UpstreamError {
        UpstreamError::Api {
            status: 500,
            message: "fake outage".to_string(),
        }
    }

    #[async_trait]
    impl SearchProvider for FakeSearch {
        async fn search_jobs(&self, query: &JobQuery) -> Result<Vec<RawJobPosting>, UpstreamError> {
            self.job_queries.lock().unwrap().push(query.clone());
            self.jobs.clone().ok_or_else(unavailable)
        }

        async fn search_web(&self, query: &WebQuery) -> Result<Vec<OrganicResult>, UpstreamError> {
            self.web_queries.lock().unwrap().push(query.clone());
            match self.web.iter().find(|(needle, _)| query.q.contains(needle.as_str())) {
                Some((_, Some(results))) => Ok(results.clone()),
                Some((_, None)) => Err(unavailable()),
                None => Ok(vec![]),
            }
        }
    }

    pub fn organic(title: &str, snippet: &str, link: &str) -> OrganicResult {
        OrganicResult {
            title: title.to_string(),
            snippet: snippet.to_string(),
            link: link.to_string(),
            displayed_link: String::new(),
        }
    }
}
