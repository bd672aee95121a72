//! Company Researcher: four company searches, an interview-experience search,
//! then a generated preparation brief. Every step degrades instead of failing.

use chrono::{Datelike, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::errors::{SourceStatus, UpstreamError};
use crate::llm_client::TextGenerator;
use crate::research::brief::{build_brief_prompt, fallback_brief, BriefSummaries};
use crate::search_client::{OrganicResult, SearchProvider, WebQuery};

const COMPANY_RESULTS_REQUESTED: u32 = 5;
const COMPANY_RESULTS_KEPT: usize = 3;
const QUESTION_RESULTS_REQUESTED: u32 = 8;
const QUESTION_RESULTS_KEPT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snippet {
    pub title: String,
    pub snippet: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewSnippet {
    pub source: String,
    pub snippet: String,
    pub link: String,
}

/// Search snippets per research category.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompanyInfo {
    pub news: Vec<Snippet>,
    pub culture: Vec<Snippet>,
    pub hiring: Vec<Snippet>,
    pub overview: Vec<Snippet>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoCategory {
    News,
    Culture,
    Hiring,
    Overview,
    InterviewQuestions,
}

impl InfoCategory {
    const COMPANY: [InfoCategory; 4] = [
        InfoCategory::News,
        InfoCategory::Culture,
        InfoCategory::Hiring,
        InfoCategory::Overview,
    ];

    fn query(self, company_name: &str, job_title: &str) -> String {
        match self {
            InfoCategory::News => {
                let year = Utc::now().year();
                format!("{company_name} recent news {} {year}", year - 1)
            }
            InfoCategory::Culture => {
                format!("{company_name} work culture employee reviews glassdoor")
            }
            InfoCategory::Hiring => format!("{company_name} hiring trends layoffs expansion"),
            InfoCategory::Overview => {
                format!("{company_name} company profile about mission values")
            }
            InfoCategory::InterviewQuestions => format!(
                "{company_name} {job_title} interview questions experiences glassdoor leetcode"
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BriefSource {
    Generated,
    Template,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub category: InfoCategory,
    pub status: SourceStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyResearch {
    pub company_name: String,
    pub job_title: String,
    pub company_info: CompanyInfo,
    pub interview_questions: Vec<InterviewSnippet>,
    pub ai_brief: String,
    pub brief_source: BriefSource,
    /// One entry per search, in the order they ran.
    pub sources: Vec<CategoryReport>,
}

/// Runs the full research pipeline. Never fails; missing data shows up as
/// empty lists, `Unavailable` statuses, and a templated brief.
pub async fn research_company(
    search: &dyn SearchProvider,
    llm: &dyn TextGenerator,
    company_name: &str,
    job_title: &str,
) -> CompanyResearch {
    info!("Researching {company_name} for {job_title} position");

    let mut company_info = CompanyInfo::default();
    let mut sources = Vec::with_capacity(5);

    for category in InfoCategory::COMPANY {
        let query = WebQuery {
            q: category.query(company_name, job_title),
            num: COMPANY_RESULTS_REQUESTED,
        };
        let lookup = top_results(search, &query, COMPANY_RESULTS_KEPT).await;
        let status = record(category, &lookup);
        sources.push(CategoryReport { category, status });

        let snippets: Vec<Snippet> = lookup
            .unwrap_or_default()
            .into_iter()
            .map(|r| Snippet {
                title: r.title,
                snippet: r.snippet,
                link: r.link,
            })
            .collect();
        match category {
            InfoCategory::News => company_info.news = snippets,
            InfoCategory::Culture => company_info.culture = snippets,
            InfoCategory::Hiring => company_info.hiring = snippets,
            InfoCategory::Overview => company_info.overview = snippets,
            InfoCategory::InterviewQuestions => {}
        }
    }

    let query = WebQuery {
        q: InfoCategory::InterviewQuestions.query(company_name, job_title),
        num: QUESTION_RESULTS_REQUESTED,
    };
    let lookup = top_results(search, &query, QUESTION_RESULTS_KEPT).await;
    sources.push(CategoryReport {
        category: InfoCategory::InterviewQuestions,
        status: record(InfoCategory::InterviewQuestions, &lookup),
    });
    let interview_questions: Vec<InterviewSnippet> = lookup
        .unwrap_or_default()
        .into_iter()
        .map(|r| InterviewSnippet {
            source: r.title,
            snippet: r.snippet,
            link: r.link,
        })
        .collect();

    info!(
        "{company_name}: {}/{} research searches returned results",
        sources.iter().filter(|s| s.status.is_ok()).count(),
        sources.len()
    );

    let summaries = BriefSummaries::new(&company_info, &interview_questions);
    let prompt = build_brief_prompt(company_name, job_title, &summaries);
    let (ai_brief, brief_source) = match llm.generate(&prompt).await {
        Ok(text) => (text, BriefSource::Generated),
        Err(e) => {
            warn!("Error generating interview brief: {e}");
            (
                fallback_brief(company_name, job_title, &summaries),
                BriefSource::Template,
            )
        }
    };

    CompanyResearch {
        company_name: company_name.to_string(),
        job_title: job_title.to_string(),
        company_info,
        interview_questions,
        ai_brief,
        brief_source,
        sources,
    }
}

async fn top_results(
    search: &dyn SearchProvider,
    query: &WebQuery,
    keep: usize,
) -> Result<Vec<OrganicResult>, UpstreamError> {
    debug!("Research query: {}", query.q);
    let mut results = search.search_web(query).await?;
    results.truncate(keep);
    Ok(results)
}

fn record(
    category: InfoCategory,
    lookup: &Result<Vec<OrganicResult>, UpstreamError>,
) -> SourceStatus {
    if let Err(e) = lookup {
        warn!("Error searching {category:?}: {e}");
    }
    SourceStatus::of(lookup)
}
