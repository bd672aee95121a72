//! Cover Letter Generator: prompt from resume text, contact info and a job;
//! templated letter when generation fails.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cover_letter::prompts::COVER_LETTER_PROMPT_TEMPLATE;
use crate::llm_client::prompts::render;
use crate::llm_client::TextGenerator;
use crate::resume::contact::{extract_contact_info, ContactInfo};

pub const DEFAULT_JOB_TITLE: &str = "Position";
pub const DEFAULT_COMPANY: &str = "Company";
const DESCRIPTION_PROMPT_CHARS: usize = 500;
const RESUME_PROMPT_CHARS: usize = 800;

/// The job a letter is written for. Accepts a full `JobListing` or any subset of it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoverLetterJob {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CoverLetterJob {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.company.is_none() && self.description.is_none()
    }

    fn title(&self) -> &str {
        non_blank(self.title.as_deref()).unwrap_or(DEFAULT_JOB_TITLE)
    }

    fn company(&self) -> &str {
        non_blank(self.company.as_deref()).unwrap_or(DEFAULT_COMPANY)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn head(text: &str, chars: usize) -> String {
    text.chars().take(chars).collect::<String>().trim().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterSource {
    Generated,
    Template,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverLetter {
    pub text: String,
    pub source: LetterSource,
}

pub fn build_cover_letter_prompt(
    resume_text: &str,
    contact: &ContactInfo,
    job: &CoverLetterJob,
) -> String {
    let description = head(
        job.description.as_deref().unwrap_or_default(),
        DESCRIPTION_PROMPT_CHARS,
    );
    let resume_excerpt: String = resume_text.chars().take(RESUME_PROMPT_CHARS).collect();
    render(
        COVER_LETTER_PROMPT_TEMPLATE,
        &[
            ("job_title", job.title()),
            ("company", job.company()),
            ("description", &description),
            ("name", &contact.name),
            ("email", &contact.email),
            ("phone", &contact.phone),
            ("resume_excerpt", &resume_excerpt),
        ],
    )
}

pub fn fallback_letter(contact: &ContactInfo, job: &CoverLetterJob) -> String {
    let title = job.title();
    let company = job.company();
    format!(
        "Dear Hiring Manager,

I am excited to apply for the {title} position at {company}. With my relevant background and skills, I am confident I would be a valuable addition to your team.

My experience aligns well with the requirements outlined in your job description. I am particularly drawn to this opportunity because it combines my technical expertise with my passion for innovation and problem-solving. I have consistently demonstrated the ability to deliver high-quality results and collaborate effectively with cross-functional teams.

I would welcome the opportunity to discuss how I can contribute to {company}'s success. Thank you for considering my application, and I look forward to speaking with you soon.

Best regards,
{}
{}
{}",
        contact.name, contact.email, contact.phone
    )
}

/// Writes a letter for `job` from the resume text. Never fails: generation
/// errors produce the templated letter instead.
pub async fn generate_cover_letter(
    llm: &dyn TextGenerator,
    resume_text: &str,
    job: &CoverLetterJob,
) -> CoverLetter {
    let contact = extract_contact_info(resume_text);
    info!(
        "Generating cover letter for: {} - {}",
        job.company(),
        job.title()
    );

    let prompt = build_cover_letter_prompt(resume_text, &contact, job);
    match llm.generate(&prompt).await {
        Ok(text) => {
            info!("Cover letter generated ({} characters)", text.len());
            CoverLetter {
                text,
                source: LetterSource::Generated,
            }
        }
        Err(e) => {
            warn!("Error generating cover letter: {e}");
            CoverLetter {
                text: fallback_letter(&contact, job),
                source: LetterSource::Template,
            }
        }
    }
}
