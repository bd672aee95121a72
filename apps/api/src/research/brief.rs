//! Interview brief rendering: the generation prompt and the markdown template
//! used when generation is unavailable.

use crate::llm_client::prompts::{render, PROFESSIONAL_TONE};
use crate::research::prompts::INTERVIEW_BRIEF_PROMPT_TEMPLATE;
use crate::research::researcher::{CompanyInfo, InterviewSnippet, Snippet};

pub const NO_INFORMATION: &str = "No information found";
const SNIPPET_PREVIEW_CHARS: usize = 200;

/// Pre-formatted summaries shared by the prompt and the fallback template.
#[derive(Debug, Clone)]
pub struct BriefSummaries {
    pub overview: String,
    pub news: String,
    pub culture: String,
    pub hiring: String,
    pub questions: String,
}

impl BriefSummaries {
    pub fn new(info: &CompanyInfo, questions: &[InterviewSnippet]) -> Self {
        let question_pairs: Vec<(String, String)> = questions
            .iter()
            .map(|q| (q.source.clone(), q.snippet.clone()))
            .collect();

        BriefSummaries {
            overview: format_items(&snippet_pairs(&info.overview)),
            news: format_items(&snippet_pairs(&info.news)),
            culture: format_items(&snippet_pairs(&info.culture)),
            hiring: format_items(&snippet_pairs(&info.hiring)),
            questions: format_items(&question_pairs),
        }
    }
}

fn snippet_pairs(items: &[Snippet]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|s| (s.title.clone(), s.snippet.clone()))
        .collect()
}

/// One `- <title>: <snippet preview>` line per item, or `NO_INFORMATION`.
pub fn format_items(items: &[(String, String)]) -> String {
    if items.is_empty() {
        return NO_INFORMATION.to_string();
    }
    items
        .iter()
        .map(|(title, snippet)| {
            let preview: String = snippet.chars().take(SNIPPET_PREVIEW_CHARS).collect();
            format!("- {title}: {preview}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_brief_prompt(
    company_name: &str,
    job_title: &str,
    summaries: &BriefSummaries,
) -> String {
    render(
        INTERVIEW_BRIEF_PROMPT_TEMPLATE,
        &[
            ("company_name", company_name),
            ("job_title", job_title),
            ("overview", &summaries.overview),
            ("news", &summaries.news),
            ("culture", &summaries.culture),
            ("hiring", &summaries.hiring),
            ("questions", &summaries.questions),
            ("tone", PROFESSIONAL_TONE),
        ],
    )
}

fn or_advice<'a>(summary: &'a str, advice: &'a str) -> &'a str {
    if summary == NO_INFORMATION {
        advice
    } else {
        summary
    }
}

/// Markdown brief built from whatever the searches found, with generic advice
/// in place of empty sections.
pub fn fallback_brief(company_name: &str, job_title: &str, summaries: &BriefSummaries) -> String {
    let overview = or_advice(
        &summaries.overview,
        "Research the company's main products/services and mission statement before the interview.",
    );
    let news = or_advice(
        &summaries.news,
        "Check the company's press releases and news section on their website.",
    );
    let culture = or_advice(
        &summaries.culture,
        "Look up employee reviews on Glassdoor, Indeed, or LinkedIn to understand the work environment.",
    );
    let resources = or_advice(
        &summaries.questions,
        "Search for '[Company Name] interview questions' on Glassdoor and Leetcode for more insights.",
    );

    format!(
        r#"# Interview Preparation Brief

## Company: {company_name}
## Position: {job_title}

---

## Company Overview

{overview}

---

## Recent Company News

{news}

**Why This Matters:** Recent news can be great conversation starters and shows you're genuinely interested.

---

## Work Culture Insights

{culture}

**Key Takeaway:** Understand what the company values to tailor your responses accordingly.

---

## Expected Interview Questions

### Technical Questions
1. Explain your experience with [relevant technology stack]
2. Walk me through a challenging project you've completed
3. How do you approach debugging/problem-solving?
4. Describe your experience with [specific framework/tool mentioned in job description]

### Behavioral Questions
1. Tell me about a time you faced a difficult challenge at work
2. Describe a situation where you had to work with a difficult team member
3. Give an example of when you had to learn something new quickly
4. Tell me about a project you're particularly proud of

### Company-Specific Questions
1. Why do you want to work for {company_name}?
2. What do you know about our products/services?
3. Where do you see yourself contributing to our team?

---

## Interview Success Strategies

### Before the Interview
- Review the job description thoroughly
- Prepare 3-5 specific examples using the STAR method
- Research the company's recent projects and news
- Prepare questions to ask the interviewer
- Test your tech setup (if remote)

### During the Interview
- Be specific with examples (use numbers and metrics when possible)
- Show enthusiasm for the role and company
- Ask clarifying questions if needed
- Be honest about what you don't know

### After the Interview
- Send a thank-you email within 24 hours
- Reference specific topics discussed
- Reiterate your interest in the position

---

## Smart Questions to Ask Your Interviewer

1. "What does success look like in this position after 6 months?"
2. "What are the biggest challenges facing the team right now?"
3. "Can you tell me about the team structure and who I'd be working with?"
4. "How has the company evolved in the past year, and where do you see it going?"
5. "What are the next steps in the interview process?"

---

## Additional Research Resources

{resources}

---

**Good luck with your interview at {company_name}!**
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(title: &str, text: &str) -> Snippet {
        Snippet {
            title: title.to_string(),
            snippet: text.to_string(),
            link: "https://example.com".to_string(),
        }
    }

    #[test]
    fn test_format_items_empty_is_no_information() {
        assert_eq!(format_items(&[]), NO_INFORMATION);
    }

    #[test]
    fn test_format_items_truncates_snippet_preview() {
        let items = vec![
            ("Funding".to_string(), "x".repeat(250)),
            ("Launch".to_string(), "New product".to_string()),
        ];
        let out = format_items(&items);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("- Funding: {}", "x".repeat(200)));
        assert_eq!(lines[1], "- Launch: New product");
    }

    #[test]
    fn test_braces_in_company_name_and_snippets_reach_prompt_verbatim() {
        let info = CompanyInfo {
            overview: vec![snippet("T", "use {tone} here")],
            ..Default::default()
        };
        let summaries = BriefSummaries::new(&info, &[]);
        let prompt = build_brief_prompt("Acme {news}", "SRE", &summaries);

        assert!(prompt.contains("Company: Acme {news}\n"));
        assert!(prompt.contains("- T: use {tone} here"));
        assert!(prompt.ends_with(PROFESSIONAL_TONE));
    }

    #[test]
    fn test_prompt_names_all_six_sections() {
        let summaries = BriefSummaries::new(&CompanyInfo::default(), &[]);
        let prompt = build_brief_prompt("Acme", "SRE", &summaries);
        for section in [
            "Company Snapshot",
            "Work Culture & Values",
            "Recent News Impact",
            "Expected Interview Questions",
            "Interview Success Tips",
            "Smart Questions to Ask",
        ] {
            assert!(prompt.contains(section), "missing {section}");
        }
        assert!(prompt.contains("Company: Acme"));
        assert!(prompt.contains("Position: SRE"));
        assert!(!prompt.contains("{overview}"));
    }

    #[test]
    fn test_fallback_uses_found_data_and_advice_for_gaps() {
        let info = CompanyInfo {
            news: vec![snippet("Acme raises Series B", "Acme raised $40M")],
            ..Default::default()
        };
        let summaries = BriefSummaries::new(&info, &[]);
        let brief = fallback_brief("Acme", "SRE", &summaries);

        assert!(brief.contains("- Acme raises Series B: Acme raised $40M"));
        assert!(brief.contains("Research the company's main products/services"));
        assert!(brief.contains("Why do you want to work for Acme?"));
        assert!(!brief.contains(NO_INFORMATION));
    }

    #[test]
    fn test_question_summary_uses_source_as_title() {
        let questions = vec![InterviewSnippet {
            source: "Glassdoor: Acme SRE interview".to_string(),
            snippet: "Asked about on-call".to_string(),
            link: "https://glassdoor.com/1".to_string(),
        }];
        let summaries = BriefSummaries::new(&CompanyInfo::default(), &questions);
        assert_eq!(
            summaries.questions,
            "- Glassdoor: Acme SRE interview: Asked about on-call"
        );
    }
}
