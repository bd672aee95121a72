// Prompt constants for the interview brief.
// Replace: {company_name}, {job_title}, {overview}, {news}, {culture}, {hiring},
// {questions}, {tone}

pub const INTERVIEW_BRIEF_PROMPT_TEMPLATE: &str = r#"Create a comprehensive interview preparation brief for:

Company: {company_name}
Position: {job_title}

COMPANY INFORMATION:

Company Overview:
{overview}

Recent News:
{news}

Work Culture:
{culture}

Hiring Trends:
{hiring}

Interview Experiences:
{questions}

Please provide a structured interview preparation guide with:

1. **Company Snapshot** (2-3 paragraphs summarizing what the company does and recent developments)

2. **Work Culture & Values** (what they value in employees based on the culture information)

3. **Recent News Impact** (how recent news might affect the interview conversation)

4. **Expected Interview Questions** (5-7 specific questions likely to be asked):
   - Technical questions for this role
   - Behavioral questions
   - Company-specific questions

5. **Interview Success Tips** (specific strategies for this company and role)

6. **Smart Questions to Ask** (5 intelligent questions based on company research)

{tone}"#;
