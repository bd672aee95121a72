// Prompt constants for cover letter generation.
// Replace: {job_title}, {company}, {description}, {name}, {email}, {phone}, {resume_excerpt}

pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a professional cover letter for this job application:

Position: {job_title}
Company: {company}
Job Description: {description}

Applicant Details:
- Name: {name}
- Email: {email}
- Phone: {phone}

Key Skills from Resume:
{resume_excerpt}

Write a concise 3-paragraph cover letter that:
1. Opens with enthusiasm for the specific role
2. Highlights 2-3 relevant skills or experiences
3. Closes with a strong call to action

Keep it professional, personable, and under 300 words."#;
