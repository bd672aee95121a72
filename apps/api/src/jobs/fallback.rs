use crate::jobs::models::JobListing;

/// (title, company, location, description, link)
const FALLBACK_JOBS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Software Engineer",
        "Flipkart",
        "Bangalore, India",
        "Join India's leading e-commerce company. Work on scalable systems serving millions of users daily.",
        "https://www.flipkartcareers.com/",
    ),
    (
        "Full Stack Developer",
        "Razorpay",
        "Bangalore, India",
        "Build innovative payment solutions. Work with modern tech stack and fintech products.",
        "https://razorpay.com/jobs/",
    ),
    (
        "Backend Engineer",
        "Swiggy",
        "Bangalore, India",
        "Build real-time systems for food delivery. Work with microservices and high-scale architecture.",
        "https://careers.swiggy.com/",
    ),
    (
        "Data Scientist",
        "PhonePe",
        "Bangalore, India",
        "Work on ML models for fraud detection and recommendations. Analyze payment data at scale.",
        "https://www.phonepe.com/careers/",
    ),
    (
        "ML Engineer",
        "Ola",
        "Bangalore, India",
        "Build ML systems for ride allocation and demand prediction. Work with real-time data.",
        "https://www.olacabs.com/careers",
    ),
    (
        "Frontend Developer",
        "CRED",
        "Bangalore, India",
        "Create premium user experiences. Work with React, animations, and modern design systems.",
        "https://careers.cred.club/",
    ),
    (
        "DevOps Engineer",
        "Zomato",
        "Gurugram, India",
        "Manage cloud infrastructure and deployment pipelines. Work with AWS and Kubernetes.",
        "https://www.zomato.com/careers",
    ),
    (
        "Software Developer",
        "Freshworks",
        "Chennai, India",
        "Build SaaS products used by businesses worldwide. Work on customer engagement platforms.",
        "https://www.freshworks.com/company/careers/",
    ),
];

/// Last-resort listings served when every live source fails. Always the same eight.
pub fn fallback_jobs() -> Vec<JobListing> {
    FALLBACK_JOBS
        .iter()
        .map(|(title, company, location, description, link)| JobListing {
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            description: description.to_string(),
            link: link.to_string(),
        })
        .collect()
}
