//! Static skill taxonomy: category name → lowercase skill keywords.
//! Terms may appear in more than one category; matching deduplicates.

pub const SKILL_TAXONOMY: &[(&str, &[&str])] = &[
    (
        "Programming Languages",
        &[
            "python", "java", "c++", "javascript", "typescript", "sql", "nosql", "go", "rust",
            "c#", "php", "ruby", "swift", "kotlin", "perl", "scala", "haskell", "r", "matlab",
            "dart", "lua",
        ],
    ),
    (
        "AI/ML",
        &[
            "ai", "ml", "nlp", "deep learning", "computer vision", "pytorch", "tensorflow",
            "keras", "scikit-learn", "machine learning", "neural networks", "llm",
            "natural language processing", "robotics", "reinforcement learning", "gpt", "bert",
            "transformers", "langchain", "hugging face", "openai", "gemini",
        ],
    ),
    (
        "Cloud & DevOps",
        &[
            "cloud", "aws", "gcp", "azure", "docker", "kubernetes", "git", "ci/cd", "jenkins",
            "terraform", "ansible", "devops", "serverless", "microservices", "gitlab",
            "github actions", "circleci", "cloudformation", "helm", "prometheus", "grafana",
        ],
    ),
    (
        "Frameworks & Libraries",
        &[
            "react", "angular", "vue", "node", "express", "django", "flask", "spring", "fastapi",
            "next.js", "svelte", "ember", "backbone", "jquery", "bootstrap", "tailwind",
            "material-ui", "redux", "webpack", "vite", "nest.js", "laravel", "rails", "asp.net",
        ],
    ),
    (
        "Mobile Development",
        &[
            "android", "ios", "react native", "flutter", "xamarin", "ionic", "swift", "kotlin",
            "objective-c", "mobile app development", "app store", "play store",
        ],
    ),
    (
        "Game Development",
        &[
            "unity", "unreal engine", "godot", "game development", "3d modeling", "blender",
            "maya", "game design", "c++", "c#", "opengl", "directx", "vulkan",
            "shader programming", "physics engine", "ar", "vr", "augmented reality",
            "virtual reality",
        ],
    ),
    (
        "Data & Analytics",
        &[
            "data science", "data analysis", "statistics", "spark", "hadoop", "kafka",
            "elasticsearch", "etl", "data engineering", "big data", "data visualization",
            "business intelligence", "tableau", "power bi", "looker", "pandas", "numpy",
            "matplotlib", "seaborn", "jupyter", "airflow", "dbt",
        ],
    ),
    (
        "Web Development",
        &[
            "html", "css", "rest api", "graphql", "microservices", "web development", "frontend",
            "backend", "full stack", "web security", "web performance", "sass", "less",
            "webpack", "responsive design", "seo", "pwa", "webassembly",
        ],
    ),
    (
        "Databases",
        &[
            "mongodb", "postgresql", "mysql", "redis", "cassandra", "dynamodb", "oracle",
            "sql server", "firebase", "supabase", "prisma", "sequelize", "typeorm", "sqlite",
            "mariadb", "neo4j", "couchdb", "elasticsearch",
        ],
    ),
    (
        "Methodologies & Practices",
        &[
            "agile", "scrum", "kanban", "devops", "tdd", "bdd", "ci/cd",
            "continuous integration", "continuous deployment", "pair programming",
            "code review", "design patterns", "clean code", "solid principles",
            "microservices architecture",
        ],
    ),
    (
        "Cybersecurity",
        &[
            "security", "cybersecurity", "network security", "application security",
            "data security", "compliance", "risk management", "penetration testing",
            "ethical hacking", "vulnerability assessment", "encryption", "authentication",
            "authorization", "owasp", "soc", "siem",
        ],
    ),
    (
        "Networking",
        &[
            "networking", "tcp/ip", "dns", "http", "https", "network architecture",
            "network administration", "vpn", "firewall", "load balancing", "cdn", "websockets",
        ],
    ),
    (
        "Operating Systems",
        &[
            "linux", "windows", "macos", "unix", "ubuntu", "centos", "debian", "redhat", "bash",
            "powershell", "shell scripting",
        ],
    ),
    (
        "Blockchain & Web3",
        &[
            "blockchain", "web3", "ethereum", "solidity", "smart contracts", "cryptocurrency",
            "nft", "defi", "bitcoin", "polygon", "hyperledger",
        ],
    ),
    (
        "Design & UI/UX",
        &[
            "ui/ux", "figma", "sketch", "adobe xd", "photoshop", "illustrator",
            "user experience", "user interface", "wireframing", "prototyping",
            "design thinking", "accessibility",
        ],
    ),
    (
        "Testing & QA",
        &[
            "testing", "unit testing", "integration testing", "e2e testing", "selenium",
            "cypress", "jest", "mocha", "pytest", "junit", "automation testing",
            "manual testing", "qa", "quality assurance",
        ],
    ),
    (
        "Version Control",
        &["git", "github", "gitlab", "bitbucket", "svn", "version control", "source control"],
    ),
    (
        "Project Management",
        &[
            "jira", "trello", "asana", "monday.com", "project management",
            "product management", "stakeholder management",
        ],
    ),
];

/// Every skill keyword across all categories, in taxonomy order (duplicates included).
pub fn all_skills() -> impl Iterator<Item = &'static str> {
    SKILL_TAXONOMY
        .iter()
        .flat_map(|(_, skills)| skills.iter().copied())
}
