//! Built-in reference corpus of curated skills

/// Technical skills
const TECH_SKILLS: &[&str] = &[
    // Programming Languages
    "rust", "python", "javascript", "typescript", "java", "c++", "c#", "go", "ruby",
    "php", "swift", "kotlin", "scala", "haskell", "clojure", "r", "matlab",

    // Web Technologies
    "react", "vue", "angular", "svelte", "html", "css", "sass", "tailwind",
    "bootstrap", "jquery", "webpack", "vite", "node.js", "express", "nextjs",
    "django", "flask", "spring boot", "laravel",

    // Backend/Infrastructure
    "docker", "kubernetes", "aws", "azure", "gcp", "terraform", "ansible",
    "jenkins", "gitlab", "github", "ci/cd", "devops", "microservices", "rest api",
    "graphql", "grpc", "redis", "elasticsearch", "nginx",

    // Databases
    "sql", "postgresql", "mysql", "mongodb", "cassandra", "dynamodb", "sqlite",
    "oracle", "sql server", "neo4j",

    // Data Science/ML
    "machine learning", "deep learning", "data analysis", "data visualization",
    "tensorflow", "pytorch", "scikit-learn", "pandas", "numpy", "jupyter",
    "spark", "hadoop", "kafka", "airflow", "excel", "power bi", "tableau",
    "statistics", "nlp", "computer vision",

    // Testing
    "jest", "pytest", "junit", "selenium", "cypress", "unit testing", "tdd",
];

/// Soft skills
const SOFT_SKILLS: &[&str] = &[
    "leadership", "communication", "teamwork", "problem solving", "critical thinking",
    "creativity", "adaptability", "time management", "project management",
    "collaboration", "mentoring", "presentation", "negotiation",
    "customer service", "analytical", "detail oriented",
];

/// Role-specific keywords
const ROLE_KEYWORDS: &[&str] = &[
    "software engineer", "developer", "architect", "full stack", "frontend", "backend",
    "data scientist", "data engineer", "ml engineer", "product manager",
    "designer", "analyst", "consultant", "system administrator",
];

/// Methods and tooling
const TOOLING: &[&str] = &[
    "agile", "scrum", "kanban", "jira", "confluence", "git",
    "linux", "unix", "windows", "bash", "powershell",
];

/// One reference document per skill, sorted and deduplicated
pub fn default_reference_corpus() -> Vec<String> {
    let mut skills: Vec<String> = TECH_SKILLS
        .iter()
        .chain(SOFT_SKILLS)
        .chain(ROLE_KEYWORDS)
        .chain(TOOLING)
        .map(|s| s.to_string())
        .collect();

    skills.sort();
    skills.dedup();
    skills
}
