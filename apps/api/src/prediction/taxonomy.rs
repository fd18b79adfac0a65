//! Role taxonomy — the static table of job roles and the lexical terms that signal them.
//!
//! Primary terms are strong indicators (usually the job title itself), secondary terms
//! are supporting evidence (tools, practices). Terms are lowercase and matched as plain
//! substrings; the same term may legitimately appear under several roles.
//!
//! Declaration order matters only for tie-breaking in the classifier.

/// A single role in the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleDefinition {
    pub name: &'static str,
    pub primary_terms: &'static [&'static str],
    pub secondary_terms: &'static [&'static str],
    /// Multiplier on the raw score. Broad roles > 1.0, entry-level roles < 1.0.
    pub weight: f64,
}

/// The role taxonomy, borrowed as a slice of definitions.
pub type RoleTaxonomy = [RoleDefinition];

const fn role(
    name: &'static str,
    primary_terms: &'static [&'static str],
    secondary_terms: &'static [&'static str],
    weight: f64,
) -> RoleDefinition {
    RoleDefinition {
        name,
        primary_terms,
        secondary_terms,
        weight,
    }
}

/// The process-wide role taxonomy.
pub static ROLE_TAXONOMY: &RoleTaxonomy = &[
    // ── Software development ────────────────────────────────────────────────
    role(
        "Frontend Developer",
        &[
            "frontend",
            "front-end",
            "ui developer",
            "react developer",
            "vue developer",
            "angular developer",
        ],
        &[
            "react",
            "vue",
            "angular",
            "javascript",
            "typescript",
            "css",
            "html",
            "sass",
            "webpack",
            "next.js",
        ],
        1.0,
    ),
    role(
        "Backend Developer",
        &[
            "backend",
            "back-end",
            "server-side",
            "api developer",
            "backend engineer",
        ],
        &[
            "node.js",
            "express",
            "fastapi",
            "spring",
            "django",
            "flask",
            "rest api",
            "graphql",
        ],
        1.0,
    ),
    role(
        "Full Stack Developer",
        &[
            "full stack",
            "fullstack",
            "full-stack",
            "mern",
            "mean",
            "end-to-end developer",
        ],
        &[
            "frontend and backend",
            "web development",
            "javascript",
            "python",
            "java",
        ],
        1.2,
    ),
    role(
        "Software Engineer",
        &[
            "software engineer",
            "software developer",
            "programmer",
            "coding",
        ],
        &[
            "algorithms",
            "data structures",
            "software design",
            "programming",
        ],
        0.9,
    ),
    role(
        "Mobile Developer",
        &[
            "mobile developer",
            "android developer",
            "ios developer",
            "mobile app",
        ],
        &[
            "react native",
            "flutter",
            "swift",
            "kotlin",
            "xamarin",
            "mobile development",
        ],
        1.0,
    ),
    // ── Data & AI ───────────────────────────────────────────────────────────
    role(
        "Data Scientist",
        &[
            "data scientist",
            "data science",
            "machine learning engineer",
            "ml engineer",
        ],
        &[
            "python",
            "pandas",
            "numpy",
            "scikit-learn",
            "tensorflow",
            "pytorch",
            "jupyter",
            "statistics",
        ],
        1.0,
    ),
    role(
        "Data Engineer",
        &[
            "data engineer",
            "data engineering",
            "etl developer",
            "data pipeline",
        ],
        &[
            "spark",
            "hadoop",
            "airflow",
            "kafka",
            "snowflake",
            "data warehouse",
        ],
        1.0,
    ),
    role(
        "AI Engineer",
        &[
            "ai engineer",
            "artificial intelligence",
            "machine learning",
            "deep learning",
        ],
        &[
            "tensorflow",
            "pytorch",
            "opencv",
            "nlp",
            "computer vision",
            "neural networks",
        ],
        1.0,
    ),
    role(
        "Data Analyst",
        &["data analyst", "business analyst", "data analysis"],
        &["excel", "sql", "tableau", "power bi", "analytics", "reporting"],
        1.0,
    ),
    // ── DevOps & infrastructure ─────────────────────────────────────────────
    role(
        "DevOps Engineer",
        &[
            "devops",
            "devops engineer",
            "site reliability",
            "infrastructure engineer",
        ],
        &[
            "docker",
            "kubernetes",
            "aws",
            "azure",
            "jenkins",
            "terraform",
            "ansible",
            "ci/cd",
        ],
        1.0,
    ),
    role(
        "Cloud Engineer",
        &[
            "cloud engineer",
            "cloud architect",
            "aws engineer",
            "azure engineer",
        ],
        &["aws", "azure", "gcp", "cloud computing", "serverless", "lambda"],
        1.0,
    ),
    role(
        "System Administrator",
        &["system administrator", "sysadmin", "infrastructure admin"],
        &["linux", "windows server", "networking", "monitoring", "backup"],
        1.0,
    ),
    // ── Specialised tech ────────────────────────────────────────────────────
    role(
        "Database Administrator",
        &["database administrator", "dba", "database engineer"],
        &[
            "sql server",
            "mysql",
            "postgresql",
            "oracle",
            "mongodb",
            "database",
        ],
        1.0,
    ),
    role(
        "Cyber Security Engineer",
        &[
            "cybersecurity",
            "security engineer",
            "information security",
            "cyber security",
        ],
        &[
            "penetration testing",
            "vulnerability",
            "firewall",
            "encryption",
            "security audit",
        ],
        1.0,
    ),
    role(
        "Network Engineer",
        &[
            "network engineer",
            "network administrator",
            "network architect",
        ],
        &["cisco", "routing", "switching", "vpn", "firewall", "networking"],
        1.0,
    ),
    role(
        "QA Engineer",
        &[
            "qa engineer",
            "quality assurance",
            "test engineer",
            "qa analyst",
        ],
        &[
            "testing",
            "automation",
            "selenium",
            "manual testing",
            "test cases",
        ],
        1.0,
    ),
    // ── Design & creative ───────────────────────────────────────────────────
    role(
        "UI/UX Designer",
        &[
            "ui designer",
            "ux designer",
            "ui/ux",
            "user experience",
            "user interface",
        ],
        &[
            "figma",
            "sketch",
            "adobe",
            "prototyping",
            "wireframes",
            "design",
        ],
        1.0,
    ),
    role(
        "Graphic Designer",
        &["graphic designer", "visual designer", "creative designer"],
        &[
            "photoshop",
            "illustrator",
            "indesign",
            "branding",
            "logo design",
        ],
        1.0,
    ),
    // ── Business & management ───────────────────────────────────────────────
    role(
        "Product Manager",
        &["product manager", "product owner", "product management"],
        &["roadmap", "agile", "scrum", "stakeholder", "requirements"],
        1.0,
    ),
    role(
        "Project Manager",
        &["project manager", "project management", "program manager"],
        &["pmp", "agile", "scrum", "waterfall", "project planning"],
        1.0,
    ),
    role(
        "Business Analyst",
        &["business analyst", "ba", "business analysis"],
        &[
            "requirements",
            "process improvement",
            "stakeholder",
            "documentation",
        ],
        1.0,
    ),
    role(
        "Technical Lead",
        &["tech lead", "technical lead", "team lead", "lead developer"],
        &["leadership", "mentoring", "architecture", "code review"],
        1.0,
    ),
    // ── Marketing & sales ───────────────────────────────────────────────────
    role(
        "Digital Marketing Specialist",
        &[
            "digital marketing",
            "marketing specialist",
            "online marketing",
        ],
        &[
            "seo",
            "sem",
            "social media",
            "google ads",
            "facebook ads",
            "content marketing",
        ],
        1.0,
    ),
    role(
        "SEO Specialist",
        &["seo specialist", "search engine optimization", "seo analyst"],
        &[
            "google analytics",
            "keyword research",
            "link building",
            "content optimization",
        ],
        1.0,
    ),
    role(
        "Content Writer",
        &["content writer", "copywriter", "content creator"],
        &[
            "writing",
            "blogging",
            "content strategy",
            "social media content",
        ],
        1.0,
    ),
    role(
        "Sales Executive",
        &["sales executive", "sales representative", "account manager"],
        &[
            "crm",
            "lead generation",
            "client relationship",
            "sales targets",
        ],
        1.0,
    ),
    // ── Finance & accounting ────────────────────────────────────────────────
    role(
        "Financial Analyst",
        &["financial analyst", "finance analyst", "investment analyst"],
        &[
            "excel",
            "financial modeling",
            "valuation",
            "budgeting",
            "forecasting",
        ],
        1.0,
    ),
    role(
        "Accountant",
        &["accountant", "accounting", "bookkeeper"],
        &[
            "quickbooks",
            "tally",
            "gst",
            "taxation",
            "financial statements",
        ],
        1.0,
    ),
    role(
        "Risk Analyst",
        &["risk analyst", "risk management", "compliance analyst"],
        &["risk assessment", "compliance", "audit", "regulatory"],
        1.0,
    ),
    // ── Healthcare & science ────────────────────────────────────────────────
    role(
        "Biomedical Engineer",
        &["biomedical engineer", "bioengineering", "medical device"],
        &[
            "matlab",
            "medical equipment",
            "fda",
            "clinical",
            "biotechnology",
        ],
        1.0,
    ),
    role(
        "Research Scientist",
        &["research scientist", "researcher", "research fellow"],
        &[
            "publications",
            "laboratory",
            "experiments",
            "analysis",
            "phd",
        ],
        1.0,
    ),
    role(
        "Lab Technician",
        &[
            "lab technician",
            "laboratory technician",
            "medical technician",
        ],
        &["laboratory", "testing", "equipment", "samples", "protocols"],
        1.0,
    ),
    // ── Operations & support ────────────────────────────────────────────────
    role(
        "Technical Support",
        &[
            "technical support",
            "customer support",
            "help desk",
            "it support",
        ],
        &[
            "troubleshooting",
            "customer service",
            "ticketing",
            "remote support",
        ],
        1.0,
    ),
    role(
        "Operations Manager",
        &["operations manager", "ops manager", "operational excellence"],
        &[
            "process improvement",
            "efficiency",
            "logistics",
            "supply chain",
        ],
        1.0,
    ),
    role(
        "HR Specialist",
        &["hr specialist", "human resources", "hr manager", "recruiter"],
        &["recruitment", "employee relations", "payroll", "benefits"],
        1.0,
    ),
    // ── Engineering (non-software) ──────────────────────────────────────────
    role(
        "Civil Engineer",
        &[
            "civil engineer",
            "structural engineer",
            "construction engineer",
        ],
        &[
            "autocad",
            "civil engineering",
            "construction",
            "infrastructure",
            "surveying",
        ],
        1.0,
    ),
    role(
        "Mechanical Engineer",
        &[
            "mechanical engineer",
            "design engineer",
            "manufacturing engineer",
        ],
        &[
            "solidworks",
            "autocad",
            "manufacturing",
            "design",
            "mechanical",
        ],
        1.0,
    ),
    role(
        "Electrical Engineer",
        &[
            "electrical engineer",
            "electronics engineer",
            "power engineer",
        ],
        &[
            "circuit design",
            "power systems",
            "electronics",
            "embedded systems",
        ],
        1.0,
    ),
    // ── Internships & entry level ───────────────────────────────────────────
    role(
        "Software Intern",
        &["software intern", "developer intern", "engineering intern"],
        &["internship", "student", "fresher", "entry level"],
        0.8,
    ),
    role(
        "Data Science Intern",
        &["data science intern", "ml intern", "analytics intern"],
        &["internship", "python", "data analysis", "machine learning"],
        0.8,
    ),
    role(
        "Marketing Intern",
        &["marketing intern", "digital marketing intern"],
        &["internship", "social media", "content", "campaigns"],
        0.8,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn find_role(name: &str) -> Option<&'static RoleDefinition> {
        ROLE_TAXONOMY.iter().find(|r| r.name == name)
    }

    #[test]
    fn test_role_names_are_unique() {
        let names: HashSet<&str> = ROLE_TAXONOMY.iter().map(|r| r.name).collect();
        assert_eq!(names.len(), ROLE_TAXONOMY.len());
    }

    #[test]
    fn test_taxonomy_has_forty_one_roles() {
        assert_eq!(ROLE_TAXONOMY.len(), 41);
    }

    #[test]
    fn test_weights_are_positive() {
        for r in ROLE_TAXONOMY {
            assert!(r.weight > 0.0, "{} has non-positive weight", r.name);
        }
    }

    #[test]
    fn test_terms_are_lowercase_and_trimmed() {
        for r in ROLE_TAXONOMY {
            for term in r.primary_terms.iter().chain(r.secondary_terms) {
                assert_eq!(*term, term.to_lowercase(), "{} in {}", term, r.name);
                assert_eq!(*term, term.trim(), "{} in {}", term, r.name);
                assert!(!term.is_empty());
            }
        }
    }

    #[test]
    fn test_every_role_has_primary_terms() {
        assert!(ROLE_TAXONOMY.iter().all(|r| !r.primary_terms.is_empty()));
    }

    #[test]
    fn test_non_default_weights() {
        assert_eq!(find_role("Full Stack Developer").unwrap().weight, 1.2);
        assert_eq!(find_role("Software Engineer").unwrap().weight, 0.9);
        for intern in ["Software Intern", "Data Science Intern", "Marketing Intern"] {
            assert_eq!(find_role(intern).unwrap().weight, 0.8);
        }
    }

    #[test]
    fn test_find_role_unknown_is_none() {
        assert!(find_role("Astronaut").is_none());
    }
}
