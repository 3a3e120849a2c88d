//! Portfolio owner profile.
//!
//! Personas and fallback templates quote these facts. The built-in profile is
//! the site's own content; a YAML file can replace any subset of fields:
//!
//! ```yaml
//! owner_name: Jane Doe
//! contact: You can reach Jane at jane@example.com.
//! ```

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Name used in every persona ("You are <name>'s AI assistant").
    pub owner_name: String,
    /// Curated biography embedded in the career-story persona.
    pub biography: String,
    /// Areas of expertise embedded in the tech-discussion persona.
    pub expertise: String,
    /// One-paragraph summaries used by the offline fallback templates.
    pub experience_summary: String,
    pub skills_summary: String,
    pub projects_summary: String,
    pub contact: String,
}

impl Profile {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            owner_name: "Danial Bhatti".to_string(),
            biography: DEFAULT_BIOGRAPHY.to_string(),
            expertise: DEFAULT_EXPERTISE.to_string(),
            experience_summary: "Danial is a Computer Science student at Pace University with 3 \
                internships in software engineering and AI, including work at KLYR Media, \
                StudyFetch, and Total Construction Corp. He's passionate about building \
                AI-powered solutions and has experience with React, Python, Node.js, and \
                machine learning."
                .to_string(),
            skills_summary: "Danial's key skills include: React, Next.js, TypeScript, Python, \
                Node.js, AI/ML, OpenAI API, LangChain, AWS, and Docker. He's built multiple \
                full-stack applications and AI-powered tools."
                .to_string(),
            projects_summary: "Danial has built 25+ projects including AI-powered educational \
                tools, full-stack web applications, and machine learning models. Check out his \
                GitHub at github.com/DanialB7220 for more details!"
                .to_string(),
            contact: "You can reach Danial at daao165@gmail.com or connect with him on LinkedIn \
                at linkedin.com/in/danial-bhatti-7b9a9728a/."
                .to_string(),
        }
    }
}

const DEFAULT_BIOGRAPHY: &str = "EDUCATION: B.S. Computer Science at Pace University's Honors College (3.62/4.0 GPA), Economics Minor

INTERNSHIPS:
1. KLYR Media (May-July 2025) - Software Engineer & AI Intern in NYC
   - Built ML models with Python, TensorFlow, scikit-learn
   - Full-stack development with React, Node.js, REST APIs
   - Data cleaning/visualization, 40% efficiency improvement

2. StudyFetch (Feb-May 2025) - Software Engineer & AI Intern in NYC
   - Built 3 AI-powered educational tools with MERN stack for 5000+ users
   - Created AI tutoring assistant with OpenAI LLMs, LangChain, RAG
   - RESTful APIs for user-generated content at scale
   - Worked with Department of Education, 20+ team members

3. Total Construction Corp (Sept 2023-Feb 2024) - Software Engineer & Finance Intern in NYC
   - MERN stack implementations with non-technical stakeholders
   - 90% increase in client outreach efficiency through automation
   - JWT auth, Express middleware, role-based access

LEADERSHIP:
- Co-Founder & Treasurer of Software Engineering Club (Sept 2023-Present)
- VP of Entrepreneurship at United Pakistani Students & Alumni Association
- Organized 10+ technical workshops, 200% engagement increase

SKILLS: React, Next.js, TypeScript, Python, Node.js, AI/ML, OpenAI API, LangChain, AWS, Docker";

const DEFAULT_EXPERTISE: &str = "- Full-stack development (React, Next.js, Node.js, Python)
- AI/ML (OpenAI API, LangChain, TensorFlow, RAG pipelines)
- Cloud technologies (AWS, Docker, Vercel)
- Modern development practices (TypeScript, Git, CI/CD)";
