//! Role & Skill Catalog
//!
//! Immutable lookup tables: role id -> required skill ids, and
//! skill id -> display name. Built once at startup, either from the
//! built-in tables or from a JSON file.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

const BUILTIN_ROLES: &[(&str, &[&str])] = &[
    (
        "frontend-developer",
        &["javascript", "typescript", "react", "html", "css", "git", "figma"],
    ),
    (
        "backend-developer",
        &["nodejs", "python", "java", "sql", "mongodb", "rest-api", "git"],
    ),
    (
        "fullstack-developer",
        &[
            "javascript",
            "typescript",
            "react",
            "nodejs",
            "sql",
            "mongodb",
            "rest-api",
            "git",
        ],
    ),
    (
        "data-scientist",
        &[
            "python",
            "machine-learning",
            "data-analysis",
            "sql",
            "tensorflow",
            "pytorch",
        ],
    ),
    (
        "machine-learning-engineer",
        &[
            "python",
            "tensorflow",
            "pytorch",
            "machine-learning",
            "data-analysis",
            "aws",
        ],
    ),
    (
        "devops-engineer",
        &["aws", "docker", "kubernetes", "git", "nodejs", "python"],
    ),
    (
        "ui-ux-designer",
        &["figma", "adobe-creative-suite", "javascript", "react"],
    ),
    ("product-manager", &["agile", "data-analysis", "sql"]),
    (
        "software-architect",
        &["javascript", "nodejs", "python", "java", "aws", "docker", "sql"],
    ),
    (
        "mobile-developer",
        &["javascript", "typescript", "react", "nodejs", "git"],
    ),
];

const BUILTIN_SKILLS: &[(&str, &str)] = &[
    ("javascript", "JavaScript Fundamentals"),
    ("typescript", "TypeScript"),
    ("react", "React Framework"),
    ("nodejs", "Node.js & Express"),
    ("python", "Python Programming"),
    ("java", "Java Development"),
    ("sql", "Database Design & SQL"),
    ("mongodb", "MongoDB & NoSQL"),
    ("rest-api", "REST API Development"),
    ("git", "Git Version Control"),
    ("aws", "AWS Cloud Platform"),
    ("docker", "Docker Containerization"),
    ("kubernetes", "Kubernetes Orchestration"),
    ("machine-learning", "Machine Learning Concepts"),
    ("data-analysis", "Data Analysis & Visualization"),
    ("tensorflow", "TensorFlow Framework"),
    ("pytorch", "PyTorch Framework"),
    ("figma", "Figma Design Tool"),
    ("adobe-creative-suite", "Adobe Creative Suite"),
    ("agile", "Agile/Scrum Methodology"),
    ("html", "HTML & Semantic Markup"),
    ("css", "CSS & Responsive Design"),
];

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Duplicate role id: {0}")]
    DuplicateRole(String),
}

// ============================================================
// CATALOG FILE FORMAT
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleDefinition {
    pub id: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDefinition {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    roles: Vec<RoleDefinition>,
    #[serde(default)]
    skills: Vec<SkillDefinition>,
}

/// Summary of a role for the frontend's role picker
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleInfo {
    pub id: String,
    pub name: String,
    pub required_skills: Vec<String>,
    pub required_skills_display: Vec<String>,
}

// ============================================================
// CATALOG
// ============================================================

#[derive(Debug, Clone)]
pub struct RoleSkillCatalog {
    /// Roles in definition order
    roles: Vec<RoleDefinition>,
    role_index: HashMap<String, usize>,
    /// Skills in definition order
    skills: Vec<SkillDefinition>,
    skill_names: HashMap<String, String>,
}

impl RoleSkillCatalog {
    pub fn new(
        roles: Vec<RoleDefinition>,
        skills: Vec<SkillDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for role in &roles {
            if !seen.insert(role.id.as_str()) {
                return Err(CatalogError::DuplicateRole(role.id.clone()));
            }
        }
        Ok(Self::from_parts(roles, skills))
    }

    /// Role ids must already be unique
    fn from_parts(roles: Vec<RoleDefinition>, skills: Vec<SkillDefinition>) -> Self {
        let roles: Vec<RoleDefinition> = roles
            .into_iter()
            .map(|mut role| {
                let mut seen = HashSet::new();
                role.skills.retain(|s| seen.insert(s.clone()));
                role
            })
            .collect();
        let role_index = roles
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();
        let skill_names = skills
            .iter()
            .map(|s| (s.id.clone(), s.name.clone()))
            .collect();

        Self {
            roles,
            role_index,
            skills,
            skill_names,
        }
    }

    /// The catalog shipped with the application
    pub fn builtin() -> Self {
        let roles = BUILTIN_ROLES
            .iter()
            .map(|(id, skills)| RoleDefinition {
                id: id.to_string(),
                skills: skills.iter().map(|s| s.to_string()).collect(),
            })
            .collect();
        let skills = BUILTIN_SKILLS
            .iter()
            .map(|(id, name)| SkillDefinition {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect();

        Self::from_parts(roles, skills)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.roles, file.skills)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn contains_role(&self, role: &str) -> bool {
        self.role_index.contains_key(role)
    }

    /// Required skills for a role; empty for unknown roles
    pub fn required_skills(&self, role: &str) -> &[String] {
        self.role_index
            .get(role)
            .map(|&i| self.roles[i].skills.as_slice())
            .unwrap_or(&[])
    }

    pub fn display_name(&self, skill: &str) -> String {
        match self.skill_names.get(skill) {
            Some(name) => name.clone(),
            None => title_case(skill),
        }
    }

    pub fn display_names<S: AsRef<str>>(&self, skills: &[S]) -> Vec<String> {
        skills.iter().map(|s| self.display_name(s.as_ref())).collect()
    }

    pub fn role_display_name(&self, role: &str) -> String {
        title_case(role)
    }

    pub fn role_info(&self, role: Option<&str>) -> RoleInfo {
        match role {
            Some(role) => {
                let required = self.required_skills(role).to_vec();
                RoleInfo {
                    id: role.to_string(),
                    name: self.role_display_name(role),
                    required_skills_display: self.display_names(&required),
                    required_skills: required,
                }
            }
            None => RoleInfo {
                id: String::new(),
                name: "Unknown Role".to_string(),
                required_skills: Vec::new(),
                required_skills_display: Vec::new(),
            },
        }
    }

    pub fn roles(&self) -> impl Iterator<Item = &RoleDefinition> {
        self.roles.iter()
    }

    pub fn skills(&self) -> impl Iterator<Item = &SkillDefinition> {
        self.skills.iter()
    }
}

impl Default for RoleSkillCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// "machine-learning-engineer" -> "Machine Learning Engineer"
pub fn title_case(id: &str) -> String {
    id.split(|c: char| c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
