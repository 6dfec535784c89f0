//! Skill Analysis Types
//!
//! Core data structures shared by the skill gap calculator, the roadmap
//! normalizer and the roadmap orchestrator. Field names serialize in
//! camelCase, which is the shape the frontend and the AI service both use.

use serde::{Deserialize, Serialize};

// ============================================================
// SKILL GAP
// ============================================================

/// Result of comparing a role's required skills with a user's selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapResult {
    /// Always in 0..=100
    pub match_percentage: u8,
    /// Required skills the user already has (requirement order)
    pub matching_skills: Vec<String>,
    /// Required skills the user is missing (requirement order)
    pub missing_skills: Vec<String>,
}

impl SkillGapResult {
    pub fn empty() -> Self {
        Self::default()
    }
}

// ============================================================
// ROADMAP STEP
// ============================================================

/// Kind of learning resource a step points to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResourceType {
    Video,
    Site,
}

impl ResourceType {
    /// Anything other than exactly "VIDEO" is a site resource
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("VIDEO") => ResourceType::Video,
            _ => ResourceType::Site,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Video => "VIDEO",
            ResourceType::Site => "SITE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Case-insensitive parse; unknown labels yield `None`
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }
}

/// A single, fully-populated step in a learning roadmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStep {
    /// Position in the roadmap, 1..N with no gaps
    pub id: u32,
    pub skill_name: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub description: String,
    /// Week range such as "2-3 weeks"
    pub estimated_time: String,
    pub difficulty: Difficulty,
    /// Verified reachable or drawn from the fallback tables
    pub link: String,
}

// ============================================================
// ROADMAP RESULT
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletionStatus {
    #[serde(rename = "No role selected")]
    NoRoleSelected,
    #[serde(rename = "complete")]
    Complete,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "error")]
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapMetadata {
    pub total_steps: usize,
    /// Aggregate duration, e.g. "9 weeks"
    pub estimated_time: String,
    pub completion_status: CompletionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills_to_learn: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_skills: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RoadmapMetadata {
    fn empty(status: CompletionStatus) -> Self {
        Self {
            total_steps: 0,
            estimated_time: "0 weeks".to_string(),
            completion_status: status,
            skills_to_learn: None,
            current_skills: None,
            target_role: None,
            message: None,
        }
    }
}

/// Envelope returned by roadmap generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapResult {
    pub success: bool,
    pub roadmap: Vec<RoadmapStep>,
    pub metadata: RoadmapMetadata,
    /// Present only when `success` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RoadmapResult {
    pub fn no_role() -> Self {
        Self {
            success: false,
            roadmap: Vec::new(),
            metadata: RoadmapMetadata::empty(CompletionStatus::NoRoleSelected),
            error: Some("Invalid or missing job role".to_string()),
        }
    }

    pub fn complete() -> Self {
        let mut metadata = RoadmapMetadata::empty(CompletionStatus::Complete);
        metadata.message =
            Some("You already have all the essential skills for this role!".to_string());
        Self {
            success: true,
            roadmap: Vec::new(),
            metadata,
            error: None,
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            roadmap: Vec::new(),
            metadata: RoadmapMetadata::empty(CompletionStatus::Error),
            error: Some("Failed to generate roadmap. Please try again.".to_string()),
        }
    }
}

// ============================================================
// JOB SUGGESTIONS
// ============================================================

/// A suggested job opening for the target role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSuggestion {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary_range: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub experience_level: String,
    pub apply_url: String,
}
