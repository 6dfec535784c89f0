//! Roadmap Normalizer
//!
//! Turns loosely-typed step candidates from the AI service into complete
//! [`RoadmapStep`]s. Every field gets a default when it is absent, empty or
//! of the wrong JSON type, and every link is either verified reachable or
//! replaced by a fallback.

use super::fallback::fallback_link;
use super::link_validator::LinkValidator;
use super::types::{Difficulty, ResourceType, RoadmapStep};
use crate::ai::str_field;
use futures::future::join_all;
use log::warn;
use serde_json::Value;
use std::sync::Arc;

pub const DEFAULT_DESCRIPTION: &str = "Complete this learning objective";
pub const DEFAULT_ESTIMATED_TIME: &str = "1-2 weeks";

pub struct RoadmapNormalizer {
    validator: Arc<LinkValidator>,
}

impl RoadmapNormalizer {
    pub fn new(validator: Arc<LinkValidator>) -> Self {
        Self { validator }
    }

    /// Never fails. Output order equals input order and ids run 1..N.
    pub async fn normalize<S: AsRef<str>>(&self, raw_steps: &[Value], missing_skills: &[S]) -> Vec<RoadmapStep> {
        let pending = raw_steps.iter().enumerate().map(|(index, raw)| {
            let fallback_skill = missing_skills.get(index).map(AsRef::as_ref);
            self.normalize_step(index, raw, fallback_skill)
        });

        join_all(pending).await
    }

    async fn normalize_step(&self, index: usize, raw: &Value, fallback_skill: Option<&str>) -> RoadmapStep {
        let skill_name = match str_field(raw, "skillName") {
            Some(name) => name.to_string(),
            None => format!("Learn {}", fallback_skill.unwrap_or("New Skill")),
        };
        let resource_type = ResourceType::from_raw(raw.get("type").and_then(Value::as_str));

        let verified = match str_field(raw, "link") {
            Some(candidate) => self
                .validator
                .is_valid(candidate)
                .await
                .then(|| candidate.to_string()),
            None => None,
        };
        let link = verified.unwrap_or_else(|| {
            let link = fallback_link(&skill_name, resource_type);
            warn!(
                "Using fallback {} link for {}: {}",
                resource_type.as_str(),
                skill_name,
                link
            );
            link
        });

        RoadmapStep {
            id: (index + 1) as u32,
            skill_name,
            resource_type,
            description: str_field(raw, "description")
                .unwrap_or(DEFAULT_DESCRIPTION)
                .to_string(),
            estimated_time: str_field(raw, "estimatedTime")
                .unwrap_or(DEFAULT_ESTIMATED_TIME)
                .to_string(),
            difficulty: str_field(raw, "difficulty")
                .and_then(Difficulty::parse)
                .unwrap_or_default(),
            link,
        }
    }
}
