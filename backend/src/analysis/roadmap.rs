//! Roadmap Orchestrator
//!
//! Drives one roadmap generation: resolves the role, checks whether anything
//! is missing, asks the AI service for steps and normalizes them.
//!
//! States:
//! - NoRole: role absent or unknown
//! - Complete: nothing missing for the role
//! - Ready: normalized steps plus metadata
//! - Failed: provider error, timeout or unparseable reply
//!
//! Each call is independent. Nothing is merged between calls, so a caller
//! that issues overlapping requests keeps whichever result matches its
//! latest input.

use super::catalog::RoleSkillCatalog;
use super::fallback::fallback_link;
use super::normalizer::RoadmapNormalizer;
use super::skill_gap::compute_match;
use super::types::{CompletionStatus, Difficulty, ResourceType, RoadmapMetadata, RoadmapResult, RoadmapStep};
use crate::ai::prompts::roadmap_prompt;
use crate::ai::{parse_json_array, AiError, CompletionOptions, CompletionProvider};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Weeks assumed for a step whose estimate has no number in it
const UNPARSEABLE_STEP_WEEKS: f64 = 2.0;

static WEEK_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*(?:[-–]\s*(\d+))?").expect("valid week range regex"));

#[derive(Debug, Clone)]
pub struct RoadmapConfig {
    pub generation_timeout: Duration,
    /// Build steps straight from the missing skills when generation fails
    pub static_fallback: bool,
}

impl Default for RoadmapConfig {
    fn default() -> Self {
        Self {
            generation_timeout: DEFAULT_GENERATION_TIMEOUT,
            static_fallback: false,
        }
    }
}

pub struct RoadmapOrchestrator {
    catalog: Arc<RoleSkillCatalog>,
    provider: Arc<dyn CompletionProvider>,
    normalizer: RoadmapNormalizer,
    config: RoadmapConfig,
}

impl RoadmapOrchestrator {
    pub fn new(
        catalog: Arc<RoleSkillCatalog>,
        provider: Arc<dyn CompletionProvider>,
        normalizer: RoadmapNormalizer,
        config: RoadmapConfig,
    ) -> Self {
        Self {
            catalog,
            provider,
            normalizer,
            config,
        }
    }

    pub async fn generate_roadmap<S: AsRef<str>>(&self, selected: &[S], role: Option<&str>) -> RoadmapResult {
        let role = match role.filter(|r| self.catalog.contains_role(r)) {
            Some(role) => role,
            None => return RoadmapResult::no_role(),
        };

        let required = self.catalog.required_skills(role);
        let gap = compute_match(required, selected);
        if gap.missing_skills.is_empty() {
            info!("Nothing missing for {}", role);
            return RoadmapResult::complete();
        }

        let current = distinct(selected);
        let role_name = self.catalog.role_display_name(role);
        let current_names = self.catalog.display_names(&current);
        let missing_names = self.catalog.display_names(&gap.missing_skills);

        let steps = match self
            .request_steps(&role_name, &current_names, &self.catalog.display_names(required), &missing_names)
            .await
        {
            Ok(raw) => self.normalizer.normalize(&raw, &missing_names).await,
            Err(e) => {
                warn!("Roadmap generation failed for {}: {}", role, e);
                if !self.config.static_fallback {
                    return RoadmapResult::failed();
                }
                static_roadmap(&missing_names)
            }
        };

        info!("Generated {}-step roadmap for {}", steps.len(), role_name);
        ready(steps, missing_names.len(), current.len(), role_name)
    }

    async fn request_steps(
        &self,
        role_name: &str,
        current: &[String],
        required: &[String],
        missing: &[String],
    ) -> Result<Vec<serde_json::Value>, AiError> {
        let prompt = roadmap_prompt(role_name, current, required, missing);
        debug!("Roadmap prompt:\n{}", prompt);

        let reply = tokio::time::timeout(
            self.config.generation_timeout,
            self.provider.complete(&prompt, &CompletionOptions::default()),
        )
        .await
        .map_err(|_| AiError::Timeout)??;

        parse_json_array(&reply)
    }
}

fn ready(steps: Vec<RoadmapStep>, skills_to_learn: usize, current_skills: usize, target_role: String) -> RoadmapResult {
    RoadmapResult {
        success: true,
        metadata: RoadmapMetadata {
            total_steps: steps.len(),
            estimated_time: format!("{} weeks", total_weeks(&steps)),
            completion_status: CompletionStatus::InProgress,
            skills_to_learn: Some(skills_to_learn),
            current_skills: Some(current_skills),
            target_role: Some(target_role),
            message: None,
        },
        roadmap: steps,
        error: None,
    }
}

/// Distinct skills in first-seen order
fn distinct<S: AsRef<str>>(selected: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    selected
        .iter()
        .map(AsRef::as_ref)
        .filter(|skill| seen.insert(*skill))
        .map(str::to_string)
        .collect()
}

/// Weeks for one estimate: "N" is N, "A-B" is the midpoint
pub fn step_weeks(estimated_time: &str) -> f64 {
    match WEEK_RANGE.captures(estimated_time) {
        Some(caps) => {
            let low: f64 = caps[1].parse().unwrap_or(UNPARSEABLE_STEP_WEEKS);
            match caps.get(2).and_then(|m| m.as_str().parse::<f64>().ok()) {
                Some(high) => (low + high) / 2.0,
                None => low,
            }
        }
        None => UNPARSEABLE_STEP_WEEKS,
    }
}

pub fn total_weeks(steps: &[RoadmapStep]) -> u64 {
    let sum: f64 = steps.iter().map(|s| step_weeks(&s.estimated_time)).sum();
    sum.ceil() as u64
}

/// One step per missing skill, alternating video and site resources
pub fn static_roadmap<S: AsRef<str>>(missing: &[S]) -> Vec<RoadmapStep> {
    missing
        .iter()
        .map(AsRef::as_ref)
        .enumerate()
        .map(|(index, skill)| {
            let resource_type = if index % 2 == 0 {
                ResourceType::Video
            } else {
                ResourceType::Site
            };
            RoadmapStep {
                id: (index + 1) as u32,
                skill_name: format!("Learn {}", capitalize(skill)),
                resource_type,
                description: format!("Master the fundamentals of {}", skill),
                estimated_time: "2-3 weeks".to_string(),
                difficulty: Difficulty::Intermediate,
                link: fallback_link(&format!("Learn {}", skill), resource_type),
            }
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
